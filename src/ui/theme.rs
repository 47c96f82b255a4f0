pub mod colors;

// Re-export all colors and functions
pub use colors::{
    apply_theme, card_frame, focus_stroke, panel_frame, ACCENT, ACCENT_DIM, BG_DARK, BG_LIGHT,
    BG_MID, ERROR, SUCCESS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY, WARNING,
};
