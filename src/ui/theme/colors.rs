//! Color palette and frame helpers for the launcher UI.

use eframe::egui::{self, Color32, Stroke};

pub const BG_DARK: Color32 = Color32::from_rgb(15, 17, 23);
pub const BG_MID: Color32 = Color32::from_rgb(22, 25, 33);
pub const BG_LIGHT: Color32 = Color32::from_rgb(38, 43, 56);

pub const ACCENT: Color32 = Color32::from_rgb(108, 156, 255);
pub const ACCENT_DIM: Color32 = Color32::from_rgb(62, 84, 130);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(228, 231, 238);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(168, 174, 188);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(110, 116, 130);

pub const SUCCESS: Color32 = Color32::from_rgb(118, 199, 122);
pub const WARNING: Color32 = Color32::from_rgb(222, 170, 62);
pub const ERROR: Color32 = Color32::from_rgb(222, 96, 96);

/// Stroke drawn around the keyboard/gamepad-hovered control.
pub fn focus_stroke() -> Stroke {
    Stroke::new(2.0, ACCENT)
}

pub fn panel_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(BG_MID)
        .inner_margin(egui::Margin::same(8))
        .stroke(Stroke::new(1.0, BG_LIGHT))
}

pub fn card_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(BG_LIGHT.gamma_multiply(0.5))
        .corner_radius(4.0)
        .inner_margin(egui::Margin::symmetric(8, 6))
}

/// Apply the dark theme and install the icon font.
pub fn apply_theme(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);

    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_DARK;
    visuals.window_fill = BG_MID;
    visuals.window_stroke = Stroke::new(1.0, BG_LIGHT);
    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.selection.bg_fill = ACCENT_DIM;
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.inactive.bg_fill = BG_LIGHT;
    visuals.widgets.hovered.bg_fill = BG_LIGHT.gamma_multiply(1.3);
    visuals.widgets.active.bg_fill = ACCENT_DIM;
    ctx.set_visuals(visuals);
}
