pub mod components;
pub mod nav;
pub mod pane;
pub mod theme;

/// Application page/view
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum MenuPage {
    Hosts,    // Launcher view: host list, pairing, applications
    Settings, // Stream settings
}

// Re-exports
pub use nav::types::{NavCursor, NavDirection, NavEvent, NavPhase, PaneMode};
pub use pane::{Pane, PaneCtx};
