//! Pane contract for the settings screen.
//!
//! A pane declares how many navigable items it shows, handles directional
//! input against that layout, and renders into the options region. The
//! shell owns the hovered-item cursor and calls `on_open` whenever the
//! pane becomes the visible one.

use eframe::egui::Ui;

use crate::settings::StreamSettings;
use crate::ui::nav::types::{NavCursor, NavDirection, NavEvent, PaneMode};

/// State a pane is given access to while it runs.
pub struct PaneCtx<'a> {
    pub stream: &'a mut StreamSettings,
}

pub trait Pane {
    /// Number of navigable items in this pane's layout.
    fn item_count(&self) -> usize;

    /// Reset transient pane state when the pane becomes visible.
    fn on_open(&mut self, _ctx: &mut PaneCtx) {}

    /// Whether a combo overlay currently owns input.
    fn mode(&self) -> PaneMode {
        PaneMode::Normal
    }

    /// Handle a directional event. Returns whether it was consumed;
    /// unconsumed events propagate to the parent scope.
    fn handle_navigation(&mut self, ctx: &mut PaneCtx, event: NavEvent, cursor: &mut NavCursor)
        -> bool;

    /// Step the open overlay's internal selection. Only meaningful while
    /// `mode()` is `OverlayActive`.
    fn overlay_step(&mut self, _direction: NavDirection) {}

    /// Activate the hovered item (open a combo, or commit the overlay's
    /// current selection while one is open).
    fn activate(&mut self, _ctx: &mut PaneCtx, _cursor: &NavCursor) {}

    /// Dismiss the open overlay, if any. Returns whether one was closed.
    fn back(&mut self) -> bool {
        false
    }

    fn render(&mut self, ui: &mut Ui, ctx: &mut PaneCtx, cursor: &NavCursor);
}
