//! About pane. No navigable items; directional input falls through to
//! the category list.

use eframe::egui::{RichText, Ui};

use crate::ui::nav::types::{NavCursor, NavEvent};
use crate::ui::pane::{Pane, PaneCtx};
use crate::ui::theme;

pub struct AboutPane;

impl AboutPane {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AboutPane {
    fn default() -> Self {
        Self::new()
    }
}

impl Pane for AboutPane {
    fn item_count(&self) -> usize {
        0
    }

    fn handle_navigation(
        &mut self,
        _ctx: &mut PaneCtx,
        _event: NavEvent,
        _cursor: &mut NavCursor,
    ) -> bool {
        false
    }

    fn render(&mut self, ui: &mut Ui, _ctx: &mut PaneCtx, _cursor: &NavCursor) {
        ui.add_space(4.0);
        ui.label(RichText::new("Beamcast").strong().size(18.0));
        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
        ui.add_space(8.0);
        ui.label(
            RichText::new("Stream games from your own machines. Pair a host from the Computers page to get started.")
                .color(theme::TEXT_SECONDARY),
        );
    }
}
