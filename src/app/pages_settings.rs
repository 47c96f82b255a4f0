//! Settings screen: category list on the left, the selected pane's
//! options on the right. Keyboard focus moves between the two regions;
//! the options region delegates to the pane contract.

mod about;
mod basic;

use eframe::egui::{RichText, Ui};

use crate::ui::nav::types::{NavCursor, NavDirection, NavEvent, NavPhase, PaneMode};
use crate::ui::pane::{Pane, PaneCtx};
use crate::ui::theme;

pub use about::AboutPane;
pub use basic::BasicPane;

/// Focus regions for the settings screen
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub enum SettingsFocus {
    #[default]
    Categories, // Left panel - category selection
    Options,    // Right panel - options for selected category
}

/// Settings category for left panel navigation
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub enum SettingsCategory {
    #[default]
    Basic,
    About,
}

impl SettingsCategory {
    pub const ALL: [SettingsCategory; 2] = [SettingsCategory::Basic, SettingsCategory::About];

    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Basic,
            1 => Self::About,
            _ => Self::Basic,
        }
    }

    pub fn to_index(self) -> usize {
        match self {
            Self::Basic => 0,
            Self::About => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Basic => "Stream",
            Self::About => "About",
        }
    }
}

pub struct SettingsPage {
    focus: SettingsFocus,
    category: SettingsCategory,
    cursor: NavCursor,
    basic: BasicPane,
    about: AboutPane,
}

impl Default for SettingsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsPage {
    pub fn new() -> Self {
        Self {
            focus: SettingsFocus::default(),
            category: SettingsCategory::default(),
            cursor: NavCursor::new(0),
            basic: BasicPane::new(),
            about: AboutPane::new(),
        }
    }

    fn current_pane_mut(&mut self) -> &mut dyn Pane {
        match self.category {
            SettingsCategory::Basic => &mut self.basic,
            SettingsCategory::About => &mut self.about,
        }
    }

    /// Re-sync the visible pane when the settings screen is entered or
    /// the category changes.
    pub fn on_enter(&mut self, ctx: &mut PaneCtx) {
        let pane = self.current_pane_mut();
        pane.on_open(ctx);
        let count = pane.item_count();
        self.cursor = NavCursor::new(count);
    }

    fn select_category(&mut self, ctx: &mut PaneCtx, category: SettingsCategory) {
        if self.category != category {
            self.category = category;
            self.on_enter(ctx);
        }
    }

    /// Directional input for the settings screen. Returns whether the
    /// event was consumed.
    pub fn handle_nav(&mut self, ctx: &mut PaneCtx, event: NavEvent) -> bool {
        match self.focus {
            SettingsFocus::Categories => match event.direction {
                NavDirection::Up | NavDirection::Down => {
                    if event.phase == NavPhase::Down {
                        let idx = self.category.to_index();
                        let next = match event.direction {
                            NavDirection::Up => idx.saturating_sub(1),
                            _ => (idx + 1).min(SettingsCategory::ALL.len() - 1),
                        };
                        self.select_category(ctx, SettingsCategory::from_index(next));
                    }
                    true
                }
                NavDirection::Right => {
                    if event.phase == NavPhase::Down && self.cursor.count() > 0 {
                        self.focus = SettingsFocus::Options;
                    }
                    true
                }
                NavDirection::Left => false,
            },
            SettingsFocus::Options => {
                let Self { focus, category, cursor, basic, about } = self;
                let pane: &mut dyn Pane = match category {
                    SettingsCategory::Basic => basic,
                    SettingsCategory::About => about,
                };

                // An open combo overlay owns its own navigation; the pane
                // itself just swallows the event.
                if pane.mode() == PaneMode::OverlayActive {
                    if event.phase == NavPhase::Down {
                        pane.overlay_step(event.direction);
                    }
                    return true;
                }

                let consumed = pane.handle_navigation(ctx, event, cursor);
                if !consumed {
                    // Walking off the pane's left edge returns to the
                    // category list.
                    if event.direction == NavDirection::Left {
                        if event.phase == NavPhase::Up {
                            *focus = SettingsFocus::Categories;
                        }
                        return true;
                    }
                }
                consumed
            }
        }
    }

    pub fn handle_accept(&mut self, ctx: &mut PaneCtx) {
        match self.focus {
            SettingsFocus::Categories => {
                if self.cursor.count() > 0 {
                    self.focus = SettingsFocus::Options;
                }
            }
            SettingsFocus::Options => {
                let cursor = self.cursor;
                self.current_pane_mut().activate(ctx, &cursor);
            }
        }
    }

    /// Returns whether back was consumed within the settings screen.
    pub fn handle_back(&mut self) -> bool {
        match self.focus {
            SettingsFocus::Categories => false,
            SettingsFocus::Options => {
                if !self.current_pane_mut().back() {
                    self.focus = SettingsFocus::Categories;
                }
                true
            }
        }
    }

    pub fn render(&mut self, ui: &mut Ui, ctx: &mut PaneCtx) {
        ui.horizontal_top(|ui| {
            // Category list
            ui.vertical(|ui| {
                ui.set_width(140.0);
                ui.add_space(4.0);
                for category in SettingsCategory::ALL {
                    let selected = self.category == category;
                    let mut text = RichText::new(category.label());
                    if selected && self.focus == SettingsFocus::Categories {
                        text = text.color(theme::ACCENT);
                    }
                    if ui.selectable_label(selected, text).clicked() {
                        self.select_category(ctx, category);
                        self.focus = SettingsFocus::Options;
                    }
                }
            });

            ui.separator();

            ui.vertical(|ui| {
                let focused = self.focus == SettingsFocus::Options;
                let cursor = self.cursor;
                match self.category {
                    SettingsCategory::Basic => {
                        self.basic.render_with_focus(ui, ctx, &cursor, focused)
                    }
                    SettingsCategory::About => self.about.render(ui, ctx, &cursor),
                }
            });
        });
    }
}
