//! Keyboard navigation capture.
//!
//! Arrow keys become directional `NavEvent`s with press/repeat/release
//! phases and input-stream timestamps; Enter activates, Escape backs out,
//! Tab cycles pages. Events a page consumes are filtered out of the raw
//! input so egui widgets do not see them a second time.

use eframe::egui::{self, Key};

use super::app::Beamcast;
use crate::session::PairingState;
use crate::ui::nav::grid::step_wrapped;
use crate::ui::nav::types::{NavDirection, NavEvent, NavPhase};
use crate::ui::pane::PaneCtx;
use crate::ui::MenuPage;

enum NavAction {
    Direction(NavEvent),
    Accept,
    Back,
    CyclePage,
}

impl Beamcast {
    pub(crate) fn handle_nav_keys(&mut self, raw_input: &mut egui::RawInput) {
        let timestamp_ms = (raw_input.time.unwrap_or(0.0) * 1000.0) as u64;

        let mut actions: Vec<NavAction> = Vec::new();
        for event in &raw_input.events {
            if let egui::Event::Key { key, pressed, repeat, .. } = event {
                let direction = match key {
                    Key::ArrowUp => Some(NavDirection::Up),
                    Key::ArrowDown => Some(NavDirection::Down),
                    Key::ArrowLeft => Some(NavDirection::Left),
                    Key::ArrowRight => Some(NavDirection::Right),
                    _ => None,
                };
                if let Some(direction) = direction {
                    let phase = if !pressed {
                        NavPhase::Up
                    } else if *repeat {
                        NavPhase::Repeat
                    } else {
                        NavPhase::Down
                    };
                    actions.push(NavAction::Direction(NavEvent { direction, phase, timestamp_ms }));
                    continue;
                }
                if *pressed && !*repeat {
                    match key {
                        Key::Enter => actions.push(NavAction::Accept),
                        Key::Escape => actions.push(NavAction::Back),
                        Key::Tab => actions.push(NavAction::CyclePage),
                        _ => {}
                    }
                }
            }
        }

        let mut consumed_any = false;
        for action in actions {
            consumed_any |= self.apply_nav_action(action);
        }

        if consumed_any {
            raw_input.events.retain(|event| {
                !matches!(event, egui::Event::Key { key, .. }
                    if matches!(key, Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight | Key::Enter | Key::Escape | Key::Tab))
            });
        }
    }

    fn apply_nav_action(&mut self, action: NavAction) -> bool {
        match action {
            NavAction::CyclePage => {
                let next = match self.cur_page {
                    MenuPage::Hosts => MenuPage::Settings,
                    MenuPage::Settings => MenuPage::Hosts,
                };
                self.set_page(next);
                true
            }
            NavAction::Direction(event) => match self.cur_page {
                MenuPage::Hosts => self.handle_hosts_direction(event),
                MenuPage::Settings => {
                    let Beamcast { settings, config, .. } = self;
                    settings.handle_nav(&mut PaneCtx { stream: &mut config.stream }, event)
                }
            },
            NavAction::Accept => match self.cur_page {
                MenuPage::Hosts => self.handle_hosts_accept(),
                MenuPage::Settings => {
                    let Beamcast { settings, config, .. } = self;
                    settings.handle_accept(&mut PaneCtx { stream: &mut config.stream });
                    true
                }
            },
            NavAction::Back => match self.cur_page {
                MenuPage::Hosts => self.handle_hosts_back(),
                MenuPage::Settings => {
                    if !self.settings.handle_back() {
                        self.set_page(MenuPage::Hosts);
                    }
                    true
                }
            },
        }
    }

    fn handle_hosts_direction(&mut self, event: NavEvent) -> bool {
        // A pairing dialog owns input while it is up
        if self.session.pairing_blocks_input() {
            return true;
        }
        if self.host_dropdown_open {
            if event.phase == NavPhase::Down {
                self.host_dropdown_index = step_wrapped(
                    self.host_dropdown_index,
                    self.registry.hosts().len(),
                    event.direction,
                );
            }
            return true;
        }
        false
    }

    fn handle_hosts_accept(&mut self) -> bool {
        if self.session.pairing().state() == PairingState::Failed {
            self.session.acknowledge_failure();
            return true;
        }
        if self.session.pairing_blocks_input() {
            return true;
        }
        if self.host_dropdown_open {
            let index = self.host_dropdown_index;
            self.host_dropdown_open = false;
            self.select_host_at(index);
            return true;
        }
        if !self.registry.is_empty() {
            self.host_dropdown_index = self
                .session
                .current_selection()
                .and_then(|id| self.registry.hosts().iter().position(|h| h.id == id))
                .unwrap_or(0);
            self.host_dropdown_open = true;
            return true;
        }
        false
    }

    fn handle_hosts_back(&mut self) -> bool {
        if self.host_dropdown_open {
            self.host_dropdown_open = false;
            return true;
        }
        false
    }
}
