//! Launcher page: host selection, pairing flow, application list.

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular as icons;

use super::app::Beamcast;
use crate::session::PairingState;
use crate::ui::components::dropdown::{dropdown, DropdownItem};
use crate::ui::theme;

impl Beamcast {
    pub fn display_page_hosts(&mut self, ui: &mut Ui) {
        ui.add_space(4.0);
        self.display_host_picker(ui);
        self.display_add_host(ui);
        ui.add_space(4.0);
        ui.separator();
        ui.add_space(4.0);
        self.display_application_list(ui);
    }

    fn display_host_picker(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Computer").color(theme::TEXT_SECONDARY));

            let selection = self.session.current_selection();
            let items: Vec<DropdownItem> = self
                .registry
                .hosts()
                .iter()
                .map(|host| {
                    let label = if host.paired {
                        format!("{} {}", icons::DESKTOP, host.display_name())
                    } else {
                        format!("{} {} (not paired)", icons::LOCK, host.display_name())
                    };
                    DropdownItem::new(label, selection == Some(host.id))
                })
                .collect();

            let button_text = self
                .session
                .selected_host(&self.registry)
                .map(|host| host.display_name().to_string())
                .unwrap_or_else(|| "Select computer".to_string());

            let resp = dropdown(
                ui,
                "host_list",
                &button_text,
                220.0,
                &items,
                true,
                self.host_dropdown_open,
                self.host_dropdown_index,
            );
            if resp.toggled {
                self.host_dropdown_open = !self.host_dropdown_open;
            }
            if let Some(index) = resp.chosen {
                self.host_dropdown_open = false;
                self.select_host_at(index);
            }
        });
    }

    fn display_add_host(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Add host").color(theme::TEXT_SECONDARY));
            let edit = ui.add(
                egui::TextEdit::singleline(&mut self.host_add_buffer)
                    .hint_text("IP address or hostname")
                    .desired_width(200.0),
            );
            let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button(format!("{} Add", icons::PLUS)).clicked() || submitted {
                self.add_host_from_input();
            }
        });
    }

    fn display_application_list(&mut self, ui: &mut Ui) {
        let Some(host) = self.session.selected_host(&self.registry) else {
            ui.label(RichText::new("Not selected").color(theme::TEXT_MUTED));
            return;
        };

        match &host.apps {
            None => {
                ui.horizontal(|ui| {
                    ui.add(egui::widgets::Spinner::new().size(16.0));
                    ui.label(RichText::new("Loading applications...").color(theme::TEXT_SECONDARY));
                });
            }
            Some(apps) if apps.is_empty() => {
                ui.label(
                    RichText::new("This host shares no applications.").color(theme::TEXT_MUTED),
                );
            }
            Some(apps) => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for app in apps {
                        theme::card_frame().show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(icons::GAME_CONTROLLER).size(18.0));
                                ui.label(&app.title);
                            });
                        });
                        ui.add_space(4.0);
                    }
                });
            }
        }
    }

    /// A host was chosen from the dropdown: open it if paired, otherwise
    /// start the pairing handshake.
    pub fn select_host_at(&mut self, index: usize) {
        let Some(host) = self.registry.hosts().get(index) else {
            return;
        };
        if host.paired {
            self.session.open_host(host, self.loader.as_ref(), &self.events_tx);
        } else {
            self.session.begin_pairing(host, self.transport.as_ref(), &self.events_tx);
        }
    }

    fn add_host_from_input(&mut self) {
        let address = self.host_add_buffer.trim().to_string();
        if address.is_empty() {
            return;
        }
        match self.registry.add_host(&address, "") {
            Some(_) => {
                println!("[beamcast] host added: {}", address);
                self.host_add_buffer.clear();
            }
            None => println!("[beamcast] host already known: {}", address),
        }
    }

    pub fn display_pairing_modals(&mut self, ctx: &egui::Context) {
        match self.session.pairing().state() {
            PairingState::Idle => {}
            PairingState::InProgress => {
                egui::Window::new("Pairing")
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                    .show(ctx, |ui| {
                        ui.set_width(300.0);
                        ui.label(format!(
                            "Please enter {} on your host PC. This dialog will close when pairing is completed.",
                            self.session.pairing().pin()
                        ));
                    });
            }
            PairingState::Failed => {
                let message = self
                    .session
                    .pairing()
                    .error()
                    .unwrap_or("Pairing error.")
                    .to_string();
                egui::Window::new("Pairing Failed")
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                    .show(ctx, |ui| {
                        ui.set_width(300.0);
                        ui.label(message);
                        ui.add_space(8.0);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("OK").clicked() {
                                self.session.acknowledge_failure();
                            }
                        });
                    });
            }
        }
    }
}
