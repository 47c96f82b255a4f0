// Core app structure and main update loop

use std::sync::mpsc::{self, Receiver, Sender};

use super::config::{load_cfg, save_cfg, Config};
use super::pages_settings::SettingsPage;
use crate::session::{
    AppLoader, HostRegistry, HttpAppLoader, HttpPairingTransport, PairingTransport,
    SessionContext, SessionEvent,
};
use crate::ui::pane::PaneCtx;
use crate::ui::{theme, MenuPage};

use eframe::egui;
use egui_phosphor::regular as icons;

pub struct Beamcast {
    pub config: Config,
    pub registry: HostRegistry,
    pub session: SessionContext,
    pub transport: Box<dyn PairingTransport>,
    pub loader: Box<dyn AppLoader>,
    pub events_tx: Sender<SessionEvent>,
    pub events_rx: Receiver<SessionEvent>,

    pub cur_page: MenuPage,
    pub settings: SettingsPage,

    // Hosts page state
    pub host_dropdown_open: bool,
    pub host_dropdown_index: usize,
    pub host_add_buffer: String,
}

impl Beamcast {
    pub fn new() -> Self {
        let config = load_cfg();
        let registry = HostRegistry::from_known(&config.hosts);
        if !registry.is_empty() {
            println!("[beamcast] {} known host(s) restored", registry.hosts().len());
        }
        let (events_tx, events_rx) = mpsc::channel();

        Self {
            config,
            registry,
            session: SessionContext::new(),
            transport: Box::new(HttpPairingTransport::new()),
            loader: Box::new(HttpAppLoader::new()),
            events_tx,
            events_rx,
            cur_page: MenuPage::Hosts,
            settings: SettingsPage::new(),
            host_dropdown_open: false,
            host_dropdown_index: 0,
            host_add_buffer: String::new(),
        }
    }

    /// Switch pages, re-syncing the settings screen on entry.
    pub fn set_page(&mut self, page: MenuPage) {
        self.cur_page = page;
        self.host_dropdown_open = false;
        if page == MenuPage::Settings {
            let Beamcast { settings, config, .. } = self;
            settings.on_enter(&mut PaneCtx { stream: &mut config.stream });
        }
    }

    /// Apply everything the worker threads posted since the last frame.
    fn drain_session_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                SessionEvent::PairingFinished { host, result } => {
                    if self.session.apply_pairing_result(host, result) {
                        self.registry.set_paired(host, true);
                        if let Some(record) = self.registry.get(host) {
                            println!("[beamcast] pairing: paired with {}", record.address);
                        }
                    }
                }
                SessionEvent::AppsLoaded { host, apps } => {
                    self.registry.set_apps(host, apps);
                }
            }
        }
    }

    fn display_panel_top(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);
            let hosts_btn = ui.add(
                egui::Button::new("Computers")
                    .min_size(egui::vec2(90.0, 28.0))
                    .selected(self.cur_page == MenuPage::Hosts),
            );
            if hosts_btn.clicked() {
                self.set_page(MenuPage::Hosts);
            }

            let settings_btn = ui.add(
                egui::Button::new("Settings")
                    .min_size(egui::vec2(90.0, 28.0))
                    .selected(self.cur_page == MenuPage::Settings),
            );
            if settings_btn.clicked() {
                self.set_page(MenuPage::Settings);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let close_btn = ui
                    .add(egui::Button::new(icons::X).min_size(egui::vec2(28.0, 28.0)))
                    .on_hover_text("Close");
                if close_btn.clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }

                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                        .small()
                        .weak(),
                );
            });
        });
    }
}

impl eframe::App for Beamcast {
    fn raw_input_hook(&mut self, ctx: &egui::Context, raw_input: &mut egui::RawInput) {
        if !raw_input.focused {
            return;
        }
        // Let text fields keep their arrows/enter
        if ctx.wants_keyboard_input() {
            return;
        }
        self.handle_nav_keys(raw_input);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_session_events();
        self.session.prune_selection(&self.registry);

        egui::TopBottomPanel::top("menu_nav_panel")
            .frame(
                egui::Frame::NONE
                    .fill(theme::BG_MID)
                    .inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                if self.session.pairing_blocks_input() {
                    ui.disable();
                }
                self.display_panel_top(ui);
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(theme::BG_DARK)
                    .inner_margin(egui::Margin { left: 8, right: 8, top: 4, bottom: 8 }),
            )
            .show(ctx, |ui| {
                if self.session.pairing_blocks_input() {
                    ui.disable();
                }
                match self.cur_page {
                    MenuPage::Hosts => self.display_page_hosts(ui),
                    MenuPage::Settings => {
                        let Beamcast { settings, config, .. } = self;
                        settings.render(ui, &mut PaneCtx { stream: &mut config.stream });
                    }
                }
            });

        self.display_pairing_modals(ctx);

        if ctx.input(|input| input.focused) {
            ctx.request_repaint_after(std::time::Duration::from_millis(33)); // 30 fps
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.config.hosts = self.registry.snapshot();
        if let Err(e) = save_cfg(&self.config) {
            eprintln!("[beamcast] Failed to save settings: {}", e);
        }
    }
}
