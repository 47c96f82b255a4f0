mod app;
mod paths;
mod session;
mod settings;
mod ui;

use crate::app::Beamcast;
use crate::paths::PATH_DATA;

fn main() -> eframe::Result {
    if std::env::args().any(|arg| arg == "--help") {
        println!("{}", USAGE_TEXT);
        std::process::exit(0);
    }

    let fullscreen = std::env::args().any(|arg| arg == "--fullscreen");

    std::fs::create_dir_all(&*PATH_DATA).expect("Failed to create data directory");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([960.0, 600.0])
            .with_min_inner_size([640.0, 400.0])
            .with_fullscreen(fullscreen),
        ..Default::default()
    };

    println!("[beamcast] Starting eframe app...");

    eframe::run_native(
        "Beamcast",
        options,
        Box::new(|cc| {
            crate::ui::theme::apply_theme(&cc.egui_ctx);
            Ok(Box::new(Beamcast::new()))
        }),
    )
}

static USAGE_TEXT: &str = r#"
Usage: beamcast [OPTIONS]

Options:
    --fullscreen          Start the GUI in fullscreen mode
    --help                Show this help text
"#;
