mod app;
mod app_input;
mod config;
mod pages_hosts;
mod pages_settings;

pub use app::Beamcast;
pub use config::{load_cfg, save_cfg, Config};
