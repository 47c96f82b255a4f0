pub mod types;
pub mod values;

pub use types::{
    FpsPreset, ResolutionPreset, StreamSettings, BITRATE_MAX, BITRATE_MIN, BITRATE_STEP,
    FPS_PRESETS, HIGH_BITRATE_WARN, RESOLUTION_PRESETS,
};
pub use values::{
    adjust_bitrate, fps_label, high_bitrate, optimal_bitrate, resolution_label, select_fps,
    select_resolution,
};
