//! Stream settings record and the fixed preset tables.

use serde::{Deserialize, Serialize};

pub const BITRATE_MIN: i32 = 5000;
pub const BITRATE_MAX: i32 = 120000;
pub const BITRATE_STEP: i32 = 500;

/// Above this the basic pane shows a stability warning.
pub const HIGH_BITRATE_WARN: i32 = 50000;

/// Persisted stream configuration, written in place by the settings pane.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct StreamSettings {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub bitrate: i32,
}

impl Default for StreamSettings {
    fn default() -> Self {
        StreamSettings {
            width: 1280,
            height: 720,
            fps: 60,
            bitrate: super::optimal_bitrate(1280, 720, 60),
        }
    }
}

pub struct ResolutionPreset {
    pub width: u32,
    pub height: u32,
    pub name: &'static str,
}

pub struct FpsPreset {
    pub fps: u32,
    pub name: &'static str,
}

pub const RESOLUTION_PRESETS: [ResolutionPreset; 4] = [
    ResolutionPreset { width: 1280, height: 720, name: "720P" },
    ResolutionPreset { width: 1920, height: 1080, name: "1080P" },
    ResolutionPreset { width: 2560, height: 1440, name: "2K" },
    ResolutionPreset { width: 3840, height: 2160, name: "4K" },
];

pub const FPS_PRESETS: [FpsPreset; 3] = [
    FpsPreset { fps: 30, name: "30 FPS" },
    FpsPreset { fps: 60, name: "60 FPS" },
    FpsPreset { fps: 120, name: "120 FPS" },
];
