//! Value logic for the basic stream settings: label derivation, bitrate
//! clamping and the optimal-bitrate recompute.
//!
//! All functions here are pure over `StreamSettings`; the pane re-derives
//! labels whenever the underlying values change.

use crate::settings::types::{
    StreamSettings, BITRATE_MAX, BITRATE_MIN, BITRATE_STEP, HIGH_BITRATE_WARN,
};

/// Display label for a resolution. Preset resolutions get their short
/// name; anything else falls back to a fixed-width "W*H" form.
pub fn resolution_label(width: u32, height: u32) -> String {
    match (width, height) {
        (1280, 720) => "720P".to_string(),
        (1920, 1080) => "1080P".to_string(),
        (2560, 1440) => "1440P".to_string(),
        (3840, 2160) => "4K".to_string(),
        _ => format!("{:>3}*{:>3}", width, height),
    }
}

/// Display label for a framerate. Capped to three digits.
pub fn fps_label(fps: u32) -> String {
    format!("{} FPS", fps % 1000)
}

/// Set resolution, then overwrite bitrate with the recomputed optimum.
/// Any manual bitrate edit is superseded by this.
pub fn select_resolution(stream: &mut StreamSettings, width: u32, height: u32) {
    stream.width = width;
    stream.height = height;
    stream.bitrate = optimal_bitrate(stream.width, stream.height, stream.fps);
}

/// Set framerate, then overwrite bitrate with the recomputed optimum.
pub fn select_fps(stream: &mut StreamSettings, fps: u32) {
    stream.fps = fps;
    stream.bitrate = optimal_bitrate(stream.width, stream.height, stream.fps);
}

/// Nudge bitrate by whole steps, clamped to the supported range.
pub fn adjust_bitrate(stream: &mut StreamSettings, steps: i32) {
    stream.bitrate = (stream.bitrate + steps * BITRATE_STEP).clamp(BITRATE_MIN, BITRATE_MAX);
}

/// Suggested bitrate for a resolution/fps combination.
///
/// Scales a 20 Mbps reference for 1080p60 by pixel rate, snapped to the
/// bitrate step grid and clamped to the supported range.
pub fn optimal_bitrate(width: u32, height: u32, fps: u32) -> i32 {
    const REFERENCE_RATE: f64 = 1920.0 * 1080.0 * 60.0;
    const REFERENCE_KBPS: f64 = 20000.0;

    let rate = width as f64 * height as f64 * fps as f64;
    let raw = (rate / REFERENCE_RATE * REFERENCE_KBPS).round() as i32;
    let snapped = (raw + BITRATE_STEP / 2) / BITRATE_STEP * BITRATE_STEP;
    snapped.clamp(BITRATE_MIN, BITRATE_MAX)
}

pub fn high_bitrate(stream: &StreamSettings) -> bool {
    stream.bitrate > HIGH_BITRATE_WARN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::types::{BITRATE_MAX, BITRATE_MIN};

    #[test]
    fn test_preset_labels() {
        assert_eq!(resolution_label(1920, 1080), "1080P");
        assert_eq!(resolution_label(1280, 720), "720P");
        // The 2560x1440 entry lists as "2K" in the preset table but labels
        // as "1440P" once selected.
        assert_eq!(resolution_label(2560, 1440), "1440P");
        assert_eq!(resolution_label(3840, 2160), "4K");
    }

    #[test]
    fn test_fallback_label_fixed_width() {
        assert_eq!(resolution_label(1000, 1000), "1000*1000");
        assert_eq!(resolution_label(640, 480), "640*480");
        // Narrow values are padded to three characters each
        assert_eq!(resolution_label(64, 48), " 64* 48");
    }

    #[test]
    fn test_fps_label_caps_to_three_digits() {
        assert_eq!(fps_label(60), "60 FPS");
        assert_eq!(fps_label(120), "120 FPS");
        assert_eq!(fps_label(1060), "60 FPS");
    }

    #[test]
    fn test_select_resolution_overwrites_bitrate() {
        let mut stream = StreamSettings { width: 1280, height: 720, fps: 60, bitrate: 77777 };
        select_resolution(&mut stream, 1920, 1080);
        assert_eq!(stream.width, 1920);
        assert_eq!(stream.height, 1080);
        assert_eq!(stream.bitrate, optimal_bitrate(1920, 1080, 60));
    }

    #[test]
    fn test_select_fps_overwrites_bitrate() {
        let mut stream = StreamSettings { width: 1920, height: 1080, fps: 30, bitrate: 12345 };
        select_fps(&mut stream, 120);
        assert_eq!(stream.fps, 120);
        assert_eq!(stream.bitrate, optimal_bitrate(1920, 1080, 120));
    }

    #[test]
    fn test_adjust_bitrate_steps_and_clamps() {
        let mut stream = StreamSettings { width: 1920, height: 1080, fps: 60, bitrate: 20000 };
        adjust_bitrate(&mut stream, 1);
        assert_eq!(stream.bitrate, 20500);
        adjust_bitrate(&mut stream, -2);
        assert_eq!(stream.bitrate, 19500);
    }

    #[test]
    fn test_adjust_bitrate_idempotent_at_boundaries() {
        let mut stream = StreamSettings { width: 1920, height: 1080, fps: 60, bitrate: BITRATE_MIN };
        adjust_bitrate(&mut stream, -1);
        assert_eq!(stream.bitrate, BITRATE_MIN);
        adjust_bitrate(&mut stream, -100);
        assert_eq!(stream.bitrate, BITRATE_MIN);

        stream.bitrate = BITRATE_MAX;
        adjust_bitrate(&mut stream, 1);
        assert_eq!(stream.bitrate, BITRATE_MAX);
        adjust_bitrate(&mut stream, 100);
        assert_eq!(stream.bitrate, BITRATE_MAX);
    }

    #[test]
    fn test_optimal_bitrate_reference_points() {
        assert_eq!(optimal_bitrate(1920, 1080, 60), 20000);
        assert_eq!(optimal_bitrate(1280, 720, 60), 9000);
        assert_eq!(optimal_bitrate(3840, 2160, 60), 80000);
    }

    #[test]
    fn test_optimal_bitrate_clamped_and_on_grid() {
        // 720p30 scales below the floor
        assert_eq!(optimal_bitrate(1280, 720, 30), BITRATE_MIN);
        // 4K120 scales past the ceiling
        assert_eq!(optimal_bitrate(3840, 2160, 120), BITRATE_MAX);
        for &(w, h, fps) in &[(1920u32, 1080u32, 30u32), (2560, 1440, 60), (2560, 1440, 120)] {
            let kbps = optimal_bitrate(w, h, fps);
            assert_eq!(kbps % BITRATE_STEP, 0, "{}x{}@{} not on step grid", w, h, fps);
            assert!((BITRATE_MIN..=BITRATE_MAX).contains(&kbps));
        }
    }

    #[test]
    fn test_high_bitrate_warning_threshold() {
        let mut stream = StreamSettings { width: 1920, height: 1080, fps: 60, bitrate: 50000 };
        assert!(!high_bitrate(&stream));
        stream.bitrate = 50500;
        assert!(high_bitrate(&stream));
    }
}
