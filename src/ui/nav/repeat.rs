// Auto-repeat suppression for held-key value nudges
//
// A nudge fires on the initial press; while the key is held, repeats are
// throttled to a fixed cadence so a held key does not step the value once
// per frame. Each nudge site owns its own filter.

use crate::ui::nav::types::NavPhase;

/// Milliseconds a key must be held before repeat nudges start.
const REPEAT_DELAY_MS: u64 = 400;

/// Milliseconds between repeat nudges once they start.
const REPEAT_INTERVAL_MS: u64 = 120;

#[derive(Debug, Default)]
pub struct RepeatFilter {
    pressed_at: Option<u64>,
    last_fire: u64,
}

impl RepeatFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a nudge at `timestamp_ms` should be suppressed.
    ///
    /// The initial press always fires. Held repeats are suppressed inside
    /// the initial delay window and then rate-limited; releases never
    /// fire and re-arm the filter.
    pub fn should_suppress(&mut self, phase: NavPhase, timestamp_ms: u64) -> bool {
        match phase {
            NavPhase::Down => {
                self.pressed_at = Some(timestamp_ms);
                self.last_fire = timestamp_ms;
                false
            }
            NavPhase::Repeat => {
                let Some(pressed_at) = self.pressed_at else {
                    // Repeat without a tracked press: treat as a fresh press
                    self.pressed_at = Some(timestamp_ms);
                    self.last_fire = timestamp_ms;
                    return false;
                };
                if timestamp_ms.saturating_sub(pressed_at) < REPEAT_DELAY_MS {
                    return true;
                }
                if timestamp_ms.saturating_sub(self.last_fire) < REPEAT_INTERVAL_MS {
                    return true;
                }
                self.last_fire = timestamp_ms;
                false
            }
            NavPhase::Up => {
                self.pressed_at = None;
                true
            }
        }
    }
}
