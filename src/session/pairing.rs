//! Pairing attempt state machine.
//!
//! One attempt can be in flight at a time. The PIN is only meaningful
//! while the attempt runs; the error message only while the attempt has
//! failed and has not been acknowledged.

use crate::session::types::HostId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairingState {
    #[default]
    Idle,
    InProgress,
    Failed,
}

#[derive(Default)]
pub struct PairingSession {
    state: PairingState,
    host: Option<HostId>,
    pin: String,
    error: Option<String>,
}

impl PairingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PairingState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == PairingState::Idle
    }

    /// PIN to show the user. Only meaningful while in progress.
    pub fn pin(&self) -> &str {
        &self.pin
    }

    /// Host of the in-flight or failed attempt.
    pub fn host(&self) -> Option<HostId> {
        self.host
    }

    /// Transport-supplied failure message. Only meaningful while failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Idle -> InProgress. Starting from any other state is a contract
    /// violation by the caller; the UI must disable pairing entry points
    /// while an attempt is pending or unacknowledged.
    pub fn start(&mut self, host: HostId, pin: String) {
        debug_assert!(self.is_idle(), "pairing attempt started while not idle");
        if !self.is_idle() {
            return;
        }
        self.state = PairingState::InProgress;
        self.host = Some(host);
        self.pin = pin;
        self.error = None;
    }

    /// Apply a completion event. Completions that do not match the
    /// in-flight attempt (no attempt, or a different host) are dropped.
    /// Returns whether the completion was applied.
    pub fn finish(&mut self, host: HostId, result: Result<(), String>) -> bool {
        if self.state != PairingState::InProgress || self.host != Some(host) {
            return false;
        }
        self.pin.clear();
        match result {
            Ok(()) => {
                self.state = PairingState::Idle;
                self.host = None;
            }
            Err(message) => {
                self.state = PairingState::Failed;
                self.error = Some(message);
            }
        }
        true
    }

    /// Failed -> Idle, discarding the error message.
    pub fn acknowledge_failure(&mut self) {
        debug_assert_eq!(self.state, PairingState::Failed);
        if self.state != PairingState::Failed {
            return;
        }
        self.reset();
    }

    /// Drop any attempt context and return to Idle. Used when another view
    /// takes over (opening a host dismisses the pairing UI).
    pub fn reset(&mut self) {
        self.state = PairingState::Idle;
        self.host = None;
        self.pin.clear();
        self.error = None;
    }
}
