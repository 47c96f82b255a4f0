//! Host and session types shared across the launcher surface.

use serde::{Deserialize, Serialize};

/// Stable handle into the host registry. Holders must re-resolve against
/// the registry each frame; a vanished host resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostId(pub u32);

/// A known streaming host. Owned by the registry; the launcher only reads
/// these and triggers lazy population of `apps`.
#[derive(Debug, Clone)]
pub struct HostRecord {
    pub id: HostId,
    pub address: String,
    pub name: String,
    pub paired: bool,
    /// None until the application list has been loaded for this host.
    pub apps: Option<Vec<AppEntry>>,
}

impl HostRecord {
    /// Label shown in the host dropdown.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { &self.address } else { &self.name }
    }
}

/// One streamable application on a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEntry {
    pub id: u32,
    pub title: String,
}

/// Persisted subset of a host record. The application list never persists.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct KnownHost {
    pub address: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub paired: bool,
}

/// Events posted by worker threads and drained by the UI loop once per
/// frame. This is the only way transport results reach session state.
#[derive(Debug)]
pub enum SessionEvent {
    /// Exactly one per pairing attempt, posted by the transport.
    PairingFinished {
        host: HostId,
        result: Result<(), String>,
    },
    /// Application list fetched for a host.
    AppsLoaded { host: HostId, apps: Vec<AppEntry> },
}
