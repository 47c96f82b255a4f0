pub mod context;
pub mod pairing;
pub mod registry;
pub mod transport;
pub mod types;

// Re-exports
pub use context::SessionContext;
pub use pairing::{PairingSession, PairingState};
pub use registry::HostRegistry;
pub use transport::{AppLoader, HttpAppLoader, HttpPairingTransport, PairingTransport};
pub use types::{AppEntry, HostId, HostRecord, KnownHost, SessionEvent};
