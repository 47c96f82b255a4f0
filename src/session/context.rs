//! Session context: which host is opened, which host is mid-pairing.
//!
//! Owned by the app shell and passed into the pages that need it; there is
//! no module-level session state. Selection and an in-flight pairing
//! attempt are mutually exclusive views: opening a host dismisses any
//! pairing context, and starting a pairing attempt clears the selection.

use std::sync::mpsc::Sender;

use crate::session::pairing::{PairingSession, PairingState};
use crate::session::registry::HostRegistry;
use crate::session::transport::{AppLoader, PairingTransport};
use crate::session::types::{HostId, HostRecord, SessionEvent};

#[derive(Default)]
pub struct SessionContext {
    pairing: PairingSession,
    selected: Option<HostId>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pairing(&self) -> &PairingSession {
        &self.pairing
    }

    pub fn current_selection(&self) -> Option<HostId> {
        self.selected
    }

    /// Resolve the selection against this frame's registry snapshot.
    pub fn selected_host<'r>(&self, registry: &'r HostRegistry) -> Option<&'r HostRecord> {
        registry.get(self.selected?)
    }

    /// True while any pairing UI (progress or failure) is on screen, which
    /// locks out the launcher window behind it.
    pub fn pairing_blocks_input(&self) -> bool {
        self.pairing.state() != PairingState::Idle
    }

    /// Open a paired host: select it, dismiss any pairing context, and
    /// request its application list if it was never loaded.
    pub fn open_host(
        &mut self,
        host: &HostRecord,
        loader: &dyn AppLoader,
        events: &Sender<SessionEvent>,
    ) {
        debug_assert!(host.paired, "open_host on unpaired host");
        if !host.paired {
            return;
        }
        self.selected = Some(host.id);
        self.pairing.reset();
        if host.apps.is_none() {
            loader.load(host, events.clone());
        }
    }

    /// Begin pairing with an unpaired host. Clears the selection, asks the
    /// transport to start the handshake and records the PIN for display.
    /// Rejected unless the pairing state machine is idle.
    pub fn begin_pairing(
        &mut self,
        host: &HostRecord,
        transport: &dyn PairingTransport,
        events: &Sender<SessionEvent>,
    ) {
        debug_assert!(!host.paired, "begin_pairing on already-paired host");
        if host.paired || !self.pairing.is_idle() {
            return;
        }
        self.selected = None;
        let pin = transport.begin(host, events.clone());
        self.pairing.start(host.id, pin);
    }

    /// Apply a pairing completion drained from the event inbox. Returns
    /// true if this completed the attempt successfully, so the caller can
    /// mark the registry record paired. Stale completions return false.
    pub fn apply_pairing_result(&mut self, host: HostId, result: Result<(), String>) -> bool {
        let success = result.is_ok();
        self.pairing.finish(host, result) && success
    }

    pub fn acknowledge_failure(&mut self) {
        self.pairing.acknowledge_failure();
    }

    /// Drop a selection whose host no longer exists in the registry.
    pub fn prune_selection(&mut self, registry: &HostRegistry) {
        if let Some(id) = self.selected {
            if registry.get(id).is_none() {
                self.selected = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::types::AppEntry;
    use std::cell::RefCell;
    use std::sync::mpsc;

    /// Transport that hands out a fixed PIN and records the hosts it was
    /// asked to pair with.
    struct FakeTransport {
        pin: &'static str,
        started: RefCell<Vec<HostId>>,
    }

    impl FakeTransport {
        fn new(pin: &'static str) -> Self {
            Self { pin, started: RefCell::new(Vec::new()) }
        }
    }

    impl PairingTransport for FakeTransport {
        fn begin(&self, host: &HostRecord, _events: Sender<SessionEvent>) -> String {
            self.started.borrow_mut().push(host.id);
            self.pin.to_string()
        }
    }

    struct FakeLoader {
        requested: RefCell<Vec<HostId>>,
    }

    impl FakeLoader {
        fn new() -> Self {
            Self { requested: RefCell::new(Vec::new()) }
        }
    }

    impl AppLoader for FakeLoader {
        fn load(&self, host: &HostRecord, _events: Sender<SessionEvent>) {
            self.requested.borrow_mut().push(host.id);
        }
    }

    fn paired_host(registry: &mut HostRegistry, address: &str) -> HostId {
        let id = registry.add_host(address, "").unwrap();
        registry.set_paired(id, true);
        id
    }

    fn assert_invariant(session: &SessionContext) {
        let selecting = session.current_selection().is_some();
        let pairing = session.pairing().state() == PairingState::InProgress;
        assert!(!(selecting && pairing), "selection and in-flight pairing coexist");
    }

    #[test]
    fn test_open_host_loads_apps_once() {
        let mut registry = HostRegistry::new();
        let id = paired_host(&mut registry, "10.0.0.2");
        let loader = FakeLoader::new();
        let (tx, _rx) = mpsc::channel();
        let mut session = SessionContext::new();

        session.open_host(registry.get(id).unwrap(), &loader, &tx);
        assert_eq!(session.current_selection(), Some(id));
        assert_eq!(loader.requested.borrow().len(), 1);

        // Once loaded, re-opening does not request again
        registry.set_apps(id, vec![AppEntry { id: 1, title: "Desktop".into() }]);
        session.open_host(registry.get(id).unwrap(), &loader, &tx);
        assert_eq!(loader.requested.borrow().len(), 1);
    }

    #[test]
    fn test_pairing_scenario_failure_then_acknowledge() {
        let mut registry = HostRegistry::new();
        let id = registry.add_host("A", "").unwrap();
        let transport = FakeTransport::new("4721");
        let (tx, _rx) = mpsc::channel();
        let mut session = SessionContext::new();

        session.begin_pairing(registry.get(id).unwrap(), &transport, &tx);
        assert_eq!(session.pairing().state(), PairingState::InProgress);
        assert_eq!(session.pairing().pin(), "4721");
        assert_eq!(session.current_selection(), None);
        assert_invariant(&session);

        let became_paired = session.apply_pairing_result(id, Err("auth denied".into()));
        assert!(!became_paired);
        assert_eq!(session.pairing().state(), PairingState::Failed);
        assert_eq!(session.pairing().error(), Some("auth denied"));

        session.acknowledge_failure();
        assert_eq!(session.pairing().state(), PairingState::Idle);
        assert_eq!(session.pairing().error(), None);
    }

    #[test]
    fn test_pairing_success_reports_paired() {
        let mut registry = HostRegistry::new();
        let id = registry.add_host("10.0.0.2", "").unwrap();
        let transport = FakeTransport::new("0000");
        let (tx, _rx) = mpsc::channel();
        let mut session = SessionContext::new();

        session.begin_pairing(registry.get(id).unwrap(), &transport, &tx);
        assert!(session.apply_pairing_result(id, Ok(())));
        assert_eq!(session.pairing().state(), PairingState::Idle);
    }

    #[test]
    fn test_open_host_dismisses_pairing_context() {
        let mut registry = HostRegistry::new();
        let unpaired = registry.add_host("10.0.0.2", "").unwrap();
        let paired = paired_host(&mut registry, "10.0.0.3");
        let transport = FakeTransport::new("1111");
        let loader = FakeLoader::new();
        let (tx, _rx) = mpsc::channel();
        let mut session = SessionContext::new();

        session.begin_pairing(registry.get(unpaired).unwrap(), &transport, &tx);
        session.apply_pairing_result(unpaired, Err("auth denied".into()));
        assert_eq!(session.pairing().state(), PairingState::Failed);

        session.open_host(registry.get(paired).unwrap(), &loader, &tx);
        assert_eq!(session.pairing().state(), PairingState::Idle);
        assert_eq!(session.current_selection(), Some(paired));
        assert_invariant(&session);
    }

    #[test]
    fn test_begin_pairing_rejected_while_busy() {
        let mut registry = HostRegistry::new();
        let a = registry.add_host("10.0.0.2", "").unwrap();
        let b = registry.add_host("10.0.0.3", "").unwrap();
        let transport = FakeTransport::new("2222");
        let (tx, _rx) = mpsc::channel();
        let mut session = SessionContext::new();

        session.begin_pairing(registry.get(a).unwrap(), &transport, &tx);
        session.begin_pairing(registry.get(b).unwrap(), &transport, &tx);

        assert_eq!(*transport.started.borrow(), vec![a]);
        assert_eq!(session.pairing().host(), Some(a));
    }

    #[test]
    fn test_prune_selection_of_vanished_host() {
        let mut registry = HostRegistry::new();
        let id = paired_host(&mut registry, "10.0.0.2");
        let loader = FakeLoader::new();
        let (tx, _rx) = mpsc::channel();
        let mut session = SessionContext::new();

        session.open_host(registry.get(id).unwrap(), &loader, &tx);
        session.prune_selection(&registry);
        assert_eq!(session.current_selection(), Some(id));

        let registry = HostRegistry::new();
        session.prune_selection(&registry);
        assert_eq!(session.current_selection(), None);
    }
}
