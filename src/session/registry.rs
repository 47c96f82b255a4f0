//! Ordered host registry.
//!
//! The registry owns every `HostRecord`. Pages read a snapshot each frame
//! and refer to hosts by `HostId`; mutation goes through the methods here,
//! driven by session events or user action.

use crate::session::types::{AppEntry, HostId, HostRecord, KnownHost};

#[derive(Default)]
pub struct HostRegistry {
    hosts: Vec<HostRecord>,
    next_id: u32,
}

impl HostRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from the persisted host list.
    pub fn from_known(known: &[KnownHost]) -> Self {
        let mut registry = Self::new();
        for host in known {
            if let Some(id) = registry.add_host(&host.address, &host.name) {
                registry.set_paired(id, host.paired);
            }
        }
        registry
    }

    /// Ordered snapshot for this frame.
    pub fn hosts(&self) -> &[HostRecord] {
        &self.hosts
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn get(&self, id: HostId) -> Option<&HostRecord> {
        self.hosts.iter().find(|h| h.id == id)
    }

    pub fn get_mut(&mut self, id: HostId) -> Option<&mut HostRecord> {
        self.hosts.iter_mut().find(|h| h.id == id)
    }

    /// Add a host by address. Returns None if the address is already known.
    pub fn add_host(&mut self, address: &str, name: &str) -> Option<HostId> {
        let address = address.trim();
        if address.is_empty() || self.hosts.iter().any(|h| h.address == address) {
            return None;
        }
        let id = HostId(self.next_id);
        self.next_id += 1;
        self.hosts.push(HostRecord {
            id,
            address: address.to_string(),
            name: name.trim().to_string(),
            paired: false,
            apps: None,
        });
        Some(id)
    }

    pub fn set_paired(&mut self, id: HostId, paired: bool) {
        if let Some(host) = self.get_mut(id) {
            host.paired = paired;
        }
    }

    pub fn set_apps(&mut self, id: HostId, apps: Vec<AppEntry>) {
        if let Some(host) = self.get_mut(id) {
            host.apps = Some(apps);
        }
    }

    /// Persisted view of the registry.
    pub fn snapshot(&self) -> Vec<KnownHost> {
        self.hosts
            .iter()
            .map(|h| KnownHost {
                address: h.address.clone(),
                name: h.name.clone(),
                paired: h.paired,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_host_dedupes_by_address() {
        let mut registry = HostRegistry::new();
        let first = registry.add_host("10.0.0.2", "den-pc");
        assert!(first.is_some());
        assert_eq!(registry.add_host("10.0.0.2", "other"), None);
        assert_eq!(registry.add_host("  ", ""), None);
        assert_eq!(registry.hosts().len(), 1);
    }

    #[test]
    fn test_set_apps_targets_one_record() {
        let mut registry = HostRegistry::new();
        let a = registry.add_host("10.0.0.2", "a").unwrap();
        let b = registry.add_host("10.0.0.3", "b").unwrap();

        registry.set_apps(a, vec![AppEntry { id: 1, title: "Desktop".into() }]);

        assert_eq!(registry.get(a).unwrap().apps.as_ref().unwrap().len(), 1);
        assert!(registry.get(b).unwrap().apps.is_none());
    }

    #[test]
    fn test_known_host_round_trip() {
        let mut registry = HostRegistry::new();
        let id = registry.add_host("10.0.0.2", "den-pc").unwrap();
        registry.set_paired(id, true);
        registry.set_apps(id, vec![AppEntry { id: 1, title: "Desktop".into() }]);

        let restored = HostRegistry::from_known(&registry.snapshot());
        let host = &restored.hosts()[0];
        assert_eq!(host.address, "10.0.0.2");
        assert_eq!(host.name, "den-pc");
        assert!(host.paired);
        // The application list is lazy state and never persists
        assert!(host.apps.is_none());
    }
}
