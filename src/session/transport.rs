//! Collaborator contracts for the network side of the launcher, plus the
//! HTTP implementations used by the app.
//!
//! Both implementations run their blocking request on a worker thread and
//! post the outcome as a `SessionEvent`; they never touch UI state.

use std::sync::mpsc::Sender;
use std::time::Duration;

use crate::session::types::{AppEntry, HostId, HostRecord, SessionEvent};

/// Default GameStream-style HTTP port.
pub const DEFAULT_HOST_PORT: u16 = 47989;

/// How long the host gets to confirm the PIN before the attempt fails.
const PAIRING_TIMEOUT: Duration = Duration::from_secs(120);

const APPLIST_TIMEOUT: Duration = Duration::from_secs(15);

/// Starts pairing handshakes. `begin` returns the PIN the user must enter
/// on the host and guarantees exactly one later `PairingFinished` event on
/// `events` for this attempt.
pub trait PairingTransport {
    fn begin(&self, host: &HostRecord, events: Sender<SessionEvent>) -> String;
}

/// Fetches a host's application list out-of-band. Fire-and-forget: on
/// success an `AppsLoaded` event follows; on failure nothing is posted and
/// the host stays unloaded, so the next open retries.
pub trait AppLoader {
    fn load(&self, host: &HostRecord, events: Sender<SessionEvent>);
}

pub struct HttpPairingTransport {
    port: u16,
}

impl HttpPairingTransport {
    pub fn new() -> Self {
        Self { port: DEFAULT_HOST_PORT }
    }
}

impl Default for HttpPairingTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl PairingTransport for HttpPairingTransport {
    fn begin(&self, host: &HostRecord, events: Sender<SessionEvent>) -> String {
        let pin = format!("{:04}", fastrand::u32(0..10000));
        let url = format!("http://{}:{}/pair?pin={}", host.address, self.port, pin);
        let id = host.id;

        println!("[beamcast] pairing: starting handshake with {}", host.address);

        std::thread::spawn(move || {
            let result = request_pairing(&url);
            if let Err(e) = &result {
                eprintln!("[beamcast] pairing: handshake failed: {}", e);
            }
            let _ = events.send(SessionEvent::PairingFinished { host: id, result });
        });

        pin
    }
}

fn request_pairing(url: &str) -> Result<(), String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(PAIRING_TIMEOUT)
        .build()
        .map_err(|e| e.to_string())?;

    let response = client.get(url).send().map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("Host rejected pairing ({})", response.status()));
    }

    let body = response.text().map_err(|e| e.to_string())?;
    if body.trim() == "1" {
        Ok(())
    } else {
        Err("Pairing was denied by the host".to_string())
    }
}

pub struct HttpAppLoader {
    port: u16,
}

impl HttpAppLoader {
    pub fn new() -> Self {
        Self { port: DEFAULT_HOST_PORT }
    }
}

impl Default for HttpAppLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl AppLoader for HttpAppLoader {
    fn load(&self, host: &HostRecord, events: Sender<SessionEvent>) {
        let url = format!("http://{}:{}/applist", host.address, self.port);
        let id = host.id;
        let address = host.address.clone();

        std::thread::spawn(move || match fetch_applist(&url) {
            Ok(apps) => {
                println!("[beamcast] applist: {} applications on {}", apps.len(), address);
                let _ = events.send(SessionEvent::AppsLoaded { host: id, apps });
            }
            Err(e) => {
                eprintln!("[beamcast] applist: fetch from {} failed: {}", address, e);
            }
        });
    }
}

fn fetch_applist(url: &str) -> Result<Vec<AppEntry>, String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(APPLIST_TIMEOUT)
        .build()
        .map_err(|e| e.to_string())?;

    let response = client.get(url).send().map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("applist request returned {}", response.status()));
    }

    let body = response.text().map_err(|e| e.to_string())?;
    Ok(parse_applist(&body))
}

/// Parse the host's application list: one `id<TAB>title` entry per line.
/// Malformed lines are skipped.
pub fn parse_applist(body: &str) -> Vec<AppEntry> {
    body.lines()
        .filter_map(|line| {
            let (id, title) = line.split_once('\t')?;
            let id = id.trim().parse().ok()?;
            let title = title.trim();
            if title.is_empty() {
                return None;
            }
            Some(AppEntry { id, title: title.to_string() })
        })
        .collect()
}
