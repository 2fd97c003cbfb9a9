//! Periodic reachability checks against the companion server.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::scheduled::ScheduledTask;
use crate::transfer_client::{
    ConnectionState, ConnectivitySnapshot, ServerInfo, TransferApi,
};
use crate::types::TransferError;

pub const DEFAULT_PROBE_INTERVAL: Duration = Duration::from_millis(5_000);

/// Keeps a best-effort view of server reachability and metadata.
///
/// The monitor is the only writer of its [`ConnectivitySnapshot`]; everyone
/// else reads it through [`ConnectivityMonitor::subscribe`] or the accessors.
/// When probes overlap, the result of the most recently *issued* probe wins:
/// a slow probe that completes after a newer one has been applied is dropped.
pub struct ConnectivityMonitor {
    shared: Arc<ProbeShared>,
    schedule: Mutex<Option<ScheduledTask>>,
}

struct ProbeShared {
    api: Arc<dyn TransferApi>,
    snapshot: watch::Sender<ConnectivitySnapshot>,
    last_ticket: AtomicU64,
}

impl ConnectivityMonitor {
    pub fn new(api: Arc<dyn TransferApi>) -> Self {
        let (snapshot, _) = watch::channel(ConnectivitySnapshot::default());
        Self {
            shared: Arc::new(ProbeShared {
                api,
                snapshot,
                last_ticket: AtomicU64::new(0),
            }),
            schedule: Mutex::new(None),
        }
    }

    /// Check the server once and publish the outcome. Failures of any kind
    /// turn into `Offline`; this never errors. The returned state always
    /// matches the published snapshot.
    pub async fn probe(&self) -> ConnectionState {
        self.shared.probe().await
    }

    /// Probe now and then every `interval` until [`stop`](Self::stop).
    /// Restarting replaces the previous schedule.
    pub fn start(&self, interval: Duration) {
        let shared = Arc::clone(&self.shared);
        let task = ScheduledTask::repeating(interval, move || {
            let shared = Arc::clone(&shared);
            async move {
                shared.probe().await;
            }
        });

        if let Some(previous) = self.lock_schedule().replace(task) {
            previous.cancel();
        }
        info!(interval_ms = interval.as_millis() as u64, "Connectivity monitor started");
    }

    pub fn stop(&self) {
        if let Some(task) = self.lock_schedule().take() {
            task.cancel();
            info!("Connectivity monitor stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.lock_schedule().is_some()
    }

    pub fn state(&self) -> ConnectionState {
        self.shared.snapshot.borrow().state
    }

    pub fn server_info(&self) -> Option<ServerInfo> {
        self.shared.snapshot.borrow().server_info.clone()
    }

    pub fn snapshot(&self) -> ConnectivitySnapshot {
        self.shared.snapshot.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ConnectivitySnapshot> {
        self.shared.snapshot.subscribe()
    }

    fn lock_schedule(&self) -> MutexGuard<'_, Option<ScheduledTask>> {
        self.schedule.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProbeShared {
    /// Returns the published state, which is not this probe's own outcome
    /// when a later-issued probe already landed.
    async fn probe(&self) -> ConnectionState {
        let ticket = self.last_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        let outcome = self.api.server_info().await;
        self.apply(ticket, outcome, Utc::now());
        self.snapshot.borrow().state
    }

    /// Publish a probe outcome unless a later-issued probe already landed.
    fn apply(
        &self,
        ticket: u64,
        outcome: Result<ServerInfo, TransferError>,
        checked_at: DateTime<Utc>,
    ) -> bool {
        if let Err(err) = &outcome {
            debug!(ticket, error = %err, "Server probe failed");
        }

        let mut previous = None;
        let applied = self.snapshot.send_if_modified(|current| {
            if current.probe_sequence > ticket {
                return false;
            }
            previous = Some(current.state);
            let server_info = outcome.ok();
            *current = ConnectivitySnapshot {
                state: if server_info.is_some() {
                    ConnectionState::Online
                } else {
                    ConnectionState::Offline
                },
                server_info,
                checked_at: Some(checked_at),
                probe_sequence: ticket,
            };
            true
        });

        if !applied {
            debug!(ticket, "Discarded stale probe result");
            return false;
        }

        let state = self.snapshot.borrow().state;
        if previous != Some(state) {
            info!(state = %state, "Server connectivity changed");
        }
        true
    }
}
