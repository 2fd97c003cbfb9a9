//! Single-flight batch uploads.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::history::HistoryStore;
use crate::transfer_client::helpers::{NETWORK_ERROR_MESSAGE, UPLOAD_FAILED_MESSAGE};
use crate::transfer_client::{
    BatchSummary, ConnectivitySnapshot, FileHandle, TransferApi, UploadResult,
};
use crate::types::TransferError;

/// Whether a batch is currently on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    InFlight,
}

/// The single place files leave the client.
///
/// At most one batch is in flight; a second [`submit`](Self::submit) while one
/// is running is rejected with [`TransferError::Busy`]. Connectivity is read
/// from the monitor's published snapshot and never written here.
pub struct UploadCoordinator {
    api: Arc<dyn TransferApi>,
    connectivity: watch::Receiver<ConnectivitySnapshot>,
    history: HistoryStore,
    phase: Mutex<UploadPhase>,
}

/// Holds the coordinator in `InFlight`. Dropping it, on every exit path,
/// returns to `Idle` and kicks off a detached history refresh.
struct FlightGuard<'a> {
    coordinator: &'a UploadCoordinator,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        *self.coordinator.lock_phase() = UploadPhase::Idle;
        if self.coordinator.history.spawn_refresh().is_none() {
            debug!("No runtime available for post-upload history refresh");
        }
    }
}

impl UploadCoordinator {
    pub fn new(
        api: Arc<dyn TransferApi>,
        connectivity: watch::Receiver<ConnectivitySnapshot>,
        history: HistoryStore,
    ) -> Self {
        Self {
            api,
            connectivity,
            history,
            phase: Mutex::new(UploadPhase::Idle),
        }
    }

    pub fn phase(&self) -> UploadPhase {
        *self.lock_phase()
    }

    pub fn is_busy(&self) -> bool {
        self.phase() == UploadPhase::InFlight
    }

    /// Check the preconditions of [`submit`](Self::submit) without starting a batch.
    pub fn ensure_ready(&self, files: &[FileHandle]) -> Result<(), TransferError> {
        if files.is_empty() {
            return Err(TransferError::EmptyBatch);
        }
        if !self.connectivity.borrow().is_online() {
            return Err(TransferError::NotConnected);
        }
        if self.is_busy() {
            return Err(TransferError::Busy);
        }
        Ok(())
    }

    /// Send `files` as one multipart request and return one result per file
    /// in server order.
    ///
    /// Rejections (`EmptyBatch`, `NotConnected`, `Busy`) happen before any
    /// I/O. Once the batch has started, transport and server failures do not
    /// produce an `Err`: they are reported as a single failed result covering
    /// the whole batch.
    pub async fn submit(&self, files: &[FileHandle]) -> Result<Vec<UploadResult>, TransferError> {
        self.submit_with(files, || {}).await
    }

    /// [`submit`](Self::submit), calling `on_start` once the batch has moved
    /// to `InFlight` and before any request is sent. Rejected batches never
    /// call it.
    pub async fn submit_with<F>(
        &self,
        files: &[FileHandle],
        on_start: F,
    ) -> Result<Vec<UploadResult>, TransferError>
    where
        F: FnOnce(),
    {
        if files.is_empty() {
            return Err(TransferError::EmptyBatch);
        }
        if !self.connectivity.borrow().is_online() {
            warn!(files = files.len(), "Upload rejected, server is offline");
            return Err(TransferError::NotConnected);
        }
        let flight = self.begin_flight()?;
        on_start();

        let file_count = files.len();
        let total_bytes: u64 = files.iter().map(FileHandle::len).sum();
        info!(files = file_count, bytes = total_bytes, "Uploading batch");

        let results = match self.api.upload(files).await {
            Ok(results) => {
                if results.len() != file_count {
                    warn!(
                        sent = file_count,
                        reported = results.len(),
                        "Server reported a different number of results than files sent"
                    );
                }
                results
            }
            Err(err) => {
                warn!(files = file_count, error = %err, "Batch upload failed");
                vec![UploadResult::batch_failure(file_count, failure_message(&err))]
            }
        };
        drop(flight);

        let summary = BatchSummary::from_results(&results);
        info!(
            succeeded = summary.succeeded,
            failed = summary.failed,
            "Batch upload finished"
        );
        Ok(results)
    }

    fn begin_flight(&self) -> Result<FlightGuard<'_>, TransferError> {
        let mut phase = self.lock_phase();
        match *phase {
            UploadPhase::InFlight => {
                debug!("Upload rejected, a batch is already in flight");
                Err(TransferError::Busy)
            }
            UploadPhase::Idle => {
                *phase = UploadPhase::InFlight;
                Ok(FlightGuard { coordinator: self })
            }
        }
    }

    fn lock_phase(&self) -> MutexGuard<'_, UploadPhase> {
        self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn failure_message(err: &TransferError) -> &'static str {
    if err.is_transport() {
        NETWORK_ERROR_MESSAGE
    } else {
        UPLOAD_FAILED_MESSAGE
    }
}
