//! Wiring of the four transfer components, as a UI shell drives them.

use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::history::HistoryStore;
use crate::monitor::ConnectivityMonitor;
use crate::notifier::TransientNotifier;
use crate::transfer_client::{FileHandle, TransferApi, TransferClient, UploadResult};
use crate::types::TransferError;
use crate::upload::UploadCoordinator;

/// One client session against a companion server.
///
/// Dropped or picked files go through [`send_files`](Self::send_files); the
/// results are shown in the notifier and the history is refreshed in the
/// background. [`shutdown`](Self::shutdown) (or dropping the session) cancels
/// the monitor schedule and the notifier countdown.
pub struct TransferSession {
    config: Config,
    monitor: ConnectivityMonitor,
    history: HistoryStore,
    uploads: UploadCoordinator,
    notifier: TransientNotifier,
}

impl TransferSession {
    /// Build a session talking HTTP to `config.server_url`.
    pub fn new(config: Config) -> Result<Self, TransferError> {
        let api: Arc<dyn TransferApi> = Arc::new(TransferClient::new(&config)?);
        Ok(Self::with_api(api, config))
    }

    pub fn with_api(api: Arc<dyn TransferApi>, config: Config) -> Self {
        let monitor = ConnectivityMonitor::new(Arc::clone(&api));
        let history = HistoryStore::new(Arc::clone(&api));
        let uploads = UploadCoordinator::new(api, monitor.subscribe(), history.clone());
        let notifier = TransientNotifier::new(config.notice_duration());

        Self {
            config,
            monitor,
            history,
            uploads,
            notifier,
        }
    }

    /// Start the connectivity schedule and fetch the history once.
    pub fn start(&self) {
        info!(server = %self.config.server_url, "Starting transfer session");
        self.monitor.start(self.config.probe_interval());
        self.history.spawn_refresh();
    }

    /// Upload one batch and show its results.
    ///
    /// Rejected batches (`EmptyBatch`, `NotConnected`, `Busy`) leave the
    /// displayed results alone. Accepted batches hide the previous results
    /// while the upload runs.
    pub async fn send_files(&self, files: &[FileHandle]) -> Result<Vec<UploadResult>, TransferError> {
        let results = self
            .uploads
            .submit_with(files, || self.notifier.hide())
            .await?;
        self.notifier.show(results.clone());
        Ok(results)
    }

    pub fn shutdown(&self) {
        self.monitor.stop();
        self.notifier.hide();
        info!("Transfer session shut down");
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn monitor(&self) -> &ConnectivityMonitor {
        &self.monitor
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn uploads(&self) -> &UploadCoordinator {
        &self.uploads
    }

    pub fn notifier(&self) -> &TransientNotifier {
        &self.notifier
    }
}
