//! Client-side cache of the server's transfer log.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::transfer_client::{TransferApi, TransferHistoryItem};
use crate::types::TransferError;

/// Source of truth for the transfer log as seen by the client.
///
/// The cache is only ever replaced wholesale by a successful fetch or emptied
/// by a clear the server confirmed. Handles are cheap to clone and share one
/// cache.
#[derive(Clone)]
pub struct HistoryStore {
    inner: Arc<HistoryInner>,
}

struct HistoryInner {
    api: Arc<dyn TransferApi>,
    cache: watch::Sender<Vec<TransferHistoryItem>>,
}

impl HistoryStore {
    pub fn new(api: Arc<dyn TransferApi>) -> Self {
        let (cache, _) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(HistoryInner { api, cache }),
        }
    }

    /// Fetch the full log and replace the cache. Returns the number of entries.
    pub async fn try_refresh(&self) -> Result<usize, TransferError> {
        let items = self.inner.api.history().await?;
        let count = items.len();
        self.inner.cache.send_replace(items);
        debug!(count, "Transfer history refreshed");
        Ok(count)
    }

    /// Like [`try_refresh`](Self::try_refresh) but failures are only logged;
    /// the cache is left untouched. Returns whether the cache was updated.
    pub async fn refresh(&self) -> bool {
        match self.try_refresh().await {
            Ok(_) => true,
            Err(err) => {
                warn!(error = %err, "Failed to refresh transfer history");
                false
            }
        }
    }

    /// Run [`refresh`](Self::refresh) as a detached task. Returns `None`
    /// outside a tokio runtime.
    pub fn spawn_refresh(&self) -> Option<JoinHandle<bool>> {
        let handle = Handle::try_current().ok()?;
        let store = self.clone();
        Some(handle.spawn(async move { store.refresh().await }))
    }

    /// Ask the server to clear the log; the cache is emptied only once the
    /// server confirms.
    pub async fn try_clear(&self) -> Result<(), TransferError> {
        self.inner.api.clear_history().await?;
        self.inner.cache.send_replace(Vec::new());
        info!("Transfer history cleared");
        Ok(())
    }

    /// Soft variant of [`try_clear`](Self::try_clear). Returns whether the log was cleared.
    pub async fn clear(&self) -> bool {
        match self.try_clear().await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "Failed to clear transfer history");
                false
            }
        }
    }

    /// Entries in server (insertion) order.
    pub fn items(&self) -> Vec<TransferHistoryItem> {
        self.inner.cache.borrow().clone()
    }

    /// Entries most-recent first, the order the log is displayed in.
    pub fn newest_first(&self) -> Vec<TransferHistoryItem> {
        self.inner.cache.borrow().iter().rev().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.cache.borrow().is_empty()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<TransferHistoryItem>> {
        self.inner.cache.subscribe()
    }
}
