use reqwest::StatusCode;
use thiserror::Error;

/// Every failure the transfer core can report.
///
/// `NotConnected`, `Busy` and `EmptyBatch` are rejections raised before any
/// network I/O. The remaining variants describe failed exchanges with the
/// companion server; the components fold them into connectivity state,
/// synthetic upload results or log lines instead of bubbling them up.
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("server is not connected")]
    NotConnected,

    #[error("an upload batch is already in progress")]
    Busy,

    #[error("no files were given to upload")]
    EmptyBatch,

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{path} returned {status}")]
    Server { path: String, status: StatusCode },

    #[error("failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl TransferError {
    /// True for the errors returned synchronously before a batch starts.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            TransferError::NotConnected | TransferError::Busy | TransferError::EmptyBatch
        )
    }

    /// True when the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, TransferError::Transport(_))
    }
}
