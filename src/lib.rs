//! Client-side orchestration for a local drag-and-drop file transfer service.
//!
//! A [`TransferSession`] ties together the [`ConnectivityMonitor`], the
//! [`HistoryStore`], the [`UploadCoordinator`] and the [`TransientNotifier`]
//! on top of a [`TransferApi`]. [`TransferClient`] is the HTTP implementation.

pub mod config;
pub mod history;
pub mod logging;
pub mod monitor;
pub mod notifier;
pub mod scheduled;
pub mod session;
pub mod transfer_client;
pub mod types;
pub mod upload;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use history::HistoryStore;
pub use monitor::ConnectivityMonitor;
pub use notifier::TransientNotifier;
pub use session::TransferSession;
pub use transfer_client::{
    BatchOutcome, BatchSummary, ConnectionState, ConnectivitySnapshot, FileHandle, ServerInfo,
    TransferApi, TransferClient, TransferHistoryItem, UploadResult,
};
pub use types::TransferError;
pub use upload::{UploadCoordinator, UploadPhase};
