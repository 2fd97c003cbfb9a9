mod api;
mod client;
pub mod helpers;
mod models;

pub use api::TransferApi;
pub use client::TransferClient;
pub use models::{
    BatchOutcome, BatchSummary, ConnectionState, ConnectivitySnapshot, FileHandle, ServerInfo,
    TransferHistoryItem, UploadResult,
};
