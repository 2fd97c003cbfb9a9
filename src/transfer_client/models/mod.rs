mod history;
mod server;
mod upload;

pub use history::TransferHistoryItem;
pub use server::{ConnectionState, ConnectivitySnapshot, ServerInfo};
pub use upload::{BatchOutcome, BatchSummary, FileHandle, UploadResult};
