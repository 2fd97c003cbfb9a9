mod responses;

use async_trait::async_trait;

use crate::transfer_client::models::{FileHandle, ServerInfo, TransferHistoryItem, UploadResult};
use crate::types::TransferError;

pub(crate) use responses::{HistoryResponse, UploadResponse};

/// The companion server's HTTP contract, one method per endpoint.
///
/// Components hold an `Arc<dyn TransferApi>` so the orchestration logic does
/// not depend on a live server.
#[async_trait]
pub trait TransferApi: Send + Sync {
    /// `GET /api/server-info`
    async fn server_info(&self) -> Result<ServerInfo, TransferError>;

    /// `GET /api/history`, in server (insertion) order.
    async fn history(&self) -> Result<Vec<TransferHistoryItem>, TransferError>;

    /// `DELETE /api/history`
    async fn clear_history(&self) -> Result<(), TransferError>;

    /// `POST /api/upload-multiple` with one `files` part per handle.
    async fn upload(&self, files: &[FileHandle]) -> Result<Vec<UploadResult>, TransferError>;
}
