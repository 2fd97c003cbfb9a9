use serde::Deserialize;

use crate::transfer_client::models::{TransferHistoryItem, UploadResult};

/// Envelope of `GET /api/history`.
#[derive(Debug, Deserialize)]
pub(crate) struct HistoryResponse {
    pub history: Vec<TransferHistoryItem>,
}

/// Envelope of `POST /api/upload-multiple`.
#[derive(Debug, Deserialize)]
pub(crate) struct UploadResponse {
    pub results: Vec<UploadResult>,
}
