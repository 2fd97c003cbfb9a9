use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::transfer_client::helpers::{format_file_size, format_timestamp, parse_timestamp};

/// One entry of the server-side transfer log.
///
/// `timestamp` is kept exactly as the server sent it; use
/// [`TransferHistoryItem::parsed_timestamp`] for a typed view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferHistoryItem {
    pub id: u64,
    pub filename: String,
    pub size: u64,
    pub client_ip: String,
    pub timestamp: String,
}

impl TransferHistoryItem {
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.timestamp)
    }

    pub fn display_size(&self) -> String {
        format_file_size(self.size)
    }

    pub fn display_time(&self) -> String {
        format_timestamp(&self.timestamp)
    }
}
