use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::transfer_client::helpers::{batch_label, format_file_size};
use crate::types::TransferError;

/// Outcome of one file within a batch, as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub success: bool,
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadResult {
    pub fn succeeded(filename: impl Into<String>, size: u64) -> Self {
        Self {
            success: true,
            filename: filename.into(),
            size: Some(size),
            error: None,
        }
    }

    pub fn failed(filename: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            filename: filename.into(),
            size: None,
            error: Some(error.into()),
        }
    }

    /// Single entry standing in for a whole batch the server gave no detail on.
    pub fn batch_failure(file_count: usize, error: impl Into<String>) -> Self {
        Self::failed(batch_label(file_count), error)
    }

    pub fn display_size(&self) -> Option<String> {
        self.size.map(format_file_size)
    }
}

/// Overall shape of a batch's result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchOutcome {
    Empty,
    AllSucceeded,
    PartialFailure,
    AllFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[UploadResult]) -> Self {
        let succeeded = results.iter().filter(|result| result.success).count();
        Self {
            succeeded,
            failed: results.len() - succeeded,
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    pub fn outcome(&self) -> BatchOutcome {
        match (self.succeeded, self.failed) {
            (0, 0) => BatchOutcome::Empty,
            (_, 0) => BatchOutcome::AllSucceeded,
            (0, _) => BatchOutcome::AllFailed,
            _ => BatchOutcome::PartialFailure,
        }
    }
}

/// A file picked or dropped by the user, held in memory until it is sent.
#[derive(Clone, PartialEq, Eq)]
pub struct FileHandle {
    name: String,
    data: Vec<u8>,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Read a file from disk; the handle is named after the path's final component.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, TransferError> {
        let path = path.as_ref();
        let data = fs::read(path).await?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, data })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Debug for FileHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileHandle")
            .field("name", &self.name)
            .field("len", &self.data.len())
            .finish()
    }
}
