//! In-memory `TransferApi` used by the unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use tokio::sync::Notify;

use crate::transfer_client::{
    FileHandle, ServerInfo, TransferApi, TransferHistoryItem, UploadResult,
};
use crate::types::TransferError;

pub(crate) enum UploadReply {
    /// One success per submitted file, sized from its contents.
    Echo,
    Results(Vec<UploadResult>),
    Status(StatusCode),
}

pub(crate) struct FakeApi {
    online: AtomicBool,
    fail_history: AtomicBool,
    fail_clear: AtomicBool,
    hold_uploads: AtomicBool,
    history: Mutex<Vec<TransferHistoryItem>>,
    upload_reply: Mutex<UploadReply>,
    uploaded: Mutex<Vec<Vec<String>>>,
    probe_calls: AtomicUsize,
    history_calls: AtomicUsize,
    clear_calls: AtomicUsize,
    upload_calls: AtomicUsize,
    pub upload_started: Notify,
    pub release_upload: Notify,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            online: AtomicBool::new(true),
            fail_history: AtomicBool::new(false),
            fail_clear: AtomicBool::new(false),
            hold_uploads: AtomicBool::new(false),
            history: Mutex::new(Vec::new()),
            upload_reply: Mutex::new(UploadReply::Echo),
            uploaded: Mutex::new(Vec::new()),
            probe_calls: AtomicUsize::new(0),
            history_calls: AtomicUsize::new(0),
            clear_calls: AtomicUsize::new(0),
            upload_calls: AtomicUsize::new(0),
            upload_started: Notify::new(),
            release_upload: Notify::new(),
        }
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    pub fn set_fail_history(&self, fail: bool) {
        self.fail_history.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_clear(&self, fail: bool) {
        self.fail_clear.store(fail, Ordering::SeqCst);
    }

    /// Park every upload until `release_upload` is notified.
    pub fn hold_uploads(&self) {
        self.hold_uploads.store(true, Ordering::SeqCst);
    }

    /// Stop holding uploads and let the parked one through.
    pub fn release_uploads(&self) {
        self.hold_uploads.store(false, Ordering::SeqCst);
        self.release_upload.notify_one();
    }

    pub fn set_history(&self, items: Vec<TransferHistoryItem>) {
        *self.history.lock().unwrap() = items;
    }

    pub fn set_upload_reply(&self, reply: UploadReply) {
        *self.upload_reply.lock().unwrap() = reply;
    }

    pub fn uploaded_batches(&self) -> Vec<Vec<String>> {
        self.uploaded.lock().unwrap().clone()
    }

    pub fn probe_calls(&self) -> usize {
        self.probe_calls.load(Ordering::SeqCst)
    }

    pub fn history_calls(&self) -> usize {
        self.history_calls.load(Ordering::SeqCst)
    }

    pub fn clear_calls(&self) -> usize {
        self.clear_calls.load(Ordering::SeqCst)
    }

    pub fn upload_calls(&self) -> usize {
        self.upload_calls.load(Ordering::SeqCst)
    }
}

pub(crate) fn server_info() -> ServerInfo {
    ServerInfo {
        hostname: "desk-pc".to_string(),
        system: "Linux".to_string(),
        machine: "x86_64".to_string(),
        processor: "x86_64".to_string(),
        ip: "192.168.1.20".to_string(),
    }
}

pub(crate) fn history_item(id: u64, filename: &str) -> TransferHistoryItem {
    TransferHistoryItem {
        id,
        filename: filename.to_string(),
        size: 1024 * id,
        client_ip: "192.168.1.30".to_string(),
        timestamp: format!("2024-03-09T14:05:0{}.000001", id % 10),
    }
}

pub(crate) fn file(name: &str) -> FileHandle {
    FileHandle::new(name, name.as_bytes().to_vec())
}

fn unavailable(path: &str) -> TransferError {
    TransferError::Server {
        path: path.to_string(),
        status: StatusCode::SERVICE_UNAVAILABLE,
    }
}

#[async_trait]
impl TransferApi for FakeApi {
    async fn server_info(&self) -> Result<ServerInfo, TransferError> {
        self.probe_calls.fetch_add(1, Ordering::SeqCst);
        if self.online.load(Ordering::SeqCst) {
            Ok(server_info())
        } else {
            Err(unavailable("/api/server-info"))
        }
    }

    async fn history(&self) -> Result<Vec<TransferHistoryItem>, TransferError> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_history.load(Ordering::SeqCst) {
            return Err(unavailable("/api/history"));
        }
        Ok(self.history.lock().unwrap().clone())
    }

    async fn clear_history(&self) -> Result<(), TransferError> {
        self.clear_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_clear.load(Ordering::SeqCst) {
            return Err(unavailable("/api/history"));
        }
        self.history.lock().unwrap().clear();
        Ok(())
    }

    async fn upload(&self, files: &[FileHandle]) -> Result<Vec<UploadResult>, TransferError> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        self.uploaded
            .lock()
            .unwrap()
            .push(files.iter().map(|f| f.name().to_string()).collect());

        if self.hold_uploads.load(Ordering::SeqCst) {
            self.upload_started.notify_one();
            self.release_upload.notified().await;
        }

        let reply = match &*self.upload_reply.lock().unwrap() {
            UploadReply::Echo => Ok(files
                .iter()
                .map(|f| UploadResult::succeeded(f.name(), f.len()))
                .collect()),
            UploadReply::Results(results) => Ok(results.clone()),
            UploadReply::Status(status) => Err(TransferError::Server {
                path: "/api/upload-multiple".to_string(),
                status: *status,
            }),
        };
        reply
    }
}
