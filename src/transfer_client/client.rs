use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::types::TransferError;

use super::api::{HistoryResponse, TransferApi, UploadResponse};
use super::helpers::{HISTORY_PATH, SERVER_INFO_PATH, UPLOAD_FIELD, UPLOAD_MULTIPLE_PATH};
use super::models::{FileHandle, ServerInfo, TransferHistoryItem, UploadResult};

/// reqwest-backed implementation of [`TransferApi`].
#[derive(Clone)]
pub struct TransferClient {
    http: Client,
    base_url: String,
    probe_timeout: Duration,
}

impl TransferClient {
    /// Prepare an HTTP client for the server named in `config`.
    pub fn new(config: &Config) -> Result<Self, TransferError> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(TransferError::Transport)?;

        Ok(Self {
            http,
            base_url: config.server_url.trim().trim_end_matches('/').to_string(),
            probe_timeout: config.probe_timeout(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, path: &str, request: RequestBuilder) -> Result<Response, TransferError> {
        let response = request.send().await.map_err(TransferError::Transport)?;
        let status = response.status();
        debug!(path, status = %status, "Server responded");

        if !status.is_success() {
            return Err(TransferError::Server {
                path: path.to_string(),
                status,
            });
        }
        Ok(response)
    }

    async fn get_json<T>(&self, path: &str, timeout: Option<Duration>) -> Result<T, TransferError>
    where
        T: DeserializeOwned,
    {
        let mut request = self.http.get(self.url(path));
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }
        let response = self.send(path, request).await?;
        decode(path, response).await
    }
}

#[async_trait]
impl TransferApi for TransferClient {
    async fn server_info(&self) -> Result<ServerInfo, TransferError> {
        self.get_json(SERVER_INFO_PATH, Some(self.probe_timeout))
            .await
    }

    async fn history(&self) -> Result<Vec<TransferHistoryItem>, TransferError> {
        let response: HistoryResponse = self.get_json(HISTORY_PATH, None).await?;
        Ok(response.history)
    }

    async fn clear_history(&self) -> Result<(), TransferError> {
        let request = self.http.delete(self.url(HISTORY_PATH));
        self.send(HISTORY_PATH, request).await?;
        Ok(())
    }

    async fn upload(&self, files: &[FileHandle]) -> Result<Vec<UploadResult>, TransferError> {
        let form = files
            .iter()
            .fold(Form::new(), |form, file| form.part(UPLOAD_FIELD, file_part(file)));
        let request = self.http.post(self.url(UPLOAD_MULTIPLE_PATH)).multipart(form);
        let response = self.send(UPLOAD_MULTIPLE_PATH, request).await?;
        let body: UploadResponse = decode(UPLOAD_MULTIPLE_PATH, response).await?;
        Ok(body.results)
    }
}

fn file_part(file: &FileHandle) -> Part {
    Part::bytes(file.data().to_vec()).file_name(file.name().to_string())
}

async fn decode<T>(path: &str, response: Response) -> Result<T, TransferError>
where
    T: DeserializeOwned,
{
    let body = response.bytes().await.map_err(TransferError::Transport)?;
    serde_json::from_slice(&body).map_err(|source| TransferError::Decode {
        path: path.to_string(),
        source,
    })
}
