//! HTTP backend client
//!
//! JSON over HTTP with reqwest; works natively and on wasm32 (fetch).

use async_trait::async_trait;
use reqwest::{Client, Response};

use super::{
    ClientError, ClientResult, CsvBackend, UploadReceipt, UploadRequest, LIST_FILES_PATH,
    UPLOAD_PATH,
};
use crate::config::BackendConfig;
use crate::dataset::{Row, StoredFile};

/// Backend reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client for `base_url` (trailing slashes are ignored)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client reusing an existing reqwest client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(config.url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-2xx response into `ClientError::Api` carrying the body text
    async fn ensure_success(response: Response) -> ClientResult<Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        Err(ClientError::Api {
            status: status.as_u16(),
            message: text,
        })
    }
}

#[async_trait(?Send)]
impl CsvBackend for HttpBackend {
    async fn list_files(&self) -> ClientResult<Vec<StoredFile>> {
        let response = self.client.get(self.url(LIST_FILES_PATH)).send().await?;
        let response = Self::ensure_success(response).await?;

        response
            .json::<Vec<StoredFile>>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn upload_file(&self, file_name: &str, rows: &[Row]) -> ClientResult<UploadReceipt> {
        let body = UploadRequest {
            file_name,
            data: rows,
        };

        let response = self
            .client
            .post(self.url(UPLOAD_PATH))
            .json(&body)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        let payload = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        Ok(UploadReceipt { payload })
    }
}
