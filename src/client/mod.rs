//! Backend Persistence
//!
//! Stores uploaded files in, and lists them from, the remote CSV backend.
//!
//! # Endpoints
//!
//! - `GET  {base}/api/get_csv_files` - all stored files
//! - `POST {base}/api/upload_csv`    - store `{fileName, data}`
//!
//! There is no retry, backoff or timeout here; callers log failures and
//! keep whatever state they had.

mod http;

pub use http::HttpBackend;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::dataset::{Row, StoredFile};

/// Backend used when nothing is configured
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Path of the list endpoint
pub const LIST_FILES_PATH: &str = "/api/get_csv_files";

/// Path of the upload endpoint
pub const UPLOAD_PATH: &str = "/api/upload_csv";

/// Storage service holding uploaded CSV files
///
/// Futures are not `Send`: the browser fetch API is single threaded.
#[async_trait(?Send)]
pub trait CsvBackend {
    /// Fetch every stored file record
    async fn list_files(&self) -> ClientResult<Vec<StoredFile>>;

    /// Store the parsed rows of a file under its name
    async fn upload_file(&self, file_name: &str, rows: &[Row]) -> ClientResult<UploadReceipt>;
}

/// Upload request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest<'a> {
    pub file_name: &'a str,
    pub data: &'a [Row],
}

/// Success payload returned by the upload endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct UploadReceipt {
    pub payload: serde_json::Value,
}

impl UploadReceipt {
    /// The `message` field, when the backend sends one
    pub fn message(&self) -> Option<&str> {
        self.payload.get("message").and_then(|m| m.as_str())
    }
}

/// Errors talking to the backend
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    Decode(String),
}

/// Result type for backend operations
pub type ClientResult<T> = Result<T, ClientError>;
