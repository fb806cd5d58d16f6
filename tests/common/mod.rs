//! In-process stand-in for the CSV storage backend.
//!
//! Serves the two endpoints the dashboard uses, stores uploads in memory
//! (same name overwrites) and can be switched into failure modes.

#![allow(dead_code)]

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use csv_dashboard::{Row, StoredFile};
use serde::Deserialize;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

#[derive(Default)]
pub struct BackendStore {
    files: Mutex<Vec<StoredFile>>,
    pub fail_uploads: AtomicBool,
    pub fail_listing: AtomicBool,
    pub plain_text_uploads: AtomicBool,
    pub uploads: AtomicUsize,
}

impl BackendStore {
    pub fn files(&self) -> Vec<StoredFile> {
        self.files.lock().unwrap().clone()
    }

    pub fn set(&self, flag: &AtomicBool, value: bool) {
        flag.store(value, Ordering::SeqCst);
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadBody {
    file_name: String,
    data: Vec<Row>,
}

async fn list_files(State(store): State<Arc<BackendStore>>) -> Response {
    if store.fail_listing.load(Ordering::SeqCst) {
        return (StatusCode::SERVICE_UNAVAILABLE, "listing unavailable").into_response();
    }
    Json(store.files()).into_response()
}

async fn upload_csv(
    State(store): State<Arc<BackendStore>>,
    Json(body): Json<UploadBody>,
) -> Response {
    store.uploads.fetch_add(1, Ordering::SeqCst);

    if store.fail_uploads.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "storage offline").into_response();
    }

    {
        let mut files = store.files.lock().unwrap();
        match files.iter_mut().find(|f| f.file_name == body.file_name) {
            Some(existing) => existing.rows = body.data,
            None => files.push(StoredFile::new(body.file_name, body.data)),
        }
    }

    if store.plain_text_uploads.load(Ordering::SeqCst) {
        return (StatusCode::OK, "stored").into_response();
    }

    Json(serde_json::json!({"message": "File uploaded successfully"})).into_response()
}

/// Running fake backend; aborted on drop
pub struct FakeBackend {
    pub url: String,
    pub store: Arc<BackendStore>,
    handle: JoinHandle<()>,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let store = Arc::new(BackendStore::default());

        let router = Router::new()
            .route("/api/get_csv_files", get(list_files))
            .route("/api/upload_csv", post(upload_csv))
            .with_state(Arc::clone(&store));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            url: format!("http://{}", addr),
            store,
            handle,
        }
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
