//! Dashboard controller
//!
//! Drives [`DashboardState`] from user actions against a [`CsvBackend`]:
//! file upload, stored-file selection and list refreshes.

use super::{DashboardError, DashboardResult, DashboardState};
use crate::client::CsvBackend;
use crate::dataset::{CsvParser, Row, RowError, SelectedFile};

/// Summary of a handled upload
#[derive(Debug, Clone, PartialEq)]
pub struct UploadOutcome {
    pub file_name: String,
    /// Rows shown in the table
    pub row_count: usize,
    /// Rows that made it into the chart
    pub chart_points: usize,
    /// Record-level problems reported by the parser
    pub parse_errors: Vec<RowError>,
    /// Whether the backend acknowledged the upload and the list was refreshed
    pub persisted: bool,
}

/// Dashboard bound to a storage backend
pub struct Dashboard<B: CsvBackend> {
    backend: B,
    parser: CsvParser,
    state: DashboardState,
}

impl<B: CsvBackend> Dashboard<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            parser: CsvParser::default(),
            state: DashboardState::new(),
        }
    }

    pub fn with_parser(mut self, parser: CsvParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Initial load: fetch the stored file list
    pub async fn load(&mut self) -> bool {
        self.refresh_uploaded_files().await
    }

    /// Re-fetch the stored file list. On failure the current list is kept.
    pub async fn refresh_uploaded_files(&mut self) -> bool {
        match self.backend.list_files().await {
            Ok(files) => {
                tracing::info!(files = files.len(), "Refreshed file list");
                self.state.replace_uploaded_files(files);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching uploaded files");
                false
            }
        }
    }

    /// Parse, display and persist a user-selected file
    pub async fn handle_file_upload(
        &mut self,
        file: Option<SelectedFile>,
    ) -> DashboardResult<UploadOutcome> {
        let file = file.ok_or(DashboardError::NoFileSelected)?;

        let parsed = self.parser.parse_bytes(&file.contents)?;
        for error in &parsed.errors {
            tracing::warn!(file = %file.name, "{}", error);
        }

        let rows = parsed.rows;
        self.state.apply_rows(rows.clone());
        let row_count = self.state.table().len();
        let chart_points = self.state.series().len();

        let persisted = self.save_uploaded_file(&file.name, &rows).await;

        Ok(UploadOutcome {
            file_name: file.name,
            row_count,
            chart_points,
            parse_errors: parsed.errors,
            persisted,
        })
    }

    /// Send rows to the backend, then resync the file list.
    ///
    /// Nothing is added locally; a file shows up only after the backend
    /// acknowledges it and the following fetch succeeds.
    pub async fn save_uploaded_file(&mut self, file_name: &str, rows: &[Row]) -> bool {
        tracing::debug!(file = %file_name, rows = rows.len(), "Preparing to upload file");

        match self.backend.upload_file(file_name, rows).await {
            Ok(receipt) => {
                tracing::info!(
                    file = %file_name,
                    response = receipt.message().unwrap_or_default(),
                    "File uploaded successfully"
                );
                self.refresh_uploaded_files().await
            }
            Err(e) => {
                tracing::error!(file = %file_name, error = %e, "Error uploading file");
                false
            }
        }
    }

    /// Display a previously stored file. No backend round trip.
    pub fn handle_select_file(&mut self, file_name: &str) -> bool {
        self.state.select_file(file_name)
    }
}
