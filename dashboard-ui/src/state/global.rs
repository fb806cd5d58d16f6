//! Global Application State
//!
//! Reactive wrapper around the core [`DashboardState`].

use csv_dashboard::{
    CsvBackend, CsvParser, DashboardState, DatasetResult, HttpBackend, Row, SelectedFile,
};
use leptos::*;
use web_sys::console;

use crate::api;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Chart series, table rows, stored files and selection
    pub dashboard: RwSignal<DashboardState>,
    /// Storage backend client
    pub backend: HttpBackend,
    /// Parser used for every uploaded file
    parser: CsvParser,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        dashboard: create_rw_signal(DashboardState::new()),
        backend: api::backend(),
        parser: CsvParser::new(),
    };
    provide_context(state);
}

impl GlobalState {
    /// Replace the chart series and table with `rows`
    pub fn process_rows(&self, rows: Vec<Row>) {
        self.dashboard.update(|d| d.apply_rows(rows));
    }

    /// Show a previously uploaded file
    pub fn select_file(&self, file_name: &str) {
        self.dashboard.update(|d| {
            if !d.select_file(file_name) {
                console::warn_1(&format!("No uploaded file named {}", file_name).into());
            }
        });
    }

    /// Parse an uploaded file, show it and persist it in the background
    pub fn handle_file_contents(&self, file: SelectedFile) -> DatasetResult<()> {
        let parsed = self.parser.parse_bytes(&file.contents)?;
        for error in &parsed.errors {
            console::warn_1(&format!("{}: {}", file.name, error).into());
        }

        self.process_rows(parsed.rows.clone());
        self.save_uploaded_file(file.name, parsed.rows);
        Ok(())
    }

    /// Re-fetch the stored file list
    pub fn refresh_uploaded_files(&self) {
        let state = self.clone();
        spawn_local(async move {
            state.fetch_uploaded_files().await;
        });
    }

    /// Upload rows, then refresh the stored file list on success
    pub fn save_uploaded_file(&self, file_name: String, rows: Vec<Row>) {
        let state = self.clone();
        spawn_local(async move {
            console::log_1(
                &format!("Preparing to upload file: {} ({} rows)", file_name, rows.len()).into(),
            );

            match state.backend.upload_file(&file_name, &rows).await {
                Ok(receipt) => {
                    let message = receipt.message().unwrap_or("File uploaded");
                    console::log_1(&format!("{}: {}", file_name, message).into());
                    state.fetch_uploaded_files().await;
                }
                Err(e) => {
                    console::error_1(&format!("Error uploading file: {}", e).into());
                }
            }
        });
    }

    async fn fetch_uploaded_files(&self) {
        match self.backend.list_files().await {
            Ok(files) => self.dashboard.update(|d| d.replace_uploaded_files(files)),
            // Keep the previous list
            Err(e) => console::error_1(&format!("Error fetching uploaded files: {}", e).into()),
        }
    }
}
