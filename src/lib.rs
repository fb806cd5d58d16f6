//! # CSV Dashboard
//!
//! Core of a small dashboard that charts uploaded CSV files and keeps them in
//! a remote storage backend.
//!
//! ## Features
//!
//! - **CSV parsing**: header-driven rows with automatic scalar typing
//! - **Bar chart**: `Label`/`Value` rows laid out and drawn on any surface
//! - **Persistence**: upload and list files over JSON/HTTP
//! - **State**: one owned state struct the UI renders from
//!
//! ## Modules
//!
//! - [`dataset`]: rows, scalars, CSV parsing
//! - [`series`]: row processor producing the chart series
//! - [`chart`]: bar chart layout and renderer
//! - [`client`]: storage backend client
//! - [`dashboard`]: application state and handlers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use csv_dashboard::{Config, Dashboard, HttpBackend, SelectedFile};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load_default();
//! let mut dashboard = Dashboard::new(HttpBackend::from_config(&config.backend));
//!
//! dashboard.load().await;
//!
//! let file = SelectedFile::new("sales.csv", std::fs::read("sales.csv")?);
//! let outcome = dashboard.handle_file_upload(Some(file)).await?;
//! println!("{} rows, {} bars", outcome.row_count, outcome.chart_points);
//!
//! dashboard.handle_select_file("sales.csv");
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod dataset;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod series;

pub use dataset::{
    CsvParser, DatasetError, DatasetResult, ParsedCsv, Row, RowError, Scalar, SelectedFile,
    StoredFile,
};

pub use series::{chart_series, process_rows, ChartSeries, ProcessedRows};

pub use chart::{
    BarChart, ChartOptions, ChartRenderer, DrawingSurface, RenderOutcome, CHART_ELEMENT_ID,
};

pub use client::{
    ClientError, ClientResult, CsvBackend, HttpBackend, UploadReceipt, DEFAULT_BACKEND_URL,
};

pub use dashboard::{Dashboard, DashboardError, DashboardResult, DashboardState, UploadOutcome};

pub use config::{BackendConfig, Config, ConfigError, LoggingConfig};
