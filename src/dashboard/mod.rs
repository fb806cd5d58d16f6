//! Dashboard
//!
//! Application state and the handlers that mutate it.

mod controller;
mod state;

pub use controller::{Dashboard, UploadOutcome};
pub use state::DashboardState;

use thiserror::Error;

use crate::dataset::DatasetError;

/// Prompt shown when the file input fires without a file
pub const SELECT_FILE_PROMPT: &str = "Please select a CSV file first.";

/// Errors surfaced to the user by dashboard handlers
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Please select a CSV file first.")]
    NoFileSelected,

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
