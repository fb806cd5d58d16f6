//! Dataset Layer
//!
//! Typed rows parsed from uploaded CSV files, and the record shape the
//! backend stores them under.

mod error;
mod parser;
mod types;

pub use error::{DatasetError, DatasetResult, RowError, RowErrorKind};
pub use parser::{infer_scalar, CsvParser, ParsedCsv};
pub use types::{Row, Scalar, SelectedFile, StoredFile, MAX_SAFE_INTEGER};
