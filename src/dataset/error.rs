//! Dataset error types
//!
//! Errors raised while turning uploaded bytes into rows.

use std::fmt;
use thiserror::Error;

/// Errors that stop a CSV file from being read at all
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The underlying CSV reader failed (unreadable header, I/O)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The configured delimiter cannot be used
    #[error("Invalid delimiter: {0:?}")]
    InvalidDelimiter(char),
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// A problem with a single record that did not abort the parse
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    /// 1-based line number in the source file
    pub line: u64,
    pub kind: RowErrorKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowErrorKind {
    /// Record is shorter than the header; the row keeps the fields it has
    TooFewFields { expected: usize, found: usize },
    /// Record is longer than the header; extra fields are dropped
    TooManyFields { expected: usize, found: usize },
    /// Record could not be decoded and was skipped
    Malformed(String),
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RowErrorKind::TooFewFields { expected, found } => write!(
                f,
                "Line {}: too few fields (expected {}, found {})",
                self.line, expected, found
            ),
            RowErrorKind::TooManyFields { expected, found } => write!(
                f,
                "Line {}: too many fields (expected {}, found {})",
                self.line, expected, found
            ),
            RowErrorKind::Malformed(reason) => write!(f, "Line {}: {}", self.line, reason),
        }
    }
}
