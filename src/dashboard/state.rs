//! Dashboard State
//!
//! Everything the dashboard shows: chart series, table rows, the list of
//! stored files from the last successful fetch, and the selected file name.

use crate::dataset::{Row, Scalar, StoredFile};
use crate::series::{process_rows, ChartSeries};

static NULL: Scalar = Scalar::Null;

/// Owned application state, passed explicitly to handlers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    series: ChartSeries,
    table: Vec<Row>,
    uploaded_files: Vec<StoredFile>,
    selected_file: Option<String>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run rows through the row processor and display them
    pub fn apply_rows(&mut self, rows: Vec<Row>) {
        let processed = process_rows(rows);
        self.series = processed.series;
        self.table = processed.table;
    }

    /// Swap in a freshly fetched file list
    pub fn replace_uploaded_files(&mut self, files: Vec<StoredFile>) {
        self.uploaded_files = files;
    }

    /// Select a stored file by name and display its rows.
    ///
    /// Returns false when no cached record has that name; the display is then
    /// left as it was.
    pub fn select_file(&mut self, file_name: &str) -> bool {
        self.selected_file = Some(file_name.to_string());
        match self.find_file(file_name) {
            Some(file) => {
                let rows = file.rows.clone();
                self.apply_rows(rows);
                true
            }
            None => false,
        }
    }

    /// First cached record with this name
    pub fn find_file(&self, file_name: &str) -> Option<&StoredFile> {
        self.uploaded_files.iter().find(|f| f.file_name == file_name)
    }

    pub fn series(&self) -> &ChartSeries {
        &self.series
    }

    pub fn table(&self) -> &[Row] {
        &self.table
    }

    pub fn uploaded_files(&self) -> &[StoredFile] {
        &self.uploaded_files
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.uploaded_files
            .iter()
            .map(|f| f.file_name.as_str())
            .collect()
    }

    pub fn selected_file(&self) -> Option<&str> {
        self.selected_file.as_deref()
    }

    /// Table header: the columns of the first row
    pub fn table_columns(&self) -> Vec<&str> {
        self.table
            .first()
            .map(|row| row.columns().collect())
            .unwrap_or_default()
    }

    /// Cells of a row aligned to [`table_columns`](Self::table_columns)
    pub fn table_cells<'a>(&'a self, row: &'a Row) -> Vec<&'a Scalar> {
        self.table_columns()
            .into_iter()
            .map(|column| row.get(column).unwrap_or(&NULL))
            .collect()
    }
}
