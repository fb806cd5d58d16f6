//! UI Components

mod chart;
mod data_table;
mod file_selector;
mod file_upload;

pub use chart::Chart;
pub use data_table::DataTable;
pub use file_selector::FileSelector;
pub use file_upload::FileUpload;
