//! App Root Component
//!
//! Single-page layout: file input, chart, table and stored-file selector.

use leptos::*;

use crate::components::{Chart, DataTable, FileSelector, FileUpload};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    // Previously uploaded files, fetched once on mount
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    state.refresh_uploaded_files();

    view! {
        <div>
            <h1>"Dashboard: CSV Data Visualization"</h1>
            <FileUpload />
            <Chart />
            <DataTable />
            <FileSelector />
        </div>
    }
}
