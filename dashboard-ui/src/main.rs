//! CSV Dashboard
//!
//! Browser dashboard for CSV files, built with Leptos (WASM).
//!
//! # Features
//!
//! - Upload a CSV file and chart its `Label`/`Value` rows
//! - Tabular view of every parsed row
//! - Uploads persisted to the storage backend
//! - Re-open any previously uploaded file
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Parsing, chart layout and the backend client come from the
//! `csv-dashboard` core crate; this crate wires them to the DOM.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
