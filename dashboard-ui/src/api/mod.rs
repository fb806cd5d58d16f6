//! Backend API
//!
//! Resolves the backend URL and builds the shared client.

mod client;

pub use client::{backend, get_backend_url};
