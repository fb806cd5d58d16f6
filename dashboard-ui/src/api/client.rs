//! HTTP API Client
//!
//! The backend URL comes from local storage when set, otherwise from
//! `DASHBOARD_BACKEND_URL` at build time, otherwise the default.

use csv_dashboard::client::{HttpBackend, DEFAULT_BACKEND_URL};

/// Local storage key overriding the backend URL
const BACKEND_URL_KEY: &str = "csv_dashboard_backend_url";

/// Backend URL baked in at build time
const BUILD_BACKEND_URL: Option<&str> = option_env!("DASHBOARD_BACKEND_URL");

/// Pick the first non-empty candidate, falling back to the default
fn resolve_backend_url(stored: Option<String>, build_time: Option<&str>) -> String {
    let url = stored
        .filter(|u| !u.trim().is_empty())
        .or_else(|| {
            build_time
                .filter(|u| !u.trim().is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Get the backend URL from local storage, build env or default
pub fn get_backend_url() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(BACKEND_URL_KEY).ok().flatten());

    resolve_backend_url(stored, BUILD_BACKEND_URL)
}

/// Client for the configured backend
pub fn backend() -> HttpBackend {
    HttpBackend::new(get_backend_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_local_storage() {
        let url = resolve_backend_url(Some("http://files:9000/".to_string()), Some("http://build"));
        assert_eq!(url, "http://files:9000");
    }

    #[test]
    fn test_resolve_skips_empty_values() {
        let url = resolve_backend_url(Some(String::new()), Some(""));
        assert_eq!(url, "http://localhost:5000");

        let url = resolve_backend_url(None, Some("http://build:5001"));
        assert_eq!(url, "http://build:5001");
    }
}
