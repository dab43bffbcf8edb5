//! API utilities for frontend-backend communication
//!
//! Provides helpers for constructing API URLs.

/// Compile-time override for the API base URL (e.g. `https://ems.example.com/api`)
const API_BASE_OVERRIDE: Option<&str> = option_env!("EMS_API_BASE");

/// Get the base URL for API requests
///
/// Uses `EMS_API_BASE` when it was set at build time, otherwise derives the
/// URL from the current window location with port 3000 for the backend.
///
/// # Returns
/// - API base URL like "http://localhost:3000/api"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000/api", protocol, hostname)
}

/// Build a full API URL from a resource path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/Departments/7");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://h:3000/api", "/Banks"), "http://h:3000/api/Banks");
        assert_eq!(join_url("http://h:3000/api", "Banks/3"), "http://h:3000/api/Banks/3");
    }
}
