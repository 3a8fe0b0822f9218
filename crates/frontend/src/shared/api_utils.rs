//! API utilities for frontend-backend communication.

/// Get the base URL for backend requests.
///
/// Constructs the base URL from the current window location, using
/// port 5000 for the extraction/query backend.
///
/// # Returns
/// - Base URL like "http://localhost:5000" or "https://example.com:5000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:5000", protocol, hostname)
}
