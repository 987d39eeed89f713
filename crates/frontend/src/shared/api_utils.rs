//! API utilities for client-server communication
//!
//! All endpoints live on the same origin as the rendered page; the
//! server supplies the paths through the page context.

/// Get the base URL for API requests
///
/// Constructs the base URL from the current window location.
///
/// # Returns
/// - Origin like "https://example.com"
/// - Empty string if window is not available (relative URLs still work)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full URL from a server-supplied path
pub fn api_url(path: &str) -> String {
    if path.starts_with("http") {
        return path.to_string();
    }
    format!("{}{}", api_base(), path)
}
