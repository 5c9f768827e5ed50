//! HTTP headers for the chart providers.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};

/// Both feeds reject default client identifiers.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

/// Create headers for Yahoo chart requests
pub fn yahoo_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers
}

/// Create headers for Vietcap gap-chart requests
pub fn vietcap_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}
