//! Chart providers and the transport they share.
//!
//! This module contains:
//! - The `HttpTransport` trait and its reqwest-backed implementation
//! - Request headers and the linear backoff used for throttled requests
//! - One client per provider: Yahoo (global chart feed) and Vietcap
//!   (Vietnamese gap-chart feed)

mod headers;
mod retry;
mod transport;

pub mod vietcap;
pub mod yahoo;

// Re-exports
pub use headers::{vietcap_headers, yahoo_headers};
pub use retry::BackoffPolicy;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
