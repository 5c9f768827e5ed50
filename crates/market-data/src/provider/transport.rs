//! HTTP transport seam.
//!
//! Providers build an [`HttpRequest`], hand it to an [`HttpTransport`], and
//! inspect the buffered [`HttpResponse`]. Status handling stays in the
//! providers; the transport only moves bytes.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;

use crate::errors::MarketDataError;

/// Outgoing request, independent of the HTTP client in use.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    /// JSON body, sent only for POST requests
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn post_json(url: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers: HeaderMap::new(),
            body: Some(body),
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }
}

/// Fully buffered response.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Only 200 counts as success for both feeds.
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// Canonical reason phrase for the status, e.g. "Not Found".
    pub fn reason(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("Unknown")
    }

    pub(crate) fn to_error(&self, provider: &str) -> MarketDataError {
        MarketDataError::Http {
            provider: provider.to_string(),
            status: self.status.as_u16(),
            reason: self.reason().to_string(),
        }
    }
}

/// Sends one request and returns the buffered response.
///
/// Implementations must not interpret the status code; a 404 or 429 is a
/// successful `execute`. Only failures to get any response at all are errors.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, MarketDataError>;
}

/// [`HttpTransport`] backed by a shared `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build the client. `None` leaves reqwest's default (no overall timeout).
    pub fn new(timeout: Option<Duration>) -> Result<Self, MarketDataError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, MarketDataError> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_reason() {
        assert_eq!(HttpResponse::new(StatusCode::NOT_FOUND, "").reason(), "Not Found");
        assert_eq!(
            HttpResponse::new(StatusCode::TOO_MANY_REQUESTS, "").reason(),
            "Too Many Requests"
        );
    }

    #[test]
    fn test_only_200_is_ok() {
        assert!(HttpResponse::new(StatusCode::OK, "{}").is_ok());
        assert!(!HttpResponse::new(StatusCode::NO_CONTENT, "").is_ok());
        assert!(!HttpResponse::new(StatusCode::NOT_FOUND, "").is_ok());
    }

    #[test]
    fn test_to_error_carries_status_and_reason() {
        let error = HttpResponse::new(StatusCode::FORBIDDEN, "denied").to_error("VIETCAP");
        match error {
            MarketDataError::Http {
                provider,
                status,
                reason,
            } => {
                assert_eq!(provider, "VIETCAP");
                assert_eq!(status, 403);
                assert_eq!(reason, "Forbidden");
            }
            other => panic!("Expected Http error, got {:?}", other),
        }
    }

    #[test]
    fn test_request_builders() {
        let get = HttpRequest::get("https://example.test/a");
        assert_eq!(get.method, Method::GET);
        assert!(get.body.is_none());

        let post = HttpRequest::post_json("https://example.test/b", json!({"to": 1}));
        assert_eq!(post.method, Method::POST);
        assert_eq!(post.body, Some(json!({"to": 1})));
    }

    #[test]
    fn test_reqwest_transport_builds() {
        assert!(ReqwestTransport::new(None).is_ok());
        assert!(ReqwestTransport::new(Some(Duration::from_secs(30))).is_ok());
    }
}
