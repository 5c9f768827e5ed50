//! Error types and retry classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The error enum for both fetch operations
//! - [`RetryClass`]: Classification for determining retry behavior

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Errors that can occur while fetching a price series.
///
/// Each variant is classified into a [`RetryClass`] via the [`retry_class`](Self::retry_class)
/// method. Data-quality problems inside an otherwise valid response (a missing
/// price, a volume that is not a number) are never errors; they surface as
/// dropped rows or missing-value markers on the returned table.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider answered with a non-success status.
    /// Never retried by the fetcher.
    #[error("Error {status}: {reason}")]
    Http {
        /// The provider that rejected the request
        provider: String,
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase for the status
        reason: String,
    },

    /// The provider throttled (HTTP 429) every attempt.
    #[error("Retries exhausted: {provider} throttled {attempts} attempts")]
    RetriesExhausted {
        /// The provider that kept throttling
        provider: String,
        /// Number of requests sent before giving up
        attempts: u32,
    },

    /// The response body did not have the expected shape.
    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse {
        /// The provider that returned the body
        provider: String,
        /// What was missing or wrong
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Shorthand for a [`MalformedResponse`](Self::MalformedResponse).
    pub(crate) fn malformed(provider: &str, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            provider: provider.to_string(),
            message: message.into(),
        }
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns the retry classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricefeed_market_data::errors::{MarketDataError, RetryClass};
    ///
    /// let error = MarketDataError::RetriesExhausted { provider: "YAHOO".to_string(), attempts: 5 };
    /// assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    ///
    /// let error = MarketDataError::Http {
    ///     provider: "YAHOO".to_string(),
    ///     status: 404,
    ///     reason: "Not Found".to_string(),
    /// };
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            // Provider said no, or sent something we can't read
            Self::Http { .. } | Self::MalformedResponse { .. } => RetryClass::Never,

            // Transient - the same call may work later
            Self::RetriesExhausted { .. } | Self::Network(_) => RetryClass::WithBackoff,
        }
    }
}
