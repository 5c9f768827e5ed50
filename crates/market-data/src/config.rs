//! Fetcher configuration.

use std::time::Duration;

use crate::provider::{vietcap, yahoo};

/// Attempts against the Yahoo feed before giving up on throttling
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Cool-down after every Vietcap call
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Unit of the linear Yahoo backoff: attempt `n` waits `n` steps
pub const DEFAULT_BACKOFF_STEP: Duration = Duration::from_secs(5);

/// Settings fixed when a [`DataFetcher`](crate::DataFetcher) is built.
#[derive(Clone, Debug, PartialEq)]
pub struct FetcherConfig {
    /// Maximum Yahoo attempts; values below one are treated as one
    pub max_retries: u32,

    /// Pause after each Vietcap response
    pub delay: Duration,

    pub backoff_step: Duration,

    /// Overall HTTP timeout; `None` leaves the transport default
    pub request_timeout: Option<Duration>,

    pub yahoo_base_url: String,

    pub vietcap_base_url: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            delay: DEFAULT_DELAY,
            backoff_step: DEFAULT_BACKOFF_STEP,
            request_timeout: None,
            yahoo_base_url: yahoo::BASE_URL.to_string(),
            vietcap_base_url: vietcap::BASE_URL.to_string(),
        }
    }
}

impl FetcherConfig {
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self {
            max_retries,
            delay,
            ..Default::default()
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_backoff_step(mut self, step: Duration) -> Self {
        self.backoff_step = step;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_yahoo_base_url(mut self, url: impl Into<String>) -> Self {
        self.yahoo_base_url = url.into();
        self
    }

    pub fn with_vietcap_base_url(mut self, url: impl Into<String>) -> Self {
        self.vietcap_base_url = url.into();
        self
    }
}
