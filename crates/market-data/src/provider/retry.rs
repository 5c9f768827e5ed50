//! Linear backoff for throttled requests.

use std::time::Duration;

use tracing::{debug, warn};

use crate::errors::MarketDataError;

use super::transport::{HttpRequest, HttpResponse, HttpTransport};

/// How many times to try and how long to wait between throttled attempts.
///
/// The wait after attempt `n` (1-based) is `step * n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackoffPolicy {
    pub max_attempts: u32,
    pub step: Duration,
}

impl BackoffPolicy {
    /// `max_attempts` is clamped to at least one request.
    pub fn new(max_attempts: u32, step: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            step,
        }
    }

    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.step * attempt
    }
}

/// Result of a single attempt.
#[derive(Debug)]
pub(crate) enum AttemptOutcome {
    Success(HttpResponse),
    Throttled { attempt: u32 },
    HardFailure(HttpResponse),
}

impl AttemptOutcome {
    pub(crate) fn classify(attempt: u32, response: HttpResponse) -> Self {
        if response.is_ok() {
            Self::Success(response)
        } else if response.status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            Self::Throttled { attempt }
        } else {
            Self::HardFailure(response)
        }
    }
}

/// Send `request` until it returns 200, sleeping between throttled attempts.
///
/// Any status other than 200 or 429 fails at once. Throttling on every
/// attempt ends in [`MarketDataError::RetriesExhausted`]; there is no sleep
/// after the last attempt.
pub(crate) async fn send_with_backoff(
    transport: &dyn HttpTransport,
    request: &HttpRequest,
    policy: BackoffPolicy,
    provider: &str,
) -> Result<HttpResponse, MarketDataError> {
    for attempt in 1..=policy.max_attempts {
        debug!(
            "{} attempt {}/{}: {}",
            provider, attempt, policy.max_attempts, request.url
        );
        let response = transport.execute(request.clone()).await?;

        match AttemptOutcome::classify(attempt, response) {
            AttemptOutcome::Success(response) => return Ok(response),
            AttemptOutcome::HardFailure(response) => return Err(response.to_error(provider)),
            AttemptOutcome::Throttled { attempt } => {
                if attempt < policy.max_attempts {
                    let wait = policy.delay_for(attempt);
                    warn!(
                        "{} rate limited on attempt {}, retrying in {:?}",
                        provider, attempt, wait
                    );
                    tokio::time::sleep(wait).await;
                }
            }
        }
    }

    warn!(
        "{} still rate limited after {} attempts",
        provider, policy.max_attempts
    );
    Err(MarketDataError::RetriesExhausted {
        provider: provider.to_string(),
        attempts: policy.max_attempts,
    })
}
