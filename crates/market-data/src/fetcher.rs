//! The data fetcher: one entry point per provider.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::config::FetcherConfig;
use crate::errors::MarketDataError;
use crate::models::PriceTable;
use crate::provider::vietcap::VietcapProvider;
use crate::provider::yahoo::YahooProvider;
use crate::provider::{BackoffPolicy, HttpTransport, ReqwestTransport};

/// Fetches historical bars from Yahoo Finance and Vietcap.
///
/// Both operations are independent and hold nothing between calls except the
/// shared HTTP transport, so one fetcher can serve concurrent requests.
/// Cross-symbol throttling is left to the caller.
pub struct DataFetcher {
    yahoo: YahooProvider,
    vietcap: VietcapProvider,
}

impl DataFetcher {
    /// Build a fetcher on a reqwest client.
    pub fn new(config: FetcherConfig) -> Result<Self, MarketDataError> {
        let transport = ReqwestTransport::new(config.request_timeout)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Build a fetcher on any transport.
    pub fn with_transport(config: FetcherConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let backoff = BackoffPolicy::new(config.max_retries, config.backoff_step);
        debug!(
            "Creating data fetcher: max_retries={}, delay={:?}",
            backoff.max_attempts, config.delay
        );

        Self {
            yahoo: YahooProvider::new(transport.clone(), config.yahoo_base_url, backoff),
            vietcap: VietcapProvider::new(transport, config.vietcap_base_url, config.delay),
        }
    }

    /// Historical bars for a global instrument from the Yahoo chart feed.
    ///
    /// Rows are keyed by calendar date (midnight UTC). Rows with any missing
    /// OHLCV value are dropped.
    pub async fn fetch_global(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        interval: &str,
    ) -> Result<PriceTable, MarketDataError> {
        self.yahoo
            .get_history(symbol, start_date, end_date, interval)
            .await
    }

    /// Historical bars for a Vietnamese instrument from the Vietcap feed.
    ///
    /// Rows keep their full timestamp. Cells that are not numbers come back
    /// as `None`.
    pub async fn fetch_vietnam(
        &self,
        symbol: &str,
        timeframe: &str,
        count_back: u32,
        to_timestamp: i64,
    ) -> Result<PriceTable, MarketDataError> {
        self.vietcap
            .get_history(symbol, timeframe, count_back, to_timestamp)
            .await
    }
}
