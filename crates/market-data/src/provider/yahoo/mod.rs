//! Yahoo Finance chart provider.
//!
//! Fetches daily/weekly/monthly bars for global instruments (equities,
//! indices such as `^GSPC`, ETFs) from the v8 chart endpoint:
//!
//! `GET /v8/finance/chart/{symbol}?period1={unix}&period2={unix}&interval={interval}`
//!
//! Throttled requests (HTTP 429) are retried with linear backoff. Rows with any
//! missing OHLCV value are dropped.

mod models;

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Number;
use tracing::debug;
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::{PriceBar, PriceTable};
use crate::provider::headers::yahoo_headers;
use crate::provider::retry::{send_with_backoff, BackoffPolicy};
use crate::provider::transport::{HttpRequest, HttpTransport};
use crate::utils::{date_to_unix, decimal_from_number, normalize_to_midnight, unix_to_datetime};

use models::ChartResponse;

pub const PROVIDER_ID: &str = "YAHOO";

/// Origin of the chart endpoint
pub const BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Sampling granularity used when the caller has no preference
pub const DEFAULT_INTERVAL: &str = "1d";

/// Yahoo Finance chart client.
pub struct YahooProvider {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    backoff: BackoffPolicy,
}

impl YahooProvider {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        base_url: impl Into<String>,
        backoff: BackoffPolicy,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            backoff,
        }
    }

    fn chart_url(&self, symbol: &str, start: NaiveDate, end: NaiveDate, interval: &str) -> String {
        format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval={}",
            self.base_url.trim_end_matches('/'),
            encode(symbol),
            date_to_unix(start),
            date_to_unix(end),
            encode(interval)
        )
    }

    /// Fetch bars for `symbol` between `start` and `end`.
    ///
    /// Both dates are sent as midnight UTC; whether the end date is included is
    /// up to Yahoo. `interval` is passed through as-is.
    pub async fn get_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
        interval: &str,
    ) -> Result<PriceTable, MarketDataError> {
        debug!(
            "Fetching {} bars for {} from {} to {} from Yahoo",
            interval, symbol, start, end
        );

        let request =
            HttpRequest::get(self.chart_url(symbol, start, end, interval)).with_headers(yahoo_headers());
        let response =
            send_with_backoff(self.transport.as_ref(), &request, self.backoff, PROVIDER_ID).await?;

        parse_chart(symbol, &response.body)
    }
}

fn cell(column: &[Option<Number>], i: usize) -> Option<Decimal> {
    column[i].as_ref().and_then(decimal_from_number)
}

/// Turn a chart payload into a table, dropping incomplete rows.
fn parse_chart(symbol: &str, body: &str) -> Result<PriceTable, MarketDataError> {
    let response: ChartResponse = serde_json::from_str(body)
        .map_err(|e| MarketDataError::malformed(PROVIDER_ID, e.to_string()))?;
    let series = response
        .into_series()
        .map_err(|message| MarketDataError::malformed(PROVIDER_ID, message))?;

    let quote = &series.quote;
    let mut bars = Vec::with_capacity(series.timestamps.len());

    for (i, &ts) in series.timestamps.iter().enumerate() {
        let time = unix_to_datetime(ts)
            .map(normalize_to_midnight)
            .ok_or_else(|| {
                MarketDataError::malformed(PROVIDER_ID, format!("invalid timestamp: {}", ts))
            })?;

        if let (Some(open), Some(high), Some(low), Some(close), Some(volume)) = (
            cell(&quote.open, i),
            cell(&quote.high, i),
            cell(&quote.low, i),
            cell(&quote.close, i),
            cell(&quote.volume, i),
        ) {
            bars.push(PriceBar::ohlcv(time, open, high, low, close, volume, symbol));
        }
    }

    let dropped = series.timestamps.len() - bars.len();
    if dropped > 0 {
        debug!("Dropped {} incomplete Yahoo rows for {}", dropped, symbol);
    }

    Ok(PriceTable::new(symbol, bars))
}
