//! Vietcap (VCI) gap-chart provider for Vietnamese stocks and indices.
//!
//! `POST /chart/OHLCChart/gap-chart` with `{timeFrame, symbols, countBack, to}`
//! returns `count_back` bars ending at the anchor timestamp `to`. There is no
//! retry; every call that gets a response is followed by a fixed cool-down.

mod models;

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::{PriceBar, PriceTable};
use crate::provider::headers::vietcap_headers;
use crate::provider::transport::{HttpRequest, HttpTransport};
use crate::utils::{coerce_decimal, coerce_timestamp, unix_to_datetime};

pub use models::{GapChartSeries, VietcapTimeframe};

use models::parse_gap_chart;

pub const PROVIDER_ID: &str = "VIETCAP";

/// API root; the gap-chart path is appended
pub const BASE_URL: &str = "https://trading.vietcap.com.vn/api";

pub const DEFAULT_TIMEFRAME: &str = "ONE_DAY";

/// Bars requested when the caller has no preference
pub const DEFAULT_COUNT_BACK: u32 = 3850;

/// Default anchor: 2025-02-14 00:00:00 UTC
pub const DEFAULT_TO_TIMESTAMP: i64 = 1739491200;

/// Vietcap gap-chart client.
pub struct VietcapProvider {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    cool_down: Duration,
}

impl VietcapProvider {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        base_url: impl Into<String>,
        cool_down: Duration,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            cool_down,
        }
    }

    fn gap_chart_url(&self) -> String {
        format!(
            "{}/chart/OHLCChart/gap-chart",
            self.base_url.trim_end_matches('/')
        )
    }

    /// Fetch `count_back` bars of `timeframe` for `symbol`, ending at
    /// `to_timestamp` (Unix seconds).
    ///
    /// The cool-down runs as soon as a response arrives, before its status is
    /// checked or its body parsed.
    pub async fn get_history(
        &self,
        symbol: &str,
        timeframe: &str,
        count_back: u32,
        to_timestamp: i64,
    ) -> Result<PriceTable, MarketDataError> {
        debug!(
            "Fetching {} {} bars for {} up to {} from Vietcap",
            count_back, timeframe, symbol, to_timestamp
        );

        let payload = json!({
            "timeFrame": timeframe,
            "symbols": [symbol],
            "countBack": count_back,
            "to": to_timestamp,
        });
        let request =
            HttpRequest::post_json(self.gap_chart_url(), payload).with_headers(vietcap_headers());

        let response = self.transport.execute(request).await?;

        if !self.cool_down.is_zero() {
            tokio::time::sleep(self.cool_down).await;
        }

        if !response.is_ok() {
            return Err(response.to_error(PROVIDER_ID));
        }

        parse_ohlc(symbol, &response.body)
    }
}

/// Expand parallel arrays into one row per timestamp.
///
/// Numeric cells that cannot be read become missing markers; the row is kept.
fn parse_ohlc(symbol: &str, body: &str) -> Result<PriceTable, MarketDataError> {
    let series =
        parse_gap_chart(body).map_err(|message| MarketDataError::malformed(PROVIDER_ID, message))?;

    let mut bars = Vec::with_capacity(series.iter().map(GapChartSeries::len).sum());
    for data in &series {
        for (i, raw_time) in data.t.iter().enumerate() {
            let time = coerce_timestamp(raw_time)
                .and_then(unix_to_datetime)
                .ok_or_else(|| {
                    MarketDataError::malformed(
                        PROVIDER_ID,
                        format!("invalid timestamp: {}", raw_time),
                    )
                })?;

            bars.push(PriceBar {
                time,
                open: coerce_decimal(&data.o[i]),
                high: coerce_decimal(&data.h[i]),
                low: coerce_decimal(&data.l[i]),
                close: coerce_decimal(&data.c[i]),
                volume: coerce_decimal(&data.v[i]),
                symbol: symbol.to_string(),
            });
        }
    }

    Ok(PriceTable::new(symbol, bars))
}
