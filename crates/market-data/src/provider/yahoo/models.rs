//! Yahoo Finance chart API response models.
//!
//! Only the parts of the v8 chart payload needed to build OHLCV rows are
//! modelled. Everything is optional at this layer; [`ChartResponse::into_series`]
//! turns the loose shape into a validated [`ChartSeries`].

use serde::Deserialize;
use serde_json::Number;

/// Top-level wrapper: `{"chart": {...}}`
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Option<ChartEnvelope>,
}

/// Chart container holding results or an error
#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

/// Error block Yahoo fills in when it has no result
#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: Option<String>,
    pub description: Option<String>,
}

/// One instrument's series
#[derive(Debug, Deserialize)]
pub struct ChartResult {
    /// Bar open times (Unix seconds)
    pub timestamp: Option<Vec<i64>>,
    pub indicators: Option<ChartIndicators>,
}

#[derive(Debug, Deserialize)]
pub struct ChartIndicators {
    #[serde(default)]
    pub quote: Vec<QuoteColumns>,
}

/// Parallel OHLCV arrays. Yahoo sends `null` for bars without trades.
#[derive(Debug, Default, Deserialize)]
pub struct QuoteColumns {
    #[serde(default)]
    pub open: Vec<Option<Number>>,
    #[serde(default)]
    pub high: Vec<Option<Number>>,
    #[serde(default)]
    pub low: Vec<Option<Number>>,
    #[serde(default)]
    pub close: Vec<Option<Number>>,
    #[serde(default)]
    pub volume: Vec<Option<Number>>,
}

/// Validated series: one timestamp per row, every column the same length.
#[derive(Debug)]
pub struct ChartSeries {
    pub timestamps: Vec<i64>,
    pub quote: QuoteColumns,
}

impl ChartResponse {
    /// Check the shape and pull out the first result's series.
    ///
    /// Returns a description of the first problem found.
    pub fn into_series(self) -> Result<ChartSeries, String> {
        let envelope = self.chart.ok_or("missing chart")?;

        let result = match envelope.result.and_then(|r| r.into_iter().next()) {
            Some(result) => result,
            None => {
                let detail = envelope
                    .error
                    .and_then(|e| e.description.or(e.code))
                    .unwrap_or_else(|| "no result".to_string());
                return Err(format!("empty chart result ({})", detail));
            }
        };

        let (timestamps, indicators) = match (result.timestamp, result.indicators) {
            (Some(timestamps), Some(indicators)) => (timestamps, indicators),
            _ => return Err("missing timestamp or indicators".to_string()),
        };

        let quote = indicators
            .quote
            .into_iter()
            .next()
            .ok_or("missing indicators.quote[0]")?;

        let rows = timestamps.len();
        let columns = [
            ("open", quote.open.len()),
            ("high", quote.high.len()),
            ("low", quote.low.len()),
            ("close", quote.close.len()),
            ("volume", quote.volume.len()),
        ];
        if let Some((name, len)) = columns.iter().find(|(_, len)| *len != rows) {
            return Err(format!(
                "column {} has {} values for {} timestamps",
                name, len, rows
            ));
        }

        Ok(ChartSeries { timestamps, quote })
    }
}
