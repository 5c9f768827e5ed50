//! Vietcap gap-chart models.

use serde::Deserialize;
use serde_json::Value;

/// Raw OHLC series from the gap-chart API (parallel array format).
///
/// Cells are kept as raw JSON; Vietcap has been seen sending numbers as
/// strings, so conversion happens per cell when rows are built.
#[derive(Debug, Clone, Deserialize)]
pub struct GapChartSeries {
    /// Symbol (optional, not present in all responses)
    #[serde(default)]
    pub symbol: Option<String>,
    /// Timestamps (Unix seconds)
    pub t: Vec<Value>,
    /// Open prices
    pub o: Vec<Value>,
    /// High prices
    pub h: Vec<Value>,
    /// Low prices
    pub l: Vec<Value>,
    /// Close prices
    pub c: Vec<Value>,
    /// Volume
    pub v: Vec<Value>,
}

impl GapChartSeries {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Every value column must line up with `t`.
    pub fn check_lengths(&self) -> Result<(), String> {
        let rows = self.t.len();
        let columns = [
            ("o", self.o.len()),
            ("h", self.h.len()),
            ("l", self.l.len()),
            ("c", self.c.len()),
            ("v", self.v.len()),
        ];
        match columns.iter().find(|(_, len)| *len != rows) {
            Some((name, len)) => Err(format!(
                "column {} has {} values for {} timestamps",
                name, len, rows
            )),
            None => Ok(()),
        }
    }
}

/// Decode a gap-chart body into its series.
///
/// The API answers with an array of series, one per requested symbol. Some
/// deployments wrap each symbol's series in its own array; one level of
/// nesting is flattened. A bare series object is accepted too.
pub fn parse_gap_chart(body: &str) -> Result<Vec<GapChartSeries>, String> {
    let value: Value = serde_json::from_str(body).map_err(|e| e.to_string())?;
    let mut series = Vec::new();
    collect_series(value, 0, &mut series)?;
    Ok(series)
}

fn collect_series(value: Value, depth: usize, out: &mut Vec<GapChartSeries>) -> Result<(), String> {
    match value {
        Value::Array(items) if depth < 2 => {
            for item in items {
                collect_series(item, depth + 1, out)?;
            }
            Ok(())
        }
        Value::Object(_) => {
            let series: GapChartSeries =
                serde_json::from_value(value).map_err(|e| e.to_string())?;
            series.check_lengths()?;
            out.push(series);
            Ok(())
        }
        other => Err(format!("unexpected value in gap-chart payload: {}", other)),
    }
}

/// Known timeframe tokens for the gap-chart API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VietcapTimeframe {
    OneMinute,
    OneHour,
    OneDay,
}

impl VietcapTimeframe {
    /// Get API value for timeframe
    pub fn as_api_value(&self) -> &'static str {
        match self {
            VietcapTimeframe::OneMinute => "ONE_MINUTE",
            VietcapTimeframe::OneHour => "ONE_HOUR",
            VietcapTimeframe::OneDay => "ONE_DAY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flat_payload() {
        let body = r#"[{"symbol": "VNINDEX", "t": ["100", "200"], "o": [10, 11], "h": [12, 13], "l": [9, 9], "c": [11, 12], "v": [1000, 1500], "accumulatedVolume": [], "accumulatedValue": [], "minBatchTruncTime": null}]"#;
        let series = parse_gap_chart(body).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].len(), 2);
        assert_eq!(series[0].symbol.as_deref(), Some("VNINDEX"));
    }

    #[test]
    fn test_parse_nested_payload() {
        let body = r#"[[{"t": [100], "o": [1], "h": [1], "l": [1], "c": [1], "v": [1]}], [{"t": [200, 300], "o": [1, 2], "h": [1, 2], "l": [1, 2], "c": [1, 2], "v": [1, 2]}]]"#;
        let series = parse_gap_chart(body).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.iter().map(|s| s.len()).sum::<usize>(), 3);
    }

    #[test]
    fn test_parse_empty_payload() {
        assert!(parse_gap_chart("[]").unwrap().is_empty());
    }

    #[test]
    fn test_missing_column_is_error() {
        let body = r#"[{"t": [100], "o": [1], "h": [1], "l": [1], "c": [1]}]"#;
        assert!(parse_gap_chart(body).unwrap_err().contains("missing field `v`"));
    }

    #[test]
    fn test_length_mismatch_is_error() {
        let body = r#"[{"t": [100, 200], "o": [1, 2], "h": [1, 2], "l": [1, 2], "c": [1, 2], "v": [1]}]"#;
        assert_eq!(
            parse_gap_chart(body).unwrap_err(),
            "column v has 1 values for 2 timestamps"
        );
    }

    #[test]
    fn test_scalar_payload_is_error() {
        assert!(parse_gap_chart("42").is_err());
        assert!(parse_gap_chart("[[[{}]]]").is_err());
    }

    #[test]
    fn test_timeframe_api_values() {
        assert_eq!(VietcapTimeframe::OneDay.as_api_value(), "ONE_DAY");
        assert_eq!(VietcapTimeframe::OneHour.as_api_value(), "ONE_HOUR");
        assert_eq!(VietcapTimeframe::OneMinute.as_api_value(), "ONE_MINUTE");
    }
}
