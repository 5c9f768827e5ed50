//! Price table returned by every fetch.

use std::fmt;

use chrono::{DateTime, Timelike, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::bar::PriceBar;

/// Ordered series of [`PriceBar`]s for one symbol.
///
/// Rows are kept in the order the provider produced them, which is ascending
/// time in practice. The table is not re-sorted and time uniqueness is not
/// checked.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PriceTable {
    symbol: String,
    bars: Vec<PriceBar>,
}

impl PriceTable {
    pub fn new(symbol: impl Into<String>, bars: Vec<PriceBar>) -> Self {
        Self {
            symbol: symbol.into(),
            bars,
        }
    }

    /// Symbol every row in this table carries.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PriceBar> {
        self.bars.iter()
    }

    /// Row keyed by `time`. Returns the first match.
    pub fn get(&self, time: DateTime<Utc>) -> Option<&PriceBar> {
        self.bars.iter().find(|bar| bar.time == time)
    }

    pub fn first(&self) -> Option<&PriceBar> {
        self.bars.first()
    }

    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    pub fn into_bars(self) -> Vec<PriceBar> {
        self.bars
    }
}

impl<'a> IntoIterator for &'a PriceTable {
    type Item = &'a PriceBar;
    type IntoIter = std::slice::Iter<'a, PriceBar>;

    fn into_iter(self) -> Self::IntoIter {
        self.bars.iter()
    }
}

fn cell(value: Option<Decimal>) -> String {
    value.map_or_else(|| "NaN".to_string(), |v| v.normalize().to_string())
}

impl fmt::Display for PriceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Date-only key when every row sits on midnight (daily global bars)
        let date_only = self
            .bars
            .iter()
            .all(|bar| bar.time.num_seconds_from_midnight() == 0);
        let time_format = if date_only {
            "%Y-%m-%d"
        } else {
            "%Y-%m-%d %H:%M:%S"
        };
        let time_width = if date_only { 10 } else { 19 };

        writeln!(
            f,
            "{:<tw$} {:>14} {:>14} {:>14} {:>14} {:>16} {}",
            "time",
            "open",
            "high",
            "low",
            "close",
            "volume",
            "symbol",
            tw = time_width
        )?;
        for bar in &self.bars {
            writeln!(
                f,
                "{:<tw$} {:>14} {:>14} {:>14} {:>14} {:>16} {}",
                bar.time.format(time_format).to_string(),
                cell(bar.open),
                cell(bar.high),
                cell(bar.low),
                cell(bar.close),
                cell(bar.volume),
                bar.symbol,
                tw = time_width
            )?;
        }
        write!(f, "[{} rows x 6 columns]", self.bars.len())
    }
}
