use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One OHLCV row for a single trading period.
///
/// `None` in a numeric field is the missing-value marker. Rows built from the
/// global chart feed never carry one; rows from the Vietcap feed keep it where
/// a cell could not be read as a number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Row key. Midnight UTC for the global feed, full timestamp for Vietcap.
    pub time: DateTime<Utc>,

    pub open: Option<Decimal>,

    pub high: Option<Decimal>,

    pub low: Option<Decimal>,

    pub close: Option<Decimal>,

    pub volume: Option<Decimal>,

    /// Instrument identifier as requested by the caller
    pub symbol: String,
}

impl PriceBar {
    /// Create a fully populated row
    pub fn ohlcv(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: Decimal,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            time,
            open: Some(open),
            high: Some(high),
            low: Some(low),
            close: Some(close),
            volume: Some(volume),
            symbol: symbol.into(),
        }
    }

    /// True when none of the five numeric fields is missing.
    pub fn is_complete(&self) -> bool {
        self.open.is_some()
            && self.high.is_some()
            && self.low.is_some()
            && self.close.is_some()
            && self.volume.is_some()
    }
}
