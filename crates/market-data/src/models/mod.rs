//! Market data models
//!
//! This module contains the output types shared by both providers:
//! - `bar` - One OHLCV row keyed by time (PriceBar)
//! - `table` - An ordered series of rows for a single symbol (PriceTable)

mod bar;
mod table;

pub use bar::PriceBar;
pub use table::PriceTable;
