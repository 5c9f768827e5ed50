//! Pricefeed Market Data Crate
//!
//! Fetches historical equity price series from two providers and returns
//! both in one shape: a [`PriceTable`] of OHLCV [`PriceBar`]s keyed by time.
//!
//! # Providers
//!
//! - **Yahoo Finance** (global chart feed) via [`DataFetcher::fetch_global`].
//!   Throttled requests are retried with linear backoff; incomplete rows are
//!   dropped; rows are keyed by calendar date.
//! - **Vietcap** (Vietnamese gap-chart feed) via [`DataFetcher::fetch_vietnam`].
//!   No retry, a fixed cool-down after every call; unreadable cells become
//!   missing markers; rows keep their time of day.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |   DataFetcher    |  (FetcherConfig: retries, delay)
//! +------------------+
//!      |         |
//!      v         v
//! +--------+ +---------+
//! | Yahoo  | | Vietcap |  (request, retry / cool-down, parse)
//! +--------+ +---------+
//!      |         |
//!      v         v
//! +------------------+
//! |  HttpTransport   |  (reqwest, or a test double)
//! +------------------+
//! ```
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use pricefeed_market_data::{DataFetcher, FetcherConfig};
//!
//! # async fn run() -> Result<(), pricefeed_market_data::MarketDataError> {
//! let fetcher = DataFetcher::new(FetcherConfig::default())?;
//! let start = NaiveDate::from_ymd_opt(2013, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2025, 2, 12).unwrap();
//!
//! let sp500 = fetcher.fetch_global("^GSPC", start, end, "1d").await?;
//! let vnindex = fetcher.fetch_vietnam("VNINDEX", "ONE_DAY", 3850, 1739491200).await?;
//! println!("{}\n{}", sp500, vnindex);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod errors;
pub mod fetcher;
pub mod models;
pub mod provider;
pub mod utils;

pub use config::FetcherConfig;
pub use errors::{MarketDataError, RetryClass};
pub use fetcher::DataFetcher;
pub use models::{PriceBar, PriceTable};

// Re-export provider types
pub use provider::vietcap::{VietcapProvider, VietcapTimeframe};
pub use provider::yahoo::YahooProvider;
pub use provider::{BackoffPolicy, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
