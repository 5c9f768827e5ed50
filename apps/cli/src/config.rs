use std::time::Duration;

use chrono::NaiveDate;
use pricefeed_market_data::provider::{vietcap, yahoo};
use pricefeed_market_data::FetcherConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

pub struct Config {
    pub fetcher: FetcherConfig,
    pub global_symbol: String,
    pub global_start: NaiveDate,
    pub global_end: NaiveDate,
    pub global_interval: String,
    pub vn_symbol: String,
    pub vn_timeframe: String,
    pub vn_count_back: u32,
    pub vn_to_timestamp: i64,
    pub output: OutputFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut fetcher = FetcherConfig::default();
        if let Some(retries) = var("PRICEFEED_MAX_RETRIES") {
            fetcher.max_retries = retries
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid PRICEFEED_MAX_RETRIES: {}", retries))?;
        }
        if let Some(delay) = var("PRICEFEED_DELAY_SECS") {
            fetcher.delay = parse_secs("PRICEFEED_DELAY_SECS", &delay)?;
        }
        if let Some(timeout) = var("PRICEFEED_REQUEST_TIMEOUT_SECS") {
            fetcher.request_timeout = Some(parse_secs("PRICEFEED_REQUEST_TIMEOUT_SECS", &timeout)?);
        }

        let date = |key: &str, default: &str| -> anyhow::Result<NaiveDate> {
            let value = var(key).unwrap_or_else(|| default.to_string());
            NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                .map_err(|e| anyhow::anyhow!("Invalid {}: {} ({})", key, value, e))
        };
        let global_start = date("PRICEFEED_GLOBAL_START", "2013-01-01")?;
        let global_end = date("PRICEFEED_GLOBAL_END", "2025-02-12")?;

        let vn_count_back = match var("PRICEFEED_VN_COUNT_BACK") {
            Some(v) => v
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid PRICEFEED_VN_COUNT_BACK: {}", v))?,
            None => vietcap::DEFAULT_COUNT_BACK,
        };
        let vn_to_timestamp = match var("PRICEFEED_VN_TO") {
            Some(v) => v
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid PRICEFEED_VN_TO: {}", v))?,
            None => vietcap::DEFAULT_TO_TIMESTAMP,
        };

        let output = match var("PRICEFEED_OUTPUT") {
            Some(v) if v.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Table,
        };

        Ok(Self {
            fetcher,
            global_symbol: var("PRICEFEED_GLOBAL_SYMBOL").unwrap_or_else(|| "^GSPC".into()),
            global_start,
            global_end,
            global_interval: var("PRICEFEED_GLOBAL_INTERVAL")
                .unwrap_or_else(|| yahoo::DEFAULT_INTERVAL.into()),
            vn_symbol: var("PRICEFEED_VN_SYMBOL").unwrap_or_else(|| "VNINDEX".into()),
            vn_timeframe: var("PRICEFEED_VN_TIMEFRAME")
                .unwrap_or_else(|| vietcap::DEFAULT_TIMEFRAME.into()),
            vn_count_back,
            vn_to_timestamp,
            output,
        })
    }
}

fn parse_secs(key: &str, value: &str) -> anyhow::Result<Duration> {
    let secs: f64 = value
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid {}: {}", key, value))?;
    Duration::try_from_secs_f64(secs).map_err(|_| anyhow::anyhow!("Invalid {}: {}", key, value))
}
