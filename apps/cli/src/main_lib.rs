use pricefeed_market_data::{DataFetcher, PriceTable};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, OutputFormat};

pub fn init_tracing() {
    let log_format = std::env::var("PRICEFEED_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Fetch the configured global symbol, then the Vietnamese one, and print both.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let fetcher = DataFetcher::new(config.fetcher.clone())?;

    let global = fetcher
        .fetch_global(
            &config.global_symbol,
            config.global_start,
            config.global_end,
            &config.global_interval,
        )
        .await?;
    tracing::info!("Fetched {} rows for {}", global.len(), global.symbol());
    print_table(&global, config.output)?;

    let vietnam = fetcher
        .fetch_vietnam(
            &config.vn_symbol,
            &config.vn_timeframe,
            config.vn_count_back,
            config.vn_to_timestamp,
        )
        .await?;
    tracing::info!("Fetched {} rows for {}", vietnam.len(), vietnam.symbol());
    print_table(&vietnam, config.output)?;

    Ok(())
}

fn print_table(table: &PriceTable, output: OutputFormat) -> anyhow::Result<()> {
    match output {
        OutputFormat::Table => println!("{}", table),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(table)?),
    }
    Ok(())
}
