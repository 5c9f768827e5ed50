mod config;
mod main_lib;

use config::Config;
use main_lib::{init_tracing, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();
    run(&config).await
}
