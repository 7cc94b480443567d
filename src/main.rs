use std::path::Path;

use anyhow::Context;
use clap::Parser;

mod api;
mod cli;
mod core;
mod generators;
mod models;

use crate::cli::Args;
use crate::core::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    let env_loaded = Path::new(".env").exists() && dotenvy::dotenv().is_ok();

    let args = Args::parse();
    let mut config = Config::load();
    args.apply(&mut config);

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    if env_loaded {
        log::debug!("Loaded .env file");
    }
    log::debug!("Loaded config: {:?}", config);

    let (address, port) = config.bind_address();
    api::start_server(config)
        .await
        .with_context(|| format!("web server failed on {}:{}", address, port))?;

    log::info!("Password generator shut down");
    Ok(())
}
