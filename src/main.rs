//! Main application entry point (server binary).
//!
//! This is a thin wrapper around the `ip_lookup` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//!
//! All service functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ip_lookup::initialization::{init_logger_with, load_dotenv};
use ip_lookup::{start_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // PORT, CORS_ORIGINS etc. may come from a .env file
    load_dotenv();

    let config = Config::parse();
    if let Err(e) = config.validate() {
        eprintln!("ip_lookup: invalid configuration: {e}");
        process::exit(2);
    }

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = start_server(config).await {
        log::error!("ip_lookup error: {:#}", e);
        eprintln!("ip_lookup error: {:#}", e);
        process::exit(1);
    }

    Ok(())
}
