//! Main application entry point (HTTP service binary).
//!
//! This is a thin wrapper around the `link_audit` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Server startup
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use link_audit::config::Config;
use link_audit::initialization::{init_client, init_logger_with};
use link_audit::server::{start_server, AppState};
use link_audit::sink::SheetsSink;
use link_audit::site::TargetSite;

#[tokio::main]
async fn main() -> Result<()> {
    // Sink credentials (GSHEETS_*) usually live in a .env file next to the
    // binary; a missing file is fine, the sink reports missing vars on use.
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let site = TargetSite::new(&config.site, &config.accept_hosts)
        .context("Failed to build target site")?;
    log::info!(
        "Target site: {} (accepted hosts: {})",
        config.site,
        site.hosts()
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    );

    let client = init_client(&config).context("Failed to initialize HTTP client")?;

    let state = AppState {
        site: Arc::new(site),
        client: client.clone(),
        sink: Arc::new(SheetsSink::new(client)),
        max_in_flight: config.max_concurrency,
    };

    if let Err(e) = start_server(&config.bind, config.port, state).await {
        eprintln!("link_audit error: {e:#}");
        process::exit(1);
    }

    Ok(())
}
