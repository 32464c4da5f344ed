//! Folio CLI
//!
//! Import, export, check and validate portfolio content.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use folio_cli::config::log_directive;
use folio_cli::{Cli, FolioConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose and the configured level
    let from_env = EnvFilter::try_from_default_env().ok();
    let follows_config = from_env.is_none() && !cli.verbose;
    let filter = from_env.unwrap_or_else(|| EnvFilter::new(log_directive(cli.verbose, None)));

    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_filter_reloading();
    let reload = builder.reload_handle();
    builder.init();

    let config = FolioConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if follows_config {
        let directive = log_directive(false, Some(&config.logging));
        if let Err(e) = reload.reload(EnvFilter::new(&directive)) {
            tracing::warn!(%directive, "Could not apply configured log level: {e}");
        }
    }

    tracing::debug!(config = ?cli.config, "Starting folio");
    Ok(folio_cli::run(cli, &config).await?)
}
