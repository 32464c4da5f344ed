//! # folio-cli
//!
//! Command-line front end for Folio:
//! - `import`: Markdown document to Scene JSON
//! - `export`: Scene JSON to a Markdown document
//! - `check`: format pre-check of a Markdown document
//! - `validate`: batch schema validation of scene, project and blog datasets
//! - `config`: configuration file helpers

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;

use std::process::ExitCode;

use folio_core::LogDiagnostics;

pub use cli::{Cli, Command, ConfigAction, DatasetKind};
pub use config::FolioConfig;
pub use error::{Error, Result};

/// Run a parsed command line against the loaded configuration.
///
/// `check` and `validate` report failure through the exit code; every other
/// failure is an [`Error`].
pub async fn run(cli: Cli, config: &FolioConfig) -> Result<ExitCode> {
    match cli.command {
        Command::Import { file, pretty } => {
            println!("{}", commands::import(&file, pretty).await?);
        }
        Command::Export {
            input,
            out_dir,
            name,
        } => {
            let out_dir = out_dir.unwrap_or_else(|| config.export.out_dir.clone());
            let path = commands::export(
                &input,
                &out_dir,
                name.as_deref(),
                &config.export.options(),
            )
            .await?;
            println!("{}", path.display());
        }
        Command::Check { file } => {
            let report = commands::check(&file).await?;
            print!("{}", commands::render_report(&file, &report));
            if !report.valid {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Validate {
            kind,
            input,
            legacy,
        } => {
            let summary = commands::validate(kind, &input, legacy, &LogDiagnostics).await?;
            print!("{}", summary.render());
            if !summary.is_clean() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Config { action } => {
            config_handlers::handle_config_command(cli.config.as_deref(), action)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
