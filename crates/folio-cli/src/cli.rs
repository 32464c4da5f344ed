//! Command-line definitions for the `folio` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Folio: Scene Markdown import, export and validation.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "FOLIO_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a Markdown document and print its scenes as JSON
    Import {
        /// Markdown file (.md or .markdown)
        file: PathBuf,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export scenes from a JSON file to a Markdown document
    Export {
        /// JSON file holding one scene or an array of scenes
        input: PathBuf,

        /// Output directory (defaults to the configured `export.out_dir`)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// File name (defaults to the first scene's id)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Check that a Markdown document follows the Scene format
    Check {
        /// Markdown file (.md or .markdown)
        file: PathBuf,
    },

    /// Validate a JSON dataset and report rejected records
    Validate {
        /// Kind of record in the dataset
        #[arg(value_enum)]
        kind: DatasetKind,

        /// JSON file holding one record or an array of records
        input: PathBuf,

        /// Adapt records from the legacy shape before validating
        #[arg(long)]
        legacy: bool,
    },

    /// Configuration helpers
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Dataset kinds accepted by `folio validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DatasetKind {
    /// Knowledge scenes
    Scene,
    /// Showcased projects
    Project,
    /// Blog articles
    Blog,
}

/// `folio config` subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the resolved configuration file path
    Path,

    /// Print the effective configuration as TOML
    Show,

    /// Print one value by dotted key (e.g. `export.code_language`)
    Get {
        /// Dotted key
        key: String,
    },

    /// Write a default configuration file
    Init {
        /// Target path (defaults to the resolved path)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
