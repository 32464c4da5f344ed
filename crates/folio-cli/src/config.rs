//! Configuration for the `folio` binary.
//!
//! Loaded from TOML. The file is looked up at the `--config` flag (or the
//! `FOLIO_CONFIG` variable, which clap folds into the flag), then at
//! `<config dir>/folio/config.toml`. A missing file means defaults.
//!
//! ```toml
//! [export]
//! code_language = "tsx"
//! solution_title_max_chars = 50
//! out_dir = "."
//!
//! [logging]
//! level = "info"
//! ```

use std::path::{Path, PathBuf};

use folio_content::ExportOptions;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Project name used for the config directory and in help text.
pub const PROJECT_NAME: &str = "folio";

/// Config file name inside the project config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Markdown export settings.
    pub export: ExportConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// `[export]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Info string written on Code Demo fences.
    pub code_language: String,
    /// Character limit for solution headings derived from the problem text.
    pub solution_title_max_chars: usize,
    /// Directory exported files are written to.
    pub out_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        let options = ExportOptions::default();
        Self {
            code_language: options.code_language,
            solution_title_max_chars: options.solution_title_max_chars,
            out_dir: PathBuf::from("."),
        }
    }
}

impl ExportConfig {
    /// Exporter options for this section.
    pub fn options(&self) -> ExportOptions {
        ExportOptions {
            code_language: self.code_language.clone(),
            solution_title_max_chars: self.solution_title_max_chars,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Log filter directive used when `RUST_LOG` is unset.
///
/// `--verbose` selects `debug`. Otherwise the configured level applies, or
/// the default level while no configuration has been loaded yet.
pub fn log_directive(verbose: bool, logging: Option<&LoggingConfig>) -> String {
    if verbose {
        return "debug".to_string();
    }
    logging.map_or_else(|| LoggingConfig::default().level, |l| l.level.clone())
}

impl FolioConfig {
    /// `<config dir>/folio/config.toml`, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join(CONFIG_FILE))
    }

    /// The explicit path when given, otherwise the default path.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// Load the configuration, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when the file exists but cannot be read and
    /// [`Error::Config`] when it is not valid TOML for this structure.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) => {
                log::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse the file at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Serialize as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
