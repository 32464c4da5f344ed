//! Error types for folio-cli.

use std::path::{Path, PathBuf};

/// Result type alias for folio-cli operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running a `folio` command.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Error from folio-core (dataset loading, schema validation).
    #[error(transparent)]
    Core(#[from] folio_core::Error),

    /// Error from folio-content (Markdown files).
    #[error(transparent)]
    Content(#[from] folio_content::Error),

    /// A record failed its schema check.
    #[error("{}:\n{}", .0.message(), .0.formatted())]
    Validation(#[from] folio_core::ValidationError),

    /// JSON output could not be produced.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error tied to a specific file.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File the operation touched
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{Issue, ValidationError};
    use serde_json::Value;

    #[test]
    fn test_config_error_display() {
        let err = Error::config("bad level");
        assert_eq!(err.to_string(), "Configuration error: bad level");
    }

    #[test]
    fn test_validation_error_display() {
        let err: Error = ValidationError::new(
            "Validation failed for Scene",
            vec![Issue::new("title", "Required")],
            Value::Null,
        )
        .into();
        assert_eq!(err.to_string(), "Validation failed for Scene:\ntitle: Required");
    }
}
