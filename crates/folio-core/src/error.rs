//! Error types for folio-core.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Value;

/// Result type alias for folio-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in folio-core and the crates built on it.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Input failed schema validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// I/O error tied to a specific file.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File the operation touched
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

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

// ============================================================================
// ValidationError
// ============================================================================

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Dotted path into the input (`solutions.0.keyPoints.1.title`).
    /// Empty when the issue concerns the input as a whole.
    pub path: String,
    /// What was wrong with the value at `path`.
    pub message: String,
}

impl Issue {
    /// Creates an issue at the given path.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Schema-level failure: every violated field plus the rejected input.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
    issues: Vec<Issue>,
    data: Value,
}

impl ValidationError {
    /// Creates a validation error from collected issues and the rejected input.
    pub fn new(message: impl Into<String>, issues: Vec<Issue>, data: Value) -> Self {
        Self {
            message: message.into(),
            issues,
            data,
        }
    }

    /// Human-readable summary, e.g. `Validation failed for Scene`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// All field-level issues, in the order they were found.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// The original offending input.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Newline-joined `path: message` report.
    pub fn formatted(&self) -> String {
        self.issues
            .iter()
            .map(Issue::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
