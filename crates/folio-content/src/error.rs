//! Error types for folio-content's file helpers.

use std::path::{Path, PathBuf};

use folio_core::ValidationError;

use crate::markdown::MarkdownParseError;

/// Result type alias for folio-content file operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from reading, parsing and writing Scene files.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error tied to a specific file.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File the operation touched
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The file is not Markdown.
    #[error("Unsupported file type: {} (expected .md or .markdown)", path.display())]
    UnsupportedExtension {
        /// Rejected file
        path: PathBuf,
    },

    /// The document does not follow the Scene grammar.
    #[error(transparent)]
    Parse(#[from] MarkdownParseError),

    /// A scene failed its schema check before export.
    #[error("{}", .0.formatted())]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates an unsupported-extension error.
    pub fn unsupported_extension(path: impl AsRef<Path>) -> Self {
        Error::UnsupportedExtension {
            path: path.as_ref().to_path_buf(),
        }
    }
}
