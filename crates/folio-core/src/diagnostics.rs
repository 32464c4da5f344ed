//! Advisory diagnostics channel.
//!
//! Batch validation reports filtered records through a [`Diagnostics`]
//! implementation instead of writing to a global console. Callers pick the
//! sink: [`LogDiagnostics`] forwards to the `log` facade, and
//! [`RecordingDiagnostics`] keeps warnings in memory for inspection.
//!
//! # Example
//!
//! ```rust
//! use folio_core::diagnostics::{Diagnostics, RecordingDiagnostics};
//!
//! let sink = RecordingDiagnostics::new();
//! sink.warn("Scenes", "1 invalid item(s) filtered");
//! assert_eq!(sink.warnings().len(), 1);
//! ```

use std::sync::{Mutex, PoisonError};

/// Receiver for advisory warnings. Never affects the caller's result.
pub trait Diagnostics: Send + Sync {
    /// Record a warning raised while processing `context`.
    fn warn(&self, context: &str, message: &str);
}

/// Forwards warnings to the `log` facade at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn warn(&self, context: &str, message: &str) {
        log::warn!(target: "folio::validation", "[{context}] {message}");
    }
}

/// A warning captured by [`RecordingDiagnostics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Context the warning was raised in (dataset name).
    pub context: String,
    /// Warning text.
    pub message: String,
}

/// Keeps every warning in memory.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    warnings: Mutex<Vec<Warning>>,
}

impl RecordingDiagnostics {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the warnings recorded so far.
    pub fn warnings(&self) -> Vec<Warning> {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn warn(&self, context: &str, message: &str) {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Warning {
                context: context.to_string(),
                message: message.to_string(),
            });
    }
}
