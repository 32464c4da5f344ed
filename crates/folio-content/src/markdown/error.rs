//! Parse failures for the Scene grammar.

use std::fmt;

use folio_core::ValidationError;

/// What went wrong while parsing a Scene document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// Line 1 is not `# Scene: <title>`.
    MissingTitle,
    /// No `## Context` heading.
    MissingContext,
    /// `## Context` has no text.
    EmptyContext,
    /// No `## Solution` heading.
    MissingSolution,
    /// A solution lacks `### Problem`.
    MissingProblem,
    /// A solution lacks `### Approach`.
    MissingApproach,
    /// A solution has no key point bullets.
    MissingKeyPoints,
    /// The assembled scene was rejected by the schema.
    Validation,
}

impl ParseErrorKind {
    /// Kebab-case name of the kind, e.g. `missing-title`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingTitle => "missing-title",
            Self::MissingContext => "missing-context",
            Self::EmptyContext => "empty-context",
            Self::MissingSolution => "missing-solution",
            Self::MissingProblem => "missing-problem",
            Self::MissingApproach => "missing-approach",
            Self::MissingKeyPoints => "missing-keypoints",
            Self::Validation => "validation",
        }
    }

    /// Document section the failure belongs to.
    pub fn section(&self) -> &'static str {
        match self {
            Self::MissingTitle => "title",
            Self::MissingContext | Self::EmptyContext => "context",
            Self::MissingSolution => "solution",
            Self::MissingProblem => "problem",
            Self::MissingApproach => "approach",
            Self::MissingKeyPoints => "keypoints",
            Self::Validation => "validation",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Scene document could not be turned into a valid [`Scene`](folio_core::Scene).
#[derive(Debug, Clone, thiserror::Error)]
pub struct MarkdownParseError {
    message: String,
    line: Option<usize>,
    kind: ParseErrorKind,
    #[source]
    validation: Option<ValidationError>,
}

impl MarkdownParseError {
    /// Structural failure at a 1-based line.
    pub fn at_line(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: Some(line),
            kind,
            validation: None,
        }
    }

    /// Schema rejection of the assembled scene.
    pub fn validation(error: ValidationError) -> Self {
        let message = format!("{}:\n{}", error.message(), error.formatted());
        Self {
            message,
            line: None,
            kind: ParseErrorKind::Validation,
            validation: Some(error),
        }
    }

    /// Human-readable description, without the line prefix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 1-based line number, when the failure has one.
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Failure kind.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Section tag of the failure, shorthand for `kind().section()`.
    pub fn section(&self) -> &'static str {
        self.kind.section()
    }

    /// Underlying schema error for [`ParseErrorKind::Validation`].
    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.validation.as_ref()
    }

    /// Shifts the line number by `offset` lines.
    pub(crate) fn offset_line(mut self, offset: usize) -> Self {
        self.line = self.line.map(|l| l + offset);
        self
    }
}

impl fmt::Display for MarkdownParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}
