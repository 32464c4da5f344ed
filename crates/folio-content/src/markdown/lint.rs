//! Structural pre-check for Scene documents.
//!
//! Runs the same scan as the parser but reports every structural problem
//! at once instead of stopping at the first, and never builds a Scene.

use serde::Serialize;

use super::grammar::split_lines;
use super::parser::{scan, UNEXPECTED_HEADING};

/// Outcome of [`validate_markdown_format`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormatReport {
    /// `true` when no problems were found.
    pub valid: bool,
    /// Problems in document order.
    pub errors: Vec<String>,
}

impl FormatReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Check a document against the Scene grammar without parsing it.
///
/// # Example
///
/// ```rust
/// use folio_content::validate_markdown_format;
///
/// let report = validate_markdown_format("# Scene: X\n\n## Context\nText\n");
/// assert!(!report.valid);
/// assert_eq!(
///     report.errors,
///     vec!["Missing Solution section. Expected at least one \"## Solution\""]
/// );
/// ```
pub fn validate_markdown_format(markdown: &str) -> FormatReport {
    let lines = split_lines(markdown);
    let outline = scan(&lines);
    let mut errors = Vec::new();

    if outline.title.is_none() {
        errors.push("Missing Scene title. Expected \"# Scene: [Title]\"".to_string());
    }

    match &outline.context {
        None if outline.stray_heading.is_some() => errors.push(UNEXPECTED_HEADING.to_string()),
        None => errors.push("Missing Context section. Expected \"## Context\"".to_string()),
        Some(context) if context.text.is_empty() => {
            errors.push("Context section is empty".to_string());
        }
        Some(_) => {}
    }

    if outline.solutions.is_empty() {
        errors.push("Missing Solution section. Expected at least one \"## Solution\"".to_string());
    }

    for (index, draft) in outline.solutions.iter().enumerate() {
        let n = index + 1;
        if draft.problem_text().is_none() {
            errors.push(format!("Solution {n} missing Problem section"));
        }
        if draft.approach_text().is_none() {
            errors.push(format!("Solution {n} missing Approach section"));
        }
        if !draft.has_key_points_heading {
            errors.push(format!("Solution {n} missing Key Points section"));
        } else if draft.key_points.is_empty() {
            errors.push(format!("Solution {n} has no Key Points"));
        }
    }

    FormatReport::from_errors(errors)
}
