//! Schema validation gate.
//!
//! Every data source (static datasets, imported Markdown, API responses)
//! passes through a [`Schema`] before reaching its consumers. A schema is a
//! hand-written, pure function from untyped JSON to a typed value plus a list
//! of field-level [`Issue`]s; there is no reflection and no external
//! validation library involved.
//!
//! - [`parse`]: single record, fails with a [`ValidationError`] listing every
//!   violated field together with the rejected input.
//! - [`validate_and_filter`]: a whole dataset, never fails, partitions into
//!   valid values and per-item diagnostics.
//!
//! # Example
//!
//! ```rust
//! use folio_core::diagnostics::RecordingDiagnostics;
//! use folio_core::schema::{validate_and_filter, ProjectSchema};
//! use serde_json::json;
//!
//! let items = vec![
//!     json!({"id": "p1", "title": "Lint", "description": "A linter", "type": "Tool"}),
//!     json!({"id": "p2", "title": "", "description": "Broken", "type": "Tool"}),
//! ];
//!
//! let sink = RecordingDiagnostics::new();
//! let result = validate_and_filter(&ProjectSchema, &items, "Projects", &sink);
//! assert_eq!(result.valid.len(), 1);
//! assert_eq!(result.invalid[0].index, 1);
//! assert_eq!(sink.warnings().len(), 1);
//! ```

mod entities;
pub mod fields;
mod guards;

use serde::Serialize;
use serde_json::Value;

use crate::diagnostics::Diagnostics;
use crate::error::{Issue, ValidationError};
use crate::model::{BlogArticle, KeyPoint, Project, Scene, Solution};

pub use entities::{BlogArticleSchema, KeyPointSchema, ProjectSchema, SceneSchema, SolutionSchema};
pub use fields::FieldPath;
pub use guards::{
    as_blog_article, as_project, as_scene, is_blog_article, is_key_point, is_project, is_scene,
    is_solution,
};

/// Structural contract for one entity kind.
pub trait Schema {
    /// Typed value produced on success.
    type Output;

    /// Entity name used in error messages (`Scene`, `Projects`, ...).
    fn name(&self) -> String;

    /// Check `value` located at `path`, appending every violation to `issues`.
    ///
    /// Returns `None` when at least one issue was recorded for this value.
    fn check(&self, value: &Value, path: &FieldPath, issues: &mut Vec<Issue>)
    -> Option<Self::Output>;
}

/// A schema for arrays whose elements all satisfy `S`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListOf<S>(pub S);

impl<S: Schema> Schema for ListOf<S> {
    type Output = Vec<S::Output>;

    fn name(&self) -> String {
        format!("{}s", self.0.name())
    }

    fn check(
        &self,
        value: &Value,
        path: &FieldPath,
        issues: &mut Vec<Issue>,
    ) -> Option<Self::Output> {
        let Value::Array(items) = value else {
            path.issue(
                issues,
                format!("Expected array, received {}", fields::type_name(value)),
            );
            return None;
        };
        let before = issues.len();
        let out: Vec<_> = items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| self.0.check(item, &path.index(i), issues))
            .collect();
        (issues.len() == before).then_some(out)
    }
}

/// Validate a single record.
///
/// # Errors
///
/// Returns a [`ValidationError`] carrying every field-level issue and a copy
/// of `data` when the record does not satisfy `schema`.
pub fn parse<S: Schema>(schema: &S, data: &Value) -> Result<S::Output, ValidationError> {
    let mut issues = Vec::new();
    match schema.check(data, &FieldPath::root(), &mut issues) {
        Some(out) if issues.is_empty() => Ok(out),
        _ => {
            if issues.is_empty() {
                issues.push(Issue::new("", "Invalid input"));
            }
            Err(ValidationError::new(
                format!("Validation failed for {}", schema.name()),
                issues,
                data.clone(),
            ))
        }
    }
}

/// A record rejected by [`validate_and_filter`].
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidItem {
    /// Position of the record in the source collection.
    pub index: usize,
    /// Formatted `path: message` report.
    pub error: String,
    /// The raw record.
    pub data: Value,
}

/// Partition of a dataset into valid values and rejected records.
#[derive(Debug, Clone)]
pub struct BatchResult<T> {
    /// Valid values, in input order.
    pub valid: Vec<T>,
    /// Rejected records, in input order.
    pub invalid: Vec<InvalidItem>,
}

impl<T> BatchResult<T> {
    /// `true` when no record was rejected.
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty()
    }
}

/// Validate a whole dataset without aborting on the first bad record.
///
/// Valid records keep their relative order. Rejected records keep their
/// original index. When anything was filtered, one warning summarizing the
/// rejects is sent to `diagnostics`.
pub fn validate_and_filter<S: Schema>(
    schema: &S,
    items: &[Value],
    context: &str,
    diagnostics: &dyn Diagnostics,
) -> BatchResult<S::Output> {
    let mut valid = Vec::with_capacity(items.len());
    let mut invalid = Vec::new();

    for (index, item) in items.iter().enumerate() {
        match parse(schema, item) {
            Ok(value) => valid.push(value),
            Err(error) => invalid.push(InvalidItem {
                index,
                error: error.formatted(),
                data: item.clone(),
            }),
        }
    }

    if !invalid.is_empty() {
        let details = invalid
            .iter()
            .map(|item| format!("[{}] {}", item.index, item.error.replace('\n', "; ")))
            .collect::<Vec<_>>()
            .join(" | ");
        diagnostics.warn(
            context,
            &format!("{} invalid item(s) in {context}: {details}", invalid.len()),
        );
    }

    BatchResult { valid, invalid }
}

// ============================================================================
// Per-entity entry points
// ============================================================================

fn parse_logged<S: Schema>(schema: &S, data: &Value) -> Result<S::Output, ValidationError> {
    parse(schema, data).inspect_err(|err| {
        log::error!(
            target: "folio::validation",
            "{}:\n{}",
            err.message(),
            err.formatted()
        );
    })
}

/// Validate a single scene.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_scene(data: &Value) -> Result<Scene, ValidationError> {
    parse_logged(&SceneSchema, data)
}

/// Validate an array of scenes; any bad element rejects the whole array.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_scenes(data: &Value) -> Result<Vec<Scene>, ValidationError> {
    parse_logged(&ListOf(SceneSchema), data)
}

/// Validate a single solution.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_solution(data: &Value) -> Result<Solution, ValidationError> {
    parse_logged(&SolutionSchema, data)
}

/// Validate a single key point.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_key_point(data: &Value) -> Result<KeyPoint, ValidationError> {
    parse_logged(&KeyPointSchema, data)
}

/// Validate a single project.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_project(data: &Value) -> Result<Project, ValidationError> {
    parse_logged(&ProjectSchema, data)
}

/// Validate an array of projects.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_projects(data: &Value) -> Result<Vec<Project>, ValidationError> {
    parse_logged(&ListOf(ProjectSchema), data)
}

/// Validate a single blog article.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_blog_article(data: &Value) -> Result<BlogArticle, ValidationError> {
    parse_logged(&BlogArticleSchema, data)
}

/// Validate an array of blog articles.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_blog_articles(data: &Value) -> Result<Vec<BlogArticle>, ValidationError> {
    parse_logged(&ListOf(BlogArticleSchema), data)
}

// ============================================================================
// Validate
// ============================================================================

/// Typed values that can be re-checked against their schema.
///
/// A value assembled in code (by the Markdown parser or a data adapter) goes
/// through the same gate as untyped input: it is serialized and parsed back.
pub trait Validate: Serialize + Sized {
    /// The schema that produces `Self`.
    type Schema: Schema<Output = Self> + Default;

    /// Run the schema over `self`, returning the checked value.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when a field violates the schema.
    fn validated(self) -> Result<Self, ValidationError> {
        let schema = Self::Schema::default();
        let value = serde_json::to_value(&self).map_err(|e| {
            ValidationError::new(
                format!("Validation failed for {}", schema.name()),
                vec![Issue::new("", format!("Failed to serialize: {e}"))],
                Value::Null,
            )
        })?;
        parse(&schema, &value)
    }
}

impl Validate for Scene {
    type Schema = SceneSchema;
}

impl Validate for Solution {
    type Schema = SolutionSchema;
}

impl Validate for KeyPoint {
    type Schema = KeyPointSchema;
}

impl Validate for Project {
    type Schema = ProjectSchema;
}

impl Validate for BlogArticle {
    type Schema = BlogArticleSchema;
}
