//! Field readers shared by the entity schemas.
//!
//! Every reader records an [`Issue`] instead of failing, and returns a
//! placeholder (empty string, empty list, default) so that a schema can keep
//! going and report every violated field in one pass. A schema decides
//! success by comparing the issue count before and after reading.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde_json::{Map, Value};

use super::Schema;
use crate::error::Issue;

/// Location of a value inside the input document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// The input as a whole.
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of an object member.
    pub fn key(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(key.to_string());
        Self(segments)
    }

    /// Path of an array element.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(index.to_string());
        Self(segments)
    }

    /// Record an issue at this path.
    pub fn issue(&self, issues: &mut Vec<Issue>, message: impl Into<String>) {
        issues.push(Issue::new(self.to_string(), message));
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// JSON type name used in "Expected X, received Y" messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn expected(path: &FieldPath, issues: &mut Vec<Issue>, what: &str, value: &Value) {
    path.issue(
        issues,
        format!("Expected {what}, received {}", type_name(value)),
    );
}

/// A present, non-null member.
fn member<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|v| !v.is_null())
}

/// View `value` as an object or record why it is not one.
pub(crate) fn object<'a>(
    value: &'a Value,
    path: &FieldPath,
    issues: &mut Vec<Issue>,
) -> Option<&'a Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        other => {
            expected(path, issues, "object", other);
            None
        }
    }
}

/// Required, non-empty (after trimming) string.
pub(crate) fn required_string(
    map: &Map<String, Value>,
    key: &str,
    path: &FieldPath,
    issues: &mut Vec<Issue>,
) -> String {
    let path = path.key(key);
    match member(map, key) {
        None => {
            path.issue(issues, "Required");
            String::new()
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            path.issue(issues, "String must contain at least 1 character(s)");
            String::new()
        }
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            expected(&path, issues, "string", other);
            String::new()
        }
    }
}

/// Optional string; absent or null yields `None`.
pub(crate) fn optional_string(
    map: &Map<String, Value>,
    key: &str,
    path: &FieldPath,
    issues: &mut Vec<Issue>,
) -> Option<String> {
    match member(map, key)? {
        Value::String(s) => Some(s.clone()),
        other => {
            expected(&path.key(key), issues, "string", other);
            None
        }
    }
}

/// String with a default applied only when the member is absent.
pub(crate) fn string_or(
    map: &Map<String, Value>,
    key: &str,
    default: &str,
    path: &FieldPath,
    issues: &mut Vec<Issue>,
) -> String {
    optional_string(map, key, path, issues).unwrap_or_else(|| default.to_string())
}

/// Boolean with a default applied only when the member is absent.
pub(crate) fn bool_or(
    map: &Map<String, Value>,
    key: &str,
    default: bool,
    path: &FieldPath,
    issues: &mut Vec<Issue>,
) -> bool {
    match member(map, key) {
        None => default,
        Some(Value::Bool(b)) => *b,
        Some(other) => {
            expected(&path.key(key), issues, "boolean", other);
            default
        }
    }
}

fn strings_from(items: &[Value], path: &FieldPath, issues: &mut Vec<Issue>) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| match item {
            Value::String(s) => Some(s.clone()),
            other => {
                expected(&path.index(i), issues, "string", other);
                None
            }
        })
        .collect()
}

/// Optional list of strings; absent or null yields `None`.
pub(crate) fn optional_string_list(
    map: &Map<String, Value>,
    key: &str,
    path: &FieldPath,
    issues: &mut Vec<Issue>,
) -> Option<Vec<String>> {
    let path = path.key(key);
    match member(map, key)? {
        Value::Array(items) => Some(strings_from(items, &path, issues)),
        other => {
            expected(&path, issues, "array", other);
            None
        }
    }
}

/// List of strings, empty when absent.
pub(crate) fn string_list(
    map: &Map<String, Value>,
    key: &str,
    path: &FieldPath,
    issues: &mut Vec<Issue>,
) -> Vec<String> {
    optional_string_list(map, key, path, issues).unwrap_or_default()
}

/// Optional object whose values are all strings.
pub(crate) fn optional_string_map(
    map: &Map<String, Value>,
    key: &str,
    path: &FieldPath,
    issues: &mut Vec<Issue>,
) -> Option<BTreeMap<String, String>> {
    let path = path.key(key);
    match member(map, key)? {
        Value::Object(entries) => Some(
            entries
                .iter()
                .filter_map(|(k, v)| match v {
                    Value::String(s) => Some((k.clone(), s.clone())),
                    other => {
                        expected(&path.key(k), issues, "string", other);
                        None
                    }
                })
                .collect(),
        ),
        other => {
            expected(&path, issues, "object", other);
            None
        }
    }
}

/// Required array checked element-wise against `schema`, with a minimum length.
pub(crate) fn list_of<S: Schema>(
    map: &Map<String, Value>,
    key: &str,
    schema: &S,
    min: usize,
    path: &FieldPath,
    issues: &mut Vec<Issue>,
) -> Vec<S::Output> {
    let path = path.key(key);
    match member(map, key) {
        None => {
            path.issue(issues, "Required");
            Vec::new()
        }
        Some(Value::Array(items)) => {
            if items.len() < min {
                path.issue(
                    issues,
                    format!("Array must contain at least {min} element(s)"),
                );
            }
            items
                .iter()
                .enumerate()
                .filter_map(|(i, item)| schema.check(item, &path.index(i), issues))
                .collect()
        }
        Some(other) => {
            expected(&path, issues, "array", other);
            Vec::new()
        }
    }
}

/// Optional RFC 3339 timestamp.
pub(crate) fn optional_timestamp(
    map: &Map<String, Value>,
    key: &str,
    path: &FieldPath,
    issues: &mut Vec<Issue>,
) -> Option<String> {
    let raw = optional_string(map, key, path, issues)?;
    if DateTime::parse_from_rfc3339(&raw).is_err() {
        path.key(key).issue(issues, "Invalid datetime");
    }
    Some(raw)
}

fn is_date_like(raw: &str) -> bool {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok() || DateTime::parse_from_rfc3339(raw).is_ok()
}

/// Required `YYYY-MM-DD` date or RFC 3339 timestamp.
pub(crate) fn required_date(
    map: &Map<String, Value>,
    key: &str,
    path: &FieldPath,
    issues: &mut Vec<Issue>,
) -> String {
    let before = issues.len();
    let raw = required_string(map, key, path, issues);
    if issues.len() == before && !is_date_like(&raw) {
        path.key(key).issue(issues, "Invalid date");
    }
    raw
}

/// Optional `YYYY-MM-DD` date or RFC 3339 timestamp.
pub(crate) fn optional_date(
    map: &Map<String, Value>,
    key: &str,
    path: &FieldPath,
    issues: &mut Vec<Issue>,
) -> Option<String> {
    let raw = optional_string(map, key, path, issues)?;
    if !is_date_like(&raw) {
        path.key(key).issue(issues, "Invalid date");
    }
    Some(raw)
}

/// Required integer strictly greater than zero.
pub(crate) fn positive_int(
    map: &Map<String, Value>,
    key: &str,
    path: &FieldPath,
    issues: &mut Vec<Issue>,
) -> u32 {
    let path = path.key(key);
    match member(map, key) {
        None => {
            path.issue(issues, "Required");
            0
        }
        Some(Value::Number(n)) => match n.as_i64() {
            Some(v) if v > 0 => u32::try_from(v).unwrap_or_else(|_| {
                path.issue(issues, format!("Number must be less than or equal to {}", u32::MAX));
                0
            }),
            Some(_) => {
                path.issue(issues, "Number must be greater than 0");
                0
            }
            None if n.as_f64().is_some_and(|f| f.fract() != 0.0) => {
                path.issue(issues, "Expected integer, received float");
                0
            }
            None => {
                path.issue(issues, format!("Number must be less than or equal to {}", u32::MAX));
                0
            }
        },
        Some(other) => {
            expected(&path, issues, "number", other);
            0
        }
    }
}
