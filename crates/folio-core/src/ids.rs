//! Identifier and timestamp utilities.
//!
//! Parsed and adapted entities receive fresh identifiers of the form
//! `<prefix>-<uuid>`; legacy records without an id get one derived from
//! their title via [`normalize_id`].

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// Generate a fresh unique identifier with the given prefix.
///
/// # Examples
///
/// ```
/// use folio_core::ids::generate_id;
///
/// let id = generate_id("scene");
/// assert!(id.starts_with("scene-"));
/// assert_ne!(id, generate_id("scene"));
/// ```
pub fn generate_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

/// Current UTC time as an RFC 3339 timestamp with millisecond precision.
///
/// ```
/// use folio_core::ids::now_timestamp;
///
/// let ts = now_timestamp();
/// assert!(ts.ends_with('Z'));
/// assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
/// ```
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Normalize an identifier to lowercase kebab-case.
///
/// Performs the following transformations:
/// 1. Trims leading/trailing whitespace
/// 2. Converts to lowercase
/// 3. Replaces underscores with hyphens
/// 4. Collapses multiple whitespace into single hyphens
///
/// # Examples
///
/// ```
/// use folio_core::ids::normalize_id;
///
/// assert_eq!(normalize_id("React Performance"), "react-performance");
/// assert_eq!(normalize_id("state_management"), "state-management");
/// assert_eq!(normalize_id("  Mixed   Case  "), "mixed-case");
/// ```
pub fn normalize_id(id: &str) -> String {
    id.trim()
        .to_lowercase()
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join("-")
}
