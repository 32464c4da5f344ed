//! Folio Core: domain model, schema gate, and shared errors.
//!
//! This crate provides the foundational types used across all Folio crates.
//! It has no internal Folio dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`model`]: Scene, Solution, KeyPoint, Project and BlogArticle
//! - [`schema`]: Hand-written validators, `parse` and `validate_and_filter`
//! - [`diagnostics`]: Injectable sink for advisory warnings
//! - [`error`]: Error types and Result alias
//! - [`ids`]: Identifier generation and normalization
//!
//! # Example
//!
//! ```rust
//! use folio_core::schema::{parse, SceneSchema};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "id": "scene-1",
//!     "title": "Caching Strategy",
//!     "context": "API calls are slow and repeated.",
//!     "solutions": [{
//!         "id": "solution-1",
//!         "problem": "Same request fired repeatedly.",
//!         "approach": "Cache by request key.",
//!         "keyPoints": [{ "id": "kp-1", "title": "TTL", "description": "Expire entries after 60s" }]
//!     }]
//! });
//!
//! let scene = parse(&SceneSchema, &raw).unwrap();
//! assert_eq!(scene.category, "General");
//! assert!(scene.tags.is_empty());
//! ```

pub mod diagnostics;
pub mod error;
pub mod ids;
pub mod model;
pub mod schema;

mod proptests;

// Re-export key types at crate root for convenience
pub use diagnostics::{Diagnostics, LogDiagnostics, RecordingDiagnostics};
pub use error::{Error, Issue, Result, ValidationError};
pub use ids::{generate_id, normalize_id, now_timestamp};
pub use model::{BlogArticle, KeyPoint, Project, ProjectType, Scene, Solution, DEFAULT_CATEGORY};
pub use schema::{parse, validate_and_filter, BatchResult, InvalidItem, Schema, Validate};
