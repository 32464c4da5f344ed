//! Folio Data: legacy adapters and validated catalogs.
//!
//! Raw content arrives as JSON, sometimes in older shapes. This crate turns
//! it into [`Catalog`]s of schema-checked entities:
//!
//! - [`legacy`]: adapters from the legacy scene, project and blog shapes
//! - [`catalog`]: validated collections with facet, search and sort queries
//! - [`source`]: async loading of JSON record files
//!
//! # Example
//!
//! ```rust
//! use folio_core::RecordingDiagnostics;
//! use folio_data::legacy::LegacyKnowledgeScene;
//! use folio_data::{Catalog, SCENES_CONTEXT};
//! use folio_core::schema::SceneSchema;
//! use serde_json::json;
//!
//! let raw = vec![json!({
//!     "title": "State Management",
//!     "description": "Props drilled through five layers.",
//!     "solution": "Lift state into a context provider.",
//!     "keyPoints": [{"title": "Scope", "description": "Keep providers close to consumers"}]
//! })];
//!
//! let sink = RecordingDiagnostics::new();
//! let scenes = Catalog::from_legacy::<LegacyKnowledgeScene, _>(
//!     &SceneSchema, &raw, SCENES_CONTEXT, &sink,
//! );
//! assert_eq!(scenes.items()[0].id, "state-management");
//! assert!(sink.warnings().is_empty());
//! ```

pub mod catalog;
pub mod legacy;
pub mod source;

pub use catalog::{
    blog_catalog, parse_article_date, project_catalog, scene_catalog, BlogSort, Catalog, Entry,
    BLOG_CONTEXT, PROJECTS_CONTEXT, SCENES_CONTEXT,
};
pub use legacy::{
    adapt_records, LegacyBlogArticle, LegacyKnowledgeScene, LegacyProject, LegacyRecord,
};
pub use source::{load_records, records_from_value};
