//! Scene Markdown codec and content utilities.
//!
//! This crate turns documents written in the Scene house grammar into
//! validated [`folio_core::Scene`] values and back, and provides the plain
//! text helpers used for blog articles.
//!
//! # Modules
//!
//! - [`markdown`]: grammar, parser, exporter, pre-check and text helpers
//! - [`files`]: async read/write of `.md` files
//! - [`error`]: file helper errors
//!
//! Parsing and export are synchronous; only [`files`] touches the disk.
//!
//! # Example
//!
//! ```rust
//! use folio_content::{validate_markdown_format, parse_markdown_to_scene, ParseErrorKind};
//!
//! let doc = "# Scene: Caching\n\n## Context\nRepeated API calls.\n";
//!
//! let report = validate_markdown_format(doc);
//! assert!(!report.valid);
//!
//! let err = parse_markdown_to_scene(doc).unwrap_err();
//! assert_eq!(err.kind(), ParseErrorKind::MissingSolution);
//! assert_eq!(err.line(), Some(3));
//! ```

pub mod error;
pub mod files;
pub mod markdown;

pub use error::{Error, Result};
pub use files::{
    export_scene_file, import_scene_file, markdown_filename, read_markdown_file, save_markdown,
};
pub use markdown::{
    estimate_reading_time, export_scene_to_markdown, export_scene_to_markdown_with_options,
    export_scenes_to_markdown, export_scenes_to_markdown_with_options, extract_text_content,
    parse_markdown_to_scene, parse_markdown_to_scenes, validate_markdown_format, ExportOptions,
    FormatReport, MarkdownParseError, ParseErrorKind,
};
