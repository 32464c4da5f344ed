//! The Scene Markdown grammar: parsing, export and pre-checks.
//!
//! - [`grammar`]: line classification
//! - [`frontmatter`]: the metadata block after the title
//! - [`helpers`]: tag, key point and trade-off value parsers
//! - [`parser`]: Markdown → validated [`Scene`](folio_core::Scene)
//! - [`export`]: Scene → Markdown
//! - [`lint`]: structural pre-check that reports every problem
//! - [`text`]: plain-text extraction and reading time for CommonMark bodies
//!
//! # Example
//!
//! ```rust
//! use folio_content::markdown::{export_scene_to_markdown, parse_markdown_to_scene};
//!
//! let doc = "# Scene: X\n## Context\nC\n## Solution\n### Problem\nP\n### Approach\nA\n### Key Points\n- k: v\n";
//! let scene = parse_markdown_to_scene(doc).unwrap();
//! let again = parse_markdown_to_scene(&export_scene_to_markdown(&scene)).unwrap();
//!
//! assert_eq!(again.title, scene.title);
//! assert_eq!(again.solutions[0].key_points[0].description, "v");
//! ```

pub mod error;
pub mod export;
pub mod frontmatter;
pub mod grammar;
pub mod helpers;
pub mod lint;
pub mod parser;
pub mod text;

mod proptests;

pub use error::{MarkdownParseError, ParseErrorKind};
pub use export::{
    export_scene_to_markdown, export_scene_to_markdown_with_options, export_scenes_to_markdown,
    export_scenes_to_markdown_with_options, ExportOptions,
};
pub use frontmatter::{extract_frontmatter, render_frontmatter, Frontmatter, FrontmatterResult};
pub use grammar::split_lines;
pub use lint::{validate_markdown_format, FormatReport};
pub use parser::{parse_markdown_to_scene, parse_markdown_to_scenes};
pub use text::{estimate_reading_time, extract_first_paragraph, extract_text_content, word_count};
