//! Scene frontmatter.
//!
//! A Scene document may carry a metadata block directly after its title
//! line, delimited by `---`:
//!
//! ```markdown
//! # Scene: Caching Strategy
//!
//! ---
//! category: Performance
//! tags: ["caching", "http"]
//! createdAt: 2024-05-01T10:00:00.000Z
//! ---
//! ```
//!
//! Only `key: value` lines are understood. `category` is a single value,
//! `tags` a bracketed or bare comma list, `createdAt` a timestamp.
//!
//! # Usage
//!
//! ```rust
//! use folio_content::markdown::{extract_frontmatter, split_lines};
//!
//! let lines = split_lines("# Scene: X\n---\ncategory: Ops\n---\n## Context");
//! let result = extract_frontmatter(&lines, 1);
//!
//! assert!(result.has_frontmatter());
//! assert_eq!(result.body_start(), 4);
//! assert_eq!(result.frontmatter().and_then(|f| f.category.as_deref()), Some("Ops"));
//! ```

use super::grammar::is_rule;
use super::helpers::{parse_tag_list, strip_quotes};

/// Metadata declared in a Scene's frontmatter block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    /// Declared category, if non-empty.
    pub category: Option<String>,
    /// Declared tags, in order.
    pub tags: Vec<String>,
    /// Declared creation timestamp, if any.
    pub created_at: Option<String>,
}

/// Result of looking for a frontmatter block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontmatterResult {
    frontmatter: Option<Frontmatter>,
    body_start: usize,
    had_delimiters: bool,
}

impl FrontmatterResult {
    fn without_frontmatter(body_start: usize) -> Self {
        Self {
            frontmatter: None,
            body_start,
            had_delimiters: false,
        }
    }

    fn unclosed(body_start: usize) -> Self {
        Self {
            frontmatter: None,
            body_start,
            had_delimiters: true,
        }
    }

    /// `true` if a closed block was found.
    pub fn has_frontmatter(&self) -> bool {
        self.frontmatter.is_some()
    }

    /// `true` if an opening delimiter was seen, closed or not.
    pub fn had_delimiters(&self) -> bool {
        self.had_delimiters
    }

    /// Parsed block, if closed.
    pub fn frontmatter(&self) -> Option<&Frontmatter> {
        self.frontmatter.as_ref()
    }

    /// Takes the parsed block, or the empty default.
    pub fn into_frontmatter(self) -> Frontmatter {
        self.frontmatter.unwrap_or_default()
    }

    /// Index of the first line after the block.
    pub fn body_start(&self) -> usize {
        self.body_start
    }
}

/// Look for a frontmatter block at the first non-blank line from `start`.
///
/// # Behavior
///
/// - No `---` at that position: nothing consumed, `body_start == start`.
/// - Opening `---` but a heading or the end of input before the closing one:
///   logs a warning, nothing consumed.
/// - Closed block: parsed, `body_start` points past the closing delimiter.
pub fn extract_frontmatter(lines: &[&str], start: usize) -> FrontmatterResult {
    let Some(open) = (start..lines.len()).find(|&i| !lines[i].trim().is_empty()) else {
        return FrontmatterResult::without_frontmatter(start);
    };
    if !is_rule(lines[open]) {
        return FrontmatterResult::without_frontmatter(start);
    }

    let mut frontmatter = Frontmatter::default();
    for (index, line) in lines.iter().enumerate().skip(open + 1) {
        if is_rule(line) {
            return FrontmatterResult {
                frontmatter: Some(frontmatter),
                body_start: index + 1,
                had_delimiters: true,
            };
        }
        if line.trim_start().starts_with('#') {
            break;
        }
        apply_line(&mut frontmatter, line, index + 1);
    }

    log::warn!(
        "Frontmatter opening delimiter on line {} has no closing delimiter",
        open + 1
    );
    FrontmatterResult::unclosed(start)
}

fn apply_line(frontmatter: &mut Frontmatter, line: &str, line_no: usize) {
    if line.trim().is_empty() {
        return;
    }
    let Some((key, value)) = line.split_once(':') else {
        log::debug!("Ignoring frontmatter line {line_no} without a key");
        return;
    };
    let value = value.trim();
    match key.trim() {
        "category" => {
            let category = strip_quotes(value);
            frontmatter.category = (!category.is_empty()).then(|| category.to_string());
        }
        "tags" => frontmatter.tags = parse_tag_list(value),
        "createdAt" => {
            let created_at = strip_quotes(value);
            frontmatter.created_at = (!created_at.is_empty()).then(|| created_at.to_string());
        }
        other => log::debug!("Ignoring unknown frontmatter key '{other}' on line {line_no}"),
    }
}

/// Render a frontmatter block, delimiters included, with a trailing newline.
///
/// `tags` is omitted when empty and `createdAt` when absent.
pub fn render_frontmatter(frontmatter: &Frontmatter) -> String {
    let mut out = String::from("---\n");
    if let Some(category) = &frontmatter.category {
        out.push_str(&format!("category: {category}\n"));
    }
    if !frontmatter.tags.is_empty() {
        let tags = frontmatter
            .tags
            .iter()
            .map(|t| format!("\"{t}\""))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("tags: [{tags}]\n"));
    }
    if let Some(created_at) = &frontmatter.created_at {
        out.push_str(&format!("createdAt: {created_at}\n"));
    }
    out.push_str("---\n");
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::grammar::split_lines;

    // ------------------------------------------------------------------------
    // Extraction
    // ------------------------------------------------------------------------

    #[test]
    fn test_extract_full_block() {
        let doc = "# Scene: X\n\n---\ncategory: Performance\ntags: [\"react\", \"perf\"]\ncreatedAt: 2024-05-01T10:00:00.000Z\n---\n\n## Context";
        let lines = split_lines(doc);
        let result = extract_frontmatter(&lines, 1);

        assert!(result.has_frontmatter());
        assert_eq!(result.body_start(), 7);
        let fm = result.into_frontmatter();
        assert_eq!(fm.category.as_deref(), Some("Performance"));
        assert_eq!(fm.tags, vec!["react", "perf"]);
        assert_eq!(fm.created_at.as_deref(), Some("2024-05-01T10:00:00.000Z"));
    }

    #[test]
    fn test_extract_absent_block() {
        let lines = split_lines("# Scene: X\n\n## Context\nText");
        let result = extract_frontmatter(&lines, 1);
        assert!(!result.has_frontmatter());
        assert!(!result.had_delimiters());
        assert_eq!(result.body_start(), 1);
        assert_eq!(result.into_frontmatter(), Frontmatter::default());
    }

    #[test]
    fn test_extract_unclosed_block_rewinds() {
        let lines = split_lines("# Scene: X\n---\ncategory: Ops\n## Context\nText");
        let result = extract_frontmatter(&lines, 1);
        assert!(!result.has_frontmatter());
        assert!(result.had_delimiters());
        assert_eq!(result.body_start(), 1);
    }

    #[test]
    fn test_extract_unclosed_at_end_of_input() {
        let lines = split_lines("# Scene: X\n---\ncategory: Ops");
        let result = extract_frontmatter(&lines, 1);
        assert!(!result.has_frontmatter());
        assert!(result.had_delimiters());
    }

    #[test]
    fn test_unknown_keys_and_empty_values() {
        let lines = split_lines("---\nauthor: me\ncategory:\nnonsense\ntags: a, 'b'\n---");
        let fm = extract_frontmatter(&lines, 0).into_frontmatter();
        assert_eq!(fm.category, None);
        assert_eq!(fm.tags, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_block() {
        let lines = split_lines("---\n---\nBody");
        let result = extract_frontmatter(&lines, 0);
        assert!(result.has_frontmatter());
        assert_eq!(result.body_start(), 2);
    }

    // ------------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------------

    #[test]
    fn test_render_round_trips() {
        let fm = Frontmatter {
            category: Some("Performance".into()),
            tags: vec!["react".into(), "perf".into()],
            created_at: Some("2024-05-01T10:00:00.000Z".into()),
        };
        let rendered = render_frontmatter(&fm);
        assert_eq!(
            rendered,
            "---\ncategory: Performance\ntags: [\"react\", \"perf\"]\ncreatedAt: 2024-05-01T10:00:00.000Z\n---\n"
        );
        let lines = split_lines(&rendered);
        assert_eq!(extract_frontmatter(&lines, 0).into_frontmatter(), fm);
    }

    #[test]
    fn test_render_omits_empty_fields() {
        let fm = Frontmatter {
            category: Some("General".into()),
            ..Frontmatter::default()
        };
        assert_eq!(render_frontmatter(&fm), "---\ncategory: General\n---\n");
    }
}
