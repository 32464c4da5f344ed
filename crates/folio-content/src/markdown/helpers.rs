//! Small value parsers shared by the frontmatter and key point readers.
//!
//! # Example
//!
//! ```rust
//! use folio_content::markdown::helpers::{parse_tag_list, split_key_point};
//!
//! assert_eq!(parse_tag_list(r#"["react", "perf"]"#), vec!["react", "perf"]);
//! assert_eq!(split_key_point("TTL: Expire entries"), ("TTL", "Expire entries"));
//! ```

use std::collections::BTreeMap;

/// Strip one pair of matching surrounding quotes (`"` or `'`).
pub fn strip_quotes(value: &str) -> &str {
    let value = value.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Parse a comma-separated list into trimmed, non-empty strings.
///
/// Each item has its surrounding quotes removed.
///
/// # Example
///
/// ```rust
/// use folio_content::markdown::helpers::parse_comma_list;
///
/// assert_eq!(parse_comma_list("a, 'b' ,, c"), vec!["a", "b", "c"]);
/// ```
pub fn parse_comma_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(strip_quotes)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Parse a tag list, bracketed (`["a", "b"]`) or bare (`a, b`).
pub fn parse_tag_list(value: &str) -> Vec<String> {
    let value = value.trim();
    let inner = value
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(value);
    parse_comma_list(inner)
}

/// Split a key point bullet on its first colon.
///
/// The text before the colon is the title and the text after it the
/// description. A colon in the first position does not count; without a
/// usable colon, or when either side is blank, the whole text serves as
/// both title and description.
pub fn split_key_point(text: &str) -> (&str, &str) {
    let text = text.trim();
    match text.find(':') {
        Some(pos) if pos > 0 => {
            let title = text[..pos].trim();
            let description = text[pos + 1..].trim();
            if title.is_empty() || description.is_empty() {
                (text, text)
            } else {
                (title, description)
            }
        }
        _ => (text, text),
    }
}

/// Parse `k: v, k2: v2` trade-off notes.
///
/// Entries without a colon, with an empty key or with an empty value are
/// skipped, matching what the exporter writes.
pub fn parse_trade_offs(value: &str) -> BTreeMap<String, String> {
    value
        .split(',')
        .filter_map(|entry| {
            let (key, val) = entry.split_once(':')?;
            let key = strip_quotes(key);
            let val = strip_quotes(val);
            if key.is_empty() || val.is_empty() {
                return None;
            }
            Some((key.to_string(), val.to_string()))
        })
        .collect()
}

/// A recognized key point sub-line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPointDetail {
    /// `Tags: a, b`
    Tags(Vec<String>),
    /// `Trade-offs: k: v`
    TradeOffs(BTreeMap<String, String>),
}

/// Interpret the text of an indented sub-bullet under a key point.
///
/// Returns `None` for sub-bullets that are neither tags nor trade-offs.
pub fn parse_key_point_detail(text: &str) -> Option<KeyPointDetail> {
    let (label, value) = text.split_once(':')?;
    let label = label.trim().to_ascii_lowercase();
    match label.as_str() {
        "tags" => Some(KeyPointDetail::Tags(parse_tag_list(value))),
        "trade-offs" | "tradeoffs" | "trade offs" => {
            Some(KeyPointDetail::TradeOffs(parse_trade_offs(value)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Lists
    // ------------------------------------------------------------------------

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes(r#" "react" "#), "react");
        assert_eq!(strip_quotes("'perf'"), "perf");
        assert_eq!(strip_quotes(r#""mismatched'"#), r#""mismatched'"#);
        assert_eq!(strip_quotes("\""), "\"");
    }

    #[test]
    fn test_parse_tag_list_forms() {
        assert_eq!(parse_tag_list(r#"["react", "performance"]"#), vec!["react", "performance"]);
        assert_eq!(parse_tag_list("react, performance"), vec!["react", "performance"]);
        assert_eq!(parse_tag_list("[]"), Vec::<String>::new());
        assert_eq!(parse_tag_list(""), Vec::<String>::new());
    }

    // ------------------------------------------------------------------------
    // Key points
    // ------------------------------------------------------------------------

    #[test]
    fn test_split_key_point_on_first_colon() {
        assert_eq!(
            split_key_point("Memoization: Use React.memo to avoid re-renders"),
            ("Memoization", "Use React.memo to avoid re-renders")
        );
        assert_eq!(split_key_point("Ratio: 1:2 split"), ("Ratio", "1:2 split"));
    }

    #[test]
    fn test_split_key_point_without_colon() {
        assert_eq!(split_key_point("Just a note"), ("Just a note", "Just a note"));
        assert_eq!(split_key_point(":leading colon"), (":leading colon", ":leading colon"));
        assert_eq!(split_key_point("Dangling:"), ("Dangling:", "Dangling:"));
    }

    #[test]
    fn test_parse_trade_offs() {
        let trade_offs = parse_trade_offs("memory: higher, speed: faster, junk");
        assert_eq!(trade_offs.len(), 2);
        assert_eq!(trade_offs["memory"], "higher");
        assert_eq!(trade_offs["speed"], "faster");
    }

    #[test]
    fn test_parse_trade_offs_skips_empty_values() {
        let trade_offs = parse_trade_offs("memory:, speed: \"\", cost: low");
        assert_eq!(trade_offs.len(), 1);
        assert_eq!(trade_offs["cost"], "low");
        assert!(parse_trade_offs("memory:").is_empty());
        assert!(parse_trade_offs("junk").is_empty());
    }

    #[test]
    fn test_parse_key_point_detail() {
        assert_eq!(
            parse_key_point_detail("Tags: react, hooks"),
            Some(KeyPointDetail::Tags(vec!["react".into(), "hooks".into()]))
        );
        assert!(matches!(
            parse_key_point_detail("Trade-offs: memory: higher"),
            Some(KeyPointDetail::TradeOffs(map)) if map["memory"] == "higher"
        ));
        assert_eq!(parse_key_point_detail("See also: caching"), None);
        assert_eq!(parse_key_point_detail("no colon"), None);
    }
}
