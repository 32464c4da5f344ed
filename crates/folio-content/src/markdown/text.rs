//! Plain-text views of Markdown bodies.
//!
//! Used for reading-time estimates and summaries of blog articles, whose
//! bodies are ordinary CommonMark rather than the Scene grammar.
//!
//! ```rust
//! use folio_content::markdown::text::{estimate_reading_time, extract_text_content};
//!
//! let body = "# Hooks\n\nUse **state** wisely.\n\n```js\nignored()\n```";
//! assert_eq!(extract_text_content(body), "Hooks Use state wisely.");
//! assert_eq!(estimate_reading_time(body, 200), 1);
//! ```

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

/// Reading speed used when none is configured.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Plain text of `content` with formatting and fenced code removed.
pub fn extract_text_content(content: &str) -> String {
    let mut text_content = String::new();
    let mut in_code_block = false;

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            Event::Text(text) | Event::Code(text) if !in_code_block => {
                if !text_content.is_empty() && !text_content.ends_with(' ') {
                    text_content.push(' ');
                }
                text_content.push_str(&text);
            }
            Event::SoftBreak | Event::HardBreak => text_content.push(' '),
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item) => {
                text_content.push('\n');
            }
            _ => {}
        }
    }

    normalize_whitespace(&text_content)
}

/// First paragraph of `content` as plain text, truncated at a word boundary
/// to roughly `max_chars` characters with a trailing `...`.
pub fn extract_first_paragraph(content: &str, max_chars: usize) -> Option<String> {
    let mut in_paragraph = false;
    let mut in_heading = false;
    let mut paragraph = String::new();

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading { .. }) => in_heading = true,
            Event::End(TagEnd::Heading(_)) => in_heading = false,
            Event::Start(Tag::Paragraph) if !in_heading => {
                in_paragraph = true;
                paragraph.clear();
            }
            Event::End(TagEnd::Paragraph) if in_paragraph => {
                let trimmed = normalize_whitespace(&paragraph);
                if !trimmed.is_empty() {
                    return Some(truncate_text(&trimmed, max_chars));
                }
                in_paragraph = false;
            }
            Event::Text(text) | Event::Code(text) if in_paragraph => paragraph.push_str(&text),
            Event::SoftBreak | Event::HardBreak if in_paragraph => paragraph.push(' '),
            _ => {}
        }
    }

    None
}

/// Count words in plain text.
///
/// Whitespace-separated runs count as one word each, except that every CJK
/// ideograph or kana counts as a word on its own.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace()
        .map(|token| {
            let cjk = token.chars().filter(|&c| is_cjk(c)).count();
            let rest = token.chars().any(|c| !is_cjk(c) && c.is_alphanumeric());
            cjk + usize::from(rest)
        })
        .sum()
}

/// Minutes needed to read the Markdown `content` at `words_per_minute`,
/// rounded up and never less than one.
pub fn estimate_reading_time(content: &str, words_per_minute: u32) -> u32 {
    let words = word_count(&extract_text_content(content));
    let wpm = words_per_minute.max(1) as usize;
    let minutes = words.div_ceil(wpm).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{30FF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{AC00}'..='\u{D7AF}')
}

fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    let at_word = cut
        .rfind(char::is_whitespace)
        .map_or(cut.as_str(), |pos| &cut[..pos]);
    format!("{}...", at_word.trim_end())
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
