//! Line classification for the Scene house grammar.
//!
//! The grammar is line-oriented: every construct the parser cares about
//! (headings, fences, bullets, the auto-generated notice) starts at the
//! beginning of a line, so each line is classified on its own and the parser
//! decides what the class means in its current state. Section keywords are
//! matched case-insensitively.

use std::sync::LazyLock;

use regex::Regex;

static SCENE_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#\s*scene:\s*(.*?)\s*$").expect("Invalid scene title regex"));

static TOP_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:\s|$)").expect("Invalid top heading regex"));

static CONTEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^##\s+context\b").expect("Invalid context heading regex"));

static SOLUTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^##\s+solution(?:\s*:\s*(.*?))?\s*$").expect("Invalid solution heading regex")
});

static SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^##\s+").expect("Invalid section heading regex"));

static SUBSECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^###\s+(problem|approach|key\s+points|code\s+demo)\b")
        .expect("Invalid sub-heading regex")
});

static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ {0,3}(`{3,})\s*([^`]*?)\s*$").expect("Invalid fence regex"));

static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s+(.+?)\s*$").expect("Invalid bullet regex"));

static SUB_BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+[-*]\s+(.+?)\s*$").expect("Invalid sub-bullet regex"));

static NOTICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^>\s*(?:\x{26A0}\x{FE0F}?\s*)?auto-generated(?:\s+by\s+(.+?))?\s*$")
        .expect("Invalid notice regex")
});

/// The four recognized sub-headings of a Solution block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubHeading {
    /// `### Problem`
    Problem,
    /// `### Approach`
    Approach,
    /// `### Key Points`
    KeyPoints,
    /// `### Code Demo`
    CodeDemo,
}

/// Grammatical class of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `# Scene: <title>`; the title may be empty.
    SceneTitle(&'a str),
    /// Any other level-1 heading.
    TopHeading,
    /// `## Context`
    Context,
    /// `## Solution` with an optional `: <title>`.
    Solution(Option<&'a str>),
    /// Any other level-2 heading.
    Section,
    /// One of the recognized `###` sub-headings.
    Sub(SubHeading),
    /// A fence line: backtick count and info string.
    Fence {
        /// Number of backticks.
        ticks: usize,
        /// Language tag or other info string (may be empty).
        info: &'a str,
    },
    /// Top-level `- ` / `* ` bullet text.
    Bullet(&'a str),
    /// Indented bullet text.
    SubBullet(&'a str),
    /// `> ⚠️ Auto-generated by <generator>`.
    Notice(Option<&'a str>),
    /// Whitespace only.
    Blank,
    /// Anything else.
    Text,
}

/// Classify one line (without its line terminator).
pub fn classify(line: &str) -> Line<'_> {
    if line.trim().is_empty() {
        return Line::Blank;
    }
    if let Some(caps) = SCENE_TITLE_RE.captures(line) {
        return Line::SceneTitle(caps.get(1).map_or("", |m| m.as_str()));
    }
    if TOP_HEADING_RE.is_match(line) {
        return Line::TopHeading;
    }
    if CONTEXT_RE.is_match(line) {
        return Line::Context;
    }
    if let Some(caps) = SOLUTION_RE.captures(line) {
        let title = caps.get(1).map(|m| m.as_str()).filter(|t| !t.is_empty());
        return Line::Solution(title);
    }
    if SECTION_RE.is_match(line) {
        return Line::Section;
    }
    if let Some(caps) = SUBSECTION_RE.captures(line) {
        let keyword = caps[1].to_lowercase();
        let sub = match keyword.split_whitespace().next() {
            Some("problem") => SubHeading::Problem,
            Some("approach") => SubHeading::Approach,
            Some("key") => SubHeading::KeyPoints,
            _ => SubHeading::CodeDemo,
        };
        return Line::Sub(sub);
    }
    if let Some(caps) = FENCE_RE.captures(line) {
        return Line::Fence {
            ticks: caps[1].len(),
            info: caps.get(2).map_or("", |m| m.as_str()),
        };
    }
    if let Some(caps) = NOTICE_RE.captures(line) {
        return Line::Notice(caps.get(1).map(|m| m.as_str()));
    }
    if let Some(caps) = BULLET_RE.captures(line) {
        return Line::Bullet(caps.get(1).map_or("", |m| m.as_str()));
    }
    if let Some(caps) = SUB_BULLET_RE.captures(line) {
        return Line::SubBullet(caps.get(1).map_or("", |m| m.as_str()));
    }
    Line::Text
}

/// `true` for a `---` frontmatter delimiter or horizontal rule.
pub fn is_rule(line: &str) -> bool {
    line.trim() == "---"
}

/// An open fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fence {
    ticks: usize,
}

impl Fence {
    /// Opens a fence of `ticks` backticks.
    pub fn new(ticks: usize) -> Self {
        Self { ticks }
    }

    /// `true` if `line` closes this fence: backticks only, at least as many
    /// as the opening fence, at most three spaces of indentation.
    pub fn closes(&self, line: &str) -> bool {
        let trimmed_start = line.trim_start_matches(' ');
        if line.len() - trimmed_start.len() > 3 {
            return false;
        }
        let body = trimmed_start.trim_end();
        !body.is_empty() && body.chars().all(|c| c == '`') && body.len() >= self.ticks
    }
}

/// Split a document into lines, dropping a leading BOM and `\r` terminators.
pub fn split_lines(markdown: &str) -> Vec<&str> {
    markdown
        .strip_prefix('\u{feff}')
        .unwrap_or(markdown)
        .lines()
        .collect()
}
