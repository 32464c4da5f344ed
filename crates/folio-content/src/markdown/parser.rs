//! Scene document parser.
//!
//! Parsing happens in two steps. [`scan`] walks the lines once with an
//! explicit state machine and records what it finds in an [`Outline`]; it
//! never fails, so the format pre-check can reuse it. The `parse_*`
//! functions then enforce the structural rules on the outline, assemble a
//! [`Scene`] with fresh ids, and run it through the schema.
//!
//! # Example
//!
//! ```rust
//! use folio_content::parse_markdown_to_scene;
//!
//! let doc = "\
//! ## Scene: Slow list rendering
//!
//! ### Context
//! A list of 10k rows re-renders on every keystroke.
//!
//! ### Solution: Memoize rows
//! #### Problem
//! Every row re-renders.
//! #### Approach
//! Wrap rows in React.memo.
//! #### Key Points
//! - Memoization: Use React.memo to avoid re-renders
//! ";
//!
//! let scene = parse_markdown_to_scene(doc).unwrap();
//! assert_eq!(scene.title, "Slow list rendering");
//! assert_eq!(scene.category, "General");
//! assert_eq!(scene.solutions[0].key_points[0].title, "Memoization");
//! ```

use std::collections::BTreeMap;

use folio_core::{
    generate_id, now_timestamp, KeyPoint, Scene, Solution, Validate, DEFAULT_CATEGORY,
};

use super::error::{MarkdownParseError, ParseErrorKind};
use super::frontmatter::{extract_frontmatter, Frontmatter};
use super::grammar::{classify, is_rule, split_lines, Fence, Line, SubHeading};
use super::helpers::{parse_key_point_detail, split_key_point, KeyPointDetail};

/// Generator name written when a solution has none.
pub(crate) const UNKNOWN_GENERATOR: &str = "unknown";

/// Reported when a `#` heading cuts a document off before its Context.
pub(crate) const UNEXPECTED_HEADING: &str = "Unexpected top-level heading before \"## Context\"";

// ============================================================================
// Outline
// ============================================================================

/// Parser position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Title,
    Frontmatter,
    /// Looking for `## Context`.
    Context,
    /// Inside the Context section.
    ContextBody,
    /// After Context, looking for the first `## Solution`.
    Seek,
    /// Inside a Solution block before any recognized sub-heading.
    SolutionHeader,
    Problem,
    Approach,
    KeyPoints,
    CodeDemo,
}

/// The Context section as found in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ContextSection {
    /// 1-based line of the `## Context` heading.
    pub line: usize,
    pub text: String,
}

/// A key point bullet with its attached sub-lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct KeyPointDraft {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub trade_offs: Option<BTreeMap<String, String>>,
}

/// A Solution block as found in the document, before any checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SolutionDraft {
    /// 1-based line of the `## Solution` heading.
    pub line: usize,
    pub title: Option<String>,
    /// `None` when the sub-heading never appeared.
    pub problem: Option<Vec<String>>,
    pub approach: Option<Vec<String>>,
    pub has_key_points_heading: bool,
    pub key_points: Vec<KeyPointDraft>,
    pub code_blocks: Vec<String>,
    pub auto_generated: bool,
    pub generator: Option<String>,
}

impl SolutionDraft {
    fn new(line: usize, title: Option<&str>) -> Self {
        Self {
            line,
            title: title.map(str::to_string),
            ..Self::default()
        }
    }

    /// Heading title, or `Solution <n>` for the n-th (1-based) block.
    pub fn display_title(&self, number: usize) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Solution {number}"))
    }

    pub fn problem_text(&self) -> Option<String> {
        self.problem.as_deref().and_then(joined_text)
    }

    pub fn approach_text(&self) -> Option<String> {
        self.approach.as_deref().and_then(joined_text)
    }

    pub fn code_demo(&self) -> Option<String> {
        let code = self.code_blocks.join("\n\n");
        (!code.trim().is_empty()).then_some(code)
    }
}

/// Everything [`scan`] found in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Outline {
    /// Non-empty title from line 1.
    pub title: Option<String>,
    pub frontmatter: Frontmatter,
    /// 1-based line where the search for `## Context` began.
    pub search_start: usize,
    pub context: Option<ContextSection>,
    /// 1-based line of a top-level heading that ended the scan before
    /// `## Context` was found.
    pub stray_heading: Option<usize>,
    pub solutions: Vec<SolutionDraft>,
}

fn joined_text(lines: &[String]) -> Option<String> {
    let text = lines.join("\n");
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// An open fence and the section that owns it.
#[derive(Debug, Clone)]
struct OpenFence {
    fence: Fence,
    /// Lines of a Code Demo block, when the fence is one.
    code: Option<Vec<String>>,
}

struct Scanner<'a> {
    lines: &'a [&'a str],
    state: State,
    outline: Outline,
    context_lines: Vec<String>,
    fence: Option<OpenFence>,
}

impl<'a> Scanner<'a> {
    fn new(lines: &'a [&'a str]) -> Self {
        Self {
            lines,
            state: State::Title,
            outline: Outline::default(),
            context_lines: Vec::new(),
            fence: None,
        }
    }

    fn run(mut self) -> Outline {
        let mut cursor = 0;
        while cursor < self.lines.len() || matches!(self.state, State::Title | State::Frontmatter) {
            match self.state {
                State::Title => {
                    // An empty `# Scene:` line is still consumed so the body
                    // after it is scanned normally.
                    let first = self.lines.first().copied().map(classify);
                    if let Some(Line::SceneTitle(title)) = first {
                        cursor = 1;
                        self.outline.title = (!title.is_empty()).then(|| title.to_string());
                    }
                    self.state = State::Frontmatter;
                }
                State::Frontmatter => {
                    let result = extract_frontmatter(self.lines, cursor);
                    cursor = result.body_start();
                    self.outline.frontmatter = result.into_frontmatter();
                    self.outline.search_start = cursor + 1;
                    self.state = State::Context;
                }
                _ => {
                    if !self.step(cursor) {
                        break;
                    }
                    cursor += 1;
                }
            }
        }
        self.finish()
    }

    /// Consume one body line. Returns `false` when the scan is over.
    fn step(&mut self, index: usize) -> bool {
        let raw = self.lines[index];
        let line_no = index + 1;

        if let Some(open) = self.fence.as_mut() {
            let closes = open.fence.closes(raw);
            let is_code = open.code.is_some();
            if let (Some(code), false) = (open.code.as_mut(), closes) {
                code.push(raw.to_string());
            }
            if !is_code {
                self.push_text(raw);
            }
            if closes {
                if let Some(OpenFence { code: Some(code), .. }) = self.fence.take() {
                    self.push_code(code);
                }
            }
            return true;
        }

        let line = classify(raw);
        if matches!(line, Line::SceneTitle(_) | Line::TopHeading) {
            if self.state == State::Context {
                self.outline.stray_heading = Some(line_no);
            }
            return false;
        }

        match self.state {
            State::Context => match line {
                Line::Context => {
                    self.outline.context = Some(ContextSection {
                        line: line_no,
                        text: String::new(),
                    });
                    self.state = State::ContextBody;
                }
                Line::Fence { ticks, .. } => self.open_fence(ticks, false),
                _ => {}
            },
            State::ContextBody => match line {
                Line::Context | Line::Solution(_) | Line::Section => {
                    self.close_context();
                    self.state = State::Seek;
                    self.seek(line, line_no);
                }
                _ => self.body_line(raw, line),
            },
            State::Seek => self.seek(line, line_no),
            State::SolutionHeader
            | State::Problem
            | State::Approach
            | State::KeyPoints
            | State::CodeDemo => self.solution_line(raw, line, line_no),
            State::Title | State::Frontmatter => {}
        }
        true
    }

    fn seek(&mut self, line: Line<'_>, line_no: usize) {
        match line {
            Line::Solution(title) => {
                self.outline.solutions.push(SolutionDraft::new(line_no, title));
                self.state = State::SolutionHeader;
            }
            Line::Fence { ticks, .. } => self.open_fence(ticks, false),
            _ => {}
        }
    }

    fn solution_line(&mut self, raw: &str, line: Line<'_>, line_no: usize) {
        match line {
            Line::Solution(title) => {
                self.outline.solutions.push(SolutionDraft::new(line_no, title));
                self.state = State::SolutionHeader;
                return;
            }
            Line::Sub(sub) => {
                self.enter(sub);
                return;
            }
            Line::Notice(generator) => {
                if let Some(draft) = self.outline.solutions.last_mut() {
                    draft.auto_generated = true;
                    draft.generator = generator
                        .filter(|g| !g.eq_ignore_ascii_case(UNKNOWN_GENERATOR))
                        .map(str::to_string);
                }
                return;
            }
            _ => {}
        }

        match self.state {
            State::Problem | State::Approach => {
                if !is_rule(raw) {
                    self.body_line(raw, line);
                }
            }
            State::KeyPoints => match line {
                Line::Bullet(text) => self.push_key_point(text),
                Line::SubBullet(text) => self.attach_detail(text),
                Line::Fence { ticks, .. } => self.open_fence(ticks, false),
                _ => {}
            },
            State::CodeDemo => {
                if let Line::Fence { ticks, .. } = line {
                    self.open_fence(ticks, true);
                }
            }
            _ => {
                if let Line::Fence { ticks, .. } = line {
                    self.open_fence(ticks, false);
                }
            }
        }
    }

    fn enter(&mut self, sub: SubHeading) {
        let Some(draft) = self.outline.solutions.last_mut() else {
            return;
        };
        self.state = match sub {
            SubHeading::Problem => {
                draft.problem.get_or_insert_with(Vec::new);
                State::Problem
            }
            SubHeading::Approach => {
                draft.approach.get_or_insert_with(Vec::new);
                State::Approach
            }
            SubHeading::KeyPoints => {
                draft.has_key_points_heading = true;
                State::KeyPoints
            }
            SubHeading::CodeDemo => State::CodeDemo,
        };
    }

    /// A line of free text in Context, Problem or Approach.
    fn body_line(&mut self, raw: &str, line: Line<'_>) {
        match line {
            Line::Blank => {}
            Line::Fence { ticks, .. } => {
                self.push_text(raw);
                self.open_fence(ticks, false);
            }
            _ => self.push_text(raw),
        }
    }

    fn open_fence(&mut self, ticks: usize, is_code: bool) {
        self.fence = Some(OpenFence {
            fence: Fence::new(ticks),
            code: is_code.then(Vec::new),
        });
    }

    /// Append a verbatim line to the free-text section being read.
    fn push_text(&mut self, raw: &str) {
        let line = raw.trim_end().to_string();
        match self.state {
            State::ContextBody => self.context_lines.push(line),
            State::Problem => {
                if let Some(lines) = self.current().and_then(|d| d.problem.as_mut()) {
                    lines.push(line);
                }
            }
            State::Approach => {
                if let Some(lines) = self.current().and_then(|d| d.approach.as_mut()) {
                    lines.push(line);
                }
            }
            _ => {}
        }
    }

    fn push_code(&mut self, code: Vec<String>) {
        if let Some(draft) = self.current() {
            draft.code_blocks.push(code.join("\n"));
        }
    }

    fn push_key_point(&mut self, text: &str) {
        let (title, description) = split_key_point(text);
        if let Some(draft) = self.current() {
            draft.key_points.push(KeyPointDraft {
                title: title.to_string(),
                description: description.to_string(),
                tags: Vec::new(),
                trade_offs: None,
            });
        }
    }

    fn attach_detail(&mut self, text: &str) {
        let Some(detail) = parse_key_point_detail(text) else {
            return;
        };
        let Some(key_point) = self.current().and_then(|d| d.key_points.last_mut()) else {
            return;
        };
        match detail {
            KeyPointDetail::Tags(tags) => key_point.tags.extend(tags),
            KeyPointDetail::TradeOffs(map) if !map.is_empty() => {
                key_point.trade_offs.get_or_insert_with(Default::default).extend(map);
            }
            KeyPointDetail::TradeOffs(_) => {}
        }
    }

    fn current(&mut self) -> Option<&mut SolutionDraft> {
        self.outline.solutions.last_mut()
    }

    fn close_context(&mut self) {
        if let Some(context) = self.outline.context.as_mut() {
            context.text = joined_text(&self.context_lines).unwrap_or_default();
        }
    }

    fn finish(mut self) -> Outline {
        if let Some(OpenFence { code: Some(code), .. }) = self.fence.take() {
            self.push_code(code);
        }
        if self.state == State::ContextBody {
            self.close_context();
        }
        self.outline
    }
}

/// Walk a document once and record its structure.
pub(crate) fn scan(lines: &[&str]) -> Outline {
    Scanner::new(lines).run()
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse a Scene document into a validated [`Scene`].
///
/// Ids and `createdAt` are freshly generated; a `createdAt` in the
/// frontmatter is not carried over.
///
/// # Errors
///
/// Returns a [`MarkdownParseError`] whose kind names the first rule the
/// document breaks, checked in document order: title, context, then each
/// solution's Problem, Approach and Key Points, then the presence of any
/// solution. A scene that passes those checks but fails the schema yields
/// [`ParseErrorKind::Validation`].
pub fn parse_markdown_to_scene(markdown: &str) -> Result<Scene, MarkdownParseError> {
    let lines = split_lines(markdown);
    parse_lines(&lines)
}

/// Parse a document holding one or more scenes, each starting with a
/// `# Scene:` line, as written by the batch exporter.
///
/// Line numbers in errors refer to the whole document.
///
/// # Errors
///
/// Fails on the first scene that does not parse.
pub fn parse_markdown_to_scenes(markdown: &str) -> Result<Vec<Scene>, MarkdownParseError> {
    let lines = split_lines(markdown);
    let mut starts = scene_starts(&lines);

    // Leading blank lines before the first title belong to no scene.
    let leading_blank = starts
        .first()
        .is_some_and(|&first| lines[..first].iter().all(|l| l.trim().is_empty()));
    if starts.first() != Some(&0) && !leading_blank {
        starts.insert(0, 0);
    }

    let mut scenes = Vec::with_capacity(starts.len());
    for (n, &start) in starts.iter().enumerate() {
        let end = starts.get(n + 1).copied().unwrap_or(lines.len());
        let scene = parse_lines(&lines[start..end]).map_err(|e| e.offset_line(start))?;
        scenes.push(scene);
    }
    Ok(scenes)
}

/// Line indices of `# Scene:` headings outside fenced code.
fn scene_starts(lines: &[&str]) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut fence: Option<Fence> = None;
    for (index, raw) in lines.iter().enumerate() {
        if let Some(open) = fence {
            if open.closes(raw) {
                fence = None;
            }
            continue;
        }
        match classify(raw) {
            Line::SceneTitle(_) => starts.push(index),
            Line::Fence { ticks, .. } => fence = Some(Fence::new(ticks)),
            _ => {}
        }
    }
    starts
}

fn parse_lines(lines: &[&str]) -> Result<Scene, MarkdownParseError> {
    let outline = scan(lines);

    let title = outline.title.ok_or_else(|| {
        MarkdownParseError::at_line(
            ParseErrorKind::MissingTitle,
            1,
            "Missing Scene title. Expected \"# Scene: [Title]\"",
        )
    })?;

    let context = outline.context.ok_or_else(|| match outline.stray_heading {
        Some(line) => MarkdownParseError::at_line(
            ParseErrorKind::MissingContext,
            line,
            UNEXPECTED_HEADING,
        ),
        None => MarkdownParseError::at_line(
            ParseErrorKind::MissingContext,
            outline.search_start,
            "Missing Context section. Expected \"## Context\"",
        ),
    })?;
    if context.text.is_empty() {
        return Err(MarkdownParseError::at_line(
            ParseErrorKind::EmptyContext,
            context.line,
            "Context section is empty",
        ));
    }

    let mut solutions = Vec::with_capacity(outline.solutions.len());
    for (index, draft) in outline.solutions.iter().enumerate() {
        solutions.push(build_solution(draft, index + 1)?);
    }
    if solutions.is_empty() {
        return Err(MarkdownParseError::at_line(
            ParseErrorKind::MissingSolution,
            context.line,
            "Missing Solution section. Expected at least one \"## Solution\"",
        ));
    }

    let Frontmatter { category, tags, .. } = outline.frontmatter;
    let scene = Scene {
        id: generate_id("scene"),
        title,
        context: context.text,
        category: category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        tags,
        solutions,
        created_at: Some(now_timestamp()),
    };
    scene.validated().map_err(MarkdownParseError::validation)
}

fn build_solution(draft: &SolutionDraft, number: usize) -> Result<Solution, MarkdownParseError> {
    let title = draft.display_title(number);
    let missing = |kind, section: &str, heading: &str| {
        MarkdownParseError::at_line(
            kind,
            draft.line,
            format!("Solution \"{title}\" missing {section} section. Expected \"{heading}\""),
        )
    };

    let problem = draft
        .problem_text()
        .ok_or_else(|| missing(ParseErrorKind::MissingProblem, "Problem", "### Problem"))?;
    let approach = draft
        .approach_text()
        .ok_or_else(|| missing(ParseErrorKind::MissingApproach, "Approach", "### Approach"))?;
    if draft.key_points.is_empty() {
        return Err(missing(
            ParseErrorKind::MissingKeyPoints,
            "Key Points",
            "### Key Points",
        ));
    }

    let key_points = draft
        .key_points
        .iter()
        .map(|kp| KeyPoint {
            id: generate_id("kp"),
            title: kp.title.clone(),
            description: kp.description.clone(),
            tags: kp.tags.clone(),
            trade_offs: kp.trade_offs.clone(),
        })
        .collect();

    Ok(Solution {
        id: generate_id("solution"),
        problem,
        approach,
        code_demo: draft.code_demo(),
        key_points,
        auto_generated: draft.auto_generated,
        generator: draft.generator.clone(),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const MINIMAL: &str = "\
# Scene: Slow list

## Context
Rendering is slow.

## Solution: Memoize
### Problem
Rows re-render.
### Approach
Use memo.
### Key Points
- Memoization: Use React.memo to avoid re-renders
";

    fn kind_of(doc: &str) -> ParseErrorKind {
        parse_markdown_to_scene(doc).unwrap_err().kind()
    }

    // ------------------------------------------------------------------------
    // Happy path
    // ------------------------------------------------------------------------

    #[test]
    fn test_minimal_scene_defaults() {
        let scene = parse_markdown_to_scene(MINIMAL).unwrap();
        assert_eq!(scene.title, "Slow list");
        assert_eq!(scene.context, "Rendering is slow.");
        assert_eq!(scene.category, "General");
        assert!(scene.tags.is_empty());
        assert!(scene.id.starts_with("scene-"));
        assert!(scene.created_at.is_some());

        let solution = &scene.solutions[0];
        assert!(solution.id.starts_with("solution-"));
        assert_eq!(solution.problem, "Rows re-render.");
        assert_eq!(solution.approach, "Use memo.");
        assert!(solution.code_demo.is_none());
        assert!(!solution.auto_generated);

        let kp = &solution.key_points[0];
        assert!(kp.id.starts_with("kp-"));
        assert_eq!(kp.title, "Memoization");
        assert_eq!(kp.description, "Use React.memo to avoid re-renders");
    }

    #[test]
    fn test_key_point_without_colon() {
        let doc = MINIMAL.replace("- Memoization: Use React.memo to avoid re-renders", "- Just a note");
        let scene = parse_markdown_to_scene(&doc).unwrap();
        let kp = &scene.solutions[0].key_points[0];
        assert_eq!(kp.title, "Just a note");
        assert_eq!(kp.description, "Just a note");
    }

    #[test]
    fn test_frontmatter_after_title() {
        let doc = MINIMAL.replacen(
            "\n\n## Context",
            "\n\n---\ncategory: Performance\ntags: [\"react\", \"perf\"]\ncreatedAt: 2020-01-01T00:00:00.000Z\n---\n\n## Context",
            1,
        );
        let scene = parse_markdown_to_scene(&doc).unwrap();
        assert_eq!(scene.category, "Performance");
        assert_eq!(scene.tags, vec!["react", "perf"]);
        assert_ne!(scene.created_at.as_deref(), Some("2020-01-01T00:00:00.000Z"));
    }

    #[test]
    fn test_sections_in_any_order_and_case() {
        let doc = "\
# Scene: Order

## context
Text.

## solution
### KEY POINTS
* First
### approach
Approach text.
### Problem
Problem text.
";
        let scene = parse_markdown_to_scene(doc).unwrap();
        let solution = &scene.solutions[0];
        assert_eq!(solution.problem, "Problem text.");
        assert_eq!(solution.approach, "Approach text.");
        assert_eq!(solution.key_points[0].title, "First");
    }

    #[test]
    fn test_key_point_sub_lines() {
        let doc = MINIMAL.replace(
            "- Memoization: Use React.memo to avoid re-renders\n",
            "- Memoization: Use React.memo\n  - Tags: react, perf\n  - Trade-offs: memory: higher, speed: faster\n- Keys: Stable keys\n",
        );
        let scene = parse_markdown_to_scene(&doc).unwrap();
        let kps = &scene.solutions[0].key_points;
        assert_eq!(kps.len(), 2);
        assert_eq!(kps[0].tags, vec!["react", "perf"]);
        let trade_offs = kps[0].trade_offs.as_ref().unwrap();
        assert_eq!(trade_offs["memory"], "higher");
        assert_eq!(trade_offs["speed"], "faster");
        assert!(kps[1].tags.is_empty());
        assert!(kps[1].trade_offs.is_none());
    }

    #[test]
    fn test_trade_offs_without_values_are_dropped() {
        for line in ["  - Trade-offs: memory:", "  - Trade-offs: junk"] {
            let doc = MINIMAL.replace(
                "- Memoization: Use React.memo to avoid re-renders\n",
                &format!("- Memoization: Use React.memo\n{line}\n"),
            );
            let scene = parse_markdown_to_scene(&doc).unwrap();
            assert!(scene.solutions[0].key_points[0].trade_offs.is_none(), "{line}");

            let reparsed =
                parse_markdown_to_scene(&crate::markdown::export_scene_to_markdown(&scene))
                    .unwrap();
            assert_eq!(
                reparsed.solutions[0].key_points[0].trade_offs,
                scene.solutions[0].key_points[0].trade_offs
            );
        }
    }

    // ------------------------------------------------------------------------
    // Code and notices
    // ------------------------------------------------------------------------

    #[test]
    fn test_code_demo_and_notice() {
        let doc = format!(
            "{MINIMAL}\n### Code Demo\n\n```tsx\nconst Row = memo(RowImpl);\n\nexport default Row;\n```\n\n> \u{26A0}\u{FE0F} Auto-generated by template\n"
        );
        let scene = parse_markdown_to_scene(&doc).unwrap();
        let solution = &scene.solutions[0];
        assert_eq!(
            solution.code_demo.as_deref(),
            Some("const Row = memo(RowImpl);\n\nexport default Row;")
        );
        assert!(solution.auto_generated);
        assert_eq!(solution.generator.as_deref(), Some("template"));
    }

    #[test]
    fn test_unknown_generator_maps_to_none() {
        let doc = format!("{MINIMAL}\n> Auto-generated by unknown\n");
        let solution = &parse_markdown_to_scene(&doc).unwrap().solutions[0];
        assert!(solution.auto_generated);
        assert!(solution.generator.is_none());
    }

    #[test]
    fn test_nested_fence_shields_headings() {
        let doc = format!(
            "{MINIMAL}\n### Code Demo\n````md\n## Solution: fake\n```js\nx\n```\n````\n"
        );
        let scene = parse_markdown_to_scene(&doc).unwrap();
        assert_eq!(scene.solutions.len(), 1);
        assert_eq!(
            scene.solutions[0].code_demo.as_deref(),
            Some("## Solution: fake\n```js\nx\n```")
        );
    }

    #[test]
    fn test_multiple_code_blocks_are_joined() {
        let doc = format!("{MINIMAL}\n### Code Demo\n```ts\na()\n```\n\n```ts\nb()\n```\n");
        let scene = parse_markdown_to_scene(&doc).unwrap();
        assert_eq!(scene.solutions[0].code_demo.as_deref(), Some("a()\n\nb()"));
    }

    #[test]
    fn test_fence_in_context_is_verbatim() {
        let doc = MINIMAL.replace(
            "Rendering is slow.\n",
            "Rendering is slow.\n```\n## Not a heading\n\nstill code\n```\n",
        );
        let scene = parse_markdown_to_scene(&doc).unwrap();
        assert_eq!(
            scene.context,
            "Rendering is slow.\n```\n## Not a heading\n\nstill code\n```"
        );
    }

    #[test]
    fn test_top_heading_ends_solutions() {
        let doc = format!("{MINIMAL}\n# Appendix\n\n## Solution: ignored\n");
        let scene = parse_markdown_to_scene(&doc).unwrap();
        assert_eq!(scene.solutions.len(), 1);
    }

    // ------------------------------------------------------------------------
    // Failures
    // ------------------------------------------------------------------------

    #[test]
    fn test_missing_title() {
        let err = parse_markdown_to_scene("## Context\nText").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::MissingTitle);
        assert_eq!(err.line(), Some(1));
        assert_eq!(kind_of("# Scene:   \n## Context\nx"), ParseErrorKind::MissingTitle);
        assert_eq!(kind_of(""), ParseErrorKind::MissingTitle);
    }

    #[test]
    fn test_title_must_be_on_line_one() {
        assert_eq!(kind_of(&format!("\n{MINIMAL}")), ParseErrorKind::MissingTitle);
    }

    #[test]
    fn test_missing_context() {
        let err = parse_markdown_to_scene("# Scene: X\n\n## Solution\n").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::MissingContext);
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn test_top_heading_before_context_is_named() {
        let err = parse_markdown_to_scene("# Scene: X

# Notes

## Context
Text
")
            .unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::MissingContext);
        assert_eq!(err.line(), Some(3));
        assert_eq!(err.message(), UNEXPECTED_HEADING);
    }

    #[test]
    fn test_empty_context() {
        let err = parse_markdown_to_scene("# Scene: X\n\n## Context\n\n   \n\n## Solution\n")
            .unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::EmptyContext);
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_missing_solution() {
        let err = parse_markdown_to_scene("# Scene: X\n\n## Context\nText\n").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::MissingSolution);
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_missing_problem_reports_solution_line() {
        let doc = "# Scene: X\n## Context\nText\n## Solution: Cache\n### Approach\nA\n### Key Points\n- k\n";
        let err = parse_markdown_to_scene(doc).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::MissingProblem);
        assert_eq!(err.line(), Some(4));
        assert!(err.message().contains("\"Cache\""));
    }

    #[test]
    fn test_missing_approach() {
        let doc = "# Scene: X\n## Context\nText\n## Solution\n### Problem\nP\n### Key Points\n- k\n";
        let err = parse_markdown_to_scene(doc).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::MissingApproach);
        assert!(err.message().contains("\"Solution 1\""));
    }

    #[test]
    fn test_missing_key_points() {
        let doc = "# Scene: X\n## Context\nText\n## Solution\n### Problem\nP\n### Approach\nA\n### Key Points\n\nNo bullets here.\n";
        assert_eq!(kind_of(doc), ParseErrorKind::MissingKeyPoints);
    }

    #[test]
    fn test_second_solution_failure() {
        let doc = format!("{MINIMAL}\n## Solution: Broken\n### Problem\nP\n");
        let err = parse_markdown_to_scene(&doc).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::MissingApproach);
        assert_eq!(err.line(), Some(14));
    }

    // ------------------------------------------------------------------------
    // Batches
    // ------------------------------------------------------------------------

    #[test]
    fn test_parse_batch() {
        let doc = format!("{MINIMAL}\n---\n\n{}", MINIMAL.replace("Slow list", "Second"));
        let scenes = parse_markdown_to_scenes(&doc).unwrap();
        assert_eq!(scenes.len(), 2);
        assert_eq!(scenes[1].title, "Second");
        assert_eq!(scenes[0].solutions[0].key_points.len(), 1);
    }

    #[test]
    fn test_parse_batch_error_lines_are_absolute() {
        let doc = format!("{MINIMAL}\n# Scene: Broken\n\n## Context\n\n");
        let err = parse_markdown_to_scenes(&doc).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::EmptyContext);
        assert_eq!(err.line(), Some(16));
    }

    #[test]
    fn test_parse_batch_rejects_leading_text() {
        let doc = format!("Intro\n{MINIMAL}");
        assert_eq!(
            parse_markdown_to_scenes(&doc).unwrap_err().kind(),
            ParseErrorKind::MissingTitle
        );
        assert_eq!(parse_markdown_to_scenes(&format!("\n\n{MINIMAL}")).unwrap().len(), 1);
    }
}
