//! Scene → Markdown export.
//!
//! The output follows the house grammar exactly, so
//! [`parse_markdown_to_scene`](super::parse_markdown_to_scene) reads it back
//! into an equivalent Scene (ids and `createdAt` aside).


use folio_core::{KeyPoint, Scene, Solution};
use serde::{Deserialize, Serialize};

use super::frontmatter::{render_frontmatter, Frontmatter};
use super::parser::UNKNOWN_GENERATOR;

/// Separator between solutions, and between scenes in a batch.
const RULE: &str = "---";

/// Formatting knobs for the exporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Info string on Code Demo fences.
    pub code_language: String,
    /// Maximum characters taken from a problem for its `## Solution:` title.
    pub solution_title_max_chars: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            code_language: "tsx".to_string(),
            solution_title_max_chars: 50,
        }
    }
}

/// Render one scene with the default options.
pub fn export_scene_to_markdown(scene: &Scene) -> String {
    export_scene_to_markdown_with_options(scene, &ExportOptions::default())
}

/// Render one scene.
pub fn export_scene_to_markdown_with_options(scene: &Scene, options: &ExportOptions) -> String {
    let mut out = format!("# Scene: {}\n\n", scene.title);

    out.push_str(&render_frontmatter(&Frontmatter {
        category: Some(scene.category.clone()),
        tags: scene.tags.clone(),
        created_at: scene.created_at.clone(),
    }));
    out.push('\n');

    out.push_str(&format!("## Context\n\n{}\n\n", scene.context));

    for (index, solution) in scene.solutions.iter().enumerate() {
        if index > 0 {
            out.push_str(&format!("{RULE}\n\n"));
        }
        write_solution(&mut out, solution, options);
    }

    out
}

/// Render several scenes into one document, separated by `---` rules.
pub fn export_scenes_to_markdown(scenes: &[Scene]) -> String {
    export_scenes_to_markdown_with_options(scenes, &ExportOptions::default())
}

/// Render several scenes into one document with the given options.
pub fn export_scenes_to_markdown_with_options(scenes: &[Scene], options: &ExportOptions) -> String {
    scenes
        .iter()
        .map(|scene| export_scene_to_markdown_with_options(scene, options))
        .collect::<Vec<_>>()
        .join(&format!("\n\n{RULE}\n\n"))
}

fn write_solution(out: &mut String, solution: &Solution, options: &ExportOptions) {
    let title = solution_title(&solution.problem, options.solution_title_max_chars);
    out.push_str(&format!("## Solution: {title}\n\n"));
    out.push_str(&format!("### Problem\n\n{}\n\n", solution.problem));
    out.push_str(&format!("### Approach\n\n{}\n\n", solution.approach));

    if !solution.key_points.is_empty() {
        out.push_str("### Key Points\n\n");
        for key_point in &solution.key_points {
            write_key_point(out, key_point);
        }
        out.push('\n');
    }

    if let Some(code) = solution.code_demo.as_deref().filter(|c| !c.is_empty()) {
        let fence = "`".repeat(fence_length(code));
        out.push_str(&format!(
            "### Code Demo\n\n{fence}{}\n{code}\n{fence}\n\n",
            options.code_language
        ));
    }

    if solution.auto_generated {
        let generator = solution.generator.as_deref().unwrap_or(UNKNOWN_GENERATOR);
        out.push_str(&format!("> \u{26A0}\u{FE0F} Auto-generated by {generator}\n\n"));
    }
}

fn write_key_point(out: &mut String, key_point: &KeyPoint) {
    if key_point.title == key_point.description {
        out.push_str(&format!("- {}\n", key_point.title));
    } else {
        out.push_str(&format!("- {}: {}\n", key_point.title, key_point.description));
    }
    if !key_point.tags.is_empty() {
        out.push_str(&format!("  - Tags: {}\n", key_point.tags.join(", ")));
    }
    if let Some(trade_offs) = &key_point.trade_offs {
        let rendered = trade_offs
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join(", ");
        if !rendered.is_empty() {
            out.push_str(&format!("  - Trade-offs: {rendered}\n"));
        }
    }
}

/// First line of `problem`, cut to at most `max_chars` characters.
pub fn solution_title(problem: &str, max_chars: usize) -> String {
    let first_line = problem.lines().next().unwrap_or("").trim();
    first_line.chars().take(max_chars).collect::<String>().trim_end().to_string()
}

/// Backticks needed to fence `code`: three, or one more than its longest run.
fn fence_length(code: &str) -> usize {
    let mut longest = 0;
    let mut run = 0;
    for c in code.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    if longest >= 3 { longest + 1 } else { 3 }
}

// ============================================================================
// Tests
// ============================================================================
