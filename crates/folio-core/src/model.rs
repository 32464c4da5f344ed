//! Domain entities.
//!
//! Ownership is tree-shaped: a [`Scene`] owns its [`Solution`]s, which own
//! their [`KeyPoint`]s. Field names are camelCase on the wire so that the
//! same records can come from static JSON datasets, imported Markdown, or an
//! API response.
//!
//! Values of these types are normally obtained through the schema gate
//! ([`crate::schema::parse`]) rather than constructed by hand; a value built
//! in code can be held to the same contract with
//! [`Validate::validated`](crate::schema::Validate::validated).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category assigned to a scene that does not declare one.
pub const DEFAULT_CATEGORY: &str = "General";

/// A documented engineering problem with one or more proposed solutions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Unique identifier.
    pub id: String,
    /// Scene title (non-empty).
    pub title: String,
    /// Background and problem framing (non-empty).
    pub context: String,
    /// Grouping category, `"General"` by default.
    pub category: String,
    /// Free-form tags, in declaration order.
    pub tags: Vec<String>,
    /// At least one solution.
    pub solutions: Vec<Solution>,
    /// ISO-8601 creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// One approach to a scene's problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// Unique identifier.
    pub id: String,
    /// Problem statement (non-empty).
    pub problem: String,
    /// How the problem is approached (non-empty).
    pub approach: String,
    /// Optional code sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_demo: Option<String>,
    /// At least one key point.
    pub key_points: Vec<KeyPoint>,
    /// Whether a tool produced this solution.
    #[serde(default)]
    pub auto_generated: bool,
    /// Name of the generating tool, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,
}

/// An atomic insight attached to a solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPoint {
    /// Unique identifier.
    pub id: String,
    /// Short title (non-empty).
    pub title: String,
    /// Explanation (non-empty).
    pub description: String,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Dimension → value notes, e.g. `memory: higher`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_offs: Option<BTreeMap<String, String>>,
}

impl KeyPoint {
    /// Creates a key point without tags or trade-offs.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            tags: Vec::new(),
            trade_offs: None,
        }
    }
}

// ============================================================================
// Project
// ============================================================================

/// Kind of showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    /// Developer tooling.
    Tool,
    /// Prototype or research spike.
    Experiment,
    /// End-to-end application.
    FullStack,
}

impl ProjectType {
    /// All variants, in display order.
    pub const ALL: [ProjectType; 3] = [Self::Tool, Self::Experiment, Self::FullStack];

    /// Wire name of the variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tool => "Tool",
            Self::Experiment => "Experiment",
            Self::FullStack => "FullStack",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown project type '{s}'"))
    }
}

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier.
    pub id: String,
    /// Project name (non-empty).
    pub title: String,
    /// Summary shown on cards (non-empty).
    pub description: String,
    /// Technologies used.
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// Project kind.
    #[serde(rename = "type")]
    pub kind: ProjectType,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// ISO-8601 date or timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

// ============================================================================
// BlogArticle
// ============================================================================

/// A blog article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogArticle {
    /// Unique identifier.
    pub id: String,
    /// Headline (non-empty).
    pub title: String,
    /// Teaser text (non-empty).
    pub summary: String,
    /// Markdown body (non-empty).
    pub content: String,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Author name (non-empty).
    pub author: String,
    /// Publication date, `YYYY-MM-DD` or RFC 3339.
    pub date: String,
    /// Estimated reading time in minutes (positive).
    pub reading_time: u32,
    /// Bullet summary of the article.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_points: Option<Vec<String>>,
    /// Ids of related articles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_articles: Option<Vec<String>>,
    /// Optional grouping category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
