//! Validated, queryable collections of Folio content.
//!
//! A [`Catalog`] is built once from raw JSON records. Records that fail the
//! schema are kept aside as [`InvalidItem`]s; every query runs over the
//! valid items only, in their original order.
//!
//! ```rust
//! use folio_core::RecordingDiagnostics;
//! use folio_data::project_catalog;
//! use serde_json::json;
//!
//! let raw = vec![
//!     json!({"id": "p1", "title": "Folio", "description": "Site", "type": "FullStack",
//!            "techStack": ["React", "Rust"]}),
//!     json!({"id": "p2", "title": "", "description": "Broken", "type": "Tool"}),
//! ];
//! let sink = RecordingDiagnostics::new();
//! let catalog = project_catalog(&raw, &sink);
//!
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(catalog.invalid()[0].index, 1);
//! assert_eq!(catalog.tech_stack(), vec!["React", "Rust"]);
//! ```

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use folio_core::schema::{BlogArticleSchema, ProjectSchema, SceneSchema};
use folio_core::{
    validate_and_filter, BlogArticle, Diagnostics, InvalidItem, Project, ProjectType, Scene,
    Schema,
};
use serde_json::Value;

use crate::legacy::{adapt_records, LegacyRecord};

/// Dataset name reported for scene diagnostics.
pub const SCENES_CONTEXT: &str = "Scenes";
/// Dataset name reported for project diagnostics.
pub const PROJECTS_CONTEXT: &str = "Projects";
/// Dataset name reported for blog diagnostics.
pub const BLOG_CONTEXT: &str = "BlogArticles";

// ============================================================================
// Entry
// ============================================================================

/// A record that can live in a [`Catalog`].
pub trait Entry {
    /// Whether facet lists ([`Catalog::categories`], [`Catalog::tags`]) are
    /// sorted. When `false` they keep first-seen order.
    const SORTED_FACETS: bool;

    /// Unique identifier.
    fn id(&self) -> &str;

    /// Grouping category, if the entity has one.
    fn category(&self) -> Option<&str>;

    /// Free-form tags.
    fn tags(&self) -> &[String];

    /// Text fields searched by [`Entry::matches`], besides the tags.
    fn search_text(&self) -> [&str; 2];

    /// Case-insensitive substring match over the search text and tags.
    /// A blank query matches everything.
    fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.search_text()
            .iter()
            .copied()
            .chain(self.tags().iter().map(String::as_str))
            .any(|text| text.to_lowercase().contains(&query))
    }
}

impl Entry for Scene {
    const SORTED_FACETS: bool = false;

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn search_text(&self) -> [&str; 2] {
        [&self.title, &self.context]
    }
}

impl Entry for Project {
    const SORTED_FACETS: bool = true;

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> Option<&str> {
        None
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn search_text(&self) -> [&str; 2] {
        [&self.title, &self.description]
    }
}

impl Entry for BlogArticle {
    const SORTED_FACETS: bool = true;

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn search_text(&self) -> [&str; 2] {
        [&self.title, &self.summary]
    }
}

fn facet<'a, T: Entry>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out: Vec<String> = values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect();
    if T::SORTED_FACETS {
        out.sort();
    }
    out
}

// ============================================================================
// Catalog
// ============================================================================

/// Valid records of one entity kind, plus the records that were rejected.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    items: Vec<T>,
    invalid: Vec<InvalidItem>,
}

impl<T: Entry> Catalog<T> {
    /// Validate `raw` with `schema`, reporting rejects to `diagnostics`
    /// under `context`.
    pub fn from_values<S>(
        schema: &S,
        raw: &[Value],
        context: &str,
        diagnostics: &dyn Diagnostics,
    ) -> Self
    where
        S: Schema<Output = T>,
    {
        let batch = validate_and_filter(schema, raw, context, diagnostics);
        log::debug!(
            "{context}: {} valid, {} invalid",
            batch.valid.len(),
            batch.invalid.len()
        );
        Self {
            items: batch.valid,
            invalid: batch.invalid,
        }
    }

    /// Adapt `raw` from the legacy shape `L`, then validate as
    /// [`Catalog::from_values`] does.
    pub fn from_legacy<L, S>(
        schema: &S,
        raw: &[Value],
        context: &str,
        diagnostics: &dyn Diagnostics,
    ) -> Self
    where
        L: LegacyRecord,
        S: Schema<Output = T>,
    {
        let adapted = adapt_records::<L>(raw);
        Self::from_values(schema, &adapted, context, diagnostics)
    }

    /// Valid items in input order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Rejected records with their original index.
    pub fn invalid(&self) -> &[InvalidItem] {
        &self.invalid
    }

    /// Number of valid items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when no record was valid.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the valid items.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// First item with the given id.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Distinct categories.
    pub fn categories(&self) -> Vec<String> {
        facet::<T>(self.items.iter().filter_map(|item| item.category()))
    }

    /// Distinct tags.
    pub fn tags(&self) -> Vec<String> {
        facet::<T>(self.items.iter().flat_map(|item| item.tags().iter().map(String::as_str)))
    }

    /// Items whose category equals `category`.
    pub fn by_category(&self, category: &str) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| item.category() == Some(category))
            .collect()
    }

    /// Items carrying `tag`.
    pub fn by_tag(&self, tag: &str) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| item.tags().iter().any(|t| t == tag))
            .collect()
    }

    /// Items matching `query`; see [`Entry::matches`].
    pub fn search(&self, query: &str) -> Vec<&T> {
        self.items.iter().filter(|item| item.matches(query)).collect()
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// ============================================================================
// Projects
// ============================================================================

impl Catalog<Project> {
    /// Distinct technologies across all projects, sorted.
    pub fn tech_stack(&self) -> Vec<String> {
        let mut stack: Vec<String> = self
            .items
            .iter()
            .flat_map(|p| p.tech_stack.iter().cloned())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        stack.sort();
        stack
    }

    /// Projects of the given kind.
    pub fn by_type(&self, kind: ProjectType) -> Vec<&Project> {
        self.items.iter().filter(|p| p.kind == kind).collect()
    }

    /// Projects built with `tech`.
    pub fn by_tech(&self, tech: &str) -> Vec<&Project> {
        self.items
            .iter()
            .filter(|p| p.tech_stack.iter().any(|t| t == tech))
            .collect()
    }
}

// ============================================================================
// Blog articles
// ============================================================================

/// Ordering for blog listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlogSort {
    /// Newest first.
    #[default]
    Latest,
    /// Oldest first.
    Oldest,
    /// Shortest reading time first.
    ReadingTime,
}

impl BlogSort {
    /// Name accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Oldest => "oldest",
            Self::ReadingTime => "reading-time",
        }
    }
}

impl fmt::Display for BlogSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlogSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "latest" => Ok(Self::Latest),
            "oldest" => Ok(Self::Oldest),
            "reading-time" | "readingtime" | "reading_time" => Ok(Self::ReadingTime),
            other => Err(format!(
                "unknown sort '{other}' (expected latest, oldest or reading-time)"
            )),
        }
    }
}

/// Parse a `YYYY-MM-DD` date or an RFC 3339 timestamp.
pub fn parse_article_date(date: &str) -> Option<NaiveDateTime> {
    let date = date.trim();
    if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return day.and_hms_opt(0, 0, 0);
    }
    DateTime::parse_from_rfc3339(date)
        .ok()
        .map(|dt| dt.naive_utc())
}

/// Undated articles sort after dated ones in both directions.
fn compare_dates(
    a: Option<NaiveDateTime>,
    b: Option<NaiveDateTime>,
    newest_first: bool,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if newest_first => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl Catalog<BlogArticle> {
    /// Articles in the requested order. Ties keep input order.
    pub fn sorted(&self, sort: BlogSort) -> Vec<&BlogArticle> {
        let mut articles: Vec<&BlogArticle> = self.items.iter().collect();
        match sort {
            BlogSort::Latest | BlogSort::Oldest => {
                let newest_first = sort == BlogSort::Latest;
                articles.sort_by(|a, b| {
                    compare_dates(
                        parse_article_date(&a.date),
                        parse_article_date(&b.date),
                        newest_first,
                    )
                });
            }
            BlogSort::ReadingTime => articles.sort_by_key(|a| a.reading_time),
        }
        articles
    }
}

// ============================================================================
// Constructors
// ============================================================================

/// Validate scene records.
pub fn scene_catalog(raw: &[Value], diagnostics: &dyn Diagnostics) -> Catalog<Scene> {
    Catalog::from_values(&SceneSchema, raw, SCENES_CONTEXT, diagnostics)
}

/// Validate project records.
pub fn project_catalog(raw: &[Value], diagnostics: &dyn Diagnostics) -> Catalog<Project> {
    Catalog::from_values(&ProjectSchema, raw, PROJECTS_CONTEXT, diagnostics)
}

/// Validate blog article records.
pub fn blog_catalog(raw: &[Value], diagnostics: &dyn Diagnostics) -> Catalog<BlogArticle> {
    Catalog::from_values(&BlogArticleSchema, raw, BLOG_CONTEXT, diagnostics)
}
