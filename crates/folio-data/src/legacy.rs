//! Adapters from the legacy dataset shapes to the current wire shape.
//!
//! Adapters work on JSON and produce JSON: the result still has to pass the
//! schema gate, and a record the adapter cannot read is handed to the gate
//! unchanged so that its rejection carries precise field issues. Only the
//! fields the legacy shapes treat as optional have serde defaults; a record
//! missing a required one fails to deserialize and is reported by the gate
//! as `Required`.

use folio_content::markdown::text::{
    estimate_reading_time, extract_first_paragraph, DEFAULT_WORDS_PER_MINUTE,
};
use folio_core::normalize_id;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Map, Value};

/// Characters kept when a blog summary is taken from the article body.
const SUMMARY_MAX_CHARS: usize = 160;

/// A record in a legacy dataset shape.
pub trait LegacyRecord: DeserializeOwned {
    /// Convert into the current camelCase wire shape.
    fn adapt(self) -> Value;
}

/// Adapt every record in `raw`, passing unreadable ones through unchanged.
pub fn adapt_records<L: LegacyRecord>(raw: &[Value]) -> Vec<Value> {
    raw.iter()
        .enumerate()
        .map(|(index, item)| match serde_json::from_value::<L>(item.clone()) {
            Ok(legacy) => legacy.adapt(),
            Err(e) => {
                log::debug!("Record {index} left unadapted: {e}");
                item.clone()
            }
        })
        .collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn insert_opt(map: &mut Map<String, Value>, key: &str, value: Option<impl Into<Value>>) {
    if let Some(value) = value {
        map.insert(key.to_string(), value.into());
    }
}

// ============================================================================
// Knowledge scenes
// ============================================================================

/// Code sample attached to a legacy knowledge scene.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyCodeExample {
    /// Language tag (unused by the current model).
    #[serde(default)]
    pub language: String,
    /// Source text.
    pub code: String,
}

/// Key point of a legacy knowledge scene.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyKeyPoint {
    /// Short title.
    pub title: String,
    /// Explanation.
    pub description: String,
}

/// A knowledge scene with a single inline solution.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyKnowledgeScene {
    /// Identifier; derived from the title when blank.
    #[serde(default)]
    pub id: String,
    /// Title.
    pub title: String,
    /// Category.
    pub category: Option<String>,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Problem description.
    pub description: String,
    /// Solution text.
    pub solution: String,
    /// Code sample.
    pub code_example: Option<LegacyCodeExample>,
    /// Key points.
    #[serde(default)]
    pub key_points: Vec<LegacyKeyPoint>,
}

impl LegacyRecord for LegacyKnowledgeScene {
    fn adapt(self) -> Value {
        let id = if self.id.trim().is_empty() {
            normalize_id(&self.title)
        } else {
            self.id
        };

        let key_points: Vec<Value> = self
            .key_points
            .into_iter()
            .enumerate()
            .map(|(i, kp)| {
                json!({
                    "id": format!("{id}-kp-{}", i + 1),
                    "title": kp.title,
                    "description": kp.description,
                })
            })
            .collect();

        let mut solution = Map::new();
        solution.insert("id".into(), json!(format!("{id}-solution-1")));
        solution.insert("problem".into(), json!(self.description));
        solution.insert("approach".into(), json!(self.solution));
        insert_opt(
            &mut solution,
            "codeDemo",
            non_empty(self.code_example.map(|c| c.code)),
        );
        solution.insert("keyPoints".into(), Value::Array(key_points));

        let mut scene = Map::new();
        scene.insert("id".into(), json!(id));
        scene.insert("title".into(), json!(self.title));
        scene.insert("context".into(), json!(self.description));
        insert_opt(&mut scene, "category", non_empty(self.category));
        scene.insert("tags".into(), json!(self.tags));
        scene.insert("solutions".into(), json!([Value::Object(solution)]));
        Value::Object(scene)
    }
}

// ============================================================================
// Projects
// ============================================================================

/// A project record from the legacy dataset or API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyProject {
    /// Identifier; derived from the title when blank.
    #[serde(default)]
    pub id: String,
    /// Name.
    pub title: String,
    /// Card summary.
    pub description: String,
    /// Technologies.
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// `Tool`, `Experiment` or `FullStack`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Showcase date.
    pub date: Option<String>,
    /// Creation timestamp, used when `date` is absent.
    pub created_at: Option<String>,
}

impl LegacyRecord for LegacyProject {
    fn adapt(self) -> Value {
        let id = if self.id.trim().is_empty() {
            normalize_id(&self.title)
        } else {
            self.id
        };
        let mut project = Map::new();
        project.insert("id".into(), json!(id));
        project.insert("title".into(), json!(self.title));
        project.insert("description".into(), json!(self.description));
        project.insert("techStack".into(), json!(self.tech_stack));
        project.insert("type".into(), json!(self.kind));
        project.insert("tags".into(), json!(self.tags));
        insert_opt(
            &mut project,
            "date",
            non_empty(self.date).or_else(|| non_empty(self.created_at)),
        );
        Value::Object(project)
    }
}

// ============================================================================
// Blog articles
// ============================================================================

/// A blog article whose summary and reading time may be missing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyBlogArticle {
    /// Identifier.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Teaser; taken from the first paragraph of `content` when blank.
    pub summary: Option<String>,
    /// Markdown body.
    pub content: String,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Author name.
    pub author: String,
    /// Publication date.
    pub date: String,
    /// Minutes; estimated from `content` when absent.
    pub reading_time: Option<u32>,
    /// Bullet summary.
    pub key_points: Option<Vec<String>>,
    /// Related article ids.
    pub related_articles: Option<Vec<String>>,
    /// Category.
    pub category: Option<String>,
}

impl LegacyRecord for LegacyBlogArticle {
    fn adapt(self) -> Value {
        let summary = non_empty(self.summary)
            .or_else(|| extract_first_paragraph(&self.content, SUMMARY_MAX_CHARS))
            .unwrap_or_default();
        let reading_time = self
            .reading_time
            .unwrap_or_else(|| estimate_reading_time(&self.content, DEFAULT_WORDS_PER_MINUTE));

        let mut article = Map::new();
        article.insert("id".into(), json!(self.id));
        article.insert("title".into(), json!(self.title));
        article.insert("summary".into(), json!(summary));
        article.insert("content".into(), json!(self.content));
        article.insert("tags".into(), json!(self.tags));
        article.insert("author".into(), json!(self.author));
        article.insert("date".into(), json!(self.date));
        article.insert("readingTime".into(), json!(reading_time));
        insert_opt(&mut article, "keyPoints", self.key_points);
        insert_opt(&mut article, "relatedArticles", self.related_articles);
        insert_opt(&mut article, "category", non_empty(self.category));
        Value::Object(article)
    }
}
