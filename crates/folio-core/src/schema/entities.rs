//! Schemas for the domain entities.

use std::str::FromStr;

use serde_json::Value;

use super::fields::{self, FieldPath};
use super::Schema;
use crate::error::Issue;
use crate::model::{BlogArticle, KeyPoint, Project, ProjectType, Scene, Solution, DEFAULT_CATEGORY};

/// Schema for [`Scene`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneSchema;

/// Schema for [`Solution`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SolutionSchema;

/// Schema for [`KeyPoint`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyPointSchema;

/// Schema for [`Project`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectSchema;

/// Schema for [`BlogArticle`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BlogArticleSchema;

impl Schema for SceneSchema {
    type Output = Scene;

    fn name(&self) -> String {
        "Scene".to_string()
    }

    fn check(&self, value: &Value, path: &FieldPath, issues: &mut Vec<Issue>) -> Option<Scene> {
        let map = fields::object(value, path, issues)?;
        let before = issues.len();

        let scene = Scene {
            id: fields::required_string(map, "id", path, issues),
            title: fields::required_string(map, "title", path, issues),
            context: fields::required_string(map, "context", path, issues),
            category: fields::string_or(map, "category", DEFAULT_CATEGORY, path, issues),
            tags: fields::string_list(map, "tags", path, issues),
            solutions: fields::list_of(map, "solutions", &SolutionSchema, 1, path, issues),
            created_at: fields::optional_timestamp(map, "createdAt", path, issues),
        };

        (issues.len() == before).then_some(scene)
    }
}

impl Schema for SolutionSchema {
    type Output = Solution;

    fn name(&self) -> String {
        "Solution".to_string()
    }

    fn check(&self, value: &Value, path: &FieldPath, issues: &mut Vec<Issue>) -> Option<Solution> {
        let map = fields::object(value, path, issues)?;
        let before = issues.len();

        let solution = Solution {
            id: fields::required_string(map, "id", path, issues),
            problem: fields::required_string(map, "problem", path, issues),
            approach: fields::required_string(map, "approach", path, issues),
            code_demo: fields::optional_string(map, "codeDemo", path, issues),
            key_points: fields::list_of(map, "keyPoints", &KeyPointSchema, 1, path, issues),
            auto_generated: fields::bool_or(map, "autoGenerated", false, path, issues),
            generator: fields::optional_string(map, "generator", path, issues),
        };

        (issues.len() == before).then_some(solution)
    }
}

impl Schema for KeyPointSchema {
    type Output = KeyPoint;

    fn name(&self) -> String {
        "KeyPoint".to_string()
    }

    fn check(&self, value: &Value, path: &FieldPath, issues: &mut Vec<Issue>) -> Option<KeyPoint> {
        let map = fields::object(value, path, issues)?;
        let before = issues.len();

        let key_point = KeyPoint {
            id: fields::required_string(map, "id", path, issues),
            title: fields::required_string(map, "title", path, issues),
            description: fields::required_string(map, "description", path, issues),
            tags: fields::string_list(map, "tags", path, issues),
            trade_offs: fields::optional_string_map(map, "tradeOffs", path, issues),
        };

        (issues.len() == before).then_some(key_point)
    }
}

fn project_type(
    map: &serde_json::Map<String, Value>,
    path: &FieldPath,
    issues: &mut Vec<Issue>,
) -> ProjectType {
    let before = issues.len();
    let raw = fields::required_string(map, "type", path, issues);
    if issues.len() > before {
        return ProjectType::Tool;
    }
    ProjectType::from_str(&raw).unwrap_or_else(|_| {
        let expected = ProjectType::ALL
            .iter()
            .map(|t| format!("'{t}'"))
            .collect::<Vec<_>>()
            .join(" | ");
        path.key("type").issue(
            issues,
            format!("Invalid enum value. Expected {expected}, received '{raw}'"),
        );
        ProjectType::Tool
    })
}

impl Schema for ProjectSchema {
    type Output = Project;

    fn name(&self) -> String {
        "Project".to_string()
    }

    fn check(&self, value: &Value, path: &FieldPath, issues: &mut Vec<Issue>) -> Option<Project> {
        let map = fields::object(value, path, issues)?;
        let before = issues.len();

        let project = Project {
            id: fields::required_string(map, "id", path, issues),
            title: fields::required_string(map, "title", path, issues),
            description: fields::required_string(map, "description", path, issues),
            tech_stack: fields::string_list(map, "techStack", path, issues),
            kind: project_type(map, path, issues),
            tags: fields::string_list(map, "tags", path, issues),
            date: fields::optional_date(map, "date", path, issues),
        };

        (issues.len() == before).then_some(project)
    }
}

impl Schema for BlogArticleSchema {
    type Output = BlogArticle;

    fn name(&self) -> String {
        "BlogArticle".to_string()
    }

    fn check(
        &self,
        value: &Value,
        path: &FieldPath,
        issues: &mut Vec<Issue>,
    ) -> Option<BlogArticle> {
        let map = fields::object(value, path, issues)?;
        let before = issues.len();

        let article = BlogArticle {
            id: fields::required_string(map, "id", path, issues),
            title: fields::required_string(map, "title", path, issues),
            summary: fields::required_string(map, "summary", path, issues),
            content: fields::required_string(map, "content", path, issues),
            tags: fields::string_list(map, "tags", path, issues),
            author: fields::required_string(map, "author", path, issues),
            date: fields::required_date(map, "date", path, issues),
            reading_time: fields::positive_int(map, "readingTime", path, issues),
            key_points: fields::optional_string_list(map, "keyPoints", path, issues),
            related_articles: fields::optional_string_list(map, "relatedArticles", path, issues),
            category: fields::optional_string(map, "category", path, issues),
        };

        (issues.len() == before).then_some(article)
    }
}
