//! Boolean and `Option` guards over the schemas.
//!
//! Useful where a caller only needs a yes/no answer (filtering API payloads)
//! and does not care which field was wrong.

use serde_json::Value;

use super::{
    parse, BlogArticleSchema, KeyPointSchema, ProjectSchema, SceneSchema, SolutionSchema,
};
use crate::model::{BlogArticle, Project, Scene};

/// `true` when `data` is a valid scene.
pub fn is_scene(data: &Value) -> bool {
    parse(&SceneSchema, data).is_ok()
}

/// `true` when `data` is a valid solution.
pub fn is_solution(data: &Value) -> bool {
    parse(&SolutionSchema, data).is_ok()
}

/// `true` when `data` is a valid key point.
pub fn is_key_point(data: &Value) -> bool {
    parse(&KeyPointSchema, data).is_ok()
}

/// `true` when `data` is a valid project.
pub fn is_project(data: &Value) -> bool {
    parse(&ProjectSchema, data).is_ok()
}

/// `true` when `data` is a valid blog article.
pub fn is_blog_article(data: &Value) -> bool {
    parse(&BlogArticleSchema, data).is_ok()
}

/// The scene in `data`, or `None` if it is invalid.
pub fn as_scene(data: &Value) -> Option<Scene> {
    parse(&SceneSchema, data).ok()
}

/// The project in `data`, or `None` if it is invalid.
pub fn as_project(data: &Value) -> Option<Project> {
    parse(&ProjectSchema, data).ok()
}

/// The blog article in `data`, or `None` if it is invalid.
pub fn as_blog_article(data: &Value) -> Option<BlogArticle> {
    parse(&BlogArticleSchema, data).ok()
}
