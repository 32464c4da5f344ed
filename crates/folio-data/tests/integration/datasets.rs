//! Loading, adapting and querying whole datasets from disk.

use folio_core::schema::{BlogArticleSchema, SceneSchema};
use folio_core::RecordingDiagnostics;
use folio_data::{
    load_records, BlogSort, Catalog, LegacyBlogArticle, LegacyKnowledgeScene, BLOG_CONTEXT,
    SCENES_CONTEXT,
};
use tempfile::TempDir;

use crate::common::{write_fixture, ARTICLES, LEGACY_SCENES};

#[tokio::test]
async fn test_legacy_scene_dataset() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path(), "scenes.json", LEGACY_SCENES);
    let raw = load_records(&path).await.unwrap();

    let sink = RecordingDiagnostics::new();
    let scenes =
        Catalog::from_legacy::<LegacyKnowledgeScene, _>(&SceneSchema, &raw, SCENES_CONTEXT, &sink);

    assert_eq!(scenes.len(), 2);
    assert_eq!(scenes.invalid()[0].index, 2);
    assert!(scenes.invalid()[0].error.contains("title"));
    assert_eq!(sink.warnings().len(), 1);

    assert_eq!(scenes.categories(), vec!["React", "Architecture"]);
    assert_eq!(scenes.tags(), vec!["Performance", "Hooks"]);
    assert_eq!(scenes.by_tag("Hooks").len(), 2);

    let react = scenes.get("react-optimization").unwrap();
    assert_eq!(react.solutions[0].key_points.len(), 2);
    assert_eq!(
        react.solutions[0].code_demo.as_deref(),
        Some("export const Row = memo(RowImpl);")
    );
}

#[tokio::test]
async fn test_adapted_scene_exports_to_markdown() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path(), "scenes.json", LEGACY_SCENES);
    let raw = load_records(&path).await.unwrap();
    let scenes = Catalog::from_legacy::<LegacyKnowledgeScene, _>(
        &SceneSchema,
        &raw,
        SCENES_CONTEXT,
        &RecordingDiagnostics::new(),
    );

    let markdown = folio_content::export_scenes_to_markdown(scenes.items());
    let reparsed = folio_content::parse_markdown_to_scenes(&markdown).unwrap();
    assert_eq!(reparsed.len(), 2);
    assert_eq!(reparsed[1].title, "State Management");
    assert_eq!(reparsed[1].solutions[0].approach, "Use a context provider.");
}

#[tokio::test]
async fn test_blog_dataset_is_completed_and_sorted() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path(), "blog.json", ARTICLES);
    let raw = load_records(&path).await.unwrap();

    let sink = RecordingDiagnostics::new();
    let blog =
        Catalog::from_legacy::<LegacyBlogArticle, _>(&BlogArticleSchema, &raw, BLOG_CONTEXT, &sink);
    assert!(sink.warnings().is_empty());

    let rust = blog.get("rust-async").unwrap();
    assert_eq!(rust.summary, "Futures are lazy.");
    assert_eq!(rust.reading_time, 1);

    let latest: Vec<&str> = blog
        .sorted(BlogSort::Latest)
        .into_iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(latest, vec!["rust-async", "hooks"]);
    assert_eq!(blog.search("hooks API").len(), 1);
}
