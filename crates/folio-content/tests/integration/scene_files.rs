//! File import and export through the async helpers.

use folio_content::markdown::ExportOptions;
use folio_content::{export_scene_file, import_scene_file, Error};
use tempfile::TempDir;

use crate::common::{write_fixture, CACHING_STRATEGY, NO_CONTEXT};

#[tokio::test]
async fn test_import_fixture_file() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path(), "caching.markdown", CACHING_STRATEGY);

    let scenes = import_scene_file(&path).await.unwrap();
    assert_eq!(scenes.len(), 1);
    assert_eq!(scenes[0].solutions.len(), 2);
}

#[tokio::test]
async fn test_export_batch_file_and_reimport() {
    let dir = TempDir::new().unwrap();
    let source = write_fixture(dir.path(), "caching.md", CACHING_STRATEGY);
    let mut scenes = import_scene_file(&source).await.unwrap();
    scenes.extend(import_scene_file(&source).await.unwrap());

    let out = export_scene_file(
        dir.path().join("export"),
        Some("all-scenes"),
        &scenes,
        &ExportOptions::default(),
    )
    .await
    .unwrap();
    assert!(out.ends_with("export/all-scenes.md"));

    let reimported = import_scene_file(&out).await.unwrap();
    assert_eq!(reimported.len(), 2);
    assert_eq!(reimported[1].title, "Caching Strategy");
}

#[tokio::test]
async fn test_import_broken_file_surfaces_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path(), "broken.md", NO_CONTEXT);

    match import_scene_file(&path).await {
        Err(Error::Parse(err)) => assert_eq!(err.kind().as_str(), "missing-context"),
        other => panic!("expected a parse error, got {other:?}"),
    }
}
