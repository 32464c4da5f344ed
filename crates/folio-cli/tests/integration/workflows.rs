//! End-to-end command workflows over temporary files.

use std::process::ExitCode;

use clap::Parser;
use folio_cli::commands;
use folio_cli::{Cli, FolioConfig};
use folio_content::ExportOptions;
use tempfile::TempDir;

use crate::common::{write_fixture, BATCH};

#[tokio::test]
async fn test_import_then_export_batch() {
    let dir = TempDir::new().unwrap();
    let markdown = write_fixture(dir.path(), "batch.md", BATCH);

    let json = commands::import(&markdown, true).await.unwrap();
    let scenes: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(scenes.as_array().unwrap().len(), 2);

    let input = write_fixture(dir.path(), "scenes.json", &json);
    let out = dir.path().join("out");
    let path = commands::export(&input, &out, Some("frontend"), &ExportOptions::default())
        .await
        .unwrap();
    assert_eq!(path, out.join("frontend.md"));

    let exported = std::fs::read_to_string(&path).unwrap();
    assert!(exported.contains("# Scene: Debouncing Search"));
    assert!(exported.contains("## Solution: Slow first paint."));
    assert!(exported.contains("\n---\n"));

    let report = commands::check(&path).await.unwrap();
    assert!(report.valid, "{:?}", report.errors);
}

#[tokio::test]
async fn test_run_check_exit_code() {
    let dir = TempDir::new().unwrap();
    let bad = write_fixture(dir.path(), "bad.md", "# Scene: Empty\n");
    let good = write_fixture(dir.path(), "good.md", BATCH);
    let config = FolioConfig::default();

    let cli = Cli::try_parse_from(["folio", "check", bad.to_str().unwrap()]).unwrap();
    assert_eq!(folio_cli::run(cli, &config).await.unwrap(), ExitCode::FAILURE);

    let cli = Cli::try_parse_from(["folio", "check", good.to_str().unwrap()]).unwrap();
    assert_eq!(folio_cli::run(cli, &config).await.unwrap(), ExitCode::SUCCESS);
}

#[tokio::test]
async fn test_run_export_uses_configured_out_dir() {
    let dir = TempDir::new().unwrap();
    let markdown = write_fixture(dir.path(), "batch.md", BATCH);
    let json = commands::import(&markdown, false).await.unwrap();
    let input = write_fixture(dir.path(), "scenes.json", &json);

    let mut config = FolioConfig::default();
    config.export.out_dir = dir.path().join("configured");
    config.export.code_language = "ts".to_string();

    let cli = Cli::try_parse_from(["folio", "export", input.to_str().unwrap(), "-n", "all"])
        .unwrap();
    assert_eq!(folio_cli::run(cli, &config).await.unwrap(), ExitCode::SUCCESS);
    assert!(dir.path().join("configured").join("all.md").exists());
}

#[tokio::test]
async fn test_run_validate_legacy_blog() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(
        dir.path(),
        "blog.json",
        r#"[{"id": "b1", "title": "Hooks", "content": "Hooks hold state.",
             "author": "Folio", "date": "2024-01-15"}]"#,
    );
    let config = FolioConfig::default();

    let strict =
        Cli::try_parse_from(["folio", "validate", "blog", input.to_str().unwrap()]).unwrap();
    assert_eq!(folio_cli::run(strict, &config).await.unwrap(), ExitCode::FAILURE);

    let legacy = Cli::try_parse_from([
        "folio",
        "validate",
        "blog",
        input.to_str().unwrap(),
        "--legacy",
    ])
    .unwrap();
    assert_eq!(folio_cli::run(legacy, &config).await.unwrap(), ExitCode::SUCCESS);
}
