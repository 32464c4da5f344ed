//! Implementations of the `folio` commands.
//!
//! Each command returns its result instead of printing it, so that the
//! dispatcher in [`crate::run`] owns all terminal output.

use std::path::{Path, PathBuf};

use folio_content::{
    export_scene_file, import_scene_file, read_markdown_file, validate_markdown_format,
    ExportOptions, FormatReport,
};
use folio_core::schema::{parse, BlogArticleSchema, ProjectSchema, SceneSchema};
use folio_core::{Diagnostics, InvalidItem, Scene, ValidationError};
use folio_data::{
    blog_catalog, load_records, project_catalog, scene_catalog, Catalog, LegacyBlogArticle,
    LegacyKnowledgeScene, LegacyProject, BLOG_CONTEXT, PROJECTS_CONTEXT, SCENES_CONTEXT,
};

use crate::cli::DatasetKind;
use crate::error::Result;

// ============================================================================
// import
// ============================================================================

/// Parse a Markdown file and render its scenes as JSON.
///
/// A document with one scene renders as an object, several as an array.
pub async fn import(file: &Path, pretty: bool) -> Result<String> {
    let scenes = import_scene_file(file).await?;
    tracing::info!(file = %file.display(), scenes = scenes.len(), "Imported");

    let json = match scenes.as_slice() {
        [scene] => to_json(scene, pretty)?,
        many => to_json(&many, pretty)?,
    };
    Ok(json)
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

// ============================================================================
// export
// ============================================================================

/// Read scenes from a JSON file, validate them, and write a Markdown file.
///
/// Returns the written path.
pub async fn export(
    input: &Path,
    out_dir: &Path,
    name: Option<&str>,
    options: &ExportOptions,
) -> Result<PathBuf> {
    let records = load_records(input).await?;
    let scenes = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            parse(&SceneSchema, record).map_err(|e| {
                ValidationError::new(
                    format!("Record {index}: {}", e.message()),
                    e.issues().to_vec(),
                    e.data().clone(),
                )
            })
        })
        .collect::<std::result::Result<Vec<Scene>, _>>()?;

    let path = export_scene_file(out_dir, name, &scenes, options).await?;
    tracing::info!(path = %path.display(), scenes = scenes.len(), "Exported");
    Ok(path)
}

// ============================================================================
// check
// ============================================================================

/// Run the format pre-check on a Markdown file.
pub async fn check(file: &Path) -> Result<FormatReport> {
    let markdown = read_markdown_file(file).await?;
    Ok(validate_markdown_format(&markdown))
}

/// Human-readable rendering of a format report.
pub fn render_report(file: &Path, report: &FormatReport) -> String {
    if report.valid {
        return format!("{}: ok\n", file.display());
    }
    let mut out = format!("{}: {} problem(s)\n", file.display(), report.errors.len());
    for error in &report.errors {
        out.push_str(&format!("  - {error}\n"));
    }
    out
}

// ============================================================================
// validate
// ============================================================================

/// Outcome of validating a dataset file.
#[derive(Debug, Clone)]
pub struct ValidationSummary {
    /// Dataset name (`Scenes`, `Projects`, `BlogArticles`).
    pub context: &'static str,
    /// Number of records read.
    pub total: usize,
    /// Number of records that passed.
    pub valid: usize,
    /// Rejected records.
    pub invalid: Vec<InvalidItem>,
}

impl ValidationSummary {
    fn from_catalog<T: folio_data::Entry>(context: &'static str, catalog: &Catalog<T>) -> Self {
        Self {
            context,
            total: catalog.len() + catalog.invalid().len(),
            valid: catalog.len(),
            invalid: catalog.invalid().to_vec(),
        }
    }

    /// `true` when every record passed.
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty()
    }

    /// Summary line followed by each rejected record's issues.
    pub fn render(&self) -> String {
        let mut out = format!(
            "{}: {} record(s), {} valid, {} invalid\n",
            self.context,
            self.total,
            self.valid,
            self.invalid.len()
        );
        for item in &self.invalid {
            out.push_str(&format!("[{}]\n", item.index));
            for line in item.error.lines() {
                out.push_str(&format!("  {line}\n"));
            }
        }
        out
    }
}

/// Validate every record in `input` as `kind`.
pub async fn validate(
    kind: DatasetKind,
    input: &Path,
    legacy: bool,
    diagnostics: &dyn Diagnostics,
) -> Result<ValidationSummary> {
    let raw = load_records(input).await?;

    let summary = match (kind, legacy) {
        (DatasetKind::Scene, false) => {
            ValidationSummary::from_catalog(SCENES_CONTEXT, &scene_catalog(&raw, diagnostics))
        }
        (DatasetKind::Scene, true) => ValidationSummary::from_catalog(
            SCENES_CONTEXT,
            &Catalog::from_legacy::<LegacyKnowledgeScene, _>(
                &SceneSchema,
                &raw,
                SCENES_CONTEXT,
                diagnostics,
            ),
        ),
        (DatasetKind::Project, false) => {
            ValidationSummary::from_catalog(PROJECTS_CONTEXT, &project_catalog(&raw, diagnostics))
        }
        (DatasetKind::Project, true) => ValidationSummary::from_catalog(
            PROJECTS_CONTEXT,
            &Catalog::from_legacy::<LegacyProject, _>(
                &ProjectSchema,
                &raw,
                PROJECTS_CONTEXT,
                diagnostics,
            ),
        ),
        (DatasetKind::Blog, false) => {
            ValidationSummary::from_catalog(BLOG_CONTEXT, &blog_catalog(&raw, diagnostics))
        }
        (DatasetKind::Blog, true) => ValidationSummary::from_catalog(
            BLOG_CONTEXT,
            &Catalog::from_legacy::<LegacyBlogArticle, _>(
                &BlogArticleSchema,
                &raw,
                BLOG_CONTEXT,
                diagnostics,
            ),
        ),
    };

    tracing::info!(
        dataset = summary.context,
        total = summary.total,
        invalid = summary.invalid.len(),
        "Validated"
    );
    Ok(summary)
}
