//! Async file helpers for importing and exporting Scene documents.

use std::path::{Path, PathBuf};

use folio_core::{Scene, Validate};

use crate::error::{Error, Result};
use crate::markdown::{
    export_scene_to_markdown_with_options, export_scenes_to_markdown_with_options,
    parse_markdown_to_scenes, ExportOptions,
};

/// Extensions accepted by [`read_markdown_file`], lowercase, without dots.
pub const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];

/// Filename used when no usable name is given.
pub const DEFAULT_FILENAME: &str = "scene.md";

/// `true` if `path` has a Markdown extension (case-insensitive).
pub fn is_markdown_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext.as_str()))
}

/// Read a `.md` / `.markdown` file as UTF-8.
///
/// # Errors
///
/// [`Error::UnsupportedExtension`] for any other extension, [`Error::Io`]
/// when the file cannot be read.
pub async fn read_markdown_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if !is_markdown_path(path) {
        return Err(Error::unsupported_extension(path));
    }
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}

/// Read a Markdown file and parse every scene in it.
///
/// # Errors
///
/// [`Error::UnsupportedExtension`] and [`Error::Io`] as for
/// [`read_markdown_file`], and [`Error::Parse`] for the first scene that
/// breaks the Scene grammar or fails its schema check.
pub async fn import_scene_file(path: impl AsRef<Path>) -> Result<Vec<Scene>> {
    let path = path.as_ref();
    let markdown = read_markdown_file(path).await?;
    let scenes = parse_markdown_to_scenes(&markdown)?;
    log::debug!("Imported {} scene(s) from {}", scenes.len(), path.display());
    Ok(scenes)
}

/// Filename for an exported document.
///
/// Path separators are replaced with `-` and `.md` is appended unless the
/// name already ends with it. A blank name yields [`DEFAULT_FILENAME`].
///
/// ```rust
/// use folio_content::markdown_filename;
///
/// assert_eq!(markdown_filename("scene-42"), "scene-42.md");
/// assert_eq!(markdown_filename("notes.md"), "notes.md");
/// assert_eq!(markdown_filename("a/b"), "a-b.md");
/// assert_eq!(markdown_filename("  "), "scene.md");
/// ```
pub fn markdown_filename(name: &str) -> String {
    let name = name.trim().replace(['/', '\\'], "-");
    if name.is_empty() {
        return DEFAULT_FILENAME.to_string();
    }
    if name.to_lowercase().ends_with(".md") {
        name
    } else {
        format!("{name}.md")
    }
}

/// Write `content` to `dir/<markdown_filename(name)>`, creating `dir` if
/// needed. Returns the written path.
pub async fn save_markdown(dir: impl AsRef<Path>, name: &str, content: &str) -> Result<PathBuf> {
    let dir = dir.as_ref();
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| Error::io_with_path(e, dir))?;

    let path = dir.join(markdown_filename(name));
    tokio::fs::write(&path, content)
        .await
        .map_err(|e| Error::io_with_path(e, &path))?;
    log::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(path)
}

/// Validate `scenes`, export them, and save the document to `dir`.
///
/// A single scene is written with the single-scene layout, several with the
/// batch layout. The file is named after `name`, or after the first scene's
/// id when `name` is `None`.
///
/// # Errors
///
/// [`Error::Validation`] for the first scene that fails its schema (nothing
/// is written), [`Error::Io`] when the file cannot be written.
pub async fn export_scene_file(
    dir: impl AsRef<Path>,
    name: Option<&str>,
    scenes: &[Scene],
    options: &ExportOptions,
) -> Result<PathBuf> {
    let checked = scenes
        .iter()
        .cloned()
        .map(|scene| scene.validated())
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let content = match checked.as_slice() {
        [scene] => export_scene_to_markdown_with_options(scene, options),
        many => export_scenes_to_markdown_with_options(many, options),
    };
    let name = name
        .map(str::to_string)
        .or_else(|| checked.first().map(|s| s.id.clone()))
        .unwrap_or_default();
    save_markdown(dir, &name, &content).await
}
