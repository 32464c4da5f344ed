//! Shared fixtures for folio-data integration tests.

use std::path::{Path, PathBuf};

/// Legacy knowledge scenes; the third record has no title.
pub const LEGACY_SCENES: &str = r#"[
  {
    "id": "react-optimization",
    "title": "React Performance Optimization",
    "category": "React",
    "tags": ["Performance", "Hooks"],
    "description": "Large lists re-render on every keystroke.",
    "solution": "Memoize rows and virtualize the list.",
    "codeExample": {"language": "tsx", "code": "export const Row = memo(RowImpl);"},
    "keyPoints": [
      {"title": "Memoization", "description": "Wrap rows in React.memo"},
      {"title": "Virtualization", "description": "Render only visible rows"}
    ]
  },
  {
    "id": "state-management",
    "title": "State Management",
    "category": "Architecture",
    "tags": ["Hooks"],
    "description": "Props drilled through many layers.",
    "solution": "Use a context provider.",
    "keyPoints": [{"title": "Scope", "description": "Keep providers small"}]
  },
  {
    "id": "broken",
    "description": "No title here.",
    "solution": "Nothing.",
    "keyPoints": []
  }
]"#;

/// Blog articles, one missing a summary and reading time.
pub const ARTICLES: &str = r#"[
  {
    "id": "hooks",
    "title": "Understanding Hooks",
    "summary": "A tour of the hooks API.",
    "content": "Hooks let function components hold state.",
    "tags": ["React"],
    "author": "Folio",
    "date": "2024-01-15",
    "readingTime": 6,
    "category": "React"
  },
  {
    "id": "rust-async",
    "title": "Async Rust",
    "content": "Futures are lazy.\n\nThey do nothing until polled.",
    "tags": ["Rust"],
    "author": "Folio",
    "date": "2024-04-02T09:00:00Z"
  }
]"#;

/// Write `content` to `dir/name` and return the path.
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}
