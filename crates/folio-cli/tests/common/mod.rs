//! Shared fixtures for folio-cli integration tests.

use std::path::{Path, PathBuf};

/// Two scenes in batch layout.
pub const BATCH: &str = r#"# Scene: Debouncing Search

## Context

Every keystroke triggers a request.

## Solution

### Problem

Too many requests.

### Approach

Debounce input by 300ms.

### Key Points

- Delay: Wait for typing to pause

---

# Scene: Image Loading

## Context

Pages load every image up front.

## Solution: Lazy Loading

### Problem

Slow first paint.

### Approach

Load images when they enter the viewport.

### Key Points

- IntersectionObserver: Watch visibility
"#;

/// Write `content` to `dir/name` and return the path.
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}
