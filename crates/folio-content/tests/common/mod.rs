//! Shared fixtures for folio-content integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// A complete two-solution scene with frontmatter, sub-lines, code and a
/// generator notice.
pub const CACHING_STRATEGY: &str = "\
# Scene: Caching Strategy

---
category: Performance
tags: [\"caching\", \"http\", \"react-query\"]
createdAt: 2024-03-01T08:30:00.000Z
---

## Context

The dashboard fires the same API request from several widgets.
Each request takes around 800ms and the data changes once a minute.

## Solution: Client-side request cache

### Problem

Identical requests are sent in parallel on every page load.

### Approach

Cache responses by request key and share in-flight promises.
Expire entries after a fixed time-to-live.

### Key Points

- Request deduplication: Share one in-flight promise per key
  - Tags: network, dedupe
- TTL: Expire entries after 60 seconds
  - Trade-offs: freshness: lower, latency: much lower
- Invalidate on write

### Code Demo

```tsx
const cache = new Map<string, Promise<Response>>();

export function cachedFetch(url: string) {
  if (!cache.has(url)) {
    cache.set(url, fetch(url));
  }
  return cache.get(url)!;
}
```

> \u{26A0}\u{FE0F} Auto-generated by template

---

## Solution: HTTP caching headers

### Problem

The browser cannot reuse earlier responses.

### Approach

Send Cache-Control and ETag headers from the API.

### Key Points

- Cache-Control: max-age=60 lets the browser skip the request
- ETag: Revalidation returns 304 without a body
";

/// A document missing its Context heading.
pub const NO_CONTEXT: &str = "\
# Scene: Broken

## Solution: Anything
### Problem
P
### Approach
A
### Key Points
- k
";

/// Writes `content` to `dir/name` synchronously and returns the path.
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("fixture should be writable");
    path
}
