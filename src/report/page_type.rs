// src/report/page_type.rs
// =============================================================================
// Tags each URL with a coarse page type based on the shape of its path.
//
// Patterns are tried in order and the first match wins:
//   "/"                      -> index
//   "/technology/<slug>/"    -> technology
//   "/projects/<slug>/"      -> project
//   "/<slug>/"               -> static
//   anything else            -> unknown
//
// A slug is lowercase letters, digits and hyphens. The trailing slash is
// optional everywhere except the index.
// =============================================================================

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Index,
    Technology,
    Project,
    Static,
    Unknown,
}

impl PageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageType::Index => "index",
            PageType::Technology => "technology",
            PageType::Project => "project",
            PageType::Static => "static",
            PageType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Patterns in priority order. They are constants, so unwrap() only fails
// on a typo here.
static PATTERNS: LazyLock<Vec<(Regex, PageType)>> = LazyLock::new(|| {
    [
        (r"^/$", PageType::Index),
        (r"^/technology/[a-z0-9-]+/?$", PageType::Technology),
        (r"^/projects/[a-z0-9-]+/?$", PageType::Project),
        (r"^/[a-z0-9-]+/?$", PageType::Static),
    ]
    .into_iter()
    .map(|(pattern, kind)| (Regex::new(pattern).unwrap(), kind))
    .collect()
});

// Returns the page type for a URL path such as "/projects/my-app/"
pub fn classify_page(path: &str) -> PageType {
    PATTERNS
        .iter()
        .find(|(re, _)| re.is_match(path))
        .map(|(_, kind)| *kind)
        .unwrap_or(PageType::Unknown)
}
