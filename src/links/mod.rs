// src/links/mod.rs
// =============================================================================
// This module contains everything that happens to a link before it is
// probed.
//
// Submodules:
// - absolute: Parses hrefs and resolves them against the root URL
// - classify: Splits links into internal/external and removes duplicates
// - auth: Attaches and strips basic auth credentials
// - extract: Reads href attributes out of an HTML page
// =============================================================================

mod absolute;
mod auth;
mod classify;
mod extract;

pub use absolute::{make_absolute, parse_href, AbsoluteUrl, Credentials, LinkRef};
pub use auth::{attach, detach, ensure_host_allowed, ALLOWED_AUTH_HOSTS};
pub use classify::{classify, dedup, is_internal};
pub use extract::{absolute_links, extract_hrefs};
