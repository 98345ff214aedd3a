// src/crawl/mod.rs
// =============================================================================
// This module handles the network side of a crawl.
//
// Submodules:
// - fetch: Loads the root page
// - probe: Checks a single link with one GET request
// - pool: Probes many links with a bounded number in flight
//
// Rust concepts:
// - Async programming: For concurrent network requests
// - Streams: buffer_unordered() caps how many futures run at once
// =============================================================================

mod fetch;
mod pool;
mod probe;

pub use fetch::fetch_page;
pub use pool::{crawl, CrawlOptions, FailurePolicy, Progress};
pub use probe::{HttpProber, LinkRecord, Prober};
