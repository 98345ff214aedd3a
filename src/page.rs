// src/page.rs
// =============================================================================
// Loads the root page and sorts its links into internal and external sets.
//
// This is the step between "here is a URL" and "here are the links to
// probe": fetch, extract hrefs, make them absolute, classify, dedup.
// =============================================================================

use reqwest::Client;
use tracing::info;

use crate::crawl::fetch_page;
use crate::error::Result;
use crate::links::{absolute_links, classify, extract_hrefs, AbsoluteUrl};

// The links found on one page
#[derive(Debug, Clone, Default)]
pub struct PageLinks {
    /// Every <a href> on the page, including duplicates and links that
    /// cannot be checked (mailto:, malformed, ...)
    pub total: usize,
    pub internal: Vec<AbsoluteUrl>,
    pub external: Vec<AbsoluteUrl>,
}

impl PageLinks {
    // Keeps only the first `limit` internal links
    pub fn truncate_internal(&mut self, limit: Option<usize>) {
        if let Some(limit) = limit {
            self.internal.truncate(limit);
        }
    }
}

// Classifies the links in an already-fetched HTML document
pub fn links_in(html: &str, base: &AbsoluteUrl) -> PageLinks {
    let hrefs = extract_hrefs(html);
    let links = absolute_links(&hrefs, base);
    let (internal, external) = classify(&links, base);

    PageLinks {
        total: hrefs.len(),
        internal,
        external,
    }
}

// Fetches `base` and classifies the links on it
pub async fn gather_links(client: &Client, base: &AbsoluteUrl) -> Result<PageLinks> {
    let html = fetch_page(client, base).await?;
    let links = links_in(&html, base);

    info!(
        "found {} links ({} internal, {} external unique)",
        links.total,
        links.internal.len(),
        links.external.len()
    );

    Ok(links)
}
