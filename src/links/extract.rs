// src/links/extract.rs
// =============================================================================
// This module pulls links out of an HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// extract_hrefs() only returns the raw href strings. Turning them into
// absolute URLs is the job of links::absolute, so the two steps can be
// tested separately.
// =============================================================================

use scraper::{Html, Selector};
use tracing::{debug, warn};

use super::absolute::{make_absolute, parse_href, AbsoluteUrl};

// Extracts the href attribute of every <a> element, in document order
//
// Example:
//   html = "<a href='/docs'>Docs</a><a>no href</a>"
//   result = ["/docs"]
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // "a[href]" is a constant, known-valid selector
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}

// Parses raw hrefs and makes them absolute against `base`
//
// Hrefs that cannot be parsed are logged and skipped. Links that are not
// http(s) (mailto:, tel:, javascript:) are dropped because they cannot be
// probed.
pub fn absolute_links(hrefs: &[String], base: &AbsoluteUrl) -> Vec<AbsoluteUrl> {
    let mut links = Vec::with_capacity(hrefs.len());

    for href in hrefs {
        let link = match parse_href(href) {
            Ok(link) => link,
            Err(e) => {
                warn!("skipping href: {}", e);
                continue;
            }
        };

        if !link.is_checkable() {
            debug!("skipping non-http link: {}", href);
            continue;
        }

        links.push(make_absolute(&link, base));
    }

    links
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does .value().attr("href") return?
//    - element is an ElementRef (reference to an HTML element)
//    - .value() gets the underlying Element
//    - .attr("href") is an Option<&str>, so filter_map drops the None cases
//
// 2. Why unwrap() on the selector?
//    - Selector::parse only fails on an invalid CSS selector
//    - "a[href]" is a constant, so a failure would be a programmer error
// -----------------------------------------------------------------------------
