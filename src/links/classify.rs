// src/links/classify.rs
// =============================================================================
// Splits links into internal (same host as the root page) and external
// (any other host), removing duplicates from each side.
//
// The host comparison is exact: "example.com" and "www.example.com" are
// different sites, and so are "example.com" and "example.com:8080".
// Both outputs keep the order in which links were first seen.
// =============================================================================

use std::collections::HashSet;

use super::absolute::AbsoluteUrl;

// Returns true if the link points at the same host as the base URL
pub fn is_internal(link: &AbsoluteUrl, base: &AbsoluteUrl) -> bool {
    link.host == base.host
}

// Partitions links into (internal, external)
//
// Parameters:
//   links: absolute links in page order (may contain duplicates)
//   base: the root URL whose host defines "internal"
//
// Returns: two duplicate-free vectors, each in first-seen order
pub fn classify(links: &[AbsoluteUrl], base: &AbsoluteUrl) -> (Vec<AbsoluteUrl>, Vec<AbsoluteUrl>) {
    let (internal, external): (Vec<_>, Vec<_>) = links
        .iter()
        .cloned()
        .partition(|link| is_internal(link, base));

    (dedup(internal), dedup(external))
}

// Order-preserving dedup: the first occurrence of each link wins
pub fn dedup(links: Vec<AbsoluteUrl>) -> Vec<AbsoluteUrl> {
    let mut seen = HashSet::with_capacity(links.len());
    links
        .into_iter()
        .filter(|link| seen.insert(link.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::absolute::{make_absolute, parse_href};

    fn absolutes(hrefs: &[&str], base: &AbsoluteUrl) -> Vec<AbsoluteUrl> {
        hrefs
            .iter()
            .map(|href| make_absolute(&parse_href(href).unwrap(), base))
            .collect()
    }

    #[test]
    fn test_relative_and_absolute_duplicates_collapse() {
        let base = AbsoluteUrl::parse("https://example.com/").unwrap();
        let links = absolutes(&["/about", "https://example.com/about", "https://other.com/x"], &base);

        let (internal, external) = classify(&links, &base);

        let internal: Vec<String> = internal.iter().map(ToString::to_string).collect();
        let external: Vec<String> = external.iter().map(ToString::to_string).collect();
        assert_eq!(internal, vec!["https://example.com/about"]);
        assert_eq!(external, vec!["https://other.com/x"]);
    }

    #[test]
    fn test_first_seen_order_is_kept() {
        let base = AbsoluteUrl::parse("https://example.com/").unwrap();
        let links = absolutes(&["/c", "/a", "/c", "/b", "/a"], &base);

        let (internal, external) = classify(&links, &base);

        let paths: Vec<&str> = internal.iter().map(|l| l.path.as_str()).collect();
        assert_eq!(paths, vec!["/c", "/a", "/b"]);
        assert!(external.is_empty());
    }

    #[test]
    fn test_host_match_is_exact() {
        let base = AbsoluteUrl::parse("https://example.com/").unwrap();
        let links = absolutes(
            &[
                "https://www.example.com/",
                "https://example.com:8080/",
                "https://EXAMPLE.com/x",
                "//EXAMPLE.com/y",
                "https://example.com:443/x",
                "https://example.com./z",
                "https://example.com/ok",
            ],
            &base,
        );

        let (internal, external) = classify(&links, &base);

        // no case folding, default-port or trailing-dot normalization
        let internal: Vec<String> = internal.iter().map(ToString::to_string).collect();
        assert_eq!(internal, vec!["https://example.com/ok"]);
        assert_eq!(external.len(), 6);
    }

    #[test]
    fn test_relative_and_absolute_spellings_dedup() {
        let base = AbsoluteUrl::parse("https://example.com/").unwrap();
        let links = absolutes(
            &["/café", "https://example.com/café", "/a/./b", "https://example.com/a/./b"],
            &base,
        );

        let (internal, external) = classify(&links, &base);

        let paths: Vec<&str> = internal.iter().map(|l| l.path.as_str()).collect();
        assert_eq!(paths, vec!["/café", "/a/./b"]);
        assert!(external.is_empty());
    }

    #[test]
    fn test_partition_covers_every_unique_link() {
        let base = AbsoluteUrl::parse("https://example.com/").unwrap();
        let links = absolutes(
            &["/", "/a", "https://b.com/", "/a", "https://b.com/", "https://c.com/z", "#x", "/?q=1"],
            &base,
        );

        let (internal, external) = classify(&links, &base);

        let unique: HashSet<_> = links.iter().cloned().collect();
        let internal_set: HashSet<_> = internal.iter().cloned().collect();
        let external_set: HashSet<_> = external.iter().cloned().collect();

        assert_eq!(internal.len(), internal_set.len());
        assert_eq!(external.len(), external_set.len());
        assert!(internal_set.is_disjoint(&external_set));
        assert_eq!(&internal_set | &external_set, unique);
    }

    #[test]
    fn test_query_and_fragment_make_links_distinct() {
        let base = AbsoluteUrl::parse("https://example.com/").unwrap();
        let links = absolutes(&["/a", "/a?x=1", "/a#top"], &base);

        let (internal, _) = classify(&links, &base);
        assert_eq!(internal.len(), 3);
    }
}
