// src/links/absolute.rs
// =============================================================================
// This module turns raw href strings into absolute URLs.
//
// Two types are involved:
// - LinkRef: an href split into its components, any of which may be missing
//   (a relative link like "/about" has no scheme and no host)
// - AbsoluteUrl: a fully qualified URL whose scheme and host are never empty
//
// make_absolute() fills the missing parts of a LinkRef from a base URL,
// one component at a time. It never fails.
//
// Every href, absolute or relative, is split by the same code:
// - the host is kept exactly as written, port included ("EXAMPLE.com" and
//   "example.com:443" are not "example.com")
// - the path is percent-decoded and dot segments are left alone, so
//   "/caf%C3%A9" and "/café" are the same link
// url::Url is only used to reject malformed hrefs. Its normalized
// components (lowercased host, dropped default port, resolved "./") would
// make the same link compare differently depending on how it was written.
// =============================================================================

use std::fmt;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Serialize, Serializer};
use url::Url;

use crate::error::{HummError, Result};

// Characters escaped when a path is written back out
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

// Userinfo additionally escapes the characters that delimit it
const USERINFO: &AsciiSet = &PATH
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'|');

// A username/password pair for HTTP basic auth
//
// Debug is written by hand so the password never ends up in a log line.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

// An href broken into components, before it is made absolute
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkRef {
    pub scheme: Option<String>,
    pub credentials: Option<Credentials>,
    pub host: Option<String>,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl LinkRef {
    // Only http and https links can be probed. A link without a scheme
    // inherits the base scheme, so it counts as checkable.
    pub fn is_checkable(&self) -> bool {
        match self.scheme.as_deref() {
            None => true,
            Some(scheme) => scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https"),
        }
    }
}

// A fully qualified URL: scheme and host are always non-empty
//
// Equality and hashing are structural over every component, credentials
// included. Internal/external identity only looks at `host`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AbsoluteUrl {
    pub scheme: String,
    pub credentials: Option<Credentials>,
    pub host: String,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl AbsoluteUrl {
    // Parses a fully qualified URL such as the root URL given on the
    // command line. An empty path becomes "/".
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = |source| HummError::InvalidUrl {
            url: input.to_string(),
            source,
        };

        let input = input.trim();
        Url::parse(input).map_err(invalid)?;

        let (scheme, rest) = split_scheme(input).ok_or(invalid(url::ParseError::RelativeUrlWithoutBase))?;
        let link = split_reference(rest);
        let host = link
            .host
            .filter(|h| !h.is_empty())
            .ok_or(invalid(url::ParseError::EmptyHost))?;

        Ok(Self {
            scheme: scheme.to_ascii_lowercase(),
            credentials: link.credentials,
            host,
            path: if link.path.is_empty() {
                "/".to_string()
            } else {
                link.path
            },
            query: link.query,
            fragment: link.fragment,
        })
    }

    pub fn with_credentials(&self, credentials: Option<Credentials>) -> Self {
        Self {
            credentials,
            ..self.clone()
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }
}

impl fmt::Display for AbsoluteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://", self.scheme)?;
        if let Some(credentials) = &self.credentials {
            write!(
                f,
                "{}:{}@",
                utf8_percent_encode(&credentials.username, USERINFO),
                utf8_percent_encode(&credentials.password, USERINFO)
            )?;
        }
        write!(f, "{}{}", self.host, utf8_percent_encode(&self.path, PATH))?;
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}

// Serialized as its string form. Callers strip credentials before a URL
// reaches any serialized report.
impl Serialize for AbsoluteUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<&AbsoluteUrl> for LinkRef {
    fn from(url: &AbsoluteUrl) -> Self {
        Self {
            scheme: Some(url.scheme.clone()),
            credentials: url.credentials.clone(),
            host: Some(url.host.clone()),
            path: url.path.clone(),
            query: url.query.clone(),
            fragment: url.fragment.clone(),
        }
    }
}

// Parses a raw href attribute into its components
//
// Examples:
//   "https://other.com/x" -> scheme https, host other.com, path /x
//   "/about?x=1"          -> path /about, query x=1
//   "//cdn.example.com/a" -> host cdn.example.com, path /a
//   "#top"                -> empty path, fragment top
//
// Returns a Parse error for hrefs that have a scheme but are malformed
// (for example "http://[::1" with an unclosed IPv6 bracket).
pub fn parse_href(raw: &str) -> Result<LinkRef> {
    let href = raw.trim();

    match split_scheme(href) {
        Some((scheme, rest)) => {
            Url::parse(href).map_err(|source| HummError::Parse {
                href: href.to_string(),
                source,
            })?;
            Ok(LinkRef {
                scheme: Some(scheme.to_ascii_lowercase()),
                ..split_reference(rest)
            })
        }
        None => Ok(split_reference(href)),
    }
}

// Fills the missing components of `candidate` from `base`
//
// Scheme, host and path are each taken from the candidate when present and
// from the base otherwise. Query and fragment always come from the
// candidate. A path without a leading slash is rooted so that the host and
// path never run together.
pub fn make_absolute(candidate: &LinkRef, base: &AbsoluteUrl) -> AbsoluteUrl {
    let scheme = non_empty(candidate.scheme.as_deref()).unwrap_or(&base.scheme);
    let host = non_empty(candidate.host.as_deref()).unwrap_or(&base.host);

    let path = if candidate.path.is_empty() {
        base.path.clone()
    } else if candidate.path.starts_with('/') {
        candidate.path.clone()
    } else {
        format!("/{}", candidate.path)
    };

    AbsoluteUrl {
        scheme: scheme.to_string(),
        credentials: candidate.credentials.clone(),
        host: host.to_string(),
        path,
        query: candidate.query.clone(),
        fragment: candidate.fragment.clone(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// Splits "scheme:rest" when the text before the first colon is a valid
// scheme name (a letter, then letters, digits, '+', '-' or '.')
fn split_scheme(href: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = href.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    let valid = first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some((scheme, rest))
}

fn decode(text: &str) -> String {
    percent_decode_str(text).decode_utf8_lossy().into_owned()
}

// Splits everything after the scheme: "//authority/path?query#fragment",
// where every part may be missing
fn split_reference(href: &str) -> LinkRef {
    let (rest, fragment) = match href.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment.to_string())),
        None => (href, None),
    };
    let (rest, query) = match rest.split_once('?') {
        Some((rest, query)) => (rest, Some(query.to_string())),
        None => (rest, None),
    };

    let Some(authority_and_path) = rest.strip_prefix("//") else {
        return LinkRef {
            path: decode(rest),
            query,
            fragment,
            ..LinkRef::default()
        };
    };

    let (authority, path) = match authority_and_path.find('/') {
        Some(index) => authority_and_path.split_at(index),
        None => (authority_and_path, ""),
    };
    let (credentials, host) = match authority.rsplit_once('@') {
        Some((userinfo, host)) => {
            let (username, password) = userinfo.split_once(':').unwrap_or((userinfo, ""));
            (Some(Credentials::new(decode(username), decode(password))), host)
        }
        None => (None, authority),
    };

    LinkRef {
        scheme: None,
        credentials,
        host: Some(host.to_string()),
        path: decode(path),
        query,
        fragment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> AbsoluteUrl {
        AbsoluteUrl::parse("https://example.com/").unwrap()
    }

    #[test]
    fn test_parse_root_url() {
        let url = AbsoluteUrl::parse("https://example.com:8443/docs?page=2#intro").unwrap();
        assert_eq!(url.scheme, "https");
        assert_eq!(url.host, "example.com:8443");
        assert_eq!(url.path, "/docs");
        assert_eq!(url.query.as_deref(), Some("page=2"));
        assert_eq!(url.fragment.as_deref(), Some("intro"));
        assert_eq!(url.to_string(), "https://example.com:8443/docs?page=2#intro");
    }

    #[test]
    fn test_parse_rejects_relative_root() {
        assert!(matches!(
            AbsoluteUrl::parse("/just/a/path"),
            Err(HummError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_relative_path_takes_base_scheme_and_host() {
        let link = parse_href("/about").unwrap();
        let absolute = make_absolute(&link, &base());
        assert_eq!(absolute.to_string(), "https://example.com/about");
    }

    #[test]
    fn test_absolute_href_is_kept() {
        let link = parse_href("http://other.com/x?y=1").unwrap();
        let absolute = make_absolute(&link, &base());
        assert_eq!(absolute.to_string(), "http://other.com/x?y=1");
    }

    #[test]
    fn test_fragment_only_href_uses_base_path() {
        let base = AbsoluteUrl::parse("https://example.com/docs/").unwrap();
        let link = parse_href("#top").unwrap();
        let absolute = make_absolute(&link, &base);
        assert_eq!(absolute.path, "/docs/");
        assert_eq!(absolute.to_string(), "https://example.com/docs/#top");
    }

    #[test]
    fn test_scheme_relative_href() {
        let link = parse_href("//cdn.example.com/app.js").unwrap();
        assert_eq!(link.scheme, None);
        assert_eq!(link.host.as_deref(), Some("cdn.example.com"));

        let absolute = make_absolute(&link, &base());
        assert_eq!(absolute.to_string(), "https://cdn.example.com/app.js");
    }

    #[test]
    fn test_bare_relative_path_is_rooted() {
        let link = parse_href("about").unwrap();
        let absolute = make_absolute(&link, &base());
        assert_eq!(absolute.to_string(), "https://example.com/about");
    }

    #[test]
    fn test_malformed_href_is_parse_error() {
        assert!(matches!(
            parse_href("http://[::1"),
            Err(HummError::Parse { .. })
        ));
    }

    #[test]
    fn test_non_http_schemes_are_not_checkable() {
        assert!(!parse_href("mailto:someone@example.com").unwrap().is_checkable());
        assert!(!parse_href("javascript:void(0)").unwrap().is_checkable());
        assert!(parse_href("/about").unwrap().is_checkable());
        assert!(parse_href("HTTPS://example.com").unwrap().is_checkable());
    }

    #[test]
    fn test_make_absolute_never_loses_scheme_or_host() {
        let hrefs = ["", "/", "about", "?q=1", "#x", "//h.com", "https://a.com/b", "//"];
        for href in hrefs {
            let link = parse_href(href).unwrap();
            let absolute = make_absolute(&link, &base());
            assert!(!absolute.scheme.is_empty(), "empty scheme for {:?}", href);
            assert!(!absolute.host.is_empty(), "empty host for {:?}", href);
        }
    }

    #[test]
    fn test_make_absolute_of_itself_is_identity() {
        let urls = [
            "https://example.com/",
            "http://user:pw@example.com:8080/a/b?c=d#e",
            "https://example.com/projects/my-app/",
        ];
        for raw in urls {
            let url = AbsoluteUrl::parse(raw).unwrap();
            assert_eq!(make_absolute(&LinkRef::from(&url), &url), url);
        }
    }

    #[test]
    fn test_host_is_kept_as_written() {
        let upper = parse_href("https://EXAMPLE.com/x").unwrap();
        assert_eq!(upper.host.as_deref(), Some("EXAMPLE.com"));

        let scheme_relative = parse_href("//EXAMPLE.com/y").unwrap();
        assert_eq!(scheme_relative.host, upper.host);

        let default_port = parse_href("https://example.com:443/x").unwrap();
        assert_eq!(default_port.host.as_deref(), Some("example.com:443"));

        let root = AbsoluteUrl::parse("https://Example.com:443").unwrap();
        assert_eq!(root.host, "Example.com:443");
        assert_eq!(root.path, "/");
    }

    #[test]
    fn test_path_spelling_does_not_depend_on_href_form() {
        let pairs = [
            ("/café", "https://example.com/café"),
            ("/caf%C3%A9", "https://example.com/café"),
            ("/a/./b", "https://example.com/a/./b"),
            ("/a/../b", "https://example.com/a/../b"),
        ];
        for (relative, absolute) in pairs {
            let relative = make_absolute(&parse_href(relative).unwrap(), &base());
            let absolute = make_absolute(&parse_href(absolute).unwrap(), &base());
            assert_eq!(relative, absolute);
        }

        let dotted = make_absolute(&parse_href("https://example.com/a/./b").unwrap(), &base());
        assert_eq!(dotted.path, "/a/./b");
    }

    #[test]
    fn test_decoded_path_is_escaped_when_displayed() {
        let link = make_absolute(&parse_href("/café menu").unwrap(), &base());
        assert_eq!(link.path, "/café menu");
        assert_eq!(link.to_string(), "https://example.com/caf%C3%A9%20menu");
    }

    #[test]
    fn test_absolute_href_without_path_takes_base_path() {
        let base = AbsoluteUrl::parse("https://example.com/docs/").unwrap();
        let link = make_absolute(&parse_href("https://example.com").unwrap(), &base);
        assert_eq!(link.path, "/docs/");
    }

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::new("admin", "hunter2");
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
    }
}
