// src/links/auth.rs
// =============================================================================
// Basic auth handling for crawled links.
//
// Credentials are only ever sent to a fixed list of hosts. The list is
// hard-coded on purpose: making it configurable would make it easy to send
// a password to whatever site a typo points at.
//
// attach() copies credentials from the root URL onto a link, and detach()
// removes them again before anything is printed.
// =============================================================================

use super::absolute::AbsoluteUrl;
use crate::error::{HummError, Result};

// Hosts that may receive basic auth credentials
pub const ALLOWED_AUTH_HOSTS: &[&str] = &["mystic.com", "staging.mystic.com"];

// Fails with HostNotAllowed unless `host` is on the allow-list
pub fn ensure_host_allowed(host: &str) -> Result<()> {
    if ALLOWED_AUTH_HOSTS.contains(&host) {
        Ok(())
    } else {
        Err(HummError::HostNotAllowed {
            host: host.to_string(),
            allowed: ALLOWED_AUTH_HOSTS,
        })
    }
}

// Returns a copy of `link` carrying the credentials of `base`
pub fn attach(link: &AbsoluteUrl, base: &AbsoluteUrl) -> AbsoluteUrl {
    link.with_credentials(base.credentials.clone())
}

// Returns a copy of `link` without any credentials
pub fn detach(link: &AbsoluteUrl) -> AbsoluteUrl {
    link.with_credentials(None)
}
