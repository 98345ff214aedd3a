// src/error.rs
// =============================================================================
// Error types for the link checking core.
//
// Fatal errors (bad root URL, host not allowed for basic auth, root page
// failures) are returned as HummError. A single failed probe is NOT an
// error here: it is recorded on its LinkRecord as a ProbeError so the
// report keeps partial results. Only the fail-fast policy turns a probe
// failure into HummError::Probe.
//
// Every URL stored in these errors has its credentials removed first.
// =============================================================================

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HummError {
    #[error("invalid url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("could not parse href '{href}': {source}")]
    Parse {
        href: String,
        #[source]
        source: url::ParseError,
    },

    #[error("cannot add basic auth outside of {allowed:?} (host: {host})")]
    HostNotAllowed {
        host: String,
        allowed: &'static [&'static str],
    },

    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("could not load {url}: {source}")]
    RootFetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("received status code {status} from {url}")]
    RootStatus { url: String, status: u16 },

    #[error("could not get status code for {url}: {source}")]
    Probe {
        url: String,
        #[source]
        source: ProbeError,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Why a single probe produced no status code.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ProbeError {
    #[error("request timed out")]
    Timeout,
    #[error("connection failed")]
    Connect,
    #[error("too many redirects")]
    Redirect,
    #[error("{0}")]
    Request(String),
}

impl From<reqwest::Error> for ProbeError {
    // Same buckets link checkers usually report: timeout, connect, redirect
    // loop, and everything else with its message. The URL is stripped from
    // the message since it may carry credentials.
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ProbeError::Timeout
        } else if error.is_connect() {
            ProbeError::Connect
        } else if error.is_redirect() {
            ProbeError::Redirect
        } else {
            ProbeError::Request(error.without_url().to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, HummError>;
