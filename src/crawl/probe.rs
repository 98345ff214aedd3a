// src/crawl/probe.rs
// =============================================================================
// This module checks a single link by making one HTTP GET request.
//
// Each probe records:
// - the time just before the request is sent
// - the time just after the response headers arrive (or the request fails)
// - the status code, or why there is none
//
// The body is never read, so the elapsed time covers connect, TLS and the
// response headers only. There are no retries: a failed probe is reported
// once.
//
// Rust concepts:
// - Traits: Prober lets the coordinator run against a fake in tests
// - impl Future: a trait method that returns something you can .await
// =============================================================================

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::debug;

use crate::error::{HummError, ProbeError, Result};
use crate::links::{detach, AbsoluteUrl};

// The outcome of probing one link
//
// `status_code` is 0 when the request failed, and `error` says why.
#[derive(Debug, Clone)]
pub struct LinkRecord {
    pub url: AbsoluteUrl,
    pub status_code: u16,
    pub request_time: DateTime<Utc>,
    pub response_time: DateTime<Utc>,
    pub error: Option<ProbeError>,
}

impl LinkRecord {
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    pub fn elapsed(&self) -> chrono::Duration {
        self.response_time - self.request_time
    }
}

// Something that can check one link
//
// The crawl coordinator is generic over this so tests can count how many
// probes are in flight without a network.
pub trait Prober {
    fn probe(&self, url: AbsoluteUrl) -> impl Future<Output = LinkRecord> + Send;
}

// Probes links with real HTTP requests
//
// The reqwest client is created once and shared by every probe, so
// connections to the same host are pooled.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(HummError::Client)?;
        Ok(Self { client })
    }

    // The underlying client, also used to fetch the root page
    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl Prober for HttpProber {
    fn probe(&self, url: AbsoluteUrl) -> impl Future<Output = LinkRecord> + Send {
        let client = self.client.clone();
        async move { probe_with(&client, url).await }
    }
}

// Builds a GET for `url`, sending credentials as an Authorization header
// rather than inside the URL
pub(crate) fn get_request(client: &Client, url: &AbsoluteUrl) -> reqwest::RequestBuilder {
    let request = client.get(detach(url).to_string());
    match &url.credentials {
        Some(credentials) => request.basic_auth(&credentials.username, Some(&credentials.password)),
        None => request,
    }
}

async fn probe_with(client: &Client, url: AbsoluteUrl) -> LinkRecord {
    let request = get_request(client, &url);

    let request_time = Utc::now();
    let result = request.send().await;
    let response_time = Utc::now();

    let (status_code, error) = match result {
        Ok(response) => (response.status().as_u16(), None),
        Err(e) => (0, Some(ProbeError::from(e))),
    };

    debug!(
        "probed {} -> {} in {}ms",
        detach(&url),
        status_code,
        (response_time - request_time).num_milliseconds()
    );

    LinkRecord {
        url,
        status_code,
        request_time,
        response_time,
        error,
    }
}
