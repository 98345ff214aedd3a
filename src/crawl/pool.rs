// src/crawl/pool.rs
// =============================================================================
// This module probes every internal link with a bounded number of requests
// in flight.
//
// How it works:
// 1. Each link becomes a probe future (credentials attached when needed)
// 2. The futures are fed through buffer_unordered(limit), which never polls
//    more than `limit` of them at once
// 3. Records are consumed here, one at a time, as they finish
// 4. Each record is added to the Summary and a Progress event is emitted
//
// Only this loop touches the Summary, so it needs no locking.
//
// With FailurePolicy::Abort the loop returns on the first failed probe.
// Returning drops the stream, and dropping the stream cancels every probe
// that is still in flight.
// =============================================================================

use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use super::probe::Prober;
use crate::error::{HummError, Result};
use crate::links::{attach, detach, is_internal, AbsoluteUrl};
use crate::report::Summary;

// What to do when a probe fails (timeout, refused connection, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Record the failure in the summary and keep going
    #[default]
    Continue,
    /// Stop the whole crawl and cancel outstanding probes
    Abort,
}

// Settings the coordinator needs from the Config
#[derive(Debug, Clone, Copy)]
pub struct CrawlOptions {
    pub concurrency: usize,
    pub policy: FailurePolicy,
    pub basic_auth: bool,
}

// Emitted after every completed probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
}

// Probes all `links` and groups the results by status code
//
// Parameters:
//   prober: does the actual request for one link
//   base: the root URL (source of credentials, defines "internal")
//   links: links to probe, usually the internal set
//   options: concurrency limit, failure policy, whether to attach auth
//   on_progress: called with (done, total) after each probe finishes
//
// Returns: the Summary, or HummError::Probe under FailurePolicy::Abort
pub async fn crawl<P, F>(
    prober: &P,
    base: &AbsoluteUrl,
    links: Vec<AbsoluteUrl>,
    options: &CrawlOptions,
    mut on_progress: F,
) -> Result<Summary>
where
    P: Prober,
    F: FnMut(Progress),
{
    let total = links.len();
    let limit = options.concurrency.max(1);
    info!("probing {} links, at most {} at a time", total, limit);

    // Every probe gets its own URL value; nothing is shared between them
    let probes = links.into_iter().map(|link| {
        let target = if options.basic_auth && is_internal(&link, base) {
            attach(&link, base)
        } else {
            link
        };
        prober.probe(target)
    });

    let mut results = stream::iter(probes).buffer_unordered(limit);
    let mut summary = Summary::default();
    let mut done = 0;

    while let Some(record) = results.next().await {
        done += 1;
        on_progress(Progress { done, total });

        if let Some(error) = &record.error {
            let url = detach(&record.url).to_string();
            if options.policy == FailurePolicy::Abort {
                warn!("aborting crawl after failed probe of {}: {}", url, error);
                return Err(HummError::Probe {
                    url,
                    source: error.clone(),
                });
            }
            warn!("could not get status code for {}: {}", url, error);
        }

        summary.insert(record);
    }

    Ok(summary)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why buffer_unordered instead of tokio::spawn per link?
//    - buffer_unordered(N) polls at most N futures at a time
//    - The other links are not started until one of the N finishes
//    - Spawning everything up front would open every connection at once
//
// 2. How does dropping the stream cancel requests?
//    - A future in Rust only makes progress when it is polled
//    - Dropping it drops its state, including the open HTTP request
//    - So `return` inside the loop is all the cancellation we need
//
// 3. Why FnMut for on_progress?
//    - The caller's closure may update state (a progress bar, a Vec)
//    - FnMut allows that; Fn would only allow reading
// -----------------------------------------------------------------------------
