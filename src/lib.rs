// src/lib.rs
// =============================================================================
// humm: check the status code of every internal link on a web page.
//
// The pipeline, in the order main.rs runs it:
//   config  -> parse and validate the command line once
//   page    -> fetch the root page, extract and classify its links
//   crawl   -> probe internal links with a bounded number in flight
//   report  -> group by status, sort, strip credentials, render
// =============================================================================

pub mod cli;
pub mod config;
pub mod crawl;
pub mod error;
pub mod links;
pub mod page;
pub mod report;

pub use config::Config;
pub use error::{HummError, ProbeError, Result};
