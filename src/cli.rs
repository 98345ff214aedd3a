// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things). The parsed Cli is turned
// into an immutable Config (see config.rs) before anything else runs.
// =============================================================================

use clap::Parser;

use crate::report::SortField;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "humm",
    version,
    about = "Check the status code of every internal link on a web page",
    long_about = "humm loads a web page, collects its links, and with --crawl requests every \
                  internal link concurrently, reporting the links grouped by status code."
)]
pub struct Cli {
    /// URL of the page to check (e.g., https://example.com/)
    pub url: String,

    /// Username for basic auth (only sent to allow-listed hosts)
    #[arg(short = 'u', long = "user")]
    pub user: Option<String>,

    /// Password for basic auth
    #[arg(short = 'p', long = "pass")]
    pub pass: Option<String>,

    /// Crawl all internal links and report their status codes
    #[arg(short = 'c', long)]
    pub crawl: bool,

    /// Print link counts before crawling
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Timeout in seconds for each HTTP request
    #[arg(long, default_value_t = 20)]
    pub timeout: u64,

    /// Only crawl this many internal links (0 = no limit)
    #[arg(short = 'l', long = "limit", default_value_t = 0)]
    pub limit: usize,

    /// Maximum number of requests in flight at once
    #[arg(short = 'm', long = "max-threads", default_value_t = 10)]
    pub max_threads: usize,

    /// Include links with status code 200 in the report
    #[arg(long = "show-200")]
    pub show_200: bool,

    /// Order links inside each status group
    #[arg(short = 's', long = "sort", value_enum, default_value_t = SortField::Url)]
    pub sort: SortField,

    /// Print the time between request and response for each link
    #[arg(short = 't', long = "time")]
    pub time: bool,

    /// Silence all stdout (stderr is kept)
    #[arg(long)]
    pub silent: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Stop the crawl at the first link that cannot be reached
    #[arg(long)]
    pub fail_fast: bool,
}
