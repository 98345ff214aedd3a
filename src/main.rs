// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments into an immutable Config
// 2. Load the root page and collect its links
// 3. With --crawl, probe every internal link and print the report
// 4. Exit with proper code (0 = all good, 1 = broken links, 2 = error)
//
// Everything printed to stdout goes through Output so --silent is honored
// in one place. Logs and progress go to stderr.
// =============================================================================

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use humm::cli::Cli;
use humm::crawl::{crawl, HttpProber, Progress};
use humm::links::detach;
use humm::page::gather_links;
use humm::report::finalize;
use humm::Config;

#[tokio::main]
async fn main() {
    init_logging();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr; RUST_LOG overrides the default "warn" level
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Writes to stdout unless --silent was given
struct Output {
    silent: bool,
}

impl Output {
    fn line(&self, line: impl AsRef<str>) {
        if !self.silent {
            println!("{}", line.as_ref());
        }
    }
}

// Returns:
//   Ok(0) = report printed, nothing broken
//   Ok(1) = a link failed or answered with status >= 400
//   Err   = fatal error before or during the crawl
async fn run() -> Result<i32> {
    let config = Config::try_from(Cli::parse())?;
    let out = Output {
        silent: config.silent,
    };

    out.line(format!("url: {}", detach(&config.base_url)));

    let prober = HttpProber::new(config.timeout)?;
    let mut links = gather_links(prober.client(), &config.base_url).await?;

    // without --crawl we only check that the root page loads
    if !config.crawl {
        return Ok(0);
    }

    if config.verbose {
        out.line(format!("links_total: {}", links.total));
        out.line(format!("links_internal_uniq: {}", links.internal.len()));
        out.line(format!("links_external_uniq: {}", links.external.len()));
    }

    links.truncate_internal(config.link_limit);

    let progress = progress_bar(&config, links.internal.len());
    let summary = crawl(
        &prober,
        &config.base_url,
        links.internal,
        &config.crawl_options(),
        |Progress { done, .. }| progress.set_position(done as u64),
    )
    .await;
    progress.finish_and_clear();
    let summary = summary?;

    let report = finalize(&summary, &config.report_options());
    if config.json {
        out.line(serde_json::to_string_pretty(&report)?);
    } else {
        for line in report.lines() {
            out.line(line);
        }
    }

    if summary.has_failures() || summary.has_error_status() {
        Ok(1)
    } else {
        Ok(0)
    }
}

// Progress is drawn on stderr, and not at all for --silent or --json
fn progress_bar(config: &Config, total: usize) -> ProgressBar {
    if config.silent || config.json {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::default_bar().template("crawling internal links: {pos}/{len}") {
        bar.set_style(style);
    }
    bar
}
