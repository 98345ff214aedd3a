// src/config.rs
// =============================================================================
// The immutable configuration for one run.
//
// Config is built once from the parsed command line and then passed by
// reference to whatever needs it. Validation happens here, before any
// network activity:
// - the URL must be absolute
// - basic auth is only allowed for hosts on the allow-list
// - at least one request must be allowed in flight
// =============================================================================

use std::time::Duration;

use crate::cli::Cli;
use crate::crawl::{CrawlOptions, FailurePolicy};
use crate::error::{HummError, Result};
use crate::links::{ensure_host_allowed, AbsoluteUrl, Credentials};
use crate::report::{ReportOptions, SortField};

#[derive(Debug, Clone)]
pub struct Config {
    /// Root URL, carrying credentials when basic auth is enabled
    pub base_url: AbsoluteUrl,
    pub timeout: Duration,
    pub concurrency: usize,
    /// None means every internal link is crawled
    pub link_limit: Option<usize>,
    pub sort: SortField,
    pub crawl: bool,
    pub verbose: bool,
    pub show_ok: bool,
    pub show_elapsed: bool,
    pub silent: bool,
    pub json: bool,
    pub policy: FailurePolicy,
}

impl Config {
    pub fn basic_auth(&self) -> bool {
        self.base_url.has_credentials()
    }

    pub fn crawl_options(&self) -> CrawlOptions {
        CrawlOptions {
            concurrency: self.concurrency,
            policy: self.policy,
            basic_auth: self.basic_auth(),
        }
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            sort: self.sort,
            show_ok: self.show_ok,
            show_elapsed: self.show_elapsed,
        }
    }
}

impl TryFrom<Cli> for Config {
    type Error = HummError;

    fn try_from(cli: Cli) -> Result<Self> {
        let base_url = AbsoluteUrl::parse(&cli.url)?;

        // Credentials are only used when both halves are given
        let credentials = match (cli.user, cli.pass) {
            (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty() => {
                Some(Credentials::new(user, pass))
            }
            _ => None,
        };
        if credentials.is_some() {
            ensure_host_allowed(&base_url.host)?;
        }
        // credentials typed into the URL itself are ignored
        let base_url = base_url.with_credentials(credentials);

        if cli.max_threads == 0 {
            return Err(HummError::InvalidConfig(
                "max threads must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(cli.timeout),
            concurrency: cli.max_threads,
            link_limit: (cli.limit > 0).then_some(cli.limit),
            sort: cli.sort,
            crawl: cli.crawl,
            verbose: cli.verbose,
            show_ok: cli.show_200,
            show_elapsed: cli.time,
            silent: cli.silent,
            json: cli.json,
            policy: if cli.fail_fast {
                FailurePolicy::Abort
            } else {
                FailurePolicy::Continue
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> Result<Config> {
        let mut argv = vec!["humm"];
        argv.extend_from_slice(args);
        Config::try_from(Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_plain_config() {
        let config = config(&["-c", "-l", "25", "https://example.com/"]).unwrap();
        assert!(!config.basic_auth());
        assert_eq!(config.link_limit, Some(25));
        assert_eq!(config.timeout, Duration::from_secs(20));
        assert_eq!(config.policy, FailurePolicy::Continue);
    }

    #[test]
    fn test_zero_limit_means_unlimited() {
        let config = config(&["https://example.com/"]).unwrap();
        assert_eq!(config.link_limit, None);
    }

    #[test]
    fn test_basic_auth_on_allowed_host() {
        let config = config(&["-u", "admin", "-p", "secret", "https://staging.mystic.com/"]).unwrap();
        assert!(config.basic_auth());
        assert!(config.crawl_options().basic_auth);
    }

    #[test]
    fn test_basic_auth_on_other_host_is_rejected() {
        let result = config(&["-u", "admin", "-p", "secret", "https://example.com/"]);
        assert!(matches!(result, Err(HummError::HostNotAllowed { .. })));
    }

    #[test]
    fn test_user_without_password_disables_auth() {
        let config = config(&["-u", "admin", "https://example.com/"]).unwrap();
        assert!(!config.basic_auth());
    }

    #[test]
    fn test_invalid_url() {
        assert!(matches!(config(&["not a url"]), Err(HummError::InvalidUrl { .. })));
    }

    #[test]
    fn test_zero_threads_is_rejected() {
        assert!(matches!(
            config(&["-m", "0", "https://example.com/"]),
            Err(HummError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_fail_fast_and_report_options() {
        let config = config(&["--fail-fast", "--show-200", "-t", "-s", "time", "https://example.com/"]).unwrap();
        assert_eq!(config.crawl_options().policy, FailurePolicy::Abort);
        let report = config.report_options();
        assert!(report.show_ok && report.show_elapsed);
        assert_eq!(report.sort, SortField::Time);
    }
}
