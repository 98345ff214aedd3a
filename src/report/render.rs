// src/report/render.rs
// =============================================================================
// Turns a finished Summary into the final report.
//
// finalize() does all the ordering and filtering:
// - groups in ascending status-code order
// - entries sorted by URL, or left in arrival order when sorting by time
// - status 200 entries dropped unless asked for (the group count stays)
// - credentials stripped from every URL
//
// The Report can then be printed as text lines or serialized as JSON.
// =============================================================================

use serde::Serialize;

use super::page_type::{classify_page, PageType};
use super::summary::{Summary, FAILED_STATUS};
use crate::crawl::LinkRecord;
use crate::error::ProbeError;
use crate::links::{detach, AbsoluteUrl};

// How entries inside a status group are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortField {
    /// Alphabetically by URL
    #[default]
    Url,
    /// In the order the responses arrived
    Time,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub sort: SortField,
    pub show_ok: bool,
    pub show_elapsed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub url: AbsoluteUrl,
    pub page_type: PageType,
    pub elapsed_ms: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ProbeError>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusGroup {
    pub status: u16,
    // number of links with this status, even when `links` is filtered
    pub count: usize,
    pub links: Vec<ReportEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub groups: Vec<StatusGroup>,
    #[serde(skip)]
    show_elapsed: bool,
}

// Builds the sorted, credential-free report from a Summary
pub fn finalize(summary: &Summary, options: &ReportOptions) -> Report {
    let groups = summary
        .groups()
        .map(|(status, records)| {
            let links = if status == 200 && !options.show_ok {
                Vec::new()
            } else {
                sorted_entries(records, options.sort)
            };
            StatusGroup {
                status,
                count: records.len(),
                links,
            }
        })
        .collect();

    Report {
        groups,
        show_elapsed: options.show_elapsed,
    }
}

fn sorted_entries(records: &[LinkRecord], sort: SortField) -> Vec<ReportEntry> {
    let mut entries: Vec<ReportEntry> = records.iter().map(entry).collect();

    if sort == SortField::Url {
        // sort_by_cached_key is stable, so equal URLs keep arrival order
        entries.sort_by_cached_key(|e| e.url.to_string());
    }

    entries
}

fn entry(record: &LinkRecord) -> ReportEntry {
    let url = detach(&record.url);
    ReportEntry {
        page_type: classify_page(&url.path),
        url,
        elapsed_ms: record.elapsed().num_milliseconds(),
        error: record.error.clone(),
    }
}

impl Report {
    // Text form of the report, one string per output line:
    //
    //   404: 2
    //    - [132ms] https://example.com/gone [static]
    //    - https://example.com/projects/old/ [project]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        for group in &self.groups {
            let label = if group.status == FAILED_STATUS {
                "failed".to_string()
            } else {
                group.status.to_string()
            };
            lines.push(format!("{}: {}", label, group.count));

            for link in &group.links {
                let mut line = if self.show_elapsed {
                    format!(" - [{}ms] {} [{}]", link.elapsed_ms, link.url, link.page_type)
                } else {
                    format!(" - {} [{}]", link.url, link.page_type)
                };
                if let Some(error) = &link.error {
                    line.push_str(&format!(" ({})", error));
                }
                lines.push(line);
            }
        }

        lines
    }
}
