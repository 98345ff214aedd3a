// src/report/mod.rs
// =============================================================================
// This module turns probe results into something a person can read.
//
// Submodules:
// - summary: Groups LinkRecords by status code as they arrive
// - page_type: Tags a URL path as index/technology/project/static/unknown
// - render: Sorts, filters and strips credentials for the final report
// =============================================================================

mod page_type;
mod render;
mod summary;

pub use page_type::{classify_page, PageType};
pub use render::{finalize, Report, ReportEntry, ReportOptions, SortField, StatusGroup};
pub use summary::{Summary, FAILED_STATUS};
