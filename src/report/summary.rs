// src/report/summary.rs
// =============================================================================
// The Summary groups probe results by status code.
//
// Groups are kept in a BTreeMap so iterating them is always in ascending
// status-code order. Within a group, records stay in the order they
// arrived; sorting happens later, when the report is rendered.
//
// Failed probes have status code 0, so they form the first group.
// =============================================================================

use std::collections::BTreeMap;

use crate::crawl::LinkRecord;

// Status code used for probes that got no response at all
pub const FAILED_STATUS: u16 = 0;

#[derive(Debug, Clone, Default)]
pub struct Summary {
    results: BTreeMap<u16, Vec<LinkRecord>>,
}

impl Summary {
    pub fn insert(&mut self, record: LinkRecord) {
        self.results.entry(record.status_code).or_default().push(record);
    }

    pub fn get(&self, status_code: u16) -> Option<&[LinkRecord]> {
        self.results.get(&status_code).map(Vec::as_slice)
    }

    // Groups in ascending status-code order
    pub fn groups(&self) -> impl Iterator<Item = (u16, &[LinkRecord])> {
        self.results.iter().map(|(code, records)| (*code, records.as_slice()))
    }

    pub fn status_codes(&self) -> Vec<u16> {
        self.results.keys().copied().collect()
    }

    pub fn total(&self) -> usize {
        self.results.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn has_failures(&self) -> bool {
        self.results.contains_key(&FAILED_STATUS)
    }

    // True if any link answered with a client or server error
    pub fn has_error_status(&self) -> bool {
        self.results.keys().any(|code| *code >= 400)
    }
}
