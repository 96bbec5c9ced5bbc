//! End-of-run counts.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::record::OutputRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub international: usize,
    /// Failure status → count (e.g. "error: TimeoutError" → 2).
    pub failures: BTreeMap<String, usize>,
    pub elapsed: Duration,
}

impl CrawlSummary {
    pub fn record(&mut self, rec: &OutputRecord) {
        self.total += 1;
        if rec.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
            *self.failures.entry(rec.status.clone()).or_default() += 1;
        }
        if rec.is_international {
            self.international += 1;
        }
    }
}
