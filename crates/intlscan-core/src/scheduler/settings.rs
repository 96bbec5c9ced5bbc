use std::time::Duration;

use crate::config::ScanConfig;
use crate::retry::RetryPolicy;

/// Knobs the scheduler honours for one crawl.
#[derive(Debug, Clone, Copy)]
pub struct CrawlSettings {
    /// Maximum URLs in flight at once.
    pub max_concurrent: usize,
    /// Minimum spacing between request starts on one host.
    pub download_delay: Duration,
    /// Deadline for one fetch attempt.
    pub request_timeout: Duration,
    pub retry: RetryPolicy,
}

impl Default for CrawlSettings {
    fn default() -> Self {
        Self::from(&ScanConfig::default())
    }
}

impl From<&ScanConfig> for CrawlSettings {
    fn from(cfg: &ScanConfig) -> Self {
        Self {
            max_concurrent: cfg.max_concurrent_requests.max(1),
            download_delay: cfg.download_delay(),
            request_timeout: cfg.request_timeout(),
            retry: cfg.retry_policy(),
        }
    }
}

impl CrawlSettings {
    /// Deadline for one URL across all permitted attempts and backoffs.
    pub fn fetch_deadline(&self) -> Duration {
        let attempts = self.retry.max_attempts.max(1);
        self.request_timeout.saturating_mul(attempts)
            + self.retry.max_delay.saturating_mul(attempts - 1)
    }
}
