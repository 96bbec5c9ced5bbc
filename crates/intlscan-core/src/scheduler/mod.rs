//! Crawl scheduler.
//!
//! Coordinates the per-URL pipeline: host gate → fetch (with timeout and
//! retry policy) → extraction → matching → classification → record, with a
//! bounded number of URLs in flight and a single sink writer task.

mod analyze;
mod run;
mod settings;
mod summary;

pub use analyze::analyze_page;
pub use run::run_crawl;
pub use settings::CrawlSettings;
pub use summary::CrawlSummary;
