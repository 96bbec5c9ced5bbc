//! `intlscan crawl` – fetch and classify every listed homepage.

use anyhow::Result;
use intlscan_core::config::ScanConfig;
use intlscan_core::fetch::{CurlFetcher, FetchOptions, PageFetcher};
use intlscan_core::scheduler::{self, CrawlSettings, CrawlSummary};
use intlscan_core::sink::RecordSink;
use intlscan_core::url_model;
use std::sync::Arc;

pub async fn run_crawl_command(cfg: ScanConfig) -> Result<()> {
    let urls = url_model::load_urls(&cfg.input_path);
    let sink = RecordSink::create(&cfg.output_path, cfg.output_format)?;
    let fetcher: Arc<dyn PageFetcher> = Arc::new(CurlFetcher::new(FetchOptions::from(&cfg)));
    let settings = CrawlSettings::from(&cfg);

    println!(
        "Crawling {} site(s) from {} ({} concurrent, {} ms per-host delay)",
        urls.len(),
        cfg.input_path.display(),
        settings.max_concurrent,
        settings.download_delay.as_millis()
    );

    let summary = scheduler::run_crawl(urls, &settings, fetcher, sink).await?;
    print_summary(&summary);
    println!("Results written to {}", cfg.output_path.display());
    Ok(())
}

fn print_summary(summary: &CrawlSummary) {
    println!(
        "Done in {:.1}s: {} total, {} succeeded, {} failed, {} international",
        summary.elapsed.as_secs_f64(),
        summary.total,
        summary.succeeded,
        summary.failed,
        summary.international
    );
    for (status, count) in &summary.failures {
        println!("  {:<40} {}", status, count);
    }
}
