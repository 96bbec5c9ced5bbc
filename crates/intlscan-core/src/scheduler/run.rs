//! Run a whole crawl: every candidate URL ends in exactly one output record.
//!
//! Keeps up to `max_concurrent` URLs in flight; when one finishes, the next
//! URL is started until the list is exhausted. Records go through a channel
//! to one blocking writer task, in completion order.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::fetch::{FetchError, FetchedPage, PageFetcher};
use crate::host_policy::{HostGate, HostKey};
use crate::record::{emit_failure, OutputRecord};
use crate::retry::run_with_retry;
use crate::sink::RecordSink;

use super::analyze::analyze_page;
use super::settings::CrawlSettings;
use super::summary::CrawlSummary;

const RECORD_CHANNEL_CAPACITY: usize = 64;

/// Shared by every URL task of one crawl.
struct CrawlContext {
    settings: CrawlSettings,
    fetcher: Arc<dyn PageFetcher>,
    gate: HostGate,
    records: mpsc::Sender<OutputRecord>,
}

/// Crawls `urls` and writes one record per URL to `sink`.
///
/// Per-URL failures never abort the run; only sink I/O errors are returned.
pub async fn run_crawl(
    urls: Vec<String>,
    settings: &CrawlSettings,
    fetcher: Arc<dyn PageFetcher>,
    sink: RecordSink,
) -> Result<CrawlSummary> {
    let started = Instant::now();
    let max_concurrent = settings.max_concurrent.max(1);
    let (tx, mut rx) = mpsc::channel::<OutputRecord>(RECORD_CHANNEL_CAPACITY);

    let writer = tokio::task::spawn_blocking(move || -> Result<CrawlSummary> {
        let mut sink = sink;
        let mut summary = CrawlSummary::default();
        while let Some(rec) = rx.blocking_recv() {
            if let Err(e) = sink.write_record(&rec) {
                tracing::error!(url = %rec.url, "writing record failed: {:#}", e);
                return Err(e);
            }
            summary.record(&rec);
        }
        sink.finish()?;
        Ok(summary)
    });

    tracing::info!(
        urls = urls.len(),
        max_concurrent,
        delay_ms = settings.download_delay.as_millis() as u64,
        timeout_secs = settings.request_timeout.as_secs(),
        "crawl started"
    );

    let ctx = Arc::new(CrawlContext {
        settings: *settings,
        fetcher,
        gate: HostGate::new(settings.download_delay),
        records: tx,
    });

    let mut pending: HashSet<usize> = (0..urls.len()).collect();
    let mut queue = urls.iter().cloned().enumerate();
    let mut join_set = tokio::task::JoinSet::new();

    loop {
        while join_set.len() < max_concurrent {
            // Writer gone (sink error): nothing more can be recorded.
            if ctx.records.is_closed() {
                break;
            }
            let Some((idx, url)) = queue.next() else {
                break;
            };
            let ctx = Arc::clone(&ctx);
            join_set.spawn(async move {
                let record = crawl_one(&url, &ctx).await;
                if ctx.records.send(record).await.is_err() {
                    tracing::warn!(url = %url, "record sink closed; record dropped");
                }
                idx
            });
        }

        let Some(res) = join_set.join_next().await else {
            break;
        };
        match res {
            Ok(idx) => {
                pending.remove(&idx);
            }
            Err(e) => tracing::error!("crawl task join: {}", e),
        }
    }

    if ctx.records.is_closed() {
        tracing::error!(
            unrecorded = pending.len(),
            "record writer stopped; crawl aborted"
        );
    } else {
        // A task that died before sending still owes its URL a record.
        let mut orphaned: Vec<usize> = pending.into_iter().collect();
        orphaned.sort_unstable();
        for idx in orphaned {
            let rec = emit_failure(&urls[idx], FetchError::Task(String::new()).kind_name());
            let _ = ctx.records.send(rec).await;
        }
    }

    // Close the channel so the writer drains and finishes.
    drop(ctx);

    let mut summary = writer.await.context("record writer task join")??;
    summary.elapsed = started.elapsed();
    tracing::info!(
        total = summary.total,
        succeeded = summary.succeeded,
        failed = summary.failed,
        international = summary.international,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "crawl completed"
    );
    Ok(summary)
}

/// Fetches and classifies one URL; failures become failure records.
async fn crawl_one(url: &str, ctx: &CrawlContext) -> OutputRecord {
    let record = match fetch_gated(url, ctx).await {
        Ok(page) => {
            tracing::debug!(
                url,
                effective_url = %page.effective_url,
                status = page.status,
                bytes = page.body.len(),
                "fetched"
            );
            let url_owned = url.to_string();
            tokio::task::spawn_blocking(move || analyze_page(&url_owned, &page.body))
                .await
                .unwrap_or_else(|e| {
                    tracing::error!(url, "page analysis failed: {}", e);
                    emit_failure(url, FetchError::Task(e.to_string()).kind_name())
                })
        }
        Err(e) => {
            tracing::warn!(url, kind = e.kind_name(), "fetch failed: {}", e);
            emit_failure(url, e.kind_name())
        }
    };
    tracing::debug!(url, status = %record.status, international = record.is_international, "record");
    record
}

/// The host permit moves into the blocking fetch and is released only when
/// the transfer (including retries) ends, even if the deadline fired first.
async fn fetch_gated(url: &str, ctx: &CrawlContext) -> Result<FetchedPage, FetchError> {
    let permit = match HostKey::from_url(url) {
        Ok(key) => Some(ctx.gate.acquire(&key).await),
        Err(e) => {
            tracing::debug!(url, "no host key, fetching ungated: {:#}", e);
            None
        }
    };

    let fetcher = Arc::clone(&ctx.fetcher);
    let retry = ctx.settings.retry;
    let target = url.to_string();
    let blocking = tokio::task::spawn_blocking(move || {
        let _permit = permit;
        run_with_retry(&retry, || fetcher.fetch(&target))
    });

    let deadline: Duration = ctx.settings.fetch_deadline();
    match tokio::time::timeout(deadline, blocking).await {
        Ok(Ok(result)) => result,
        Ok(Err(join)) => Err(FetchError::Task(join.to_string())),
        Err(_) => Err(FetchError::Timeout(deadline)),
    }
}
