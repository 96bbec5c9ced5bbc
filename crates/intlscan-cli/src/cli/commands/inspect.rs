//! `intlscan inspect` – classify a saved page offline.

use anyhow::{Context, Result};
use intlscan_core::scheduler::analyze_page;
use intlscan_core::sink::{OutputFormat, RecordSink};
use std::fs;
use std::path::Path;

pub fn run_inspect(html_file: &Path, url: Option<&str>) -> Result<()> {
    let bytes = fs::read(html_file).with_context(|| format!("read {}", html_file.display()))?;
    let html = String::from_utf8_lossy(&bytes);
    let url = url
        .map(str::to_string)
        .unwrap_or_else(|| html_file.display().to_string());

    let record = analyze_page(&url, &html);
    let mut sink = RecordSink::from_writer(std::io::stdout(), OutputFormat::Csv)?;
    sink.write_record(&record)?;
    sink.finish()?;
    Ok(())
}
