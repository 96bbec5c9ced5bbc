//! `intlscan normalize` – show the candidate URLs an input file produces.

use anyhow::Result;
use intlscan_core::url_model;
use std::io::Write;
use std::path::Path;

pub fn run_normalize(input: &Path) -> Result<()> {
    let urls = url_model::load_urls(input);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for url in urls {
        writeln!(out, "{url}")?;
    }
    Ok(())
}
