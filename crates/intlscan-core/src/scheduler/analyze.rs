//! Fetched HTML → output record.

use crate::matcher::match_document;
use crate::page::PageDocument;
use crate::record::{emit_match, OutputRecord};

/// Extracts, matches and classifies one page body.
pub fn analyze_page(url: &str, html: &str) -> OutputRecord {
    let page = PageDocument::from_html(html);
    let matched = match_document(&page);
    tracing::debug!(
        url,
        countries = matched.countries.len(),
        indicators = matched.indicators.len(),
        has_selector = matched.has_selector,
        "page matched"
    );
    emit_match(url, &matched)
}
