//! Output records: exactly one per candidate URL, success or failure.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::matcher::MatchResult;

pub const STATUS_SUCCESS: &str = "success";

/// The fixed five-field result for one URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    pub url: String,
    pub is_international: bool,
    /// Matched countries, sorted, joined with `", "`.
    pub countries_found: String,
    /// Matched indicators, sorted, joined with `", "`.
    pub international_indicators: String,
    /// `"success"` or `"error: <failure kind>"`.
    pub status: String,
}

impl OutputRecord {
    /// Column names, in output order.
    pub const FIELDS: [&'static str; 5] = [
        "url",
        "is_international",
        "countries_found",
        "international_indicators",
        "status",
    ];

    /// Field values in [`Self::FIELDS`] order.
    pub fn to_row(&self) -> [String; 5] {
        [
            self.url.clone(),
            self.is_international.to_string(),
            self.countries_found.clone(),
            self.international_indicators.clone(),
            self.status.clone(),
        ]
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

fn join_sorted(items: &BTreeSet<&str>) -> String {
    items.iter().copied().collect::<Vec<_>>().join(", ")
}

pub fn emit_success(
    url: &str,
    is_international: bool,
    countries: &BTreeSet<&str>,
    indicators: &BTreeSet<&str>,
) -> OutputRecord {
    OutputRecord {
        url: url.to_string(),
        is_international,
        countries_found: join_sorted(countries),
        international_indicators: join_sorted(indicators),
        status: STATUS_SUCCESS.to_string(),
    }
}

/// Success record straight from a match result.
pub fn emit_match(url: &str, matched: &MatchResult) -> OutputRecord {
    emit_success(
        url,
        matched.is_international(),
        &matched.countries,
        &matched.indicators,
    )
}

pub fn emit_failure(url: &str, failure_kind: &str) -> OutputRecord {
    OutputRecord {
        url: url.to_string(),
        is_international: false,
        countries_found: String::new(),
        international_indicators: String::new(),
        status: format!("error: {failure_kind}"),
    }
}
