//! Content matcher: country and keyword hits plus the selector signal.
//!
//! Every lookup entry is matched as a whole token (`\b<entry>\b`) against the
//! lowercased, whitespace-collapsed page text followed by the lowercased link
//! text, so "uk" never matches inside "ukraine" or "bunker".

mod lexicon;

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use crate::page::PageDocument;

pub use lexicon::{COUNTRIES, INTERNATIONAL_KEYWORDS, SELECTOR_INDICATOR};

/// One compiled word-boundary pattern per lookup entry.
type Patterns = Vec<(&'static str, Regex)>;

fn compile(entries: &[&'static str]) -> Patterns {
    entries
        .iter()
        .map(|&entry| {
            let pattern = format!(r"\b{}\b", regex::escape(entry));
            let re = Regex::new(&pattern).expect("escaped lookup entry is a valid regex");
            (entry, re)
        })
        .collect()
}

static COUNTRY_PATTERNS: LazyLock<Patterns> = LazyLock::new(|| compile(COUNTRIES));
static KEYWORD_PATTERNS: LazyLock<Patterns> = LazyLock::new(|| compile(INTERNATIONAL_KEYWORDS));

/// Matches found in one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    pub countries: BTreeSet<&'static str>,
    /// Keyword hits, plus [`SELECTOR_INDICATOR`] when selector markup was seen.
    pub indicators: BTreeSet<&'static str>,
    pub has_selector: bool,
}

impl MatchResult {
    pub fn is_international(&self) -> bool {
        crate::classify::classify(&self.countries, &self.indicators, self.has_selector)
    }
}

/// Builds the search corpus: collapsed lowercase text, a space, lowercase links.
pub(crate) fn corpus(document_text: &str, link_texts: &str) -> String {
    let lowered = document_text.to_lowercase();
    let mut out = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
    out.push(' ');
    out.push_str(&link_texts.to_lowercase());
    out
}

fn hits(patterns: &Patterns, corpus: &str) -> BTreeSet<&'static str> {
    patterns
        .iter()
        .filter(|(_, re)| re.is_match(corpus))
        .map(|(entry, _)| *entry)
        .collect()
}

/// Matches countries and keywords in the given text and folds in the selector signal.
pub fn match_content(
    document_text: &str,
    link_texts: &str,
    has_selector_markup: bool,
) -> MatchResult {
    let corpus = corpus(document_text, link_texts);
    let countries = hits(&COUNTRY_PATTERNS, &corpus);
    let mut indicators = hits(&KEYWORD_PATTERNS, &corpus);
    if has_selector_markup {
        indicators.insert(SELECTOR_INDICATOR);
    }
    MatchResult {
        countries,
        indicators,
        has_selector: has_selector_markup,
    }
}

/// Matches an extracted page.
pub fn match_document(page: &PageDocument) -> MatchResult {
    match_content(&page.text, &page.links, page.has_selector_markup)
}
