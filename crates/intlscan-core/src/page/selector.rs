//! Country/language selector markup heuristics.

use scraper::{Html, Selector};
use std::sync::LazyLock;

/// Markup taken as evidence of a multi-region site. Any single match counts.
const SELECTOR_PATTERNS: &str = concat!(
    r#"select[class*="country"], select[id*="country"], "#,
    r#"div[class*="country-selector"], div[class*="language-selector"], "#,
    r#"a[href*="/country/"], a[href*="/location/"]"#,
);

static SELECTOR_MARKUP: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(SELECTOR_PATTERNS).expect("selector markup patterns are valid")
});

/// True if the document contains any country/language selector pattern.
pub fn has_selector_markup(doc: &Html) -> bool {
    doc.select(&SELECTOR_MARKUP).next().is_some()
}
