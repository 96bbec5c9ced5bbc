//! International verdict from matcher output.

use std::collections::BTreeSet;

/// Distinct country mentions needed on their own to call a page international.
pub const MIN_COUNTRIES_FOR_INTERNATIONAL: usize = 3;

/// A page is international if it names enough countries. Any indicator or
/// selector markup on its own is also enough.
///
/// Selector markup also adds an indicator, so `has_selector` never flips a
/// verdict the indicator count hasn't already decided.
pub fn classify(
    countries: &BTreeSet<&str>,
    indicators: &BTreeSet<&str>,
    has_selector: bool,
) -> bool {
    countries.len() >= MIN_COUNTRIES_FOR_INTERNATIONAL || !indicators.is_empty() || has_selector
}
