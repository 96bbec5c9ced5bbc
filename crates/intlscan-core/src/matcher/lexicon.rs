//! Fixed country and keyword lookups (lowercase).

/// Country names and codes; three or more distinct hits mark a page as international.
pub const COUNTRIES: &[&str] = &[
    "spain",
    "portugal",
    "france",
    "italy",
    "greece",
    "turkey",
    "croatia",
    "usa",
    "united states",
    "canada",
    "mexico",
    "brazil",
    "argentina",
    "uk",
    "united kingdom",
    "ireland",
    "germany",
    "netherlands",
    "belgium",
    "australia",
    "new zealand",
    "thailand",
    "philippines",
    "dubai",
    "uae",
    "switzerland",
    "austria",
    "poland",
    "czech republic",
    "hungary",
    "morocco",
    "egypt",
    "south africa",
    "cyprus",
    "malta",
    "montenegro",
    "bulgaria",
    "romania",
    "estonia",
    "latvia",
    "lithuania",
];

/// Phrases that on their own mark a page as international.
pub const INTERNATIONAL_KEYWORDS: &[&str] = &[
    "international",
    "worldwide",
    "global",
    "overseas",
    "abroad",
    "multiple countries",
    "country selector",
    "select country",
    "choose location",
    "browse by country",
    "properties worldwide",
];

/// Indicator added when selector markup is present.
pub const SELECTOR_INDICATOR: &str = "country_selector_element";
