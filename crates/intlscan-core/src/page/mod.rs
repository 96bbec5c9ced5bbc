//! Page extraction: turn fetched HTML into the text the matcher searches.
//!
//! A [`PageDocument`] holds three things pulled from the markup:
//! - the visible text under `<body>` (scripts and styles excluded)
//! - every anchor's `href` plus its direct text
//! - whether the page carries a country/language selector pattern

mod selector;

use scraper::{Html, Node, Selector};
use std::sync::LazyLock;

pub use selector::has_selector_markup;

/// Elements whose text never renders.
const HIDDEN_TEXT_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

static BODY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("body selector is valid"));

static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("anchor selector is valid"));

/// Extracted, not yet normalized, searchable content of one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageDocument {
    /// Text nodes under `<body>`, joined with single spaces.
    pub text: String,
    /// Anchor hrefs and anchor texts, joined with single spaces.
    pub links: String,
    /// True if any selector pattern matched (see [`has_selector_markup`]).
    pub has_selector_markup: bool,
}

impl PageDocument {
    /// Parses `html` and extracts text, links and the selector flag.
    pub fn from_html(html: &str) -> Self {
        let doc = Html::parse_document(html);
        Self {
            text: visible_text(&doc),
            links: link_text(&doc),
            has_selector_markup: has_selector_markup(&doc),
        }
    }
}

fn is_hidden(node: scraper::ElementRef<'_>) -> bool {
    HIDDEN_TEXT_ELEMENTS.contains(&node.value().name())
}

fn visible_text(doc: &Html) -> String {
    let root = doc
        .select(&BODY)
        .next()
        .unwrap_or_else(|| doc.root_element());

    let mut parts: Vec<&str> = Vec::new();
    for node in root.descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node
            .ancestors()
            .filter_map(scraper::ElementRef::wrap)
            .any(is_hidden);
        if !hidden {
            parts.push(text);
        }
    }
    parts.join(" ")
}

fn link_text(doc: &Html) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for anchor in doc.select(&ANCHOR) {
        if let Some(href) = anchor.value().attr("href") {
            parts.push(href);
        }
        for child in anchor.children() {
            if let Node::Text(text) = child.value() {
                parts.push(text);
            }
        }
    }
    parts.join(" ")
}
