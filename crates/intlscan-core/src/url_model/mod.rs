//! Candidate URL modeling.
//!
//! Turns a raw input line (a bare domain or any URL on the site) into
//! the canonical homepage form `https://www.<host>/`, and loads those from a
//! line-delimited file.

mod load;

pub use load::{load_urls, parse_url_lines};

const WWW_PREFIX: &str = "www.";

/// Normalizes one raw input line into a candidate homepage URL.
///
/// Never fails: input that does not parse as a URL falls back to everything
/// before the first `/`, and an empty host still yields `https://www./`.
///
/// # Examples
///
/// - `normalize("example.com")` → `"https://www.example.com/"`
/// - `normalize("https://www.example.com/page")` → `"https://www.example.com/"`
pub fn normalize(raw: &str) -> String {
    let host = host_of(raw);
    let host = host.strip_prefix(WWW_PREFIX).unwrap_or(&host);
    format!("https://www.{host}/")
}

fn has_http_scheme(raw: &str) -> bool {
    let lower = raw
        .get(..8)
        .unwrap_or(raw)
        .to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Host (with explicit port, if any) of `raw`, or the text before its first `/`.
fn host_of(raw: &str) -> String {
    let with_scheme = if has_http_scheme(raw) {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };

    let parsed = url::Url::parse(&with_scheme).ok().and_then(|u| {
        let host = u.host_str().filter(|h| !h.is_empty())?.to_string();
        Some(match u.port() {
            Some(port) => format!("{host}:{port}"),
            None => host,
        })
    });

    parsed.unwrap_or_else(|| raw.split('/').next().unwrap_or_default().to_string())
}
