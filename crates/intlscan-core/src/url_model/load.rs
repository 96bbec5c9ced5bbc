//! Load candidate URLs from a line-delimited input file.

use std::fs;
use std::path::Path;

use super::normalize;

/// Normalizes every non-blank line of `text`, preserving input order.
///
/// Lines are trimmed first (CRLF input leaves no trailing `\r`); lines that
/// are empty after trimming are skipped instead of producing `https://www./`.
pub fn parse_url_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(normalize)
        .collect()
}

/// Reads `path` and returns its candidate URLs.
///
/// A missing or unreadable file is logged and treated as an empty input so
/// the run still completes (with zero records).
pub fn load_urls(path: &Path) -> Vec<String> {
    let urls = match fs::read_to_string(path) {
        Ok(text) => parse_url_lines(&text),
        Err(e) => {
            tracing::error!("error loading input {}: {}", path.display(), e);
            Vec::new()
        }
    };
    tracing::info!("loaded {} URLs from {}", urls.len(), path.display());
    urls
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn blank_lines_are_skipped_and_order_kept() {
        let urls = parse_url_lines("b.com\n\nwww.a.com\n   \nhttps://c.com/x\n");
        assert_eq!(
            urls,
            vec![
                "https://www.b.com/",
                "https://www.a.com/",
                "https://www.c.com/",
            ]
        );
    }

    #[test]
    fn crlf_line_endings_are_trimmed() {
        let urls = parse_url_lines("one.com\r\ntwo.com\r\n");
        assert_eq!(urls, vec!["https://www.one.com/", "https://www.two.com/"]);
    }

    #[test]
    fn duplicates_are_not_removed() {
        let urls = parse_url_lines("a.com\nwww.a.com\n");
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0], urls[1]);
    }

    #[test]
    fn load_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, "spain-realty.com\nexample.org/about\n").unwrap();
        let urls = load_urls(f.path());
        assert_eq!(
            urls,
            vec!["https://www.spain-realty.com/", "https://www.example.org/"]
        );
    }

    #[test]
    fn missing_file_yields_no_urls() {
        let dir = tempfile::tempdir().unwrap();
        let urls = load_urls(&dir.path().join("does-not-exist.txt"));
        assert!(urls.is_empty());
    }
}
