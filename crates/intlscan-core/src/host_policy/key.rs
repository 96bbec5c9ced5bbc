use anyhow::{Context, Result};
use std::fmt;

/// Key used to serialise requests per origin.
///
/// Paths are dropped so every URL on the same origin shares one gate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostKey {
    pub scheme: String,
    pub host: String,
    pub port: u16,
}

impl HostKey {
    /// Construct a host key from a URL string.
    pub fn from_url(url: &str) -> Result<Self> {
        let parsed =
            url::Url::parse(url).with_context(|| format!("invalid URL for host key: {url}"))?;

        let scheme = parsed.scheme().to_string();
        let host = parsed
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| anyhow::anyhow!("URL missing host: {url}"))?
            .to_string();
        let port = parsed
            .port_or_known_default()
            .ok_or_else(|| anyhow::anyhow!("URL missing port and unknown default: {url}"))?;

        Ok(Self { scheme, host, port })
    }
}

impl fmt::Display for HostKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.scheme, self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scheme_host_port() {
        let key = HostKey::from_url("https://www.example.com:8443/path").unwrap();
        assert_eq!(key.scheme, "https");
        assert_eq!(key.host, "www.example.com");
        assert_eq!(key.port, 8443);
    }

    #[test]
    fn uses_default_port_when_missing() {
        let key = HostKey::from_url("https://www.example.com/").unwrap();
        assert_eq!(key.port, 443);
        assert_eq!(key.to_string(), "https://www.example.com:443");
    }

    #[test]
    fn paths_share_a_key() {
        assert_eq!(
            HostKey::from_url("https://a.com/x").unwrap(),
            HostKey::from_url("https://a.com/y?z=1").unwrap()
        );
    }

    #[test]
    fn unparseable_candidate_has_no_key() {
        assert!(HostKey::from_url("https://www.bad host.com/").is_err());
    }
}
