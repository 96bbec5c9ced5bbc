//! Homepage fetching.
//!
//! The scheduler only depends on the [`PageFetcher`] trait; [`CurlFetcher`]
//! is the libcurl-backed implementation used by the CLI.

mod error;

pub use error::FetchError;

use std::time::Duration;

/// A successfully fetched page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL after redirects.
    pub effective_url: String,
    pub status: u32,
    /// Response body, decoded as UTF-8 (invalid sequences replaced).
    pub body: String,
}

/// One blocking GET per call. Run from `spawn_blocking` in async code.
pub trait PageFetcher: Send + Sync + 'static {
    fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

/// libcurl transfer settings.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub user_agent: String,
    pub connect_timeout: Duration,
    /// Whole-transfer deadline.
    pub timeout: Duration,
    pub max_redirections: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"
                .to_string(),
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
            max_redirections: 10,
        }
    }
}

/// Fetches pages with a fresh libcurl easy handle per request.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    options: FetchOptions,
}

impl CurlFetcher {
    pub fn new(options: FetchOptions) -> Self {
        Self { options }
    }
}

impl PageFetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        // No SIGALRM-based timeouts; handles run on worker threads.
        easy.signal(false)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.options.max_redirections)?;
        easy.useragent(&self.options.user_agent)?;
        easy.accept_encoding("")?;
        easy.connect_timeout(self.options.connect_timeout)?;
        easy.timeout(self.options.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        let effective_url = easy.effective_url()?.unwrap_or(url).to_string();
        if !(200..300).contains(&status) {
            tracing::debug!(url, status, "non-success response");
            return Err(FetchError::Http(status));
        }

        Ok(FetchedPage {
            effective_url,
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}

impl From<&crate::config::ScanConfig> for FetchOptions {
    fn from(cfg: &crate::config::ScanConfig) -> Self {
        Self {
            user_agent: cfg.user_agent.clone(),
            connect_timeout: cfg.connect_timeout(),
            timeout: cfg.request_timeout(),
            ..Self::default()
        }
    }
}
