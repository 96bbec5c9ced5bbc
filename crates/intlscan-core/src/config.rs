use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::retry::RetryPolicy;
use crate::sink::OutputFormat;

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per URL (including the first). 1 = no retries.
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.25 = 250ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 1,
            base_delay_secs: 0.25,
            max_delay_secs: 30,
        }
    }
}

impl RetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts.max(1),
            base_delay: Duration::from_secs_f64(self.base_delay_secs.max(0.0)),
            max_delay: Duration::from_secs(self.max_delay_secs),
        }
    }
}

/// Global configuration loaded from `~/.config/intlscan/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Maximum number of requests in flight across all hosts.
    pub max_concurrent_requests: usize,
    /// Minimum delay between two requests to the same host, in milliseconds.
    pub download_delay_ms: u64,
    /// Total time allowed for one GET, in seconds.
    pub request_timeout_secs: u64,
    /// Time allowed to establish the connection, in seconds.
    pub connect_timeout_secs: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Default input file (one domain or URL per line).
    pub input_path: PathBuf,
    /// Default output file; overwritten on every run.
    pub output_path: PathBuf,
    /// Output format: "csv" (default), "tsv" or "jsonl".
    #[serde(default)]
    pub output_format: OutputFormat,
    /// Optional retry policy; if missing, a single attempt is made.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_concurrent_requests: 8,
            download_delay_ms: 500,
            request_timeout_secs: 30,
            connect_timeout_secs: 15,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"
                .to_string(),
            input_path: PathBuf::from("websites.txt"),
            output_path: PathBuf::from("international_results.csv"),
            output_format: OutputFormat::Csv,
            retry: None,
        }
    }
}

impl ScanConfig {
    pub fn download_delay(&self) -> Duration {
        Duration::from_millis(self.download_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs.max(1))
    }

    /// Retry policy from the `[retry]` section, or a single attempt.
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
            .as_ref()
            .map(RetryConfig::to_policy)
            .unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("intlscan")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ScanConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ScanConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ScanConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ScanConfig::default();
        assert_eq!(cfg.max_concurrent_requests, 8);
        assert_eq!(cfg.download_delay(), Duration::from_millis(500));
        assert_eq!(cfg.request_timeout(), Duration::from_secs(30));
        assert_eq!(cfg.output_path, PathBuf::from("international_results.csv"));
        assert_eq!(cfg.output_format, OutputFormat::Csv);
        assert_eq!(cfg.retry_policy().max_attempts, 1);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ScanConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ScanConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.max_concurrent_requests, cfg.max_concurrent_requests);
        assert_eq!(parsed.download_delay_ms, cfg.download_delay_ms);
        assert_eq!(parsed.user_agent, cfg.user_agent);
        assert_eq!(parsed.input_path, cfg.input_path);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            max_concurrent_requests = 2
            download_delay_ms = 0
            request_timeout_secs = 5
            connect_timeout_secs = 2
            user_agent = "intlscan-test"
            input_path = "in.txt"
            output_path = "out.tsv"
            output_format = "tsv"
        "#;
        let cfg: ScanConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.max_concurrent_requests, 2);
        assert_eq!(cfg.download_delay(), Duration::ZERO);
        assert_eq!(cfg.request_timeout(), Duration::from_secs(5));
        assert_eq!(cfg.user_agent, "intlscan-test");
        assert_eq!(cfg.output_format, OutputFormat::Tsv);
        assert!(cfg.retry.is_none());
    }

    #[test]
    fn config_toml_missing_format_defaults_to_csv() {
        let toml = r#"
            max_concurrent_requests = 8
            download_delay_ms = 500
            request_timeout_secs = 30
            connect_timeout_secs = 15
            user_agent = "ua"
            input_path = "websites.txt"
            output_path = "international_results.csv"
        "#;
        let cfg: ScanConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.output_format, OutputFormat::Csv);
    }

    #[test]
    fn config_toml_retry_section() {
        let toml = r#"
            max_concurrent_requests = 8
            download_delay_ms = 500
            request_timeout_secs = 30
            connect_timeout_secs = 15
            user_agent = "ua"
            input_path = "websites.txt"
            output_path = "international_results.csv"

            [retry]
            max_attempts = 3
            base_delay_secs = 0.5
            max_delay_secs = 15
        "#;
        let cfg: ScanConfig = toml::from_str(toml).unwrap();
        let policy = cfg.retry_policy();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.base_delay, Duration::from_millis(500));
        assert_eq!(policy.max_delay, Duration::from_secs(15));
    }

    #[test]
    fn zero_attempts_is_clamped_to_one() {
        let retry = RetryConfig {
            max_attempts: 0,
            ..RetryConfig::default()
        };
        assert_eq!(retry.to_policy().max_attempts, 1);
    }
}
