//! `intlscan config` – show where the config lives and what is in effect.

use anyhow::Result;
use intlscan_core::config::{self, ScanConfig};
use intlscan_core::logging;

pub fn run_config(cfg: &ScanConfig) -> Result<()> {
    println!("config file: {}", config::config_path()?.display());
    println!("log file:    {}", logging::log_file_path()?.display());
    println!("max_concurrent_requests = {}", cfg.max_concurrent_requests);
    println!("download_delay_ms       = {}", cfg.download_delay_ms);
    println!("request_timeout_secs    = {}", cfg.request_timeout_secs);
    println!("connect_timeout_secs    = {}", cfg.connect_timeout_secs);
    println!("user_agent              = {:?}", cfg.user_agent);
    println!("input_path              = {}", cfg.input_path.display());
    println!("output_path             = {}", cfg.output_path.display());
    println!("output_format           = {}", cfg.output_format);
    let retry = cfg.retry_policy();
    println!(
        "retry                   = {} attempt(s), backoff {:?}..{:?}",
        retry.max_attempts, retry.base_delay, retry.max_delay
    );
    Ok(())
}
