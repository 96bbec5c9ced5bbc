//! CLI for intlscan.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use intlscan_core::config::{self, ScanConfig};
use intlscan_core::sink::OutputFormat;
use std::path::PathBuf;

use commands::{run_config, run_crawl_command, run_inspect, run_normalize};

/// Top-level CLI for intlscan.
#[derive(Debug, Parser)]
#[command(name = "intlscan")]
#[command(about = "intlscan: classify websites as international by their homepage", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch every homepage listed in the input file and write the results.
    Crawl(CrawlArgs),

    /// Print the normalized candidate URL for every input line.
    Normalize {
        /// Input file (defaults to `input_path` from config).
        input: Option<PathBuf>,
    },

    /// Classify a saved HTML page without fetching anything.
    Inspect {
        /// Path to the HTML file.
        html_file: PathBuf,
        /// URL to put in the record (defaults to the file path).
        #[arg(long)]
        url: Option<String>,
    },

    /// Show the config file path and effective settings.
    Config,
}

/// Flags for `intlscan crawl`; each one overrides the config value.
#[derive(Debug, Clone, Default, Args)]
pub struct CrawlArgs {
    /// Input file, one domain or URL per line.
    pub input: Option<PathBuf>,
    /// Output file (overwritten).
    #[arg(short, long, value_name = "OUT")]
    pub output: Option<PathBuf>,
    /// Output format: csv, tsv or jsonl.
    #[arg(long)]
    pub format: Option<OutputFormat>,
    /// Maximum requests in flight at once.
    #[arg(long, value_name = "N")]
    pub jobs: Option<usize>,
    /// Delay between requests to the same host, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,
    /// Per-request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
    /// User-Agent header to send.
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,
}

impl CrawlArgs {
    /// Config with these flags applied on top.
    pub fn apply(&self, mut cfg: ScanConfig) -> ScanConfig {
        if let Some(input) = &self.input {
            cfg.input_path = input.clone();
        }
        if let Some(output) = &self.output {
            cfg.output_path = output.clone();
        }
        if let Some(format) = self.format {
            cfg.output_format = format;
        }
        if let Some(jobs) = self.jobs {
            cfg.max_concurrent_requests = jobs.max(1);
        }
        if let Some(delay_ms) = self.delay_ms {
            cfg.download_delay_ms = delay_ms;
        }
        if let Some(timeout) = self.timeout {
            cfg.request_timeout_secs = timeout;
        }
        if let Some(ua) = &self.user_agent {
            cfg.user_agent = ua.clone();
        }
        cfg
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Crawl(args) => run_crawl_command(args.apply(cfg)).await?,
            CliCommand::Normalize { input } => {
                run_normalize(&input.unwrap_or_else(|| cfg.input_path.clone()))?
            }
            CliCommand::Inspect { html_file, url } => run_inspect(&html_file, url.as_deref())?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
