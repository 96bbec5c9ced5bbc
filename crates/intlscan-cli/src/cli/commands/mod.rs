//! CLI command handlers, one file per command.

mod config;
mod crawl;
mod inspect;
mod normalize;

pub use config::run_config;
pub use crawl::run_crawl_command;
pub use inspect::run_inspect;
pub use normalize::run_normalize;
