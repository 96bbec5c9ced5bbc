pub mod config;
pub mod logging;

pub mod classify;
pub mod fetch;
pub mod host_policy;
pub mod matcher;
pub mod page;
pub mod record;
pub mod retry;
pub mod scheduler;
pub mod sink;
pub mod url_model;
