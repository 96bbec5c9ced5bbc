//! Retry and backoff policy for homepage fetches.
//!
//! Fetch failures are classified into coarse [`ErrorKind`]s and a capped
//! exponential backoff decides whether another attempt is made. The default budget is a single
//! attempt, so nothing is retried unless the config raises it.

mod classify;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error, classify_http_status};
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
