//! Fetch failure type and the failure-kind names written to `status`.

use std::time::Duration;

/// Why a homepage could not be fetched.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// libcurl reported a transport error (DNS, connect, TLS, timeout, ...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Response arrived with a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// The scheduler's deadline elapsed before the fetch finished.
    #[error("no response within {0:?}")]
    Timeout(Duration),
    /// The blocking fetch task panicked or was cancelled.
    #[error("fetch task failed: {0}")]
    Task(String),
}

impl FetchError {
    /// Failure category name, as used in `error: <kind>` statuses.
    pub fn kind_name(&self) -> &'static str {
        match self {
            FetchError::Curl(e) => curl_kind_name(e),
            FetchError::Http(_) => "HttpError",
            FetchError::Timeout(_) => "TimeoutError",
            FetchError::Task(_) => "TaskFailed",
        }
    }
}

fn curl_kind_name(e: &curl::Error) -> &'static str {
    if e.is_operation_timedout() {
        "TimeoutError"
    } else if e.is_couldnt_resolve_host() || e.is_couldnt_resolve_proxy() {
        "DNSLookupError"
    } else if e.is_couldnt_connect() {
        "ConnectionRefusedError"
    } else if e.is_ssl_connect_error()
        || e.is_peer_failed_verification()
        || e.is_ssl_certproblem()
        || e.is_ssl_cacert()
    {
        "SSLError"
    } else if e.is_url_malformed() || e.is_unsupported_protocol() {
        "InvalidURL"
    } else if e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
        || e.is_read_error()
        || e.is_partial_file()
    {
        "ConnectionLost"
    } else {
        "FetchError"
    }
}
