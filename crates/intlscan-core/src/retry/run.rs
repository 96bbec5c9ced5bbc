//! Retry loop: run a fetch until success or the policy says stop.

use super::classify;
use super::policy::{RetryDecision, RetryPolicy};
use crate::fetch::FetchError;

/// Runs `f` until it succeeds or the policy stops retrying, sleeping the
/// backoff between attempts. Blocking; call from `spawn_blocking`.
pub fn run_with_retry<T, F>(policy: &RetryPolicy, mut f: F) -> Result<T, FetchError>
where
    F: FnMut() -> Result<T, FetchError>,
{
    let mut attempt = 1u32;
    loop {
        match f() {
            Ok(v) => return Ok(v),
            Err(e) => {
                let kind = classify::classify(&e);
                match policy.decide(attempt, kind) {
                    RetryDecision::NoRetry => return Err(e),
                    RetryDecision::RetryAfter(d) => {
                        tracing::debug!(attempt, ?kind, delay_ms = d.as_millis() as u64, "retrying fetch");
                        std::thread::sleep(d);
                        attempt += 1;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(2),
        }
    }

    #[test]
    fn single_attempt_by_default() {
        let mut calls = 0;
        let res: Result<(), _> = run_with_retry(&RetryPolicy::default(), || {
            calls += 1;
            Err(FetchError::Http(503))
        });
        assert!(res.is_err());
        assert_eq!(calls, 1);
    }

    #[test]
    fn retries_until_success() {
        let mut calls = 0;
        let res = run_with_retry(&fast_policy(3), || {
            calls += 1;
            if calls < 3 {
                Err(FetchError::Http(502))
            } else {
                Ok(calls)
            }
        });
        assert_eq!(res.unwrap(), 3);
    }

    #[test]
    fn permanent_failure_stops_immediately() {
        let mut calls = 0;
        let res: Result<(), _> = run_with_retry(&fast_policy(5), || {
            calls += 1;
            Err(FetchError::Http(404))
        });
        assert!(matches!(res, Err(FetchError::Http(404))));
        assert_eq!(calls, 1);
    }
}
