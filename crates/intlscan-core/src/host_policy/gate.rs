//! Per-host mutual exclusion with a cool-down between requests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::OwnedMutexGuard;
use tokio::time::Instant;

use super::HostKey;

#[derive(Debug, Default)]
struct HostSlot {
    /// When the previous request to this host was let through.
    last_started: Option<Instant>,
    requests: u64,
}

/// Hands out at most one [`HostPermit`] per host at a time.
#[derive(Debug)]
pub struct HostGate {
    delay: Duration,
    slots: Mutex<HashMap<HostKey, Arc<tokio::sync::Mutex<HostSlot>>>>,
}

/// Held for the duration of one request; dropping it releases the host.
#[derive(Debug)]
pub struct HostPermit {
    slot: OwnedMutexGuard<HostSlot>,
}

impl HostPermit {
    /// Requests let through to this host so far, this one included.
    pub fn sequence(&self) -> u64 {
        self.slot.requests
    }
}

impl HostGate {
    /// `delay` is the minimum spacing between request starts on one host.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Number of distinct hosts seen so far.
    pub fn hosts(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn slot(&self, key: &HostKey) -> Arc<tokio::sync::Mutex<HostSlot>> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(key.clone()).or_default())
    }

    /// Waits until no other request to `key` is in flight and the delay since
    /// the previous request has elapsed.
    pub async fn acquire(&self, key: &HostKey) -> HostPermit {
        let mut slot = self.slot(key).lock_owned().await;
        if let Some(last) = slot.last_started {
            let ready = last + self.delay;
            if ready > Instant::now() {
                tracing::trace!(host = %key, "waiting for host cool-down");
                tokio::time::sleep_until(ready).await;
            }
        }
        slot.last_started = Some(Instant::now());
        slot.requests += 1;
        HostPermit { slot }
    }
}
