//! Per-host request policy.
//!
//! URLs are keyed by `(scheme, host, port)`. The [`HostGate`] allows a single
//! request in flight per host and spaces consecutive requests to the same
//! host by a fixed delay; requests to different hosts never wait on each other.

mod gate;
mod key;

pub use gate::{HostGate, HostPermit};
pub use key::HostKey;
