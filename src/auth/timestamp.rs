//! Request timestamps for Binance signed endpoints.
//!
//! Every signed request carries a `timestamp` in epoch milliseconds. The
//! exchange rejects requests whose timestamp falls outside its receive window,
//! so the value is taken from the wall clock when the request is built.

use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing the current time in epoch milliseconds.
///
/// The client stamps requests through this trait so tests can pin the clock
/// and predict exact signatures.
pub trait TimestampProvider: Send + Sync {
    /// Current time in milliseconds since the UNIX epoch.
    fn now_millis(&self) -> u64;
}

/// Wall-clock timestamp provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock.
    pub fn new() -> Self {
        Self
    }
}

impl TimestampProvider for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// A clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u64);

impl TimestampProvider for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}
