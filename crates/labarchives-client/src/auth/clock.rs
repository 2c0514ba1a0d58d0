/*
[INPUT]:  Wall clock (or a fixed instant in tests)
[OUTPUT]: Epoch milliseconds used as the signature `expires` value
[POS]:    Auth layer - injectable time source for call signing
[UPDATE]: When adding new clock sources
*/

use chrono::Utc;
use std::fmt::Debug;

/// Source of the current time in epoch milliseconds
pub trait Clock: Debug + Send + Sync {
    fn now_millis(&self) -> u64;
}

/// Reads the system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        Utc::now().timestamp_millis().max(0) as u64
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}
