//! Wall-clock source for case and log timestamps
//!
//! Timestamps are local wall time at second precision, which is also the
//! resolution case ids are generated at.

use chrono::{Duration, Local, NaiveDateTime, Timelike};
use parking_lot::Mutex;
use std::fmt::Debug;

/// Source of the current time
pub trait Clock: Send + Sync + Debug {
    /// Current local time, truncated to whole seconds
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        truncate_to_seconds(Local::now().naive_local())
    }
}

/// Manually driven clock
///
/// Stays on the same instant until [`FixedClock::set`] or
/// [`FixedClock::advance`] is called.
#[derive(Debug)]
pub struct FixedClock {
    inner: Mutex<NaiveDateTime>,
}

impl FixedClock {
    /// Create clock pinned to `at`
    #[inline]
    #[must_use]
    pub fn new(at: NaiveDateTime) -> Self {
        Self {
            inner: Mutex::new(truncate_to_seconds(at)),
        }
    }

    /// Move the clock to `at`
    pub fn set(&self, at: NaiveDateTime) {
        *self.inner.lock() = truncate_to_seconds(at);
    }

    /// Move the clock forward by `secs` seconds
    pub fn advance(&self, secs: i64) {
        let mut guard = self.inner.lock();
        *guard += Duration::seconds(secs);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.inner.lock()
    }
}

fn truncate_to_seconds(at: NaiveDateTime) -> NaiveDateTime {
    at.with_nanosecond(0).unwrap_or(at)
}
