//! Monotonic clock sources for timing scheduler stages.
//!
//! Timing is instrumentation only and never influences a schedule.
//! Stages read the clock through [`Clock`] so tests can substitute a
//! deterministic [`CounterClock`].

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock: Debug + Send + Sync {
    /// Time elapsed since an arbitrary fixed origin.
    fn monotonic(&self) -> Duration;

    /// Time elapsed since an earlier reading of this clock.
    fn elapsed_since(&self, start: Duration) -> Duration {
        self.monotonic().saturating_sub(start)
    }
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Creates a clock whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn monotonic(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Counter-based clock for tests.
///
/// Returns the stored nanosecond counter, then advances it by `step`.
/// With a non-zero step every timed stage measures exactly `step`.
#[derive(Debug, Default)]
pub struct CounterClock {
    nanos: AtomicU64,
    step: u64,
}

impl CounterClock {
    /// Creates a clock frozen at zero.
    pub const fn new() -> Self {
        Self {
            nanos: AtomicU64::new(0),
            step: 0,
        }
    }

    /// Creates a clock that advances by `step` after every reading.
    pub fn with_step(step: Duration) -> Self {
        Self {
            nanos: AtomicU64::new(0),
            step: saturating_nanos(step),
        }
    }

    /// Advances time by the given duration.
    pub fn advance(&self, by: Duration) {
        self.nanos.fetch_add(saturating_nanos(by), Ordering::SeqCst);
    }

    /// Sets time to a specific value.
    pub fn set(&self, at: Duration) {
        self.nanos.store(saturating_nanos(at), Ordering::SeqCst);
    }
}

impl Clock for CounterClock {
    fn monotonic(&self) -> Duration {
        Duration::from_nanos(self.nanos.fetch_add(self.step, Ordering::SeqCst))
    }
}

/// Whole nanoseconds in `d`, clamped to `u64::MAX`.
fn saturating_nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}
