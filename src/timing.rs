//! Wall-clock instrumentation for aggregator calls
//!
//! A measurement brackets exactly one call: data construction happens before
//! [`Timer::mark`] and reporting after [`Timer::elapsed`]. The clock is
//! monotonic wall time, not CPU time, so parallel runs show their real
//! latency (including the slowdown small inputs suffer from dispatch).

use crate::statistics::{ExecutionMode, Operation};
use std::time::{Duration, Instant};

/// Opaque monotonic clock reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimePoint(Instant);

/// Elapsed time of one measured call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSample {
    pub operation: Operation,
    pub mode: ExecutionMode,
    pub elapsed: Duration,
}

impl TimingSample {
    pub fn micros(&self) -> u128 {
        self.elapsed.as_micros()
    }

    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Monotonic timer
pub struct Timer;

impl Timer {
    pub fn mark() -> TimePoint {
        TimePoint(Instant::now())
    }

    pub fn elapsed(start: TimePoint) -> Duration {
        start.0.elapsed()
    }

    /// Time a single call to `f`
    pub fn measure<R, F>(operation: Operation, mode: ExecutionMode, f: F) -> (R, TimingSample)
    where
        F: FnOnce() -> R,
    {
        let start = Self::mark();
        let result = f();
        let elapsed = Self::elapsed(start);

        log::trace!("{} {} took {:?}", mode.as_str(), operation.as_str(), elapsed);

        (
            result,
            TimingSample {
                operation,
                mode,
                elapsed,
            },
        )
    }
}
