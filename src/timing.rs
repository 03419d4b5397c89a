//! Wall-clock timing helpers

use std::time::{Duration, Instant};

/// High-resolution stopwatch backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Run `f` and return its result together with the elapsed time
pub fn measure<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let stopwatch = Stopwatch::start();
    let result = f();
    (result, stopwatch.elapsed())
}

/// Duration as fractional milliseconds
pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// `sequential / parallel`; above 1.0 means the parallel run was faster.
///
/// A zero parallel time gives `1.0` when the sequential time is also zero and
/// infinity otherwise.
pub fn speedup(sequential: Duration, parallel: Duration) -> f64 {
    if parallel.is_zero() {
        return if sequential.is_zero() { 1.0 } else { f64::INFINITY };
    }
    sequential.as_secs_f64() / parallel.as_secs_f64()
}
