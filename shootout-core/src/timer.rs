// SPDX-License-Identifier: Apache-2.0

//! Monotonic microsecond timing for the harness.
//!
//! Built on `std::time::Instant`; samples are only meaningful as
//! differences taken within the same process run.

use std::time::Instant;

/// Timer for measuring a single timed phase.
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed microseconds since the timer was started.
    pub fn elapsed_us(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }
}

/// Measure the execution time of a closure in microseconds.
pub fn measure<F, T>(f: F) -> (T, u64)
where
    F: FnOnce() -> T,
{
    let timer = Timer::start();
    let result = f();
    (result, timer.elapsed_us())
}
