//! Batch timing and throughput arithmetic.
//!
//! A [`Stopwatch`] is started right before a batch and stopped after the
//! pipeline drains; the elapsed nanoseconds feed [`Throughput::compute`].
//! Clocks are behind the [`Clock`] trait so hosts without `Instant` (the
//! browser) can supply their own and tests can use a fixed one.

use crate::error::BenchError;
use serde::Serialize;
use std::time::Instant;

/// Draw calls issued in each timed batch.
pub const DRAWS_PER_BATCH: u32 = 100;

/// Fragments shaded per target pixel per draw.
///
/// Assumes the quad covers the whole target. It does not quite, so the
/// reported figures are approximate; the constant is kept so results stay
/// comparable across runs.
pub const FILL_FRACTION: f64 = 1.0;

/// Fragments shaded by `draws` draws on a `width` x `height` target.
///
/// # Errors
///
/// Returns `BenchError::InvalidDimensions` if either dimension is zero.
pub fn batch_pixels(width: u32, height: u32, draws: u32) -> Result<f64, BenchError> {
    if width == 0 || height == 0 {
        return Err(BenchError::InvalidDimensions);
    }
    Ok(FILL_FRACTION * f64::from(width) * f64::from(height) * f64::from(draws))
}

/// Target size as the signed extent GL viewports take.
///
/// # Errors
///
/// Returns `BenchError::InvalidDimensions` if either dimension is zero or
/// does not fit in an `i32`.
pub fn viewport_extent(width: u32, height: u32) -> Result<(i32, i32), BenchError> {
    if width == 0 || height == 0 {
        return Err(BenchError::InvalidDimensions);
    }
    let w = i32::try_from(width).map_err(|_| BenchError::InvalidDimensions)?;
    let h = i32::try_from(height).map_err(|_| BenchError::InvalidDimensions)?;
    Ok((w, h))
}

/// A monotonic nanosecond time source.
pub trait Clock {
    /// Nanoseconds since an arbitrary fixed origin. Never decreases.
    fn now_ns(&self) -> u64;
}

/// Native monotonic clock backed by [`Instant`].
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
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
    fn now_ns(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// A started timer for one batch.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start_ns: u64,
}

impl Stopwatch {
    /// Records the current time of `clock` as the start instant.
    pub fn start(clock: &dyn Clock) -> Self {
        Self {
            start_ns: clock.now_ns(),
        }
    }

    /// Nanoseconds elapsed since [`Stopwatch::start`].
    pub fn stop(self, clock: &dyn Clock) -> u64 {
        clock.now_ns().saturating_sub(self.start_ns)
    }
}

/// Throughput derived from one timed batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Throughput {
    /// Mega-pixels shaded per second.
    pub mpps: f64,
    /// Full-target draws sustainable per frame at 60 Hz.
    pub dc60: f64,
}

impl Throughput {
    /// Computes throughput for `draws` full-target draws on a
    /// `width` x `height` target that took `elapsed_ns` nanoseconds.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::InvalidDimensions` if either dimension is zero
    /// and `BenchError::ZeroElapsed` if no time elapsed.
    pub fn compute(
        width: u32,
        height: u32,
        draws: u32,
        elapsed_ns: u64,
    ) -> Result<Self, BenchError> {
        let pixels = batch_pixels(width, height, draws)?;
        if elapsed_ns == 0 {
            return Err(BenchError::ZeroElapsed);
        }

        let area = f64::from(width) * f64::from(height);
        let seconds = elapsed_ns as f64 / 1_000_000_000.0;

        Ok(Self {
            mpps: pixels / seconds / 1_000_000.0,
            dc60: pixels / seconds / area / 60.0,
        })
    }

    /// The report line printed for one run.
    pub fn report_line(&self, label: &str) -> String {
        format!("test {label}, Mpps {:.6}, dc = {:.6}", self.mpps, self.dc60)
    }
}
