//! Token and time types shared by the bucket and its options.
//!
//! Tokens are plain `f64` values in a caller-chosen unit (bytes, requests, ...).
//! Time is whatever the caller passes in as `now`; the bucket never reads a clock.

use std::time::{Duration, Instant, SystemTime};

/// Alias for the token quantity type used for rates, capacities and values.
pub type Tokens = f64;

/// A point in time supplied by the caller on every operation.
///
/// Implementations report the signed distance between two points in
/// fractional seconds. A negative result means `self` is earlier than
/// `earlier`, which the bucket treats as zero elapsed time.
///
/// Provided implementations:
/// - [`Instant`] for real monotonic time
/// - [`SystemTime`] for wall clock time
/// - [`Duration`] as an offset from any epoch the caller picks, handy for
///   simulated time and tests
pub trait Timestamp: Copy {
    /// Seconds elapsed from `earlier` to `self`, negative if time went backward.
    fn seconds_since(&self, earlier: &Self) -> f64;
}

impl Timestamp for Instant {
    #[inline]
    fn seconds_since(&self, earlier: &Self) -> f64 {
        match self.checked_duration_since(*earlier) {
            Some(elapsed) => elapsed.as_secs_f64(),
            None => -earlier.duration_since(*self).as_secs_f64(),
        }
    }
}

impl Timestamp for SystemTime {
    #[inline]
    fn seconds_since(&self, earlier: &Self) -> f64 {
        match self.duration_since(*earlier) {
            Ok(elapsed) => elapsed.as_secs_f64(),
            Err(e) => -e.duration().as_secs_f64(),
        }
    }
}

impl Timestamp for Duration {
    #[inline]
    fn seconds_since(&self, earlier: &Self) -> f64 {
        match self.checked_sub(*earlier) {
            Some(elapsed) => elapsed.as_secs_f64(),
            None => -(*earlier - *self).as_secs_f64(),
        }
    }
}
