//! Core trait for caller-clocked rate limiters.
//!
//! Code that only needs "may I spend this much now?" and "how much is left?"
//! can be written against [`RateLimit`] instead of a concrete bucket.

use crate::types::{Timestamp, Tokens};

/// The acquire/remaining pair every limiter in this crate provides.
///
/// Both operations advance the limiter to `now` first.
pub trait RateLimit<T: Timestamp> {
    /// Attempts to spend `tokens` at `now`.
    ///
    /// # Returns
    /// * `true` if the tokens were taken
    /// * `false` if there were not enough; nothing is spent
    fn try_acquire_at(&mut self, now: T, tokens: Tokens) -> bool;

    /// Returns how many tokens could be spent at `now`.
    ///
    /// May be negative after an overdraft.
    fn capacity_remaining(&mut self, now: T) -> Tokens;

    /// Like [`capacity_remaining`](Self::capacity_remaining), but never below zero.
    fn capacity_remaining_or_0(&mut self, now: T) -> Tokens {
        self.capacity_remaining(now).max(0.0)
    }
}
