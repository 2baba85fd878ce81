use std::time::{Duration, Instant};

use crate::cores::options::BucketOption;
use crate::rate_limit::RateLimit;
use crate::types::{Timestamp, Tokens};

/// Caller-clocked token bucket.
///
/// The bucket holds a `value` that refills continuously at `rate` tokens per
/// second up to `capacity`. Every operation that looks at the value takes the
/// caller's current time and first accounts for the time elapsed since the
/// last update, as if the bucket had been filling all along.
///
/// # Algorithm Behavior
///
/// - The bucket starts full unless an option says otherwise
/// - Accrual never pushes the value above `capacity`
/// - If time goes backward it's ignored as already accounted for, so unused
///   tokens from the past can't be claimed once the bucket is full
/// - [`borrow`](Self::borrow) may drive the value negative; the returned
///   duration says how long until the overdraft is paid back
///
/// The bucket holds no lock. Wrap it in a `Mutex` to share it between threads.
///
/// # Example
///
/// ```rust
/// use std::time::{Duration, Instant};
/// use rate_guard_bucket::cores::TokenBucket;
///
/// let start = Instant::now();
///
/// // 2 tokens per second, burst of 5
/// let mut bucket = TokenBucket::new(start, 2.0, 5.0);
///
/// assert!(bucket.take(start, 4.0));
/// assert!(!bucket.take(start, 2.0));
///
/// // One second later 2 more tokens have arrived
/// assert!(bucket.take(start + Duration::from_secs(1), 3.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TokenBucket<T: Timestamp = Instant> {
    /// Tokens added per second
    rate: Tokens,
    /// Maximum value reachable through accrual
    capacity: Tokens,
    /// Current token count, negative while overdrawn
    value: Tokens,
    /// Time of the last accounting update
    last: T,
}

impl<T: Timestamp> TokenBucket<T> {
    /// Creates a full bucket refilling at `rate` tokens per second with at
    /// most `capacity` tokens of burst.
    ///
    /// Nothing is validated. Use
    /// [`TokenBucketConfig::try_build`](crate::cores::TokenBucketConfig::try_build)
    /// for a checked path.
    pub fn new(now: T, rate: Tokens, capacity: Tokens) -> Self {
        TokenBucket {
            rate,
            capacity,
            value: capacity, // Bucket starts full
            last: now,
        }
    }

    /// Creates a bucket like [`new`](Self::new), then applies `options` in order.
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use rate_guard_bucket::cores::{BucketOption, TokenBucket};
    ///
    /// let now = Duration::ZERO;
    /// let mut bucket = TokenBucket::with_options(now, 10.0, 100.0, [BucketOption::Value(0.0)]);
    /// assert_eq!(bucket.value(now), 0.0);
    /// ```
    pub fn with_options<I>(now: T, rate: Tokens, capacity: Tokens, options: I) -> Self
    where
        I: IntoIterator<Item = BucketOption>,
    {
        let mut bucket = Self::new(now, rate, capacity);
        for option in options {
            option.apply(&mut bucket, now);
        }
        bucket
    }

    /// Advances to `now`, then sets `rate` and `capacity` for future accounting.
    ///
    /// The current value is neither rescaled nor clamped to the new capacity.
    pub fn reconfigure(&mut self, now: T, rate: Tokens, capacity: Tokens) {
        self.advance(now);

        tracing::debug!(
            old_rate = self.rate,
            old_capacity = self.capacity,
            rate,
            capacity,
            value = self.value,
            "token bucket reconfigured"
        );

        self.rate = rate;
        self.capacity = capacity;
    }

    /// Checks whether at least `amount` tokens are available without taking them.
    #[inline]
    pub fn peek(&mut self, now: T, amount: Tokens) -> bool {
        self.advance(now);

        amount <= self.value
    }

    /// Takes `amount` tokens if there are enough of them.
    ///
    /// # Returns
    /// * `true` - The tokens were subtracted from the bucket
    /// * `false` - Not enough tokens; the value is left as it was
    #[inline]
    pub fn take(&mut self, now: T, amount: Tokens) -> bool {
        self.advance(now);

        if amount > self.value {
            return false;
        }

        self.value -= amount;
        true
    }

    /// Takes `amount` tokens whether or not they are there and returns how
    /// long to wait before using them.
    ///
    /// The wait is zero when the bucket could cover the amount. The amount
    /// may exceed capacity; callers that need a per-call ceiling must check
    /// [`capacity`](Self::capacity) themselves.
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use rate_guard_bucket::cores::TokenBucket;
    ///
    /// let now = Duration::ZERO;
    /// let mut bucket = TokenBucket::new(now, 2.0, 6.0);
    ///
    /// assert_eq!(bucket.borrow(now, 4.0), Duration::ZERO);
    /// assert_eq!(bucket.borrow(now, 4.0), Duration::from_secs(1));
    /// assert_eq!(bucket.borrow(now, 4.0), Duration::from_secs(3));
    /// ```
    pub fn borrow(&mut self, now: T, amount: Tokens) -> Duration {
        self.advance(now);

        self.value -= amount;

        if self.value >= 0.0 {
            return Duration::ZERO;
        }

        let wait = Duration::try_from_secs_f64(-self.value / self.rate).unwrap_or(Duration::MAX);

        tracing::debug!(
            amount,
            value = self.value,
            rate = self.rate,
            wait_secs = wait.as_secs_f64(),
            "token bucket overdrawn"
        );

        wait
    }

    /// Gives back `amount` tokens, e.g. the unused part of an earlier
    /// [`borrow`](Self::borrow).
    ///
    /// The amount is added before advancing, so the sum of the returned
    /// tokens and anything accrued since the last update is clamped to
    /// capacity together.
    pub fn return_tokens(&mut self, now: T, amount: Tokens) {
        self.value += amount;
        self.advance(now);
    }

    /// Returns the current rate in tokens per second.
    #[inline]
    pub fn rate(&self) -> Tokens {
        self.rate
    }

    /// Returns the current capacity.
    #[inline]
    pub fn capacity(&self) -> Tokens {
        self.capacity
    }

    /// Returns the value at `now`: the most that could be taken at this moment.
    #[inline]
    pub fn value(&mut self, now: T) -> Tokens {
        self.advance(now);

        self.value
    }

    /// Overwrites the value, drains or fills the bucket.
    ///
    /// No clamping is applied and time elapsed since the last update is
    /// discarded rather than accounted for. Returns the previous value.
    pub fn set(&mut self, now: T, value: Tokens) -> Tokens {
        let previous = self.value;
        self.value = value;
        self.last = now;

        previous
    }

    /// Accounts for tokens accrued between the last update and `now`.
    ///
    /// Backward time leaves the state untouched.
    #[inline]
    fn advance(&mut self, now: T) {
        let elapsed = now.seconds_since(&self.last);
        if elapsed < 0.0 {
            tracing::trace!(elapsed, "time went backward, ignoring");
            return;
        }

        self.value += self.rate * elapsed;
        self.last = now;

        if self.value > self.capacity {
            self.value = self.capacity;
        }
    }
}

impl<T: Timestamp> RateLimit<T> for TokenBucket<T> {
    #[inline(always)]
    fn try_acquire_at(&mut self, now: T, tokens: Tokens) -> bool {
        self.take(now, tokens)
    }

    #[inline(always)]
    fn capacity_remaining(&mut self, now: T) -> Tokens {
        self.value(now)
    }
}
