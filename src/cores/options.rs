//! Construction options and configuration for [`TokenBucket`].

use crate::cores::TokenBucket;
use crate::error::{ConfigError, ConfigResult};
use crate::types::{Timestamp, Tokens};

/// A modifier applied to a freshly created bucket, after its defaults are set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BucketOption {
    /// Start with this many tokens instead of a full bucket.
    ///
    /// Applied through [`TokenBucket::set`], which does not clamp; a value
    /// above capacity is clamped by the first operation that advances time.
    Value(Tokens),
}

impl BucketOption {
    /// Applies the option to `bucket` created at `now`.
    pub fn apply<T: Timestamp>(self, bucket: &mut TokenBucket<T>, now: T) {
        match self {
            BucketOption::Value(value) => {
                bucket.set(now, value);
            }
        }
    }
}

/// Configuration structure for creating a [`TokenBucket`].
///
/// ```rust
/// use std::time::Duration;
/// use rate_guard_bucket::cores::TokenBucketConfig;
///
/// let now = Duration::ZERO;
/// let mut bucket = TokenBucketConfig::new(1024.0, 2048.0)
///     .with_value(512.0)
///     .try_build(now)
///     .unwrap();
///
/// assert_eq!(bucket.value(now), 512.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenBucketConfig {
    /// Tokens added per second.
    pub rate: Tokens,
    /// Maximum number of tokens the bucket can accrue.
    pub capacity: Tokens,
    /// Initial value; a full bucket when `None`.
    pub initial_value: Option<Tokens>,
}

impl TokenBucketConfig {
    /// Creates a new configuration for a bucket that starts full.
    pub fn new(rate: Tokens, capacity: Tokens) -> Self {
        Self {
            rate,
            capacity,
            initial_value: None,
        }
    }

    /// Sets the initial value.
    pub fn with_value(mut self, value: Tokens) -> Self {
        self.initial_value = Some(value);
        self
    }

    /// The options this configuration implies, in application order.
    pub fn options(&self) -> impl Iterator<Item = BucketOption> {
        self.initial_value.map(BucketOption::Value).into_iter()
    }

    /// Checks that the configuration describes a meaningful limit.
    ///
    /// # Returns
    /// * `Err(ConfigError::InvalidRate)` - Rate is not finite or not above zero
    /// * `Err(ConfigError::InvalidCapacity)` - Capacity is not finite or negative
    /// * `Err(ConfigError::InvalidInitialValue)` - Initial value is not finite
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.rate.is_finite() || self.rate <= 0.0 {
            return Err(ConfigError::InvalidRate { rate: self.rate });
        }
        if !self.capacity.is_finite() || self.capacity < 0.0 {
            return Err(ConfigError::InvalidCapacity {
                capacity: self.capacity,
            });
        }
        if let Some(value) = self.initial_value {
            if !value.is_finite() {
                return Err(ConfigError::InvalidInitialValue { value });
            }
        }
        Ok(())
    }

    /// Builds the bucket at `now` without validating.
    pub fn build<T: Timestamp>(&self, now: T) -> TokenBucket<T> {
        TokenBucket::with_options(now, self.rate, self.capacity, self.options())
    }

    /// Validates, then builds the bucket at `now`.
    pub fn try_build<T: Timestamp>(&self, now: T) -> ConfigResult<TokenBucket<T>> {
        self.validate()?;
        Ok(self.build(now))
    }
}
