//! error.rs
//! Configuration errors reported by the checked construction path.
//!
//! Bucket operations themselves never fail; only
//! [`TokenBucketConfig::validate`](crate::cores::TokenBucketConfig::validate)
//! and [`TokenBucketConfig::try_build`](crate::cores::TokenBucketConfig::try_build)
//! return these.

use crate::types::Tokens;
use thiserror::Error;

/// A bucket configuration that cannot describe a meaningful limit.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Rate must be a finite number greater than zero.
    #[error("invalid rate {rate}: must be finite and greater than 0 tokens per second")]
    InvalidRate { rate: Tokens },
    /// Capacity must be a finite, non-negative number.
    #[error("invalid capacity {capacity}: must be finite and not negative")]
    InvalidCapacity { capacity: Tokens },
    /// Initial value must be finite. It may be negative or above capacity.
    #[error("invalid initial value {value}: must be finite")]
    InvalidInitialValue { value: Tokens },
}

/// Result type for checked bucket construction.
pub type ConfigResult<T> = Result<T, ConfigError>;
