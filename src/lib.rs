//! A caller-clocked token bucket for throughput limits.
//!
//! The bucket tracks a token value that refills continuously at a fixed rate
//! up to a fixed capacity. Callers query it, take from it, or overdraw it to
//! enforce limits such as bytes per second or requests per second.
//!
//! # Quick Start
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use rate_guard_bucket::cores::TokenBucket;
//!
//! let start = Instant::now();
//!
//! // 1 KiB per second with bursts of up to 2 KiB
//! let mut bucket = TokenBucket::new(start, 1024.0, 2048.0);
//!
//! if bucket.take(start, 1500.0) {
//!     println!("write allowed");
//! }
//!
//! // Reserve ahead of time and sleep for the returned delay instead of polling
//! let delay = bucket.borrow(start + Duration::from_millis(100), 1024.0);
//! println!("wait {:?} before writing", delay);
//! ```
//!
//! # Core Concepts
//!
//! ## Time Representation
//! Every operation takes the current time as an argument; nothing reads a
//! clock. Any [`Timestamp`] works: [`std::time::Instant`],
//! [`std::time::SystemTime`], or a [`std::time::Duration`] offset for
//! simulated time. Time going backward is ignored as already accounted for.
//!
//! ## Units
//! Rate is tokens per second. Capacity, amounts and values share one unit of
//! the caller's choosing.
//!
//! ## Error Handling
//! Bucket operations never fail. [`take`](cores::TokenBucket::take) and
//! [`peek`](cores::TokenBucket::peek) answer with a `bool`, and
//! [`borrow`](cores::TokenBucket::borrow) with a wait [`Duration`](std::time::Duration).
//! Only the checked constructor
//! [`TokenBucketConfig::try_build`](cores::TokenBucketConfig::try_build)
//! reports a [`ConfigError`].
//!
//! ## Thread Safety
//! The bucket is not synchronized. Wrap it in a `Mutex` to share it.

pub mod cores;
pub mod error;
pub mod rate_limit;
pub mod types;

pub use cores::{BucketOption, TokenBucket, TokenBucketConfig};
pub use error::{ConfigError, ConfigResult};
pub use rate_limit::RateLimit;
pub use types::{Timestamp, Tokens};
