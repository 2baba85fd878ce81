//! Core rate limiting primitives.
//!
//! Each core is a plain state machine driven by timestamps supplied by the
//! caller. Cores hold no locks and read no clocks, which keeps them
//! deterministic under test and usable in simulated time.
//!
//! # Available Cores
//!
//! - **[`TokenBucket`]** - Continuous refill up to a burst capacity, with
//!   checked takes and overdrafts that report a wait time
//!
//! # Thread Safety
//!
//! Mutating operations take `&mut self`. Shared use needs an outer lock
//! around every call.

pub mod token_bucket;
pub use token_bucket::TokenBucket;

pub mod options;
pub use options::BucketOption;
pub use options::TokenBucketConfig;
