use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use rate_guard_bucket::cores::TokenBucket;
use rate_guard_bucket::rate_limit::RateLimit;

/// Helper function to create a TokenBucket as RateLimit
fn create_token_bucket_limiter(rate: f64, capacity: f64) -> Box<dyn RateLimit<Duration>> {
    Box::new(TokenBucket::new(Duration::ZERO, rate, capacity))
}

fn at(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

#[test]
fn test_rate_limit_initial_capacity() {
    let mut limiter = create_token_bucket_limiter(10.0, 100.0);

    assert_eq!(limiter.capacity_remaining(at(0)), 100.0);
    assert!(limiter.try_acquire_at(at(0), 100.0));
    assert_eq!(limiter.capacity_remaining(at(0)), 0.0);
    assert!(!limiter.try_acquire_at(at(0), 1.0));
}

#[test]
fn test_rate_limit_refill() {
    let mut limiter = create_token_bucket_limiter(10.0, 50.0);
    assert!(limiter.try_acquire_at(at(0), 50.0));

    assert_eq!(limiter.capacity_remaining(at(500)), 5.0);
    assert_eq!(limiter.capacity_remaining(at(3_000)), 30.0);
    assert_eq!(limiter.capacity_remaining(at(10_000)), 50.0);
}

#[test]
fn test_rate_limit_or_0_hides_overdraft() {
    let mut bucket = TokenBucket::new(at(0), 2.0, 4.0);
    bucket.borrow(at(0), 10.0);

    assert_eq!(bucket.capacity_remaining(at(0)), -6.0);
    assert_eq!(bucket.capacity_remaining_or_0(at(0)), 0.0);
    assert_eq!(bucket.capacity_remaining_or_0(at(4_000)), 2.0);
}

#[test]
fn test_shared_bucket_behind_mutex() {
    let bucket = Arc::new(Mutex::new(TokenBucket::new(at(0), 1.0, 100.0)));
    let mut handles = vec![];

    for _ in 0..4 {
        let bucket = Arc::clone(&bucket);
        handles.push(thread::spawn(move || {
            let mut granted = 0;
            for _ in 0..50 {
                if bucket.lock().unwrap().take(at(0), 1.0) {
                    granted += 1;
                }
            }
            granted
        }));
    }

    let total: u32 = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(total, 100);
    assert_eq!(bucket.lock().unwrap().value(at(0)), 0.0);
}
