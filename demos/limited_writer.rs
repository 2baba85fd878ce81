//! Rejects writes that would exceed 1 KiB/s with a 2 KiB burst.
//!
//! Time is simulated: the loop advances a `Duration` clock by 500 ms per write.

use std::io::{self, Write};
use std::time::Duration;

use rate_guard_bucket::{RateLimit, TokenBucket};
use tracing_subscriber::EnvFilter;

/// A writer that refuses data the limiter can't pay for.
struct LimitedWriter<L, W> {
    limiter: L,
    inner: W,
    now: Duration,
}

impl<L: RateLimit<Duration>, W: Write> LimitedWriter<L, W> {
    fn write_at(&mut self, now: Duration, buf: &[u8]) -> io::Result<usize> {
        self.now = now;
        self.write(buf)
    }
}

impl<L: RateLimit<Duration>, W: Write> Write for LimitedWriter<L, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.limiter.try_acquire_at(self.now, buf.len() as f64) {
            return Err(io::Error::new(io::ErrorKind::WouldBlock, "speed limited"));
        }
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Max burst of 2KiB with rate of 1KiB per second");

    let mut now = Duration::ZERO;
    let mut writer = LimitedWriter {
        limiter: TokenBucket::new(now, 1024.0, 2048.0),
        inner: io::sink(),
        now,
    };

    let chunk = vec![0u8; 1024];
    for _ in 0..4 {
        match writer.write_at(now, &chunk) {
            Ok(n) => println!("time {:>5?}: {} ok", now, n),
            Err(e) => println!("time {:>5?}: 0 {}", now, e),
        }
        now += Duration::from_millis(500);
    }
}
