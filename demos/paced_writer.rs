//! Paces a 5 KiB write to 1 KiB/s by borrowing ahead and waiting out the delay.
//!
//! Chunks are capped at the bucket capacity, so no single borrow asks for more
//! than a full bucket. Time is simulated; a real writer would sleep instead.

use std::io::{self, Write};
use std::time::Duration;

use rate_guard_bucket::TokenBucket;
use tracing_subscriber::EnvFilter;

fn paced_write<W: Write>(
    bucket: &mut TokenBucket<Duration>,
    now: &mut Duration,
    out: &mut W,
    data: &[u8],
) -> io::Result<usize> {
    let chunk_limit = (bucket.capacity() as usize).min(data.len()).max(1);
    let mut written = 0;

    while written < data.len() {
        let end = (written + chunk_limit).min(data.len());
        let delay = bucket.borrow(*now, (end - written) as f64);
        if delay > Duration::ZERO {
            *now += delay; // std::thread::sleep(delay)
        }

        let n = out.write(&data[written..end])?;
        if n == 0 {
            return Err(io::ErrorKind::WriteZero.into());
        }
        println!("{:>5} bytes written at {:?}", n, now);
        if n < end - written {
            // Give back what the writer didn't take.
            bucket.return_tokens(*now, (end - written - n) as f64);
        }
        written += n;
    }

    Ok(written)
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Max burst of 512 bytes with rate of 1KiB per second");

    let mut now = Duration::ZERO;
    let mut bucket = TokenBucket::new(now, 1024.0, 512.0);

    paced_write(&mut bucket, &mut now, &mut io::sink(), &[0u8; 5 * 1024])?;
    Ok(())
}
