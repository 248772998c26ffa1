use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Token-bucket admission filter in front of the pipeline. A request takes
/// one token to enter; the bucket is replenished when admitted work
/// completes and at least one period has elapsed since the last refill.
pub struct RateLimiter {
    bucket: Mutex<Bucket>,
    capacity: u32,
    tokens_per_period: u32,
    period: Duration,
}

struct Bucket {
    tokens: u32,
    last_refill: Instant,
}

impl RateLimiter {
    pub fn new(capacity: u32, tokens_per_period: u32, period: Duration) -> Self {
        Self {
            bucket: Mutex::new(Bucket {
                tokens: capacity,
                last_refill: Instant::now(),
            }),
            capacity,
            tokens_per_period,
            period,
        }
    }

    /// Default sizing: bucket of twice the processor count, two tokens
    /// back every ten seconds.
    pub fn for_cpu_count(cpus: usize) -> Self {
        Self::new(
            (cpus as u32).saturating_mul(2).max(1),
            2,
            Duration::from_secs(10),
        )
    }

    /// Takes a token if one is available. The returned slip must be held for
    /// the duration of the request's work; dropping it triggers the refill
    /// check. Admission itself also runs the check, so a bucket drained
    /// during a burst recovers even when no slip is outstanding afterwards.
    pub fn try_admit(self: &Arc<Self>) -> Option<AdmissionSlip> {
        let mut bucket = self.bucket.lock().expect("rate limiter lock poisoned");
        self.refill_locked(&mut bucket);
        if bucket.tokens == 0 {
            return None;
        }
        bucket.tokens -= 1;
        Some(AdmissionSlip {
            limiter: Arc::clone(self),
        })
    }

    pub fn available(&self) -> u32 {
        self.bucket.lock().expect("rate limiter lock poisoned").tokens
    }

    fn refill(&self) {
        let mut bucket = self.bucket.lock().expect("rate limiter lock poisoned");
        self.refill_locked(&mut bucket);
    }

    /// Adds `tokens_per_period` for every full period elapsed since the last
    /// refill, capped at capacity.
    fn refill_locked(&self, bucket: &mut Bucket) {
        if self.period.is_zero() {
            bucket.tokens = self.capacity;
            return;
        }
        let elapsed = bucket.last_refill.elapsed();
        if elapsed < self.period {
            return;
        }
        let periods = (elapsed.as_nanos() / self.period.as_nanos()) as u32;
        bucket.tokens = std::cmp::min(
            self.capacity,
            bucket
                .tokens
                .saturating_add(self.tokens_per_period.saturating_mul(periods)),
        );
        bucket.last_refill = Instant::now();
    }
}

/// Proof of admission. Held across the request's work.
pub struct AdmissionSlip {
    limiter: Arc<RateLimiter>,
}

impl Drop for AdmissionSlip {
    fn drop(&mut self) {
        self.limiter.refill();
    }
}
