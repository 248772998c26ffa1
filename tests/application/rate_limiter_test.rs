use std::sync::Arc;
use std::time::Duration;

use sibu::application::services::RateLimiter;

#[test]
fn given_fresh_bucket_when_admitting_then_tokens_are_consumed() {
    let limiter = Arc::new(RateLimiter::new(2, 2, Duration::from_secs(10)));

    let first = limiter.try_admit();
    let second = limiter.try_admit();
    let third = limiter.try_admit();

    assert!(first.is_some());
    assert!(second.is_some());
    assert!(third.is_none());
}

#[test]
fn given_burst_drained_before_period_then_idle_bucket_still_recovers() {
    let limiter = Arc::new(RateLimiter::new(2, 2, Duration::from_millis(50)));

    // Drain the bucket and finish all work inside one period, so no slip
    // is left outstanding to carry a refill.
    drop(limiter.try_admit().unwrap());
    drop(limiter.try_admit().unwrap());
    assert!(limiter.try_admit().is_none());

    std::thread::sleep(Duration::from_millis(200));

    assert!(limiter.try_admit().is_some());
}

#[test]
fn given_completed_work_within_period_then_no_refill_happens() {
    let limiter = Arc::new(RateLimiter::new(1, 1, Duration::from_secs(60)));

    let slip = limiter.try_admit().unwrap();
    drop(slip);

    assert_eq!(limiter.available(), 0);
    assert!(limiter.try_admit().is_none());
}

#[test]
fn given_completed_work_after_period_then_bucket_refills() {
    let limiter = Arc::new(RateLimiter::new(1, 1, Duration::from_millis(10)));

    let slip = limiter.try_admit().unwrap();
    std::thread::sleep(Duration::from_millis(20));
    drop(slip);

    assert_eq!(limiter.available(), 1);
    assert!(limiter.try_admit().is_some());
}

#[test]
fn given_refill_when_bucket_full_then_capacity_is_not_exceeded() {
    let limiter = Arc::new(RateLimiter::new(2, 5, Duration::from_millis(10)));

    let slip = limiter.try_admit().unwrap();
    std::thread::sleep(Duration::from_millis(20));
    drop(slip);

    assert_eq!(limiter.available(), 2);
}

#[test]
fn given_cpu_count_when_sizing_then_capacity_is_twice_the_cpus() {
    let limiter = Arc::new(RateLimiter::for_cpu_count(4));
    for _ in 0..8 {
        let slip = limiter.try_admit().expect("token within capacity");
        std::mem::forget(slip);
    }
    assert!(limiter.try_admit().is_none());
}
