#![cfg(feature = "async")]
//! Integration tests for `delay`.
//!
//! Async tests run on a paused tokio clock, so waits complete instantly and
//! deterministically.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rstest::rstest;
use underbar::function::{DelayError, delay};

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_delay_returns_before_the_call() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let writer = Arc::clone(&log);
    let delayed = delay(
        move |entry: &'static str| writer.lock().unwrap().push(entry),
        Duration::from_millis(100),
        "fired",
    );
    log.lock().unwrap().push("scheduled");
    delayed.await.unwrap();
    assert_eq!(*log.lock().unwrap(), vec!["scheduled", "fired"]);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_delay_waits_at_least_the_requested_time() {
    let start = tokio::time::Instant::now();
    let elapsed = delay(move |()| start.elapsed(), Duration::from_millis(250), ()).await;
    assert!(elapsed.unwrap() >= Duration::from_millis(250));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_shorter_delays_fire_first() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let slow = {
        let order = Arc::clone(&order);
        delay(move |label| order.lock().unwrap().push(label), Duration::from_millis(200), "slow")
    };
    let fast = {
        let order = Arc::clone(&order);
        delay(move |label| order.lock().unwrap().push(label), Duration::from_millis(50), "fast")
    };
    fast.await.unwrap();
    slow.await.unwrap();
    assert_eq!(*order.lock().unwrap(), vec!["fast", "slow"]);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_delay_surfaces_panics() {
    let delayed = delay(|()| -> u8 { panic!("deferred failure") }, Duration::from_secs(1), ());
    assert_eq!(delayed.await, Err(DelayError::Panicked));
}

#[rstest]
fn test_delay_from_synchronous_code_uses_shared_runtime() {
    let delayed = delay(|number: u32| number + 1, Duration::from_millis(1), 41);
    assert_eq!(delayed.wait(), Ok(42));
}
