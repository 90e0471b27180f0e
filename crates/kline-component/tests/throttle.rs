// File: crates/kline-component/tests/throttle.rs
// Purpose: Validate the leading-edge rate gate in isolation.

use std::time::{Duration, Instant};

use kline_component::Throttle;

#[test]
fn first_request_always_passes() {
    let mut gate = Throttle::new(Duration::from_millis(100));
    assert!(gate.allow(Instant::now()));
}

#[test]
fn requests_inside_the_window_are_dropped() {
    let mut gate = Throttle::new(Duration::from_millis(100));
    let t0 = Instant::now();
    assert!(gate.allow(t0));
    assert!(!gate.allow(t0));
    assert!(!gate.allow(t0 + Duration::from_millis(50)));
    assert!(!gate.allow(t0 + Duration::from_millis(99)));
}

#[test]
fn the_window_closes_at_the_interval_boundary() {
    let mut gate = Throttle::new(Duration::from_millis(100));
    let t0 = Instant::now();
    assert!(gate.allow(t0));
    assert!(gate.allow(t0 + Duration::from_millis(100)));
    // The passing request restarts the window.
    assert!(!gate.allow(t0 + Duration::from_millis(150)));
    assert!(gate.allow(t0 + Duration::from_millis(200)));
}

#[test]
fn out_of_order_timestamps_do_not_panic() {
    // duration_since saturates, so a stale timestamp reads as inside the
    // current window.
    let mut gate = Throttle::new(Duration::from_millis(100));
    let t0 = Instant::now();
    assert!(gate.allow(t0 + Duration::from_millis(100)));
    assert!(!gate.allow(t0));
}
