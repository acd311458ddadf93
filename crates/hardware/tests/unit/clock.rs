//! Fabric clock domain tests.
//!
//! Verifies edge timing (including drift-free handling of odd periods),
//! level toggling, and disabled-domain behavior.

use zynq7_cosim::common::SimTime;
use zynq7_cosim::soc::clock::ClockDomain;

#[test]
fn starts_low() {
    let clock = ClockDomain::from_period_ns(10);
    assert!(clock.enabled());
    assert!(!clock.level());
}

#[test]
fn first_edge_at_half_period() {
    let clock = ClockDomain::from_period_ns(10);
    assert_eq!(clock.next_edge(), Some(SimTime::from_ns(5)));
}

#[test]
fn toggle_alternates_level() {
    let mut clock = ClockDomain::from_period_ns(10);
    assert!(clock.toggle());
    assert!(!clock.toggle());
    assert!(clock.toggle());
}

#[test]
fn edge_times_track_the_period() {
    let mut clock = ClockDomain::from_period_ns(10);
    let mut edges = Vec::new();
    for _ in 0..6 {
        edges.push(clock.next_edge().unwrap().as_ns());
        let _ = clock.toggle();
    }
    assert_eq!(edges, [5, 10, 15, 20, 25, 30]);
}

#[test]
fn odd_period_does_not_drift() {
    let mut clock = ClockDomain::from_period_ns(3);
    let mut edges = Vec::new();
    for _ in 0..8 {
        edges.push(clock.next_edge().unwrap().as_ns());
        let _ = clock.toggle();
    }
    // floor(k * 3 / 2): full periods land exactly on multiples of 3.
    assert_eq!(edges, [1, 3, 4, 6, 7, 9, 10, 12]);
}

#[test]
fn zero_period_is_disabled() {
    let clock = ClockDomain::from_period_ns(0);
    assert!(!clock.enabled());
    assert_eq!(clock.next_edge(), None);
    assert!(!clock.level());
}

#[test]
fn negative_period_is_disabled() {
    let clock = ClockDomain::from_period_ns(-7);
    assert!(!clock.enabled());
    assert_eq!(clock.next_edge(), None);
    assert_eq!(clock.period_ns(), 0);
}
