//! Time-quantum accounting tests.
//!
//! Verifies the standalone keeper and, against a running model, that local
//! time never runs more than one quantum past the engine's acknowledgement.

use zynq7_cosim::common::SimTime;
use zynq7_cosim::sim::QuantumKeeper;

use crate::common::{config_with, model};

#[test]
fn first_sync_due_after_one_quantum() {
    let keeper = QuantumKeeper::new(SimTime::from_ns(10));
    assert!(!keeper.needs_sync(SimTime::from_ns(10)));
    assert!(keeper.needs_sync(SimTime::from_ns(11)));
    assert_eq!(keeper.sync_count(), 0);
}

#[test]
fn acknowledgement_extends_the_limit() {
    let mut keeper = QuantumKeeper::new(SimTime::from_ns(10));
    keeper.acknowledged(SimTime::from_ns(10));
    assert_eq!(keeper.limit(), SimTime::from_ns(20));
    assert_eq!(keeper.sync_count(), 1);
    assert!(!keeper.needs_sync(SimTime::from_ns(20)));
    assert!(keeper.needs_sync(SimTime::from_ns(21)));
}

#[test]
fn stale_acknowledgement_never_moves_the_limit_back() {
    let mut keeper = QuantumKeeper::new(SimTime::from_ns(10));
    keeper.acknowledged(SimTime::from_ns(30));
    keeper.acknowledged(SimTime::from_ns(5));
    assert_eq!(keeper.limit(), SimTime::from_ns(40));
    assert_eq!(keeper.sync_count(), 2);
}

#[test]
fn model_syncs_once_per_quantum() {
    let mut config = config_with(&[]);
    config.engine.sync_quantum_ns = 10_000;
    let mut ps = model(&config);

    ps.run_for(SimTime::from_ns(2_000_000));

    // Syncs land at every quantum boundary strictly inside the window.
    assert_eq!(ps.sync_count(), 199);
    let times = ps.engine().sync_times();
    assert_eq!(times.first(), Some(&SimTime::from_ns(10_000)));
    assert_eq!(times.last(), Some(&SimTime::from_ns(1_990_000)));
    for pair in times.windows(2) {
        assert_eq!(pair[1].saturating_sub(pair[0]), SimTime::from_ns(10_000));
    }
}

#[test]
fn local_time_stays_within_one_quantum_of_the_engine() {
    let quantum = 7_000;
    let mut config = config_with(&[]);
    config.engine.sync_quantum_ns = quantum;
    let mut ps = model(&config);

    ps.run_for(SimTime::from_ns(500_000));

    // The lockstep engine acknowledges exactly the reported local time, so
    // every sync must come no later than one quantum after the previous one.
    let times = ps.engine().sync_times();
    assert!(!times.is_empty());
    for pair in times.windows(2) {
        assert!(pair[1].saturating_sub(pair[0]) <= SimTime::from_ns(quantum));
    }
}
