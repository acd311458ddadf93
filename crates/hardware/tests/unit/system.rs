//! Whole-model tests.
//!
//! Covers construction and validation failures, clock outputs over a run,
//! disabled-slot behavior, and the default-engine endpoint checks.

use rstest::rstest;
use zynq7_cosim::common::{SetupError, SimTime};
use zynq7_cosim::sim::LockstepEngine;
use zynq7_cosim::soc::{Slot, Zynq7Ps};
use zynq7_cosim::Config;

use crate::common::{config_with, model, ready_model};

#[rstest]
#[case::none(&[])]
#[case::one_target(&[Slot::SAxiHp0])]
#[case::one_initiator(&[Slot::MAxiGp0])]
#[case::mixed(&[Slot::MAxiGp0, Slot::SAxiGp1, Slot::SAxiHp2])]
#[case::all(&Slot::ALL)]
fn construction_with_enabled_subsets(#[case] slots: &[Slot]) {
    let config = config_with(slots);
    let ps = model(&config);

    for slot in Slot::ALL {
        let spec = ps.interface_spec(slot);
        assert_eq!(spec.enabled, slots.contains(&slot));
        assert_eq!(spec.slot, slot);
    }
}

#[test]
fn rejects_disabled_mandatory_clock() {
    let mut config = Config::default();
    config.clocks.fclk0_period_ns = -1;
    let err = Zynq7Ps::with_engine(&config, LockstepEngine::new()).unwrap_err();
    assert!(matches!(err, SetupError::MandatoryClockDisabled(-1)));
}

#[test]
fn rejects_zero_quantum() {
    let mut config = Config::default();
    config.engine.sync_quantum_ns = 0;
    let err = Zynq7Ps::with_engine(&config, LockstepEngine::new()).unwrap_err();
    assert!(matches!(err, SetupError::ZeroQuantum));
}

#[test]
fn rejects_malformed_widths_at_construction() {
    let mut config = Config::default();
    config.interfaces.s_axi_hp3.data_width = Some(24);
    let err = Zynq7Ps::with_engine(&config, LockstepEngine::new()).unwrap_err();
    assert!(matches!(err, SetupError::InvalidWidth { .. }));
}

#[test]
fn remote_engine_rejects_unknown_scheme() {
    let mut config = Config::default();
    config.engine.endpoint = "tcp:127.0.0.1:4000".to_string();
    let err = Zynq7Ps::new(&config).unwrap_err();
    assert!(matches!(err, SetupError::MalformedEndpoint(_)));
}

#[test]
fn remote_engine_reports_unreachable_endpoint() {
    let mut config = Config::default();
    config.engine.endpoint = "unix:/nonexistent/dir/engine.sock".to_string();
    let err = Zynq7Ps::new(&config).unwrap_err();
    assert!(matches!(err, SetupError::EndpointUnreachable { .. }));
}

#[test]
fn endpoint_override_wins() {
    let mut config = Config::default();
    config.engine.endpoint_override = Some("tcp:not-a-socket".to_string());
    // The override is used (and being malformed, rejected) even though the
    // configured endpoint is well-formed.
    let err = Zynq7Ps::new(&config).unwrap_err();
    assert!(matches!(err, SetupError::MalformedEndpoint(e) if e == "tcp:not-a-socket"));
}

#[test]
#[should_panic(expected = "disabled")]
fn stepping_a_disabled_interface_panics() {
    let config = config_with(&[Slot::SAxiHp0]);
    let mut ps = ready_model(&config);
    ps.interface_posedge(Slot::SAxiHp1);
}

#[test]
fn disabled_slot_pins_stay_quiescent() {
    let config = config_with(&[Slot::SAxiHp0]);
    let mut ps = ready_model(&config);
    ps.run_for(SimTime::from_ns(1_000_000));

    let pins = ps.pins(Slot::MAxiGp1);
    assert!(!pins.aw.valid && !pins.aw.ready);
    assert!(!pins.w.valid && !pins.w.ready);
    assert!(!pins.b.valid && !pins.b.ready);
    assert!(!pins.ar.valid && !pins.ar.ready);
    assert!(!pins.r.valid && !pins.r.ready);
}

#[test]
fn mandatory_clock_toggles_through_a_run() {
    let config = Config::default();
    let mut ps = model(&config);

    assert!(!ps.fclk(0));
    ps.run_for(SimTime::from_ns(5_000));
    assert!(ps.fclk(0));
    ps.run_for(SimTime::from_ns(5_000));
    assert!(!ps.fclk(0));
    assert_eq!(ps.now(), SimTime::from_ns(10_000));
}

#[test]
fn disabled_clock_domains_stay_low() {
    let config = Config::default();
    let mut ps = model(&config);
    ps.run_for(SimTime::from_ns(3_000_000));

    assert!(!ps.fclk(1));
    assert!(!ps.fclk(2));
    assert!(!ps.fclk(3));
}

#[test]
fn second_clock_domain_runs_at_its_own_period() {
    let mut config = Config::default();
    config.clocks.fclk1_period_ns = 20_000;
    let mut ps = model(&config);

    ps.run_for(SimTime::from_ns(10_000));
    assert!(ps.fclk(1));
    ps.run_for(SimTime::from_ns(10_000));
    assert!(!ps.fclk(1));
}

#[test]
fn run_for_advances_time_without_events() {
    let config = Config::default();
    let mut ps = model(&config);
    ps.run_for(SimTime::from_ns(123));
    assert_eq!(ps.now(), SimTime::from_ns(123));
}
