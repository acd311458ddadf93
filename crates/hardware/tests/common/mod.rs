//! Shared helpers for the model tests.

use zynq7_cosim::sim::LockstepEngine;
use zynq7_cosim::soc::Slot;
use zynq7_cosim::{Config, SimTime, Zynq7Ps};

/// One simulated microsecond past the power-on reset window.
pub const PAST_RESET: SimTime = SimTime::from_ns(2_000_000);

/// Builds a default configuration with the given slots enabled.
pub fn config_with(slots: &[Slot]) -> Config {
    let mut config = Config::default();
    for slot in slots {
        config.interfaces.slot_mut(*slot).enabled = true;
    }
    config
}

/// Builds a model around a fresh lockstep engine.
pub fn model(config: &Config) -> Zynq7Ps<LockstepEngine> {
    Zynq7Ps::with_engine(config, LockstepEngine::new()).expect("configuration should be valid")
}

/// Builds a model and runs it past the power-on reset window, so interface
/// adapters are out of reset and ready to handshake.
pub fn ready_model(config: &Config) -> Zynq7Ps<LockstepEngine> {
    let mut ps = model(config);
    ps.run_for(PAST_RESET);
    assert!(!ps.rst(), "reset should have released");
    ps
}
