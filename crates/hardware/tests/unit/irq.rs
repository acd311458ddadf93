//! Fabric interrupt fan-in tests.
//!
//! Verifies the bit-to-line mapping, idempotence, and that every
//! application forwards the complete vector to the engine.

use zynq7_cosim::sim::LockstepEngine;
use zynq7_cosim::soc::irq::{IRQ_LINES, IrqFanIn};

use crate::common::{config_with, ready_model};

#[test]
fn vector_bits_map_to_lines() {
    let mut engine = LockstepEngine::new();
    let mut fanin = IrqFanIn::new();

    fanin.apply(0b1000_0000_0000_0101, &mut engine);

    assert!(engine.irq_level(0));
    assert!(!engine.irq_level(1));
    assert!(engine.irq_level(2));
    assert!(engine.irq_level(15));
    assert!(fanin.level(0));
    assert!(!fanin.level(1));
}

#[test]
fn reapplying_the_same_vector_changes_nothing() {
    let mut engine = LockstepEngine::new();
    let mut fanin = IrqFanIn::new();

    fanin.apply(0x00F0, &mut engine);
    fanin.apply(0x00F0, &mut engine);

    for line in 0..IRQ_LINES {
        assert_eq!(engine.irq_level(line), (4..8).contains(&line));
    }
}

#[test]
fn clearing_bits_lowers_lines() {
    let mut engine = LockstepEngine::new();
    let mut fanin = IrqFanIn::new();

    fanin.apply(0xFFFF, &mut engine);
    fanin.apply(0x0001, &mut engine);

    assert!(engine.irq_level(0));
    for line in 1..IRQ_LINES {
        assert!(!engine.irq_level(line), "line {line} should have dropped");
    }
}

#[test]
fn model_forwards_the_vector() {
    let config = config_with(&[]);
    let mut ps = ready_model(&config);

    ps.set_irq_f2p(0xA5A5);

    for line in 0..IRQ_LINES {
        assert_eq!(ps.engine().irq_level(line), 0xA5A5 & (1 << line) != 0);
    }
}
