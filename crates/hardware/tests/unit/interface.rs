//! Interface slot table tests.
//!
//! Verifies per-slot roles and default widths, override resolution, and
//! width validation failures.

use zynq7_cosim::common::SetupError;
use zynq7_cosim::config::InterfaceConfig;
use zynq7_cosim::soc::interface::{InterfaceSpec, Role, Slot};

#[test]
fn slot_table_order_matches_indices() {
    for (i, slot) in Slot::ALL.iter().enumerate() {
        assert_eq!(slot.index(), i);
    }
}

#[test]
fn slot_roles() {
    assert_eq!(Slot::MAxiGp0.role(), Role::Initiator);
    assert_eq!(Slot::MAxiGp1.role(), Role::Initiator);
    assert_eq!(Slot::SAxiGp0.role(), Role::Target);
    assert_eq!(Slot::SAxiGp1.role(), Role::Target);
    assert_eq!(Slot::SAxiHp0.role(), Role::Target);
    assert_eq!(Slot::SAxiHp3.role(), Role::Target);
}

#[test]
fn gp_initiator_default_widths() {
    let w = Slot::MAxiGp0.default_widths();
    assert_eq!(w.addr, 32);
    assert_eq!(w.data, 32);
    assert_eq!(w.id, 12);
    assert_eq!(w.len, 4);
    assert_eq!(w.lock, 2);
    assert_eq!(w.awuser, 2);
    assert_eq!(w.aruser, 2);
}

#[test]
fn gp_target_default_widths() {
    let w = Slot::SAxiGp1.default_widths();
    assert_eq!(w.data, 32);
    assert_eq!(w.id, 6);
}

#[test]
fn hp_default_widths() {
    let w = Slot::SAxiHp2.default_widths();
    assert_eq!(w.data, 64);
    assert_eq!(w.id, 6);
    assert_eq!(w.strb(), 8);
}

#[test]
fn resolve_applies_overrides_on_top_of_defaults() {
    let cfg = InterfaceConfig {
        enabled: true,
        data_width: Some(32),
        id_width: Some(4),
        ..Default::default()
    };
    let spec = InterfaceSpec::resolve(Slot::SAxiHp0, &cfg).unwrap();
    assert!(spec.enabled);
    assert_eq!(spec.role, Role::Target);
    assert_eq!(spec.widths.data, 32);
    assert_eq!(spec.widths.id, 4);
    // Untouched fields keep the slot defaults.
    assert_eq!(spec.widths.addr, 32);
    assert_eq!(spec.widths.len, 4);
}

#[test]
fn resolve_rejects_odd_data_width() {
    let cfg = InterfaceConfig {
        data_width: Some(48),
        ..Default::default()
    };
    let err = InterfaceSpec::resolve(Slot::SAxiHp0, &cfg).unwrap_err();
    assert!(matches!(
        err,
        SetupError::InvalidWidth {
            slot: "s_axi_hp0",
            field: "data",
            value: 48,
            ..
        }
    ));
}

#[test]
fn resolve_rejects_zero_address_width() {
    let cfg = InterfaceConfig {
        addr_width: Some(0),
        ..Default::default()
    };
    let err = InterfaceSpec::resolve(Slot::MAxiGp0, &cfg).unwrap_err();
    assert!(matches!(
        err,
        SetupError::InvalidWidth { field: "addr", .. }
    ));
}

#[test]
fn resolve_rejects_oversized_len_width() {
    let cfg = InterfaceConfig {
        len_width: Some(9),
        ..Default::default()
    };
    let err = InterfaceSpec::resolve(Slot::SAxiGp0, &cfg).unwrap_err();
    assert!(matches!(err, SetupError::InvalidWidth { field: "len", .. }));
}

#[test]
fn resolve_validates_disabled_slots_too() {
    let cfg = InterfaceConfig {
        enabled: false,
        lock_width: Some(3),
        ..Default::default()
    };
    assert!(InterfaceSpec::resolve(Slot::SAxiHp1, &cfg).is_err());
}

#[test]
fn slot_names() {
    assert_eq!(Slot::MAxiGp0.name(), "m_axi_gp0");
    assert_eq!(Slot::SAxiHp3.name(), "s_axi_hp3");
    assert_eq!(Slot::SAxiGp1.to_string(), "s_axi_gp1");
}
