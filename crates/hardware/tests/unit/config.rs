//! # Configuration Tests
//!
//! Tests for configuration structures, deserialization, defaults, and the
//! endpoint override resolution.

use pretty_assertions::assert_eq;
use zynq7_cosim::config::Config;
use zynq7_cosim::soc::Slot;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.engine.endpoint, "unix:/tmp/qemu-rport-_cosim@0");
    assert_eq!(config.engine.endpoint_override, None);
    assert_eq!(config.engine.sync_quantum_ns, 10_000);
}

#[test]
fn test_clocks_default() {
    let config = Config::default();
    assert_eq!(config.clocks.fclk0_period_ns, 10_000);
    assert_eq!(config.clocks.fclk1_period_ns, -1);
    assert_eq!(config.clocks.fclk2_period_ns, -1);
    assert_eq!(config.clocks.fclk3_period_ns, -1);
    assert_eq!(config.clocks.periods(), [10_000, -1, -1, -1]);
}

#[test]
fn test_interfaces_default_all_disabled() {
    let config = Config::default();
    for slot in Slot::ALL {
        let cfg = config.interfaces.slot(slot);
        assert!(!cfg.enabled, "{slot} should default to disabled");
        assert_eq!(cfg.data_width, None);
        assert_eq!(cfg.addr_width, None);
    }
}

#[test]
fn test_config_from_empty_json() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.engine.sync_quantum_ns, 10_000);
    assert_eq!(config.clocks.fclk0_period_ns, 10_000);
    assert!(!config.interfaces.m_axi_gp0.enabled);
}

#[test]
fn test_config_from_json_overrides() {
    let json = r#"{
        "engine": { "endpoint": "unix:/tmp/other.sock", "sync_quantum_ns": 500 },
        "clocks": { "fclk1_period_ns": 20000 },
        "interfaces": {
            "m_axi_gp0": { "enabled": true },
            "s_axi_hp2": { "enabled": true, "data_width": 32, "id_width": 4 }
        }
    }"#;
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.engine.endpoint, "unix:/tmp/other.sock");
    assert_eq!(config.engine.sync_quantum_ns, 500);
    assert_eq!(config.clocks.fclk0_period_ns, 10_000);
    assert_eq!(config.clocks.fclk1_period_ns, 20_000);
    assert!(config.interfaces.m_axi_gp0.enabled);
    assert!(config.interfaces.s_axi_hp2.enabled);
    assert_eq!(config.interfaces.s_axi_hp2.data_width, Some(32));
    assert_eq!(config.interfaces.s_axi_hp2.id_width, Some(4));
    assert!(!config.interfaces.s_axi_hp3.enabled);
}

#[test]
fn test_resolved_endpoint_without_override() {
    let config = Config::default();
    assert_eq!(
        config.engine.resolved_endpoint(),
        "unix:/tmp/qemu-rport-_cosim@0"
    );
}

#[test]
fn test_resolved_endpoint_with_override() {
    let mut config = Config::default();
    config.engine.endpoint_override = Some("unix:/run/engine.sock".to_string());
    assert_eq!(config.engine.resolved_endpoint(), "unix:/run/engine.sock");
}

#[test]
fn test_slot_accessors_agree() {
    let mut config = Config::default();
    config.interfaces.slot_mut(Slot::SAxiGp1).enabled = true;
    assert!(config.interfaces.slot(Slot::SAxiGp1).enabled);
    assert!(config.interfaces.s_axi_gp1.enabled);
}
