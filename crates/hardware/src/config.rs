//! Configuration for the co-simulation model.
//!
//! This module defines all configuration structures used to parameterize the
//! processing-system model. It provides:
//! 1. **Defaults:** Baseline constants (engine endpoint, quantum, clock periods).
//! 2. **Structures:** Hierarchical config for the engine link, clocks, and the
//!    eight AXI interface slots.
//! 3. **Overrides:** Every channel width is independently overridable per slot;
//!    unset fields fall back to that slot's built-in width table.
//!
//! Configuration is supplied as JSON (deserialized with `serde_json`) or built
//! in code from `Config::default()`. All choices are fixed once the model is
//! constructed; there is no runtime reconfiguration.

use serde::Deserialize;

use crate::soc::interface::Slot;

/// Default configuration constants for the model.
///
/// These values mirror the generics of the original processing-system block:
/// one mandatory 10 µs clock, the other domains disabled, every AXI port
/// disabled until explicitly enabled.
mod defaults {
    /// Default execution-engine endpoint (QEMU remote-port style unix socket).
    pub const ENGINE_ENDPOINT: &str = "unix:/tmp/qemu-rport-_cosim@0";

    /// Default synchronization quantum in nanoseconds.
    ///
    /// The two simulation domains may drift apart by at most this much
    /// before a mandatory resynchronization.
    pub const SYNC_QUANTUM_NS: u64 = 10_000;

    /// Default FCLK0 period in nanoseconds. FCLK0 is mandatory and must stay
    /// positive; slow clocks keep the co-simulation responsive.
    pub const FCLK0_PERIOD_NS: i64 = 10_000;

    /// Default period for the optional clock domains; non-positive means the
    /// domain is disabled and its output is tied low.
    pub const FCLK_DISABLED: i64 = -1;
}

/// Root configuration for the processing-system model.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use zynq7_cosim::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.clocks.fclk0_period_ns, 10_000);
/// assert!(!config.interfaces.s_axi_hp0.enabled);
/// ```
///
/// Deserializing from JSON, enabling one high-performance port with a wide
/// data path:
///
/// ```
/// use zynq7_cosim::config::Config;
///
/// let json = r#"{
///     "engine": { "sync_quantum_ns": 5000 },
///     "clocks": { "fclk0_period_ns": 10000, "fclk1_period_ns": 20000 },
///     "interfaces": {
///         "s_axi_hp0": { "enabled": true, "data_width": 64 }
///     }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.engine.sync_quantum_ns, 5000);
/// assert!(config.interfaces.s_axi_hp0.enabled);
/// assert_eq!(config.interfaces.s_axi_hp0.data_width, Some(64));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Execution-engine connection and quantum settings.
    #[serde(default)]
    pub engine: EngineConfig,
    /// Clock domain periods.
    #[serde(default)]
    pub clocks: ClocksConfig,
    /// Per-slot AXI interface enables and width overrides.
    #[serde(default)]
    pub interfaces: InterfacesConfig,
}

/// Connection settings for the external execution engine.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Endpoint of the external execution engine (`unix:<path>`).
    #[serde(default = "EngineConfig::default_endpoint")]
    pub endpoint: String,

    /// Explicit endpoint override.
    ///
    /// When set, this takes precedence over `endpoint` and the model logs a
    /// warning naming both values. The original block let a build-time
    /// definition shadow the configured endpoint silently; the override is a
    /// visible configuration choice here instead.
    #[serde(default)]
    pub endpoint_override: Option<String>,

    /// Global synchronization quantum in nanoseconds (must be positive).
    #[serde(default = "EngineConfig::default_quantum")]
    pub sync_quantum_ns: u64,
}

impl EngineConfig {
    /// Returns the default engine endpoint.
    fn default_endpoint() -> String {
        defaults::ENGINE_ENDPOINT.to_string()
    }

    /// Returns the default synchronization quantum in nanoseconds.
    fn default_quantum() -> u64 {
        defaults::SYNC_QUANTUM_NS
    }

    /// Resolves the effective endpoint, applying the explicit override.
    ///
    /// Returns the override when present, otherwise the configured endpoint.
    pub fn resolved_endpoint(&self) -> &str {
        self.endpoint_override.as_deref().unwrap_or(&self.endpoint)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::default_endpoint(),
            endpoint_override: None,
            sync_quantum_ns: Self::default_quantum(),
        }
    }
}

/// Clock domain periods in nanoseconds.
///
/// FCLK0 is mandatory and must be positive; a non-positive period for any
/// other domain disables it (its output pin stays low for the whole run).
#[derive(Debug, Clone, Deserialize)]
pub struct ClocksConfig {
    /// FCLK0 period (mandatory, must be positive).
    #[serde(default = "ClocksConfig::default_fclk0")]
    pub fclk0_period_ns: i64,

    /// FCLK1 period (non-positive disables the domain).
    #[serde(default = "ClocksConfig::default_disabled")]
    pub fclk1_period_ns: i64,

    /// FCLK2 period (non-positive disables the domain).
    #[serde(default = "ClocksConfig::default_disabled")]
    pub fclk2_period_ns: i64,

    /// FCLK3 period (non-positive disables the domain).
    #[serde(default = "ClocksConfig::default_disabled")]
    pub fclk3_period_ns: i64,
}

impl ClocksConfig {
    /// Returns the default FCLK0 period.
    fn default_fclk0() -> i64 {
        defaults::FCLK0_PERIOD_NS
    }

    /// Returns the disabled-domain marker period.
    fn default_disabled() -> i64 {
        defaults::FCLK_DISABLED
    }

    /// Returns the configured periods as an ordered array, FCLK0 first.
    pub fn periods(&self) -> [i64; 4] {
        [
            self.fclk0_period_ns,
            self.fclk1_period_ns,
            self.fclk2_period_ns,
            self.fclk3_period_ns,
        ]
    }
}

impl Default for ClocksConfig {
    fn default() -> Self {
        Self {
            fclk0_period_ns: defaults::FCLK0_PERIOD_NS,
            fclk1_period_ns: defaults::FCLK_DISABLED,
            fclk2_period_ns: defaults::FCLK_DISABLED,
            fclk3_period_ns: defaults::FCLK_DISABLED,
        }
    }
}

/// Enable flags and width overrides for the eight AXI interface slots.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InterfacesConfig {
    /// General-purpose initiator port 0 (PS issues requests to PL).
    #[serde(default)]
    pub m_axi_gp0: InterfaceConfig,
    /// General-purpose initiator port 1.
    #[serde(default)]
    pub m_axi_gp1: InterfaceConfig,
    /// General-purpose target port 0 (PL issues requests to PS).
    #[serde(default)]
    pub s_axi_gp0: InterfaceConfig,
    /// General-purpose target port 1.
    #[serde(default)]
    pub s_axi_gp1: InterfaceConfig,
    /// High-performance target port 0.
    #[serde(default)]
    pub s_axi_hp0: InterfaceConfig,
    /// High-performance target port 1.
    #[serde(default)]
    pub s_axi_hp1: InterfaceConfig,
    /// High-performance target port 2.
    #[serde(default)]
    pub s_axi_hp2: InterfaceConfig,
    /// High-performance target port 3.
    #[serde(default)]
    pub s_axi_hp3: InterfaceConfig,
}

impl InterfacesConfig {
    /// Returns the configuration record for one slot.
    ///
    /// Slots are independent; iterate [`Slot::ALL`] to visit every record.
    pub fn slot(&self, slot: Slot) -> &InterfaceConfig {
        match slot {
            Slot::MAxiGp0 => &self.m_axi_gp0,
            Slot::MAxiGp1 => &self.m_axi_gp1,
            Slot::SAxiGp0 => &self.s_axi_gp0,
            Slot::SAxiGp1 => &self.s_axi_gp1,
            Slot::SAxiHp0 => &self.s_axi_hp0,
            Slot::SAxiHp1 => &self.s_axi_hp1,
            Slot::SAxiHp2 => &self.s_axi_hp2,
            Slot::SAxiHp3 => &self.s_axi_hp3,
        }
    }

    /// Returns a mutable configuration record for one slot.
    pub fn slot_mut(&mut self, slot: Slot) -> &mut InterfaceConfig {
        match slot {
            Slot::MAxiGp0 => &mut self.m_axi_gp0,
            Slot::MAxiGp1 => &mut self.m_axi_gp1,
            Slot::SAxiGp0 => &mut self.s_axi_gp0,
            Slot::SAxiGp1 => &mut self.s_axi_gp1,
            Slot::SAxiHp0 => &mut self.s_axi_hp0,
            Slot::SAxiHp1 => &mut self.s_axi_hp1,
            Slot::SAxiHp2 => &mut self.s_axi_hp2,
            Slot::SAxiHp3 => &mut self.s_axi_hp3,
        }
    }
}

/// Per-slot interface configuration.
///
/// Every width is optional; an unset field falls back to the slot's built-in
/// default (see [`Slot::default_widths`]). Widths are fixed once the owning
/// adapter is constructed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InterfaceConfig {
    /// Whether the slot is present. Disabled slots get no adapter and their
    /// pins stay tied off for the entire run.
    #[serde(default)]
    pub enabled: bool,

    /// Address bus width override in bits.
    #[serde(default)]
    pub addr_width: Option<u32>,

    /// Data bus width override in bits (8, 16, 32 or 64).
    #[serde(default)]
    pub data_width: Option<u32>,

    /// Transaction-id field width override in bits.
    #[serde(default)]
    pub id_width: Option<u32>,

    /// Burst-length field width override in bits.
    #[serde(default)]
    pub len_width: Option<u32>,

    /// Lock field width override in bits.
    #[serde(default)]
    pub lock_width: Option<u32>,

    /// Write-address user sideband width override in bits.
    #[serde(default)]
    pub awuser_width: Option<u32>,

    /// Read-address user sideband width override in bits.
    #[serde(default)]
    pub aruser_width: Option<u32>,
}
