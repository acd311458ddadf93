//! Interface parameter model.
//!
//! This module describes the fixed topology of the eight AXI interface slots
//! and the per-slot channel widths. It provides:
//! 1. **Slots:** An ordered enumeration of the two general-purpose initiator,
//!    two general-purpose target, and four high-performance target ports.
//! 2. **Widths:** One parameterized width record per slot with built-in
//!    defaults, each field independently overridable from configuration.
//! 3. **Validation:** Eager width checking; any malformed width aborts setup.
//!
//! Widths are immutable once the owning adapter has been constructed.

use std::fmt;

use crate::common::SetupError;
use crate::config::InterfaceConfig;

/// Direction of a bus interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// The PS issues requests onto the pins (M_AXI ports).
    Initiator,
    /// The PS receives requests from the pins (S_AXI ports).
    Target,
}

/// One of the eight fixed AXI interface slots.
///
/// The ordering of [`Slot::ALL`] is the ordering used for every per-slot
/// table in the model; slots are otherwise independent of each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// General-purpose initiator port 0.
    MAxiGp0,
    /// General-purpose initiator port 1.
    MAxiGp1,
    /// General-purpose target port 0.
    SAxiGp0,
    /// General-purpose target port 1.
    SAxiGp1,
    /// High-performance target port 0.
    SAxiHp0,
    /// High-performance target port 1.
    SAxiHp1,
    /// High-performance target port 2.
    SAxiHp2,
    /// High-performance target port 3.
    SAxiHp3,
}

impl Slot {
    /// All slots in table order.
    pub const ALL: [Self; 8] = [
        Self::MAxiGp0,
        Self::MAxiGp1,
        Self::SAxiGp0,
        Self::SAxiGp1,
        Self::SAxiHp0,
        Self::SAxiHp1,
        Self::SAxiHp2,
        Self::SAxiHp3,
    ];

    /// Returns the slot's index into per-slot tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the slot's role in the bus topology.
    pub const fn role(self) -> Role {
        match self {
            Self::MAxiGp0 | Self::MAxiGp1 => Role::Initiator,
            _ => Role::Target,
        }
    }

    /// Returns the canonical lower-case port name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::MAxiGp0 => "m_axi_gp0",
            Self::MAxiGp1 => "m_axi_gp1",
            Self::SAxiGp0 => "s_axi_gp0",
            Self::SAxiGp1 => "s_axi_gp1",
            Self::SAxiHp0 => "s_axi_hp0",
            Self::SAxiHp1 => "s_axi_hp1",
            Self::SAxiHp2 => "s_axi_hp2",
            Self::SAxiHp3 => "s_axi_hp3",
        }
    }

    /// Returns the built-in channel widths for this slot.
    ///
    /// These match the hardware defaults: initiator GP ports carry 12-bit
    /// ids, target GP ports 6-bit ids, and the HP ports a 64-bit data path.
    pub const fn default_widths(self) -> InterfaceWidths {
        match self {
            Self::MAxiGp0 | Self::MAxiGp1 => InterfaceWidths {
                addr: 32,
                data: 32,
                id: 12,
                len: 4,
                lock: 2,
                awuser: 2,
                aruser: 2,
            },
            Self::SAxiGp0 | Self::SAxiGp1 => InterfaceWidths {
                addr: 32,
                data: 32,
                id: 6,
                len: 4,
                lock: 2,
                awuser: 2,
                aruser: 2,
            },
            Self::SAxiHp0 | Self::SAxiHp1 | Self::SAxiHp2 | Self::SAxiHp3 => InterfaceWidths {
                addr: 32,
                data: 64,
                id: 6,
                len: 4,
                lock: 2,
                awuser: 2,
                aruser: 2,
            },
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Channel widths of one AXI interface, in bits.
///
/// Payload fields in the pin group are u64-backed, so every width is capped
/// at 64 and the data path is restricted to byte-multiple power-of-two
/// widths. All fields are positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterfaceWidths {
    /// Address bus width.
    pub addr: u32,
    /// Data bus width.
    pub data: u32,
    /// Transaction-id field width.
    pub id: u32,
    /// Burst-length field width.
    pub len: u32,
    /// Lock field width.
    pub lock: u32,
    /// Write-address user sideband width.
    pub awuser: u32,
    /// Read-address user sideband width.
    pub aruser: u32,
}

impl InterfaceWidths {
    /// Returns the write-strobe width (one bit per data byte).
    #[inline]
    pub const fn strb(&self) -> u32 {
        self.data / 8
    }
}

/// Resolved parameter record for one interface slot.
///
/// Produced once at setup from the slot's built-in defaults and the
/// configuration overrides; never modified afterwards.
#[derive(Clone, Copy, Debug)]
pub struct InterfaceSpec {
    /// The slot this record describes.
    pub slot: Slot,
    /// The slot's role (fixed by the topology, not configurable).
    pub role: Role,
    /// Whether an adapter is constructed for this slot.
    pub enabled: bool,
    /// The validated channel widths.
    pub widths: InterfaceWidths,
}

impl InterfaceSpec {
    /// Resolves one slot's spec from configuration.
    ///
    /// Applies width overrides on top of the slot's defaults and validates
    /// the result. Validation runs for disabled slots too: a malformed width
    /// is a configuration defect regardless of the enable flag.
    ///
    /// # Errors
    ///
    /// [`SetupError::InvalidWidth`] for any out-of-range width.
    pub fn resolve(slot: Slot, cfg: &InterfaceConfig) -> Result<Self, SetupError> {
        let d = slot.default_widths();
        let widths = InterfaceWidths {
            addr: cfg.addr_width.unwrap_or(d.addr),
            data: cfg.data_width.unwrap_or(d.data),
            id: cfg.id_width.unwrap_or(d.id),
            len: cfg.len_width.unwrap_or(d.len),
            lock: cfg.lock_width.unwrap_or(d.lock),
            awuser: cfg.awuser_width.unwrap_or(d.awuser),
            aruser: cfg.aruser_width.unwrap_or(d.aruser),
        };
        validate_widths(slot, &widths)?;
        Ok(Self {
            slot,
            role: slot.role(),
            enabled: cfg.enabled,
            widths,
        })
    }
}

/// Checks every width of one slot against its representable range.
fn validate_widths(slot: Slot, w: &InterfaceWidths) -> Result<(), SetupError> {
    let err = |field: &'static str, value: u32, reason: &'static str| {
        Err(SetupError::InvalidWidth {
            slot: slot.name(),
            field,
            value,
            reason,
        })
    };

    if w.addr == 0 || w.addr > 64 {
        return err("addr", w.addr, "must be in 1..=64");
    }
    if !matches!(w.data, 8 | 16 | 32 | 64) {
        return err("data", w.data, "must be 8, 16, 32 or 64");
    }
    if w.id == 0 || w.id > 32 {
        return err("id", w.id, "must be in 1..=32");
    }
    if w.len == 0 || w.len > 8 {
        return err("len", w.len, "must be in 1..=8");
    }
    if w.lock == 0 || w.lock > 2 {
        return err("lock", w.lock, "must be 1 or 2");
    }
    if w.awuser == 0 || w.awuser > 64 {
        return err("awuser", w.awuser, "must be in 1..=64");
    }
    if w.aruser == 0 || w.aruser > 64 {
        return err("aruser", w.aruser, "must be in 1..=64");
    }
    Ok(())
}
