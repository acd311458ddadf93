//! Pin-level AXI adapters.
//!
//! This module carries bursts between the pin boundary and the execution
//! engine. It provides:
//! 1. **Pin Groups:** One [`AxiPins`] record per slot, holding the five AXI
//!    channels as plain sampled values.
//! 2. **Adapters:** [`BridgeAdapter`], stepped once per rising clock edge,
//!    running the target FSM ([`axi2tlm`]) or the initiator FSM
//!    ([`tlm2axi`]) depending on the slot's role.
//!
//! Adapters sample the pins first and drive their outputs second within one
//! edge, so a handshake completes on the edge after both sides raise their
//! flags. While reset is asserted every driven output is held quiescent.

pub mod axi2tlm;
pub mod tlm2axi;

use crate::sim::engine::ExecutionEngine;
use crate::soc::interface::{InterfaceSpec, InterfaceWidths, Role, Slot};

/// Address-phase channel pins (shared shape for AW and AR).
#[derive(Clone, Copy, Debug, Default)]
pub struct AddrChannel {
    /// Address valid.
    pub valid: bool,
    /// Address ready.
    pub ready: bool,
    /// Burst start address.
    pub addr: u64,
    /// Transaction id.
    pub id: u64,
    /// Burst length field (`AxLEN`, beats minus one).
    pub len: u64,
    /// Beat size field (`AxSIZE`).
    pub size: u64,
    /// Burst type field (`AxBURST`).
    pub burst: u64,
    /// Lock field.
    pub lock: u64,
    /// Cache attribute field.
    pub cache: u64,
    /// Protection attribute field.
    pub prot: u64,
    /// Quality-of-service field.
    pub qos: u64,
    /// Region identifier field.
    pub region: u64,
    /// User sideband field.
    pub user: u64,
}

/// Write-data channel pins.
#[derive(Clone, Copy, Debug, Default)]
pub struct WriteDataChannel {
    /// Data valid.
    pub valid: bool,
    /// Data ready.
    pub ready: bool,
    /// Write data for the current beat.
    pub data: u64,
    /// Byte strobes for the current beat.
    pub strb: u64,
    /// Last beat of the burst.
    pub last: bool,
}

/// Write-response channel pins.
#[derive(Clone, Copy, Debug, Default)]
pub struct WriteRespChannel {
    /// Response valid.
    pub valid: bool,
    /// Response ready.
    pub ready: bool,
    /// Transaction id echo.
    pub id: u64,
    /// Response code (`BRESP`).
    pub resp: u64,
}

/// Read-data channel pins.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReadDataChannel {
    /// Data valid.
    pub valid: bool,
    /// Data ready.
    pub ready: bool,
    /// Transaction id echo.
    pub id: u64,
    /// Read data for the current beat.
    pub data: u64,
    /// Response code (`RRESP`).
    pub resp: u64,
    /// Last beat of the burst.
    pub last: bool,
}

/// All five AXI channels of one interface slot, plus clock and reset.
///
/// The all-zero default is the quiescent state: no valids, no readys, zero
/// payloads, reset asserted. Disabled slots keep this state for the whole
/// run.
#[derive(Clone, Copy, Debug, Default)]
pub struct AxiPins {
    /// Interface clock; pulsed high while an injected rising edge is being
    /// processed and low between edges.
    pub aclk: bool,
    /// Active-low reset; mirrors the model's reset output.
    pub aresetn: bool,
    /// Write-address channel.
    pub aw: AddrChannel,
    /// Write-data channel.
    pub w: WriteDataChannel,
    /// Write-response channel.
    pub b: WriteRespChannel,
    /// Read-address channel.
    pub ar: AddrChannel,
    /// Read-data channel.
    pub r: ReadDataChannel,
}

impl AxiPins {
    /// Builds a quiescent pin group.
    pub const fn quiescent() -> Self {
        Self {
            aclk: false,
            aresetn: false,
            aw: AddrChannel {
                valid: false,
                ready: false,
                addr: 0,
                id: 0,
                len: 0,
                size: 0,
                burst: 0,
                lock: 0,
                cache: 0,
                prot: 0,
                qos: 0,
                region: 0,
                user: 0,
            },
            w: WriteDataChannel {
                valid: false,
                ready: false,
                data: 0,
                strb: 0,
                last: false,
            },
            b: WriteRespChannel {
                valid: false,
                ready: false,
                id: 0,
                resp: 0,
            },
            ar: AddrChannel {
                valid: false,
                ready: false,
                addr: 0,
                id: 0,
                len: 0,
                size: 0,
                burst: 0,
                lock: 0,
                cache: 0,
                prot: 0,
                qos: 0,
                region: 0,
                user: 0,
            },
            r: ReadDataChannel {
                valid: false,
                ready: false,
                id: 0,
                data: 0,
                resp: 0,
                last: false,
            },
        }
    }
}

enum RoleState {
    Target(axi2tlm::TargetState),
    Initiator(tlm2axi::InitiatorState),
}

/// Per-slot adapter between the pins and the execution engine.
///
/// An adapter exists only for enabled slots. It holds the slot's resolved
/// widths and the in-flight burst state of its role FSM; it does not own the
/// pins or the engine, both are lent to it on every edge.
pub struct BridgeAdapter {
    slot: Slot,
    widths: InterfaceWidths,
    state: RoleState,
}

impl BridgeAdapter {
    /// Builds the adapter for one resolved slot spec.
    pub fn new(spec: &InterfaceSpec) -> Self {
        let state = match spec.role {
            Role::Target => RoleState::Target(axi2tlm::TargetState::new()),
            Role::Initiator => RoleState::Initiator(tlm2axi::InitiatorState::new()),
        };
        Self {
            slot: spec.slot,
            widths: spec.widths,
            state,
        }
    }

    /// The slot this adapter serves.
    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// Steps the adapter by one rising edge of the interface clock.
    ///
    /// `in_reset` reflects the active-high reset line; while it is set the
    /// adapter drops any in-flight burst and drives quiescent outputs.
    pub fn posedge(
        &mut self,
        pins: &mut AxiPins,
        in_reset: bool,
        engine: &mut dyn ExecutionEngine,
    ) {
        match &mut self.state {
            RoleState::Target(target) => {
                target.posedge(self.slot, &self.widths, pins, in_reset, engine);
            }
            RoleState::Initiator(initiator) => {
                initiator.posedge(self.slot, &self.widths, pins, in_reset, engine);
            }
        }
    }
}

impl std::fmt::Debug for BridgeAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let role = match self.state {
            RoleState::Target(_) => Role::Target,
            RoleState::Initiator(_) => Role::Initiator,
        };
        f.debug_struct("BridgeAdapter")
            .field("slot", &self.slot)
            .field("role", &role)
            .field("widths", &self.widths)
            .finish_non_exhaustive()
    }
}
