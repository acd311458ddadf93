//! Initiator-role adapter FSM.
//!
//! Serves the M_AXI slots: the execution engine issues bursts and this FSM
//! drives them onto the pins, walking the address, data, and response
//! channels with proper handshakes, then hands the completion back to the
//! engine.
//!
//! One burst is in flight at a time; the engine is polled for the next burst
//! only once the previous completion has been returned. Each edge samples the
//! pins first and drives outputs second.

use tracing::trace;

use crate::common::bit_mask;
use crate::sim::engine::ExecutionEngine;
use crate::soc::interface::{InterfaceWidths, Slot};
use crate::soc::txn::{AccessKind, BusRequest, BusResponse, RespCode};

use super::{AddrChannel, AxiPins};

#[derive(Debug)]
enum Phase {
    /// No burst in flight; poll the engine.
    Idle,
    /// Driving the write-address channel.
    WriteAddr(BusRequest),
    /// Driving write-data beats.
    WriteData { req: BusRequest, beat: usize },
    /// Waiting for the write response.
    WriteResp { id: u64 },
    /// Driving the read-address channel.
    ReadAddr(BusRequest),
    /// Collecting read-data beats.
    ReadData { id: u64, data: Vec<u64> },
}

/// Initiator-role state, one in-flight burst.
#[derive(Debug)]
pub(super) struct InitiatorState {
    phase: Phase,
}

impl InitiatorState {
    pub(super) fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    pub(super) fn posedge(
        &mut self,
        slot: Slot,
        widths: &InterfaceWidths,
        pins: &mut AxiPins,
        in_reset: bool,
        engine: &mut dyn ExecutionEngine,
    ) {
        if in_reset {
            self.phase = Phase::Idle;
            // Only the adapter-driven outputs; the fabric owns the rest.
            clear_addr_outputs(&mut pins.aw);
            clear_addr_outputs(&mut pins.ar);
            pins.w.valid = false;
            pins.w.data = 0;
            pins.w.strb = 0;
            pins.w.last = false;
            pins.b.ready = false;
            pins.r.ready = false;
            return;
        }

        // Sample this edge's handshakes against the outputs driven last edge.
        self.phase = match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => match engine.poll_initiator(slot) {
                Some(req) => {
                    trace!(%slot, addr = req.addr, len = req.len, kind = ?req.kind, "burst issued");
                    match req.kind {
                        AccessKind::Write => {
                            // Every beat is indexed while the data channel is
                            // driven; a short burst is an engine defect.
                            assert_eq!(
                                req.data.len(),
                                req.beats(),
                                "interface {slot}: write burst carries {} beats of data, awlen expects {}",
                                req.data.len(),
                                req.beats()
                            );
                            assert_eq!(
                                req.strb.len(),
                                req.beats(),
                                "interface {slot}: write burst carries {} beats of strobes, awlen expects {}",
                                req.strb.len(),
                                req.beats()
                            );
                            Phase::WriteAddr(req)
                        }
                        AccessKind::Read => Phase::ReadAddr(req),
                    }
                }
                None => Phase::Idle,
            },
            Phase::WriteAddr(req) => {
                if pins.aw.valid && pins.aw.ready {
                    Phase::WriteData { req, beat: 0 }
                } else {
                    Phase::WriteAddr(req)
                }
            }
            Phase::WriteData { req, beat } => {
                if pins.w.valid && pins.w.ready {
                    if beat + 1 == req.beats() {
                        Phase::WriteResp { id: req.id }
                    } else {
                        Phase::WriteData {
                            req,
                            beat: beat + 1,
                        }
                    }
                } else {
                    Phase::WriteData { req, beat }
                }
            }
            Phase::WriteResp { id } => {
                if pins.b.valid && pins.b.ready {
                    let bid = pins.b.id & bit_mask(widths.id);
                    assert_eq!(
                        bid,
                        id & bit_mask(widths.id),
                        "interface {slot}: write response id {bid:#x} does not match the issued id"
                    );
                    engine.complete_initiator(
                        slot,
                        BusResponse {
                            id: bid,
                            resp: RespCode::from_bits(pins.b.resp),
                            data: Vec::new(),
                        },
                    );
                    Phase::Idle
                } else {
                    Phase::WriteResp { id }
                }
            }
            Phase::ReadAddr(req) => {
                if pins.ar.valid && pins.ar.ready {
                    let beats = req.beats();
                    Phase::ReadData {
                        id: req.id,
                        data: Vec::with_capacity(beats),
                    }
                } else {
                    Phase::ReadAddr(req)
                }
            }
            Phase::ReadData { id, mut data } => {
                if pins.r.valid && pins.r.ready {
                    data.push(pins.r.data & bit_mask(widths.data));
                    if pins.r.last {
                        engine.complete_initiator(
                            slot,
                            BusResponse {
                                id: pins.r.id & bit_mask(widths.id),
                                resp: RespCode::from_bits(pins.r.resp),
                                data,
                            },
                        );
                        Phase::Idle
                    } else {
                        Phase::ReadData { id, data }
                    }
                } else {
                    Phase::ReadData { id, data }
                }
            }
        };

        // Drive outputs for the next edge.
        match &self.phase {
            Phase::WriteAddr(req) => drive_addr(&mut pins.aw, req, widths),
            _ => clear_addr_outputs(&mut pins.aw),
        }
        match &self.phase {
            Phase::ReadAddr(req) => drive_addr(&mut pins.ar, req, widths),
            _ => clear_addr_outputs(&mut pins.ar),
        }
        match &self.phase {
            Phase::WriteData { req, beat } => {
                pins.w.valid = true;
                pins.w.data = req.data[*beat] & bit_mask(widths.data);
                pins.w.strb = req.strb[*beat] & bit_mask(widths.strb());
                pins.w.last = *beat + 1 == req.beats();
            }
            _ => {
                pins.w.valid = false;
                pins.w.data = 0;
                pins.w.strb = 0;
                pins.w.last = false;
            }
        }
        pins.b.ready = matches!(self.phase, Phase::WriteResp { .. });
        pins.r.ready = matches!(self.phase, Phase::ReadData { .. });
    }
}

fn drive_addr(ch: &mut AddrChannel, req: &BusRequest, w: &InterfaceWidths) {
    ch.valid = true;
    ch.addr = req.addr & bit_mask(w.addr);
    ch.id = req.id & bit_mask(w.id);
    ch.len = u64::from(req.len) & bit_mask(w.len);
    ch.size = u64::from(req.size) & 0b111;
    ch.burst = req.burst.bits();
    ch.lock = req.lock & bit_mask(w.lock);
    ch.cache = req.cache & 0b1111;
    ch.prot = req.prot & 0b111;
    ch.qos = req.qos & 0b1111;
    ch.region = 0;
    ch.user = 0;
}

fn clear_addr_outputs(ch: &mut AddrChannel) {
    ch.valid = false;
    ch.addr = 0;
    ch.id = 0;
    ch.len = 0;
    ch.size = 0;
    ch.burst = 0;
    ch.lock = 0;
    ch.cache = 0;
    ch.prot = 0;
    ch.qos = 0;
    ch.region = 0;
    ch.user = 0;
}
