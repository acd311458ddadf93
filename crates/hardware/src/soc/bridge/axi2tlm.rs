//! Target-role adapter FSM.
//!
//! Serves the S_AXI slots: the fabric issues bursts onto the pins and this
//! FSM captures them, delivers each completed burst to the execution engine
//! exactly once, and reflects the completion back onto the response channel.
//!
//! Write and read directions run independently, one outstanding burst each.
//! Each edge samples the pins first and drives outputs second, so address
//! ready goes high one edge before the first handshake can complete.

use tracing::trace;

use crate::common::bit_mask;
use crate::sim::engine::ExecutionEngine;
use crate::soc::interface::{InterfaceWidths, Slot};
use crate::soc::txn::{AccessKind, BurstType, BusRequest, BusResponse};

use super::{AddrChannel, AxiPins};

/// Captured address phase of an in-flight burst.
#[derive(Clone, Copy, Debug)]
struct BurstDesc {
    addr: u64,
    id: u64,
    len: u8,
    size: u8,
    burst: BurstType,
    lock: u64,
    qos: u64,
    cache: u64,
    prot: u64,
}

impl BurstDesc {
    fn capture(ch: &AddrChannel, w: &InterfaceWidths) -> Self {
        Self {
            addr: ch.addr & bit_mask(w.addr),
            id: ch.id & bit_mask(w.id),
            len: (ch.len & bit_mask(w.len)) as u8,
            size: (ch.size & 0b111) as u8,
            burst: BurstType::from_bits(ch.burst),
            lock: ch.lock & bit_mask(w.lock),
            qos: ch.qos & 0b1111,
            cache: ch.cache & 0b1111,
            prot: ch.prot & 0b111,
        }
    }

    fn into_request(self, kind: AccessKind, data: Vec<u64>, strb: Vec<u64>) -> BusRequest {
        BusRequest {
            kind,
            addr: self.addr,
            id: self.id,
            len: self.len,
            size: self.size,
            burst: self.burst,
            lock: self.lock,
            qos: self.qos,
            cache: self.cache,
            prot: self.prot,
            data,
            strb,
        }
    }
}

#[derive(Debug)]
enum WriteDir {
    /// Waiting for an address handshake.
    Idle,
    /// Address captured; collecting data beats.
    Collect {
        desc: BurstDesc,
        data: Vec<u64>,
        strb: Vec<u64>,
    },
    /// Burst delivered; holding the response until the B handshake.
    Respond { id: u64, resp: u64 },
}

#[derive(Debug)]
enum ReadDir {
    /// Waiting for an address handshake.
    Idle,
    /// Completion in hand; streaming data beats.
    Stream {
        rsp: BusResponse,
        len: u8,
        beat: usize,
    },
}

/// Target-role state, one in-flight burst per direction.
#[derive(Debug)]
pub(super) struct TargetState {
    write: WriteDir,
    read: ReadDir,
}

impl TargetState {
    pub(super) fn new() -> Self {
        Self {
            write: WriteDir::Idle,
            read: ReadDir::Idle,
        }
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
            self.write = WriteDir::Idle;
            self.read = ReadDir::Idle;
            // Only the adapter-driven outputs; the fabric owns the rest.
            pins.aw.ready = false;
            pins.w.ready = false;
            pins.ar.ready = false;
            pins.b.valid = false;
            pins.b.id = 0;
            pins.b.resp = 0;
            pins.r.valid = false;
            pins.r.id = 0;
            pins.r.resp = 0;
            pins.r.data = 0;
            pins.r.last = false;
            return;
        }
        self.write_posedge(slot, widths, pins, engine);
        self.read_posedge(slot, widths, pins, engine);
    }

    fn write_posedge(
        &mut self,
        slot: Slot,
        widths: &InterfaceWidths,
        pins: &mut AxiPins,
        engine: &mut dyn ExecutionEngine,
    ) {
        // Sample this edge's handshakes against the outputs driven last edge.
        match &mut self.write {
            WriteDir::Idle => {
                if pins.aw.valid && pins.aw.ready {
                    let desc = BurstDesc::capture(&pins.aw, widths);
                    trace!(%slot, addr = desc.addr, len = desc.len, "write address accepted");
                    self.write = WriteDir::Collect {
                        desc,
                        data: Vec::with_capacity(desc.len as usize + 1),
                        strb: Vec::with_capacity(desc.len as usize + 1),
                    };
                }
            }
            WriteDir::Collect { desc, data, strb } => {
                if pins.w.valid && pins.w.ready {
                    data.push(pins.w.data & bit_mask(widths.data));
                    strb.push(pins.w.strb & bit_mask(widths.strb()));
                    let complete = pins.w.last || data.len() == desc.len as usize + 1;
                    if complete {
                        assert_eq!(
                            data.len(),
                            desc.len as usize + 1,
                            "interface {slot}: write burst ended after {} beats, awlen expects {}",
                            data.len(),
                            desc.len as usize + 1
                        );
                        let desc = *desc;
                        let data = std::mem::take(data);
                        let strb = std::mem::take(strb);
                        let req = desc.into_request(AccessKind::Write, data, strb);
                        let rsp = engine.target_request(slot, req);
                        self.write = WriteDir::Respond {
                            id: rsp.id & bit_mask(widths.id),
                            resp: rsp.resp.bits(),
                        };
                    }
                }
            }
            WriteDir::Respond { .. } => {
                if pins.b.valid && pins.b.ready {
                    self.write = WriteDir::Idle;
                }
            }
        }

        // Drive outputs for the next edge.
        pins.aw.ready = matches!(self.write, WriteDir::Idle);
        pins.w.ready = matches!(self.write, WriteDir::Collect { .. });
        match self.write {
            WriteDir::Respond { id, resp } => {
                pins.b.valid = true;
                pins.b.id = id;
                pins.b.resp = resp;
            }
            _ => {
                pins.b.valid = false;
                pins.b.id = 0;
                pins.b.resp = 0;
            }
        }
    }

    fn read_posedge(
        &mut self,
        slot: Slot,
        widths: &InterfaceWidths,
        pins: &mut AxiPins,
        engine: &mut dyn ExecutionEngine,
    ) {
        match &mut self.read {
            ReadDir::Idle => {
                if pins.ar.valid && pins.ar.ready {
                    let desc = BurstDesc::capture(&pins.ar, widths);
                    trace!(%slot, addr = desc.addr, len = desc.len, "read address accepted");
                    let len = desc.len;
                    let req = desc.into_request(AccessKind::Read, Vec::new(), Vec::new());
                    let rsp = engine.target_request(slot, req);
                    self.read = ReadDir::Stream { rsp, len, beat: 0 };
                }
            }
            ReadDir::Stream { len, beat, .. } => {
                if pins.r.valid && pins.r.ready {
                    *beat += 1;
                    if *beat > *len as usize {
                        self.read = ReadDir::Idle;
                    }
                }
            }
        }

        pins.ar.ready = matches!(self.read, ReadDir::Idle);
        match &self.read {
            ReadDir::Stream { rsp, len, beat } => {
                pins.r.valid = true;
                pins.r.id = rsp.id & bit_mask(widths.id);
                pins.r.resp = rsp.resp.bits();
                pins.r.data = rsp.data.get(*beat).copied().unwrap_or(0) & bit_mask(widths.data);
                pins.r.last = *beat == *len as usize;
            }
            ReadDir::Idle => {
                pins.r.valid = false;
                pins.r.id = 0;
                pins.r.resp = 0;
                pins.r.data = 0;
                pins.r.last = false;
            }
        }
    }
}
