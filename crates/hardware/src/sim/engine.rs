//! Execution-engine link.
//!
//! This module is the seam between the hardware model and the software
//! execution engine that runs guest code. It provides:
//! 1. **The Trait:** [`ExecutionEngine`], everything the model asks of the
//!    engine (time sync, interrupt levels, transaction delivery).
//! 2. **Remote Link:** [`RemoteEngine`], a unix-socket connection carrying
//!    newline-delimited JSON frames to an external engine process.
//! 3. **Lockstep Engine:** [`LockstepEngine`], an in-process engine backed by
//!    a sparse byte memory, used by tests and standalone runs.
//!
//! The connection is mandatory: a model is never constructed in a
//! disconnected mode, and a broken link mid-run is a fatal fault rather than
//! a recoverable error.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixStream;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::common::{SetupError, SimTime, bit_mask};
use crate::soc::interface::Slot;
use crate::soc::txn::{AccessKind, BurstType, BusRequest, BusResponse, RespCode};

/// Everything the hardware model asks of the execution engine.
///
/// Implementations are driven from the single simulation thread; none of the
/// methods are re-entered.
pub trait ExecutionEngine {
    /// Performs one synchronization exchange.
    ///
    /// Reports the model's local time and returns the engine's acknowledged
    /// time; the model may then run one quantum past the acknowledgement.
    fn sync(&mut self, local: SimTime) -> SimTime;

    /// Sets the level of one interrupt destination line.
    fn set_irq(&mut self, line: usize, level: bool);

    /// Delivers one complete burst captured on a target slot and returns its
    /// completion.
    fn target_request(&mut self, slot: Slot, req: BusRequest) -> BusResponse;

    /// Fetches the next burst the engine wants to issue through an initiator
    /// slot, if any.
    fn poll_initiator(&mut self, slot: Slot) -> Option<BusRequest>;

    /// Returns the completion of a burst previously fetched with
    /// [`ExecutionEngine::poll_initiator`].
    fn complete_initiator(&mut self, slot: Slot, rsp: BusResponse);
}

#[derive(Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Frame<'a> {
    Sync { time_ns: u64 },
    SetIrq { line: usize, level: bool },
    TargetRequest { slot: &'a str, req: &'a BusRequest },
    PollInitiator { slot: &'a str },
    CompleteInitiator { slot: &'a str, rsp: &'a BusResponse },
}

#[derive(Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Reply {
    SyncAck { time_ns: u64 },
    TargetResponse { rsp: BusResponse },
    InitiatorRequest { req: Option<BusRequest> },
}

/// Connection to an external execution engine over a unix socket.
///
/// Frames are JSON objects, one per line. `Sync`, `TargetRequest` and
/// `PollInitiator` each expect exactly one reply line; `SetIrq` and
/// `CompleteInitiator` are one-way.
pub struct RemoteEngine {
    writer: UnixStream,
    reader: BufReader<UnixStream>,
    endpoint: String,
}

impl RemoteEngine {
    /// Connects to `endpoint`, which must have the form `unix:<path>`.
    ///
    /// # Errors
    ///
    /// [`SetupError::MalformedEndpoint`] for an unsupported scheme and
    /// [`SetupError::EndpointUnreachable`] when the socket cannot be opened.
    pub fn connect(endpoint: &str) -> Result<Self, SetupError> {
        let path = endpoint
            .strip_prefix("unix:")
            .ok_or_else(|| SetupError::MalformedEndpoint(endpoint.to_string()))?;
        let stream = UnixStream::connect(path).map_err(|source| SetupError::EndpointUnreachable {
            endpoint: endpoint.to_string(),
            source,
        })?;
        let reader = BufReader::new(stream.try_clone().map_err(|source| {
            SetupError::EndpointUnreachable {
                endpoint: endpoint.to_string(),
                source,
            }
        })?);
        info!(endpoint, "connected to execution engine");
        Ok(Self {
            writer: stream,
            reader,
            endpoint: endpoint.to_string(),
        })
    }

    /// The endpoint this link was opened against.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn send(&mut self, frame: &Frame<'_>) {
        let mut line = match serde_json::to_vec(frame) {
            Ok(line) => line,
            Err(err) => panic!("frame serialization failed: {err}"),
        };
        line.push(b'\n');
        if let Err(err) = self.writer.write_all(&line) {
            panic!("execution engine link `{}` broken: {err}", self.endpoint);
        }
    }

    fn receive(&mut self) -> Reply {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => panic!(
                "execution engine `{}` closed the connection mid-run",
                self.endpoint
            ),
            Ok(_) => {}
            Err(err) => panic!("execution engine link `{}` broken: {err}", self.endpoint),
        }
        match serde_json::from_str(&line) {
            Ok(reply) => reply,
            Err(err) => panic!(
                "execution engine `{}` sent a malformed frame: {err}",
                self.endpoint
            ),
        }
    }
}

impl std::fmt::Debug for RemoteEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteEngine")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl ExecutionEngine for RemoteEngine {
    fn sync(&mut self, local: SimTime) -> SimTime {
        self.send(&Frame::Sync {
            time_ns: local.as_ns(),
        });
        match self.receive() {
            Reply::SyncAck { time_ns } => SimTime::from_ns(time_ns),
            _ => panic!("execution engine `{}` replied out of order", self.endpoint),
        }
    }

    fn set_irq(&mut self, line: usize, level: bool) {
        self.send(&Frame::SetIrq { line, level });
    }

    fn target_request(&mut self, slot: Slot, req: BusRequest) -> BusResponse {
        self.send(&Frame::TargetRequest {
            slot: slot.name(),
            req: &req,
        });
        match self.receive() {
            Reply::TargetResponse { rsp } => rsp,
            _ => panic!("execution engine `{}` replied out of order", self.endpoint),
        }
    }

    fn poll_initiator(&mut self, slot: Slot) -> Option<BusRequest> {
        self.send(&Frame::PollInitiator { slot: slot.name() });
        match self.receive() {
            Reply::InitiatorRequest { req } => req,
            _ => panic!("execution engine `{}` replied out of order", self.endpoint),
        }
    }

    fn complete_initiator(&mut self, slot: Slot, rsp: BusResponse) {
        self.send(&Frame::CompleteInitiator {
            slot: slot.name(),
            rsp: &rsp,
        });
    }
}

/// In-process execution engine running in lockstep with the model.
///
/// Target bursts are applied to a sparse byte memory and acknowledged
/// immediately; initiator bursts are fed from a queue filled by the caller.
/// Every delivered request and interrupt level is recorded so tests can
/// assert on exact delivery.
#[derive(Debug, Default)]
pub struct LockstepEngine {
    mem: HashMap<u64, u8>,
    irq: [bool; 16],
    queued: Vec<(Slot, BusRequest)>,
    completions: Vec<(Slot, BusResponse)>,
    delivered: Vec<(Slot, BusRequest)>,
    synced_at: Vec<SimTime>,
}

impl LockstepEngine {
    /// Builds an engine with empty memory and all interrupt lines low.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a burst for an initiator slot to fetch.
    pub fn push_request(&mut self, slot: Slot, req: BusRequest) {
        self.queued.push((slot, req));
    }

    /// Drains the completions returned through initiator slots.
    pub fn take_completions(&mut self) -> Vec<(Slot, BusResponse)> {
        std::mem::take(&mut self.completions)
    }

    /// Every target burst delivered so far, in delivery order.
    pub fn delivered(&self) -> &[(Slot, BusRequest)] {
        &self.delivered
    }

    /// Timestamps of the synchronization exchanges performed so far.
    pub fn sync_times(&self) -> &[SimTime] {
        &self.synced_at
    }

    /// Current level of one interrupt destination line.
    pub fn irq_level(&self, line: usize) -> bool {
        self.irq[line]
    }

    /// Reads one byte of engine memory (zero if never written).
    pub fn read_byte(&self, addr: u64) -> u8 {
        self.mem.get(&addr).copied().unwrap_or(0)
    }

    /// Writes one byte of engine memory.
    pub fn write_byte(&mut self, addr: u64, value: u8) {
        drop(self.mem.insert(addr, value));
    }

    fn apply_write(&mut self, req: &BusRequest) {
        let bytes = 1u64 << req.size;
        for beat in 0..req.beats() {
            let base = beat_addr(req, beat);
            let word = req.data[beat];
            let strb = req.strb[beat];
            for byte in 0..bytes {
                if strb & (1 << byte) != 0 {
                    self.write_byte(base + byte, (word >> (byte * 8)) as u8);
                }
            }
        }
    }

    fn gather_read(&self, req: &BusRequest) -> Vec<u64> {
        let bytes = 1u64 << req.size;
        (0..req.beats())
            .map(|beat| {
                let base = beat_addr(req, beat);
                (0..bytes).fold(0u64, |word, byte| {
                    word | u64::from(self.read_byte(base + byte)) << (byte * 8)
                })
            })
            .collect()
    }
}

/// Address of beat `beat` within a burst.
fn beat_addr(req: &BusRequest, beat: usize) -> u64 {
    let bytes = 1u64 << req.size;
    let step = bytes * beat as u64;
    match req.burst {
        BurstType::Fixed => req.addr,
        BurstType::Incr => req.addr + step,
        BurstType::Wrap => {
            let boundary = bytes * req.beats() as u64;
            let base = req.addr & !(boundary - 1);
            base + (req.addr - base + step) % boundary
        }
    }
}

impl ExecutionEngine for LockstepEngine {
    fn sync(&mut self, local: SimTime) -> SimTime {
        self.synced_at.push(local);
        local
    }

    fn set_irq(&mut self, line: usize, level: bool) {
        self.irq[line] = level;
    }

    fn target_request(&mut self, slot: Slot, req: BusRequest) -> BusResponse {
        debug!(%slot, addr = req.addr, beats = req.beats(), "target burst delivered");
        let rsp = match req.kind {
            AccessKind::Write => {
                self.apply_write(&req);
                BusResponse::write_okay(req.id)
            }
            AccessKind::Read => BusResponse {
                id: req.id,
                resp: RespCode::Okay,
                data: self.gather_read(&req),
            },
        };
        self.delivered.push((slot, req));
        rsp
    }

    fn poll_initiator(&mut self, slot: Slot) -> Option<BusRequest> {
        let at = self.queued.iter().position(|(s, _)| *s == slot)?;
        Some(self.queued.remove(at).1)
    }

    fn complete_initiator(&mut self, slot: Slot, rsp: BusResponse) {
        self.completions.push((slot, rsp));
    }
}

/// Builds an incrementing write burst, masking data to `data_width`.
///
/// Convenience for engine users and tests; `len` is the raw `AxLEN` field.
pub fn write_burst(addr: u64, id: u64, len: u8, size: u8, data_width: u32, data: &[u64]) -> BusRequest {
    let mask = bit_mask(data_width);
    BusRequest {
        kind: AccessKind::Write,
        addr,
        id,
        len,
        size,
        burst: BurstType::Incr,
        lock: 0,
        qos: 0,
        cache: 0,
        prot: 0,
        data: data.iter().map(|d| d & mask).collect(),
        strb: vec![bit_mask(data_width / 8); data.len()],
    }
}
