//! Bus transaction records.
//!
//! This module defines the interface-neutral transaction form that the pin
//! adapters exchange with the execution engine. It provides:
//! 1. **Requests:** A complete burst (address phase plus every data beat)
//!    gathered into one record, delivered exactly once.
//! 2. **Responses:** The matching completion, carrying the response code and
//!    read data.
//! 3. **Encodings:** Burst-type and response-code field values as they appear
//!    on the pins.
//!
//! Both records derive `serde` traits so the remote engine link can carry
//! them as JSON frames.

use serde::{Deserialize, Serialize};

/// Whether a transaction reads or writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessKind {
    /// Read burst (AR/R channels).
    Read,
    /// Write burst (AW/W/B channels).
    Write,
}

/// AXI burst type as encoded in the two-bit `AxBURST` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BurstType {
    /// Every beat targets the same address.
    Fixed,
    /// Each beat increments the address by the beat size.
    Incr,
    /// Incrementing with wrap at an aligned boundary.
    Wrap,
}

impl BurstType {
    /// Returns the on-pin field encoding.
    pub const fn bits(self) -> u64 {
        match self {
            Self::Fixed => 0,
            Self::Incr => 1,
            Self::Wrap => 2,
        }
    }

    /// Decodes the on-pin field encoding, defaulting reserved values to
    /// incrementing.
    pub const fn from_bits(bits: u64) -> Self {
        match bits & 0b11 {
            0 => Self::Fixed,
            2 => Self::Wrap,
            _ => Self::Incr,
        }
    }
}

/// AXI response code as encoded in the two-bit `xRESP` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RespCode {
    /// Normal completion.
    Okay,
    /// Exclusive-access success.
    ExOkay,
    /// Target signalled an error.
    SlvErr,
    /// No target decoded the address.
    DecErr,
}

impl RespCode {
    /// Returns the on-pin field encoding.
    pub const fn bits(self) -> u64 {
        match self {
            Self::Okay => 0,
            Self::ExOkay => 1,
            Self::SlvErr => 2,
            Self::DecErr => 3,
        }
    }

    /// Decodes the on-pin field encoding.
    pub const fn from_bits(bits: u64) -> Self {
        match bits & 0b11 {
            0 => Self::Okay,
            1 => Self::ExOkay,
            2 => Self::SlvErr,
            _ => Self::DecErr,
        }
    }
}

/// One complete burst, address phase plus data beats.
///
/// A write request carries `len + 1` data beats and matching strobe words; a
/// read request carries none. An adapter hands a request to the engine only
/// once the burst is whole, so partial bursts are never visible past the pin
/// boundary.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BusRequest {
    /// Read or write.
    pub kind: AccessKind,
    /// Burst start address, masked to the interface address width.
    pub addr: u64,
    /// Transaction id, masked to the interface id width.
    pub id: u64,
    /// Raw `AxLEN` field; the burst has `len + 1` beats.
    pub len: u8,
    /// Raw `AxSIZE` field; each beat carries `1 << size` bytes.
    pub size: u8,
    /// Burst address pattern.
    pub burst: BurstType,
    /// Raw `AxLOCK` field.
    pub lock: u64,
    /// Raw `AxQOS` field.
    pub qos: u64,
    /// Raw `AxCACHE` field.
    pub cache: u64,
    /// Raw `AxPROT` field.
    pub prot: u64,
    /// Write data, one word per beat, masked to the data width. Empty for
    /// reads.
    pub data: Vec<u64>,
    /// Write strobes, one word per beat. Empty for reads.
    pub strb: Vec<u64>,
}

impl BusRequest {
    /// Returns the number of data beats in the burst.
    #[inline]
    pub const fn beats(&self) -> usize {
        self.len as usize + 1
    }
}

/// Completion of one burst.
///
/// A read response carries `len + 1` data beats; a write response carries
/// none. The response code is reflected verbatim onto the B or R channel.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BusResponse {
    /// Transaction id, echoed from the request.
    pub id: u64,
    /// Completion status.
    pub resp: RespCode,
    /// Read data, one word per beat. Empty for writes.
    pub data: Vec<u64>,
}

impl BusResponse {
    /// Builds a plain-okay write completion for `id`.
    pub const fn write_okay(id: u64) -> Self {
        Self {
            id,
            resp: RespCode::Okay,
            data: Vec::new(),
        }
    }
}
