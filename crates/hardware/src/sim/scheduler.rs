//! Discrete-event scheduling.
//!
//! This module holds the central event queue that orders everything the model
//! does in simulated time. It provides:
//! 1. **Events:** The closed set of timed actions (clock toggles, the reset
//!    release).
//! 2. **Ordering:** Strict time order, with insertion order breaking ties so
//!    same-timestamp events fire deterministically.
//!
//! There is exactly one queue per model instance; clock domains and the reset
//! sequencer own state only, never timers.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::common::SimTime;

/// A timed action dispatched by the run loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Toggle the output of one clock domain (by domain index).
    ClockToggle(usize),
    /// Deassert the one-shot power-on reset.
    ResetRelease,
}

#[derive(Debug, PartialEq, Eq)]
struct Scheduled {
    at: SimTime,
    seq: u64,
    event: Event,
}

// BinaryHeap is a max-heap; invert the comparison so the earliest timestamp
// (and, within a timestamp, the earliest insertion) pops first.
impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .at
            .cmp(&self.at)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Time-ordered event queue.
#[derive(Debug, Default)]
pub struct EventQueue {
    heap: BinaryHeap<Scheduled>,
    next_seq: u64,
}

impl EventQueue {
    /// Builds an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `event` to fire at `at`.
    pub fn schedule(&mut self, at: SimTime, event: Event) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Scheduled { at, seq, event });
    }

    /// Timestamp of the earliest pending event, if any.
    pub fn next_time(&self) -> Option<SimTime> {
        self.heap.peek().map(|s| s.at)
    }

    /// Removes and returns the earliest pending event.
    pub fn pop(&mut self) -> Option<(SimTime, Event)> {
        self.heap.pop().map(|s| (s.at, s.event))
    }

    /// Removes and returns the earliest pending event at or before `limit`.
    pub fn pop_until(&mut self, limit: SimTime) -> Option<(SimTime, Event)> {
        if self.next_time()? <= limit {
            self.pop()
        } else {
            None
        }
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
