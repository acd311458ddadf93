//! Top-level processing-system model.
//!
//! This module assembles the whole model. It provides:
//! 1. **Construction:** Eager validation of the configuration, adapter
//!    construction for every enabled slot, and the engine connection; any
//!    failure aborts before simulated time exists.
//! 2. **The Run Loop:** [`Zynq7Ps::run_for`], which pops the event queue in
//!    time order, keeps the quantum bound against the engine, and dispatches
//!    clock and reset events.
//! 3. **The Pin Boundary:** Per-slot pin access and the per-slot
//!    [`Zynq7Ps::interface_posedge`] step the fabric side drives.

use std::fmt;

use tracing::{info, warn};

use crate::common::{SetupError, SimTime};
use crate::config::Config;
use crate::sim::engine::{ExecutionEngine, RemoteEngine};
use crate::sim::quantum::QuantumKeeper;
use crate::sim::scheduler::{Event, EventQueue};
use crate::soc::bridge::{AxiPins, BridgeAdapter};
use crate::soc::clock::ClockDomain;
use crate::soc::interface::{InterfaceSpec, Slot};
use crate::soc::irq::IrqFanIn;
use crate::soc::reset::{RESET_RELEASE, ResetSequencer};

/// Number of fabric clock domains.
pub const FCLK_DOMAINS: usize = 4;

/// The processing-system model.
///
/// Owns the event queue, the clock and reset state, the eight pin groups,
/// and the adapters of the enabled slots. Generic over the engine so tests
/// can run against an in-process
/// [`LockstepEngine`](crate::sim::engine::LockstepEngine); production code
/// uses the default [`RemoteEngine`].
pub struct Zynq7Ps<E: ExecutionEngine = RemoteEngine> {
    specs: [InterfaceSpec; 8],
    queue: EventQueue,
    clocks: [ClockDomain; FCLK_DOMAINS],
    fclk: [bool; FCLK_DOMAINS],
    reset: ResetSequencer,
    irq: IrqFanIn,
    pins: Box<[AxiPins; 8]>,
    adapters: [Option<BridgeAdapter>; 8],
    engine: E,
    keeper: QuantumKeeper,
    now: SimTime,
}

impl Zynq7Ps<RemoteEngine> {
    /// Builds the model and connects to the configured engine endpoint.
    ///
    /// # Errors
    ///
    /// Any [`SetupError`]: disabled FCLK0, zero quantum, malformed interface
    /// widths, or an unreachable engine endpoint.
    pub fn new(config: &Config) -> Result<Self, SetupError> {
        let endpoint = resolve_endpoint(config);
        let engine = RemoteEngine::connect(&endpoint)?;
        Self::with_engine(config, engine)
    }
}

impl<E: ExecutionEngine> Zynq7Ps<E> {
    /// Builds the model around an already-constructed engine.
    ///
    /// # Errors
    ///
    /// Any configuration [`SetupError`]; the engine itself is taken as-is.
    pub fn with_engine(config: &Config, engine: E) -> Result<Self, SetupError> {
        let periods = config.clocks.periods();
        if periods[0] <= 0 {
            return Err(SetupError::MandatoryClockDisabled(periods[0]));
        }
        if config.engine.sync_quantum_ns == 0 {
            return Err(SetupError::ZeroQuantum);
        }

        let first = InterfaceSpec::resolve(Slot::MAxiGp0, config.interfaces.slot(Slot::MAxiGp0))?;
        let mut specs = [first; 8];
        for slot in &Slot::ALL[1..] {
            specs[slot.index()] = InterfaceSpec::resolve(*slot, config.interfaces.slot(*slot))?;
        }

        let clocks = periods.map(ClockDomain::from_period_ns);
        let mut queue = EventQueue::new();
        for (i, clock) in clocks.iter().enumerate() {
            if let Some(at) = clock.next_edge() {
                queue.schedule(at, Event::ClockToggle(i));
            }
        }
        queue.schedule(RESET_RELEASE, Event::ResetRelease);

        let adapters = specs.map(|spec| spec.enabled.then(|| BridgeAdapter::new(&spec)));
        for spec in &specs {
            if spec.enabled {
                info!(slot = %spec.slot, role = ?spec.role, widths = ?spec.widths, "interface enabled");
            }
        }
        info!(
            quantum_ns = config.engine.sync_quantum_ns,
            "synchronization quantum installed"
        );

        Ok(Self {
            specs,
            queue,
            clocks,
            fclk: [false; FCLK_DOMAINS],
            reset: ResetSequencer::new(),
            irq: IrqFanIn::new(),
            pins: Box::new([AxiPins::quiescent(); 8]),
            adapters,
            engine,
            keeper: QuantumKeeper::new(SimTime::from_ns(config.engine.sync_quantum_ns)),
            now: SimTime::ZERO,
        })
    }

    /// Runs the model for `duration` of simulated time.
    ///
    /// Pops every event up to `now + duration` in time order, keeping local
    /// time within one quantum of the engine's acknowledgements, then leaves
    /// local time exactly at the end of the window.
    pub fn run_for(&mut self, duration: SimTime) {
        let end = self.now + duration;
        while let Some((at, event)) = self.queue.pop_until(end) {
            self.advance_to(at);
            self.dispatch(event);
        }
        self.advance_to(end);
    }

    /// Steps one enabled interface by a rising edge of its clock.
    ///
    /// The fabric side drives the externally-owned pins, then calls this to
    /// let the slot's adapter sample and respond.
    ///
    /// # Panics
    ///
    /// If `slot` is disabled; a disabled slot has no adapter, and stepping
    /// one is a caller defect rather than a runtime condition.
    pub fn interface_posedge(&mut self, slot: Slot) {
        let idx = slot.index();
        let adapter = self.adapters[idx]
            .as_mut()
            .unwrap_or_else(|| panic!("interface {slot} is disabled; no adapter to step"));
        let in_reset = self.reset.rst();
        self.pins[idx].aclk = true;
        self.pins[idx].aresetn = !in_reset;
        adapter.posedge(&mut self.pins[idx], in_reset, &mut self.engine);
        // The pin only pulses for the edge; the falling half is not modelled.
        self.pins[idx].aclk = false;
    }

    /// Applies the 16-bit fabric interrupt vector.
    ///
    /// Bit `i` drives destination line `i`; all 16 levels are forwarded as
    /// one unit.
    pub fn set_irq_f2p(&mut self, vector: u16) {
        self.irq.apply(vector, &mut self.engine);
    }

    /// The pin group of one slot.
    ///
    /// Pins of disabled slots are readable too; they stay quiescent.
    pub fn pins(&self, slot: Slot) -> &AxiPins {
        &self.pins[slot.index()]
    }

    /// Mutable pin group of one slot, for the fabric side to drive.
    pub fn pins_mut(&mut self, slot: Slot) -> &mut AxiPins {
        &mut self.pins[slot.index()]
    }

    /// The resolved spec of one slot.
    pub fn interface_spec(&self, slot: Slot) -> &InterfaceSpec {
        &self.specs[slot.index()]
    }

    /// Current simulated time.
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Active-high power-on reset output.
    pub fn rst(&self) -> bool {
        self.reset.rst()
    }

    /// Active-low power-on reset output.
    pub fn rst_n(&self) -> bool {
        self.reset.rst_n()
    }

    /// Current level of one fabric clock output.
    pub fn fclk(&self, domain: usize) -> bool {
        self.fclk[domain]
    }

    /// Number of quantum synchronizations performed so far.
    pub fn sync_count(&self) -> u64 {
        self.keeper.sync_count()
    }

    /// The engine driving this model.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable access to the engine driving this model.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Advances local time to `t`, syncing with the engine whenever the
    /// quantum bound would otherwise be exceeded.
    fn advance_to(&mut self, t: SimTime) {
        while self.keeper.needs_sync(t) {
            let at = self.keeper.limit();
            self.now = at;
            let acked = self.engine.sync(at);
            self.keeper.acknowledged(acked);
            assert!(
                self.keeper.limit() > at,
                "execution engine acknowledgement did not advance past {at}"
            );
        }
        if t > self.now {
            self.now = t;
        }
    }

    fn dispatch(&mut self, event: Event) {
        match event {
            Event::ClockToggle(domain) => {
                let level = self.clocks[domain].toggle();
                self.fclk[domain] = level;
                if let Some(at) = self.clocks[domain].next_edge() {
                    self.queue.schedule(at, Event::ClockToggle(domain));
                }
            }
            Event::ResetRelease => {
                self.reset.release();
                info!(at = %self.now, "power-on reset released");
            }
        }
    }
}

impl<E: ExecutionEngine> fmt::Debug for Zynq7Ps<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Zynq7Ps")
            .field("now", &self.now)
            .field("rst", &self.reset.rst())
            .field("fclk", &self.fclk)
            .finish_non_exhaustive()
    }
}

/// Resolves the effective engine endpoint, logging an explicit override.
fn resolve_endpoint(config: &Config) -> String {
    if let Some(over) = &config.engine.endpoint_override {
        warn!(
            configured = %config.engine.endpoint,
            using = %over,
            "engine endpoint overridden"
        );
    }
    config.engine.resolved_endpoint().to_string()
}
