//! Hardware/software co-simulation model of the Zynq-7000 processing system.
//!
//! The crate models the PS side of the chip for a fabric-level simulation:
//! the eight AXI interface slots, the four fabric clocks, the power-on
//! reset, and the fabric interrupt fan-in, all driven by a single
//! discrete-event run loop kept within a bounded time skew of an external
//! execution engine.
//!
//! The crate is organized as follows:
//! 1. **`common`**: Simulated time and the fatal setup error type.
//! 2. **`config`**: The serde configuration tree.
//! 3. **`sim`**: Event queue, quantum keeper, and the engine seam.
//! 4. **`soc`**: The modelled hardware, topped by [`Zynq7Ps`].
//!
//! # Examples
//!
//! ```no_run
//! use zynq7_cosim::{Config, SimTime, Zynq7Ps};
//!
//! let mut config = Config::default();
//! config.interfaces.s_axi_hp0.enabled = true;
//!
//! let mut ps = Zynq7Ps::new(&config)?;
//! ps.run_for(SimTime::from_ns(2_000_000));
//! assert!(!ps.rst());
//! # Ok::<(), zynq7_cosim::SetupError>(())
//! ```

/// Shared fundamentals.
pub mod common;

/// Configuration structures.
pub mod config;

/// Simulation machinery.
pub mod sim;

/// Modelled hardware.
pub mod soc;

pub use common::{SetupError, SimTime};
pub use config::Config;
pub use soc::Zynq7Ps;
