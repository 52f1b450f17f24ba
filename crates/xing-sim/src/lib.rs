//! `xing-sim` — fleet orchestration for the crossing simulator.
//!
//! # Frame loop
//!
//! ```text
//! spawn:  one named thread per requested trip; block on the start latch
//!         until every agent has registered.
//! run:    loop until all vehicles are Finished:
//!           ① sleep frame_interval              (renderer pacing)
//!           ② fan-out lock the fleet            (consistent snapshot)
//!           ③ capture snapshots, flip Moved→Running
//!           ④ present the frame signal          (wake settled vehicles)
//!           ⑤ observer.on_frame(…)
//!         then join all agent threads.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use xing_core::Terminal;
//! use xing_sim::{FleetBuilder, NoopObserver};
//!
//! let fleet = FleetBuilder::new()
//!     .trip(Terminal::A, Terminal::C)
//!     .trip(Terminal::B, Terminal::D)
//!     .spawn()?;
//! let frames = fleet.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod fleet;
pub mod observer;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use builder::{FleetBuilder, Trip};
pub use error::{SimError, SimResult};
pub use fleet::Fleet;
pub use observer::{FleetObserver, NoopObserver};
pub use snapshot::VehicleSnapshot;
