//! Fleet observer trait for rendering and data collection.

use crate::VehicleSnapshot;

/// Callbacks invoked by [`Fleet::run`][crate::Fleet::run] at frame
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl FleetObserver for ProgressPrinter {
///     fn on_frame(&mut self, frame: u64, vehicles: &[VehicleSnapshot]) {
///         let done = vehicles.iter().filter(|v| v.state.is_terminal()).count();
///         println!("frame {frame}: {done}/{} finished", vehicles.len());
///     }
/// }
/// ```
pub trait FleetObserver {
    /// Called once per presented frame with a consistent snapshot of every
    /// vehicle, in registration order.
    fn on_frame(&mut self, _frame: u64, _vehicles: &[VehicleSnapshot]) {}

    /// Called once after the last vehicle finishes, before threads join.
    fn on_fleet_end(&mut self, _frames: u64) {}
}

/// A [`FleetObserver`] that does nothing.  Use when you need to call `run`
/// but don't want callbacks.
pub struct NoopObserver;

impl FleetObserver for NoopObserver {}
