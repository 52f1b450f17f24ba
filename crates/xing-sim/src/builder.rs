//! Fluent builder for constructing a [`Fleet`].

use std::sync::Arc;
use std::thread;

use xing_core::{FleetConfig, Terminal, VehicleId};
use xing_map::{MAP_COLS, MAP_ROWS, PathTable, ZoneMap};
use xing_sync::{AdmissionGate, CellLockGrid, FrameSignal, StartLatch};
use xing_vehicle::{VehicleAgent, VehicleInfo, VehicleRegistry};

use crate::{Fleet, SimResult};

/// One requested journey: a vehicle enters at `origin` and leaves at
/// `destination`.  Identity trips are legal and complete with zero moves.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Trip {
    pub origin:      Terminal,
    pub destination: Terminal,
}

/// Fluent builder for [`Fleet`].
///
/// # Optional inputs (have defaults)
///
/// | Method       | Default                |
/// |--------------|------------------------|
/// | `.config(c)` | `FleetConfig::default` |
/// | `.paths(p)`  | `PathTable::standard`  |
/// | `.zones(z)`  | `ZoneMap::standard`    |
///
/// # Example
///
/// ```rust,ignore
/// let fleet = FleetBuilder::new()
///     .trip(Terminal::A, Terminal::C)
///     .trip(Terminal::C, Terminal::A)
///     .spawn()?;
/// fleet.run(&mut NoopObserver)?;
/// ```
pub struct FleetBuilder {
    trips:  Vec<Trip>,
    config: FleetConfig,
    paths:  Option<Arc<PathTable>>,
    zones:  Option<Arc<ZoneMap>>,
}

impl FleetBuilder {
    pub fn new() -> Self {
        FleetBuilder {
            trips:  Vec::new(),
            config: FleetConfig::default(),
            paths:  None,
            zones:  None,
        }
    }

    /// Add one trip to the fleet.
    pub fn trip(mut self, origin: Terminal, destination: Terminal) -> Self {
        self.trips.push(Trip { origin, destination });
        self
    }

    /// Add many trips at once.
    pub fn trips(mut self, trips: impl IntoIterator<Item = Trip>) -> Self {
        self.trips.extend(trips);
        self
    }

    pub fn config(mut self, config: FleetConfig) -> Self {
        self.config = config;
        self
    }

    /// Supply a custom path table (test maps).
    pub fn paths(mut self, paths: Arc<PathTable>) -> Self {
        self.paths = Some(paths);
        self
    }

    /// Supply custom zone classification (test maps).
    pub fn zones(mut self, zones: Arc<ZoneMap>) -> Self {
        self.zones = Some(zones);
        self
    }

    /// Validate the configuration, build the shared resources, start one
    /// thread per vehicle, and block until every agent has registered.
    ///
    /// On return the fleet is fully registered and every agent is parked
    /// waiting for its first frame.
    pub fn spawn(self) -> SimResult<Fleet> {
        self.config.validate()?;

        let paths = self.paths.unwrap_or_else(|| Arc::new(PathTable::standard()));
        let zones = self.zones.unwrap_or_else(|| Arc::new(ZoneMap::standard()));
        let grid = Arc::new(CellLockGrid::new(MAP_ROWS, MAP_COLS));
        let gate = Arc::new(AdmissionGate::new(self.config.gate_capacity));
        let frame = Arc::new(FrameSignal::new());
        let registry = Arc::new(VehicleRegistry::new());
        let latch = Arc::new(StartLatch::new(self.trips.len()));

        let mut handles = Vec::with_capacity(self.trips.len());
        for (i, trip) in self.trips.iter().enumerate() {
            let info = Arc::new(VehicleInfo::new(
                VehicleId(i as u32),
                trip.origin,
                trip.destination,
            ));
            let agent = VehicleAgent::new(
                info,
                Arc::clone(&paths),
                Arc::clone(&zones),
                Arc::clone(&grid),
                Arc::clone(&gate),
                Arc::clone(&frame),
                Arc::clone(&registry),
                Arc::clone(&latch),
            );
            let handle = thread::Builder::new()
                .name(format!("vehicle-{i}-{}{}", trip.origin, trip.destination))
                .spawn(move || agent.run())?;
            handles.push(handle);
        }

        // Explicit startup barrier: every agent has appended itself to the
        // registry before the fleet is handed to the caller.
        latch.wait_ready();
        log::info!("fleet of {} vehicles registered and ready", handles.len());

        Ok(Fleet::new(self.config, registry, frame, gate, zones, handles))
    }
}

impl Default for FleetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
