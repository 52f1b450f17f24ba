//! The running fleet and its frame driver.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use xing_core::{FleetConfig, VehicleId, VehicleState};
use xing_map::ZoneMap;
use xing_sync::{AdmissionGate, FrameSignal};
use xing_vehicle::VehicleRegistry;

use crate::{FleetObserver, SimError, SimResult, VehicleSnapshot};

/// A spawned fleet: the renderer/controller surface over a set of running
/// vehicle agents.
///
/// Create via [`FleetBuilder`][crate::FleetBuilder].  The fleet does not own
/// the vehicles' state — it reaches them through the registry's documented
/// fan-out interface, never directly.
pub struct Fleet {
    config:   FleetConfig,
    registry: Arc<VehicleRegistry>,
    frame:    Arc<FrameSignal>,
    gate:     Arc<AdmissionGate>,
    zones:    Arc<ZoneMap>,
    handles:  Vec<JoinHandle<()>>,
}

impl Fleet {
    pub(crate) fn new(
        config:   FleetConfig,
        registry: Arc<VehicleRegistry>,
        frame:    Arc<FrameSignal>,
        gate:     Arc<AdmissionGate>,
        zones:    Arc<ZoneMap>,
        handles:  Vec<JoinHandle<()>>,
    ) -> Self {
        Fleet { config, registry, frame, gate, zones, handles }
    }

    pub fn vehicle_count(&self) -> usize {
        self.handles.len()
    }

    pub fn registry(&self) -> &Arc<VehicleRegistry> {
        &self.registry
    }

    pub fn gate(&self) -> &Arc<AdmissionGate> {
        &self.gate
    }

    pub fn zones(&self) -> &ZoneMap {
        &self.zones
    }

    // ── Frame driving ─────────────────────────────────────────────────────

    /// Present one frame: capture a consistent snapshot of every vehicle,
    /// flip settled vehicles back to `Running`, and broadcast the frame
    /// signal so they advance.
    ///
    /// Snapshots are captured *before* the state flip, so observers see the
    /// stable `Moved` states the frame is drawn from.
    pub fn present_frame(&self) -> Vec<VehicleSnapshot> {
        let snapshots = self.registry.with_fleet_locked(None, |fleet| {
            fleet
                .iter_mut()
                .map(|v| {
                    let snap = VehicleSnapshot::capture(v.info, &v.core);
                    if v.core.state == VehicleState::Moved {
                        v.core.state = VehicleState::Running;
                    }
                    snap
                })
                .collect()
        });
        self.frame.present();
        snapshots
    }

    /// `true` once every vehicle has reached `Finished`.
    pub fn all_finished(&self) -> bool {
        let snap = self.registry.snapshot();
        snap.len() == self.vehicle_count()
            && snap.iter().all(|v| v.core.lock().state.is_terminal())
    }

    /// Drive frames at `config.frame_interval` until the whole fleet
    /// finishes, then join the agent threads.  Returns the frame count.
    pub fn run<O: FleetObserver>(self, observer: &mut O) -> SimResult<u64> {
        let mut frame_no = 0u64;
        while !self.all_finished() {
            thread::sleep(self.config.frame_interval);
            let snapshots = self.present_frame();
            observer.on_frame(frame_no, &snapshots);
            frame_no += 1;
        }
        observer.on_fleet_end(frame_no);
        self.join()?;
        Ok(frame_no)
    }

    /// Join all agent threads, surfacing any panic as an error.
    pub fn join(self) -> SimResult<()> {
        for handle in self.handles {
            let name = handle.thread().name().unwrap_or("vehicle").to_owned();
            handle
                .join()
                .map_err(|_| SimError::AgentPanic(name))?;
        }
        Ok(())
    }

    // ── Controller interventions ──────────────────────────────────────────

    /// Freeze the whole fleet: no vehicle commits a further move until one
    /// is released.  Vehicles mid-handoff park without holding the cell or
    /// gate slot they had speculatively acquired.
    pub fn freeze(&self) {
        self.registry.set_all_movable(false);
        log::debug!("fleet frozen");
    }

    /// Undo [`Fleet::freeze`] for every vehicle.
    pub fn resume_all(&self) {
        self.registry.set_all_movable(true);
        log::debug!("fleet resumed");
    }

    /// Make a single vehicle movable again — the deadlock-probe primitive:
    /// freeze the fleet, then release suspects one at a time.
    pub fn release(&self, id: VehicleId) -> SimResult<()> {
        let vehicle = self
            .registry
            .find(id)
            .ok_or(SimError::VehicleNotFound(id))?;
        vehicle.set_movable(true);
        Ok(())
    }
}
