//! The fleet-wide vehicle registry.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use xing_core::VehicleId;

use crate::{VehicleCore, VehicleInfo};

/// One vehicle with its private lock held, as seen through
/// [`VehicleRegistry::with_fleet_locked`].
pub struct LockedVehicle<'a> {
    pub info: &'a VehicleInfo,
    pub core: MutexGuard<'a, VehicleCore>,
}

/// An append-only, insertion-ordered collection of all active vehicles.
///
/// Entries are appended once, at agent startup, and never removed —
/// finished vehicles stay registered with state `Finished` for the whole
/// run.  The registry's own lock is distinct from every vehicle's private
/// lock and is never held while a vehicle lock is taken: fan-out operations
/// copy the member list under a momentary hold, release it, and only then
/// touch per-vehicle locks.  That ordering discipline is what rules out a
/// registry/vehicle lock inversion.
pub struct VehicleRegistry {
    vehicles: Mutex<Vec<Arc<VehicleInfo>>>,
}

impl VehicleRegistry {
    pub fn new() -> Self {
        VehicleRegistry { vehicles: Mutex::new(Vec::new()) }
    }

    /// Register a vehicle.  Called once by each agent before its first step.
    pub fn append(&self, vehicle: Arc<VehicleInfo>) {
        self.vehicles.lock().push(vehicle);
    }

    pub fn len(&self) -> usize {
        self.vehicles.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.lock().is_empty()
    }

    /// A stable copy of the member list, in registration order.
    pub fn snapshot(&self) -> Vec<Arc<VehicleInfo>> {
        self.vehicles.lock().clone()
    }

    /// Look up one vehicle by ID.
    pub fn find(&self, id: VehicleId) -> Option<Arc<VehicleInfo>> {
        self.vehicles
            .lock()
            .iter()
            .find(|v| v.id == id)
            .cloned()
    }

    /// Set every vehicle's movable flag, waking parked agents when enabling.
    ///
    /// After `set_all_movable(false)` returns, no vehicle commits a further
    /// move until some vehicle is made movable again.
    pub fn set_all_movable(&self, movable: bool) {
        for vehicle in self.snapshot() {
            vehicle.set_movable(movable);
        }
    }

    /// Lock every vehicle except `except` and hand the closure a consistent
    /// view of the fleet, in registration order.
    ///
    /// Used by collaborators that need a coherent multi-vehicle snapshot
    /// while guaranteeing a lock they already hold is not double-acquired.
    /// All guards drop when the closure returns.
    pub fn with_fleet_locked<R>(
        &self,
        except: Option<VehicleId>,
        f: impl FnOnce(&mut [LockedVehicle<'_>]) -> R,
    ) -> R {
        let members = self.snapshot();
        let mut locked: Vec<LockedVehicle<'_>> = members
            .iter()
            .filter(|v| Some(v.id) != except)
            .map(|v| LockedVehicle { info: v, core: v.core.lock() })
            .collect();
        f(&mut locked)
    }
}

impl Default for VehicleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
