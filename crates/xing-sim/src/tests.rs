//! Scenario and property tests for xing-sim.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use xing_core::{Cell, FleetConfig, Terminal, VehicleId, VehicleState};
use xing_map::{PathTable, ZoneMap};

use crate::{Fleet, FleetBuilder, FleetObserver, NoopObserver, SimError, Trip, VehicleSnapshot};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Fast frame pacing for tests.
fn test_config() -> FleetConfig {
    FleetConfig {
        frame_interval: Duration::from_millis(1),
        ..FleetConfig::default()
    }
}

/// Drive frames by hand until the fleet finishes (for tests that need the
/// `Fleet` handle alive between frames).
fn drive(fleet: &Fleet) {
    while !fleet.all_finished() {
        thread::sleep(Duration::from_millis(1));
        fleet.present_frame();
    }
}

/// Poll until every vehicle is settled (`Moved` or `Finished`).
fn wait_all_settled(fleet: &Fleet) {
    loop {
        let settled = fleet.registry().snapshot().iter().all(|v| {
            let state = v.core.lock().state;
            state == VehicleState::Moved || state == VehicleState::Finished
        });
        if settled {
            return;
        }
        thread::sleep(Duration::from_millis(1));
    }
}

/// Checks the per-frame safety invariants: no two vehicles on one cell, and
/// crossroad-interior occupancy within the gate capacity.
struct InvariantObserver {
    zones:        ZoneMap,
    capacity:     usize,
    max_interior: usize,
    frames_seen:  u64,
}

impl InvariantObserver {
    fn new(capacity: usize) -> Self {
        InvariantObserver {
            zones: ZoneMap::standard(),
            capacity,
            max_interior: 0,
            frames_seen: 0,
        }
    }
}

impl FleetObserver for InvariantObserver {
    fn on_frame(&mut self, _frame: u64, vehicles: &[VehicleSnapshot]) {
        self.frames_seen += 1;

        let on_grid: Vec<Cell> = vehicles
            .iter()
            .map(|v| v.position)
            .filter(|p| !p.is_off_grid())
            .collect();
        for (i, x) in on_grid.iter().enumerate() {
            for y in &on_grid[i + 1..] {
                assert_ne!(x, y, "two vehicles share cell {x}");
            }
        }

        let interior = on_grid
            .iter()
            .filter(|&&c| self.zones.in_interior(c))
            .count();
        assert!(
            interior <= self.capacity,
            "interior occupancy {interior} exceeds gate capacity {}",
            self.capacity
        );
        self.max_interior = self.max_interior.max(interior);
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn zero_capacity_config_is_rejected() {
        let result = FleetBuilder::new()
            .config(FleetConfig { gate_capacity: 0, ..test_config() })
            .spawn();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn empty_fleet_finishes_immediately() {
        let fleet = FleetBuilder::new().config(test_config()).spawn().unwrap();
        assert!(fleet.all_finished());
        assert_eq!(fleet.run(&mut NoopObserver).unwrap(), 0);
    }

    #[test]
    fn spawn_registers_every_vehicle() {
        let fleet = FleetBuilder::new()
            .config(test_config())
            .trip(Terminal::A, Terminal::B)
            .trip(Terminal::B, Terminal::C)
            .trip(Terminal::C, Terminal::C)
            .spawn()
            .unwrap();
        // The start latch guarantees registration before spawn returns.
        assert_eq!(fleet.registry().len(), 3);
        fleet.run(&mut NoopObserver).unwrap();
    }
}

// ── Scenario: the four-way crossing ───────────────────────────────────────────

#[cfg(test)]
mod scenario {
    use super::*;

    #[test]
    fn four_way_crossing_completes_without_collision() {
        let config = test_config();
        let capacity = config.gate_capacity;
        let fleet = FleetBuilder::new()
            .config(config)
            .trip(Terminal::A, Terminal::C)
            .trip(Terminal::B, Terminal::D)
            .trip(Terminal::C, Terminal::A)
            .trip(Terminal::D, Terminal::B)
            .spawn()
            .unwrap();

        let registry = Arc::clone(fleet.registry());
        let mut observer = InvariantObserver::new(capacity);
        let frames = fleet.run(&mut observer).unwrap();
        assert!(frames > 0);
        assert!(observer.frames_seen > 0);

        // Every vehicle finished, walking exactly its path-table route.
        let paths = PathTable::standard();
        for v in registry.snapshot() {
            let core = v.core.lock();
            assert_eq!(core.state, VehicleState::Finished);
            assert!(core.position.is_off_grid());
            assert_eq!(core.trail, paths.route(v.origin, v.destination));
        }
    }

    #[test]
    fn gate_count_stays_within_capacity() {
        let fleet = FleetBuilder::new()
            .config(test_config())
            .trip(Terminal::A, Terminal::C)
            .trip(Terminal::B, Terminal::D)
            .trip(Terminal::C, Terminal::A)
            .trip(Terminal::D, Terminal::B)
            .spawn()
            .unwrap();

        let gate = Arc::clone(fleet.gate());
        let capacity = gate.capacity();
        let sampler = thread::spawn(move || {
            // Sample until the driver drops its handle count to zero; a
            // couple hundred samples comfortably covers the short run.
            for _ in 0..200 {
                assert!(gate.in_use() <= capacity);
                thread::sleep(Duration::from_micros(200));
            }
        });

        let registry = Arc::clone(fleet.registry());
        fleet.run(&mut NoopObserver).unwrap();
        sampler.join().unwrap();

        // All slots returned after the run.
        assert!(registry.snapshot().iter().all(|v| v.core.lock().state.is_terminal()));
    }

    #[test]
    fn identity_trips_mix_with_real_traffic() {
        let fleet = FleetBuilder::new()
            .config(test_config())
            .trip(Terminal::A, Terminal::A)
            .trip(Terminal::A, Terminal::D)
            .trip(Terminal::D, Terminal::D)
            .spawn()
            .unwrap();

        let registry = Arc::clone(fleet.registry());
        fleet.run(&mut NoopObserver).unwrap();

        let snap = registry.snapshot();
        assert!(snap[0].core.lock().trail.is_empty());
        assert!(snap[2].core.lock().trail.is_empty());
        assert_eq!(
            snap[1].core.lock().trail,
            PathTable::standard().route(Terminal::A, Terminal::D)
        );
    }

    #[test]
    fn seeded_random_fleet_completes() {
        use rand::rngs::SmallRng;
        use rand::{Rng, SeedableRng};

        let mut rng = SmallRng::seed_from_u64(42);
        let trips: Vec<Trip> = (0..12)
            .map(|_| Trip {
                origin:      Terminal::ALL[rng.gen_range(0..4)],
                destination: Terminal::ALL[rng.gen_range(0..4)],
            })
            .collect();

        let config = test_config();
        let capacity = config.gate_capacity;
        let fleet = FleetBuilder::new()
            .config(config)
            .trips(trips)
            .spawn()
            .unwrap();

        let registry = Arc::clone(fleet.registry());
        fleet.run(&mut InvariantObserver::new(capacity)).unwrap();
        assert!(registry.snapshot().iter().all(|v| v.core.lock().state.is_terminal()));
    }
}

// ── Freeze / release ──────────────────────────────────────────────────────────

#[cfg(test)]
mod freeze {
    use super::*;

    #[test]
    fn frozen_fleet_commits_no_moves() {
        let fleet = FleetBuilder::new()
            .config(test_config())
            .trip(Terminal::A, Terminal::C)
            .trip(Terminal::C, Terminal::A)
            .spawn()
            .unwrap();

        wait_all_settled(&fleet);
        fleet.freeze();
        let before: Vec<Cell> = fleet
            .registry()
            .snapshot()
            .iter()
            .map(|v| v.core.lock().position)
            .collect();

        for _ in 0..5 {
            thread::sleep(Duration::from_millis(2));
            fleet.present_frame();
        }

        let after: Vec<Cell> = fleet
            .registry()
            .snapshot()
            .iter()
            .map(|v| v.core.lock().position)
            .collect();
        assert_eq!(before, after, "a frozen vehicle moved");

        fleet.resume_all();
        drive(&fleet);
        fleet.join().unwrap();
    }

    #[test]
    fn released_vehicle_advances_while_others_stay() {
        // Disjoint routes, so the released vehicle is never blocked by the
        // frozen one's held cell.
        let fleet = FleetBuilder::new()
            .config(test_config())
            .trip(Terminal::A, Terminal::C)
            .trip(Terminal::C, Terminal::A)
            .spawn()
            .unwrap();

        wait_all_settled(&fleet);
        fleet.freeze();

        let snap = fleet.registry().snapshot();
        let frozen_trail = snap[1].core.lock().trail.len();

        fleet.release(VehicleId(0)).unwrap();
        let released = Arc::clone(&snap[0]);
        while released.core.lock().state != VehicleState::Finished {
            thread::sleep(Duration::from_millis(1));
            fleet.present_frame();
        }

        assert_eq!(snap[1].core.lock().trail.len(), frozen_trail);

        fleet.resume_all();
        drive(&fleet);
        fleet.join().unwrap();
    }

    #[test]
    fn release_unknown_vehicle_errors() {
        let fleet = FleetBuilder::new().config(test_config()).spawn().unwrap();
        assert!(matches!(
            fleet.release(VehicleId(9)),
            Err(SimError::VehicleNotFound(_))
        ));
        fleet.join().unwrap();
    }
}
