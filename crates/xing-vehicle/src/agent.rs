//! The movement-protocol agent: one instance per vehicle thread.

use std::sync::Arc;

use xing_core::{Cell, VehicleState};
use xing_map::{PathTable, ZoneMap};
use xing_sync::{AdmissionGate, CellGuard, CellLockGrid, FrameSignal, StartLatch};

use crate::{VehicleInfo, VehicleRegistry};

/// Result of one attempt to advance a vehicle by one step.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// A new cell was committed; the caller advances its step counter.
    Advanced,
    /// The sentinel was reached; the agent's loop ends.
    Finished,
}

/// One concurrent unit of execution driving a single vehicle from `Ready`
/// to `Finished`.
///
/// The agent owns handles to all shared resources; the per-vehicle state it
/// publishes lives in [`VehicleInfo`], which external collaborators reach
/// through the registry.
pub struct VehicleAgent {
    pub info:  Arc<VehicleInfo>,
    paths:     Arc<PathTable>,
    zones:     Arc<ZoneMap>,
    grid:      Arc<CellLockGrid>,
    gate:      Arc<AdmissionGate>,
    frame:     Arc<FrameSignal>,
    registry:  Arc<VehicleRegistry>,
    latch:     Arc<StartLatch>,
}

impl VehicleAgent {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        info:     Arc<VehicleInfo>,
        paths:    Arc<PathTable>,
        zones:    Arc<ZoneMap>,
        grid:     Arc<CellLockGrid>,
        gate:     Arc<AdmissionGate>,
        frame:    Arc<FrameSignal>,
        registry: Arc<VehicleRegistry>,
        latch:    Arc<StartLatch>,
    ) -> Self {
        VehicleAgent { info, paths, zones, grid, gate, frame, registry, latch }
    }

    /// Register with the fleet, wait for the startup latch, then run the
    /// per-step protocol until the path is exhausted.
    pub fn run(self) {
        self.registry.append(Arc::clone(&self.info));
        self.latch.arrive();
        self.latch.wait_ready();

        log::debug!(
            "vehicle {} starting trip {}→{}",
            self.info.id,
            self.info.origin,
            self.info.destination
        );

        // Guard for the currently occupied cell.  At most one extra guard
        // exists transiently inside `try_move` during the handoff.
        let mut held: Option<CellGuard<'_>> = None;
        let mut step = 0usize;

        loop {
            self.wait_for_frame();
            match self.try_move(step, &mut held) {
                StepOutcome::Advanced => step += 1,
                StepOutcome::Finished => break,
            }
        }

        log::debug!("vehicle {} finished after {step} steps", self.info.id);
    }

    /// Block while the vehicle is in `Moved`, until the renderer presents a
    /// frame (and flips the state back to `Running`).
    ///
    /// The generation is read *before* the state check: a frame presented
    /// between the check and the wait makes `wait_beyond` return at once,
    /// so the wakeup cannot be lost.
    fn wait_for_frame(&self) {
        loop {
            let seen = self.frame.generation();
            {
                let core = self.info.core.lock();
                if core.state != VehicleState::Moved {
                    return;
                }
            }
            self.frame.wait_beyond(seen);
        }
    }

    /// Try to advance one step along the path.
    ///
    /// `held` is the guard for the vehicle's current cell; on a successful
    /// move it is replaced by the new cell's guard, and the replacement
    /// order is what makes the handoff atomic: the new lock is held before
    /// the old guard drops, so no third vehicle ever observes both cells
    /// free at once.
    fn try_move<'a>(&'a self, step: usize, held: &mut Option<CellGuard<'a>>) -> StepOutcome {
        let pos_next = self
            .paths
            .step(self.info.origin, self.info.destination, step);

        let mut core = self.info.core.lock();
        core.position_next = pos_next;
        self.info.next_published.notify_all();

        if pos_next.is_off_grid() {
            // Terminal step.  A `Running` vehicle drops the lock for its
            // last real cell; a `Ready` vehicle (identity trip) never
            // occupied one and finishes with zero moves.
            core.position = Cell::OFF_GRID;
            *held = None;
            core.state = VehicleState::Finished;
            self.info.moved.notify_all();
            return StepOutcome::Finished;
        }

        // Secure the next cell.  The vehicle lock is dropped first so other
        // threads can flip `movable` while we block on shared resources, and
        // the gate is always taken before the cell lock — a fixed order that
        // rules out cycles between gate and grid.
        let entering = self.zones.is_entrance(pos_next);
        let next_guard = loop {
            drop(core);
            if entering {
                self.gate.enter();
            }
            let guard = self.grid.acquire(pos_next);
            core = self.info.core.lock();
            if core.movable {
                break guard;
            }
            // Frozen: undo both acquisitions before parking, so no slot or
            // cell is held while the vehicle cannot use it.
            drop(guard);
            if entering {
                self.gate.leave();
            }
            self.info.became_movable.wait(&mut core);
        };

        if core.state == VehicleState::Ready {
            // First real step: nothing to release.
            core.state = VehicleState::Running;
            debug_assert!(held.is_none());
        } else if self.zones.is_exit(pos_next) {
            self.gate.leave();
        }
        // The new guard moves in before the previous one drops.
        *held = Some(next_guard);

        core.position = pos_next;
        core.trail.push(pos_next);
        core.state = VehicleState::Moved;
        self.info.moved.notify_all();
        log::trace!("vehicle {} moved to {pos_next}", self.info.id);
        StepOutcome::Advanced
    }
}
