//! The path table: fixed routes between terminals.

use rustc_hash::FxHashSet;
use xing_core::{Cell, Terminal};

use crate::error::{PathError, PathResult};

// ── Standard route data ───────────────────────────────────────────────────────
//
// Transcribed from the standard crossroads map.  Routes are stored without a
// trailing sentinel; `PathTable::step` yields `Cell::OFF_GRID` past the end.

const A_TO_B: &[(i16, i16)] = &[(4, 0), (4, 1), (4, 2), (5, 2), (6, 2)];
const A_TO_C: &[(i16, i16)] = &[(4, 0), (4, 1), (4, 2), (4, 3), (4, 4), (4, 5), (4, 6)];
const A_TO_D: &[(i16, i16)] = &[
    (4, 0), (4, 1), (4, 2), (4, 3), (4, 4), (3, 4), (2, 4), (1, 4), (0, 4),
];

const B_TO_A: &[(i16, i16)] = &[
    (6, 4), (5, 4), (4, 4), (3, 4), (2, 4), (2, 3), (2, 2), (2, 1), (2, 0),
];
const B_TO_C: &[(i16, i16)] = &[(6, 4), (5, 4), (4, 4), (4, 5), (4, 6)];
const B_TO_D: &[(i16, i16)] = &[(6, 4), (5, 4), (4, 4), (3, 4), (2, 4), (1, 4), (0, 4)];

const C_TO_A: &[(i16, i16)] = &[(2, 6), (2, 5), (2, 4), (2, 3), (2, 2), (2, 1), (2, 0)];
const C_TO_B: &[(i16, i16)] = &[
    (2, 6), (2, 5), (2, 4), (2, 3), (2, 2), (3, 2), (4, 2), (5, 2), (6, 2),
];
const C_TO_D: &[(i16, i16)] = &[(2, 6), (2, 5), (2, 4), (1, 4), (0, 4)];

const D_TO_A: &[(i16, i16)] = &[(0, 2), (1, 2), (2, 2), (2, 1), (2, 0)];
const D_TO_B: &[(i16, i16)] = &[(0, 2), (1, 2), (2, 2), (3, 2), (4, 2), (5, 2), (6, 2)];
const D_TO_C: &[(i16, i16)] = &[
    (0, 2), (1, 2), (2, 2), (3, 2), (4, 2), (4, 3), (4, 4), (4, 5), (4, 6),
];

// ── PathTable ─────────────────────────────────────────────────────────────────

/// Read-only mapping `(origin, destination) → ordered sequence of cells`.
///
/// Identity pairs map to the empty route, so a vehicle whose origin equals
/// its destination completes with zero moves.  Lookups are deterministic,
/// pure, and total for any step index; indices past the end of a route yield
/// [`Cell::OFF_GRID`].
pub struct PathTable {
    routes: [[Vec<Cell>; 4]; 4],
}

impl PathTable {
    /// The route table of the standard 7×7 crossroads map.
    pub fn standard() -> Self {
        let raw: [[&[(i16, i16)]; 4]; 4] = [
            [&[], A_TO_B, A_TO_C, A_TO_D],
            [B_TO_A, &[], B_TO_C, B_TO_D],
            [C_TO_A, C_TO_B, &[], C_TO_D],
            [D_TO_A, D_TO_B, D_TO_C, &[]],
        ];
        let routes = raw.map(|row| {
            row.map(|cells| cells.iter().map(|&(r, c)| Cell::new(r, c)).collect())
        });
        PathTable { routes }
    }

    /// The cell a vehicle on the `origin → destination` route occupies at
    /// step `index`, or [`Cell::OFF_GRID`] once the route is exhausted.
    #[inline]
    pub fn step(&self, origin: Terminal, destination: Terminal, index: usize) -> Cell {
        self.routes[origin.index()][destination.index()]
            .get(index)
            .copied()
            .unwrap_or(Cell::OFF_GRID)
    }

    /// Number of cells on the `origin → destination` route (0 for identity).
    #[inline]
    pub fn len(&self, origin: Terminal, destination: Terminal) -> usize {
        self.routes[origin.index()][destination.index()].len()
    }

    pub fn is_empty(&self, origin: Terminal, destination: Terminal) -> bool {
        self.len(origin, destination) == 0
    }

    /// The full route as a slice (without the sentinel).
    pub fn route(&self, origin: Terminal, destination: Terminal) -> &[Cell] {
        &self.routes[origin.index()][destination.index()]
    }

    /// Every cell reachable by any route — the map's road surface.
    pub fn cells(&self) -> FxHashSet<Cell> {
        self.routes
            .iter()
            .flatten()
            .flatten()
            .copied()
            .collect()
    }

    /// Check the table is well-formed for a `rows × cols` grid: every route
    /// stays in bounds, never revisits a cell, only moves between adjacent
    /// cells, and identity routes are empty.
    pub fn validate(&self, rows: usize, cols: usize) -> PathResult<()> {
        for origin in Terminal::ALL {
            for destination in Terminal::ALL {
                let route = self.route(origin, destination);
                if origin == destination {
                    if !route.is_empty() {
                        return Err(PathError::NonEmptyIdentity(origin));
                    }
                    continue;
                }

                let mut seen = FxHashSet::default();
                let mut prev: Option<Cell> = None;
                for (step, &cell) in route.iter().enumerate() {
                    let in_bounds = cell.row >= 0
                        && cell.col >= 0
                        && (cell.row as usize) < rows
                        && (cell.col as usize) < cols;
                    if !in_bounds {
                        return Err(PathError::OutOfBounds {
                            origin,
                            destination,
                            step,
                            cell,
                            rows,
                            cols,
                        });
                    }
                    if !seen.insert(cell) {
                        return Err(PathError::RepeatedCell { origin, destination, cell });
                    }
                    if let Some(from) = prev {
                        if from.manhattan(cell) != 1 {
                            return Err(PathError::NonAdjacentStep {
                                origin,
                                destination,
                                from,
                                to: cell,
                            });
                        }
                    }
                    prev = Some(cell);
                }
            }
        }
        Ok(())
    }
}
