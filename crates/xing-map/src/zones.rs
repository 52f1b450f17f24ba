//! Crossroad zone classification.

use rustc_hash::FxHashSet;
use xing_core::Cell;

/// Set-membership classification of the crossroad's special cells.
///
/// A vehicle acquires an admission-gate slot when it steps *into* an
/// entrance cell and releases it when it steps *into* an exit cell, so a
/// slot covers the entrance cell plus the interior.  The interior set is the
/// capacity-limited region itself, used by observers to check occupancy.
///
/// Built once from the map layout and shared read-only.
pub struct ZoneMap {
    entrances: FxHashSet<Cell>,
    exits:     FxHashSet<Cell>,
    interior:  FxHashSet<Cell>,
}

impl ZoneMap {
    /// Zones of the standard 7×7 crossroads map.
    ///
    /// One entrance and one exit cell per road; the interior is the ring of
    /// 8 cells around the (impassable) centre of the crossroad.
    pub fn standard() -> Self {
        let cells = |coords: &[(i16, i16)]| -> FxHashSet<Cell> {
            coords.iter().map(|&(r, c)| Cell::new(r, c)).collect()
        };
        ZoneMap {
            entrances: cells(&[(4, 1), (5, 4), (2, 5), (1, 2)]),
            exits:     cells(&[(2, 1), (5, 2), (4, 5), (1, 4)]),
            interior:  cells(&[
                (2, 2), (2, 3), (2, 4), (3, 2), (3, 4), (4, 2), (4, 3), (4, 4),
            ]),
        }
    }

    /// Build custom zones (test maps).
    pub fn new(
        entrances: FxHashSet<Cell>,
        exits:     FxHashSet<Cell>,
        interior:  FxHashSet<Cell>,
    ) -> Self {
        ZoneMap { entrances, exits, interior }
    }

    /// Stepping into this cell acquires an admission-gate slot.
    #[inline]
    pub fn is_entrance(&self, cell: Cell) -> bool {
        self.entrances.contains(&cell)
    }

    /// Stepping into this cell releases the admission-gate slot.
    #[inline]
    pub fn is_exit(&self, cell: Cell) -> bool {
        self.exits.contains(&cell)
    }

    /// `true` for cells inside the capacity-limited crossroad interior.
    #[inline]
    pub fn in_interior(&self, cell: Cell) -> bool {
        self.interior.contains(&cell)
    }

    /// Number of interior cells (the ring size of the standard map is 8).
    pub fn interior_len(&self) -> usize {
        self.interior.len()
    }
}
