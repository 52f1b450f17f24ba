//! One mutual-exclusion lock per grid cell.

use parking_lot::{Mutex, MutexGuard};
use xing_core::Cell;

/// RAII guard for one cell's lock.  Dropping it releases the cell.
pub type CellGuard<'a> = MutexGuard<'a, ()>;

/// A `rows × cols` array of independent cell locks — the sole mechanism
/// guaranteeing at most one vehicle occupies a cell at a time.
///
/// The grid imposes no ordering constraint across distinct cells; deadlock
/// avoidance is the responsibility of the movement protocol, not the grid.
pub struct CellLockGrid {
    locks: Vec<Mutex<()>>,
    rows:  usize,
    cols:  usize,
}

impl CellLockGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        let locks = (0..rows * cols).map(|_| Mutex::new(())).collect();
        CellLockGrid { locks, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Block until `cell`'s lock is available, then hold it.
    ///
    /// # Panics
    /// Panics if `cell` is the off-grid sentinel or out of bounds — locking
    /// a nonexistent cell is a protocol violation.
    pub fn acquire(&self, cell: Cell) -> CellGuard<'_> {
        self.locks[self.index(cell)].lock()
    }

    /// Take `cell`'s lock only if it is free.  Used by probes and tests to
    /// observe occupancy without blocking.
    pub fn try_acquire(&self, cell: Cell) -> Option<CellGuard<'_>> {
        self.locks[self.index(cell)].try_lock()
    }

    fn index(&self, cell: Cell) -> usize {
        assert!(
            !cell.is_off_grid()
                && (cell.row as usize) < self.rows
                && (cell.col as usize) < self.cols,
            "cell {cell} is outside the {}×{} lock grid",
            self.rows,
            self.cols,
        );
        cell.row as usize * self.cols + cell.col as usize
    }
}
