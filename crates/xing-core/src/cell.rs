//! Grid coordinates.

use std::fmt;

/// One discrete grid coordinate a vehicle can occupy.
///
/// `Cell` is an immutable value type: cheap to copy, hashable, and usable as
/// a set key.  Coordinates are `i16` rather than `usize` so the off-grid
/// sentinel can be encoded as negative values, matching the path table's
/// "terminated by sentinel" convention.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i16,
    pub col: i16,
}

impl Cell {
    /// The sentinel marking "not on the grid": a vehicle that has not yet
    /// entered the map, or one that has completed its path.
    pub const OFF_GRID: Cell = Cell { row: -1, col: -1 };

    #[inline]
    pub const fn new(row: i16, col: i16) -> Self {
        Cell { row, col }
    }

    /// `true` for the off-grid sentinel (any negative coordinate).
    #[inline]
    pub fn is_off_grid(self) -> bool {
        self.row < 0 || self.col < 0
    }

    /// Manhattan distance to `other`.  Only meaningful for on-grid cells.
    pub fn manhattan(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) as u32 + self.col.abs_diff(other.col) as u32
    }
}

impl Default for Cell {
    /// Returns the off-grid sentinel so uninitialized positions are visibly
    /// not on the map.
    #[inline]
    fn default() -> Self {
        Cell::OFF_GRID
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_off_grid() {
            write!(f, "(off-grid)")
        } else {
            write!(f, "({},{})", self.row, self.col)
        }
    }
}
