//! Strongly typed vehicle identifier.

use std::fmt;

/// Index of a vehicle in fleet-ordered storage (registry, snapshots).
///
/// `Copy + Ord + Hash` so it can be used as a map key without ceremony.  The
/// inner integer is `pub` to allow direct indexing via `id.0 as usize`, but
/// callers should prefer [`VehicleId::index`] for clarity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleId(pub u32);

impl VehicleId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: VehicleId = VehicleId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for VehicleId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VehicleId({})", self.0)
    }
}

impl From<VehicleId> for usize {
    #[inline(always)]
    fn from(id: VehicleId) -> usize {
        id.0 as usize
    }
}
