//! `GlobalCellId`: a strong, zero-cost handle for cells of the distributed mesh.
//!
//! Global cell identifiers are unique across every rank of the distributed
//! mesh, including the synthetic virtual cells that stand in for the outside
//! of the domain. Real cells are numbered by the mesh database; virtual cells
//! receive IDs past the end of the real range (see
//! [`assign_virtual_cell_ids`](crate::partition::assign_virtual_cell_ids)),
//! so the two ranges never overlap.
//!
//! The type is `repr(transparent)` over `u64`: it has the same ABI and
//! alignment as its single field and can cross an MPI boundary exactly like
//! a `u64`.

use std::fmt;

#[derive(
    Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct GlobalCellId(u64);

impl GlobalCellId {
    /// Creates a new `GlobalCellId` from a raw `u64` value.
    ///
    /// Zero is a valid identifier: rank 0's first owned cell.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        GlobalCellId(raw)
    }

    /// Returns the inner `u64` value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for GlobalCellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GlobalCellId").field(&self.0).finish()
    }
}

impl fmt::Display for GlobalCellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for GlobalCellId {
    #[inline]
    fn from(raw: u64) -> Self {
        GlobalCellId(raw)
    }
}

/// MPI interop: a `GlobalCellId` is sent over the wire as a plain `u64`.
#[cfg(feature = "mpi-support")]
unsafe impl mpi::datatype::Equivalence for GlobalCellId {
    type Out = <u64 as mpi::datatype::Equivalence>::Out;

    fn equivalent_datatype() -> Self::Out {
        u64::equivalent_datatype()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_get() {
        let id = GlobalCellId::new(42);
        assert_eq!(id.get(), 42);
        assert_eq!(GlobalCellId::new(0).get(), 0);
    }

    #[test]
    fn debug_and_display() {
        let id = GlobalCellId::new(7);
        assert_eq!(format!("{:?}", id), "GlobalCellId(7)");
        assert_eq!(format!("{}", id), "7");
    }

    #[test]
    fn ordering_and_hash() {
        let a = GlobalCellId::new(1);
        let b = GlobalCellId::new(2);
        assert!(a < b);
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 2);
    }
}
