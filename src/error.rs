//! `MeshWorksetError`: unified error type for mesh-workset public APIs.
//!
//! Every fallible operation in the crate reports through this enum. All of
//! the conditions below are contract or data-integrity violations, not
//! transient states: a caller that sees one must abort the assembly pass
//! rather than continue with a partial partition.

use thiserror::Error;

/// Unified error type for mesh-workset operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshWorksetError {
    /// Sub-mesh extraction was asked to build a partition from no cells.
    #[error("sub-mesh extraction requires a non-empty owned-cell set")]
    EmptyOwnedCellSet,
    /// The parent mesh info has no owned cells to partition.
    #[error("parent mesh info contains no owned cells")]
    EmptyParentMesh,
    /// An owned-cell index lies outside the parent's owned range.
    #[error("owned-cell index {index} outside parent owned range 0..{num_owned}")]
    OwnedIndexOutOfRange { index: i32, num_owned: usize },
    /// A face's opposite cell could not be resolved in the combined
    /// owned/ghost/virtual index map. The parent adjacency is malformed.
    #[error("cell {cell}, face slot {slot}: neighbor not found among owned, ghost, or virtual cells")]
    NeighborNotFound { cell: i32, slot: i32 },
    /// A face record references a negative cell index on an existing face.
    #[error("face {face} references an invalid cell index")]
    InvalidFaceCell { face: usize },
    /// A workset size of zero was requested.
    #[error("workset size must be positive")]
    ZeroWorksetSize,
    /// The classic (pre-built) workset mode reached the partitioner.
    #[error("classic workset mode cannot be partitioned")]
    ClassicWorksetMode,
    /// An adjacency or identity array is not sized for the cell count.
    #[error("mesh info arrays sized for {expected} cells, found {found} in `{array}`")]
    CellCountMismatch {
        array: &'static str,
        expected: usize,
        found: usize,
    },
    /// `face_to_cells` and `face_to_lidx` disagree on the face count.
    #[error("face arrays sized for {expected} faces, found {found}")]
    FaceCountMismatch { expected: usize, found: usize },
    /// A cell's face slot does not point back at the face that lists it.
    #[error("face {face}, side {side}: cell_to_faces does not point back at this face")]
    FaceSymmetryBroken { face: usize, side: usize },
    /// Both incident cells of a face are virtual.
    #[error("face {face} links two virtual cells")]
    VirtualVirtualFace { face: usize },
    /// The communicator reported a rank outside `0..size`.
    #[error("rank {rank} outside communicator size {size}")]
    RankOutOfRange { rank: usize, size: usize },
}
