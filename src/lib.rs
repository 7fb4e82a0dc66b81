//! # mesh-workset
//!
//! mesh-workset is the local mesh partitioning engine of a distributed
//! finite-element assembly stack. Each MPI rank owns a share of a globally
//! distributed unstructured mesh; this crate takes that share (owned cells
//! plus resolved cross-boundary adjacency) and produces self-contained,
//! bounded-size partitions ("worksets") for batched numerical kernels. A
//! partition carries enough adjacency to evaluate volumetric and
//! face-coupled terms without any cross-partition pointer chasing.
//!
//! ## Features
//! - `MeshInfo` adjacency/geometry records with an owned | ghost | virtual
//!   half-open index space and always-two-sided faces
//! - Sub-mesh extraction with ghost discovery, virtual-cell carry-over, and
//!   face adjacency re-derived per subset
//! - Contiguous-range splitting and block/sideset partition dispatch
//! - Distributed virtual-cell ID assignment over a pluggable communication
//!   backend (serial, in-process multi-rank, MPI via `mpi-support`)
//! - Workset batching: volume, side, and paired interface worksets
//!
//! ## Determinism
//!
//! Partition layout is a pure function of its inputs: discovered ghost and
//! virtual cells are ordered by parent global ID and faces are materialized
//! in sorted (cell, slot) order, so re-extraction reproduces identical
//! children bit for bit.
//!
//! ## Usage
//! Add `mesh-workset` as a dependency and enable features as needed:
//!
//! ```toml
//! [dependencies]
//! mesh-workset = "0.1"
//! # Optional features:
//! # features = ["rayon", "mpi-support"]
//! ```

pub mod comm;
pub mod debug_invariants;
pub mod error;
pub mod mesh;
pub mod partition;
pub mod topology;
pub mod workset;

pub use debug_invariants::DebugInvariants;
pub use error::MeshWorksetError;

/// A convenient prelude importing the most-used types.
pub mod prelude {
    pub use crate::comm::{Communicator, LocalComm, NoComm};
    #[cfg(feature = "mpi-support")]
    pub use crate::comm::MpiComm;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::error::MeshWorksetError;
    pub use crate::mesh::{
        CellFaces, CellVertices, ElementBlockInfo, LocalMesh, MeshInfo, SidesetInfo,
        INVALID_INDEX,
    };
    pub use crate::partition::{
        assign_virtual_cell_ids, boundary_faces, extract_submesh, generate_partitions,
        split_mesh_info, MeshPartition, WorksetDescriptor, WorksetSize,
    };
    pub use crate::topology::{CellShape, GlobalCellId};
    pub use crate::workset::{
        associate_cells_by_side_ids, build_interface_worksets, build_side_worksets,
        build_worksets, Workset, WorksetDetails,
    };
}
