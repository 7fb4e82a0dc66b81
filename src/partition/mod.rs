//! The local mesh partitioning engine.
//!
//! Pipeline, leaf-first: [`virtual_cells`] assigns global IDs to virtual
//! boundary cells once per distributed-mesh build; [`dispatch`] resolves a
//! partition request against the rank-wide [`LocalMesh`](crate::mesh::LocalMesh);
//! [`split`] chunks owned cells into contiguous ranges; [`submesh`] turns
//! each range into a self-contained child mesh with its own ghost halo,
//! virtual cells, and re-derived face adjacency. Everything here is local
//! to one process except the one collective in [`virtual_cells`].

pub mod dispatch;
pub mod split;
pub mod submesh;
pub mod virtual_cells;

pub use dispatch::{generate_partitions, MeshPartition, WorksetDescriptor};
pub use split::{split_mesh_info, WorksetSize};
pub use submesh::extract_submesh;
pub use virtual_cells::{assign_virtual_cell_ids, boundary_faces};
