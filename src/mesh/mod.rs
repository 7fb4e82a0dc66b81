//! Mesh adjacency/geometry records and the rank-wide mesh registry.

pub mod info;
pub mod local_mesh;

pub use info::{CellFaces, CellVertices, MeshInfo, INVALID_INDEX};
pub use local_mesh::{ElementBlockInfo, LocalMesh, SidesetInfo};
