//! Cell topology metadata and global cell identifiers.
//!
//! The topology collaborator owns the full reference-element machinery;
//! this subsystem only needs the counts that size adjacency arrays: how
//! many vertices a cell carries and how many topological face slots it
//! exposes. [`CellShape`] is that read-only summary. It is `Copy`, so a
//! partition can carry its block's shape without sharing machinery.

pub mod cell_id;

pub use cell_id::GlobalCellId;

/// Supported cell topologies.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum CellShape {
    /// 1D segment; its two end vertices act as faces.
    Line,
    /// 2D simplex.
    Triangle,
    /// 2D tensor-product cell.
    Quadrilateral,
    /// 3D simplex.
    Tetrahedron,
    /// 3D tensor-product cell.
    Hexahedron,
    /// 3D wedge/prism.
    Prism,
    /// 3D pyramid.
    Pyramid,
}

impl CellShape {
    /// Topological dimension of the cell.
    pub fn dimension(self) -> usize {
        match self {
            CellShape::Line => 1,
            CellShape::Triangle | CellShape::Quadrilateral => 2,
            CellShape::Tetrahedron
            | CellShape::Hexahedron
            | CellShape::Prism
            | CellShape::Pyramid => 3,
        }
    }

    /// Number of vertices per cell.
    pub fn num_vertices(self) -> usize {
        match self {
            CellShape::Line => 2,
            CellShape::Triangle => 3,
            CellShape::Quadrilateral | CellShape::Tetrahedron => 4,
            CellShape::Hexahedron => 8,
            CellShape::Prism => 6,
            CellShape::Pyramid => 5,
        }
    }

    /// Number of topological face slots per cell (side subcells of
    /// dimension `dimension() - 1`).
    pub fn num_faces(self) -> usize {
        match self {
            CellShape::Line => 2,
            CellShape::Triangle => 3,
            CellShape::Quadrilateral | CellShape::Tetrahedron => 4,
            CellShape::Hexahedron => 6,
            CellShape::Prism | CellShape::Pyramid => 5,
        }
    }
}
