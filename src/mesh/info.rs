//! `MeshInfo`: the adjacency/geometry record for a contiguous set of cells.
//!
//! The record covers `N = owned + ghost + virtual` cells in a half-open
//! index space: `[0, owned)` are owned by this rank, `[owned, owned+ghost)`
//! are ghost replicas of cells owned elsewhere, and `[owned+ghost, N)` are
//! virtual stand-ins for "outside the domain" across boundary faces. Faces
//! always join exactly two cells, so boundary terms share the interior face
//! algebra.
//!
//! Local cell and face indices are `i32` with [`INVALID_INDEX`] (`-1`) as
//! the unset sentinel; the sentinel is part of the published array layout
//! consumed by the numerical kernels. A `MeshInfo` is immutable once
//! constructed: sub-mesh extraction reads a parent and builds a fresh child.

use crate::debug_invariants::DebugInvariants;
use crate::error::MeshWorksetError;
use crate::topology::GlobalCellId;

/// Sentinel for unset local cell/face indices.
pub const INVALID_INDEX: i32 = -1;

/// Per-cell vertex coordinates in `[cell][vertex][dim]` layout over flat
/// `f64` storage.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CellVertices {
    num_cells: usize,
    vertices_per_cell: usize,
    dimension: usize,
    data: Vec<f64>,
}

impl CellVertices {
    /// Zero-filled storage for `num_cells` cells.
    pub fn zeros(num_cells: usize, vertices_per_cell: usize, dimension: usize) -> Self {
        Self {
            num_cells,
            vertices_per_cell,
            dimension,
            data: vec![0.0; num_cells * vertices_per_cell * dimension],
        }
    }

    #[inline]
    pub fn num_cells(&self) -> usize {
        self.num_cells
    }

    #[inline]
    pub fn vertices_per_cell(&self) -> usize {
        self.vertices_per_cell
    }

    /// Spatial dimension per vertex.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    fn stride(&self) -> usize {
        self.vertices_per_cell * self.dimension
    }

    /// All coordinates of cell `c`, vertex-major.
    #[inline]
    pub fn cell(&self, c: usize) -> &[f64] {
        let s = self.stride();
        &self.data[c * s..(c + 1) * s]
    }

    /// Mutable coordinates of cell `c`.
    #[inline]
    pub fn cell_mut(&mut self, c: usize) -> &mut [f64] {
        let s = self.stride();
        &mut self.data[c * s..(c + 1) * s]
    }

    /// Coordinates of vertex `v` of cell `c`.
    #[inline]
    pub fn vertex(&self, c: usize, v: usize) -> &[f64] {
        let base = c * self.stride() + v * self.dimension;
        &self.data[base..base + self.dimension]
    }

    /// New storage holding the listed cells of `self`, in list order.
    ///
    /// Each output slot is disjoint, so the copy parallelizes freely.
    pub fn gather(&self, cells: &[i32]) -> Self {
        let stride = self.stride();
        let mut data = vec![0.0; cells.len() * stride];
        if stride > 0 {
            #[cfg(feature = "rayon")]
            {
                use rayon::prelude::*;
                data.par_chunks_mut(stride)
                    .zip(cells.par_iter())
                    .for_each(|(dst, &c)| dst.copy_from_slice(self.cell(c as usize)));
            }
            #[cfg(not(feature = "rayon"))]
            for (dst, &c) in data.chunks_mut(stride).zip(cells) {
                dst.copy_from_slice(self.cell(c as usize));
            }
        }
        Self {
            num_cells: cells.len(),
            vertices_per_cell: self.vertices_per_cell,
            dimension: self.dimension,
            data,
        }
    }

    /// New storage holding cells `start..start + count` of `self`.
    pub fn slice_cells(&self, start: usize, count: usize) -> Self {
        let stride = self.stride();
        Self {
            num_cells: count,
            vertices_per_cell: self.vertices_per_cell,
            dimension: self.dimension,
            data: self.data[start * stride..(start + count) * stride].to_vec(),
        }
    }
}

/// Per-cell face-slot table in `[cell][slot]` layout, `-1` where unset.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CellFaces {
    num_cells: usize,
    faces_per_cell: usize,
    data: Vec<i32>,
}

impl CellFaces {
    /// Table with every slot set to [`INVALID_INDEX`].
    pub fn unset(num_cells: usize, faces_per_cell: usize) -> Self {
        Self {
            num_cells,
            faces_per_cell,
            data: vec![INVALID_INDEX; num_cells * faces_per_cell],
        }
    }

    #[inline]
    pub fn num_cells(&self) -> usize {
        self.num_cells
    }

    #[inline]
    pub fn faces_per_cell(&self) -> usize {
        self.faces_per_cell
    }

    /// Face slots of cell `c`.
    #[inline]
    pub fn row(&self, c: usize) -> &[i32] {
        &self.data[c * self.faces_per_cell..(c + 1) * self.faces_per_cell]
    }

    /// Face index at slot `slot` of cell `c`, `-1` if unset.
    #[inline]
    pub fn get(&self, c: usize, slot: usize) -> i32 {
        self.data[c * self.faces_per_cell + slot]
    }

    #[inline]
    pub fn set(&mut self, c: usize, slot: usize, face: i32) {
        self.data[c * self.faces_per_cell + slot] = face;
    }
}

/// Adjacency and geometry for one contiguous set of cells: an element
/// block, a sideset, or a partition extracted from either.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MeshInfo {
    /// Cells owned by this record, at indices `[0, num_owned_cells)`.
    pub num_owned_cells: usize,
    /// One-layer halo of cells owned elsewhere, following the owned range.
    pub num_ghost_cells: usize,
    /// Synthetic boundary stand-ins, at the end of the index space.
    pub num_virtual_cells: usize,
    /// Globally unique identifier per cell, virtual cells included.
    pub global_cells: Vec<GlobalCellId>,
    /// Mesh-database-local identifier per cell; meaningless for virtual cells.
    pub local_cells: Vec<i32>,
    /// Vertex coordinates per cell, `[N][V][D]`.
    pub cell_vertices: CellVertices,
    /// Face index per topological face slot, `[N][F]`, `-1` if unset.
    pub cell_to_faces: CellFaces,
    /// The two incident cells per face.
    pub face_to_cells: Vec<[i32; 2]>,
    /// The face slot this face occupies on each incident cell.
    pub face_to_lidx: Vec<[i32; 2]>,
}

impl MeshInfo {
    /// Total cell count `owned + ghost + virtual`.
    #[inline]
    pub fn total_cells(&self) -> usize {
        self.num_owned_cells + self.num_ghost_cells + self.num_virtual_cells
    }

    /// Count of real (owned + ghost) cells; virtual indices start here.
    #[inline]
    pub fn num_real_cells(&self) -> usize {
        self.num_owned_cells + self.num_ghost_cells
    }

    #[inline]
    pub fn num_faces(&self) -> usize {
        self.face_to_cells.len()
    }

    #[inline]
    pub fn is_virtual(&self, cell: i32) -> bool {
        cell as usize >= self.num_real_cells()
    }

    /// Resolve the cell on the other side of face slot `slot` of `cell`.
    ///
    /// Returns `None` for an unset (`-1`) slot. A face whose opposite entry
    /// is negative means the adjacency arrays are corrupt; every face must
    /// join two cells, with a virtual cell standing in at the boundary.
    pub fn face_neighbor(
        &self,
        cell: i32,
        slot: usize,
    ) -> Result<Option<(i32, i32)>, MeshWorksetError> {
        let face = self.cell_to_faces.get(cell as usize, slot);
        if face < 0 {
            return Ok(None);
        }
        let f = face as usize;
        let side = if self.face_to_cells[f][0] == cell { 1 } else { 0 };
        let neighbor = self.face_to_cells[f][side];
        if neighbor < 0 {
            return Err(MeshWorksetError::InvalidFaceCell { face: f });
        }
        Ok(Some((neighbor, self.face_to_lidx[f][side])))
    }
}

impl DebugInvariants for MeshInfo {
    fn debug_assert_invariants(&self) {
        #[cfg(debug_assertions)]
        if let Err(e) = self.validate_invariants() {
            panic!("[invariants] MeshInfo: {e}");
        }
    }

    fn validate_invariants(&self) -> Result<(), MeshWorksetError> {
        let total = self.total_cells();
        let check = |array: &'static str, found: usize| {
            if found == total {
                Ok(())
            } else {
                Err(MeshWorksetError::CellCountMismatch {
                    array,
                    expected: total,
                    found,
                })
            }
        };
        check("global_cells", self.global_cells.len())?;
        check("local_cells", self.local_cells.len())?;
        check("cell_vertices", self.cell_vertices.num_cells())?;
        check("cell_to_faces", self.cell_to_faces.num_cells())?;

        if self.face_to_lidx.len() != self.face_to_cells.len() {
            return Err(MeshWorksetError::FaceCountMismatch {
                expected: self.face_to_cells.len(),
                found: self.face_to_lidx.len(),
            });
        }

        let real = self.num_real_cells();
        for (f, (cells, lidx)) in self
            .face_to_cells
            .iter()
            .zip(&self.face_to_lidx)
            .enumerate()
        {
            for side in 0..2 {
                let cell = cells[side];
                if cell < 0 || cell as usize >= total {
                    return Err(MeshWorksetError::InvalidFaceCell { face: f });
                }
                if self.cell_to_faces.get(cell as usize, lidx[side] as usize) != f as i32 {
                    return Err(MeshWorksetError::FaceSymmetryBroken { face: f, side });
                }
            }
            if cells[0] as usize >= real && cells[1] as usize >= real {
                return Err(MeshWorksetError::VirtualVirtualFace { face: f });
            }
        }
        Ok(())
    }
}
