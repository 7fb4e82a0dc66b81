//! Chunk a mesh's owned cells into fixed-size sub-meshes.
//!
//! Chunking is contiguous index slicing over the owned range, nothing
//! smarter: the owning mesh database already orders cells with useful
//! locality, and any reordering here would silently change the numerical
//! kernels' load balance.

use crate::error::MeshWorksetError;
use crate::mesh::MeshInfo;
use crate::partition::submesh::extract_submesh;

/// Size policy for one partitioning request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WorksetSize {
    /// Worksets pre-built by the caller outside the partitioner. Never a
    /// valid input here; kept so request plumbing can carry it to the
    /// legacy path.
    Classic,
    /// One partition holding every owned cell.
    AllElements,
    /// At most this many owned cells per partition; must be positive.
    Fixed(usize),
}

impl WorksetSize {
    /// Owned cells per chunk for a mesh with `num_owned` owned cells.
    fn base_size(self, num_owned: usize) -> Result<usize, MeshWorksetError> {
        match self {
            WorksetSize::Classic => Err(MeshWorksetError::ClassicWorksetMode),
            WorksetSize::AllElements => Ok(num_owned),
            WorksetSize::Fixed(0) => Err(MeshWorksetError::ZeroWorksetSize),
            WorksetSize::Fixed(n) => Ok(n.min(num_owned)),
        }
    }
}

/// Split `mesh` into sub-meshes of at most `size` owned cells each.
///
/// Chunks are the contiguous owned-index ranges `[0, S), [S, 2S), …`; the
/// final chunk holds the remainder and is never empty. Each chunk goes
/// through [`extract_submesh`], so every returned `MeshInfo` carries its
/// own ghost halo and virtual cells.
pub fn split_mesh_info(
    mesh: &MeshInfo,
    size: WorksetSize,
) -> Result<Vec<MeshInfo>, MeshWorksetError> {
    let num_owned = mesh.num_owned_cells;
    if num_owned == 0 {
        return Err(MeshWorksetError::EmptyParentMesh);
    }
    let base = size.base_size(num_owned)?;

    let mut partitions = Vec::with_capacity(num_owned.div_ceil(base));
    let mut start = 0usize;
    while start < num_owned {
        let len = base.min(num_owned - start);
        debug_assert!(len > 0, "zero-size partition chunk");
        let chunk: Vec<i32> = (start..start + len).map(|c| c as i32).collect();
        partitions.push(extract_submesh(mesh, &chunk)?);
        start += len;
    }
    Ok(partitions)
}
