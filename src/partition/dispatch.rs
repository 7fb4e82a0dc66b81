//! Resolve a partition request against the rank-wide mesh registry.

use crate::error::MeshWorksetError;
use crate::mesh::{LocalMesh, MeshInfo};
use crate::partition::split::{split_mesh_info, WorksetSize};
use crate::topology::CellShape;

/// One partition request: which region to partition and how to size it.
///
/// The request kinds are a closed set, so each variant carries only the
/// fields that exist for it: a sideset request always names its block,
/// a volume request never names a sideset.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WorksetDescriptor {
    /// Volume partitions over one element block.
    ElementBlock { block: String, size: WorksetSize },
    /// Partitions over the cells of one sideset of one element block.
    Sideset {
        block: String,
        sideset: String,
        size: WorksetSize,
    },
}

impl WorksetDescriptor {
    /// The element block this request targets.
    pub fn element_block(&self) -> &str {
        match self {
            WorksetDescriptor::ElementBlock { block, .. }
            | WorksetDescriptor::Sideset { block, .. } => block,
        }
    }

    /// The sideset, for sideset requests.
    pub fn sideset(&self) -> Option<&str> {
        match self {
            WorksetDescriptor::ElementBlock { .. } => None,
            WorksetDescriptor::Sideset { sideset, .. } => Some(sideset),
        }
    }

    /// The requested size policy.
    pub fn size(&self) -> WorksetSize {
        match self {
            WorksetDescriptor::ElementBlock { size, .. }
            | WorksetDescriptor::Sideset { size, .. } => *size,
        }
    }
}

/// One partition of an element block or sideset, ready for workset
/// construction. Owned exclusively by the assembly pass that requested it.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshPartition {
    /// The extracted sub-mesh: owned chunk, ghost halo, virtual cells,
    /// re-derived faces.
    pub info: MeshInfo,
    pub element_block_name: String,
    pub sideset_name: Option<String>,
    pub cell_shape: CellShape,
    pub has_connectivity: bool,
}

/// Resolve `descriptor` against `mesh` and return its partitions.
///
/// A block or sideset absent from this rank is a valid "no local work"
/// outcome and yields an empty vector; multi-process assembly skips such
/// ranks naturally. Invalid size policies (`Classic`, `Fixed(0)`) are
/// caller bugs and fail fast, absent region or not.
pub fn generate_partitions(
    mesh: &LocalMesh,
    descriptor: &WorksetDescriptor,
) -> Result<Vec<MeshPartition>, MeshWorksetError> {
    match descriptor.size() {
        WorksetSize::Classic => return Err(MeshWorksetError::ClassicWorksetMode),
        WorksetSize::Fixed(0) => return Err(MeshWorksetError::ZeroWorksetSize),
        _ => {}
    }

    match descriptor {
        WorksetDescriptor::ElementBlock { block, size } => {
            let Some(block_info) = mesh.element_block(block) else {
                log::debug!("element block `{block}` absent on this rank; no partitions");
                return Ok(Vec::new());
            };
            let parts = split_mesh_info(&block_info.info, *size)?;
            Ok(parts
                .into_iter()
                .map(|info| MeshPartition {
                    info,
                    element_block_name: block.clone(),
                    sideset_name: None,
                    cell_shape: block_info.cell_shape,
                    has_connectivity: true,
                })
                .collect())
        }
        WorksetDescriptor::Sideset {
            block,
            sideset,
            size,
        } => {
            let Some(sideset_info) = mesh.sideset(block, sideset) else {
                log::debug!(
                    "sideset `{sideset}` of block `{block}` absent on this rank; no partitions"
                );
                return Ok(Vec::new());
            };
            let parts = split_mesh_info(&sideset_info.info, *size)?;
            Ok(parts
                .into_iter()
                .map(|info| MeshPartition {
                    info,
                    element_block_name: block.clone(),
                    sideset_name: Some(sideset.clone()),
                    cell_shape: sideset_info.cell_shape,
                    has_connectivity: true,
                })
                .collect())
        }
    }
}
