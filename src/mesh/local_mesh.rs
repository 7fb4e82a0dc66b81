//! Rank-wide mesh registry: per-element-block and per-sideset mesh info.
//!
//! The mesh-database collaborator builds one [`LocalMesh`] per rank for each
//! distributed-mesh build and hands it to the partition dispatcher by
//! reference. Ownership is explicit and external: nothing in this crate
//! caches a `LocalMesh` behind the caller's back, and its lifetime is tied
//! to exactly one distributed-mesh build.

use crate::mesh::MeshInfo;
use crate::topology::CellShape;
use hashbrown::HashMap;

/// Mesh info for one element block, tagged with its name and topology.
#[derive(Clone, Debug)]
pub struct ElementBlockInfo {
    pub block_name: String,
    pub cell_shape: CellShape,
    pub info: MeshInfo,
}

/// Mesh info for one sideset of one element block.
#[derive(Clone, Debug)]
pub struct SidesetInfo {
    pub block_name: String,
    pub sideset_name: String,
    pub cell_shape: CellShape,
    pub info: MeshInfo,
}

/// All mesh info resident on this rank: `block → info` and
/// `block → sideset → info`.
///
/// A block or sideset that does not touch this rank's share of the mesh is
/// simply absent; lookups return `None` and the dispatcher turns that into
/// an empty partition list.
#[derive(Clone, Debug, Default)]
pub struct LocalMesh {
    pub element_blocks: HashMap<String, ElementBlockInfo>,
    pub sidesets: HashMap<String, HashMap<String, SidesetInfo>>,
}

impl LocalMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element block under its own name.
    pub fn add_element_block(&mut self, block: ElementBlockInfo) {
        self.element_blocks.insert(block.block_name.clone(), block);
    }

    /// Register a sideset under its block and sideset names.
    pub fn add_sideset(&mut self, sideset: SidesetInfo) {
        self.sidesets
            .entry(sideset.block_name.clone())
            .or_default()
            .insert(sideset.sideset_name.clone(), sideset);
    }

    /// Mesh info for `block`, if the block touches this rank.
    pub fn element_block(&self, block: &str) -> Option<&ElementBlockInfo> {
        self.element_blocks.get(block)
    }

    /// Mesh info for `sideset` under `block`, if present on this rank.
    pub fn sideset(&self, block: &str, sideset: &str) -> Option<&SidesetInfo> {
        self.sidesets.get(block)?.get(sideset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_mirror_registration() {
        let mut mesh = LocalMesh::new();
        mesh.add_element_block(ElementBlockInfo {
            block_name: "block_a".into(),
            cell_shape: CellShape::Quadrilateral,
            info: MeshInfo::default(),
        });
        mesh.add_sideset(SidesetInfo {
            block_name: "block_a".into(),
            sideset_name: "inflow".into(),
            cell_shape: CellShape::Quadrilateral,
            info: MeshInfo::default(),
        });

        assert!(mesh.element_block("block_a").is_some());
        assert!(mesh.element_block("block_b").is_none());
        assert!(mesh.sideset("block_a", "inflow").is_some());
        assert!(mesh.sideset("block_a", "outflow").is_none());
        assert!(mesh.sideset("block_b", "inflow").is_none());
    }
}
