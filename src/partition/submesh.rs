//! Sub-mesh extraction: carve a self-contained child mesh out of a parent.
//!
//! Given a parent [`MeshInfo`] and a subset of its owned cells, build a
//! child `MeshInfo` holding those cells, their one-layer ghost halo, and
//! any virtual boundary stand-ins they touch, with face adjacency
//! re-derived from scratch. The child is what a batched numerical kernel
//! consumes: volumetric and face-coupled terms evaluate without chasing a
//! single pointer back into the parent.
//!
//! The extraction works with inter-face connectivity only, never node
//! connectivity, and handles exactly one ghost layer.

use crate::debug_invariants::DebugInvariants;
use crate::error::MeshWorksetError;
use crate::mesh::{CellFaces, MeshInfo};
use hashbrown::HashSet;
use itertools::Itertools;
use std::collections::BTreeMap;

/// Build the sub-mesh of `parent` owned by `owned_parent_cells`.
///
/// `owned_parent_cells` is expressed in the parent's indexing scheme and
/// must name owned parent cells only; the child's ghosts and virtual
/// cells are discovered here, never passed in. The child's owned cells
/// keep the caller's order; discovered ghost and virtual cells follow,
/// each group sorted by parent global ID so the child layout is a pure,
/// reproducible function of the inputs.
pub fn extract_submesh(
    parent: &MeshInfo,
    owned_parent_cells: &[i32],
) -> Result<MeshInfo, MeshWorksetError> {
    if owned_parent_cells.is_empty() {
        return Err(MeshWorksetError::EmptyOwnedCellSet);
    }
    if parent.num_owned_cells == 0 {
        return Err(MeshWorksetError::EmptyParentMesh);
    }
    for &cell in owned_parent_cells {
        if cell < 0 || cell as usize >= parent.num_owned_cells {
            return Err(MeshWorksetError::OwnedIndexOutOfRange {
                index: cell,
                num_owned: parent.num_owned_cells,
            });
        }
    }

    // Precaution: the parent's arrays must cover its full cell range
    // before anything is resolved through them.
    let parent_total = parent.total_cells();
    for (array, found) in [
        ("cell_to_faces", parent.cell_to_faces.num_cells()),
        ("cell_vertices", parent.cell_vertices.num_cells()),
        ("global_cells", parent.global_cells.len()),
        ("local_cells", parent.local_cells.len()),
    ] {
        if found != parent_total {
            return Err(MeshWorksetError::CellCountMismatch {
                array,
                expected: parent_total,
                found,
            });
        }
    }

    let faces_per_cell = parent.cell_to_faces.faces_per_cell();
    let parent_real = parent.num_real_cells();

    // Classification pass: walk every face slot of every input cell and
    // sort the opposite cells into ghosts and virtuals. An owned-in-parent
    // neighbor outside the input set is a ghost of the child.
    let owned_set: HashSet<i32> = owned_parent_cells.iter().copied().collect();
    let mut ghost_seen = HashSet::new();
    let mut ghost_parent_cells = Vec::new();
    let mut virtual_seen = HashSet::new();
    let mut virtual_parent_cells = Vec::new();

    for &parent_cell in owned_parent_cells {
        for slot in 0..faces_per_cell {
            // Sidesets can hold owned cells whose outward slot is a true
            // domain boundary (-1) in the parent; nothing to discover there.
            let Some((neighbor, _)) = parent.face_neighbor(parent_cell, slot)? else {
                continue;
            };
            if neighbor as usize >= parent_real {
                if virtual_seen.insert(neighbor) {
                    virtual_parent_cells.push(neighbor);
                }
            } else if neighbor as usize >= parent.num_owned_cells
                || !owned_set.contains(&neighbor)
            {
                if ghost_seen.insert(neighbor) {
                    ghost_parent_cells.push(neighbor);
                }
            }
        }
    }

    // Deterministic reindexing: ghosts and virtuals ordered by parent
    // global ID, not by discovery order.
    let ghost_parent_cells: Vec<i32> = ghost_parent_cells
        .into_iter()
        .sorted_by_key(|&c| parent.global_cells[c as usize])
        .collect();
    let virtual_parent_cells: Vec<i32> = virtual_parent_cells
        .into_iter()
        .sorted_by_key(|&c| parent.global_cells[c as usize])
        .collect();

    let num_owned = owned_parent_cells.len();
    let num_ghost = ghost_parent_cells.len();
    let num_virtual = virtual_parent_cells.len();
    let num_total = num_owned + num_ghost + num_virtual;

    // Child index -> parent index, in child order.
    let child_to_parent: Vec<i32> = owned_parent_cells
        .iter()
        .chain(&ghost_parent_cells)
        .chain(&virtual_parent_cells)
        .copied()
        .collect();

    // (parent, child) pairs sorted by parent index, for binary-search
    // lookups of "is this parent cell in the child, and where".
    let mut parent_to_child: Vec<(i32, i32)> = child_to_parent
        .iter()
        .enumerate()
        .map(|(child, &p)| (p, child as i32))
        .collect();
    parent_to_child.sort_unstable();

    // Identity and geometry copy, verbatim per child cell.
    let global_cells = child_to_parent
        .iter()
        .map(|&p| parent.global_cells[p as usize])
        .collect();
    let local_cells = child_to_parent
        .iter()
        .map(|&p| parent.local_cells[p as usize])
        .collect();
    let cell_vertices = parent.cell_vertices.gather(&child_to_parent);

    // Face reconstruction from scratch: parent face IDs are neither
    // contiguous nor local to the subset, so faces are re-derived from the
    // owned side. A face between two owned cells is discovered once from
    // each side; the two-level map keyed by (side-0 cell, side-0 slot)
    // collapses the pair to one record, and the BTreeMap keeps the face
    // order deterministic.
    let mut faces_map: BTreeMap<i32, BTreeMap<i32, (i32, i32)>> = BTreeMap::new();
    for (owned_child, &owned_parent) in owned_parent_cells.iter().enumerate() {
        let owned_child = owned_child as i32;
        for slot in 0..faces_per_cell {
            let Some((neighbor_parent, neighbor_slot)) =
                parent.face_neighbor(owned_parent, slot)?
            else {
                continue;
            };
            let neighbor_child = match parent_to_child
                .binary_search_by_key(&neighbor_parent, |&(p, _)| p)
            {
                Ok(pos) => parent_to_child[pos].1,
                Err(_) => {
                    return Err(MeshWorksetError::NeighborNotFound {
                        cell: owned_parent,
                        slot: slot as i32,
                    });
                }
            };
            // The smaller child index takes side 0 of the face.
            let (cell_0, slot_0, cell_1, slot_1) = if owned_child < neighbor_child {
                (owned_child, slot as i32, neighbor_child, neighbor_slot)
            } else {
                (neighbor_child, neighbor_slot, owned_child, slot as i32)
            };
            faces_map
                .entry(cell_0)
                .or_default()
                .insert(slot_0, (cell_1, slot_1));
        }
    }

    let mut face_to_cells = Vec::new();
    let mut face_to_lidx = Vec::new();
    let mut cell_to_faces = CellFaces::unset(num_total, faces_per_cell);
    for (&cell_0, slots) in &faces_map {
        for (&slot_0, &(cell_1, slot_1)) in slots {
            let face = face_to_cells.len() as i32;
            face_to_cells.push([cell_0, cell_1]);
            face_to_lidx.push([slot_0, slot_1]);
            cell_to_faces.set(cell_0 as usize, slot_0 as usize, face);
            cell_to_faces.set(cell_1 as usize, slot_1 as usize, face);
        }
    }

    let child = MeshInfo {
        num_owned_cells: num_owned,
        num_ghost_cells: num_ghost,
        num_virtual_cells: num_virtual,
        global_cells,
        local_cells,
        cell_vertices,
        cell_to_faces,
        face_to_cells,
        face_to_lidx,
    };
    log::debug!(
        "extracted sub-mesh: {num_owned} owned, {num_ghost} ghost, {num_virtual} virtual, {} faces",
        child.num_faces()
    );
    child.debug_assert_invariants();
    Ok(child)
}
