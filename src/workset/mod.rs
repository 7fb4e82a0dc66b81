//! Workset construction: the array layout the numerical kernels consume.
//!
//! A workset is a bounded batch of cells presented as flat arrays (cell
//! list plus vertex coordinates in topology-local vertex order), sized for
//! one batched integration/basis-evaluation call. Volume worksets come
//! straight from partitions; side worksets are grouped by local side index
//! because a batched kernel needs every cell of the batch to present the
//! same side; interface worksets pair "side A" cells with their matching
//! "side B" cells so flux and jump terms can be evaluated across an
//! internal element-block interface.

use crate::error::MeshWorksetError;
use crate::mesh::CellVertices;
use crate::partition::MeshPartition;
use itertools::izip;
use std::collections::BTreeMap;

/// The per-side payload of a workset: a fixed-size cell list with vertex
/// coordinates in topology-local vertex order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WorksetDetails {
    pub cell_local_ids: Vec<i32>,
    pub cell_vertex_coordinates: CellVertices,
    pub block_id: String,
    /// Dimension of the subcell the workset integrates over: the cell
    /// dimension for volume worksets, one less for side worksets.
    pub subcell_dim: usize,
    /// Local side index for side worksets, `-1` for volume worksets.
    pub subcell_index: i32,
}

/// One batched-kernel invocation's worth of cells.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Workset {
    pub num_cells: usize,
    pub details: WorksetDetails,
    /// Matching "side B" details when this workset sits on an internal
    /// interface.
    pub other: Option<Box<WorksetDetails>>,
}

impl Workset {
    /// One workset per partition: the partition's owned cells, in order.
    ///
    /// Ghost and virtual cells stay behind in the partition's `MeshInfo`;
    /// the kernel reaches them through the partition's face adjacency, not
    /// through the workset cell list.
    pub fn from_partition(partition: &MeshPartition) -> Self {
        let num_owned = partition.info.num_owned_cells;
        Workset {
            num_cells: num_owned,
            details: WorksetDetails {
                cell_local_ids: partition.info.local_cells[..num_owned].to_vec(),
                cell_vertex_coordinates: partition.info.cell_vertices.slice_cells(0, num_owned),
                block_id: partition.element_block_name.clone(),
                subcell_dim: partition.cell_shape.dimension(),
                subcell_index: -1,
            },
            other: None,
        }
    }
}

/// Chunked volume worksets over an explicit cell list.
///
/// An empty cell list still yields exactly one zero-cell workset:
/// downstream machinery sizes its arrays from the workset it is handed,
/// even when there is no local work.
pub fn build_worksets(
    block_id: &str,
    cell_dimension: usize,
    cell_local_ids: &[i32],
    vertex_coordinates: &CellVertices,
    workset_size: usize,
) -> Result<Vec<Workset>, MeshWorksetError> {
    if workset_size == 0 {
        return Err(MeshWorksetError::ZeroWorksetSize);
    }
    check_length(
        "vertex_coordinates",
        cell_local_ids.len(),
        vertex_coordinates.num_cells(),
    )?;

    if cell_local_ids.is_empty() {
        return Ok(vec![Workset {
            num_cells: 0,
            details: WorksetDetails {
                cell_local_ids: Vec::new(),
                cell_vertex_coordinates: CellVertices::zeros(
                    0,
                    vertex_coordinates.vertices_per_cell(),
                    vertex_coordinates.dimension(),
                ),
                block_id: block_id.to_owned(),
                subcell_dim: cell_dimension,
                subcell_index: -1,
            },
            other: None,
        }]);
    }

    let mut out = Vec::with_capacity(cell_local_ids.len().div_ceil(workset_size));
    let mut start = 0;
    for ids in cell_local_ids.chunks(workset_size) {
        out.push(Workset {
            num_cells: ids.len(),
            details: WorksetDetails {
                cell_local_ids: ids.to_vec(),
                cell_vertex_coordinates: vertex_coordinates.slice_cells(start, ids.len()),
                block_id: block_id.to_owned(),
                subcell_dim: cell_dimension,
                subcell_index: -1,
            },
            other: None,
        });
        start += ids.len();
    }
    Ok(out)
}

/// Boundary-condition worksets, one per local side index.
pub fn build_side_worksets(
    block_id: &str,
    cell_dimension: usize,
    cell_local_ids: &[i32],
    local_side_ids: &[i32],
    vertex_coordinates: &CellVertices,
) -> Result<BTreeMap<i32, Workset>, MeshWorksetError> {
    check_length("local_side_ids", cell_local_ids.len(), local_side_ids.len())?;
    check_length(
        "vertex_coordinates",
        cell_local_ids.len(),
        vertex_coordinates.num_cells(),
    )?;

    let mut by_side: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
    for (pos, &side) in local_side_ids.iter().enumerate() {
        by_side.entry(side).or_default().push(pos);
    }

    let mut out = BTreeMap::new();
    for (side, positions) in by_side {
        out.insert(
            side,
            workset_for_positions(
                block_id,
                cell_dimension,
                cell_local_ids,
                vertex_coordinates,
                &positions,
                side,
            ),
        );
    }
    Ok(out)
}

/// Partition interface cell pairs into the minimal set of lists where the
/// local side index is constant on both sides of each list.
pub fn associate_cells_by_side_ids(
    local_side_ids_a: &[i32],
    local_side_ids_b: &[i32],
) -> Result<BTreeMap<(i32, i32), Vec<usize>>, MeshWorksetError> {
    check_length(
        "local_side_ids_b",
        local_side_ids_a.len(),
        local_side_ids_b.len(),
    )?;
    let mut pairs: BTreeMap<(i32, i32), Vec<usize>> = BTreeMap::new();
    for (pos, (&side_a, &side_b)) in izip!(local_side_ids_a, local_side_ids_b).enumerate() {
        pairs.entry((side_a, side_b)).or_default().push(pos);
    }
    Ok(pairs)
}

/// Paired worksets across an internal interface between two element blocks.
///
/// Cells are matched position-by-position between the `a` and `b` arrays;
/// each returned workset covers one constant `(side A, side B)` pair, with
/// the side-B payload attached through [`Workset::other`] in the same cell
/// order as side A.
#[allow(clippy::too_many_arguments)]
pub fn build_interface_worksets(
    cell_dimension: usize,
    block_id_a: &str,
    cell_local_ids_a: &[i32],
    local_side_ids_a: &[i32],
    vertex_coordinates_a: &CellVertices,
    block_id_b: &str,
    cell_local_ids_b: &[i32],
    local_side_ids_b: &[i32],
    vertex_coordinates_b: &CellVertices,
) -> Result<BTreeMap<(i32, i32), Workset>, MeshWorksetError> {
    check_length(
        "cell_local_ids_b",
        cell_local_ids_a.len(),
        cell_local_ids_b.len(),
    )?;
    check_length(
        "vertex_coordinates_a",
        cell_local_ids_a.len(),
        vertex_coordinates_a.num_cells(),
    )?;
    check_length(
        "vertex_coordinates_b",
        cell_local_ids_b.len(),
        vertex_coordinates_b.num_cells(),
    )?;

    let associations = associate_cells_by_side_ids(local_side_ids_a, local_side_ids_b)?;
    let mut out = BTreeMap::new();
    for ((side_a, side_b), positions) in associations {
        let mut workset = workset_for_positions(
            block_id_a,
            cell_dimension,
            cell_local_ids_a,
            vertex_coordinates_a,
            &positions,
            side_a,
        );
        let side_b_details = workset_for_positions(
            block_id_b,
            cell_dimension,
            cell_local_ids_b,
            vertex_coordinates_b,
            &positions,
            side_b,
        )
        .details;
        workset.other = Some(Box::new(side_b_details));
        out.insert((side_a, side_b), workset);
    }
    Ok(out)
}

fn workset_for_positions(
    block_id: &str,
    cell_dimension: usize,
    cell_local_ids: &[i32],
    vertex_coordinates: &CellVertices,
    positions: &[usize],
    side: i32,
) -> Workset {
    let gather_index: Vec<i32> = positions.iter().map(|&p| p as i32).collect();
    Workset {
        num_cells: positions.len(),
        details: WorksetDetails {
            cell_local_ids: positions.iter().map(|&p| cell_local_ids[p]).collect(),
            cell_vertex_coordinates: vertex_coordinates.gather(&gather_index),
            block_id: block_id.to_owned(),
            subcell_dim: cell_dimension - 1,
            subcell_index: side,
        },
        other: None,
    }
}

fn check_length(
    array: &'static str,
    expected: usize,
    found: usize,
) -> Result<(), MeshWorksetError> {
    if expected == found {
        Ok(())
    } else {
        Err(MeshWorksetError::CellCountMismatch {
            array,
            expected,
            found,
        })
    }
}
