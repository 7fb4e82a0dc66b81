//! Globally unique identifiers for virtual cells.
//!
//! Virtual cells exist only so boundary faces share the interior face
//! algebra; they still need global IDs disjoint from every real cell on
//! every rank. Each rank counts its boundary faces (one virtual cell per
//! face missing an opposite cell), then a distributed prefix over the
//! per-rank counts places this rank's IDs past the end of the global
//! real-cell range.

use crate::comm::Communicator;
use crate::error::MeshWorksetError;
use crate::topology::GlobalCellId;

/// Faces with a missing incident cell, in face order.
///
/// Each such face gets one virtual cell; the order returned here fixes
/// the order [`assign_virtual_cell_ids`] hands IDs out in.
pub fn boundary_faces(face_to_cells: &[[i32; 2]]) -> Vec<usize> {
    face_to_cells
        .iter()
        .enumerate()
        .filter(|(_, cells)| cells[0] < 0 || cells[1] < 0)
        .map(|(face, _)| face)
        .collect()
}

/// Assign this rank's virtual cells their global IDs.
///
/// Runs the subsystem's only collective: element-wise sum reductions over
/// per-rank owned and virtual counts. With `R` total owned cells across
/// all ranks, this rank's IDs form the contiguous range starting at
/// `R + (virtual counts of lower ranks)`: globally unique and disjoint
/// from real-cell IDs. Blocking and barrier-style: every rank of `comm`
/// must call it, exactly once per distributed-mesh build. No cross-run
/// ordering is guaranteed, only uniqueness.
pub fn assign_virtual_cell_ids<C: Communicator>(
    comm: &C,
    num_owned_cells: usize,
    num_virtual_cells: usize,
) -> Result<Vec<GlobalCellId>, MeshWorksetError> {
    let rank = comm.rank();
    let size = comm.size();
    if rank >= size {
        return Err(MeshWorksetError::RankOutOfRange { rank, size });
    }

    let mut mine = vec![0u64; size];
    mine[rank] = num_owned_cells as u64;
    let owned_distribution = comm.all_reduce_sum(&mine);

    mine.fill(0);
    mine[rank] = num_virtual_cells as u64;
    let virtual_distribution = comm.all_reduce_sum(&mine);

    let num_global_real: u64 = owned_distribution.iter().sum();
    let start = num_global_real + virtual_distribution[..rank].iter().sum::<u64>();

    log::debug!("rank {rank}: {num_virtual_cells} virtual cell ids starting at {start}");
    Ok((start..start + num_virtual_cells as u64)
        .map(GlobalCellId::new)
        .collect())
}
