mod util;

use mesh_workset::mesh::{CellVertices, ElementBlockInfo, LocalMesh};
use mesh_workset::partition::{generate_partitions, WorksetDescriptor, WorksetSize};
use mesh_workset::topology::CellShape;
use mesh_workset::workset::{
    build_interface_worksets, build_side_worksets, build_worksets, Workset,
};
use util::*;

fn numbered_vertices(num_cells: usize) -> CellVertices {
    // Cell c carries the coordinates [c*100 .. c*100+7] so copies are
    // recognizable.
    let mut verts = CellVertices::zeros(num_cells, 4, 2);
    for c in 0..num_cells {
        let row = verts.cell_mut(c);
        for (i, v) in row.iter_mut().enumerate() {
            *v = (c * 100 + i) as f64;
        }
    }
    verts
}

#[test]
fn workset_from_partition_takes_owned_cells_only() {
    let mut mesh = LocalMesh::new();
    mesh.add_element_block(ElementBlockInfo {
        block_name: "block_a".into(),
        cell_shape: CellShape::Quadrilateral,
        info: quad_grid(4, 3),
    });
    let desc = WorksetDescriptor::ElementBlock {
        block: "block_a".into(),
        size: WorksetSize::Fixed(5),
    };
    let parts = generate_partitions(&mesh, &desc).unwrap();
    let worksets: Vec<Workset> = parts.iter().map(Workset::from_partition).collect();

    assert_eq!(worksets.len(), 3);
    assert_eq!(worksets[0].num_cells, 5);
    assert_eq!(worksets[2].num_cells, 2);
    for (workset, part) in worksets.iter().zip(&parts) {
        assert_eq!(workset.details.block_id, "block_a");
        assert_eq!(workset.details.subcell_dim, 2);
        assert_eq!(workset.details.subcell_index, -1);
        assert_eq!(workset.details.cell_local_ids.len(), workset.num_cells);
        assert_eq!(
            workset.details.cell_vertex_coordinates.num_cells(),
            workset.num_cells
        );
        // Owned cells only: the ghost halo stays in the partition info.
        assert_eq!(
            workset.details.cell_local_ids,
            part.info.local_cells[..part.info.num_owned_cells]
        );
        assert!(workset.other.is_none());
    }
    // Coordinates of the first cell of the second chunk = parent cell 5.
    let parent = quad_grid(4, 3);
    assert_eq!(
        worksets[1].details.cell_vertex_coordinates.cell(0),
        parent.cell_vertices.cell(5)
    );
}

#[test]
fn build_worksets_chunks_cell_lists() {
    let verts = numbered_vertices(7);
    let ids: Vec<i32> = (10..17).collect();
    let worksets = build_worksets("block_a", 2, &ids, &verts, 3).unwrap();

    let sizes: Vec<usize> = worksets.iter().map(|w| w.num_cells).collect();
    assert_eq!(sizes, vec![3, 3, 1]);
    assert_eq!(worksets[0].details.cell_local_ids, vec![10, 11, 12]);
    assert_eq!(worksets[2].details.cell_local_ids, vec![16]);
    assert_eq!(
        worksets[1].details.cell_vertex_coordinates.cell(0),
        verts.cell(3)
    );
}

#[test]
fn zero_cells_yield_one_empty_workset() {
    let verts = CellVertices::zeros(0, 4, 2);
    let worksets = build_worksets("block_a", 2, &[], &verts, 8).unwrap();
    assert_eq!(worksets.len(), 1);
    assert_eq!(worksets[0].num_cells, 0);
    assert_eq!(worksets[0].details.block_id, "block_a");
    assert_eq!(worksets[0].details.cell_vertex_coordinates.num_cells(), 0);
    assert_eq!(
        worksets[0].details.cell_vertex_coordinates.vertices_per_cell(),
        4
    );
}

#[test]
fn zero_workset_size_is_rejected() {
    let verts = CellVertices::zeros(2, 4, 2);
    assert!(build_worksets("block_a", 2, &[0, 1], &verts, 0).is_err());
}

#[test]
fn side_worksets_group_by_local_side() {
    let verts = numbered_vertices(5);
    let cell_ids = [7, 8, 9, 10, 11];
    let side_ids = [2, 0, 2, 1, 0];
    let by_side = build_side_worksets("block_a", 2, &cell_ids, &side_ids, &verts).unwrap();

    assert_eq!(by_side.len(), 3);
    assert_eq!(by_side[&0].details.cell_local_ids, vec![8, 11]);
    assert_eq!(by_side[&1].details.cell_local_ids, vec![10]);
    assert_eq!(by_side[&2].details.cell_local_ids, vec![7, 9]);
    for (side, workset) in &by_side {
        assert_eq!(workset.details.subcell_index, *side);
        assert_eq!(workset.details.subcell_dim, 1);
        assert_eq!(workset.num_cells, workset.details.cell_local_ids.len());
    }
    // Gathered coordinates follow the grouped order.
    assert_eq!(
        by_side[&0].details.cell_vertex_coordinates.cell(1),
        verts.cell(4)
    );
}

#[test]
fn interface_worksets_pair_side_details() {
    let verts_a = numbered_vertices(4);
    let verts_b = numbered_vertices(4);
    let cells_a = [0, 1, 2, 3];
    let cells_b = [40, 41, 42, 43];
    let sides_a = [1, 1, 1, 3];
    let sides_b = [0, 0, 2, 0];

    let paired = build_interface_worksets(
        2, "block_a", &cells_a, &sides_a, &verts_a, "block_b", &cells_b, &sides_b, &verts_b,
    )
    .unwrap();

    // Minimal constant-pair association: (1,0) x2, (1,2), (3,0).
    assert_eq!(paired.len(), 3);
    let w = &paired[&(1, 0)];
    assert_eq!(w.num_cells, 2);
    assert_eq!(w.details.cell_local_ids, vec![0, 1]);
    assert_eq!(w.details.subcell_index, 1);
    let other = w.other.as_ref().unwrap();
    assert_eq!(other.cell_local_ids, vec![40, 41]);
    assert_eq!(other.block_id, "block_b");
    assert_eq!(other.subcell_index, 0);
    // Side B cell order matches side A position order.
    assert_eq!(other.cell_vertex_coordinates.cell(1), verts_b.cell(1));

    assert_eq!(paired[&(1, 2)].details.cell_local_ids, vec![2]);
    assert_eq!(
        paired[&(3, 0)].other.as_ref().unwrap().cell_local_ids,
        vec![43]
    );
}

#[test]
fn interface_length_mismatch_is_rejected() {
    let verts = numbered_vertices(2);
    let short = numbered_vertices(1);
    assert!(build_interface_worksets(
        2, "a", &[0, 1], &[0, 0], &verts, "b", &[0], &[0], &short,
    )
    .is_err());
}
