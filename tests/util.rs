#![allow(dead_code)]
use mesh_workset::mesh::{CellFaces, CellVertices, MeshInfo};
use mesh_workset::topology::GlobalCellId;

/// Register face `(c0, slot0) ↔ (c1, slot1)` on both sides.
pub fn link(
    face_to_cells: &mut Vec<[i32; 2]>,
    face_to_lidx: &mut Vec<[i32; 2]>,
    cell_to_faces: &mut CellFaces,
    c0: i32,
    s0: i32,
    c1: i32,
    s1: i32,
) {
    let f = face_to_cells.len() as i32;
    face_to_cells.push([c0, c1]);
    face_to_lidx.push([s0, s1]);
    cell_to_faces.set(c0 as usize, s0 as usize, f);
    cell_to_faces.set(c1 as usize, s1 as usize, f);
}

/// 1-D chain of `n` owned line cells with the outer face slots left at `-1`
/// and two trailing virtual cells that nothing links to, the shape a
/// sideset-scoped record takes when the domain boundary is already
/// represented elsewhere.
pub fn chain_with_unlinked_boundary(n: usize) -> MeshInfo {
    let total = n + 2;
    let mut cell_to_faces = CellFaces::unset(total, 2);
    let mut face_to_cells = Vec::new();
    let mut face_to_lidx = Vec::new();
    for i in 0..n - 1 {
        link(
            &mut face_to_cells,
            &mut face_to_lidx,
            &mut cell_to_faces,
            i as i32,
            1,
            (i + 1) as i32,
            0,
        );
    }
    MeshInfo {
        num_owned_cells: n,
        num_ghost_cells: 0,
        num_virtual_cells: 2,
        global_cells: (0..total as u64).map(GlobalCellId::new).collect(),
        local_cells: (0..n as i32).chain([-1, -1]).collect(),
        cell_vertices: line_vertices(n, total),
        cell_to_faces,
        face_to_cells,
        face_to_lidx,
    }
}

/// 1-D chain of `n` owned line cells with both domain boundaries backed by
/// virtual cells (indices `n` and `n + 1`): interior faces first, then the
/// left and right boundary faces.
pub fn virtual_backed_chain(n: usize) -> MeshInfo {
    let total = n + 2;
    let mut cell_to_faces = CellFaces::unset(total, 2);
    let mut face_to_cells = Vec::new();
    let mut face_to_lidx = Vec::new();
    for i in 0..n - 1 {
        link(
            &mut face_to_cells,
            &mut face_to_lidx,
            &mut cell_to_faces,
            i as i32,
            1,
            (i + 1) as i32,
            0,
        );
    }
    let (left, right) = (n as i32, n as i32 + 1);
    link(
        &mut face_to_cells,
        &mut face_to_lidx,
        &mut cell_to_faces,
        0,
        0,
        left,
        0,
    );
    link(
        &mut face_to_cells,
        &mut face_to_lidx,
        &mut cell_to_faces,
        n as i32 - 1,
        1,
        right,
        0,
    );
    MeshInfo {
        num_owned_cells: n,
        num_ghost_cells: 0,
        num_virtual_cells: 2,
        global_cells: (0..total as u64).map(GlobalCellId::new).collect(),
        local_cells: (0..n as i32).chain([-1, -1]).collect(),
        cell_vertices: line_vertices(n, total),
        cell_to_faces,
        face_to_cells,
        face_to_lidx,
    }
}

/// 1-D chain of `n` owned line cells flanked by two ghost cells owned by
/// other ranks (indices `n` and `n + 1`, global IDs 1000 and 1001).
pub fn ghosted_chain(n: usize) -> MeshInfo {
    let total = n + 2;
    let mut cell_to_faces = CellFaces::unset(total, 2);
    let mut face_to_cells = Vec::new();
    let mut face_to_lidx = Vec::new();
    for i in 0..n - 1 {
        link(
            &mut face_to_cells,
            &mut face_to_lidx,
            &mut cell_to_faces,
            i as i32,
            1,
            (i + 1) as i32,
            0,
        );
    }
    let (left, right) = (n as i32, n as i32 + 1);
    link(
        &mut face_to_cells,
        &mut face_to_lidx,
        &mut cell_to_faces,
        0,
        0,
        left,
        1,
    );
    link(
        &mut face_to_cells,
        &mut face_to_lidx,
        &mut cell_to_faces,
        n as i32 - 1,
        1,
        right,
        0,
    );
    MeshInfo {
        num_owned_cells: n,
        num_ghost_cells: 2,
        num_virtual_cells: 0,
        global_cells: (0..n as u64)
            .chain([1000, 1001])
            .map(GlobalCellId::new)
            .collect(),
        local_cells: (0..n as i32).chain([100, 101]).collect(),
        cell_vertices: line_vertices(n, total),
        cell_to_faces,
        face_to_cells,
        face_to_lidx,
    }
}

/// Structured `nx × ny` grid of owned quadrilateral cells (row-major), the
/// whole boundary backed by virtual cells. Face slots: 0 left, 1 right,
/// 2 bottom, 3 top.
pub fn quad_grid(nx: usize, ny: usize) -> MeshInfo {
    let num_owned = nx * ny;
    let num_virtual = 2 * (nx + ny);
    let total = num_owned + num_virtual;
    let mut cell_to_faces = CellFaces::unset(total, 4);
    let mut face_to_cells = Vec::new();
    let mut face_to_lidx = Vec::new();
    let mut next_virtual = num_owned as i32;
    for j in 0..ny {
        for i in 0..nx {
            let c = (j * nx + i) as i32;
            if i == 0 {
                link(
                    &mut face_to_cells,
                    &mut face_to_lidx,
                    &mut cell_to_faces,
                    c,
                    0,
                    next_virtual,
                    0,
                );
                next_virtual += 1;
            }
            if i + 1 < nx {
                link(
                    &mut face_to_cells,
                    &mut face_to_lidx,
                    &mut cell_to_faces,
                    c,
                    1,
                    c + 1,
                    0,
                );
            } else {
                link(
                    &mut face_to_cells,
                    &mut face_to_lidx,
                    &mut cell_to_faces,
                    c,
                    1,
                    next_virtual,
                    0,
                );
                next_virtual += 1;
            }
            if j == 0 {
                link(
                    &mut face_to_cells,
                    &mut face_to_lidx,
                    &mut cell_to_faces,
                    c,
                    2,
                    next_virtual,
                    0,
                );
                next_virtual += 1;
            }
            if j + 1 < ny {
                link(
                    &mut face_to_cells,
                    &mut face_to_lidx,
                    &mut cell_to_faces,
                    c,
                    3,
                    c + nx as i32,
                    2,
                );
            } else {
                link(
                    &mut face_to_cells,
                    &mut face_to_lidx,
                    &mut cell_to_faces,
                    c,
                    3,
                    next_virtual,
                    0,
                );
                next_virtual += 1;
            }
        }
    }
    assert_eq!(next_virtual as usize, total);

    let mut cell_vertices = CellVertices::zeros(total, 4, 2);
    for j in 0..ny {
        for i in 0..nx {
            let (x, y) = (i as f64, j as f64);
            cell_vertices.cell_mut(j * nx + i).copy_from_slice(&[
                x,
                y,
                x + 1.0,
                y,
                x + 1.0,
                y + 1.0,
                x,
                y + 1.0,
            ]);
        }
    }
    MeshInfo {
        num_owned_cells: num_owned,
        num_ghost_cells: 0,
        num_virtual_cells: num_virtual,
        global_cells: (0..total as u64).map(GlobalCellId::new).collect(),
        local_cells: (0..num_owned as i32)
            .chain(std::iter::repeat(-1).take(num_virtual))
            .collect(),
        cell_vertices,
        cell_to_faces,
        face_to_cells,
        face_to_lidx,
    }
}

/// Owned global IDs of a child, mapped back through the parent's numbering.
pub fn owned_global_ids(info: &MeshInfo) -> Vec<u64> {
    info.global_cells[..info.num_owned_cells]
        .iter()
        .map(|id| id.get())
        .collect()
}

fn line_vertices(n: usize, total: usize) -> CellVertices {
    let mut verts = CellVertices::zeros(total, 2, 1);
    for i in 0..n {
        verts.cell_mut(i).copy_from_slice(&[i as f64, i as f64 + 1.0]);
    }
    verts
}
