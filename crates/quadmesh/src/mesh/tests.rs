use super::*;
use crate::geom2::rand::{draw_polygon_star, ReplayToken, StarCfg};
use crate::geom2::{Point, Polygon};
use crate::{build_mesh, MeshCfg};
use proptest::prelude::*;

fn l_shape() -> Polygon {
    Polygon::from_coords(&[
        (2.0, 2.0),
        (14.0, 2.0),
        (14.0, 6.0),
        (6.0, 6.0),
        (6.0, 14.0),
        (2.0, 14.0),
    ])
    .unwrap()
}

/// Small triangle tucked into the corner of the coarse leaf `[4,8]²`.
fn corner_sliver() -> Polygon {
    Polygon::from_coords(&[(4.2, 4.2), (4.6, 4.2), (4.2, 4.6)]).unwrap()
}

fn assert_steiner_only_with_hidden_vertex(mesh: &Mesh, polygons: &[Polygon]) {
    for cell in &mesh.cells {
        let hidden = polygons
            .iter()
            .flat_map(|p| p.vertices())
            .any(|v| cell.square.contains_open(v));
        if cell.kind == CellKind::Steiner {
            assert!(hidden, "Steiner fan in {:?} without a hidden vertex", cell.square);
        }
        if !hidden {
            assert_ne!(cell.kind, CellKind::Steiner);
        }
    }
}

#[test]
fn l_shape_end_to_end() {
    let polys = [l_shape()];
    let run = build_mesh(&polys, 16, MeshCfg::default()).unwrap();
    let mesh = &run.mesh;
    assert!(run.tree.leaf_count() > 16);
    assert!(run.tree.min_leaf_size() >= 1.0);
    assert_eq!(mesh.cells.len(), run.tree.leaf_count());
    mesh.validate().unwrap();
    assert!((mesh.area() - 256.0).abs() < 1e-9);
    assert_steiner_only_with_hidden_vertex(mesh, &polys);
    let stats = mesh.stats();
    assert_eq!(
        stats.triangles,
        2 * (stats.interior_intersected + stats.corner_only) + 4 * stats.steiner
    );
    assert!(stats.interior_intersected > 0);
}

#[test]
fn hidden_vertex_gets_steiner_fan() {
    let polys = [corner_sliver()];
    let run = build_mesh(&polys, 16, MeshCfg::default()).unwrap();
    let mesh = &run.mesh;
    assert_eq!(run.tree.leaf_count(), 16);
    let stats = mesh.stats();
    assert_eq!(stats.steiner, 1);
    assert_eq!(stats.corner_only, 15);
    assert_eq!(stats.vertices, 26);
    assert_eq!(stats.triangles, 34);

    let cell = mesh
        .cells
        .iter()
        .find(|c| c.kind == CellKind::Steiner)
        .unwrap();
    assert_eq!(cell.square, crate::Square::new(4.0, 4.0, 4.0));
    let center = mesh.vertices.len() - 1;
    assert_eq!(mesh.vertices[center], Point::new(6.0, 6.0));
    let fan = mesh.cell_triangles(cell);
    assert_eq!(fan.len(), 4);
    assert!(fan.iter().all(|t| t[0] == center));
    for t in fan {
        assert!((mesh.triangle_area(t) - 4.0).abs() < 1e-12);
    }
    mesh.validate().unwrap();
    assert!((mesh.area() - 256.0).abs() < 1e-9);
}

#[test]
fn interior_probe_wins_over_hidden_vertex() {
    // Vertices are strictly inside [4,8]² but also inside its inner half.
    let inner = Polygon::from_coords(&[(5.2, 5.2), (6.8, 5.2), (6.8, 6.8), (5.2, 6.8)]).unwrap();
    let run = build_mesh(&[inner], 16, MeshCfg::default()).unwrap();
    let stats = run.mesh.stats();
    assert_eq!(stats.steiner, 0);
    assert_eq!(stats.interior_intersected, 1);
    assert_eq!(stats.triangles, 32);
    assert_eq!(stats.vertices, 25);
}

#[test]
fn corners_shared_between_leaves_are_registered_once() {
    let run = build_mesh(&[corner_sliver()], 16, MeshCfg::default()).unwrap();
    // 4×4 grid of leaves: 5×5 distinct corners before the Steiner center.
    let corners: Vec<_> = run.mesh.vertices[..25].to_vec();
    assert_eq!(corners[0], Point::new(0.0, 12.0));
    for x in [0.0, 4.0, 8.0, 12.0, 16.0] {
        for y in [0.0, 4.0, 8.0, 12.0, 16.0] {
            assert_eq!(corners.iter().filter(|p| **p == Point::new(x, y)).count(), 1);
        }
    }
}

#[test]
fn two_triangle_cells_follow_parity_diagonal() {
    let run = build_mesh(&[l_shape()], 16, MeshCfg::default()).unwrap();
    let mesh = &run.mesh;
    let mut saw_odd = false;
    for cell in mesh.cells.iter().filter(|c| c.kind != CellKind::Steiner) {
        let sq = cell.square;
        let [t0, t1] = [mesh.cell_triangles(cell)[0], mesh.cell_triangles(cell)[1]];
        let shared: Vec<Point> = t0
            .iter()
            .filter(|i| t1.contains(*i))
            .map(|&i| mesh.vertices[i])
            .collect();
        assert_eq!(shared.len(), 2);
        let even = (sq.x0.round() as i64 + sq.y0.round() as i64) % 2 == 0;
        let [sw, se, ne, nw] = sq.corners();
        if even {
            assert!(shared.contains(&sw) && shared.contains(&ne));
        } else {
            saw_odd = true;
            assert!(shared.contains(&se) && shared.contains(&nw));
        }
    }
    assert!(saw_odd);
}

#[test]
fn multiple_disjoint_polygons() {
    let a = Polygon::from_coords(&[(2.0, 2.0), (6.0, 2.0), (6.0, 6.0), (2.0, 6.0)]).unwrap();
    let b = Polygon::from_coords(&[(20.0, 20.0), (28.0, 22.0), (24.0, 28.0)]).unwrap();
    let polys = [a, b];
    let run = build_mesh(&polys, 32, MeshCfg::default()).unwrap();
    run.mesh.validate().unwrap();
    assert!((run.mesh.area() - 1024.0).abs() < 1e-9);
    assert_steiner_only_with_hidden_vertex(&run.mesh, &polys);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn random_star_meshes_are_valid(seed in 0u64..1_000, index in 0u64..64) {
        let poly = draw_polygon_star(StarCfg::centered(16), ReplayToken { seed, index });
        let polys = [poly];
        let run = build_mesh(&polys, 16, MeshCfg::default()).unwrap();
        prop_assert!(run.mesh.validate().is_ok());
        prop_assert!((run.mesh.area() - 256.0).abs() < 1e-9);
        prop_assert_eq!(run.mesh.cells.len(), run.tree.leaf_count());
        assert_steiner_only_with_hidden_vertex(&run.mesh, &polys);
    }
}
