//! Adaptive quadtree triangulation of polygonal domains.
//!
//! Pipeline
//! - `quadtree`: refine a square domain `[0,U]²` near polygon boundaries, keep it
//!   no coarser than `U/4` elsewhere, then enforce 2:1 balance between touching
//!   leaves.
//! - `mesh`: turn every balanced leaf into 2 triangles (fixed diagonal) or 4
//!   triangles around a Steiner center.
//! - `geom2`: the exact predicates both stages are built on.
//!
//! API Policy
//! - The crate is consumed by the workspace CLI and benches. Prefer the `prelude`
//!   re-exports; internals may move between modules.

pub mod cases;
pub mod cfg;
pub mod error;
pub mod geom2;
pub mod io;
pub mod mesh;
pub mod quadtree;

pub use cfg::MeshCfg;
pub use error::MeshError;
pub use geom2::{Point, Polygon, Square};
pub use mesh::{CellKind, Mesh, MeshStats, Triangle};
pub use nalgebra::Vector2 as Vec2;
pub use quadtree::{BalanceReport, NodeId, QuadTree};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cases::{Case, CATALOG};
    pub use crate::geom2::rand::{draw_polygon_star, ReplayToken, StarCfg, VertexCount};
    pub use crate::geom2::{
        point_in_polygon, polygon_intersects_square, segment_intersect,
        segment_intersects_square, Point, Polygon, Square,
    };
    pub use crate::io::{parse_polygon, read_polygon};
    pub use crate::mesh::{CellKind, Mesh, MeshStats, Triangle};
    pub use crate::quadtree::{BalanceReport, NodeId, QuadTree};
    pub use crate::{build_mesh, create_mesh, create_mesh_with, MeshCfg, MeshError, MeshRun};
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise; exactly zero for parallel vectors.
#[inline]
pub fn parallelogram_area(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Everything produced by one meshing run.
#[derive(Clone, Debug)]
pub struct MeshRun {
    pub tree: QuadTree,
    pub mesh: Mesh,
    pub balance: BalanceReport,
}

/// Build, balance and triangulate; keeps the tree around for inspection.
pub fn build_mesh(polygons: &[Polygon], size: u32, cfg: MeshCfg) -> Result<MeshRun, MeshError> {
    validate_domain(polygons, size)?;
    cfg.validate()?;
    let mut tree = QuadTree::new(size, cfg);
    tree.refine(polygons);
    let balance = tree.balance();
    let mesh = Mesh::triangulate(&tree, polygons);
    tracing::debug!(
        size,
        leaves = tree.leaf_count(),
        vertices = mesh.vertices.len(),
        triangles = mesh.triangles.len(),
        "mesh_built"
    );
    Ok(MeshRun {
        tree,
        mesh,
        balance,
    })
}

/// Mesh `polygons` over `[0,size]²` with the default configuration.
pub fn create_mesh(polygons: &[Polygon], size: u32) -> Result<Mesh, MeshError> {
    create_mesh_with(polygons, size, MeshCfg::default())
}

/// Mesh `polygons` over `[0,size]²` with an explicit configuration.
pub fn create_mesh_with(polygons: &[Polygon], size: u32, cfg: MeshCfg) -> Result<Mesh, MeshError> {
    build_mesh(polygons, size, cfg).map(|run| run.mesh)
}

fn validate_domain(polygons: &[Polygon], size: u32) -> Result<(), MeshError> {
    if size == 0 {
        return Err(MeshError::EmptyDomain);
    }
    if polygons.is_empty() {
        return Err(MeshError::NoPolygons);
    }
    let domain = Square::new(0.0, 0.0, f64::from(size));
    for (polygon_idx, poly) in polygons.iter().enumerate() {
        if let Some(p) = poly.vertices().iter().find(|p| !domain.contains_closed(p)) {
            return Err(MeshError::OutsideDomain {
                polygon: polygon_idx,
                x: p.x,
                y: p.y,
                size,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn unit_square_at(x: f64, y: f64, s: f64) -> Polygon {
        Polygon::new(vec![
            Point::new(x, y),
            Point::new(x + s, y),
            Point::new(x + s, y + s),
            Point::new(x, y + s),
        ])
        .unwrap()
    }

    #[test]
    fn area_axis_aligned() {
        let a = vector![1.0, 0.0];
        let b = vector![0.0, 2.5];
        assert!((parallelogram_area(a, b) - 2.5).abs() < 1e-12);
        assert_eq!(parallelogram_area(a, a * 3.0), 0.0);
    }

    #[test]
    fn create_mesh_rejects_bad_domains() {
        let sq = unit_square_at(6.0, 6.0, 4.0);
        assert!(matches!(
            create_mesh(&[sq.clone()], 0),
            Err(MeshError::EmptyDomain)
        ));
        assert!(matches!(create_mesh(&[], 16), Err(MeshError::NoPolygons)));
        assert!(matches!(
            create_mesh(&[sq], 8),
            Err(MeshError::OutsideDomain { polygon: 0, .. })
        ));
    }

    #[test]
    fn create_mesh_on_tiny_domains() {
        let tri = Polygon::from_coords(&[(0.2, 0.2), (0.8, 0.2), (0.5, 0.8)]).unwrap();
        for size in 1..4u32 {
            let mesh = create_mesh(&[tri.clone()], size).unwrap();
            mesh.validate().unwrap();
            let u = f64::from(size);
            assert!((mesh.area() - u * u).abs() < 1e-9, "U={size}");
        }
    }

    #[test]
    fn create_mesh_covers_domain() {
        let sq = unit_square_at(6.0, 6.0, 4.0);
        let mesh = create_mesh(&[sq], 16).unwrap();
        assert!((mesh.area() - 256.0).abs() < 1e-9);
        mesh.validate().unwrap();
    }
}
