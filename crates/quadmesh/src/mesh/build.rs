//! Triangulation pass over the balanced leaves.

use std::collections::HashMap;

use crate::geom2::{polygon_intersects_square, CoordKey, Point, Polygon, Square};
use crate::quadtree::QuadTree;

use super::types::{Cell, CellKind, Mesh, Triangle};

/// Coordinate → index map in first-seen order.
#[derive(Default)]
struct VertexRegistry {
    index: HashMap<CoordKey, usize>,
    vertices: Vec<Point>,
}

impl VertexRegistry {
    fn register(&mut self, p: Point) -> usize {
        let next = self.vertices.len();
        let idx = *self.index.entry(CoordKey::of(&p)).or_insert(next);
        if idx == next {
            self.vertices.push(p);
        }
        idx
    }
}

impl Mesh {
    /// Triangulate every leaf of `tree` against `polygons`.
    ///
    /// Corners of all leaves are registered first (SW, SE, NE, NW per leaf) so
    /// vertex order only depends on the leaf order; Steiner centers follow.
    pub fn triangulate(tree: &QuadTree, polygons: &[Polygon]) -> Mesh {
        let leaves = tree.leaves();
        let mut registry = VertexRegistry::default();
        for &id in &leaves {
            for c in tree.node(id).square.corners() {
                registry.register(c);
            }
        }

        let mut triangles: Vec<Triangle> = Vec::with_capacity(2 * leaves.len());
        let mut cells = Vec::with_capacity(leaves.len());
        for &id in &leaves {
            let square = tree.node(id).square;
            let [sw, se, ne, nw] = square.corners().map(|c| registry.register(c));
            let kind = classify(&square, polygons);
            let first_triangle = triangles.len();
            match kind {
                CellKind::InteriorIntersected | CellKind::CornerOnly => {
                    if even_parity(&square) {
                        triangles.push([sw, se, ne]);
                        triangles.push([sw, ne, nw]);
                    } else {
                        triangles.push([sw, se, nw]);
                        triangles.push([se, ne, nw]);
                    }
                }
                CellKind::Steiner => {
                    let c = registry.register(square.center());
                    triangles.push([c, sw, se]);
                    triangles.push([c, se, ne]);
                    triangles.push([c, ne, nw]);
                    triangles.push([c, nw, sw]);
                }
            }
            cells.push(Cell {
                leaf: id,
                square,
                kind,
                first_triangle,
            });
        }
        Mesh {
            vertices: registry.vertices,
            triangles,
            cells,
        }
    }
}

/// Classify a leaf; see the module docs for the rules.
pub(crate) fn classify(square: &Square, polygons: &[Polygon]) -> CellKind {
    let probe = square.inner_half();
    if polygons
        .iter()
        .any(|p| polygon_intersects_square(p, &probe))
    {
        return CellKind::InteriorIntersected;
    }
    let hidden_vertex = polygons
        .iter()
        .flat_map(|p| p.vertices())
        .any(|v| square.contains_open(v));
    if hidden_vertex {
        CellKind::Steiner
    } else {
        CellKind::CornerOnly
    }
}

/// `round(x0) + round(y0)` is even; ties round to even.
#[inline]
fn even_parity(square: &Square) -> bool {
    let s = square.x0.round_ties_even() + square.y0.round_ties_even();
    s.rem_euclid(2.0) == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_dedups_in_first_seen_order() {
        let mut reg = VertexRegistry::default();
        assert_eq!(reg.register(Point::new(0.0, 0.0)), 0);
        assert_eq!(reg.register(Point::new(1.0, 0.0)), 1);
        assert_eq!(reg.register(Point::new(-0.0, 0.0)), 0);
        assert_eq!(reg.vertices.len(), 2);
    }

    #[test]
    fn parity_rounds_ties_to_even() {
        assert!(even_parity(&Square::new(0.0, 0.0, 1.0)));
        assert!(!even_parity(&Square::new(1.0, 0.0, 1.0)));
        // 0.5 → 0 and 1.5 → 2: both even.
        assert!(even_parity(&Square::new(0.5, 1.5, 0.5)));
        // 2.5 → 2 and 0.75 → 1.
        assert!(!even_parity(&Square::new(2.5, 0.75, 0.25)));
    }
}
