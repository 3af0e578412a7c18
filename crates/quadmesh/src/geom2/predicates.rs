//! Segment, square and polygon predicates.

use super::types::{Point, Polygon, Square};
use crate::parallelogram_area;

/// Do segments `p1p2` and `p3p4` intersect?
///
/// Solves `p1 + s·d1 = p3 + t·d2` by Cramer's rule. A zero determinant
/// (parallel, collinear or overlapping) returns `false`; otherwise both
/// parameters must lie in `[0, 1]`, endpoints included.
pub fn segment_intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    let d1 = p2 - p1;
    let d2 = p4 - p3;
    let det = parallelogram_area(d1, d2);
    if det == 0.0 {
        return false;
    }
    let r = p3 - p1;
    let s = parallelogram_area(r, d2) / det;
    let t = parallelogram_area(r, d1) / det;
    (0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&t)
}

/// Does segment `ab` cross any of the four edges of `square`?
///
/// A segment strictly inside the square does not count.
pub fn segment_intersects_square(a: Point, b: Point, square: &Square) -> bool {
    square
        .edges()
        .iter()
        .any(|&(p, q)| segment_intersect(a, b, p, q))
}

/// Does `polygon` meet `square` at all?
///
/// True if an edge crosses the square's boundary, or the square lies inside the
/// polygon (all four corners inside), or a polygon vertex lies in the closed
/// square.
pub fn polygon_intersects_square(polygon: &Polygon, square: &Square) -> bool {
    if polygon
        .edges()
        .any(|(a, b)| segment_intersects_square(a, b, square))
    {
        return true;
    }
    if square
        .corners()
        .iter()
        .all(|c| point_in_polygon(c, polygon))
    {
        return true;
    }
    polygon
        .vertices()
        .iter()
        .any(|v| square.contains_closed(v))
}

/// Horizontal ray-casting parity test.
///
/// Edge `(vj, vi)` toggles the parity iff exactly one endpoint lies strictly
/// above `point.y` and the edge meets the line `y = point.y` strictly right of
/// `point.x`.
pub fn point_in_polygon(point: &Point, polygon: &Polygon) -> bool {
    let verts = polygon.vertices();
    let mut inside = false;
    let mut j = verts.len() - 1;
    for (i, vi) in verts.iter().enumerate() {
        let vj = &verts[j];
        if (vi.y > point.y) != (vj.y > point.y) {
            let x_cross = (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
