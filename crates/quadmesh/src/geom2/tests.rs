use super::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn ten_square() -> Polygon {
    Polygon::from_coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]).unwrap()
}

#[test]
fn crossing_diagonals_intersect() {
    assert!(segment_intersect(p(0.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(1.0, 0.0)));
}

#[test]
fn parallel_and_collinear_segments_never_intersect() {
    assert!(!segment_intersect(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(1.0, 1.0)));
    // Collinear overlap is reported as no intersection.
    assert!(!segment_intersect(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 0.0), p(3.0, 0.0)));
    // Identical segments too.
    assert!(!segment_intersect(p(0.0, 0.0), p(2.0, 2.0), p(0.0, 0.0), p(2.0, 2.0)));
}

#[test]
fn endpoint_touch_counts_and_near_miss_does_not() {
    // T-junction: endpoint of one segment lies on the other.
    assert!(segment_intersect(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)));
    assert!(!segment_intersect(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 0.5), p(1.0, 1.0)));
}

#[test]
fn segment_square_boundary_only() {
    let sq = Square::new(0.0, 0.0, 4.0);
    // Crosses the left edge.
    assert!(segment_intersects_square(p(-1.0, 2.0), p(2.0, 2.0), &sq));
    // Strictly inside: no boundary crossing.
    assert!(!segment_intersects_square(p(1.0, 1.0), p(3.0, 3.0), &sq));
    // Runs along the bottom edge: parallel to it, but crosses left and right edges at the corners.
    assert!(segment_intersects_square(p(-1.0, 0.0), p(5.0, 0.0), &sq));
    // Entirely outside.
    assert!(!segment_intersects_square(p(5.0, 5.0), p(6.0, 9.0), &sq));
}

#[test]
fn point_in_polygon_basic() {
    let poly = ten_square();
    assert!(point_in_polygon(&p(5.0, 5.0), &poly));
    assert!(!point_in_polygon(&p(15.0, 15.0), &poly));
    assert!(!point_in_polygon(&p(-1.0, 5.0), &poly));
}

#[test]
fn point_in_polygon_nonconvex() {
    // L-shape: the notch at the top-right is outside.
    let l = Polygon::from_coords(&[
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 2.0),
        (2.0, 2.0),
        (2.0, 4.0),
        (0.0, 4.0),
    ])
    .unwrap();
    assert!(point_in_polygon(&p(1.0, 3.0), &l));
    assert!(point_in_polygon(&p(3.0, 1.0), &l));
    assert!(!point_in_polygon(&p(3.0, 3.0), &l));
}

#[test]
fn point_in_polygon_boundary_rule_is_fixed() {
    let poly = ten_square();
    // Left edge counts (ray crosses the right edge), right edge does not.
    assert!(point_in_polygon(&p(0.0, 5.0), &poly));
    assert!(!point_in_polygon(&p(10.0, 5.0), &poly));
    // Bottom edge is inside, top edge is outside (y strictly greater rule).
    assert!(point_in_polygon(&p(5.0, 0.0), &poly));
    assert!(!point_in_polygon(&p(5.0, 10.0), &poly));
}

#[test]
fn polygon_square_conditions() {
    let poly = ten_square();
    // Square fully inside the polygon: corners-inside rule.
    assert!(polygon_intersects_square(&poly, &Square::new(4.0, 4.0, 2.0)));
    // Square straddling the right edge.
    assert!(polygon_intersects_square(&poly, &Square::new(9.0, 4.0, 2.0)));
    // Far away.
    assert!(!polygon_intersects_square(&poly, &Square::new(12.0, 12.0, 2.0)));

    // Polygon fully inside the square: vertex containment rule.
    let tiny = Polygon::from_coords(&[(1.0, 1.0), (2.0, 1.0), (1.5, 2.0)]).unwrap();
    assert!(polygon_intersects_square(&tiny, &Square::new(0.0, 0.0, 4.0)));
    // Vertex on the closed boundary also counts.
    assert!(polygon_intersects_square(&tiny, &Square::new(2.0, 0.5, 1.0)));
}

#[test]
fn zero_area_square_is_not_an_error() {
    let poly = ten_square();
    // Degenerate square inside the polygon: all corners inside.
    assert!(polygon_intersects_square(&poly, &Square::new(5.0, 5.0, 0.0)));
    assert!(!polygon_intersects_square(&poly, &Square::new(20.0, 20.0, 0.0)));
}

#[test]
fn square_helpers() {
    let sq = Square::new(2.0, 4.0, 4.0);
    let [nw, ne, sw, se] = sq.quadrants();
    assert_eq!(nw, Square::new(2.0, 6.0, 2.0));
    assert_eq!(ne, Square::new(4.0, 6.0, 2.0));
    assert_eq!(sw, Square::new(2.0, 4.0, 2.0));
    assert_eq!(se, Square::new(4.0, 4.0, 2.0));
    assert_eq!(sq.inner_half(), Square::new(3.0, 5.0, 2.0));
    assert_eq!(sq.center(), p(4.0, 6.0));
    assert!(sq.contains_closed(&p(2.0, 8.0)));
    assert!(!sq.contains_open(&p(2.0, 6.0)));
    assert!(sw.touches(&ne) && !sw.overlaps(&ne));
    assert!(!sw.touches(&Square::new(5.0, 4.0, 1.0)));
}

#[test]
fn coord_key_is_exact_and_folds_negative_zero() {
    assert_eq!(CoordKey::new(0.0, 1.5), CoordKey::new(-0.0, 1.5));
    assert_ne!(CoordKey::new(0.1 + 0.2, 0.0), CoordKey::new(0.3, 0.0));
}

#[test]
fn polygon_construction_is_validated() {
    assert!(matches!(
        Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0)]),
        Err(crate::MeshError::TooFewVertices(2))
    ));
    assert!(matches!(
        Polygon::from_coords(&[(0.0, 0.0), (1.0, f64::NAN), (0.0, 1.0)]),
        Err(crate::MeshError::NonFinite { .. })
    ));
    let poly = ten_square();
    assert_eq!(poly.len(), 4);
    assert_eq!(poly.edges().count(), 4);
    assert!((poly.signed_area() - 100.0).abs() < 1e-12);
    assert_eq!(poly.bounds(), (p(0.0, 0.0), p(10.0, 10.0)));
}
