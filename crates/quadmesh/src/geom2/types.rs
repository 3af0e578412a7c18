//! Basic 2D types: points, squares, polygons.
//!
//! - `Point`: `nalgebra::Point2<f64>`; `CoordKey` gives it bit-exact hashing.
//! - `Square`: axis-aligned `(x0, y0, size)` with quadrant split.
//! - `Polygon`: closed vertex ring, validated on construction.

use nalgebra::Point2;

use crate::MeshError;

pub type Point = Point2<f64>;

/// Hashable, bit-exact coordinate key. `-0.0` and `0.0` map to the same key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoordKey(u64, u64);

impl CoordKey {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        // Adding 0.0 folds -0.0 into +0.0.
        Self((x + 0.0).to_bits(), (y + 0.0).to_bits())
    }

    #[inline]
    pub fn of(p: &Point) -> Self {
        Self::new(p.x, p.y)
    }
}

/// Axis-aligned square `[x0, x0+size] × [y0, y0+size]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Square {
    pub x0: f64,
    pub y0: f64,
    pub size: f64,
}

impl Square {
    #[inline]
    pub fn new(x0: f64, y0: f64, size: f64) -> Self {
        Self { x0, y0, size }
    }

    #[inline]
    pub fn x1(&self) -> f64 {
        self.x0 + self.size
    }

    #[inline]
    pub fn y1(&self) -> f64 {
        self.y0 + self.size
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.size * self.size
    }

    #[inline]
    pub fn center(&self) -> Point {
        let h = self.size / 2.0;
        Point::new(self.x0 + h, self.y0 + h)
    }

    /// Corners in counterclockwise order starting at the origin: SW, SE, NE, NW.
    #[inline]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x0, self.y0),
            Point::new(self.x1(), self.y0),
            Point::new(self.x1(), self.y1()),
            Point::new(self.x0, self.y1()),
        ]
    }

    /// Boundary edges in order bottom, right, top, left.
    pub fn edges(&self) -> [(Point, Point); 4] {
        let [sw, se, ne, nw] = self.corners();
        [(sw, se), (se, ne), (ne, nw), (nw, sw)]
    }

    /// Closed-bounds membership.
    #[inline]
    pub fn contains_closed(&self, p: &Point) -> bool {
        self.x0 <= p.x && p.x <= self.x1() && self.y0 <= p.y && p.y <= self.y1()
    }

    /// Open-interior membership.
    #[inline]
    pub fn contains_open(&self, p: &Point) -> bool {
        self.x0 < p.x && p.x < self.x1() && self.y0 < p.y && p.y < self.y1()
    }

    /// Concentric square of half the side (offset by a quarter on each axis).
    #[inline]
    pub fn inner_half(&self) -> Square {
        Square::new(
            self.x0 + self.size / 4.0,
            self.y0 + self.size / 4.0,
            self.size / 2.0,
        )
    }

    /// Equal quadrants in order NW, NE, SW, SE.
    pub fn quadrants(&self) -> [Square; 4] {
        let h = self.size / 2.0;
        [
            Square::new(self.x0, self.y0 + h, h),
            Square::new(self.x0 + h, self.y0 + h, h),
            Square::new(self.x0, self.y0, h),
            Square::new(self.x0 + h, self.y0, h),
        ]
    }

    /// Interiors overlap (sharing an edge or a corner does not count).
    pub fn overlaps(&self, other: &Square) -> bool {
        self.x0 < other.x1() && other.x0 < self.x1() && self.y0 < other.y1() && other.y0 < self.y1()
    }

    /// Closed squares meet (overlap, shared edge, or shared corner).
    pub fn touches(&self, other: &Square) -> bool {
        self.x0 <= other.x1()
            && other.x0 <= self.x1()
            && self.y0 <= other.y1()
            && other.y0 <= self.y1()
    }
}

/// Closed polygon; edge `i` joins vertex `i` and vertex `(i+1) mod n`.
///
/// Invariants:
/// - At least 3 vertices, all finite.
/// - Simplicity is assumed, not checked.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub(super) vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Result<Self, MeshError> {
        if vertices.len() < 3 {
            return Err(MeshError::TooFewVertices(vertices.len()));
        }
        if let Some(p) = vertices
            .iter()
            .find(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(MeshError::NonFinite { x: p.x, y: p.y });
        }
        Ok(Self { vertices })
    }

    /// Build from `(x, y)` pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self, MeshError> {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Vertex count; never below 3.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Edges `(v_i, v_{i+1 mod n})` in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Shoelace signed area (positive for counterclockwise rings).
    pub fn signed_area(&self) -> f64 {
        let twice: f64 = self
            .edges()
            .map(|(p, q)| crate::parallelogram_area(p.coords, q.coords))
            .sum();
        twice / 2.0
    }

    /// Tight axis-aligned bounds `(min, max)`.
    pub fn bounds(&self) -> (Point, Point) {
        let mut lo = self.vertices[0];
        let mut hi = self.vertices[0];
        for p in &self.vertices[1..] {
            lo.x = lo.x.min(p.x);
            lo.y = lo.y.min(p.y);
            hi.x = hi.x.max(p.x);
            hi.y = hi.y.max(p.y);
        }
        (lo, hi)
    }
}
