//! Exact 2D predicates over points, segments, polygons and axis-aligned squares.
//!
//! Purpose
//! - Answer the three questions refinement and triangulation ask: does a
//!   polygon edge cross a square's boundary, does a polygon touch a square at
//!   all, and is a point inside a polygon.
//!
//! Degeneracy policy
//! - No epsilons. Parallel segments (including collinear overlap) never
//!   intersect; ray casting applies one fixed crossing rule with no special
//!   cases for horizontal edges or vertices on the ray. Both are modelling
//!   choices the quadtree and the mesh builder rely on.
//!
//! References
//! - Code cross-refs: `quadtree::QuadTree::refine`, `mesh::Mesh::triangulate`

mod predicates;
pub mod rand;
mod types;

pub use predicates::{
    point_in_polygon, polygon_intersects_square, segment_intersect, segment_intersects_square,
};
pub use types::{CoordKey, Point, Polygon, Square};

#[cfg(test)]
mod tests;
