//! Leaf-by-leaf triangulation of a balanced quadtree.
//!
//! Purpose
//! - Emit a triangle mesh whose vertices are the deduplicated leaf corners
//!   (plus one Steiner center per under-resolved leaf) and whose triangles each
//!   stay inside a single leaf.
//!
//! Classification (first match wins)
//! - `InteriorIntersected`: a polygon meets the leaf's inner half square → 2
//!   triangles, diagonal chosen by the parity of the rounded leaf origin.
//! - `CornerOnly`: no polygon vertex strictly inside the leaf → same template.
//! - `Steiner`: a polygon vertex hides inside the leaf → fan of 4 triangles
//!   around the leaf center.
//!
//! Known limitation
//! - Leaves of different size leave hanging nodes on their shared edge; the
//!   parity diagonal only makes equal-size neighbors agree more often. There is
//!   no conformity repair, smoothing or flipping afterwards.
//!
//! References
//! - Code cross-refs: `quadtree::QuadTree::leaves`, `geom2::polygon_intersects_square`

mod build;
mod types;

pub use types::{Cell, CellKind, Mesh, MeshStats, Triangle};

#[cfg(test)]
mod tests;
