//! Adaptive quadtree: boundary-driven refinement and 2:1 balancing.
//!
//! Purpose
//! - Cover the domain `[0,U]²` with square leaves that are fine where polygon
//!   edges cross them and no coarser than `U/4` elsewhere, then refine further
//!   until touching leaves differ by at most one level.
//!
//! Why this design
//! - Nodes live in an arena (`Vec<Node>`) addressed by `NodeId`. Children are
//!   owned by index; the parent handle is a plain index used for navigation
//!   only. Nothing is ever merged or freed before the tree itself.
//! - Refinement, point location and balancing are iterative (explicit stack or
//!   queue), so tree height never turns into call-stack depth.
//!
//! Note on the resolution floor
//! - A node whose width is at or below `MeshCfg::min_leaf_size` stops refining
//!   even if a boundary still crosses it. Such leaves are counted
//!   (`QuadTree::under_resolved`), not rejected.
//!
//! References
//! - Code cross-refs: `geom2::segment_intersects_square`, `mesh::Mesh::triangulate`

mod balance;
mod build;
mod types;

pub use types::{BalanceReport, Node, NodeId, QuadTree, Quadrant};
