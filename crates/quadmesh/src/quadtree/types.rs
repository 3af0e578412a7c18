//! Data types for the quadtree arena.
//!
//! Kept small and explicit so `build` and `balance` are easy to read.

use crate::geom2::Square;
use crate::MeshCfg;

/// Index of a node in the tree arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}

/// Child slot; children arrays are stored in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    Nw = 0,
    Ne = 1,
    Sw = 2,
    Se = 3,
}

impl Quadrant {
    /// Quadrant of a square with center `(cx, cy)` that owns `(x, y)`.
    /// Points on a midline belong to the east/north side.
    #[inline]
    pub fn select(x: f64, y: f64, cx: f64, cy: f64) -> Self {
        match (x < cx, y < cy) {
            (true, true) => Quadrant::Sw,
            (true, false) => Quadrant::Nw,
            (false, true) => Quadrant::Se,
            (false, false) => Quadrant::Ne,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    pub square: Square,
    pub depth: u32,
    pub parent: Option<NodeId>, // navigation only
    pub children: Option<[NodeId; 4]>, // NW, NE, SW, SE
}

impl Node {
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

/// Outcome of `QuadTree::balance`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BalanceReport {
    /// Full passes over the leaf set, including the final quiet one.
    pub passes: usize,
    /// Leaves split to restore 2:1 balance.
    pub subdivisions: usize,
}

/// Quadtree over `[0,size]²`; node 0 is the root.
#[derive(Clone, Debug)]
pub struct QuadTree {
    pub(super) nodes: Vec<Node>,
    pub(super) size: u32,
    pub(super) cfg: MeshCfg,
    pub(super) under_resolved: usize,
    pub(super) depth_guard_hits: usize,
}
