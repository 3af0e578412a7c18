//! Tree construction (subdivision, boundary-driven refinement) and queries.

use std::collections::BTreeMap;

use crate::geom2::{segment_intersects_square, Polygon, Square};
use crate::MeshCfg;

use super::types::{Node, NodeId, QuadTree};

impl QuadTree {
    /// Single-leaf tree over `[0,size]²`.
    pub fn new(size: u32, cfg: MeshCfg) -> Self {
        let root = Node {
            square: Square::new(0.0, 0.0, f64::from(size)),
            depth: 0,
            parent: None,
            children: None,
        };
        Self {
            nodes: vec![root],
            size,
            cfg,
            under_resolved: 0,
            depth_guard_hits: 0,
        }
    }

    /// `new` followed by `refine`.
    pub fn build(polygons: &[Polygon], size: u32, cfg: MeshCfg) -> Self {
        let mut tree = Self::new(size, cfg);
        tree.refine(polygons);
        tree
    }

    /// Split a leaf into NW, NE, SW, SE children.
    ///
    /// Returns `None` for internal nodes and for leaves at `cfg.max_depth`.
    pub fn subdivide(&mut self, id: NodeId) -> Option<[NodeId; 4]> {
        let node = &self.nodes[id.0];
        if !node.is_leaf() {
            return None;
        }
        let (square, depth) = (node.square, node.depth);
        if depth >= self.cfg.max_depth {
            self.depth_guard_hits += 1;
            return None;
        }
        let depth = depth + 1;
        let base = self.nodes.len();
        let children = [
            NodeId(base),
            NodeId(base + 1),
            NodeId(base + 2),
            NodeId(base + 3),
        ];
        for square in square.quadrants() {
            self.nodes.push(Node {
                square,
                depth,
                parent: Some(id),
                children: None,
            });
        }
        self.nodes[id.0].children = Some(children);
        Some(children)
    }

    /// Refine from the root until every leaf is settled:
    /// 1. a boundary crosses the node → split, unless width <= `min_leaf_size`;
    /// 2. no boundary and width > coarse threshold → split;
    /// 3. otherwise keep the leaf.
    pub fn refine(&mut self, polygons: &[Polygon]) {
        let coarse = self.cfg.coarse_threshold(self.size);
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            let square = self.nodes[id.0].square;
            let split = if crosses_boundary(&square, polygons) {
                if square.size > self.cfg.min_leaf_size {
                    true
                } else {
                    self.under_resolved += 1;
                    false
                }
            } else {
                square.size > coarse
            };
            if split {
                if let Some(children) = self.subdivide(id) {
                    stack.extend(children);
                }
            }
        }
        if self.depth_guard_hits > 0 {
            tracing::warn!(
                max_depth = self.cfg.max_depth,
                hits = self.depth_guard_hits,
                "depth guard stopped refinement"
            );
        }
        tracing::debug!(
            size = self.size,
            nodes = self.nodes.len(),
            leaves = self.leaf_count(),
            under_resolved = self.under_resolved,
            "quadtree_refined"
        );
    }

    /// Leaves in depth-first NW, NE, SW, SE order.
    pub fn leaves(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            match self.nodes[id.0].children {
                None => out.push(id),
                Some(children) => stack.extend(children.iter().rev().copied()),
            }
        }
        out
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    #[inline]
    pub fn root(&self) -> &Node {
        &self.nodes[NodeId::ROOT.0]
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn cfg(&self) -> &MeshCfg {
        &self.cfg
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Leaves crossed by a boundary that the size floor kept from refining.
    #[inline]
    pub fn under_resolved(&self) -> usize {
        self.under_resolved
    }

    #[inline]
    pub fn depth_guard_hits(&self) -> usize {
        self.depth_guard_hits
    }

    /// Leaf count per depth.
    pub fn depth_histogram(&self) -> BTreeMap<u32, usize> {
        let mut hist = BTreeMap::new();
        for n in self.nodes.iter().filter(|n| n.is_leaf()) {
            *hist.entry(n.depth).or_insert(0) += 1;
        }
        hist
    }

    pub fn min_leaf_size(&self) -> f64 {
        self.nodes
            .iter()
            .filter(|n| n.is_leaf())
            .map(|n| n.square.size)
            .fold(f64::INFINITY, f64::min)
    }
}

/// Does any polygon edge cross the boundary of `square`?
fn crosses_boundary(square: &Square, polygons: &[Polygon]) -> bool {
    polygons
        .iter()
        .flat_map(|p| p.edges())
        .any(|(a, b)| segment_intersects_square(a, b, square))
}
