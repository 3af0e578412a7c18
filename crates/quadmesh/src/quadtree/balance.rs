//! 2:1 balancing via neighbor probes, and point location.
//!
//! A leaf of depth `d` must not touch a leaf of depth `< d-1`. Each pass queues
//! the current leaves and, for every queued leaf, probes the eight cells around
//! it; a probed leaf that is too coarse is split and its children are queued
//! in turn. Passes repeat until one of them splits nothing. Every split adds
//! nodes and depth is capped, so the loop terminates.

use std::collections::VecDeque;

use crate::cfg::PROBE_OFFSET;
use crate::geom2::Point;

use super::types::{BalanceReport, NodeId, QuadTree, Quadrant};

/// Probe directions: faces N, S, E, W, then corners NE, NW, SE, SW.
const DIRECTIONS: [(f64, f64); 8] = [
    (0.0, 1.0),
    (0.0, -1.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (-1.0, -1.0),
];

impl QuadTree {
    /// Enforce 2:1 balance between touching leaves (full fixpoint).
    pub fn balance(&mut self) -> BalanceReport {
        let mut report = BalanceReport::default();
        loop {
            report.passes += 1;
            let mut changed = false;
            let mut queue: VecDeque<NodeId> = self.leaves().into();
            while let Some(id) = queue.pop_front() {
                // Split earlier in this pass; its children are queued.
                if !self.nodes[id.0].is_leaf() {
                    continue;
                }
                let depth = self.nodes[id.0].depth;
                for nb in self.neighbors(id) {
                    let n = &self.nodes[nb.0];
                    if n.is_leaf() && n.depth + 1 < depth {
                        if let Some(children) = self.subdivide(nb) {
                            queue.extend(children);
                            report.subdivisions += 1;
                            changed = true;
                        }
                    }
                }
            }
            if !changed {
                break;
            }
        }
        tracing::debug!(
            passes = report.passes,
            subdivisions = report.subdivisions,
            leaves = self.leaf_count(),
            "quadtree_balanced"
        );
        report
    }

    /// Leaves around `id`, found by probing `0.1·size` past each face and corner.
    ///
    /// Probes outside the domain are dropped; a leaf may appear more than once.
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        let sq = self.nodes[id.0].square;
        DIRECTIONS
            .iter()
            .filter_map(|&(dx, dy)| {
                let probe = Point::new(
                    sq.x0 + (0.5 + dx * PROBE_OFFSET) * sq.size,
                    sq.y0 + (0.5 + dy * PROBE_OFFSET) * sq.size,
                );
                self.find_leaf_containing(&probe)
            })
            .filter(|&nb| nb != id)
            .collect()
    }

    /// Leaf whose square contains `p`, or `None` outside the closed root square.
    ///
    /// Descends by comparing against each node's midpoint; points on a midline
    /// go east/north.
    pub fn find_leaf_containing(&self, p: &Point) -> Option<NodeId> {
        if !self.root().square.contains_closed(p) {
            return None;
        }
        let mut id = NodeId::ROOT;
        loop {
            let node = &self.nodes[id.0];
            let Some(children) = node.children else {
                return Some(id);
            };
            let c = node.square.center();
            id = children[Quadrant::select(p.x, p.y, c.x, c.y) as usize];
        }
    }
}
