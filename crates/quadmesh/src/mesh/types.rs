//! Mesh data and read-only checks.

use std::collections::HashSet;

use crate::geom2::{CoordKey, Point, Square};
use crate::quadtree::NodeId;
use crate::{parallelogram_area, MeshError};

/// Three indices into `Mesh::vertices`, counterclockwise.
pub type Triangle = [usize; 3];

/// How a leaf was triangulated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    InteriorIntersected,
    CornerOnly,
    Steiner,
}

impl CellKind {
    /// Triangles emitted for a leaf of this kind.
    #[inline]
    pub fn triangle_count(self) -> usize {
        match self {
            CellKind::InteriorIntersected | CellKind::CornerOnly => 2,
            CellKind::Steiner => 4,
        }
    }
}

/// One triangulated leaf; its triangles are `first_triangle..first_triangle + kind.triangle_count()`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub leaf: NodeId,
    pub square: Square,
    pub kind: CellKind,
    pub first_triangle: usize,
}

/// Unique vertices, triangles, and the per-leaf record that produced them.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Point>,
    pub triangles: Vec<Triangle>,
    pub cells: Vec<Cell>,
}

/// Counts for logs and provenance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeshStats {
    pub vertices: usize,
    pub triangles: usize,
    pub leaves: usize,
    pub interior_intersected: usize,
    pub corner_only: usize,
    pub steiner: usize,
}

impl Mesh {
    /// Signed area of triangle `t` (positive when counterclockwise).
    pub fn triangle_area(&self, t: &Triangle) -> f64 {
        let [a, b, c] = t.map(|i| self.vertices[i]);
        0.5 * parallelogram_area(b - a, c - a)
    }

    /// Sum of signed triangle areas.
    pub fn area(&self) -> f64 {
        self.triangles.iter().map(|t| self.triangle_area(t)).sum()
    }

    /// Triangles of a single cell.
    pub fn cell_triangles(&self, cell: &Cell) -> &[Triangle] {
        &self.triangles[cell.first_triangle..cell.first_triangle + cell.kind.triangle_count()]
    }

    pub fn stats(&self) -> MeshStats {
        let count = |k: CellKind| self.cells.iter().filter(|c| c.kind == k).count();
        MeshStats {
            vertices: self.vertices.len(),
            triangles: self.triangles.len(),
            leaves: self.cells.len(),
            interior_intersected: count(CellKind::InteriorIntersected),
            corner_only: count(CellKind::CornerOnly),
            steiner: count(CellKind::Steiner),
        }
    }

    /// Check structural invariants: valid indices, positive areas, unique
    /// vertices, and triangle counts matching the cell records.
    pub fn validate(&self) -> Result<(), MeshError> {
        let n = self.vertices.len();
        for (k, t) in self.triangles.iter().enumerate() {
            if let Some(&i) = t.iter().find(|&&i| i >= n) {
                return Err(MeshError::invalid_mesh(format!(
                    "triangle {k} references vertex {i} of {n}"
                )));
            }
            let area = self.triangle_area(t);
            if !(area > 0.0) {
                return Err(MeshError::invalid_mesh(format!(
                    "triangle {k} has non-positive area {area}"
                )));
            }
        }
        let mut seen = HashSet::with_capacity(n);
        for (i, p) in self.vertices.iter().enumerate() {
            if !seen.insert(CoordKey::of(p)) {
                return Err(MeshError::invalid_mesh(format!(
                    "vertex {i} duplicates ({}, {})",
                    p.x, p.y
                )));
            }
        }
        let expected: usize = self.cells.iter().map(|c| c.kind.triangle_count()).sum();
        if expected != self.triangles.len() {
            return Err(MeshError::invalid_mesh(format!(
                "cells account for {expected} triangles, mesh has {}",
                self.triangles.len()
            )));
        }
        Ok(())
    }
}
