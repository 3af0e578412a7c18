//! Error type shared by parsing, validation and meshing.

use std::path::PathBuf;

/// Everything that can stop a meshing run before output is produced.
///
/// Geometric degeneracy (parallel edges, zero-area probes) is not an error: the
/// predicates resolve it to "no intersection".
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid input on line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("non-finite coordinate ({x}, {y})")]
    NonFinite { x: f64, y: f64 },
    #[error("domain size must be positive")]
    EmptyDomain,
    #[error("no polygons to mesh")]
    NoPolygons,
    #[error("polygon {polygon} has vertex ({x}, {y}) outside [0, {size}]^2")]
    OutsideDomain {
        polygon: usize,
        x: f64,
        y: f64,
        size: u32,
    },
    #[error("invalid config: {0}")]
    InvalidCfg(String),
    #[error("invalid mesh: {0}")]
    InvalidMesh(String),
}

impl MeshError {
    pub(crate) fn invalid_cfg(reason: impl Into<String>) -> Self {
        Self::InvalidCfg(reason.into())
    }

    pub(crate) fn invalid_mesh(reason: impl Into<String>) -> Self {
        Self::InvalidMesh(reason.into())
    }

    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }
}
