//! Meshing configuration and fixed constants.
//!
//! Policy
//! - Tunables that callers legitimately change per run (minimum leaf size, depth
//!   guard, coarse divisor) live in `MeshCfg`.
//! - Probe geometry is fixed: changing it changes which neighbors balancing sees.

use crate::MeshError;

/// Neighbor probe offset, as a fraction of the probing leaf's size, measured from
/// the leaf center. `0.6` lands `0.1·size` outside each face and corner.
pub(crate) const PROBE_OFFSET: f64 = 0.6;

/// Default hard floor on boundary-driven refinement.
pub const DEFAULT_MIN_LEAF_SIZE: f64 = 1.0;
/// Default depth guard; deeper than any floor reachable for `U <= 65536`.
pub const DEFAULT_MAX_DEPTH: u32 = 16;
/// Leaves far from every boundary are no coarser than `U / DEFAULT_COARSE_DIVISOR`.
pub const DEFAULT_COARSE_DIVISOR: u32 = 4;

/// Meshing configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshCfg {
    /// Nodes at or below this width stop refining even if a boundary crosses them.
    pub min_leaf_size: f64,
    /// Nodes at this depth never subdivide (refinement and balancing alike).
    pub max_depth: u32,
    /// Coarse threshold is `floor(U / coarse_divisor)`.
    pub coarse_divisor: u32,
}

impl Default for MeshCfg {
    fn default() -> Self {
        Self {
            min_leaf_size: DEFAULT_MIN_LEAF_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
            coarse_divisor: DEFAULT_COARSE_DIVISOR,
        }
    }
}

impl MeshCfg {
    /// Coarse threshold for a domain of side `size` (integer division).
    ///
    /// For `size < coarse_divisor` the quotient is 0 and `min_leaf_size` takes
    /// its place; a zero threshold would split every untouched node down to
    /// the depth guard.
    #[inline]
    pub fn coarse_threshold(&self, size: u32) -> f64 {
        match size / self.coarse_divisor {
            0 => self.min_leaf_size,
            q => f64::from(q),
        }
    }

    pub fn validate(&self) -> Result<(), MeshError> {
        if !(self.min_leaf_size.is_finite() && self.min_leaf_size > 0.0) {
            return Err(MeshError::invalid_cfg("min_leaf_size must be finite and > 0"));
        }
        if self.coarse_divisor == 0 {
            return Err(MeshError::invalid_cfg("coarse_divisor must be > 0"));
        }
        Ok(())
    }
}
