//! Error types for curve perturbations.

use market_core::{CurveKind, MarketDataError};
use thiserror::Error;

/// Errors raised while applying a perturbation to a curve.
///
/// Both validation failures are detected before any adjustment is computed,
/// so a failed perturbation never yields a partially shifted curve. A shift
/// key that matches no node is not an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShiftError {
    /// The curve has no per-node metadata, so shifts cannot be matched to nodes.
    #[error("Unable to apply point shifts to curve '{curve}' because it has no parameter metadata")]
    MissingMetadata {
        /// Curve name
        curve: String,
    },

    /// The curve representation cannot be rebuilt from per-node adjustments.
    #[error("Point shifts can only be applied to nodal curves, the kind of curve '{curve}' is {kind}")]
    UnsupportedCurve {
        /// Curve name
        curve: String,
        /// Concrete curve kind
        kind: CurveKind,
    },

    /// The curve rejected the rebuild.
    #[error("Curve rebuild failed: {0}")]
    Rebuild(#[from] MarketDataError),
}

impl ShiftError {
    /// Returns true if the curve is missing metadata.
    ///
    /// The failure depends on how the curve was built; supplying a curve with
    /// node metadata resolves it.
    #[inline]
    pub fn is_configuration(&self) -> bool {
        matches!(self, ShiftError::MissingMetadata { .. })
    }
}
