//! Curve trait definition.

use crate::adjustment::ValueAdjustment;
use crate::error::MarketDataError;
use crate::metadata::{CurveMetadata, CurveName};
use num_traits::Float;
use std::fmt;

/// Concrete representation of a curve.
///
/// Only nodal representations can be rebuilt from per-node adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    /// Discrete nodes joined by interpolation.
    InterpolatedNodal,
    /// A single value at every point.
    Constant,
}

impl CurveKind {
    /// Returns true if curves of this kind expose addressable nodes.
    #[inline]
    pub fn is_nodal(&self) -> bool {
        matches!(self, CurveKind::InterpolatedNodal)
    }

    /// Name of the representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            CurveKind::InterpolatedNodal => "InterpolatedNodalCurve",
            CurveKind::Constant => "ConstantCurve",
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A market curve that scenario perturbations can act on.
///
/// # Contract
///
/// - `metadata().parameters()`, when present, holds exactly one entry per node
///   in node order
/// - `shifted_by` returns a new curve and never mutates `self`
/// - `shifted_by` applies adjustment `i` to node `i`; nodes beyond the end of
///   the adjustment list are left unchanged
///
/// # Example
///
/// ```
/// use market_core::{Curve, CurveKind, InterpolatedNodalCurve, ValueAdjustment};
///
/// let curve = InterpolatedNodalCurve::new("USD-OIS", &[1.0_f64, 5.0], &[0.01, 0.02]).unwrap();
/// assert_eq!(curve.kind(), CurveKind::InterpolatedNodal);
///
/// let shifted = curve
///     .shifted_by(&[ValueAdjustment::DeltaAmount(0.001), ValueAdjustment::None])
///     .unwrap();
/// assert!((shifted.node_values()[0] - 0.011).abs() < 1e-15);
/// assert_eq!(shifted.node_values()[1], 0.02);
/// ```
pub trait Curve<T: Float>: Sized {
    /// The curve name.
    fn name(&self) -> &CurveName {
        self.metadata().name()
    }

    /// Curve metadata, including optional per-node metadata.
    fn metadata(&self) -> &CurveMetadata;

    /// The concrete representation of the curve.
    fn kind(&self) -> CurveKind;

    /// Return a new curve with each adjustment applied to the node at the
    /// same position.
    ///
    /// # Errors
    ///
    /// * `MarketDataError::NotNodal` - The curve has no nodes
    /// * `MarketDataError::TooManyAdjustments` - More adjustments than nodes
    fn shifted_by(&self, adjustments: &[ValueAdjustment<T>]) -> Result<Self, MarketDataError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_is_nodal() {
        assert!(CurveKind::InterpolatedNodal.is_nodal());
        assert!(!CurveKind::Constant.is_nodal());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(CurveKind::Constant.to_string(), "ConstantCurve");
        assert_eq!(
            CurveKind::InterpolatedNodal.to_string(),
            "InterpolatedNodalCurve"
        );
    }
}
