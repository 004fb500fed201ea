//! Constant curve implementation.

use super::{Curve, CurveKind};
use crate::adjustment::ValueAdjustment;
use crate::error::MarketDataError;
use crate::metadata::{CurveMetadata, CurveName};
use num_traits::Float;

/// Curve with the same value at every point.
///
/// A constant curve has no nodes, so it cannot be rebuilt from per-node
/// adjustments. It may still carry descriptive metadata.
///
/// # Example
///
/// ```
/// use market_core::{ConstantCurve, Curve, CurveKind};
///
/// let curve = ConstantCurve::new("FLAT", 0.05_f64);
/// assert_eq!(curve.value(), 0.05);
/// assert_eq!(curve.y_value(7.0), 0.05);
/// assert!(!curve.kind().is_nodal());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantCurve<T: Float> {
    metadata: CurveMetadata,
    value: T,
}

impl<T: Float> ConstantCurve<T> {
    /// Construct a constant curve.
    #[inline]
    pub fn new(name: impl Into<CurveName>, value: T) -> Self {
        Self {
            metadata: CurveMetadata::new(name),
            value,
        }
    }

    /// Replace the curve metadata.
    pub fn with_metadata(mut self, metadata: CurveMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Return the constant value.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Value at `x`; the same everywhere.
    #[inline]
    pub fn y_value(&self, _x: T) -> T {
        self.value
    }
}

impl<T: Float> Curve<T> for ConstantCurve<T> {
    fn metadata(&self) -> &CurveMetadata {
        &self.metadata
    }

    fn kind(&self) -> CurveKind {
        CurveKind::Constant
    }

    fn shifted_by(&self, _adjustments: &[ValueAdjustment<T>]) -> Result<Self, MarketDataError> {
        Err(MarketDataError::NotNodal {
            curve: self.metadata.name().to_string(),
            kind: self.kind().to_string(),
        })
    }
}
