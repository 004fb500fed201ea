//! Static dispatch enum wrapping concrete curve implementations.

use super::{ConstantCurve, Curve, CurveKind, InterpolatedNodalCurve};
use crate::adjustment::ValueAdjustment;
use crate::error::MarketDataError;
use crate::metadata::CurveMetadata;
use num_traits::Float;

/// Static dispatch enum wrapping concrete curve implementations.
///
/// Lets heterogeneous curves live in one collection without trait objects.
///
/// # Example
///
/// ```
/// use market_core::{ConstantCurve, Curve, CurveEnum, CurveKind};
///
/// let curve = CurveEnum::Constant(ConstantCurve::new("FLAT", 0.05_f64));
/// assert_eq!(curve.kind(), CurveKind::Constant);
/// assert_eq!(curve.y_value(2.0), 0.05);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CurveEnum<T: Float> {
    /// Nodal curve with linear interpolation
    Interpolated(InterpolatedNodalCurve<T>),
    /// Constant curve
    Constant(ConstantCurve<T>),
}

impl<T: Float> CurveEnum<T> {
    /// Value of the wrapped curve at `x`.
    pub fn y_value(&self, x: T) -> T {
        match self {
            CurveEnum::Interpolated(c) => c.y_value(x),
            CurveEnum::Constant(c) => c.y_value(x),
        }
    }
}

impl<T: Float> Curve<T> for CurveEnum<T> {
    fn metadata(&self) -> &CurveMetadata {
        match self {
            CurveEnum::Interpolated(c) => c.metadata(),
            CurveEnum::Constant(c) => c.metadata(),
        }
    }

    fn kind(&self) -> CurveKind {
        match self {
            CurveEnum::Interpolated(c) => c.kind(),
            CurveEnum::Constant(c) => c.kind(),
        }
    }

    fn shifted_by(&self, adjustments: &[ValueAdjustment<T>]) -> Result<Self, MarketDataError> {
        match self {
            CurveEnum::Interpolated(c) => c.shifted_by(adjustments).map(CurveEnum::Interpolated),
            CurveEnum::Constant(c) => c.shifted_by(adjustments).map(CurveEnum::Constant),
        }
    }
}

impl<T: Float> From<InterpolatedNodalCurve<T>> for CurveEnum<T> {
    fn from(curve: InterpolatedNodalCurve<T>) -> Self {
        CurveEnum::Interpolated(curve)
    }
}

impl<T: Float> From<ConstantCurve<T>> for CurveEnum<T> {
    fn from(curve: ConstantCurve<T>) -> Self {
        CurveEnum::Constant(curve)
    }
}
