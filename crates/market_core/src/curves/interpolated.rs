//! Interpolated nodal curve implementation.

use super::{Curve, CurveKind};
use crate::adjustment::ValueAdjustment;
use crate::error::MarketDataError;
use crate::metadata::{CurveMetadata, CurveName, NodeMetadata, Tenor};
use num_traits::Float;

/// Curve defined by discrete nodes joined by linear interpolation.
///
/// Stores strictly increasing x-values (typically year fractions), the
/// node values, and optional per-node metadata. Outside the node range the
/// curve extrapolates flat.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use market_core::{InterpolatedNodalCurve, Tenor};
///
/// let curve = InterpolatedNodalCurve::from_tenors(
///     "USD-OIS",
///     &[Tenor::years(1), Tenor::years(5)],
///     &[0.01_f64, 0.02],
/// )
/// .unwrap();
///
/// // Halfway between 1Y and 5Y
/// assert!((curve.y_value(3.0) - 0.015).abs() < 1e-12);
/// assert_eq!(curve.node_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolatedNodalCurve<T: Float> {
    metadata: CurveMetadata,
    /// Sorted x-values
    x_values: Vec<T>,
    /// Node values
    y_values: Vec<T>,
}

impl<T: Float> InterpolatedNodalCurve<T> {
    /// Construct a curve without per-node metadata.
    ///
    /// # Returns
    ///
    /// * `Err(MarketDataError::InsufficientData)` - No nodes
    /// * `Err(MarketDataError::LengthMismatch)` - x and y lengths differ
    /// * `Err(MarketDataError::InvalidNodeOrder)` - x not strictly increasing
    pub fn new(
        name: impl Into<CurveName>,
        x_values: &[T],
        y_values: &[T],
    ) -> Result<Self, MarketDataError> {
        Self::validate_nodes(x_values, y_values)?;
        Ok(Self {
            metadata: CurveMetadata::new(name),
            x_values: x_values.to_vec(),
            y_values: y_values.to_vec(),
        })
    }

    /// Construct a curve with per-node metadata.
    ///
    /// # Returns
    ///
    /// * `Err(MarketDataError::LengthMismatch)` - One metadata entry per node is required
    pub fn with_nodes(
        name: impl Into<CurveName>,
        x_values: &[T],
        y_values: &[T],
        nodes: Vec<NodeMetadata>,
    ) -> Result<Self, MarketDataError> {
        Self::new(name, x_values, y_values)?.with_metadata(nodes)
    }

    /// Construct a tenor-indexed curve.
    ///
    /// x-values are the tenor year fractions and each node carries tenor
    /// metadata.
    pub fn from_tenors(
        name: impl Into<CurveName>,
        tenors: &[Tenor],
        y_values: &[T],
    ) -> Result<Self, MarketDataError> {
        let x_values: Vec<T> = tenors
            .iter()
            .map(|tenor| T::from(tenor.year_fraction()).unwrap_or_else(T::nan))
            .collect();
        let nodes = tenors.iter().copied().map(NodeMetadata::tenor).collect();
        Self::with_nodes(name, &x_values, y_values, nodes)
    }

    /// Return a copy of the curve carrying the given per-node metadata.
    pub fn with_metadata(self, nodes: Vec<NodeMetadata>) -> Result<Self, MarketDataError> {
        if nodes.len() != self.y_values.len() {
            return Err(MarketDataError::LengthMismatch {
                what: "node metadata",
                expected: self.y_values.len(),
                got: nodes.len(),
            });
        }
        let name = self.metadata.name().clone();
        Ok(Self {
            metadata: CurveMetadata::with_parameters(name, nodes),
            ..self
        })
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.y_values.len()
    }

    /// Node x-values.
    #[inline]
    pub fn x_values(&self) -> &[T] {
        &self.x_values
    }

    /// Node values.
    #[inline]
    pub fn node_values(&self) -> &[T] {
        &self.y_values
    }

    /// Linearly interpolated value at `x`, flat outside the node range.
    pub fn y_value(&self, x: T) -> T {
        if x.is_nan() {
            return x;
        }
        let n = self.x_values.len();
        if n == 1 || x <= self.x_values[0] {
            return self.y_values[0];
        }
        if x >= self.x_values[n - 1] {
            return self.y_values[n - 1];
        }

        // First node strictly above x; bounded to 1..n by the checks above
        let upper = self.x_values.partition_point(|&xi| xi <= x);
        let (x0, x1) = (self.x_values[upper - 1], self.x_values[upper]);
        let (y0, y1) = (self.y_values[upper - 1], self.y_values[upper]);

        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }

    fn validate_nodes(x_values: &[T], y_values: &[T]) -> Result<(), MarketDataError> {
        if x_values.is_empty() {
            return Err(MarketDataError::InsufficientData { got: 0, need: 1 });
        }
        if x_values.len() != y_values.len() {
            return Err(MarketDataError::LengthMismatch {
                what: "y-values",
                expected: x_values.len(),
                got: y_values.len(),
            });
        }
        for i in 0..x_values.len() {
            let invalid = x_values[i].is_nan() || (i > 0 && x_values[i] <= x_values[i - 1]);
            if invalid {
                return Err(MarketDataError::InvalidNodeOrder {
                    index: i,
                    x: x_values[i].to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(())
    }
}

impl<T: Float> Curve<T> for InterpolatedNodalCurve<T> {
    fn metadata(&self) -> &CurveMetadata {
        &self.metadata
    }

    fn kind(&self) -> CurveKind {
        CurveKind::InterpolatedNodal
    }

    fn shifted_by(&self, adjustments: &[ValueAdjustment<T>]) -> Result<Self, MarketDataError> {
        if adjustments.len() > self.y_values.len() {
            return Err(MarketDataError::TooManyAdjustments {
                curve: self.metadata.name().to_string(),
                nodes: self.y_values.len(),
                adjustments: adjustments.len(),
            });
        }

        let mut y_values = self.y_values.clone();
        for (value, adjustment) in y_values.iter_mut().zip(adjustments) {
            *value = adjustment.adjust(*value);
        }

        Ok(Self {
            metadata: self.metadata.clone(),
            x_values: self.x_values.clone(),
            y_values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_node_curve() -> InterpolatedNodalCurve<f64> {
        InterpolatedNodalCurve::from_tenors(
            "USD-OIS",
            &[Tenor::years(1), Tenor::years(5)],
            &[0.01, 0.02],
        )
        .unwrap()
    }

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_new_without_metadata() {
        let curve = InterpolatedNodalCurve::new("GBP-SONIA", &[0.5_f64, 1.0], &[0.04, 0.041])
            .unwrap();
        assert!(curve.metadata().parameters().is_none());
        assert_eq!(curve.name().as_str(), "GBP-SONIA");
    }

    #[test]
    fn test_new_empty() {
        let result = InterpolatedNodalCurve::<f64>::new("EMPTY", &[], &[]);
        assert_eq!(
            result.unwrap_err(),
            MarketDataError::InsufficientData { got: 0, need: 1 }
        );
    }

    #[test]
    fn test_new_mismatched_lengths() {
        let result = InterpolatedNodalCurve::new("BAD", &[1.0_f64, 2.0], &[0.01]);
        assert!(matches!(
            result,
            Err(MarketDataError::LengthMismatch { expected: 2, got: 1, .. })
        ));
    }

    #[test]
    fn test_new_unsorted() {
        let result = InterpolatedNodalCurve::new("BAD", &[1.0_f64, 1.0], &[0.01, 0.02]);
        assert!(matches!(
            result,
            Err(MarketDataError::InvalidNodeOrder { index: 1, .. })
        ));
    }

    #[test]
    fn test_metadata_length_checked() {
        let result = InterpolatedNodalCurve::with_nodes(
            "BAD",
            &[1.0_f64, 2.0],
            &[0.01, 0.02],
            vec![NodeMetadata::tenor(Tenor::years(1))],
        );
        assert!(matches!(
            result,
            Err(MarketDataError::LengthMismatch { what: "node metadata", .. })
        ));
    }

    #[test]
    fn test_from_tenors_metadata() {
        let curve = two_node_curve();
        let nodes = curve.metadata().parameters().unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1], NodeMetadata::tenor(Tenor::years(5)));
        assert_eq!(curve.x_values(), &[1.0, 5.0]);
    }

    // ========================================
    // Interpolation Tests
    // ========================================

    #[test]
    fn test_y_value_at_nodes() {
        let curve = two_node_curve();
        assert_eq!(curve.y_value(1.0), 0.01);
        assert_eq!(curve.y_value(5.0), 0.02);
    }

    #[test]
    fn test_y_value_flat_extrapolation() {
        let curve = two_node_curve();
        assert_eq!(curve.y_value(0.25), 0.01);
        assert_eq!(curve.y_value(30.0), 0.02);
    }

    #[test]
    fn test_y_value_interior() {
        let curve =
            InterpolatedNodalCurve::new("C", &[1.0_f64, 2.0, 4.0], &[0.01, 0.03, 0.02]).unwrap();
        assert_relative_eq!(curve.y_value(1.5), 0.02, epsilon = 1e-15);
        assert_relative_eq!(curve.y_value(3.0), 0.025, epsilon = 1e-15);
    }

    #[test]
    fn test_single_node_is_flat() {
        let curve = InterpolatedNodalCurve::new("ONE", &[1.0_f64], &[0.05]).unwrap();
        assert_eq!(curve.y_value(0.1), 0.05);
        assert_eq!(curve.y_value(10.0), 0.05);
    }

    // ========================================
    // Rebuild Tests
    // ========================================

    #[test]
    fn test_shifted_by_positional() {
        let curve = two_node_curve();
        let shifted = curve
            .shifted_by(&[
                ValueAdjustment::None,
                ValueAdjustment::DeltaMultiplier(0.5),
            ])
            .unwrap();

        assert_eq!(shifted.node_values()[0], 0.01);
        assert_relative_eq!(shifted.node_values()[1], 0.03, epsilon = 1e-15);
        // source untouched
        assert_eq!(curve.node_values(), &[0.01, 0.02]);
        assert_eq!(shifted.metadata(), curve.metadata());
    }

    #[test]
    fn test_shifted_by_fewer_adjustments() {
        let curve = two_node_curve();
        let shifted = curve
            .shifted_by(&[ValueAdjustment::Multiplier(2.0)])
            .unwrap();
        assert_eq!(shifted.node_values(), &[0.02, 0.02]);
    }

    #[test]
    fn test_shifted_by_too_many_adjustments() {
        let curve = two_node_curve();
        let result = curve.shifted_by(&[ValueAdjustment::None; 3]);
        assert!(matches!(
            result,
            Err(MarketDataError::TooManyAdjustments { nodes: 2, adjustments: 3, .. })
        ));
    }
}
