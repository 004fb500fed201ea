//! Point shifts applied to individual curve nodes.

use super::{CurvePointShiftsBuilder, ShiftType};
use crate::error::ShiftError;
use market_core::{Curve, NodeKey, NodeMetadata, ValueAdjustment};
use num_traits::Float;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A perturbation that applies different shifts to specific nodes of a curve.
///
/// Each shift is keyed by a [`NodeKey`] which is matched against the node
/// identifier first and the node label second. Nodes with no matching key are
/// left unchanged, and keys matching no node are ignored.
///
/// Point shifts can only be applied to nodal curves that carry per-node
/// metadata; [`CurvePointShifts::apply`] rejects any other curve before
/// computing a single adjustment.
///
/// Values are immutable once built and can be applied to any number of curves,
/// concurrently if needed.
///
/// # Example
///
/// ```
/// use market_core::{InterpolatedNodalCurve, Tenor};
/// use market_scenarios::{CurvePointShifts, ShiftType};
///
/// let curve = InterpolatedNodalCurve::from_tenors(
///     "USD-OIS",
///     &[Tenor::years(1), Tenor::years(5)],
///     &[0.01_f64, 0.02],
/// )
/// .unwrap();
///
/// let shifts = CurvePointShifts::builder(ShiftType::Absolute)
///     .add_shift("1Y", 0.001)
///     .build();
///
/// let shifted = shifts.apply(&curve).unwrap();
/// assert!((shifted.node_values()[0] - 0.011).abs() < 1e-15);
/// assert_eq!(shifted.node_values()[1], 0.02);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))
)]
pub struct CurvePointShifts<T: Float> {
    shift_type: ShiftType,
    #[cfg_attr(feature = "serde", serde(with = "shift_entries"))]
    shifts: HashMap<NodeKey, T>,
}

impl<T: Float> CurvePointShifts<T> {
    /// Return a new builder for the given shift type.
    pub fn builder(shift_type: ShiftType) -> CurvePointShiftsBuilder<T> {
        CurvePointShiftsBuilder::new(shift_type)
    }

    pub(crate) fn new(shift_type: ShiftType, shifts: HashMap<NodeKey, T>) -> Self {
        Self { shift_type, shifts }
    }

    /// The type of shift applied to every node.
    #[inline]
    pub fn shift_type(&self) -> ShiftType {
        self.shift_type
    }

    /// Shift amounts keyed by node identifier or label.
    #[inline]
    pub fn shifts(&self) -> &HashMap<NodeKey, T> {
        &self.shifts
    }

    /// Shift amount registered for a key.
    #[inline]
    pub fn shift(&self, key: &NodeKey) -> Option<T> {
        self.shifts.get(key).copied()
    }

    /// Number of shifts.
    #[inline]
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Returns true if there are no shifts.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Shift amount for a node: the identifier's amount, else the label's.
    ///
    /// The identifier always takes precedence, even when the label also has
    /// an amount.
    pub fn shift_for_node(&self, node: &NodeMetadata) -> Option<T> {
        self.shift(node.identifier())
            .or_else(|| self.shift(node.label()))
    }

    /// Adjustment for a node, or the identity if no shift matches.
    #[inline]
    pub fn adjustment_for_node(&self, node: &NodeMetadata) -> ValueAdjustment<T> {
        self.shift_for_node(node)
            .map_or(ValueAdjustment::None, |amount| {
                self.shift_type.to_value_adjustment(amount)
            })
    }

    /// Positional adjustments for a list of nodes, one per node.
    pub fn node_adjustments(&self, nodes: &[NodeMetadata]) -> Vec<ValueAdjustment<T>> {
        nodes
            .iter()
            .map(|node| self.adjustment_for_node(node))
            .collect()
    }

    /// Apply the shifts to a curve, returning a new curve.
    ///
    /// # Errors
    ///
    /// * `ShiftError::MissingMetadata` - The curve has no per-node metadata
    /// * `ShiftError::UnsupportedCurve` - The curve is not nodal
    /// * `ShiftError::Rebuild` - The curve rejected the adjustments
    ///
    /// Neither the curve nor `self` is modified.
    pub fn apply<C: Curve<T>>(&self, curve: &C) -> Result<C, ShiftError> {
        let nodes = match curve.metadata().parameters() {
            Some(nodes) => nodes,
            None => {
                tracing::warn!(curve = %curve.name(), "point shifts rejected: no parameter metadata");
                return Err(ShiftError::MissingMetadata {
                    curve: curve.name().to_string(),
                });
            }
        };

        let kind = curve.kind();
        if !kind.is_nodal() {
            tracing::warn!(curve = %curve.name(), %kind, "point shifts rejected: curve is not nodal");
            return Err(ShiftError::UnsupportedCurve {
                curve: curve.name().to_string(),
                kind,
            });
        }

        let adjustments = self.node_adjustments(nodes);
        tracing::debug!(
            curve = %curve.name(),
            shift_type = %self.shift_type,
            nodes = adjustments.len(),
            matched = adjustments.iter().filter(|a| !a.is_none()).count(),
            "applying point shifts"
        );

        Ok(curve.shifted_by(&adjustments)?)
    }
}

#[cfg(feature = "serde")]
mod shift_entries {
    //! Shifts as a list of `(key, amount)` pairs, since most formats only
    //! accept string map keys.

    use market_core::NodeKey;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::HashMap;

    pub fn serialize<T, S>(shifts: &HashMap<NodeKey, T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        serializer.collect_seq(shifts.iter())
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<HashMap<NodeKey, T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let entries = Vec::<(NodeKey, T)>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}
