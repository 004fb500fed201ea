//! Value adjustments applied to individual curve nodes.
//!
//! A [`ValueAdjustment`] is a pure numeric transform `value -> value'`.
//! Curves that support positional rebuild accept one adjustment per node.

use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pure numeric transform applied to one node value.
///
/// # Variants
///
/// - `None`: identity, `value`
/// - `DeltaAmount(m)`: `value + m`
/// - `DeltaMultiplier(m)`: `value * (1 + m)`
/// - `Multiplier(m)`: `value * m`
///
/// # Example
///
/// ```
/// use market_core::ValueAdjustment;
///
/// assert_eq!(ValueAdjustment::None.adjust(0.02_f64), 0.02);
/// assert_eq!(ValueAdjustment::DeltaAmount(0.5_f64).adjust(2.0), 2.5);
/// assert_eq!(ValueAdjustment::DeltaMultiplier(0.5_f64).adjust(2.0), 3.0);
/// assert_eq!(ValueAdjustment::Multiplier(0.5_f64).adjust(2.0), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValueAdjustment<T: Float> {
    /// Leaves the value unchanged.
    #[default]
    None,
    /// Adds a constant.
    DeltaAmount(T),
    /// Multiplies by `1 + m`.
    DeltaMultiplier(T),
    /// Multiplies by `m`.
    Multiplier(T),
}

impl<T: Float> ValueAdjustment<T> {
    /// Apply the adjustment to a base value.
    ///
    /// NaN and infinities propagate through ordinary floating-point rules.
    #[inline]
    pub fn adjust(&self, base: T) -> T {
        match *self {
            ValueAdjustment::None => base,
            ValueAdjustment::DeltaAmount(amount) => base + amount,
            ValueAdjustment::DeltaMultiplier(amount) => base * (T::one() + amount),
            ValueAdjustment::Multiplier(amount) => base * amount,
        }
    }

    /// Returns true for the identity adjustment.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, ValueAdjustment::None)
    }
}
