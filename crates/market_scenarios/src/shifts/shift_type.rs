//! Shift types and their adjustment semantics.

use market_core::ValueAdjustment;
use num_traits::Float;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a shift amount changes a node value.
///
/// One shift type applies uniformly to every amount in a perturbation.
///
/// # Example
///
/// ```
/// use market_scenarios::ShiftType;
///
/// assert_eq!(ShiftType::Absolute.apply_shift(2.0_f64, 0.5), 2.5);
/// assert_eq!(ShiftType::Relative.apply_shift(2.0_f64, 0.5), 3.0);
/// assert_eq!(ShiftType::Scaled.apply_shift(2.0_f64, 0.5), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShiftType {
    /// Add the amount: `value + amount`.
    Absolute,
    /// Multiply by one plus the amount: `value * (1 + amount)`.
    ///
    /// An amount of 0.1 is a 10% increase.
    Relative,
    /// Multiply by the amount: `value * amount`.
    Scaled,
}

impl ShiftType {
    /// Convert a shift amount into a node adjustment.
    ///
    /// Never returns [`ValueAdjustment::None`]; the identity is reserved for
    /// nodes with no shift.
    #[inline]
    pub fn to_value_adjustment<T: Float>(self, amount: T) -> ValueAdjustment<T> {
        match self {
            ShiftType::Absolute => ValueAdjustment::DeltaAmount(amount),
            ShiftType::Relative => ValueAdjustment::DeltaMultiplier(amount),
            ShiftType::Scaled => ValueAdjustment::Multiplier(amount),
        }
    }

    /// Apply a shift amount to a value.
    #[inline]
    pub fn apply_shift<T: Float>(self, value: T, amount: T) -> T {
        self.to_value_adjustment(amount).adjust(value)
    }

    /// Lowercase name of the shift type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftType::Absolute => "absolute",
            ShiftType::Relative => "relative",
            ShiftType::Scaled => "scaled",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "absolute" => Ok(ShiftType::Absolute),
            "relative" => Ok(ShiftType::Relative),
            "scaled" => Ok(ShiftType::Scaled),
            _ => Err(format!(
                "Invalid shift type: {s}. Must be one of: absolute, relative, scaled"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_absolute_adjustment() {
        let adj = ShiftType::Absolute.to_value_adjustment(0.001_f64);
        assert_eq!(adj, ValueAdjustment::DeltaAmount(0.001));
        assert_relative_eq!(adj.adjust(0.01), 0.011, epsilon = 1e-15);
    }

    #[test]
    fn test_relative_adjustment() {
        let adj = ShiftType::Relative.to_value_adjustment(0.1_f64);
        assert_eq!(adj, ValueAdjustment::DeltaMultiplier(0.1));
        assert_eq!(adj.adjust(0.02), 0.02 * (1.0 + 0.1));
    }

    #[test]
    fn test_scaled_adjustment() {
        let adj = ShiftType::Scaled.to_value_adjustment(1.1_f64);
        assert_eq!(adj, ValueAdjustment::Multiplier(1.1));
        assert_eq!(adj.adjust(0.02), 0.02 * 1.1);
    }

    #[test]
    fn test_zero_amounts_are_not_identity_adjustments() {
        for shift_type in [ShiftType::Absolute, ShiftType::Relative, ShiftType::Scaled] {
            assert!(!shift_type.to_value_adjustment(0.0_f64).is_none());
        }
        // A scaled zero wipes the value; absolute and relative zeros leave it
        assert_eq!(ShiftType::Scaled.apply_shift(0.05_f64, 0.0), 0.0);
        assert_eq!(ShiftType::Absolute.apply_shift(0.05_f64, 0.0), 0.05);
        assert_eq!(ShiftType::Relative.apply_shift(0.05_f64, 0.0), 0.05);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(ShiftType::Relative.apply_shift(0.05_f64, f64::NAN).is_nan());
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("Absolute".parse::<ShiftType>().unwrap(), ShiftType::Absolute);
        assert_eq!(" relative ".parse::<ShiftType>().unwrap(), ShiftType::Relative);
        assert_eq!("SCALED".parse::<ShiftType>().unwrap(), ShiftType::Scaled);
        assert!("parallel".parse::<ShiftType>().is_err());
        assert_eq!(ShiftType::Scaled.to_string(), "scaled");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ShiftType::Relative).unwrap();
        assert_eq!(json, "\"relative\"");
        let parsed: ShiftType = serde_json::from_str("\"absolute\"").unwrap();
        assert_eq!(parsed, ShiftType::Absolute);
    }
}
