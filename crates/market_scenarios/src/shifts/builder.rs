//! Builder for point-shift perturbations.

use super::{CurvePointShifts, ShiftType};
use market_core::NodeKey;
use num_traits::Float;
use std::collections::HashMap;

/// Mutable builder for [`CurvePointShifts`].
///
/// The shift type is fixed when the builder is created. Shifts are keyed by
/// node identifier or label; adding a key that is already present replaces
/// its amount, so the last call wins.
///
/// The builder has a single owner and is not meant to be shared between
/// threads while it is being filled.
///
/// # Example
///
/// ```
/// use market_core::{NodeKey, Tenor};
/// use market_scenarios::{CurvePointShifts, ShiftType};
///
/// let mut builder = CurvePointShifts::builder(ShiftType::Absolute);
/// builder
///     .add_shift(Tenor::years(1), 0.001)
///     .add_shift("5Y", 0.002)
///     .add_shift(Tenor::years(1), 0.0015);
///
/// let shifts = builder.build();
/// assert_eq!(shifts.len(), 2);
/// assert_eq!(shifts.shift(&NodeKey::Tenor(Tenor::years(1))), Some(0.0015));
/// ```
#[derive(Debug, Clone)]
pub struct CurvePointShiftsBuilder<T: Float> {
    shift_type: ShiftType,
    shifts: HashMap<NodeKey, T>,
}

impl<T: Float> CurvePointShiftsBuilder<T> {
    /// Create an empty builder for the given shift type.
    pub fn new(shift_type: ShiftType) -> Self {
        Self {
            shift_type,
            shifts: HashMap::new(),
        }
    }

    /// The shift type of every shift built here.
    #[inline]
    pub fn shift_type(&self) -> ShiftType {
        self.shift_type
    }

    /// Number of distinct keys added so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Returns true if no shifts have been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Add a shift for a node key, replacing any earlier amount.
    pub fn add_shift(&mut self, key: impl Into<NodeKey>, amount: T) -> &mut Self {
        self.shifts.insert(key.into(), amount);
        self
    }

    /// Add shifts in iteration order, replacing earlier amounts for the same key.
    pub fn add_shifts<K, I>(&mut self, shifts: I) -> &mut Self
    where
        K: Into<NodeKey>,
        I: IntoIterator<Item = (K, T)>,
    {
        for (key, amount) in shifts {
            self.shifts.insert(key.into(), amount);
        }
        self
    }

    /// Freeze the current shifts.
    ///
    /// The returned value owns a copy of the shifts; later changes to the
    /// builder do not affect it.
    pub fn build(&self) -> CurvePointShifts<T> {
        CurvePointShifts::new(self.shift_type, self.shifts.clone())
    }
}
