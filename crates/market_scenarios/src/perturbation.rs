//! Perturbation abstraction for market data scenarios.

use crate::error::ShiftError;
use crate::shifts::CurvePointShifts;
use market_core::Curve;
use num_traits::Float;

/// A transformation deriving a perturbed piece of market data from a base one.
///
/// Implementations are pure: the target is read, never modified, and the
/// result is a new value.
///
/// # Example
///
/// ```
/// use market_core::{InterpolatedNodalCurve, Tenor};
/// use market_scenarios::{CurvePointShifts, Perturbation, ShiftType};
///
/// fn perturb_all<P, C>(perturbation: &P, curves: &[C]) -> Vec<C>
/// where
///     P: Perturbation<C>,
/// {
///     curves.iter().filter_map(|c| perturbation.apply(c).ok()).collect()
/// }
///
/// let curve = InterpolatedNodalCurve::from_tenors("USD-OIS", &[Tenor::years(1)], &[0.01]).unwrap();
/// let shifts = CurvePointShifts::builder(ShiftType::Scaled).add_shift("1Y", 2.0).build();
///
/// let shifted = perturb_all(&shifts, &[curve]);
/// assert_eq!(shifted[0].node_values(), &[0.02]);
/// ```
pub trait Perturbation<C> {
    /// Apply the perturbation, returning the perturbed value.
    fn apply(&self, target: &C) -> Result<C, ShiftError>;
}

impl<T, C> Perturbation<C> for CurvePointShifts<T>
where
    T: Float,
    C: Curve<T>,
{
    #[inline]
    fn apply(&self, target: &C) -> Result<C, ShiftError> {
        CurvePointShifts::apply(self, target)
    }
}
