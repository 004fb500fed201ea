//! Rayon-based batch application of perturbations.
//!
//! Perturbations and curves are immutable, so every `(perturbation, curve)`
//! pair can be processed independently. Batches below the configured
//! threshold run sequentially; larger ones are spread across the rayon pool.
//! Results always come back in input order.

use crate::config::BatchConfig;
use crate::error::ShiftError;
use crate::perturbation::Perturbation;
use rayon::prelude::*;

/// Apply one perturbation to many curves.
///
/// # Example
///
/// ```
/// use market_core::{InterpolatedNodalCurve, Tenor};
/// use market_scenarios::{apply_to_curves, BatchConfig, CurvePointShifts, ShiftType};
///
/// let curves: Vec<_> = [0.01, 0.02]
///     .iter()
///     .map(|&r| InterpolatedNodalCurve::from_tenors("C", &[Tenor::years(1)], &[r]).unwrap())
///     .collect();
/// let shifts = CurvePointShifts::builder(ShiftType::Scaled).add_shift("1Y", 2.0).build();
///
/// let results = apply_to_curves(&shifts, &curves, &BatchConfig::default());
/// assert_eq!(results[1].as_ref().unwrap().node_values(), &[0.04]);
/// ```
pub fn apply_to_curves<P, C>(
    perturbation: &P,
    curves: &[C],
    config: &BatchConfig,
) -> Vec<Result<C, ShiftError>>
where
    P: Perturbation<C> + Sync,
    C: Send + Sync,
{
    if config.should_parallelize(curves.len()) {
        tracing::debug!(curves = curves.len(), batch_size = config.batch_size, "parallel batch");
        curves
            .par_iter()
            .with_min_len(config.batch_size.max(1))
            .map(|curve| perturbation.apply(curve))
            .collect()
    } else {
        curves.iter().map(|curve| perturbation.apply(curve)).collect()
    }
}

/// Apply many perturbations to one curve, one result per perturbation.
pub fn apply_scenarios<P, C>(
    perturbations: &[P],
    curve: &C,
    config: &BatchConfig,
) -> Vec<Result<C, ShiftError>>
where
    P: Perturbation<C> + Sync,
    C: Send + Sync,
{
    if config.should_parallelize(perturbations.len()) {
        tracing::debug!(
            scenarios = perturbations.len(),
            batch_size = config.batch_size,
            "parallel batch"
        );
        perturbations
            .par_iter()
            .with_min_len(config.batch_size.max(1))
            .map(|perturbation| perturbation.apply(curve))
            .collect()
    } else {
        perturbations
            .iter()
            .map(|perturbation| perturbation.apply(curve))
            .collect()
    }
}
