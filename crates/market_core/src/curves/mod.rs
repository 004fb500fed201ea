//! Curve abstractions consumed by scenario perturbations.
//!
//! This module provides:
//! - [`Curve`]: Trait exposing metadata and positional rebuild
//! - [`CurveKind`]: Concrete representation of a curve
//! - [`InterpolatedNodalCurve`]: Node-based curve with linear interpolation
//! - [`ConstantCurve`]: Single-valued, non-nodal curve
//! - [`CurveEnum`]: Static dispatch enum wrapping concrete curves

mod constant;
mod curve_enum;
mod interpolated;
mod traits;

pub use constant::ConstantCurve;
pub use curve_enum::CurveEnum;
pub use interpolated::InterpolatedNodalCurve;
pub use traits::{Curve, CurveKind};
