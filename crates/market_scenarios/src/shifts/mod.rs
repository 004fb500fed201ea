//! Point shifts and their adjustment semantics.
//!
//! - [`ShiftType`]: Absolute, relative or scaled adjustment of a node value
//! - [`CurvePointShifts`]: Immutable set of shifts keyed by node identity
//! - [`CurvePointShiftsBuilder`]: Mutable builder producing `CurvePointShifts`

mod builder;
mod point_shift;
mod shift_type;

pub use builder::CurvePointShiftsBuilder;
pub use point_shift::CurvePointShifts;
pub use shift_type::ShiftType;
