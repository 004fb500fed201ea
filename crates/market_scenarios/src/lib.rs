//! # market_scenarios: Point-Shift Perturbations (L2: Scenarios)
//!
//! Derives perturbed curves from base curves by shifting individual nodes.
//!
//! This crate provides:
//! - Shift semantics: absolute, relative and scaled (`shifts`)
//! - Immutable point-shift sets with a mutable builder (`shifts`)
//! - The `Perturbation` abstraction over market data transformations
//! - Rayon-based batch application across curves and scenarios (`batch`)
//! - Batch configuration from TOML and environment variables (`config`)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         market_scenarios (L2)           │
//! ├─────────────────────────────────────────┤
//! │  shifts/       - ShiftType, builder,    │
//! │                  CurvePointShifts       │
//! │  perturbation  - Perturbation trait     │
//! │  batch         - Rayon utilities        │
//! │  config        - BatchConfig            │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │            market_core (L1)             │
//! │  Curves, node metadata, adjustments     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use market_core::{InterpolatedNodalCurve, Tenor};
//! use market_scenarios::{CurvePointShifts, ShiftType};
//!
//! let curve = InterpolatedNodalCurve::from_tenors(
//!     "USD-OIS",
//!     &[Tenor::years(1), Tenor::years(2), Tenor::years(5)],
//!     &[0.010_f64, 0.015, 0.020],
//! )
//! .unwrap();
//!
//! let shifts = CurvePointShifts::builder(ShiftType::Relative)
//!     .add_shift(Tenor::years(2), 0.1)
//!     .add_shift("10Y", 0.5)
//!     .build();
//!
//! let shifted = shifts.apply(&curve).unwrap();
//! assert_eq!(shifted.node_values()[0], 0.010);
//! assert!((shifted.node_values()[1] - 0.0165).abs() < 1e-15);
//! assert_eq!(shifted.node_values()[2], 0.020);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation of `CurvePointShifts` and the underlying metadata

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod batch;
pub mod config;
pub mod error;
pub mod perturbation;
pub mod shifts;

pub use batch::{apply_scenarios, apply_to_curves};
pub use config::{BatchConfig, ConfigError};
pub use error::ShiftError;
pub use perturbation::Perturbation;
pub use shifts::{CurvePointShifts, CurvePointShiftsBuilder, ShiftType};
