//! # market_core: Curve Foundation for Scenario Perturbations
//!
//! ## Layer 1 (Foundation) Role
//!
//! market_core is the bottom layer of the workspace, providing:
//! - Curve abstraction with positional rebuild (`curves`)
//! - Node identity: identifiers, labels, tenors (`metadata`)
//! - Per-node value adjustments (`adjustment`)
//! - Error types: `MarketDataError` (`error`)
//!
//! ## Minimal Dependencies
//!
//! - num-traits: Generic floating-point values
//! - chrono: Date-valued node identifiers
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use market_core::{Curve, InterpolatedNodalCurve, Tenor, ValueAdjustment};
//!
//! let curve = InterpolatedNodalCurve::from_tenors(
//!     "USD-OIS",
//!     &[Tenor::years(1), Tenor::years(5)],
//!     &[0.01, 0.02],
//! )
//! .unwrap();
//!
//! let nodes = curve.metadata().parameters().unwrap();
//! assert_eq!(nodes[0].label().to_string(), "1Y");
//!
//! let bumped = curve
//!     .shifted_by(&[ValueAdjustment::None, ValueAdjustment::Multiplier(2.0)])
//!     .unwrap();
//! assert_eq!(bumped.node_values(), &[0.01, 0.04]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for metadata, keys and adjustments

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod adjustment;
pub mod curves;
pub mod error;
pub mod metadata;

pub use adjustment::ValueAdjustment;
pub use curves::{ConstantCurve, Curve, CurveEnum, CurveKind, InterpolatedNodalCurve};
pub use error::MarketDataError;
pub use metadata::{CurveMetadata, CurveName, NodeKey, NodeMetadata, Tenor, TenorUnit};

/// Re-export of the floating-point bound used throughout the crate.
pub use num_traits::Float;
