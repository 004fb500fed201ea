//! Market data error types.
//!
//! This module provides structured error handling for curve construction
//! and curve rebuild operations.

use thiserror::Error;

/// Market data operation errors.
///
/// # Variants
///
/// - `InsufficientData`: Not enough nodes for construction
/// - `LengthMismatch`: Parallel node arrays of different length
/// - `InvalidNodeOrder`: Node x-values not strictly increasing
/// - `TooManyAdjustments`: Rebuild given more adjustments than nodes
/// - `NotNodal`: Rebuild requested from a curve without nodes
/// - `InvalidTenor`: Tenor string could not be parsed
///
/// # Examples
///
/// ```
/// use market_core::MarketDataError;
///
/// let err = MarketDataError::InsufficientData { got: 1, need: 2 };
/// assert_eq!(format!("{}", err), "Insufficient data: got 1, need 2");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Insufficient data for construction.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of nodes provided
        got: usize,
        /// Minimum number of nodes required
        need: usize,
    },

    /// Two arrays describing the same nodes differ in length.
    #[error("Length mismatch for {what}: expected {expected}, got {got}")]
    LengthMismatch {
        /// Which array was wrong
        what: &'static str,
        /// Number of curve nodes
        expected: usize,
        /// Number of entries provided
        got: usize,
    },

    /// Node x-values must be strictly increasing.
    #[error("Invalid node order at index {index}: x = {x}")]
    InvalidNodeOrder {
        /// Index of the offending node
        index: usize,
        /// The offending x-value
        x: f64,
    },

    /// More adjustments than nodes were supplied to a rebuild.
    #[error("Too many adjustments for curve '{curve}': {adjustments} adjustments, {nodes} nodes")]
    TooManyAdjustments {
        /// Curve name
        curve: String,
        /// Number of curve nodes
        nodes: usize,
        /// Number of adjustments supplied
        adjustments: usize,
    },

    /// The curve has no nodes to rebuild.
    #[error("Curve '{curve}' of kind {kind} has no nodes to adjust")]
    NotNodal {
        /// Curve name
        curve: String,
        /// Concrete curve kind
        kind: String,
    },

    /// A tenor string could not be parsed.
    #[error("Invalid tenor: '{0}'")]
    InvalidTenor(String),
}
