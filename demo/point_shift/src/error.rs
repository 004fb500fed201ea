//! Demo error types.

use market_core::MarketDataError;
use market_scenarios::{ConfigError, ShiftError};
use thiserror::Error;

/// Errors raised by the point-shift demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Scenario file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Scenario file is not valid
    #[error("Scenario parse error: {0}")]
    Parse(String),

    /// Curve could not be built from the scenario
    #[error("Curve error: {0}")]
    Curve(#[from] MarketDataError),

    /// Shifts could not be applied
    #[error("Shift error: {0}")]
    Shift(#[from] ShiftError),

    /// Batch configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Two shift keys in the file name the same node key
    #[error("Shift keys '{first}' and '{second}' both resolve to node key {key}")]
    DuplicateShiftKey {
        /// Resolved node key
        key: String,
        /// Key text seen first
        first: String,
        /// Key text seen second
        second: String,
    },

    /// A ladder was requested for a curve without node metadata
    #[error("Curve '{curve}' has no node metadata to build a ladder from")]
    EmptyLadder {
        /// Curve name
        curve: String,
    },
}

const METADATA_HINT: &str = "remove `metadata = false` under [curve] so nodes carry tenor metadata";

impl DemoError {
    /// Suggested scenario file change, if the failure comes from how the curve is declared.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            DemoError::Shift(err) if err.is_configuration() => Some(METADATA_HINT),
            DemoError::EmptyLadder { .. } => Some(METADATA_HINT),
            _ => None,
        }
    }
}
