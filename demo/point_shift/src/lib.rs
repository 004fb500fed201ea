//! # Point-Shift Demo
//!
//! Loads a scenario file describing a tenor curve and a set of point shifts,
//! applies the shifts and reports how each node moved.
//!
//! ## Scenario File
//!
//! ```toml
//! [curve]
//! name = "USD-OIS"
//! nodes = [ { tenor = "1Y", value = 0.01 }, { tenor = "5Y", value = 0.02 } ]
//!
//! [shift]
//! type = "absolute"
//! shifts = { "1Y" = 0.001 }
//! ```
//!
//! Shift keys are parsed as tenors when possible and as node names otherwise.
//! Setting `metadata = false` under `[curve]` builds the curve without node
//! metadata, which the perturbation rejects.

pub mod error;
pub mod report;
pub mod scenario;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::DemoError;
    pub use crate::report::{ladder, render_table, NodeChange};
    pub use crate::scenario::{CurveSection, NodeEntry, Scenario, ShiftSection};
}
