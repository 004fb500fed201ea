//! Curve and node metadata.
//!
//! This module provides:
//! - [`CurveName`]: Name of a curve, used in diagnostics
//! - [`NodeKey`]: Identity of a node (tenor, date or free-form name)
//! - [`Tenor`]: Period type used for tenor-based node identifiers
//! - [`NodeMetadata`]: Identifier and label of a single node
//! - [`CurveMetadata`]: Curve name plus optional per-node metadata

mod node_key;
mod tenor;

pub use node_key::NodeKey;
pub use tenor::{Tenor, TenorUnit};

use chrono::NaiveDate;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Name of a curve, e.g. `USD-OIS`.
///
/// # Example
///
/// ```
/// use market_core::CurveName;
///
/// let name = CurveName::new("USD-OIS");
/// assert_eq!(name.as_str(), "USD-OIS");
/// assert_eq!(format!("{}", name), "USD-OIS");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurveName(String);

impl CurveName {
    /// Create a curve name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Return the name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CurveName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for CurveName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Identifier and label of a single curve node.
///
/// The identifier is the stable key; the label is display-oriented and
/// need not be unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeMetadata {
    identifier: NodeKey,
    label: NodeKey,
}

impl NodeMetadata {
    /// Create node metadata from an identifier and a label.
    pub fn new(identifier: impl Into<NodeKey>, label: impl Into<NodeKey>) -> Self {
        Self {
            identifier: identifier.into(),
            label: label.into(),
        }
    }

    /// Metadata for a tenor node.
    ///
    /// The identifier is the tenor and the label is its text form.
    ///
    /// ```
    /// use market_core::{NodeKey, NodeMetadata, Tenor};
    ///
    /// let node = NodeMetadata::tenor(Tenor::years(5));
    /// assert_eq!(node.identifier(), &NodeKey::Tenor(Tenor::years(5)));
    /// assert_eq!(node.label(), &NodeKey::from("5Y"));
    /// ```
    pub fn tenor(tenor: Tenor) -> Self {
        Self {
            identifier: NodeKey::Tenor(tenor),
            label: NodeKey::Name(tenor.to_string()),
        }
    }

    /// Metadata for a dated node such as a futures or FRA instrument.
    pub fn date(date: NaiveDate, label: impl Into<String>) -> Self {
        Self {
            identifier: NodeKey::Date(date),
            label: NodeKey::Name(label.into()),
        }
    }

    /// The stable identifier of the node.
    #[inline]
    pub fn identifier(&self) -> &NodeKey {
        &self.identifier
    }

    /// The display label of the node.
    #[inline]
    pub fn label(&self) -> &NodeKey {
        &self.label
    }
}

/// Metadata describing a curve.
///
/// Per-node metadata is either available for every node, in the curve's
/// node order, or absent for the curve as a whole.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurveMetadata {
    name: CurveName,
    parameters: Option<Vec<NodeMetadata>>,
}

impl CurveMetadata {
    /// Metadata without per-node information.
    pub fn new(name: impl Into<CurveName>) -> Self {
        Self {
            name: name.into(),
            parameters: None,
        }
    }

    /// Metadata with per-node information.
    pub fn with_parameters(name: impl Into<CurveName>, parameters: Vec<NodeMetadata>) -> Self {
        Self {
            name: name.into(),
            parameters: Some(parameters),
        }
    }

    /// The curve name.
    #[inline]
    pub fn name(&self) -> &CurveName {
        &self.name
    }

    /// Per-node metadata in node order, if the curve has any.
    #[inline]
    pub fn parameters(&self) -> Option<&[NodeMetadata]> {
        self.parameters.as_deref()
    }
}
