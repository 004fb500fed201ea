//! Node keys used to match shifts to curve nodes.

use super::Tenor;
use chrono::NaiveDate;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identity of a curve node.
///
/// A node exposes two keys, a stable identifier and a display label.
/// Both are `NodeKey`s; keys of different variants never compare equal,
/// so `Tenor(1Y)` and `Name("1Y")` are distinct keys.
///
/// # Example
///
/// ```
/// use market_core::{NodeKey, Tenor};
///
/// let by_name = NodeKey::from("1Y");
/// let by_tenor = NodeKey::from(Tenor::years(1));
///
/// assert_ne!(by_name, by_tenor);
/// assert_eq!(by_name.to_string(), by_tenor.to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKey {
    /// A tenor, e.g. `5Y`.
    Tenor(Tenor),
    /// A calendar date.
    Date(NaiveDate),
    /// Free-form text such as an instrument ticker or label.
    Name(String),
}

impl NodeKey {
    /// Interprets text as a tenor when it parses as one, otherwise as a name.
    ///
    /// ```
    /// use market_core::{NodeKey, Tenor};
    ///
    /// assert_eq!(NodeKey::parse_lenient("3M"), NodeKey::Tenor(Tenor::months(3)));
    /// assert_eq!(NodeKey::parse_lenient("EDZ5"), NodeKey::from("EDZ5"));
    /// ```
    pub fn parse_lenient(text: &str) -> Self {
        text.parse::<Tenor>()
            .map(NodeKey::Tenor)
            .unwrap_or_else(|_| NodeKey::Name(text.to_string()))
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Tenor(tenor) => write!(f, "{}", tenor),
            NodeKey::Date(date) => write!(f, "{}", date),
            NodeKey::Name(name) => f.write_str(name),
        }
    }
}

impl From<Tenor> for NodeKey {
    fn from(tenor: Tenor) -> Self {
        NodeKey::Tenor(tenor)
    }
}

impl From<NaiveDate> for NodeKey {
    fn from(date: NaiveDate) -> Self {
        NodeKey::Date(date)
    }
}

impl From<&str> for NodeKey {
    fn from(name: &str) -> Self {
        NodeKey::Name(name.to_string())
    }
}

impl From<String> for NodeKey {
    fn from(name: String) -> Self {
        NodeKey::Name(name)
    }
}
