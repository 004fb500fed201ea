//! Scenario file model.

use crate::error::DemoError;
use market_core::{InterpolatedNodalCurve, NodeKey, Tenor};
use market_scenarios::{BatchConfig, CurvePointShifts, ShiftType};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// A curve and the point shifts to apply to it.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Base curve
    pub curve: CurveSection,
    /// Point shifts
    pub shift: ShiftSection,
    /// Optional batch settings for ladder runs
    #[serde(default)]
    pub batch: Option<BatchConfig>,
}

/// Base curve definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurveSection {
    /// Curve name
    pub name: String,
    /// Nodes in ascending tenor order
    pub nodes: Vec<NodeEntry>,
    /// Attach tenor metadata to the nodes
    #[serde(default = "default_metadata")]
    pub metadata: bool,
}

/// A single curve node.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeEntry {
    /// Tenor such as "6M" or "10Y"
    pub tenor: String,
    /// Node value
    pub value: f64,
}

/// Point shift definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShiftSection {
    /// Shift type applied to every amount
    #[serde(rename = "type")]
    pub shift_type: ShiftType,
    /// Amount per node key
    #[serde(default)]
    pub shifts: BTreeMap<String, f64>,
}

fn default_metadata() -> bool {
    true
}

impl Scenario {
    /// Parse a scenario from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, DemoError> {
        toml::from_str(content).map_err(|e| DemoError::Parse(e.to_string()))
    }

    /// Load a scenario file.
    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Build the base curve.
    pub fn build_curve(&self) -> Result<InterpolatedNodalCurve<f64>, DemoError> {
        let tenors = self
            .curve
            .nodes
            .iter()
            .map(|node| node.tenor.parse::<Tenor>())
            .collect::<Result<Vec<_>, _>>()?;
        let values: Vec<f64> = self.curve.nodes.iter().map(|node| node.value).collect();

        let curve = if self.curve.metadata {
            InterpolatedNodalCurve::from_tenors(self.curve.name.as_str(), &tenors, &values)?
        } else {
            let x_values: Vec<f64> = tenors.iter().map(Tenor::year_fraction).collect();
            InterpolatedNodalCurve::new(self.curve.name.as_str(), &x_values, &values)?
        };
        Ok(curve)
    }

    /// Build the point shifts.
    ///
    /// Keys are parsed leniently, so `"1y"` and `"1Y"` name the same tenor;
    /// such duplicates are rejected rather than silently merged.
    pub fn build_shifts(&self) -> Result<CurvePointShifts<f64>, DemoError> {
        let mut seen: HashMap<NodeKey, &str> = HashMap::new();
        let mut builder = CurvePointShifts::builder(self.shift.shift_type);
        for (text, amount) in &self.shift.shifts {
            let key = NodeKey::parse_lenient(text);
            if let Some(first) = seen.insert(key.clone(), text.as_str()) {
                tracing::warn!(%key, first, second = %text, "duplicate shift key");
                return Err(DemoError::DuplicateShiftKey {
                    key: key.to_string(),
                    first: first.to_string(),
                    second: text.clone(),
                });
            }
            builder.add_shift(key, *amount);
        }
        Ok(builder.build())
    }

    /// Batch settings from the file, or defaults, with environment overrides.
    pub fn batch_config(&self) -> Result<BatchConfig, DemoError> {
        Ok(self.batch.clone().unwrap_or_default().with_env_override()?)
    }
}
