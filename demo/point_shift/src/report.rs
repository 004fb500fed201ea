//! Node change reporting and key-rate ladders.

use market_core::{Curve, InterpolatedNodalCurve};
use market_scenarios::{CurvePointShifts, ShiftType};
use std::fmt::Write;

/// Before and after values of one node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeChange {
    /// Node label, or the x-value when the curve has no metadata
    pub label: String,
    /// Value on the base curve
    pub base: f64,
    /// Value on the shifted curve
    pub shifted: f64,
}

impl NodeChange {
    /// Shifted minus base value.
    pub fn change(&self) -> f64 {
        self.shifted - self.base
    }
}

/// Compare two curves node by node.
pub fn node_changes(
    base: &InterpolatedNodalCurve<f64>,
    shifted: &InterpolatedNodalCurve<f64>,
) -> Vec<NodeChange> {
    let labels: Vec<String> = match base.metadata().parameters() {
        Some(nodes) => nodes.iter().map(|node| node.label().to_string()).collect(),
        None => base.x_values().iter().map(|x| format!("{x:.4}")).collect(),
    };

    labels
        .into_iter()
        .zip(base.node_values().iter().zip(shifted.node_values()))
        .map(|(label, (&base, &shifted))| NodeChange {
            label,
            base,
            shifted,
        })
        .collect()
}

/// Render node changes as a fixed-width table, values in basis points.
pub fn render_table(changes: &[NodeChange]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:>12} {:>12} {:>10}",
        "node", "base", "shifted", "chg (bp)"
    );
    for change in changes {
        let _ = writeln!(
            out,
            "{:<10} {:>12.6} {:>12.6} {:>10.2}",
            change.label,
            change.base,
            change.shifted,
            change.change() * 1e4
        );
    }
    out
}

/// One absolute shift scenario per curve node, keyed by node identifier.
///
/// Returns an empty ladder when the curve has no node metadata.
pub fn ladder(curve: &InterpolatedNodalCurve<f64>, amount: f64) -> Vec<CurvePointShifts<f64>> {
    curve
        .metadata()
        .parameters()
        .unwrap_or_default()
        .iter()
        .map(|node| {
            CurvePointShifts::builder(ShiftType::Absolute)
                .add_shift(node.identifier().clone(), amount)
                .build()
        })
        .collect()
}
