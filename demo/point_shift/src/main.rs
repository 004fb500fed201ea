//! Point-Shift Demo CLI
//!
//! Applies the point shifts of a scenario file to its curve and prints the
//! node table. With `--ladder <bp>` a key-rate ladder is run instead, one
//! scenario per node.

use anyhow::{Context, Result};
use clap::Parser;
use market_core::InterpolatedNodalCurve;
use market_scenarios::apply_scenarios;
use point_shift::prelude::*;
use point_shift::report::node_changes;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Curve point-shift demo
#[derive(Parser)]
#[command(name = "point-shift")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Scenario file (TOML)
    #[arg(short, long)]
    scenario: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Run a key-rate ladder with the given bump in basis points
    #[arg(short, long)]
    ladder: Option<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive(format!("point_shift={level}").parse()?)
                .add_directive(format!("market_scenarios={level}").parse()?),
        )
        .init();

    let scenario = Scenario::load(&cli.scenario)
        .with_context(|| format!("Failed to load scenario {}", cli.scenario.display()))?;
    let curve = scenario.build_curve()?;
    tracing::info!(curve = %scenario.curve.name, nodes = curve.node_count(), "curve loaded");

    let outcome = match cli.ladder {
        Some(bp) => run_ladder(&scenario, &curve, bp),
        None => run_scenario(&scenario, &curve),
    };
    if let Err(err) = &outcome {
        if let Some(hint) = err.hint() {
            tracing::warn!(hint, "scenario failed");
        }
    }
    Ok(outcome?)
}

fn run_scenario(
    scenario: &Scenario,
    curve: &InterpolatedNodalCurve<f64>,
) -> Result<(), DemoError> {
    let shifts = scenario.build_shifts()?;
    tracing::info!(shift_type = %shifts.shift_type(), shifts = shifts.len(), "applying scenario");

    let shifted = shifts.apply(curve)?;
    print!("{}", render_table(&node_changes(curve, &shifted)));
    Ok(())
}

fn run_ladder(
    scenario: &Scenario,
    curve: &InterpolatedNodalCurve<f64>,
    bp: f64,
) -> Result<(), DemoError> {
    let config = scenario.batch_config()?;
    let scenarios = ladder(curve, bp * 1e-4);
    if scenarios.is_empty() {
        return Err(DemoError::EmptyLadder {
            curve: scenario.curve.name.clone(),
        });
    }
    tracing::info!(scenarios = scenarios.len(), ?config, "running ladder");

    for result in apply_scenarios(&scenarios, curve, &config) {
        let shifted = result?;
        let moved: Vec<NodeChange> = node_changes(curve, &shifted)
            .into_iter()
            .filter(|change| change.change() != 0.0)
            .collect();
        print!("{}", render_table(&moved));
    }
    Ok(())
}
