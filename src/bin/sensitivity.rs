//! Sweep one parameter and report savings at each value
//!
//! Usage: cargo run --bin sensitivity -- --parameter inflation --values 0.02,0.04,0.06

use anyhow::Context;
use clap::Parser;
use ev_solar_projection::params::load_parameters;
use ev_solar_projection::{ProjectionParameters, ScenarioRunner, SweepParameter};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "sensitivity", about = "Savings sensitivity to a single parameter")]
struct Args {
    /// Parameter to vary
    #[arg(long, value_enum)]
    parameter: SweepParameter,

    /// Comma-separated values to try
    #[arg(long, value_delimiter = ',', required = true)]
    values: Vec<f64>,

    /// JSON parameter file for the base scenario
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Charge from the grid instead of solar
    #[arg(long)]
    no_solar: bool,

    /// Print the sweep as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut base = match &args.params {
        Some(path) => load_parameters(path)
            .with_context(|| format!("loading parameters from {}", path.display()))?,
        None => ProjectionParameters::default(),
    };
    if args.no_solar {
        base.solar_enabled = false;
    }
    base.validate().context("invalid base parameters")?;

    let start = Instant::now();
    let runner = ScenarioRunner::new(base);
    let points = runner.sweep(args.parameter, &args.values);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    println!("Sensitivity to {:?} ({} scenarios in {:?})", args.parameter, points.len(), start.elapsed());
    println!("{:>12} {:>16} {:>16} {:>12}", "Value", "5y Savings", "25y Savings", "Break-even");
    println!("{}", "-".repeat(60));

    for point in &points {
        let break_even = point
            .break_even_month
            .map(|m| m.to_string())
            .unwrap_or_else(|| "never".to_string());
        println!("{:>12.4} {:>16.2} {:>16.2} {:>12}",
            point.value, point.five_year_savings, point.final_savings, break_even);
    }

    Ok(())
}
