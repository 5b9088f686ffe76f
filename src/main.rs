//! EV + Solar projection CLI
//!
//! Runs one projection and writes the monthly table to CSV

use anyhow::Context;
use clap::Parser;
use ev_solar_projection::params::load_parameters;
use ev_solar_projection::projection::export::{write_csv_file, write_json_file};
use ev_solar_projection::{ProjectionEngine, ProjectionParameters};
use std::path::PathBuf;

/// Project gasoline vs electric vehicle costs over 25 years
#[derive(Parser, Debug)]
#[command(name = "ev_solar_projection", version, about)]
struct Args {
    /// JSON parameter file; missing fields take defaults
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Charge from the grid instead of a financed solar installation
    #[arg(long)]
    no_solar: bool,

    /// Monthly distance (km)
    #[arg(long)]
    km: Option<f64>,

    /// Fuel price per litre
    #[arg(long)]
    fuel_price: Option<f64>,

    /// Electricity tariff per kWh
    #[arg(long)]
    tariff: Option<f64>,

    /// Annual inflation rate (0.045 = 4.5%)
    #[arg(long)]
    inflation: Option<f64>,

    /// Vehicle loan term in years (0 = paid outright)
    #[arg(long)]
    vehicle_term: Option<u32>,

    /// Solar loan term in years (0 = paid outright)
    #[arg(long)]
    solar_term: Option<u32>,

    /// Months printed to the console
    #[arg(long, default_value_t = 24)]
    show: usize,

    /// CSV output path
    #[arg(short, long, default_value = "projection_output.csv")]
    output: PathBuf,

    /// Also write the full result as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

impl Args {
    fn parameters(&self) -> anyhow::Result<ProjectionParameters> {
        let mut params = match &self.params {
            Some(path) => load_parameters(path)
                .with_context(|| format!("loading parameters from {}", path.display()))?,
            None => ProjectionParameters::default(),
        };

        if self.no_solar {
            params.solar_enabled = false;
        }
        if let Some(km) = self.km {
            params.monthly_distance_km = km;
        }
        if let Some(price) = self.fuel_price {
            params.fuel_price_per_litre = price;
        }
        if let Some(tariff) = self.tariff {
            params.electricity_tariff_per_kwh = tariff;
        }
        if let Some(rate) = self.inflation {
            params.annual_inflation_rate = rate;
        }
        if let Some(years) = self.vehicle_term {
            params.vehicle_loan_term_years = years;
        }
        if let Some(years) = self.solar_term {
            params.solar_loan_term_years = years;
        }

        Ok(params)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("EV + Solar Projection v{}", env!("CARGO_PKG_VERSION"));
    println!("=========================\n");

    let params = args.parameters()?;
    let engine = ProjectionEngine::new(params).context("invalid projection parameters")?;
    let result = engine.project();
    let baseline = &result.baseline;

    println!("Monthly cost ICE (month 1):  {:>12.2}", baseline.fuel_cost);
    println!("Monthly cost EV grid:        {:>12.2}", baseline.grid_cost);
    println!("EV consumption (kWh/month):  {:>12.1}", baseline.monthly_energy_kwh);
    println!("Solar required (kWp):        {:>12.2}", baseline.required_kwp);
    println!("Solar loan payment:          {:>12.2} ({} months)", baseline.solar_loan.payment(), baseline.solar_loan.term_months);
    println!("Vehicle loan payment:        {:>12.2} ({} months)", baseline.vehicle_loan.payment(), baseline.vehicle_loan.term_months);
    println!();

    println!("{:>5} {:>12} {:>12} {:>12} {:>14} {:>10} {:>10} {:>8}",
        "Month", "ICE", "EV", "Savings", "Cumulative", "SolarLoan", "EVLoan", "Infl");
    println!("{}", "-".repeat(92));

    for row in result.rows.iter().take(args.show) {
        println!("{:>5} {:>12.2} {:>12.2} {:>12.2} {:>14.2} {:>10.2} {:>10.2} {:>8.4}",
            row.month,
            row.fuel_vehicle_cost,
            row.electric_vehicle_cost,
            row.monthly_savings,
            row.cumulative_savings,
            row.solar_loan_payment,
            row.ev_loan_payment,
            row.inflation_factor,
        );
    }

    if result.rows.len() > args.show {
        println!("... ({} more months)", result.rows.len() - args.show);
    }

    write_csv_file(&result.rows, &args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    println!("\nFull results written to: {}", args.output.display());

    if let Some(path) = &args.json {
        write_json_file(&result, path).with_context(|| format!("writing {}", path.display()))?;
        println!("JSON written to: {}", path.display());
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Total Months: {}", summary.total_months);
    println!("  Total ICE Cost: {:.2}", summary.total_fuel_cost);
    println!("  Total EV Cost: {:.2}", summary.total_electric_cost);
    println!("  Five-Year Savings: {:.2}", summary.five_year_savings);
    println!("  Final Savings: {:.2}", summary.final_savings);
    match summary.break_even_month {
        Some(month) => println!("  Break-even Month: {}", month),
        None => println!("  Break-even Month: never"),
    }
    if let Some(irr) = summary.return_on_down_payment {
        println!("  Return on Down Payment: {:.2}%/yr", irr * 100.0);
    }

    println!("\nKey Milestones:");
    for &m in &[1, 12, 13, 60, 61, 120, 300] {
        if let Some(row) = result.row(m) {
            println!("  Month {:>3}: ICE={:.2} EV={:.2} Cumulative={:.2}",
                m, row.fuel_vehicle_cost, row.electric_vehicle_cost, row.cumulative_savings);
        }
    }

    Ok(())
}
