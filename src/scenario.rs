//! Scenario runner for batch and sensitivity projections
//!
//! Holds a base parameter set and runs variations of it. Each projection owns
//! its own accumulators, so batches run in parallel with rayon.

use crate::error::Result;
use crate::params::ProjectionParameters;
use crate::projection::{ProjectionEngine, ProjectionResult};
use clap::ValueEnum;
use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Parameter varied by a sensitivity sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SweepParameter {
    Inflation,
    Tariff,
    FuelPrice,
    Distance,
    SolarLoanRate,
    VehicleLoanRate,
}

impl SweepParameter {
    /// Copy of `base` with this parameter set to `value`
    pub fn apply(&self, base: &ProjectionParameters, value: f64) -> ProjectionParameters {
        let mut params = base.clone();
        match self {
            SweepParameter::Inflation => params.annual_inflation_rate = value,
            SweepParameter::Tariff => params.electricity_tariff_per_kwh = value,
            SweepParameter::FuelPrice => params.fuel_price_per_litre = value,
            SweepParameter::Distance => params.monthly_distance_km = value,
            SweepParameter::SolarLoanRate => params.solar_loan_annual_rate = value,
            SweepParameter::VehicleLoanRate => params.vehicle_loan_annual_rate = value,
        }
        params
    }
}

/// One point of a sensitivity sweep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepPoint {
    pub value: f64,
    pub five_year_savings: f64,
    pub final_savings: f64,
    pub break_even_month: Option<u32>,
}

/// Runner holding the base parameters for a family of projections
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_params: ProjectionParameters,
}

impl ScenarioRunner {
    pub fn new(base_params: ProjectionParameters) -> Self {
        Self { base_params }
    }

    /// Run the base scenario
    pub fn run(&self) -> Result<ProjectionResult> {
        self.run_with(&self.base_params)
    }

    /// Run a single projection with the given parameters
    pub fn run_with(&self, params: &ProjectionParameters) -> Result<ProjectionResult> {
        let engine = ProjectionEngine::new(params.clone())?;
        Ok(engine.project())
    }

    /// Run many parameter sets in parallel. Results keep the input order and an
    /// invalid set fails only its own entry.
    pub fn run_batch(&self, scenarios: &[ProjectionParameters]) -> Vec<Result<ProjectionResult>> {
        debug!("Running batch of {} scenarios", scenarios.len());
        scenarios
            .par_iter()
            .map(|params| self.run_with(params))
            .collect()
    }

    /// Grid-only, solar, and solar without vehicle loan variants of the base scenario
    pub fn compare_configurations(&self) -> Result<Vec<(&'static str, ProjectionResult)>> {
        let variants = [
            ("grid", self.base_params.without_solar()),
            ("solar", ProjectionParameters { solar_enabled: true, ..self.base_params.clone() }),
            (
                "solar_paid_upfront",
                ProjectionParameters { solar_enabled: true, ..self.base_params.without_vehicle_loan() },
            ),
        ];

        variants
            .into_iter()
            .map(|(name, params)| Ok((name, self.run_with(&params)?)))
            .collect()
    }

    /// Sweep one parameter over `values`, skipping values that fail validation
    pub fn sweep(&self, parameter: SweepParameter, values: &[f64]) -> Vec<SweepPoint> {
        values
            .par_iter()
            .filter_map(|&value| {
                let params = parameter.apply(&self.base_params, value);
                match self.run_with(&params) {
                    Ok(result) => Some(SweepPoint {
                        value,
                        five_year_savings: result.five_year_savings,
                        final_savings: result.final_savings(),
                        break_even_month: result.break_even_month(),
                    }),
                    Err(err) => {
                        warn!("Skipping {:?} = {}: {}", parameter, value, err);
                        None
                    }
                }
            })
            .collect()
    }

    /// Get reference to base parameters for inspection
    pub fn parameters(&self) -> &ProjectionParameters {
        &self.base_params
    }

    /// Get mutable reference to base parameters for customization
    pub fn parameters_mut(&mut self) -> &mut ProjectionParameters {
        &mut self.base_params
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(ProjectionParameters::default())
    }
}
