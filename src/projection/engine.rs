//! Core projection engine for monthly vehicle cost projections

use super::baseline::DerivedBaseline;
use super::cashflows::{MonthlyRow, ProjectionResult};
use super::state::ProjectionState;
use crate::error::Result;
use crate::finance::inflation_factor;
use crate::params::ProjectionParameters;
use log::{debug, info};

/// Projection horizon in months (25 years)
pub const PROJECTION_MONTHS: u32 = 300;

/// Months covered by the five-year savings checkpoint
pub const CHECKPOINT_MONTHS: u32 = 60;

/// Main projection engine
///
/// Holds one validated parameter set and its derived baseline. Every call to
/// [`ProjectionEngine::project`] recomputes the full table from scratch.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    params: ProjectionParameters,
    baseline: DerivedBaseline,
}

impl ProjectionEngine {
    /// Validate the parameters and derive the baseline
    pub fn new(params: ProjectionParameters) -> Result<Self> {
        params.validate()?;
        let baseline = DerivedBaseline::from_parameters(&params);

        debug!(
            "Baseline: fuel {:.2}, grid {:.2}, {:.2} kWh/month, {:.2} kWp, solar loan {:?}, vehicle loan {:?}",
            baseline.fuel_cost,
            baseline.grid_cost,
            baseline.monthly_energy_kwh,
            baseline.required_kwp,
            baseline.solar_loan.financing,
            baseline.vehicle_loan.financing,
        );

        Ok(Self { params, baseline })
    }

    pub fn parameters(&self) -> &ProjectionParameters {
        &self.params
    }

    pub fn baseline(&self) -> &DerivedBaseline {
        &self.baseline
    }

    /// Run the full projection
    pub fn project(&self) -> ProjectionResult {
        let mut result = ProjectionResult::new(self.baseline.clone(), self.params.down_payment);
        let mut state = ProjectionState::new();

        for _month in 1..=PROJECTION_MONTHS {
            state.advance_month();
            let row = self.calculate_month(&mut state);
            result.add_row(row);
        }

        result.five_year_savings = state.checkpoint_savings;

        info!(
            "Projected {} months: five-year savings {:.2}, final savings {:.2}",
            result.rows.len(),
            result.five_year_savings,
            state.cumulative_savings,
        );

        result
    }

    /// Calculate costs and savings for a single month
    fn calculate_month(&self, state: &mut ProjectionState) -> MonthlyRow {
        let month = state.month;
        let baseline = &self.baseline;
        let factor = inflation_factor(baseline.monthly_inflation_rate, month);

        let fuel_vehicle_cost = baseline.fuel_cost * factor + self.params.fuel_vehicle_fixed_costs() * factor;

        let ev_fixed = self.params.ev_fixed_costs() * factor;
        let grid_only_cost = baseline.grid_cost * factor + ev_fixed;

        let ev_loan_payment = baseline.vehicle_loan.payment_for_month(month);

        // Solar replaces the grid energy bill with its loan and O&M
        let (solar_loan_payment, oem_charge, electric_vehicle_cost) = if self.params.solar_enabled {
            let solar_payment = baseline.solar_loan.payment_for_month(month);
            let oem = baseline.oem_baseline * factor;
            (solar_payment, oem, ev_loan_payment + solar_payment + oem + ev_fixed)
        } else {
            (0.0, 0.0, ev_loan_payment + grid_only_cost)
        };

        let monthly_savings = fuel_vehicle_cost - electric_vehicle_cost;
        state.record_savings(monthly_savings, CHECKPOINT_MONTHS);

        MonthlyRow {
            month,
            fuel_vehicle_cost,
            electric_vehicle_cost,
            grid_only_cost,
            monthly_savings,
            cumulative_savings: state.cumulative_savings,
            solar_loan_payment,
            oem_charge,
            inflation_factor: factor,
            ev_loan_payment,
        }
    }
}
