//! Figures derived once from the parameters before the monthly loop

use crate::finance::{annual_to_monthly, LoanSchedule};
use crate::params::{ProjectionParameters, MONTHS_PER_YEAR};
use serde::{Deserialize, Serialize};

/// Annual O&M charge of a solar installation as a fraction of its capital cost
pub const SOLAR_OEM_ANNUAL_FRACTION: f64 = 0.01;

/// Month-1 costs, sizing, monthly rates and loan schedules for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedBaseline {
    /// EV energy drawn per month including charging losses (kWh)
    pub monthly_energy_kwh: f64,

    /// Solar capacity needed to cover the EV's yearly energy (kWp), zero without solar
    pub required_kwp: f64,

    /// Month-1 fuel cost of the gasoline vehicle
    pub fuel_cost: f64,

    /// Month-1 grid energy cost of the EV
    pub grid_cost: f64,

    /// Installed solar cost, zero without solar
    pub solar_capital: f64,

    pub monthly_inflation_rate: f64,

    pub solar_loan: LoanSchedule,
    pub vehicle_loan: LoanSchedule,

    /// Month-1 solar O&M charge, inflated like every other recurring cost
    pub oem_baseline: f64,
}

impl DerivedBaseline {
    /// Derive the baseline. Assumes `params` has already been validated.
    pub fn from_parameters(params: &ProjectionParameters) -> Self {
        let monthly_energy_kwh = (params.monthly_distance_km / params.electric_efficiency_km_per_kwh)
            * (1.0 + params.charging_loss_fraction());

        let fuel_cost = (params.monthly_distance_km / params.fuel_efficiency_km_per_litre)
            * params.fuel_price_per_litre;
        let grid_cost = monthly_energy_kwh * params.electricity_tariff_per_kwh;

        let (required_kwp, solar_capital) = if params.solar_enabled {
            let kwp = (monthly_energy_kwh * MONTHS_PER_YEAR as f64) / params.solar_yield_kwh_per_kwp_year;
            (kwp, params.solar_cost.capital(kwp))
        } else {
            (0.0, 0.0)
        };

        let solar_loan = LoanSchedule::new(
            solar_capital,
            params.solar_loan_term_months(),
            annual_to_monthly(params.solar_loan_annual_rate),
        );
        let vehicle_loan = LoanSchedule::new(
            params.vehicle_principal(),
            params.vehicle_loan_term_months(),
            annual_to_monthly(params.vehicle_loan_annual_rate),
        );

        Self {
            monthly_energy_kwh,
            required_kwp,
            fuel_cost,
            grid_cost,
            solar_capital,
            monthly_inflation_rate: annual_to_monthly(params.annual_inflation_rate),
            solar_loan,
            vehicle_loan,
            oem_baseline: solar_capital * SOLAR_OEM_ANNUAL_FRACTION / MONTHS_PER_YEAR as f64,
        }
    }
}
