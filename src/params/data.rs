//! Projection parameter record and its defaults

use serde::{Deserialize, Serialize};

/// Months in a year, used for term and rate conversions
pub const MONTHS_PER_YEAR: u32 = 12;

/// Longest accepted loan term in years
pub const MAX_LOAN_TERM_YEARS: u32 = 100;

/// How the solar installation's capital cost is specified
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolarCost {
    /// Total installed cost
    Direct(f64),
    /// Cost per installed kWp, multiplied by the required capacity
    PerKwp(f64),
}

impl SolarCost {
    /// Capital cost for an installation of `required_kwp`
    pub fn capital(&self, required_kwp: f64) -> f64 {
        match self {
            SolarCost::Direct(amount) => *amount,
            SolarCost::PerKwp(cost_per_kwp) => cost_per_kwp * required_kwp,
        }
    }

    pub(crate) fn amount(&self) -> f64 {
        match self {
            SolarCost::Direct(amount) | SolarCost::PerKwp(amount) => *amount,
        }
    }
}

/// Full input set for one projection run
///
/// Missing fields in a JSON file fall back to [`ProjectionParameters::default`];
/// unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectionParameters {
    // Usage
    /// Distance driven per month (km)
    pub monthly_distance_km: f64,

    /// Fuel price per litre
    pub fuel_price_per_litre: f64,

    /// Gasoline vehicle efficiency (km/L)
    pub fuel_efficiency_km_per_litre: f64,

    /// Electric vehicle efficiency (km/kWh)
    pub electric_efficiency_km_per_kwh: f64,

    /// Charging losses as a percentage of delivered energy (0-100)
    pub charging_loss_pct: f64,

    /// Grid electricity tariff per kWh
    pub electricity_tariff_per_kwh: f64,

    /// Annual solar production per installed kWp (kWh/kWp/year)
    pub solar_yield_kwh_per_kwp_year: f64,

    /// Whether the EV is charged from a financed solar installation
    pub solar_enabled: bool,

    // Economic (annual rates as decimals, 0.15 = 15%)
    pub annual_inflation_rate: f64,
    pub solar_loan_annual_rate: f64,
    pub solar_loan_term_years: u32,
    pub vehicle_loan_annual_rate: f64,
    pub vehicle_loan_term_years: u32,

    // Fixed monthly costs
    pub fuel_vehicle_maintenance: f64,
    pub fuel_vehicle_insurance: f64,
    pub ev_maintenance: f64,
    pub ev_insurance: f64,

    // Capital
    pub solar_cost: SolarCost,
    pub ev_price: f64,
    pub down_payment: f64,
}

impl Default for ProjectionParameters {
    fn default() -> Self {
        Self {
            monthly_distance_km: 1300.0,
            fuel_price_per_litre: 6.40,
            fuel_efficiency_km_per_litre: 12.0,
            electric_efficiency_km_per_kwh: 6.0,
            charging_loss_pct: 10.0,
            electricity_tariff_per_kwh: 1.00,
            solar_yield_kwh_per_kwp_year: 1379.0,
            solar_enabled: true,
            annual_inflation_rate: 0.045,
            solar_loan_annual_rate: 0.15,
            solar_loan_term_years: 5,
            vehicle_loan_annual_rate: 0.12,
            vehicle_loan_term_years: 5,
            fuel_vehicle_maintenance: 250.0,
            fuel_vehicle_insurance: 300.0,
            ev_maintenance: 150.0,
            ev_insurance: 400.0,
            solar_cost: SolarCost::PerKwp(4_000.0),
            ev_price: 180_000.0,
            down_payment: 60_000.0,
        }
    }
}

impl ProjectionParameters {
    /// Charging loss as a fraction (10% -> 0.10)
    pub fn charging_loss_fraction(&self) -> f64 {
        self.charging_loss_pct / 100.0
    }

    pub fn solar_loan_term_months(&self) -> u32 {
        self.solar_loan_term_years.saturating_mul(MONTHS_PER_YEAR)
    }

    pub fn vehicle_loan_term_months(&self) -> u32 {
        self.vehicle_loan_term_years.saturating_mul(MONTHS_PER_YEAR)
    }

    /// Financed part of the EV price
    pub fn vehicle_principal(&self) -> f64 {
        self.ev_price - self.down_payment
    }

    /// Combined fixed monthly cost of the gasoline vehicle at month 1 prices
    pub fn fuel_vehicle_fixed_costs(&self) -> f64 {
        self.fuel_vehicle_maintenance + self.fuel_vehicle_insurance
    }

    /// Combined fixed monthly cost of the EV at month 1 prices
    pub fn ev_fixed_costs(&self) -> f64 {
        self.ev_maintenance + self.ev_insurance
    }

    /// Same parameters with solar switched off
    pub fn without_solar(&self) -> Self {
        Self {
            solar_enabled: false,
            ..self.clone()
        }
    }

    /// Same parameters paying for the EV outright (no vehicle loan)
    pub fn without_vehicle_loan(&self) -> Self {
        Self {
            vehicle_loan_term_years: 0,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_calculator_inputs() {
        let params = ProjectionParameters::default();
        assert_eq!(params.monthly_distance_km, 1300.0);
        assert_eq!(params.charging_loss_fraction(), 0.10);
        assert_eq!(params.solar_loan_term_months(), 60);
        assert!(params.solar_enabled);
    }

    #[test]
    fn test_term_months_saturate() {
        let params = ProjectionParameters {
            vehicle_loan_term_years: 400_000_000,
            ..Default::default()
        };
        assert_eq!(params.vehicle_loan_term_months(), u32::MAX);
    }

    #[test]
    fn test_solar_cost_capital() {
        assert_eq!(SolarCost::Direct(40_000.0).capital(5.0), 40_000.0);
        assert_eq!(SolarCost::PerKwp(4_000.0).capital(2.5), 10_000.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let params: ProjectionParameters =
            serde_json::from_str(r#"{"monthly_distance_km": 2000.0, "solar_cost": {"direct": 35000.0}}"#)
                .unwrap();
        assert_eq!(params.monthly_distance_km, 2000.0);
        assert_eq!(params.solar_cost, SolarCost::Direct(35_000.0));
        assert_eq!(params.fuel_price_per_litre, 6.40);
    }
}
