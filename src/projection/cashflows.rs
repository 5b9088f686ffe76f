//! Output structures for projections

use super::baseline::DerivedBaseline;
use serde::{Deserialize, Serialize};

/// A single row of projection output for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRow {
    pub month: u32,

    // Cost tracks
    pub fuel_vehicle_cost: f64,
    pub electric_vehicle_cost: f64,
    /// EV charged from the grid, before any vehicle loan payment
    pub grid_only_cost: f64,

    // Savings
    pub monthly_savings: f64,
    pub cumulative_savings: f64,

    // Components of the electric track
    pub solar_loan_payment: f64,
    pub oem_charge: f64,
    pub inflation_factor: f64,
    pub ev_loan_payment: f64,
}

/// Complete projection result
///
/// Rows are appended only by the engine:
///
/// ```compile_fail
/// use ev_solar_projection::{ProjectionEngine, ProjectionParameters};
///
/// let mut result = ProjectionEngine::new(ProjectionParameters::default()).unwrap().project();
/// let extra = result.rows[0].clone();
/// result.add_row(extra);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Figures derived from the parameters before projecting
    pub baseline: DerivedBaseline,

    /// Monthly rows, ordered by month
    pub rows: Vec<MonthlyRow>,

    /// Cumulative savings over the first five years
    pub five_year_savings: f64,

    /// Down payment made before month 1
    pub down_payment: f64,
}

impl ProjectionResult {
    pub(crate) fn new(baseline: DerivedBaseline, down_payment: f64) -> Self {
        Self {
            baseline,
            rows: Vec::new(),
            five_year_savings: 0.0,
            down_payment,
        }
    }

    /// Add a row
    pub(crate) fn add_row(&mut self, row: MonthlyRow) {
        self.rows.push(row);
    }

    /// Row for a 1-indexed month
    pub fn row(&self, month: u32) -> Option<&MonthlyRow> {
        month
            .checked_sub(1)
            .and_then(|idx| self.rows.get(idx as usize))
    }

    /// Cumulative savings at the end of the horizon
    pub fn final_savings(&self) -> f64 {
        self.rows.last().map(|r| r.cumulative_savings).unwrap_or(0.0)
    }

    /// First month from which cumulative savings never drops below zero again
    pub fn break_even_month(&self) -> Option<u32> {
        match self.rows.iter().rposition(|r| r.cumulative_savings < 0.0) {
            None => self.rows.first().map(|r| r.month),
            Some(idx) => self.rows.get(idx + 1).map(|r| r.month),
        }
    }

    /// Annual IRR of paying the down payment up front and receiving the monthly savings
    pub fn return_on_down_payment(&self) -> Option<f64> {
        let mut cashflows = Vec::with_capacity(self.rows.len() + 1);
        cashflows.push(-self.down_payment);
        cashflows.extend(self.rows.iter().map(|r| r.monthly_savings));
        super::irr::calculate_irr(&cashflows, 12)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_fuel_cost: f64 = self.rows.iter().map(|r| r.fuel_vehicle_cost).sum();
        let total_electric_cost: f64 = self.rows.iter().map(|r| r.electric_vehicle_cost).sum();
        let total_vehicle_loan: f64 = self.rows.iter().map(|r| r.ev_loan_payment).sum();
        let total_solar_loan: f64 = self.rows.iter().map(|r| r.solar_loan_payment).sum();
        let total_oem: f64 = self.rows.iter().map(|r| r.oem_charge).sum();

        ProjectionSummary {
            total_months: self.rows.len() as u32,
            total_fuel_cost,
            total_electric_cost,
            total_vehicle_loan,
            total_solar_loan,
            total_oem,
            five_year_savings: self.five_year_savings,
            final_savings: self.final_savings(),
            break_even_month: self.break_even_month(),
            return_on_down_payment: self.return_on_down_payment(),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_months: u32,
    pub total_fuel_cost: f64,
    pub total_electric_cost: f64,
    pub total_vehicle_loan: f64,
    pub total_solar_loan: f64,
    pub total_oem: f64,
    pub five_year_savings: f64,
    pub final_savings: f64,
    pub break_even_month: Option<u32>,
    pub return_on_down_payment: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ProjectionParameters;

    fn result_with_cumulative(values: &[f64]) -> ProjectionResult {
        let baseline = DerivedBaseline::from_parameters(&ProjectionParameters::default());
        let mut result = ProjectionResult::new(baseline, 0.0);
        let mut previous = 0.0;
        for (i, &cumulative) in values.iter().enumerate() {
            result.add_row(MonthlyRow {
                month: i as u32 + 1,
                fuel_vehicle_cost: 0.0,
                electric_vehicle_cost: 0.0,
                grid_only_cost: 0.0,
                monthly_savings: cumulative - previous,
                cumulative_savings: cumulative,
                solar_loan_payment: 0.0,
                oem_charge: 0.0,
                inflation_factor: 1.0,
                ev_loan_payment: 0.0,
            });
            previous = cumulative;
        }
        result
    }

    #[test]
    fn test_break_even_after_last_negative() {
        let result = result_with_cumulative(&[-100.0, -50.0, 10.0, -5.0, 20.0, 40.0]);
        assert_eq!(result.break_even_month(), Some(5));
    }

    #[test]
    fn test_break_even_from_start() {
        let result = result_with_cumulative(&[10.0, 20.0, 30.0]);
        assert_eq!(result.break_even_month(), Some(1));
    }

    #[test]
    fn test_never_breaks_even() {
        let result = result_with_cumulative(&[-10.0, -20.0, -30.0]);
        assert_eq!(result.break_even_month(), None);
    }

    #[test]
    fn test_row_lookup() {
        let result = result_with_cumulative(&[1.0, 2.0]);
        assert_eq!(result.row(2).map(|r| r.month), Some(2));
        assert!(result.row(0).is_none());
        assert!(result.row(3).is_none());
    }
}
