//! Parameter validation, run before any month is projected

use super::data::{ProjectionParameters, MAX_LOAN_TERM_YEARS};
use crate::error::{ProjectionError, Result};

fn require_finite(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ProjectionError::invalid(field, "must be a finite number"));
    }
    Ok(())
}

fn require_positive(field: &str, value: f64) -> Result<()> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(ProjectionError::invalid(
            field,
            format!("must be greater than zero (got {})", value),
        ));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: f64) -> Result<()> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(ProjectionError::invalid(
            field,
            format!("must not be negative (got {})", value),
        ));
    }
    Ok(())
}

fn require_loan_term(field: &str, years: u32) -> Result<()> {
    if years > MAX_LOAN_TERM_YEARS {
        return Err(ProjectionError::invalid(
            field,
            format!("must not exceed {} years (got {})", MAX_LOAN_TERM_YEARS, years),
        ));
    }
    Ok(())
}

impl ProjectionParameters {
    /// Check every invariant, reporting the first field that fails
    pub fn validate(&self) -> Result<()> {
        require_positive("monthly_distance_km", self.monthly_distance_km)?;
        require_positive("fuel_price_per_litre", self.fuel_price_per_litre)?;
        require_positive("fuel_efficiency_km_per_litre", self.fuel_efficiency_km_per_litre)?;
        require_positive("electric_efficiency_km_per_kwh", self.electric_efficiency_km_per_kwh)?;
        require_positive("electricity_tariff_per_kwh", self.electricity_tariff_per_kwh)?;

        require_finite("charging_loss_pct", self.charging_loss_pct)?;
        if !(0.0..=100.0).contains(&self.charging_loss_pct) {
            return Err(ProjectionError::invalid(
                "charging_loss_pct",
                format!("must be between 0 and 100 (got {})", self.charging_loss_pct),
            ));
        }

        // Yield is only a divisor when sizing an installation
        if self.solar_enabled {
            require_positive("solar_yield_kwh_per_kwp_year", self.solar_yield_kwh_per_kwp_year)?;
        }

        require_non_negative("annual_inflation_rate", self.annual_inflation_rate)?;
        require_non_negative("solar_loan_annual_rate", self.solar_loan_annual_rate)?;
        require_non_negative("vehicle_loan_annual_rate", self.vehicle_loan_annual_rate)?;
        require_loan_term("solar_loan_term_years", self.solar_loan_term_years)?;
        require_loan_term("vehicle_loan_term_years", self.vehicle_loan_term_years)?;

        require_non_negative("fuel_vehicle_maintenance", self.fuel_vehicle_maintenance)?;
        require_non_negative("fuel_vehicle_insurance", self.fuel_vehicle_insurance)?;
        require_non_negative("ev_maintenance", self.ev_maintenance)?;
        require_non_negative("ev_insurance", self.ev_insurance)?;

        require_non_negative("solar_cost", self.solar_cost.amount())?;
        require_non_negative("ev_price", self.ev_price)?;
        require_non_negative("down_payment", self.down_payment)?;
        if self.down_payment > self.ev_price {
            return Err(ProjectionError::invalid(
                "down_payment",
                format!(
                    "must not exceed ev_price ({} > {})",
                    self.down_payment, self.ev_price
                ),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failing_field(params: &ProjectionParameters) -> String {
        params
            .validate()
            .unwrap_err()
            .field()
            .expect("validation error")
            .to_string()
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(ProjectionParameters::default().validate().is_ok());
    }

    #[test]
    fn test_zero_efficiency_rejected() {
        let params = ProjectionParameters {
            fuel_efficiency_km_per_litre: 0.0,
            ..Default::default()
        };
        assert_eq!(failing_field(&params), "fuel_efficiency_km_per_litre");
    }

    #[test]
    fn test_negative_distance_rejected() {
        let params = ProjectionParameters {
            monthly_distance_km: -10.0,
            ..Default::default()
        };
        assert_eq!(failing_field(&params), "monthly_distance_km");
    }

    #[test]
    fn test_loss_out_of_range_rejected() {
        let params = ProjectionParameters {
            charging_loss_pct: 120.0,
            ..Default::default()
        };
        assert_eq!(failing_field(&params), "charging_loss_pct");
    }

    #[test]
    fn test_negative_rate_rejected() {
        let params = ProjectionParameters {
            vehicle_loan_annual_rate: -1.5,
            ..Default::default()
        };
        assert_eq!(failing_field(&params), "vehicle_loan_annual_rate");
    }

    #[test]
    fn test_nan_rejected() {
        let params = ProjectionParameters {
            annual_inflation_rate: f64::NAN,
            ..Default::default()
        };
        assert_eq!(failing_field(&params), "annual_inflation_rate");
    }

    #[test]
    fn test_down_payment_above_price_rejected() {
        let params = ProjectionParameters {
            ev_price: 100_000.0,
            down_payment: 150_000.0,
            ..Default::default()
        };
        assert_eq!(failing_field(&params), "down_payment");
    }

    #[test]
    fn test_oversized_loan_terms_rejected() {
        for years in [MAX_LOAN_TERM_YEARS + 1, 200_000_000, 400_000_000, u32::MAX] {
            let params = ProjectionParameters {
                vehicle_loan_term_years: years,
                ..Default::default()
            };
            assert_eq!(failing_field(&params), "vehicle_loan_term_years");

            let params = ProjectionParameters {
                solar_loan_term_years: years,
                ..Default::default()
            };
            assert_eq!(failing_field(&params), "solar_loan_term_years");
        }
    }

    #[test]
    fn test_longest_loan_term_accepted() {
        let params = ProjectionParameters {
            vehicle_loan_term_years: MAX_LOAN_TERM_YEARS,
            solar_loan_term_years: MAX_LOAN_TERM_YEARS,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
        assert_eq!(params.vehicle_loan_term_months(), MAX_LOAN_TERM_YEARS * 12);
    }

    #[test]
    fn test_zero_yield_allowed_without_solar() {
        let params = ProjectionParameters {
            solar_enabled: false,
            solar_yield_kwh_per_kwp_year: 0.0,
            ..Default::default()
        };
        assert!(params.validate().is_ok());

        let params = ProjectionParameters {
            solar_enabled: true,
            ..params
        };
        assert_eq!(failing_field(&params), "solar_yield_kwh_per_kwp_year");
    }
}
