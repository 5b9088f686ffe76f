//! Annual to monthly rate conversion and inflation indexing

use crate::params::MONTHS_PER_YEAR;

/// Monthly-equivalent rate of an annual rate compounded monthly:
/// r_monthly = (1 + r_annual)^(1/12) - 1
///
/// A zero annual rate returns exactly zero.
pub fn annual_to_monthly(annual_rate: f64) -> f64 {
    if annual_rate == 0.0 {
        return 0.0;
    }
    (1.0 + annual_rate).powf(1.0 / MONTHS_PER_YEAR as f64) - 1.0
}

/// Cumulative inflation factor for a 1-indexed month: (1 + r_monthly)^(month - 1)
///
/// Month 1 carries no inflation and returns exactly 1.0.
pub fn inflation_factor(monthly_rate: f64, month: u32) -> f64 {
    if month <= 1 {
        return 1.0;
    }
    (1.0 + monthly_rate).powi((month - 1) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rate_is_exact() {
        assert_eq!(annual_to_monthly(0.0), 0.0);
    }

    #[test]
    fn test_monthly_compounds_back_to_annual() {
        for annual in [0.01, 0.045, 0.15, 0.30] {
            let monthly = annual_to_monthly(annual);
            assert_relative_eq!((1.0 + monthly).powi(12), 1.0 + annual, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_fifteen_percent_annual() {
        // ~1.1715% per month
        assert_relative_eq!(annual_to_monthly(0.15), 0.011714917, epsilon = 1e-8);
    }

    #[test]
    fn test_inflation_factor() {
        let monthly = annual_to_monthly(0.045);
        assert_eq!(inflation_factor(monthly, 1), 1.0);
        assert_relative_eq!(inflation_factor(monthly, 13), 1.045, epsilon = 1e-12);
        assert_relative_eq!(inflation_factor(monthly, 25), 1.045 * 1.045, epsilon = 1e-12);
    }
}
