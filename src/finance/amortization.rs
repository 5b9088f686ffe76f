//! Fixed-payment loan amortization
//!
//! Each loan resolves to a single constant payment over months 1..=term, or to
//! no financing at all when the term or principal is zero.

use serde::{Deserialize, Serialize};

/// Constant payment that amortizes `principal` over `term_months` at `monthly_rate`
///
/// - zero term or zero principal: 0 (nothing financed)
/// - zero rate: straight-line, principal / term
/// - rate <= -100%: 0 (financing unavailable)
/// - otherwise the annuity formula P*r / (1 - (1+r)^-N)
pub fn annuity_payment(principal: f64, term_months: u32, monthly_rate: f64) -> f64 {
    if term_months == 0 || principal == 0.0 {
        return 0.0;
    }
    if monthly_rate <= -1.0 {
        return 0.0;
    }
    if monthly_rate == 0.0 {
        return principal / term_months as f64;
    }
    let discount = match i32::try_from(term_months) {
        Ok(n) => (1.0 + monthly_rate).powi(-n),
        Err(_) => (1.0 + monthly_rate).powf(-(term_months as f64)),
    };
    principal * monthly_rate / (1.0 - discount)
}

/// Whether a loan carries recurring payments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Financing {
    /// No recurring charge: no loan, nothing to finance, or paid in full up front
    None,
    /// Constant payment for the loan term
    Amortizing { payment: f64 },
}

/// Payment schedule of one fixed-rate loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanSchedule {
    pub principal: f64,
    pub term_months: u32,
    pub monthly_rate: f64,
    pub financing: Financing,
}

impl LoanSchedule {
    pub fn new(principal: f64, term_months: u32, monthly_rate: f64) -> Self {
        let payment = annuity_payment(principal, term_months, monthly_rate);
        let financing = if payment == 0.0 {
            Financing::None
        } else {
            Financing::Amortizing { payment }
        };

        Self {
            principal,
            term_months,
            monthly_rate,
            financing,
        }
    }

    pub fn is_financed(&self) -> bool {
        matches!(self.financing, Financing::Amortizing { .. })
    }

    /// Constant payment while the loan is active
    pub fn payment(&self) -> f64 {
        match self.financing {
            Financing::None => 0.0,
            Financing::Amortizing { payment } => payment,
        }
    }

    /// Payment due in a 1-indexed month; zero outside 1..=term
    pub fn payment_for_month(&self, month: u32) -> f64 {
        if month >= 1 && month <= self.term_months {
            self.payment()
        } else {
            0.0
        }
    }

    pub fn total_paid(&self) -> f64 {
        if self.is_financed() {
            self.payment() * self.term_months as f64
        } else {
            0.0
        }
    }

    /// Interest over the life of the loan
    pub fn total_interest(&self) -> f64 {
        if self.is_financed() {
            self.total_paid() - self.principal
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::annual_to_monthly;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_term_is_unfinanced() {
        let loan = LoanSchedule::new(50_000.0, 0, 0.01);
        assert_eq!(loan.financing, Financing::None);
        assert_eq!(loan.payment_for_month(1), 0.0);
        assert_eq!(loan.total_interest(), 0.0);
    }

    #[test]
    fn test_zero_principal_is_unfinanced() {
        let loan = LoanSchedule::new(0.0, 60, 0.01);
        assert!(!loan.is_financed());
        assert_eq!(loan.payment(), 0.0);
    }

    #[test]
    fn test_zero_rate_straight_line() {
        assert_eq!(annuity_payment(12_000.0, 48, 0.0), 250.0);
        let loan = LoanSchedule::new(10_000.0, 36, 0.0);
        assert_eq!(loan.payment(), 10_000.0 / 36.0);
        assert_relative_eq!(loan.total_interest(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rate_at_or_below_minus_one() {
        assert_eq!(annuity_payment(10_000.0, 12, -1.0), 0.0);
        assert_eq!(annuity_payment(10_000.0, 12, -2.5), 0.0);
    }

    #[test]
    fn test_present_value_of_payments_equals_principal() {
        let principal = 75_000.0;
        let rate = annual_to_monthly(0.12);
        let loan = LoanSchedule::new(principal, 48, rate);

        let pv: f64 = (1..=48)
            .map(|i| loan.payment_for_month(i) / (1.0 + rate).powi(i as i32))
            .sum();
        assert_relative_eq!(pv, principal, max_relative = 1e-10);
    }

    #[test]
    fn test_very_long_term_still_financed() {
        // Past i32::MAX months the payment approaches interest only
        let rate = annual_to_monthly(0.12);
        let loan = LoanSchedule::new(100_000.0, 2_400_000_000, rate);

        assert!(loan.is_financed());
        assert_relative_eq!(loan.payment(), 100_000.0 * rate, max_relative = 1e-9);
    }

    #[test]
    fn test_solar_loan_example() {
        // 40k at 15%/yr over 5 years
        let rate = annual_to_monthly(0.15);
        let loan = LoanSchedule::new(40_000.0, 60, rate);

        assert_relative_eq!(loan.payment(), 931.93, epsilon = 0.01);
        assert_eq!(loan.payment_for_month(1), loan.payment());
        assert_eq!(loan.payment_for_month(60), loan.payment());
        assert_eq!(loan.payment_for_month(61), 0.0);
        assert_eq!(loan.payment_for_month(0), 0.0);
        assert!(loan.total_interest() > 0.0);
    }
}
