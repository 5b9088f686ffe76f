//! Internal Rate of Return (IRR) of a monthly cash-flow series
//!
//! Used to express the EV purchase as an investment: the down payment goes out
//! before month 1 and the monthly savings come back over the horizon.

const TOLERANCE: f64 = 1e-10;
const MAX_ITERATIONS: usize = 1000;
const MIN_PERIODIC_RATE: f64 = -0.99;
const MAX_PERIODIC_RATE: f64 = 10.0;

/// Annual IRR of periodic cash flows (Newton-Raphson, bisection fallback)
///
/// # Arguments
/// * `cashflows` - Cash flows starting at period 0 (positive = inflow, negative = outflow)
/// * `periods_per_year` - Number of periods per year (12 for monthly)
///
/// # Returns
/// Annual IRR as a decimal, or None when the series has no sign change or no root is found
pub fn calculate_irr(cashflows: &[f64], periods_per_year: u32) -> Option<f64> {
    if cashflows.is_empty() {
        return None;
    }

    if cashflows.iter().all(|&cf| cf.abs() < TOLERANCE) {
        return Some(0.0);
    }

    let has_positive = cashflows.iter().any(|&cf| cf > TOLERANCE);
    let has_negative = cashflows.iter().any(|&cf| cf < -TOLERANCE);
    if !has_positive || !has_negative {
        return None;
    }

    let mut rate = 0.05 / periods_per_year as f64;

    for _ in 0..MAX_ITERATIONS {
        let (npv, dnpv) = npv_and_derivative(cashflows, rate);

        if dnpv.abs() < 1e-20 {
            return irr_bisection(cashflows, periods_per_year);
        }

        let next = (rate - npv / dnpv).clamp(MIN_PERIODIC_RATE, MAX_PERIODIC_RATE);

        if (next - rate).abs() < TOLERANCE {
            return Some(annualize(next, periods_per_year));
        }

        rate = next;
    }

    irr_bisection(cashflows, periods_per_year)
}

fn annualize(periodic_rate: f64, periods_per_year: u32) -> f64 {
    (1.0 + periodic_rate).powi(periods_per_year as i32) - 1.0
}

fn npv_and_derivative(cashflows: &[f64], rate: f64) -> (f64, f64) {
    let mut npv = 0.0;
    let mut dnpv = 0.0;

    for (t, &cf) in cashflows.iter().enumerate() {
        npv += cf / (1.0 + rate).powi(t as i32);
        if t > 0 {
            dnpv -= (t as f64) * cf / (1.0 + rate).powi(t as i32 + 1);
        }
    }

    (npv, dnpv)
}

fn npv_at_rate(cashflows: &[f64], rate: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}

fn irr_bisection(cashflows: &[f64], periods_per_year: u32) -> Option<f64> {
    let mut low = MIN_PERIODIC_RATE;
    let mut high = MAX_PERIODIC_RATE;

    if npv_at_rate(cashflows, low) * npv_at_rate(cashflows, high) > 0.0 {
        return None;
    }

    for _ in 0..MAX_ITERATIONS {
        let mid = (low + high) / 2.0;
        let npv_mid = npv_at_rate(cashflows, mid);

        if npv_mid.abs() < TOLERANCE || (high - low) / 2.0 < TOLERANCE {
            return Some(annualize(mid, periods_per_year));
        }

        if npv_mid * npv_at_rate(cashflows, low) < 0.0 {
            high = mid;
        } else {
            low = mid;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_single_payback() {
        // 1000 out, 1100 back after 12 months
        let mut cashflows = vec![-1000.0];
        cashflows.extend(vec![0.0; 11]);
        cashflows.push(1100.0);

        let irr = calculate_irr(&cashflows, 12).unwrap();
        assert_abs_diff_eq!(irr, 0.10, epsilon = 1e-3);
    }

    #[test]
    fn test_level_savings_recover_annuity_rate() {
        // Savings that exactly amortize the outlay at 1% per month
        let monthly_rate: f64 = 0.01;
        let outlay = 10_000.0;
        let saving = outlay * monthly_rate / (1.0 - (1.0 + monthly_rate).powi(-24));

        let mut cashflows = vec![-outlay];
        cashflows.extend(vec![saving; 24]);

        let irr = calculate_irr(&cashflows, 12).unwrap();
        assert_abs_diff_eq!(irr, 1.01_f64.powi(12) - 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_no_sign_change() {
        assert!(calculate_irr(&[100.0, 200.0, 300.0], 12).is_none());
        assert!(calculate_irr(&[], 12).is_none());
    }
}
