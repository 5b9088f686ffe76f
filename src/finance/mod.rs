//! Rate conversion and loan amortization

mod rates;
mod amortization;

pub use rates::{annual_to_monthly, inflation_factor};
pub use amortization::{annuity_payment, Financing, LoanSchedule};
