//! EV + Solar projection - monthly cost comparison of a gasoline vehicle against an
//! electric vehicle, optionally charged from a financed solar installation
//!
//! This library provides:
//! - A validated, immutable parameter record with JSON loading
//! - Annual to monthly rate conversion and fixed-payment loan amortization
//! - A 300-month projection of both cost tracks with inflation indexing
//! - Summary metrics (five-year savings, break-even month, return on down payment)
//! - A scenario runner for parallel batches and sensitivity sweeps

pub mod error;
pub mod params;
pub mod finance;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::ProjectionError;
pub use params::{ProjectionParameters, SolarCost};
pub use finance::{Financing, LoanSchedule};
pub use projection::{DerivedBaseline, MonthlyRow, ProjectionEngine, ProjectionResult, ProjectionSummary};
pub use scenario::{ScenarioRunner, SweepParameter};
