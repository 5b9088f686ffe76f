//! Monthly projection of gasoline vs electric vehicle costs

mod state;
mod baseline;
mod engine;
mod cashflows;
mod irr;
pub mod export;

pub use state::ProjectionState;
pub use baseline::{DerivedBaseline, SOLAR_OEM_ANNUAL_FRACTION};
pub use engine::{ProjectionEngine, PROJECTION_MONTHS, CHECKPOINT_MONTHS};
pub use cashflows::{MonthlyRow, ProjectionResult, ProjectionSummary};
pub use irr::calculate_irr;
