//! Projection parameters: the immutable input record, validation and loading

mod data;
mod validate;
pub mod loader;

pub use data::{ProjectionParameters, SolarCost, MAX_LOAN_TERM_YEARS, MONTHS_PER_YEAR};
pub use loader::{load_parameters, load_parameters_from_reader};
