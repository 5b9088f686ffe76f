//! Error types for parameter validation, loading and export

use thiserror::Error;

/// Errors surfaced by the projection library
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// A parameter violates one of its invariants. Raised before any month is projected.
    #[error("Invalid parameter: {field} - {reason}")]
    InvalidParameter { field: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ProjectionError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        ProjectionError::InvalidParameter {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field, if this is a validation failure
    pub fn field(&self) -> Option<&str> {
        match self {
            ProjectionError::InvalidParameter { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
