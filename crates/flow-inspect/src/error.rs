//! Error types for table inspection.

use thiserror::Error;

/// Errors raised while computing inspection reports.
#[derive(Debug, Error)]
pub enum InspectError {
    /// Underlying DataFrame operation failed.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for InspectError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for inspection operations.
pub type Result<T> = std::result::Result<T, InspectError>;
