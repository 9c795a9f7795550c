//! Error types for missing-value remediation.

use flow_model::TableError;
use thiserror::Error;

/// Errors raised while selecting or applying a remediation policy.
#[derive(Debug, Error)]
pub enum RemediationError {
    /// Strategy key is not one of the known keys.
    #[error("invalid remediation strategy '{name}' (expected one of: drop, mean, median, mode, constant)")]
    InvalidStrategy { name: String },

    /// Axis is neither rows nor columns.
    #[error("invalid drop axis '{value}' (expected rows or columns)")]
    InvalidAxis { value: String },

    /// The constant fill method was chosen without a value.
    #[error("the constant fill method requires a fill value")]
    MissingFillValue,

    /// Underlying DataFrame operation failed.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    /// Rebuilt columns did not form a valid table.
    #[error(transparent)]
    Table(#[from] TableError),
}

impl From<polars::prelude::PolarsError> for RemediationError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for remediation operations.
pub type Result<T> = std::result::Result<T, RemediationError>;
