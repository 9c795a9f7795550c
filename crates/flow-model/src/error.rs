//! Error types for table construction and access.

use thiserror::Error;

/// Errors raised when building or querying a [`crate::Table`].
#[derive(Debug, Error)]
pub enum TableError {
    /// Two columns share a name.
    #[error("duplicate column name '{name}'")]
    DuplicateColumn { name: String },

    /// A column has an empty or whitespace-only name.
    #[error("column at position {index} has an empty name")]
    EmptyColumnName { index: usize },

    /// Requested column does not exist.
    #[error("column '{name}' not found")]
    ColumnNotFound { name: String },

    /// Underlying DataFrame operation failed.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TableError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TableError::DuplicateColumn {
            name: "LotArea".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate column name 'LotArea'");
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let table_err: TableError = polars_err.into();
        assert!(matches!(table_err, TableError::DataFrame { .. }));
    }
}
