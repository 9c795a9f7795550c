//! The immutable table passed between pipeline stages.

use std::collections::HashSet;

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};
use crate::kind::ColumnKind;

/// Missing-cell count for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMissing {
    /// Column name.
    pub name: String,
    /// Number of missing cells.
    pub missing: usize,
}

/// Ordered, uniquely named, equal-length columns.
///
/// A `Table` has no mutating methods. Remediation and other transformations
/// take `&Table` and return a new `Table`.
#[derive(Debug, Clone)]
pub struct Table {
    df: DataFrame,
}

impl Table {
    /// Wraps a DataFrame, validating column names.
    ///
    /// Polars already guarantees equal column lengths; this adds the
    /// unique, non-empty name checks.
    pub fn new(df: DataFrame) -> Result<Self> {
        let mut seen = HashSet::new();
        for (index, name) in df.get_column_names().into_iter().enumerate() {
            if name.trim().is_empty() {
                return Err(TableError::EmptyColumnName { index });
            }
            if !seen.insert(name.as_str()) {
                return Err(TableError::DuplicateColumn {
                    name: name.to_string(),
                });
            }
        }
        Ok(Self { df })
    }

    /// Builds a table from columns.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let df = DataFrame::new(columns)?;
        Self::new(df)
    }

    /// Column names in table order.
    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.df.height()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.df.width()
    }

    /// Borrow a column by name.
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.df
            .column(name)
            .map_err(|_| TableError::ColumnNotFound {
                name: name.to_string(),
            })
    }

    /// All columns in table order.
    pub fn columns(&self) -> &[Column] {
        self.df.get_columns()
    }

    /// Semantic kind of a column.
    pub fn column_kind(&self, name: &str) -> Result<ColumnKind> {
        Ok(ColumnKind::from_dtype(self.column(name)?.dtype()))
    }

    /// Number of missing cells in a column.
    pub fn missing_count(&self, name: &str) -> Result<usize> {
        Ok(self.column(name)?.null_count())
    }

    /// Missing-cell counts for every column, in table order.
    pub fn missing_counts(&self) -> Vec<ColumnMissing> {
        self.df
            .get_columns()
            .iter()
            .map(|column| ColumnMissing {
                name: column.name().to_string(),
                missing: column.null_count(),
            })
            .collect()
    }

    /// Total number of missing cells.
    pub fn total_missing(&self) -> usize {
        self.df.get_columns().iter().map(Column::null_count).sum()
    }

    /// True if any cell is missing.
    pub fn has_missing(&self) -> bool {
        self.df.get_columns().iter().any(|c| c.null_count() > 0)
    }

    /// Borrow the underlying DataFrame.
    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    /// Consume the table, returning the DataFrame.
    pub fn into_dataframe(self) -> DataFrame {
        self.df
    }
}
