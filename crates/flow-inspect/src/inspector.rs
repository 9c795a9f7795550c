//! An inspector that holds the current inspection strategy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use flow_model::Table;

use crate::error::Result;
use crate::missing::{MissingColumn, missing_value_report};
use crate::summary::{CategoricalSummary, NumericSummary, categorical_summary, numeric_summary};
use crate::types::{ColumnTypeInfo, inspect_types};

/// What an [`Inspector`] reports on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InspectionStrategy {
    /// Column dtypes and non-null counts.
    #[default]
    Types,
    /// Numeric and categorical summary statistics.
    Summary,
    /// Missing-value counts.
    Missing,
}

impl InspectionStrategy {
    pub const ALL: &'static [Self] = &[Self::Types, Self::Summary, Self::Missing];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Types => "types",
            Self::Summary => "summary",
            Self::Missing => "missing",
        }
    }
}

impl fmt::Display for InspectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InspectionStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown inspection '{s}' (expected types, summary or missing)"))
    }
}

/// Result of running an inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum InspectionReport {
    Types {
        columns: Vec<ColumnTypeInfo>,
    },
    Summary {
        numeric: Vec<NumericSummary>,
        categorical: Vec<CategoricalSummary>,
    },
    Missing {
        rows: usize,
        columns: Vec<MissingColumn>,
    },
}

/// Runs a swappable [`InspectionStrategy`] against tables.
#[derive(Debug, Clone, Default)]
pub struct Inspector {
    strategy: InspectionStrategy,
}

impl Inspector {
    pub fn new(strategy: InspectionStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> InspectionStrategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: InspectionStrategy) {
        tracing::debug!(from = %self.strategy, to = %strategy, "Switching inspection strategy");
        self.strategy = strategy;
    }

    /// Inspect `table` with the current strategy.
    pub fn execute(&self, table: &Table) -> Result<InspectionReport> {
        let report = match self.strategy {
            InspectionStrategy::Types => InspectionReport::Types {
                columns: inspect_types(table),
            },
            InspectionStrategy::Summary => InspectionReport::Summary {
                numeric: numeric_summary(table)?,
                categorical: categorical_summary(table)?,
            },
            InspectionStrategy::Missing => InspectionReport::Missing {
                rows: table.row_count(),
                columns: missing_value_report(table),
            },
        };
        tracing::info!(
            view = %self.strategy,
            rows = table.row_count(),
            columns = table.column_count(),
            "Inspected table"
        );
        Ok(report)
    }
}
