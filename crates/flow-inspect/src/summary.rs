//! Descriptive statistics for numeric and text columns.

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use flow_common::{any_to_string, first_mode, value_counts_in_order};
use flow_model::{ColumnKind, Table};

use crate::error::Result;

/// Statistics for one numeric column, over present values.
///
/// Every statistic is `None` when the column has no present values; `std`
/// is also `None` with a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub name: String,
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation (one delta degree of freedom).
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

/// Statistics for one text column, over present values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalSummary {
    pub name: String,
    pub count: usize,
    /// Number of distinct present values.
    pub unique: usize,
    /// Most frequent value; ties go to the earliest in row order.
    pub top: Option<String>,
    /// Occurrences of `top`.
    pub freq: usize,
}

/// Summarizes every integer and float column, in table order.
///
/// Quantiles use linear interpolation.
pub fn numeric_summary(table: &Table) -> Result<Vec<NumericSummary>> {
    let mut summaries = Vec::new();
    for column in table.columns() {
        if !ColumnKind::from_dtype(column.dtype()).is_numeric() {
            continue;
        }
        let series = column.as_materialized_series().cast(&DataType::Float64)?;
        let ca = series.f64()?;

        summaries.push(NumericSummary {
            name: column.name().to_string(),
            count: ca.len() - ca.null_count(),
            mean: ca.mean(),
            std: ca.std(1),
            min: ca.min(),
            q25: ca.quantile(0.25, QuantileMethod::Linear)?,
            median: ca.median(),
            q75: ca.quantile(0.75, QuantileMethod::Linear)?,
            max: ca.max(),
        });
    }
    tracing::debug!(columns = summaries.len(), "Computed numeric summary");
    Ok(summaries)
}

/// Summarizes every text column, in table order.
pub fn categorical_summary(table: &Table) -> Result<Vec<CategoricalSummary>> {
    let mut summaries = Vec::new();
    for column in table.columns() {
        if ColumnKind::from_dtype(column.dtype()) != ColumnKind::Text {
            continue;
        }
        let series = column.as_materialized_series();
        let unique = value_counts_in_order(series)?.len();
        let mode = first_mode(series)?;

        summaries.push(CategoricalSummary {
            name: column.name().to_string(),
            count: series.len() - series.null_count(),
            unique,
            freq: mode.as_ref().map_or(0, |m| m.count),
            top: mode.map(|m| any_to_string(m.value)),
        });
    }
    tracing::debug!(columns = summaries.len(), "Computed categorical summary");
    Ok(summaries)
}
