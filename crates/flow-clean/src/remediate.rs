//! Applying a remediation policy to a table.
//!
//! Every operation reads the input [`Table`] and builds a new one. Columns
//! that have no missing cells are carried over as-is.

use polars::prelude::*;

use flow_common::first_mode;
use flow_model::{ColumnKind, Table};

use crate::error::{RemediationError, Result};
use crate::policy::{Axis, DropPolicy, FillMethod, FillPolicy, FillValue, RemediationPolicy};

/// Applies `policy` to `table`, returning the remediated table.
pub fn remediate(table: &Table, policy: &RemediationPolicy) -> Result<Table> {
    match policy {
        RemediationPolicy::Drop(drop) => drop_missing(table, drop),
        RemediationPolicy::Fill(fill) => fill_missing(table, fill),
    }
}

/// Drops rows or columns whose present-cell count is below the policy's
/// threshold (or, without a threshold, that have any missing cell).
pub fn drop_missing(table: &Table, policy: &DropPolicy) -> Result<Table> {
    tracing::info!(
        axis = %policy.axis,
        threshold = ?policy.threshold,
        "Dropping missing values"
    );

    let result = match policy.axis {
        Axis::Rows => drop_rows(table, policy)?,
        Axis::Columns => drop_columns(table, policy)?,
    };

    tracing::info!(
        rows_before = table.row_count(),
        rows_after = result.row_count(),
        columns_before = table.column_count(),
        columns_after = result.column_count(),
        "Dropped incomplete entries"
    );
    Ok(result)
}

fn drop_rows(table: &Table, policy: &DropPolicy) -> Result<Table> {
    let width = table.column_count();
    let mut present = vec![width; table.row_count()];

    for column in table.columns() {
        if column.null_count() == 0 {
            continue;
        }
        let nulls = column.as_materialized_series().is_null();
        for (row, is_null) in nulls.into_iter().enumerate() {
            if is_null == Some(true) {
                present[row] -= 1;
            }
        }
    }

    let keep: Vec<bool> = present
        .iter()
        .map(|&count| policy.keeps(count, width - count))
        .collect();
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    let filtered = table.dataframe().filter(&mask)?;
    Ok(Table::new(filtered)?)
}

fn drop_columns(table: &Table, policy: &DropPolicy) -> Result<Table> {
    let height = table.row_count();
    let kept: Vec<Column> = table
        .columns()
        .iter()
        .filter(|column| {
            let missing = column.null_count();
            let keep = policy.keeps(height - missing, missing);
            if !keep {
                tracing::debug!(column = %column.name(), missing, "Dropping column");
            }
            keep
        })
        .cloned()
        .collect();
    if kept.is_empty() {
        return Ok(Table::new(DataFrame::empty_with_height(height))?);
    }
    Ok(Table::from_columns(kept)?)
}

/// Fills missing cells according to the policy's method.
///
/// [`FillMethod::Unrecognized`] returns an unchanged copy and logs a
/// warning. [`FillMethod::Constant`] without a value is
/// [`RemediationError::MissingFillValue`].
pub fn fill_missing(table: &Table, policy: &FillPolicy) -> Result<Table> {
    tracing::info!(
        method = %policy.method,
        fill_value = ?policy.fill_value,
        "Filling missing values"
    );

    let result = match &policy.method {
        FillMethod::Mean => fill_columns(table, |series| fill_numeric(series, Statistic::Mean))?,
        FillMethod::Median => {
            fill_columns(table, |series| fill_numeric(series, Statistic::Median))?
        }
        FillMethod::Mode => fill_columns(table, fill_mode)?,
        FillMethod::Constant => {
            let value = policy
                .fill_value
                .as_ref()
                .ok_or(RemediationError::MissingFillValue)?;
            fill_columns(table, |series| fill_constant(series, value).map(Some))?
        }
        FillMethod::Unrecognized(name) => {
            tracing::warn!(method = %name, "Unknown fill method; no missing values handled");
            return Ok(table.clone());
        }
    };

    tracing::info!(
        missing_before = table.total_missing(),
        missing_after = result.total_missing(),
        "Missing values filled"
    );
    Ok(result)
}

#[derive(Debug, Clone, Copy)]
enum Statistic {
    Mean,
    Median,
}

/// Rebuilds the table, passing each column that has missing cells to
/// `fill`. `None` keeps the column unchanged.
fn fill_columns<F>(table: &Table, mut fill: F) -> Result<Table>
where
    F: FnMut(&Series) -> Result<Option<Series>>,
{
    let mut columns = Vec::with_capacity(table.column_count());
    for column in table.columns() {
        if column.null_count() == 0 {
            columns.push(column.clone());
            continue;
        }
        match fill(column.as_materialized_series())? {
            Some(filled) => columns.push(filled.into_column()),
            None => columns.push(column.clone()),
        }
    }
    Ok(Table::from_columns(columns)?)
}

fn fill_numeric(series: &Series, statistic: Statistic) -> Result<Option<Series>> {
    if !ColumnKind::from_dtype(series.dtype()).is_numeric() {
        return Ok(None);
    }
    let value = match statistic {
        Statistic::Mean => series.mean(),
        Statistic::Median => series.median(),
    };
    let Some(value) = value else {
        tracing::debug!(column = %series.name(), "No present values; column left as-is");
        return Ok(None);
    };

    tracing::debug!(column = %series.name(), ?statistic, value, "Filling numeric column");
    let values = series.cast(&DataType::Float64)?;
    let literal = Series::new(series.name().clone(), [value]);
    fill_nulls_from(series, &values, &literal).map(Some)
}

fn fill_mode(series: &Series) -> Result<Option<Series>> {
    let Some(mode) = first_mode(series)? else {
        tracing::debug!(column = %series.name(), "No present values; column left as-is");
        return Ok(None);
    };
    tracing::debug!(
        column = %series.name(),
        count = mode.count,
        first_row = mode.first_row,
        "Filling with most frequent value"
    );
    let literal = series.slice(mode.first_row as i64, 1);
    fill_nulls_from(series, series, &literal).map(Some)
}

fn fill_constant(series: &Series, value: &FillValue) -> Result<Series> {
    let target = widened_dtype(series.dtype(), value);
    if &target != series.dtype() {
        tracing::debug!(
            column = %series.name(),
            from = %series.dtype(),
            to = %target,
            "Widening column to hold fill value"
        );
    }
    let values = match series.strict_cast(&target) {
        Ok(values) => values,
        Err(err) => {
            tracing::debug!(
                column = %series.name(),
                to = %target,
                error = %err,
                "Present values do not fit; widening column to text"
            );
            series.cast(&DataType::String)?
        }
    };
    let literal = literal_series(series.name().clone(), value).cast(values.dtype())?;
    fill_nulls_from(series, &values, &literal)
}

/// Takes `values` where `original` is present and the single value in
/// `literal` elsewhere. `values` and `literal` must share a dtype.
fn fill_nulls_from(original: &Series, values: &Series, literal: &Series) -> Result<Series> {
    let fill = literal.new_from_index(0, values.len());
    Ok(values.zip_with(&original.is_not_null(), &fill)?)
}

/// Narrowest dtype able to hold both the column's values and the literal.
fn widened_dtype(dtype: &DataType, value: &FillValue) -> DataType {
    let kind = ColumnKind::from_dtype(dtype);
    match (kind, value) {
        (ColumnKind::Integer, FillValue::Integer(_)) => DataType::Int64,
        (ColumnKind::Integer | ColumnKind::Float, FillValue::Integer(_) | FillValue::Float(_)) => {
            DataType::Float64
        }
        (ColumnKind::Boolean, FillValue::Boolean(_)) => DataType::Boolean,
        _ => DataType::String,
    }
}

fn literal_series(name: PlSmallStr, value: &FillValue) -> Series {
    match value {
        FillValue::Integer(v) => Series::new(name, [*v]),
        FillValue::Float(v) => Series::new(name, [*v]),
        FillValue::Boolean(v) => Series::new(name, [*v]),
        FillValue::Text(v) => Series::new(name, [v.as_str()]),
    }
}
