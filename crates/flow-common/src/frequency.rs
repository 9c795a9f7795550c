//! Order-preserving frequency counts over a single column.

use std::collections::HashMap;

use polars::prelude::*;

use crate::polars::frequency_key;

/// A distinct present value and how often it occurs.
#[derive(Debug, Clone)]
pub struct ValueCount<'a> {
    /// The first occurrence of the value in row order.
    pub value: AnyValue<'a>,
    /// Number of cells holding the value.
    pub count: usize,
    /// Row index of the first occurrence.
    pub first_row: usize,
}

/// Counts present values in row order.
///
/// Entries are returned in order of first appearance. Missing cells are not
/// counted.
pub fn value_counts_in_order(series: &Series) -> PolarsResult<Vec<ValueCount<'_>>> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<ValueCount<'_>> = Vec::new();

    for idx in 0..series.len() {
        let value = series.get(idx)?;
        let Some(key) = frequency_key(&value) else {
            continue;
        };
        if let Some(&pos) = positions.get(&key) {
            counts[pos].count += 1;
            continue;
        }
        positions.insert(key, counts.len());
        counts.push(ValueCount {
            value,
            count: 1,
            first_row: idx,
        });
    }

    Ok(counts)
}

/// Returns the most frequent present value of a column.
///
/// Ties go to the value whose first occurrence comes earliest in row order.
/// Returns `None` when the column has no present values.
pub fn first_mode(series: &Series) -> PolarsResult<Option<ValueCount<'_>>> {
    let counts = value_counts_in_order(series)?;
    let mut best: Option<ValueCount<'_>> = None;
    for entry in counts {
        // strict `>` keeps the earlier entry on ties
        let better = best.as_ref().is_none_or(|b| entry.count > b.count);
        if better {
            best = Some(entry);
        }
    }
    Ok(best)
}
