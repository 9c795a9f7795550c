//! Missing-value counts per column.

use serde::{Deserialize, Serialize};

use flow_model::Table;

/// A column that has at least one missing cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingColumn {
    pub name: String,
    pub missing: usize,
    /// Share of rows missing, 0–100.
    pub percent: f64,
}

/// Columns with missing cells, in table order. Complete columns are omitted.
pub fn missing_value_report(table: &Table) -> Vec<MissingColumn> {
    let rows = table.row_count();
    table
        .missing_counts()
        .into_iter()
        .filter(|column| column.missing > 0)
        .map(|column| MissingColumn {
            percent: column.missing as f64 / rows as f64 * 100.0,
            name: column.name,
            missing: column.missing,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_incomplete_columns_reported() {
        let df = polars::df!(
            "Order" => [1i64, 2, 3, 4],
            "Fence" => [None, Some("MnPrv"), None, None],
            "LotFrontage" => [Some(80i64), None, Some(70), Some(60)],
        )
        .unwrap();
        let report = missing_value_report(&Table::new(df).unwrap());

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].name, "Fence");
        assert_eq!(report[0].missing, 3);
        assert_eq!(report[0].percent, 75.0);
        assert_eq!(report[1].percent, 25.0);
    }

    #[test]
    fn test_complete_table_has_empty_report() {
        let df = polars::df!("Order" => [1i64, 2]).unwrap();
        assert!(missing_value_report(&Table::new(df).unwrap()).is_empty());
    }
}
