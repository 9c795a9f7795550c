//! Column types and non-null counts.

use serde::{Deserialize, Serialize};

use flow_model::{ColumnKind, Table};

/// Type information for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnTypeInfo {
    pub name: String,
    /// Storage dtype as rendered by Polars (`i64`, `f64`, `str`, ...).
    pub dtype: String,
    pub kind: ColumnKind,
    pub non_null: usize,
    pub null: usize,
}

/// Lists every column with its dtype and non-null count, in table order.
pub fn inspect_types(table: &Table) -> Vec<ColumnTypeInfo> {
    let rows = table.row_count();
    table
        .columns()
        .iter()
        .map(|column| {
            let null = column.null_count();
            ColumnTypeInfo {
                name: column.name().to_string(),
                dtype: column.dtype().to_string(),
                kind: ColumnKind::from_dtype(column.dtype()),
                non_null: rows - null,
                null,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_types() {
        let df = polars::df!(
            "Order" => [1i64, 2, 3],
            "Alley" => [None, Some("Grvl"), None],
        )
        .unwrap();
        let info = inspect_types(&Table::new(df).unwrap());

        assert_eq!(info.len(), 2);
        assert_eq!(info[0].kind, ColumnKind::Integer);
        assert_eq!(info[0].non_null, 3);
        assert_eq!(info[1].kind, ColumnKind::Text);
        assert_eq!(info[1].non_null, 1);
        assert_eq!(info[1].null, 2);
    }
}
