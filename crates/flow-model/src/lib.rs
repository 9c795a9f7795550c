//! Table model for the InsightFlow data-preparation pipeline.
//!
//! Every pipeline stage consumes and produces a [`Table`]: an immutable,
//! ordered set of uniquely named columns of equal length, backed by a Polars
//! `DataFrame`. Stages never mutate their input; they build a new table.
//!
//! # Example
//!
//! ```
//! use polars::prelude::*;
//! use flow_model::{ColumnKind, Table};
//!
//! let df = polars::df!(
//!     "SalePrice" => [Some(215000i64), None, Some(105000)],
//!     "MSZoning" => [Some("RL"), Some("RH"), None],
//! ).unwrap();
//! let table = Table::new(df).unwrap();
//!
//! assert_eq!(table.row_count(), 3);
//! assert_eq!(table.column_kind("SalePrice").unwrap(), ColumnKind::Integer);
//! assert_eq!(table.total_missing(), 2);
//! ```

mod error;
mod kind;
mod table;

pub use error::{Result, TableError};
pub use kind::ColumnKind;
pub use table::{ColumnMissing, Table};
