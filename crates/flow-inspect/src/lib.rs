//! Non-visual inspection of InsightFlow tables.
//!
//! * [`inspect_types`]: dtype, kind and non-null count per column
//! * [`numeric_summary`] / [`categorical_summary`]: descriptive statistics
//! * [`missing_value_report`]: columns with missing cells
//!
//! [`Inspector`] wraps these behind a swappable [`InspectionStrategy`].

mod error;
mod inspector;
mod missing;
mod summary;
mod types;

pub use error::{InspectError, Result};
pub use inspector::{InspectionReport, InspectionStrategy, Inspector};
pub use missing::{MissingColumn, missing_value_report};
pub use summary::{CategoricalSummary, NumericSummary, categorical_summary, numeric_summary};
pub use types::{ColumnTypeInfo, inspect_types};
