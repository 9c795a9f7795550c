//! Shared helpers for working with Polars values across InsightFlow crates.
//!
//! - [`polars`]: `AnyValue` rendering and frequency keys
//! - [`frequency`]: order-preserving value counts and deterministic mode

pub mod frequency;
pub mod polars;

pub use frequency::{ValueCount, first_mode, value_counts_in_order};
pub use polars::{any_to_string, format_numeric, frequency_key};
