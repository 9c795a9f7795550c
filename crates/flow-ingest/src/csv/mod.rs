//! CSV reading utilities.

mod reader;

pub use reader::{CsvOptions, DEFAULT_NULL_VALUES, read_csv_table, validate_encoding};
