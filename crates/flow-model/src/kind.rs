//! Semantic column kinds.

use polars::prelude::DataType;
use serde::{Deserialize, Serialize};

/// Semantic type of a column, derived from its Polars dtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Signed or unsigned integers.
    Integer,
    /// Floating-point numbers.
    Float,
    /// Text / categorical values.
    Text,
    /// Booleans.
    Boolean,
    /// Anything else (dates, nested types, ...).
    Other,
}

impl ColumnKind {
    /// Classifies a Polars dtype.
    pub fn from_dtype(dtype: &DataType) -> Self {
        if dtype.is_integer() {
            Self::Integer
        } else if dtype.is_float() {
            Self::Float
        } else if matches!(dtype, DataType::String) {
            Self::Text
        } else if matches!(dtype, DataType::Boolean) {
            Self::Boolean
        } else {
            Self::Other
        }
    }

    /// True for integer and floating-point columns.
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    /// Lowercase label used in reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::Boolean => "boolean",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
