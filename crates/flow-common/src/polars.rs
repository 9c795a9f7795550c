//! Polars `AnyValue` utility functions.
//!
//! Rendering helpers used when printing tables and keying values for
//! frequency counts.

use polars::prelude::*;

/// Converts a Polars `AnyValue` to a display `String`.
///
/// Returns an empty string for `Null` and formats floats without trailing
/// zeros.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use flow_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int64(42)), "42");
/// assert_eq!(any_to_string(AnyValue::Float64(2.50)), "2.5");
/// assert_eq!(any_to_string(AnyValue::String("Pave")), "Pave");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => {
            let s = other.to_string();
            // Display wraps some values in quotes
            if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
                s[1..s.len() - 1].to_string()
            } else {
                s
            }
        }
    }
}

/// Formats a floating-point number without trailing zeros after the decimal.
///
/// Integer-valued floats like `40.0` render as `"40"`.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

/// Key used to group equal values when counting frequencies.
///
/// Returns `None` for missing cells. The empty string is a present value and
/// keys as `Some("")`. Floats use their `Debug` rendering, which round-trips.
pub fn frequency_key(value: &AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        AnyValue::Float32(v) => Some(format!("{v:?}")),
        AnyValue::Float64(v) => Some(format!("{v:?}")),
        AnyValue::String(s) => Some((*s).to_string()),
        AnyValue::StringOwned(s) => Some(s.to_string()),
        other => Some(any_to_string(other.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_to_string_null() {
        assert_eq!(any_to_string(AnyValue::Null), "");
    }

    #[test]
    fn test_any_to_string_integers() {
        assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
        assert_eq!(any_to_string(AnyValue::Int64(-100)), "-100");
        assert_eq!(any_to_string(AnyValue::UInt32(0)), "0");
    }

    #[test]
    fn test_any_to_string_floats() {
        assert_eq!(any_to_string(AnyValue::Float64(1.5)), "1.5");
        assert_eq!(any_to_string(AnyValue::Float64(1.0)), "1");
        assert_eq!(any_to_string(AnyValue::Float64(215000.0)), "215000");
    }

    #[test]
    fn test_any_to_string_boolean() {
        assert_eq!(any_to_string(AnyValue::Boolean(true)), "true");
        assert_eq!(any_to_string(AnyValue::Boolean(false)), "false");
    }

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(40.0), "40");
        assert_eq!(format_numeric(1000.0), "1000");
        assert_eq!(format_numeric(2.5), "2.5");
        assert_eq!(format_numeric(40.50), "40.5");
    }

    #[test]
    fn test_frequency_key_distinguishes_missing_from_empty() {
        assert_eq!(frequency_key(&AnyValue::Null), None);
        assert_eq!(frequency_key(&AnyValue::String("")), Some(String::new()));
        assert_eq!(
            frequency_key(&AnyValue::String("RL")),
            Some("RL".to_string())
        );
    }

    #[test]
    fn test_frequency_key_floats() {
        assert_eq!(frequency_key(&AnyValue::Float64(2.0)), Some("2.0".to_string()));
        assert_eq!(frequency_key(&AnyValue::Float64(2.5)), Some("2.5".to_string()));
    }
}
