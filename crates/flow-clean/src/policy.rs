//! Remediation policy values.
//!
//! Policies are plain data: built once (usually by
//! [`crate::select_policy`]) and applied by [`crate::remediate`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RemediationError;

/// Direction along which incomplete entries are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Drop rows.
    #[default]
    Rows,
    /// Drop columns.
    Columns,
}

impl Axis {
    /// Lowercase label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rows => "rows",
            Self::Columns => "columns",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = RemediationError;

    /// Accepts `rows`/`row`/`index`/`0` and `columns`/`column`/`1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rows" | "row" | "index" | "0" => Ok(Self::Rows),
            "columns" | "column" | "1" => Ok(Self::Columns),
            _ => Err(RemediationError::InvalidAxis {
                value: s.to_string(),
            }),
        }
    }
}

/// Drop rows or columns that are not complete enough.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropPolicy {
    /// Which entries to drop.
    pub axis: Axis,
    /// Minimum number of present cells an entry needs to be kept. With no
    /// threshold an entry is kept only if it has no missing cells.
    pub threshold: Option<usize>,
}

impl DropPolicy {
    /// Policy for `axis` with no threshold.
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            threshold: None,
        }
    }

    /// Set the present-cell threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: Option<usize>) -> Self {
        self.threshold = threshold;
        self
    }

    /// True if an entry with these counts survives the drop.
    pub fn keeps(&self, present: usize, missing: usize) -> bool {
        match self.threshold {
            Some(threshold) => present >= threshold,
            None => missing == 0,
        }
    }
}

/// How missing cells are filled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FillMethod {
    /// Column mean, numeric columns only.
    Mean,
    /// Column median, numeric columns only.
    Median,
    /// Most frequent present value, every column.
    Mode,
    /// A literal value, every column.
    Constant,
    /// Any other name. Applying it leaves the table unchanged.
    Unrecognized(String),
}

impl FillMethod {
    /// Parses a method name. Unknown names become [`FillMethod::Unrecognized`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "mean" => Self::Mean,
            "median" => Self::Median,
            "mode" => Self::Mode,
            "constant" => Self::Constant,
            _ => Self::Unrecognized(name.to_string()),
        }
    }

    /// Method name.
    pub fn name(&self) -> &str {
        match self {
            Self::Mean => "mean",
            Self::Median => "median",
            Self::Mode => "mode",
            Self::Constant => "constant",
            Self::Unrecognized(name) => name,
        }
    }
}

impl From<String> for FillMethod {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<FillMethod> for String {
    fn from(method: FillMethod) -> Self {
        method.name().to_string()
    }
}

impl fmt::Display for FillMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Literal written into missing cells by [`FillMethod::Constant`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FillValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
}

impl FillValue {
    /// Interprets command-line text: integer, then finite float, then
    /// boolean, otherwise the text itself. `NaN` and `inf` stay text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(v) = trimmed.parse::<i64>() {
            return Self::Integer(v);
        }
        if let Ok(v) = trimmed.parse::<f64>()
            && v.is_finite()
        {
            return Self::Float(v);
        }
        match trimmed {
            "true" => Self::Boolean(true),
            "false" => Self::Boolean(false),
            _ => Self::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for FillValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v:?}"),
        }
    }
}

/// Fill missing cells using `method`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillPolicy {
    /// Fill method.
    pub method: FillMethod,
    /// Literal for [`FillMethod::Constant`]; ignored by other methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_value: Option<FillValue>,
}

impl FillPolicy {
    /// Policy with no fill value.
    pub fn new(method: FillMethod) -> Self {
        Self {
            method,
            fill_value: None,
        }
    }

    /// Constant fill with `value`.
    pub fn constant(value: FillValue) -> Self {
        Self {
            method: FillMethod::Constant,
            fill_value: Some(value),
        }
    }

    /// Set the fill value.
    #[must_use]
    pub fn with_fill_value(mut self, value: Option<FillValue>) -> Self {
        self.fill_value = value;
        self
    }
}

/// A missing-value remediation policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RemediationPolicy {
    Drop(DropPolicy),
    Fill(FillPolicy),
}

impl fmt::Display for RemediationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drop(drop) => {
                write!(f, "drop {}", drop.axis)?;
                if let Some(threshold) = drop.threshold {
                    write!(f, " (threshold {threshold})")?;
                }
                Ok(())
            }
            Self::Fill(fill) => {
                write!(f, "fill {}", fill.method)?;
                if let Some(value) = &fill.fill_value {
                    write!(f, " {value}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_parsing() {
        assert_eq!("rows".parse::<Axis>().unwrap(), Axis::Rows);
        assert_eq!("0".parse::<Axis>().unwrap(), Axis::Rows);
        assert_eq!("Columns".parse::<Axis>().unwrap(), Axis::Columns);
        assert!(matches!(
            "diagonal".parse::<Axis>(),
            Err(RemediationError::InvalidAxis { .. })
        ));
    }

    #[test]
    fn test_drop_keeps() {
        let strict = DropPolicy::new(Axis::Rows);
        assert!(strict.keeps(3, 0));
        assert!(!strict.keeps(2, 1));

        let lenient = DropPolicy::new(Axis::Rows).with_threshold(Some(2));
        assert!(lenient.keeps(2, 1));
        assert!(!lenient.keeps(1, 2));
    }

    #[test]
    fn test_fill_method_names() {
        assert_eq!(FillMethod::from_name("median"), FillMethod::Median);
        assert_eq!(FillMethod::from_name(" MODE "), FillMethod::Mode);
        assert_eq!(
            FillMethod::from_name("interpolate"),
            FillMethod::Unrecognized("interpolate".to_string())
        );
        assert_eq!(FillMethod::Unrecognized("x".into()).name(), "x");
    }

    #[test]
    fn test_fill_value_parse() {
        assert_eq!(FillValue::parse("0"), FillValue::Integer(0));
        assert_eq!(FillValue::parse("2.5"), FillValue::Float(2.5));
        assert_eq!(FillValue::parse("true"), FillValue::Boolean(true));
        assert_eq!(FillValue::parse("None"), FillValue::Text("None".to_string()));
    }

    #[test]
    fn test_fill_value_parse_non_finite_is_text() {
        for raw in ["NaN", "inf", "-infinity"] {
            assert_eq!(FillValue::parse(raw), FillValue::Text(raw.to_string()));
        }
    }

    #[test]
    fn test_fill_value_json() {
        let values: Vec<FillValue> = serde_json::from_str(r#"[3, 3.5, false, "Unknown"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                FillValue::Integer(3),
                FillValue::Float(3.5),
                FillValue::Boolean(false),
                FillValue::Text("Unknown".to_string()),
            ]
        );
    }

    #[test]
    fn test_policy_json() {
        let policy = RemediationPolicy::Fill(FillPolicy::new(FillMethod::Mean));
        let json = serde_json::to_string(&policy).unwrap();
        assert_eq!(json, r#"{"kind":"fill","method":"mean"}"#);

        let parsed: RemediationPolicy =
            serde_json::from_str(r#"{"kind":"drop","axis":"columns","threshold":5}"#).unwrap();
        assert_eq!(
            parsed,
            RemediationPolicy::Drop(DropPolicy::new(Axis::Columns).with_threshold(Some(5)))
        );
    }

    #[test]
    fn test_policy_display() {
        let drop = RemediationPolicy::Drop(DropPolicy::new(Axis::Rows).with_threshold(Some(2)));
        assert_eq!(drop.to_string(), "drop rows (threshold 2)");

        let fill = RemediationPolicy::Fill(FillPolicy::constant(FillValue::Integer(0)));
        assert_eq!(fill.to_string(), "fill constant 0");
    }
}
