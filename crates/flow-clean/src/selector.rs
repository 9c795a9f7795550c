//! Mapping declarative strategy keys to remediation policies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RemediationError, Result};
use crate::policy::{Axis, DropPolicy, FillMethod, FillPolicy, FillValue, RemediationPolicy};

/// Strategy keys accepted by [`select_policy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKey {
    Drop,
    Mean,
    Median,
    Mode,
    Constant,
}

impl StrategyKey {
    /// Every key, in display order.
    pub const ALL: &'static [Self] = &[
        Self::Drop,
        Self::Mean,
        Self::Median,
        Self::Mode,
        Self::Constant,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Drop => "drop",
            Self::Mean => "mean",
            Self::Median => "median",
            Self::Mode => "mode",
            Self::Constant => "constant",
        }
    }

    /// One-line description for help output.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Drop => "drop rows or columns with missing cells",
            Self::Mean => "fill numeric columns with their mean",
            Self::Median => "fill numeric columns with their median",
            Self::Mode => "fill every column with its most frequent value",
            Self::Constant => "fill every column with a fixed value",
        }
    }
}

impl fmt::Display for StrategyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKey {
    type Err = RemediationError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| RemediationError::InvalidStrategy {
                name: s.to_string(),
            })
    }
}

/// Parameters that accompany a strategy key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemediationConfig {
    /// Drop axis, used by `drop`.
    pub axis: Axis,
    /// Present-cell threshold, used by `drop`.
    pub threshold: Option<usize>,
    /// Literal, required by `constant`.
    pub fill_value: Option<FillValue>,
}

impl RemediationConfig {
    #[must_use]
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: Option<usize>) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_fill_value(mut self, fill_value: Option<FillValue>) -> Self {
        self.fill_value = fill_value;
        self
    }
}

/// Builds the policy named by `key`.
///
/// Unknown keys fail with [`RemediationError::InvalidStrategy`] before any
/// table is touched.
///
/// # Examples
///
/// ```
/// use flow_clean::{RemediationConfig, RemediationPolicy, select_policy};
///
/// let policy = select_policy("median", &RemediationConfig::default()).unwrap();
/// assert!(matches!(policy, RemediationPolicy::Fill(_)));
/// assert!(select_policy("bogus", &RemediationConfig::default()).is_err());
/// ```
pub fn select_policy(key: &str, config: &RemediationConfig) -> Result<RemediationPolicy> {
    let key: StrategyKey = key.parse()?;
    policy_for(key, config)
}

/// Builds the policy for an already-parsed key.
pub fn policy_for(key: StrategyKey, config: &RemediationConfig) -> Result<RemediationPolicy> {
    let policy = match key {
        StrategyKey::Drop => RemediationPolicy::Drop(
            DropPolicy::new(config.axis).with_threshold(config.threshold),
        ),
        StrategyKey::Mean => RemediationPolicy::Fill(FillPolicy::new(FillMethod::Mean)),
        StrategyKey::Median => RemediationPolicy::Fill(FillPolicy::new(FillMethod::Median)),
        StrategyKey::Mode => RemediationPolicy::Fill(FillPolicy::new(FillMethod::Mode)),
        StrategyKey::Constant => {
            let value = config
                .fill_value
                .clone()
                .ok_or(RemediationError::MissingFillValue)?;
            RemediationPolicy::Fill(FillPolicy::constant(value))
        }
    };
    tracing::debug!(%key, %policy, "Selected remediation policy");
    Ok(policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_round_trips() {
        for key in StrategyKey::ALL {
            assert_eq!(key.to_string().parse::<StrategyKey>().unwrap(), *key);
        }
        assert_eq!(" MEAN ".parse::<StrategyKey>().unwrap(), StrategyKey::Mean);
    }

    #[test]
    fn test_bogus_key_rejected() {
        let result = select_policy("bogus", &RemediationConfig::default());
        match result {
            Err(RemediationError::InvalidStrategy { name }) => assert_eq!(name, "bogus"),
            other => panic!("expected invalid strategy, got {other:?}"),
        }
    }

    #[test]
    fn test_drop_uses_config() {
        let config = RemediationConfig::default()
            .with_axis(Axis::Columns)
            .with_threshold(Some(10));
        let policy = select_policy("drop", &config).unwrap();
        assert_eq!(
            policy,
            RemediationPolicy::Drop(DropPolicy::new(Axis::Columns).with_threshold(Some(10)))
        );
    }

    #[test]
    fn test_fill_keys() {
        let config = RemediationConfig::default();
        assert_eq!(
            select_policy("mode", &config).unwrap(),
            RemediationPolicy::Fill(FillPolicy::new(FillMethod::Mode))
        );
        assert_eq!(
            select_policy("median", &config).unwrap(),
            RemediationPolicy::Fill(FillPolicy::new(FillMethod::Median))
        );
    }

    #[test]
    fn test_constant_needs_fill_value() {
        let result = select_policy("constant", &RemediationConfig::default());
        assert!(matches!(result, Err(RemediationError::MissingFillValue)));

        let config = RemediationConfig::default().with_fill_value(Some(FillValue::Integer(0)));
        assert_eq!(
            select_policy("constant", &config).unwrap(),
            RemediationPolicy::Fill(FillPolicy::constant(FillValue::Integer(0)))
        );
    }

    #[test]
    fn test_config_from_json() {
        let config: RemediationConfig =
            serde_json::from_str(r#"{"axis": "columns", "fill_value": "Unknown"}"#).unwrap();
        assert_eq!(config.axis, Axis::Columns);
        assert_eq!(config.threshold, None);
        assert_eq!(config.fill_value, Some(FillValue::Text("Unknown".to_string())));
    }
}
