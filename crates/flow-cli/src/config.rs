//! Pipeline configuration loaded from JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use flow_clean::{Axis, FillValue, RemediationConfig, RemediationPolicy, select_policy};
use flow_ingest::{CsvOptions, DEFAULT_NULL_VALUES, IngestOptions};

/// Archive read when none is given.
pub const DEFAULT_ARCHIVE: &str = "data/archive.zip";

/// Strategy used when none is given.
pub const DEFAULT_STRATEGY: &str = "mean";

/// Settings for the `drop` strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DropSettings {
    pub axis: Axis,
    pub threshold: Option<usize>,
}

/// Everything needed to run the ingest → remediate pipeline.
///
/// ```json
/// {
///   "archive": "data/archive.zip",
///   "strategy": "constant",
///   "fill_value": 0,
///   "null_values": ["NA", ""]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub archive: PathBuf,
    /// Remediation strategy key.
    pub strategy: String,
    pub drop: DropSettings,
    /// Literal for the `constant` strategy.
    pub fill_value: Option<FillValue>,
    /// Parent of per-run extraction directories (system temp dir if unset).
    pub extraction_root: Option<PathBuf>,
    /// Tokens read as missing cells, in addition to empty fields.
    pub null_values: Vec<String>,
    /// Write the remediated table here as CSV.
    pub output: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            archive: PathBuf::from(DEFAULT_ARCHIVE),
            strategy: DEFAULT_STRATEGY.to_string(),
            drop: DropSettings::default(),
            fill_value: None,
            extraction_root: None,
            null_values: DEFAULT_NULL_VALUES.iter().map(|s| (*s).to_string()).collect(),
            output: None,
        }
    }
}

impl PipelineConfig {
    /// Reads a JSON configuration file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parse config {}", path.display()))
    }

    /// Parses a JSON configuration string.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parameters passed to the strategy selector.
    pub fn remediation_config(&self) -> RemediationConfig {
        RemediationConfig::default()
            .with_axis(self.drop.axis)
            .with_threshold(self.drop.threshold)
            .with_fill_value(self.fill_value.clone())
    }

    /// Resolves the configured strategy into a policy.
    pub fn policy(&self) -> flow_clean::Result<RemediationPolicy> {
        select_policy(&self.strategy, &self.remediation_config())
    }

    /// Options for the archive ingestor.
    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions::default()
            .with_extraction_root(self.extraction_root.clone())
            .with_csv(CsvOptions::default().with_null_values(self.null_values.clone()))
    }
}
