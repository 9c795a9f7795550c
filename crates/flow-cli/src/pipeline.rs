//! The two-stage data preparation pipeline.
//!
//! 1. **Ingest**: extract the archive and load its CSV file
//! 2. **Remediate**: apply the configured missing-value policy
//!
//! The strategy is resolved before anything is read, so an unknown strategy
//! fails without touching the archive.

use std::fs::File;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, SerWriter};
use tracing::{info, info_span};

use flow_clean::{MissingValueHandler, RemediationPolicy};
use flow_ingest::{IngestOptions, ingestor_for_extension};
use flow_inspect::{InspectionReport, InspectionStrategy, Inspector};
use flow_model::Table;

use crate::config::PipelineConfig;

/// Wall-clock time spent in each stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct StageTimings {
    pub ingest: Duration,
    pub remediate: Duration,
}

/// Tables and metadata produced by [`run_pipeline`].
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// Table as ingested.
    pub before: Table,
    /// Table after remediation.
    pub after: Table,
    pub policy: RemediationPolicy,
    pub timings: StageTimings,
}

/// Runs ingest then remediate, writing the result if an output path is
/// configured.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineOutcome> {
    let policy = config.policy().context("select remediation strategy")?;

    let span = info_span!("pipeline", archive = %config.archive.display());
    let _guard = span.enter();

    let ingest_start = Instant::now();
    let before = ingest_archive(&config.archive, config.ingest_options())?;
    let ingest = ingest_start.elapsed();

    let remediate_start = Instant::now();
    let handler = MissingValueHandler::new(policy);
    let after = handler
        .handle(&before)
        .with_context(|| format!("apply {}", handler.policy()))?;
    let remediate = remediate_start.elapsed();

    info!(
        rows_before = before.row_count(),
        rows_after = after.row_count(),
        missing_before = before.total_missing(),
        missing_after = after.total_missing(),
        ingest_ms = ingest.as_millis(),
        remediate_ms = remediate.as_millis(),
        "Pipeline complete"
    );

    if let Some(output) = &config.output {
        write_csv(&after, output)?;
    }

    Ok(PipelineOutcome {
        before,
        after,
        policy: handler.policy().clone(),
        timings: StageTimings { ingest, remediate },
    })
}

/// Selects an ingestor from the archive's extension and loads the table.
pub fn ingest_archive(archive: &Path, options: IngestOptions) -> Result<Table> {
    let extension = archive
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    let ingestor = ingestor_for_extension(&extension, options)
        .with_context(|| format!("select ingestor for {}", archive.display()))?;
    ingestor
        .ingest(archive)
        .with_context(|| format!("ingest {}", archive.display()))
}

/// Ingests `archive` and inspects it with `strategy`.
pub fn inspect_archive(
    config: &PipelineConfig,
    strategy: InspectionStrategy,
) -> Result<(Table, InspectionReport)> {
    let table = ingest_archive(&config.archive, config.ingest_options())?;
    let report = Inspector::new(strategy)
        .execute(&table)
        .with_context(|| format!("inspect {}", config.archive.display()))?;
    Ok((table, report))
}

/// Writes a table as comma-separated text with a header row. Missing cells
/// are written as empty fields.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("create output {}", path.display()))?;
    let mut df = table.dataframe().clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("write output {}", path.display()))?;
    info!(path = %path.display(), rows = df.height(), "Wrote remediated table");
    Ok(())
}
