use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info_span;

use flow_clean::{FillValue, StrategyKey};
use flow_cli::config::PipelineConfig;
use flow_cli::pipeline::{PipelineOutcome, inspect_archive, run_pipeline};
use flow_inspect::InspectionReport;

use crate::cli::{InspectArgs, RunArgs};
use crate::summary::apply_table_style;

pub fn run_strategies() {
    let mut table = Table::new();
    table.set_header(vec!["Strategy", "Description"]);
    apply_table_style(&mut table);
    for key in StrategyKey::ALL {
        table.add_row(vec![key.as_str(), key.description()]);
    }
    println!("{table}");
}

pub fn run_run(args: &RunArgs) -> Result<PipelineOutcome> {
    let config = run_config(args)?;
    let span = info_span!("run", strategy = %config.strategy);
    let _guard = span.enter();
    run_pipeline(&config)
}

pub fn run_inspect(args: &InspectArgs) -> Result<InspectionReport> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(archive) = &args.archive {
        config.archive.clone_from(archive);
    }
    if args.extraction_root.is_some() {
        config.extraction_root.clone_from(&args.extraction_root);
    }
    let (_, report) = inspect_archive(&config, args.view.into())?;
    Ok(report)
}

/// Config file values with command-line flags applied on top.
fn run_config(args: &RunArgs) -> Result<PipelineConfig> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(archive) = &args.archive {
        config.archive.clone_from(archive);
    }
    if let Some(strategy) = &args.strategy {
        config.strategy.clone_from(strategy);
    }
    if let Some(axis) = args.axis {
        config.drop.axis = axis.into();
    }
    if args.threshold.is_some() {
        config.drop.threshold = args.threshold;
    }
    if let Some(raw) = &args.fill_value {
        config.fill_value = Some(FillValue::parse(raw));
    }
    if args.extraction_root.is_some() {
        config.extraction_root.clone_from(&args.extraction_root);
    }
    if args.output.is_some() {
        config.output.clone_from(&args.output);
    }
    Ok(config)
}

fn load_config(path: Option<&std::path::Path>) -> Result<PipelineConfig> {
    match path {
        Some(path) => PipelineConfig::load(path).context("load pipeline config"),
        None => Ok(PipelineConfig::default()),
    }
}
