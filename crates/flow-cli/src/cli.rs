//! CLI argument definitions for `insightflow`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use flow_clean::Axis;
use flow_inspect::InspectionStrategy;

#[derive(Parser)]
#[command(
    name = "insightflow",
    version,
    about = "Housing dataset preparation: ingest an archive and remediate missing values",
    long_about = "Extract a ZIP archive holding one CSV file, load it as a table,\n\
                  and drop or fill its missing values."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ingest an archive and remediate its missing values.
    Run(RunArgs),

    /// Ingest an archive and print an inspection report.
    Inspect(InspectArgs),

    /// List the remediation strategies.
    Strategies,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Archive to ingest (default: data/archive.zip or the config value).
    #[arg(value_name = "ARCHIVE")]
    pub archive: Option<PathBuf>,

    /// JSON pipeline configuration; flags override its values.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Remediation strategy: drop, mean, median, mode or constant.
    #[arg(long = "strategy", short = 's', value_name = "KEY")]
    pub strategy: Option<String>,

    /// Axis for the drop strategy.
    #[arg(long = "axis", value_enum)]
    pub axis: Option<AxisArg>,

    /// Minimum present cells to keep a row/column (drop strategy).
    #[arg(long = "threshold", value_name = "N")]
    pub threshold: Option<usize>,

    /// Fill value for the constant strategy (integer, float, true/false or text).
    #[arg(long = "fill-value", value_name = "VALUE")]
    pub fill_value: Option<String>,

    /// Directory for per-run extraction directories.
    #[arg(long = "extraction-root", value_name = "DIR")]
    pub extraction_root: Option<PathBuf>,

    /// Write the remediated table to this CSV file.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Archive to ingest (default: data/archive.zip or the config value).
    #[arg(value_name = "ARCHIVE")]
    pub archive: Option<PathBuf>,

    /// JSON pipeline configuration.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report to print.
    #[arg(long = "view", value_enum, default_value = "types")]
    pub view: ViewArg,

    /// Directory for per-run extraction directories.
    #[arg(long = "extraction-root", value_name = "DIR")]
    pub extraction_root: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AxisArg {
    Rows,
    Columns,
}

impl From<AxisArg> for Axis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Rows => Self::Rows,
            AxisArg::Columns => Self::Columns,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ViewArg {
    Types,
    Summary,
    Missing,
}

impl From<ViewArg> for InspectionStrategy {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Types => Self::Types,
            ViewArg::Summary => Self::Summary,
            ViewArg::Missing => Self::Missing,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
