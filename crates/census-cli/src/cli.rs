//! CLI argument definitions for the census refinement tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "census-refine",
    version,
    about = "Census Data Refinement - validate, clean, and summarize survey records",
    long_about = "Validate a raw census/survey CSV against a JSON data dictionary,\n\
                  remove duplicate records, quarantine invalid rows, and produce\n\
                  label-annotated frequency tables, cross-tabulations, and charts."
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

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Tee logs to a file in addition to standard output.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Refine a raw record file against a data dictionary.
    Refine(RefineArgs),

    /// Summarize a refined record file: counts, cross-tabs, charts.
    Report(ReportArgs),
}

#[derive(Parser)]
pub struct RefineArgs {
    /// Path to the raw CSV data file.
    #[arg(value_name = "INPUT")]
    pub input_file: PathBuf,

    /// Path to save the refined CSV data file.
    #[arg(value_name = "OUTPUT")]
    pub output_file: PathBuf,

    /// Path to the data dictionary JSON file.
    #[arg(value_name = "DICTIONARY")]
    pub dictionary_file: PathBuf,

    /// Also persist rejected records to this path (skipped when none).
    #[arg(long = "removed-output", value_name = "PATH")]
    pub removed_output: Option<PathBuf>,

    /// Identifier column used for duplicate detection.
    #[arg(
        long = "id-column",
        value_name = "COLUMN",
        default_value = census_model::DEFAULT_ID_COLUMN
    )]
    pub id_column: String,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to the refined CSV data file.
    #[arg(value_name = "INPUT")]
    pub input_file: PathBuf,

    /// Path to the data dictionary JSON file.
    #[arg(value_name = "DICTIONARY")]
    pub dictionary_file: PathBuf,

    /// Column to summarize.
    #[arg(long = "column", value_name = "COLUMN")]
    pub column: String,

    /// Cross-tabulate the summarized column against this second column.
    #[arg(long = "by", value_name = "COLUMN")]
    pub by: Option<String>,

    /// Restrict rows by this column before summarizing.
    #[arg(long = "filter-column", value_name = "COLUMN", requires = "filter_codes")]
    pub filter_column: Option<String>,

    /// Acceptable codes for the filter column (comma-separated).
    #[arg(
        long = "filter-codes",
        value_name = "CODES",
        value_delimiter = ',',
        requires = "filter_column"
    )]
    pub filter_codes: Vec<String>,

    /// Render the distribution to this PNG path.
    #[arg(long = "chart", value_name = "PNG")]
    pub chart: Option<PathBuf>,

    /// Chart style for --chart.
    #[arg(long = "chart-kind", value_enum, default_value = "bar")]
    pub chart_kind: ChartKindArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ChartKindArg {
    Bar,
    Pie,
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
