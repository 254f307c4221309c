//! CLI argument definitions for the BAAC normalizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use baac_cli::logging::LogFormat;
use baac_model::{InputEncoding, RecordKind};

#[derive(Parser)]
#[command(
    name = "baac",
    version,
    about = "Normalize BAAC road-accident tables",
    long_about = "Normalize the four tables of a BAAC road-accident export \
                  (caracteristiques, usagers, lieux, vehicules).\n\n\
                  Sentinel values are cleared, coded fields are checked against \
                  their code lists and dates are assembled from their parts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
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
    /// Normalize the source tables and write the NEW_* files.
    Run(RunArgs),

    /// List the output columns of each record kind and their rules.
    Kinds,
}

#[derive(Parser)]
pub struct RunArgs {
    /// TOML run configuration.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the source files under their export names.
    #[arg(long = "input-dir", value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Directory for the NEW_* files (default: the input directory).
    #[arg(long = "output-dir", value_name = "DIR", requires = "input_dir")]
    pub output_dir: Option<PathBuf>,

    /// Dataset year.
    #[arg(long = "year")]
    pub year: Option<i32>,

    /// Only process these record kinds (repeatable).
    #[arg(long = "kind", value_enum)]
    pub kinds: Vec<KindArg>,

    /// Leave rows that fail to normalize out of the output instead of
    /// stopping the pass.
    #[arg(long = "skip-invalid-rows")]
    pub skip_invalid_rows: bool,

    /// Character encoding of the source files.
    #[arg(long = "encoding", value_enum)]
    pub encoding: Option<EncodingArg>,

    /// Write a JSON run report to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Characteristics,
    Persons,
    Locations,
    Vehicles,
}

impl From<KindArg> for RecordKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Characteristics => RecordKind::Characteristics,
            KindArg::Persons => RecordKind::Persons,
            KindArg::Locations => RecordKind::Locations,
            KindArg::Vehicles => RecordKind::Vehicles,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum EncodingArg {
    #[value(name = "utf-8")]
    Utf8,
    #[value(name = "latin-1")]
    Latin1,
}

impl From<EncodingArg> for InputEncoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Utf8 => InputEncoding::Utf8,
            EncodingArg::Latin1 => InputEncoding::Latin1,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
