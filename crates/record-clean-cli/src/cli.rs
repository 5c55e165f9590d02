//! CLI argument definitions for the record cleaner.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use record_clean::{CleanConfig, DEFAULT_DEST_PATH, DEFAULT_SOURCE_PATH, OutputStyle};
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "record-clean",
    version,
    about = "Strip the alternatenames field from every record in a JSON file",
    long_about = "Read a JSON array of records, remove the alternatenames field from each \
                  record, and write the cleaned array to a new file.\n\n\
                  With no arguments, reads enriched_cities.json and writes \
                  enriched_cities_clean.json in the current directory."
)]
pub struct Cli {
    /// Source file containing a JSON array of records.
    #[arg(long = "input", value_name = "PATH", default_value = DEFAULT_SOURCE_PATH)]
    pub input: PathBuf,

    /// Destination file for the cleaned records (created or replaced).
    #[arg(long = "output", value_name = "PATH", default_value = DEFAULT_DEST_PATH)]
    pub output: PathBuf,

    /// Indent the written JSON instead of emitting a single line.
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp (pretty and compact formats).
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,
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

/// Build the cleaning configuration from CLI flags.
pub fn clean_config_from_cli(cli: &Cli) -> CleanConfig {
    CleanConfig::default()
        .with_source(&cli.input)
        .with_destination(&cli.output)
        .with_output_style(if cli.pretty {
            OutputStyle::Pretty
        } else {
            OutputStyle::Compact
        })
}

/// Build logging configuration from CLI flags.
///
/// An explicit `--log-level` wins over `-v`/`-q`; either one disables the
/// `RUST_LOG` override.
pub fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let explicit = cli.log_level.map(LevelFilter::from);
    LogConfig {
        level_filter: explicit.unwrap_or_else(|| cli.verbosity.tracing_level_filter()),
        use_env_filter: explicit.is_none() && !cli.verbosity.is_present(),
        with_timestamps: cli.log_timestamps,
        with_ansi: ansi_enabled(cli.color.color, cli.log_file.is_some()),
        format: cli.log_format.into(),
        log_file: cli.log_file.clone(),
    }
}

fn ansi_enabled(choice: ColorChoice, to_file: bool) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => !to_file && io::stderr().is_terminal(),
    }
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
