//! Logging setup on `tracing` and `tracing-subscriber`.
//!
//! The library reports progress through the `clean`, `load`, `strip` and
//! `save` spans. Only paths and counts are logged, never record values.
//!
//! # Log Levels
//!
//! - `error`: The run failed
//! - `warn`: Non-fatal issues (default)
//! - `info`: Stage completion with record counts and durations
//! - `debug`: File-level details such as bytes written

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Whether `RUST_LOG` may override `level_filter`.
    pub use_env_filter: bool,
    pub with_timestamps: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// When set, logs are appended to this file instead of stderr.
    pub log_file: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-field lines.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// One JSON object per event, with span close events.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_timestamps: false,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

/// Install the global subscriber described by `config`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let filter = build_env_filter(config);
    let registry = tracing_subscriber::registry().with(filter);
    let installed = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            registry
                .with(format_layer(config, Mutex::new(file)))
                .try_init()
        }
        None => registry.with(format_layer(config, io::stderr)).try_init(),
    };
    installed.map_err(io::Error::other)
}

/// Build the formatting layer for `config`, writing through `writer`.
fn format_layer<S, W>(config: &LogConfig, writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(false)
        .with_ansi(config.with_ansi && config.format != LogFormat::Json);
    match (config.format, config.with_timestamps) {
        (LogFormat::Json, _) => layer.json().with_span_events(FmtSpan::CLOSE).boxed(),
        (LogFormat::Compact, true) => layer.compact().boxed(),
        (LogFormat::Compact, false) => layer.compact().without_time().boxed(),
        (LogFormat::Pretty, true) => layer.boxed(),
        (LogFormat::Pretty, false) => layer.without_time().boxed(),
    }
}

/// Filter directives: dependencies stay at warn, our crates follow `level`.
pub fn default_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    format!("warn,record_clean={level},record_clean_cli={level}")
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let env = if config.use_env_filter {
        EnvFilter::try_from_default_env().ok()
    } else {
        None
    };
    env.unwrap_or_else(|| EnvFilter::new(default_directives(config.level_filter)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(
            default_directives(LevelFilter::DEBUG),
            "warn,record_clean=debug,record_clean_cli=debug"
        );
        assert_eq!(
            default_directives(LevelFilter::OFF),
            "warn,record_clean=off,record_clean_cli=off"
        );
    }

    // Installs the process-wide subscriber; keep this the only test that does.
    #[test]
    fn test_init_logging_appends_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clean.log");
        std::fs::write(&path, "earlier run\n").unwrap();
        let config = LogConfig {
            level_filter: LevelFilter::INFO,
            use_env_filter: false,
            with_ansi: false,
            format: LogFormat::Json,
            log_file: Some(path.clone()),
            ..LogConfig::default()
        };

        init_logging(&config).unwrap();
        tracing::info!(record_count = 3, "load complete");
        tracing::debug!("filtered out");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("earlier run\n"));
        assert!(contents.contains("\"record_count\":3"));
        assert!(contents.contains("load complete"));
        assert!(!contents.contains("filtered out"));
        assert!(init_logging(&config).is_err());
    }
}
