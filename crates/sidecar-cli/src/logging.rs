//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Library crates only emit events; the binary decides where they go.
//!
//! # Log Levels
//!
//! - `error`: fatal errors
//! - `warn`: unreadable settings, files that failed inside a batch
//! - `info`: sidecars and word lists written, extraction counts
//! - `debug`: per-file detail (manifest layout, skipped source files)
//! - `trace`: not used

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::Mutex;

use clap::ColorChoice;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::cli::{Cli, LogFormatArg, LogLevelArg};

/// Crates whose events follow the configured level.
const OWN_CRATES: &[&str] = &[
    "sidecar",
    "sidecar_cli",
    "sidecar_ingest",
    "sidecar_model",
    "sidecar_terms",
];

/// Where and how log events are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Level applied to this tool's crates.
    pub level_filter: LevelFilter,
    /// Whether `RUST_LOG` may replace the level filter.
    pub use_env_filter: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Append to this file instead of writing to stderr.
    pub log_file: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

impl LogConfig {
    /// Resolves the logging flags.
    ///
    /// `--log-level` beats `-v/-q`, and either one stops `RUST_LOG` from
    /// overriding the level. Colors follow `--color`; in auto mode they are
    /// only used when logging to a terminal.
    pub fn from_cli(cli: &Cli) -> Self {
        let level_filter = match cli.log_level {
            Some(LogLevelArg::Error) => LevelFilter::ERROR,
            Some(LogLevelArg::Warn) => LevelFilter::WARN,
            Some(LogLevelArg::Info) => LevelFilter::INFO,
            Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
            Some(LogLevelArg::Trace) => LevelFilter::TRACE,
            None => cli.verbosity.tracing_level_filter(),
        };
        let format = match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        let with_ansi = match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
        };

        Self {
            level_filter,
            use_env_filter: !(cli.verbosity.is_present() || cli.log_level.is_some()),
            with_ansi,
            format,
            log_file: cli.log_file.clone(),
        }
    }
}

/// Installs the global tracing subscriber. Call once at startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let layer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            fmt_layer(config, Mutex::new(file))
        }
        None => fmt_layer(config, io::stderr),
    };

    tracing_subscriber::registry()
        .with(layer.with_filter(build_env_filter(config)))
        .init();
    Ok(())
}

/// The formatting layer for `config.format`. Timestamps are left out of the
/// human formats; the target is left out of all of them.
fn fmt_layer<W>(config: &LogConfig, writer: W) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let base = fmt::layer().with_writer(writer).with_target(false);
    match config.format {
        LogFormat::Json => base.json().boxed(),
        LogFormat::Compact => base
            .compact()
            .with_ansi(config.with_ansi)
            .without_time()
            .boxed(),
        LogFormat::Pretty => base.with_ansi(config.with_ansi).without_time().boxed(),
    }
}

/// Default filter directives: our crates at `level`, everything else at
/// `warn` or quieter.
pub fn default_directives(level_filter: LevelFilter) -> String {
    let level = level_filter.to_string().to_lowercase();
    let external = if level_filter > LevelFilter::WARN {
        "warn".to_string()
    } else {
        level.clone()
    };

    let mut directives = vec![external];
    directives.extend(OWN_CRATES.iter().map(|name| format!("{name}={level}")));
    directives.join(",")
}

/// `RUST_LOG` when allowed and set, the default directives otherwise.
fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(default_directives(config.level_filter));
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}
