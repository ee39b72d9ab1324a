//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr (or a file), never to stdout, so the report line stays
//! the only thing a caller has to parse.
//!
//! # Log Levels
//!
//! - `error`: load or parse failures
//! - `warn`: default; quiet on success
//! - `info`: pipeline stage progress
//! - `debug`: table shape and counting details
//! - `trace`: everything else

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Maximum level emitted by the workspace crates.
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` replace the computed filter when it is set.
    pub use_env_filter: bool,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
    /// Output format.
    pub format: LogFormat,
    /// Optional log file path. When set, logs are appended to the file.
    pub log_file: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

/// Install the global tracing subscriber described by `config`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        install(config, SharedFileWriter::new(file));
    } else {
        install(config, io::stderr);
    }
    Ok(())
}

fn install<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = build_env_filter(config.level_filter, config.use_env_filter);
    // Pretty and compact are terminal formats; timestamps only in JSON.
    let layer = match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(writer)
            .with_target(false)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_writer(writer)
            .with_ansi(config.with_ansi)
            .with_target(false)
            .without_time()
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_writer(writer)
            .with_ansi(config.with_ansi)
            .with_target(false)
            .without_time()
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .init();
}

/// Appends log lines from any thread to one open file.
#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<File>>,
}

impl SharedFileWriter {
    fn new(file: File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

struct SharedFileGuard {
    file: Arc<Mutex<File>>,
}

impl SharedFileGuard {
    fn with_file<T>(&self, op: impl FnOnce(&mut File) -> io::Result<T>) -> io::Result<T> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        op(&mut file)
    }
}

impl Write for SharedFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.with_file(|file| file.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.with_file(Write::flush)
    }
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
    type Writer = SharedFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        SharedFileGuard {
            file: Arc::clone(&self.file),
        }
    }
}

/// Directive string for the workspace crates at `level`; other crates stay at warn.
fn default_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    format!("warn,orders_cli={level},orders_ingest={level},orders_stats={level}")
}

fn build_env_filter(level: LevelFilter, use_env_filter: bool) -> EnvFilter {
    if use_env_filter {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return filter;
        }
    }
    EnvFilter::new(default_directives(level))
}
