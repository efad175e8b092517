pub mod config;
pub mod layers;

pub use layers::console::ConsoleOutput;

use crate::logging::config::LoggingConfig;
use crate::logging::layers::{console, file};
use crate::Result;
use anyhow::{anyhow, Context};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::Layered;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::Registry;

static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

type BaseRegistry = Registry;
type FileSubscriber = file::FileLayerStack<BaseRegistry>;

/// Fully layered subscriber: file sink, console sink, level filter.
pub type LoggingSubscriber = Layered<EnvFilter, console::ConsoleLayerStack<FileSubscriber>>;

/// Guards that keep logging sinks active for the duration of the command.
pub struct LoggingGuard {
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
    console_output: ConsoleOutput,
    log_file_path: Option<PathBuf>,
}

impl LoggingGuard {
    /// Returns the console output configuration used during initialization.
    pub fn console_output(&self) -> ConsoleOutput {
        self.console_output
    }

    /// Returns the log file path when the file sink is enabled.
    pub fn log_file_path(&self) -> Option<&Path> {
        self.log_file_path.as_deref()
    }
}

/// Build the subscriber without installing it.
///
/// `RUST_LOG` takes precedence over the configured level. Log directories resolve against `base_dir`.
pub fn build(config: &LoggingConfig, base_dir: &Path) -> Result<(LoggingSubscriber, LoggingGuard)> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.default_level))
        .context("failed to configure tracing level")?;

    let log_file_path = file::log_file_path(config, base_dir)?;
    let (file_layer, file_guard) =
        file::file_layer::<BaseRegistry>(&log_file_path, config.enable_file)?;
    let console_layer = console::console_layer::<FileSubscriber>(config.console_output);

    let subscriber = tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .with(env_filter);

    let guard = LoggingGuard {
        _file_guard: file_guard,
        console_output: config.console_output,
        log_file_path: config.enable_file.then_some(log_file_path),
    };
    Ok((subscriber, guard))
}

/// Install the logging subscriber for this process.
///
/// Errors when invoked more than once per process.
pub fn init(config: &LoggingConfig, base_dir: &Path) -> Result<LoggingGuard> {
    if LOGGER_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err(anyhow!("logging already initialized"));
    }

    let (subscriber, guard) = build(config, base_dir)?;
    subscriber
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(guard)
}
