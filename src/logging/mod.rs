// gitwrap: thin facade over the git binary
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logging built on `tracing`.
//!
//! ```text
//!              registry
//!             /        \
//!     console layer    file layer (when log_file is set)
//!     stderr           non_blocking writer
//!     RUST_LOG or      LevelFilter(file_level)
//!     console_level
//! ```
//!
//! stdout is never written to, so the binary's output stays machine-readable.

mod level;


pub use level::LogLevel;

use anyhow::Context;
use bon::Builder;
use std::fs::File;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::error::Result;

/// What `init_logging` installs.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(default)]
    console_level: LogLevel,
    #[builder(default = LogLevel::Trace)]
    file_level: LogLevel,
    #[builder(into)]
    log_file: Option<PathBuf>,
    #[builder(default)]
    show_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Whether console lines carry the emitting module path.
    #[must_use]
    pub const fn show_target(&self) -> bool {
        self.show_target
    }
}

/// Flushes the file writer on drop. Keep it alive until exit.
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber.
///
/// A set `RUST_LOG` takes precedence over the console level.
///
/// # Errors
///
/// Fails if the log file cannot be created or a global subscriber is
/// already installed.
///
/// # Example
///
/// ```no_run
/// use gitwrap::logging::{init_logging, LogConfig, LogLevel};
///
/// let config = LogConfig::builder()
///     .console_level(LogLevel::Warn)
///     .log_file("gitwrap.log")
///     .build();
/// let _guard = init_logging(&config)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let console_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from(config.console_level()).into())
        .from_env_lossy();

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(config.show_target())
        .with_filter(console_filter);

    let (file, guard) = match config.log_file() {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(create_log_file(path)?);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(LevelFilter::from(config.file_level()));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .try_init()
        .context("failed to install global tracing subscriber")?;

    Ok(LogGuard { _file: guard })
}

fn create_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }
    File::create(path).with_context(|| format!("failed to create log file {}", path.display()))
}
