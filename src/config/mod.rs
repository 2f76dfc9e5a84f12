// gitwrap: thin facade over the git binary
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for gitwrap.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. local gitwrap.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. GITWRAP_* env vars
//! 5. CLI overrides (--git, --log-level, --log-file)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GITWRAP_GIT__BINARY=/usr/bin/git  → git.binary
//! GITWRAP_LOG__LEVEL=4              → log.level
//! GITWRAP_LOG__FILE_LEVEL=5         → log.file_level
//! GITWRAP_LOG__SHOW_TARGET=true     → log.show_target
//! ```

pub mod loader;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::process::builder::ProcessBuilder;
use crate::core::process::executor::Executor;
use crate::error::{ConfigError, Result};
use crate::git::GitConfig;
use crate::logging::{LogConfig, LogLevel};

use loader::ConfigLoader;

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Git binary settings.
    pub git: GitSettings,
    /// Logging settings.
    pub log: LogSettings,
}

/// `[git]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitSettings {
    /// Git executable: a bare name looked up in PATH, or a path used as-is.
    pub binary: String,
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            binary: "git".to_string(),
        }
    }
}

/// `[log]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    /// Console log level (0-5).
    pub level: LogLevel,
    /// File log level, defaults to `level`.
    pub file_level: Option<LogLevel>,
    /// Log file path.
    pub file: Option<PathBuf>,
    /// Prefix console lines with the emitting module path.
    pub show_target: bool,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gitwrap::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("gitwrap.toml")
    ///     .with_env_prefix("GITWRAP")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate values that deserialization alone cannot check.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `git.binary` is blank.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.git.binary.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "git".to_string(),
                key: "binary".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Resolve `git.binary` to the executable path.
    ///
    /// Values containing a path separator are used verbatim; bare names are
    /// looked up in PATH.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::GitNotFound` if a bare name is not in PATH.
    pub fn git_binary(&self) -> std::result::Result<PathBuf, ConfigError> {
        let binary = Path::new(&self.git.binary);
        if binary.components().count() > 1 || binary.is_absolute() {
            return Ok(binary.to_path_buf());
        }
        ProcessBuilder::find(&self.git.binary)
            .ok_or_else(|| ConfigError::GitNotFound(self.git.binary.clone()))
    }

    /// Dispatcher configuration for the given executor.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the git binary cannot be resolved.
    pub fn git_config(
        &self,
        executor: Arc<dyn Executor>,
    ) -> std::result::Result<GitConfig, ConfigError> {
        Ok(GitConfig::builder()
            .binary(self.git_binary()?)
            .executor(executor)
            .build())
    }

    /// Logging configuration derived from `[log]`.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig::builder()
            .console_level(self.log.level)
            .file_level(self.log.file_level.unwrap_or(self.log.level))
            .maybe_log_file(self.log.file.clone())
            .show_target(self.log.show_target)
            .build()
    }
}
