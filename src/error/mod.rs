// gitwrap: thin facade over the git binary
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                 GitError
//!                    |
//!   +--------+-------+-------+--------+--------+
//!   |        |       |       |        |        |
//!   v        v       v       v        v        v
//! RepoNot  Unsup- Invalid  Clone    Pull    Process
//! Found    ported  Args    Failed   Failed  (spawn/wait)
//!
//! ConfigError   config loading / validation
//! Result<T>     anyhow, application boundary
//! ```
//!
//! Three families matter to callers: "no repository here" (`RepoNotFound`),
//! "not an operation we know" (`Unsupported`), and "git itself failed"
//! (`CloneFailed` / `PullFailed`, carrying stderr verbatim).

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`GitError`].
pub type GitResult<T> = std::result::Result<T, GitError>;

// --- Git Errors ---

/// Errors raised by the git dispatcher and repository handles.
#[derive(Debug, Error)]
pub enum GitError {
    /// No `.git` entry exists under the path.
    #[error("No Git repository found at {path}")]
    RepoNotFound { path: String },

    /// Operation name outside the recognized set.
    #[error("'git {command}' is not supported")]
    Unsupported { command: String },

    /// Operation called with the wrong number of arguments.
    #[error("'git {command}' expects {expected} argument(s), got {got}")]
    InvalidArguments {
        command: String,
        expected: usize,
        got: usize,
    },

    /// `git clone` reported an error.
    #[error("Failed to clone {url}: {stderr}")]
    CloneFailed { url: String, stderr: String },

    /// `git pull` reported an error.
    #[error("Failed to pull {path}: {stderr}")]
    PullFailed { path: String, stderr: String },

    /// The executor could not run the command at all.
    #[error(transparent)]
    Process(#[from] ProcessError),
}

impl GitError {
    /// Build a [`GitError::RepoNotFound`] for a path.
    pub fn repo_not_found(path: &std::path::Path) -> Self {
        Self::RepoNotFound {
            path: path.display().to_string(),
        }
    }

    /// True if the path simply isn't a repository (yet).
    #[must_use]
    pub const fn is_repo_not_found(&self) -> bool {
        matches!(self, Self::RepoNotFound { .. })
    }

    /// True if the operation name was rejected by the dispatcher.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }

    /// True if git ran and reported an error state.
    #[must_use]
    pub const fn is_command_failure(&self) -> bool {
        matches!(self, Self::CloneFailed { .. } | Self::PullFailed { .. })
    }

    /// Captured standard error of the failed git command, if any.
    #[must_use]
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::CloneFailed { stderr, .. } | Self::PullFailed { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to wait for the process or read its output.
    #[error("failed to read output from process '{command}': {message}")]
    OutputError { command: String, message: String },

    /// Async runtime backing the executor could not be created.
    #[error("failed to start process runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configured git binary could not be resolved.
    #[error("git binary '{0}' not found in PATH")]
    GitNotFound(String),
}
