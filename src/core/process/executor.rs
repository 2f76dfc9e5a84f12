// gitwrap: thin facade over the git binary
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Blocking command execution.
//!
//! ```text
//! Git --execute("git clone ...", cwd)--> dyn Executor
//!                                           |
//!                                     ShellExecutor
//!                                           |
//!                          runtime.block_on(ProcessBuilder::raw().run())
//!                                           |
//!                                           v
//!                                     ProcessOutput
//! ```

use std::fmt;
use std::path::Path;

use tokio::runtime::{Builder, Runtime};

use super::builder::ProcessBuilder;
use super::output::ProcessOutput;
use crate::error::ProcessError;

/// Runs a shell command string and reports its outcome.
///
/// A non-zero exit is not an `Err`: it comes back as a [`ProcessOutput`] whose
/// [`has_errors`](ProcessOutput::has_errors) is true. `Err` is reserved for
/// commands that could not be run at all.
pub trait Executor: fmt::Debug + Send + Sync {
    /// Execute `command`, optionally inside `cwd`, blocking until it exits.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the command cannot be spawned or awaited.
    fn execute(&self, command: &str, cwd: Option<&Path>) -> Result<ProcessOutput, ProcessError>;
}

/// Executes commands through the platform shell.
///
/// Owns a current-thread tokio runtime so callers stay synchronous. Must not be
/// called from inside another tokio runtime.
pub struct ShellExecutor {
    runtime: Runtime,
}

impl ShellExecutor {
    /// Creates an executor with its own runtime.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::Runtime` if the runtime cannot be built.
    pub fn new() -> Result<Self, ProcessError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProcessError::Runtime)?;
        Ok(Self { runtime })
    }
}

impl fmt::Debug for ShellExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShellExecutor").finish_non_exhaustive()
    }
}

impl Executor for ShellExecutor {
    fn execute(&self, command: &str, cwd: Option<&Path>) -> Result<ProcessOutput, ProcessError> {
        // git must never sit waiting on a credential prompt
        let mut builder = ProcessBuilder::raw(command)
            .name("git")
            .env("GIT_TERMINAL_PROMPT", "0")
            .env("GCM_INTERACTIVE", "never")
            .capture_output();
        if let Some(dir) = cwd {
            builder = builder.cwd(dir);
        }
        self.runtime.block_on(builder.run())
    }
}
