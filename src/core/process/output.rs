// gitwrap: thin facade over the git binary
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Result of a finished process.

/// Exit code plus whatever output was captured.
///
/// Captured streams hold the child's bytes as written, line endings
/// included, with invalid UTF-8 replaced by U+FFFD. Streams that were not
/// captured read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    exit_code: i32,
    stdout: String,
    stderr: String,
}

impl ProcessOutput {
    /// Builds an output record. Executors other than the shell one use this
    /// to report results.
    #[must_use]
    pub const fn new(exit_code: i32, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
        }
    }

    /// Exit code 0, nothing captured.
    #[must_use]
    pub const fn ok() -> Self {
        Self::new(0, String::new(), String::new())
    }

    #[must_use]
    pub fn failed(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self::new(exit_code, String::new(), stderr.into())
    }

    /// Exit code, or -1 if the process was killed by a signal.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Whether the command reported failure.
    #[must_use]
    pub const fn has_errors(&self) -> bool {
        !self.success()
    }
}
