// gitwrap: thin facade over the git binary
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Description of a child process before it is spawned.
//!
//! ```text
//! ProcessBuilder::new(program) | ::raw("shell line")
//!   .arg/.args/.cwd/.env/.name
//!   .capture_output
//!   .run().await  (runner.rs)
//!
//! StreamFlags per stream:  LOG      trace each line
//!                          CAPTURE  keep the bytes in ProcessOutput
//!
//! Both streams are always piped and read to EOF. A non-zero exit is
//! reported through ProcessOutput, never as an error.
//! ```

use bitflags::bitflags;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, PoisonError};

#[cfg(not(windows))]
const SHELL: (&str, &[&str]) = ("/bin/sh", &["-c"]);
#[cfg(windows)]
const SHELL: (&str, &[&str]) = ("pwsh", &["-NoProfile", "-NonInteractive", "-Command"]);

/// PATH lookups by program name, misses included.
static LOOKUPS: LazyLock<Mutex<HashMap<String, Option<PathBuf>>>> = LazyLock::new(Mutex::default);

bitflags! {
    /// Handling of one output stream.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StreamFlags: u8 {
        /// Emit every line as a trace event.
        const LOG = 1 << 0;
        /// Keep the text in `ProcessOutput`.
        const CAPTURE = 1 << 1;
    }
}

impl Default for StreamFlags {
    fn default() -> Self {
        Self::LOG
    }
}

#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<OsString>,
    cwd: Option<PathBuf>,
    /// Added on top of the inherited environment.
    env: Vec<(OsString, OsString)>,
    stdout: StreamFlags,
    stderr: StreamFlags,
    name: Option<String>,
}

impl ProcessBuilder {
    /// `program` may be a path or a bare name; bare names are resolved by the
    /// OS at spawn time.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            env: Vec::new(),
            stdout: StreamFlags::default(),
            stderr: StreamFlags::default(),
            name: None,
        }
    }

    /// Runs `line` through the platform shell: `/bin/sh -c` on Unix,
    /// `pwsh -Command` on Windows.
    pub fn raw(line: impl Into<OsString>) -> Self {
        let (shell, prefix) = SHELL;
        Self::new(shell).args(prefix.iter().copied()).arg(line)
    }

    /// Full path of `program` in PATH. Results are cached per name.
    #[must_use]
    pub fn find(program: &str) -> Option<PathBuf> {
        let mut lookups = LOOKUPS.lock().unwrap_or_else(PoisonError::into_inner);
        lookups
            .entry(program.to_string())
            .or_insert_with(|| which::which(program).ok())
            .clone()
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    #[must_use]
    pub fn env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Keep both streams in the output, still logging them.
    #[must_use]
    pub const fn capture_output(mut self) -> Self {
        self.stdout = StreamFlags::LOG.union(StreamFlags::CAPTURE);
        self.stderr = StreamFlags::LOG.union(StreamFlags::CAPTURE);
        self
    }

    /// Label used in log events instead of the program's file stem.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    pub(super) fn arguments(&self) -> &[OsString] {
        &self.args
    }

    pub(super) fn working_dir(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    pub(super) fn env_vars(&self) -> &[(OsString, OsString)] {
        &self.env
    }

    pub(super) const fn stdout_flags(&self) -> StreamFlags {
        self.stdout
    }

    pub(super) const fn stderr_flags(&self) -> StreamFlags {
        self.stderr
    }

    pub(super) fn label(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
