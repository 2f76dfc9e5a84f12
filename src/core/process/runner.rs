// gitwrap: thin facade over the git binary
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Spawning and exit-status handling.
//!
//! ```text
//! run()
//!   to_command()  args, cwd, env, stdin=null, stdout/stderr piped
//!   spawn()       --> SpawnFailed
//!   drain()       readers + wait  --> OutputError
//!   ProcessOutput (any exit code)
//! ```

use std::ffi::OsString;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, trace};

use super::builder::ProcessBuilder;
use super::output::ProcessOutput;
use crate::error::ProcessError;

impl ProcessBuilder {
    /// Spawns the process and waits for it, draining piped output.
    ///
    /// # Errors
    ///
    /// `SpawnFailed` if the child cannot start, `OutputError` if waiting on it
    /// fails. A non-zero exit is not an error.
    pub async fn run(self) -> Result<ProcessOutput, ProcessError> {
        let name = self.display_name();
        let line = self.command_line();
        match self.working_dir() {
            Some(cwd) => debug!(cmd = %line, cwd = %cwd.display(), "exec"),
            None => debug!(cmd = %line, "exec"),
        }

        let mut child = self
            .to_command()
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: line.clone(),
                source,
            })?;
        trace!(process = %name, pid = ?child.id(), "spawned");

        let output = self
            .drain(&name, &mut child)
            .await
            .map_err(|e| ProcessError::OutputError {
                command: line,
                message: e.to_string(),
            })?;
        trace!(process = %name, exit_code = output.exit_code(), "exited");
        Ok(output)
    }

    /// The command line as it would be typed, for log output.
    pub(super) fn command_line(&self) -> String {
        std::iter::once(self.program().as_os_str())
            .chain(self.arguments().iter().map(OsString::as_os_str))
            .map(|part| {
                let part = part.to_string_lossy();
                if part.contains(char::is_whitespace) {
                    format!("\"{part}\"")
                } else {
                    part.into_owned()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn display_name(&self) -> String {
        self.label()
            .map(str::to_owned)
            .or_else(|| {
                self.program()
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| "process".to_string())
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command
            .args(self.arguments())
            .envs(self.env_vars().iter().map(|(key, value)| (key, value)))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }
        command
    }
}
