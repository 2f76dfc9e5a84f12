// gitwrap: thin facade over the git binary
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process spawning and management.
//!
//! ```text
//! ShellExecutor::execute("git pull", cwd)
//!   --> ProcessBuilder::raw(..).cwd().capture_output()
//!       .run()  (tokio::process::Command, driven by block_on)
//!           stream stdout/stderr
//!       --> ProcessOutput { exit_code, stdout, stderr }
//! ```

pub mod builder;
pub mod executor;
pub mod output;
mod io;
mod runner;
#[cfg(test)]
mod tests;
