// gitwrap: thin facade over the git binary
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                 main.rs
//!                    |
//!          +---------+---------+
//!          v                   v
//!      cli (clap)     config (TOML, env, CLI)
//!          |                   |
//!          +---------+---------+
//!                    v
//!     ,-------------------------------,
//!     |             git               |
//!     |  Git::call(name, args)        |
//!     |  open / clone / pull          |
//!     |  RepositoryHandle, Factory    |
//!     '---------------+---------------'
//!                     |
//!                     v
//!   +-------------------------------------+
//!   |  core::process  Executor, Builder   |
//!   +-------------------------------------+
//!   |  foundation     error, logging      |
//!   +-------------------------------------+
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use gitwrap::core::process::executor::ShellExecutor;
//! use gitwrap::git::Git;
//!
//! let git = Arc::new(Git::new("/usr/bin/git", Arc::new(ShellExecutor::new()?)));
//! let repo = git.clone_repo("https://example.com/r.git", "/tmp/r")?;
//! repo.pull()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod logging;
