// gitwrap: thin facade over the git binary
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for process management.
//!
//! ```text
//!        core
//!         |
//!         v
//!      process
//!         |
//!   Builder  Executor
//!   Output   ShellExecutor
//! ```

pub mod process;
