// gitwrap: thin facade over the git binary
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! gitwrap [global options] <OPERATION> [ARGS]...
//!   open  PATH
//!   clone URL PATH
//!   pull  PATH
//! ```
//!
//! The operation name is not validated here; it goes to `Git::call` as-is.
//! Global options may appear before or after the operation.

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::Parser;

/// Thin facade over the git binary.
#[derive(Debug, Parser)]
#[command(
    name = "gitwrap",
    author,
    version,
    about = "Thin facade over the git binary",
    long_about = "gitwrap Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Runs a small set of git operations through the git binary.",
    after_help = "OPERATIONS:\n\n\
                  open PATH       Verify PATH is a git working copy\n\
                  clone URL PATH  Clone URL into PATH\n\
                  pull PATH       Pull from the default remote inside PATH"
)]
pub struct Cli {
    /// Global options shared by all operations
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Operation name (open, clone, pull)
    #[arg(value_name = "OPERATION")]
    pub operation: String,

    /// Operation arguments (put values starting with '-' after `--`)
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
