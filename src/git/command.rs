// gitwrap: thin facade over the git binary
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Supported git operations.
//!
//! ```text
//! "clone" + [url, path] --Command::from_str--> Command::Clone
//!                       --Invocation::parse--> Invocation::Clone { url, path }
//! "init"                --> GitError::Unsupported
//! "pull" + []           --> GitError::InvalidArguments
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::repository::RepositoryHandle;
use crate::error::GitError;

/// The closed set of operations the dispatcher recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Open an existing working copy.
    Open,
    /// Clone a remote into a local path, then open it.
    Clone,
    /// Pull from the default remote inside a working copy.
    Pull,
}

impl Command {
    /// Every recognized command, in documentation order.
    pub const ALL: [Self; 3] = [Self::Open, Self::Clone, Self::Pull];

    /// The git-facing operation name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Clone => "clone",
            Self::Pull => "pull",
        }
    }

    /// Number of arguments the operation takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Open | Self::Pull => 1,
            Self::Clone => 2,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = GitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "clone" => Ok(Self::Clone),
            "pull" => Ok(Self::Pull),
            _ => Err(GitError::Unsupported {
                command: s.to_string(),
            }),
        }
    }
}

/// A command bound to its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// `open PATH`
    Open {
        /// Working copy to open.
        path: PathBuf,
    },
    /// `clone URL PATH`
    Clone {
        /// Remote passed to `git clone` verbatim.
        url: String,
        /// Destination directory.
        path: PathBuf,
    },
    /// `pull PATH`
    Pull {
        /// Working copy to pull inside.
        path: PathBuf,
    },
}

impl Invocation {
    /// Resolves an operation name and its positional arguments.
    ///
    /// # Errors
    ///
    /// Returns `GitError::Unsupported` for unknown names and
    /// `GitError::InvalidArguments` when the argument count is wrong.
    pub fn parse<S: AsRef<str>>(name: &str, args: &[S]) -> Result<Self, GitError> {
        let command: Command = name.parse()?;
        match (command, args) {
            (Command::Open, [path]) => Ok(Self::Open {
                path: PathBuf::from(path.as_ref()),
            }),
            (Command::Clone, [url, path]) => Ok(Self::Clone {
                url: url.as_ref().to_string(),
                path: PathBuf::from(path.as_ref()),
            }),
            (Command::Pull, [path]) => Ok(Self::Pull {
                path: PathBuf::from(path.as_ref()),
            }),
            (command, args) => Err(GitError::InvalidArguments {
                command: command.to_string(),
                expected: command.arity(),
                got: args.len(),
            }),
        }
    }

    /// The command this invocation runs.
    #[must_use]
    pub const fn command(&self) -> Command {
        match self {
            Self::Open { .. } => Command::Open,
            Self::Clone { .. } => Command::Clone,
            Self::Pull { .. } => Command::Pull,
        }
    }
}

/// Result of a dispatched operation.
#[derive(Debug)]
pub enum CallOutcome {
    /// `open` and `clone` hand back a repository.
    Repository(Box<dyn RepositoryHandle>),
    /// `pull` returns nothing.
    Done,
}

impl CallOutcome {
    /// Borrow the repository, if the operation produced one.
    #[must_use]
    pub fn repository(&self) -> Option<&dyn RepositoryHandle> {
        match self {
            Self::Repository(repo) => Some(repo.as_ref()),
            Self::Done => None,
        }
    }

    /// Take the repository, if the operation produced one.
    #[must_use]
    pub fn into_repository(self) -> Option<Box<dyn RepositoryHandle>> {
        match self {
            Self::Repository(repo) => Some(repo),
            Self::Done => None,
        }
    }
}
