// gitwrap: thin facade over the git binary
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git dispatcher.
//!
//! ```text
//!   Git::call("clone", [url, path])
//!            |
//!            v
//!   Invocation::parse ---- unknown name --> Unsupported
//!            |
//!     +------+-------+
//!     v      v       v
//!   open   clone    pull
//!     |      |       |
//!     |   executor  repo_exists? --no--> RepoNotFound
//!     |   "<git> clone \"url\" \"path\""
//!     |      |       |
//!     |      |    executor (cwd = path)
//!     |      |    "<git> pull"
//!     v      v       v
//!   repo_exists?    Done
//!     |
//!     v
//!   RepositoryFactory --> Box<dyn RepositoryHandle>
//! ```
//!
//! The dispatcher holds immutable configuration only; every operation either
//! reads it or runs an independent process, so `Arc<Git>` is freely shared.

pub mod command;
pub mod repository;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bon::Builder;
use tracing::{debug, info, warn};

use crate::core::process::executor::Executor;
use crate::error::{GitError, GitResult};

use command::{CallOutcome, Invocation};
use repository::{RepositoryFactory, RepositoryHandle};

/// Name of the metadata entry marking a working copy.
pub const GIT_DIR: &str = ".git";

/// Construction parameters for [`Git`].
#[derive(Debug, Clone, Builder)]
pub struct GitConfig {
    /// Path to the git executable.
    #[builder(into)]
    binary: PathBuf,
    /// Runs the synthesized command strings.
    executor: Arc<dyn Executor>,
    /// Builds the handles returned by `open` and `clone`.
    #[builder(default)]
    repository_factory: RepositoryFactory,
}

/// Wrapper around the git binary.
#[derive(Debug)]
pub struct Git {
    binary: PathBuf,
    executor: Arc<dyn Executor>,
    repository_factory: RepositoryFactory,
}

impl Git {
    /// Creates a dispatcher with the default repository factory.
    pub fn new(binary: impl Into<PathBuf>, executor: Arc<dyn Executor>) -> Self {
        Self::with_config(GitConfig::builder().binary(binary).executor(executor).build())
    }

    /// Creates a dispatcher from an explicit configuration.
    #[must_use]
    pub fn with_config(config: GitConfig) -> Self {
        Self {
            binary: config.binary,
            executor: config.executor,
            repository_factory: config.repository_factory,
        }
    }

    /// Replaces the factory used for repository handles.
    #[must_use]
    pub fn with_repository_factory(mut self, factory: RepositoryFactory) -> Self {
        self.repository_factory = factory;
        self
    }

    /// Path to the git binary.
    #[must_use]
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Executor used to run git commands.
    #[must_use]
    pub const fn executor(&self) -> &Arc<dyn Executor> {
        &self.executor
    }

    /// Factory used for repository handles.
    #[must_use]
    pub const fn repository_factory(&self) -> &RepositoryFactory {
        &self.repository_factory
    }

    /// Whether `path` contains a `.git` entry.
    #[must_use]
    pub fn repo_exists(&self, path: &Path) -> bool {
        path.join(GIT_DIR).exists()
    }

    /// Runs an operation by name.
    ///
    /// # Errors
    ///
    /// Returns `GitError::Unsupported` for names other than `open`, `clone`
    /// and `pull`, `GitError::InvalidArguments` on an argument count mismatch,
    /// and whatever the operation itself returns.
    pub fn call<S: AsRef<str>>(self: &Arc<Self>, name: &str, args: &[S]) -> GitResult<CallOutcome> {
        let invocation = Invocation::parse(name, args).inspect_err(|e| {
            warn!(command = %name, error = %e, "rejected git operation");
        })?;
        self.dispatch(invocation)
    }

    /// Runs an already-parsed invocation.
    ///
    /// # Errors
    ///
    /// Returns whatever the selected operation returns.
    pub fn dispatch(self: &Arc<Self>, invocation: Invocation) -> GitResult<CallOutcome> {
        match invocation {
            Invocation::Open { path } => self.open(path).map(CallOutcome::Repository),
            Invocation::Clone { url, path } => {
                self.clone_repo(&url, path).map(CallOutcome::Repository)
            }
            Invocation::Pull { path } => self.pull(path).map(|()| CallOutcome::Done),
        }
    }

    /// Opens the existing repository at `path`.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepoNotFound` if `path` has no `.git` entry.
    pub fn open(self: &Arc<Self>, path: impl AsRef<Path>) -> GitResult<Box<dyn RepositoryHandle>> {
        let path = path.as_ref();
        if !self.repo_exists(path) {
            return Err(GitError::repo_not_found(path));
        }
        debug!(path = %path.display(), factory = self.repository_factory.name(), "open");
        self.repository_factory.build(path, self)
    }

    /// Clones `url` into `path` and opens the result.
    ///
    /// `url` and `path` are embedded in double quotes verbatim; they must not
    /// contain unescaped quote characters.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CloneFailed` with git's stderr if the clone fails,
    /// `GitError::Process` if git cannot be run, or `GitError::RepoNotFound`
    /// if no working copy appeared at `path`.
    pub fn clone_repo(
        self: &Arc<Self>,
        url: &str,
        path: impl AsRef<Path>,
    ) -> GitResult<Box<dyn RepositoryHandle>> {
        let path = path.as_ref();
        let command = self.clone_command(url, path);
        debug!(cmd = %command, "clone");

        let result = self.executor.execute(&command, None)?;
        if result.has_errors() {
            warn!(url, path = %path.display(), stderr = %result.stderr(), "clone failed");
            return Err(GitError::CloneFailed {
                url: url.to_string(),
                stderr: result.stderr().to_string(),
            });
        }

        info!(url, path = %path.display(), "cloned repository");
        self.open(path)
    }

    /// Pulls from the default remote inside `path`.
    ///
    /// The `.git` entry is checked on every call.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepoNotFound` if `path` has no `.git` entry,
    /// `GitError::PullFailed` with git's stderr if the pull fails, or
    /// `GitError::Process` if git cannot be run.
    pub fn pull(&self, path: impl AsRef<Path>) -> GitResult<()> {
        let path = path.as_ref();
        if !self.repo_exists(path) {
            return Err(GitError::repo_not_found(path));
        }

        let command = self.pull_command();
        debug!(cmd = %command, cwd = %path.display(), "pull");

        let result = self.executor.execute(&command, Some(path))?;
        if result.has_errors() {
            warn!(path = %path.display(), stderr = %result.stderr(), "pull failed");
            return Err(GitError::PullFailed {
                path: path.display().to_string(),
                stderr: result.stderr().to_string(),
            });
        }

        info!(path = %path.display(), "pulled repository");
        Ok(())
    }

    /// Command line used by [`clone_repo`](Self::clone_repo).
    #[must_use]
    pub fn clone_command(&self, url: &str, path: &Path) -> String {
        format!(
            "{} clone \"{url}\" \"{}\"",
            self.binary.display(),
            path.display()
        )
    }

    /// Command line used by [`pull`](Self::pull).
    #[must_use]
    pub fn pull_command(&self) -> String {
        format!("{} pull", self.binary.display())
    }
}
