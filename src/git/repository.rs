// gitwrap: thin facade over the git binary
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository handles.
//!
//! ```text
//! Git::open(path) --repo_exists?--> RepositoryFactory::build(path, &Arc<Git>)
//!                                          |
//!                                          v
//!                               Box<dyn RepositoryHandle>
//!                                 .path()  .git()  .pull()
//!                                                    |
//!                                                    v
//!                                              Git::pull(path)
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::Git;
use crate::error::{GitError, GitResult};

/// A verified local working copy.
///
/// Implementors must only exist for paths that contained a `.git` entry when
/// they were built. Every git operation routes back through [`Git`].
pub trait RepositoryHandle: fmt::Debug + Send + Sync {
    /// File path of the working copy.
    fn path(&self) -> &Path;

    /// Dispatcher used to run commands in context of this repository.
    fn git(&self) -> &Arc<Git>;

    /// Pulls from the default remote.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepoNotFound` if the `.git` entry has disappeared,
    /// `GitError::PullFailed` if git reports an error.
    fn pull(&self) -> GitResult<()> {
        self.git().pull(self.path())
    }
}

/// Handle types that can be built from a path and a dispatcher.
pub trait RepositoryConstruct: RepositoryHandle + Sized {
    /// Builds the handle, validating the path.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepoNotFound` if `path` has no `.git` entry.
    fn construct(path: &Path, git: Arc<Git>) -> GitResult<Self>;
}

/// The default repository handle.
#[derive(Debug, Clone)]
pub struct Repository {
    path: PathBuf,
    git: Arc<Git>,
}

impl Repository {
    /// Creates a handle for `path`.
    ///
    /// Validates the path even when called through [`Git::open`], so a handle
    /// built directly still upholds the invariant.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepoNotFound` if `path` has no `.git` entry.
    pub fn new(path: impl Into<PathBuf>, git: Arc<Git>) -> GitResult<Self> {
        let path = path.into();
        if !git.repo_exists(&path) {
            return Err(GitError::repo_not_found(&path));
        }
        Ok(Self { path, git })
    }
}

impl RepositoryHandle for Repository {
    fn path(&self) -> &Path {
        &self.path
    }

    fn git(&self) -> &Arc<Git> {
        &self.git
    }
}

impl RepositoryConstruct for Repository {
    fn construct(path: &Path, git: Arc<Git>) -> GitResult<Self> {
        Self::new(path, git)
    }
}

type BuildFn = dyn Fn(&Path, &Arc<Git>) -> GitResult<Box<dyn RepositoryHandle>> + Send + Sync;

/// Builds the handle returned by `open` and `clone`.
#[derive(Clone)]
pub struct RepositoryFactory {
    name: &'static str,
    build: Arc<BuildFn>,
}

impl RepositoryFactory {
    /// Wraps a custom construction closure under a display name.
    pub fn new<F>(name: &'static str, build: F) -> Self
    where
        F: Fn(&Path, &Arc<Git>) -> GitResult<Box<dyn RepositoryHandle>> + Send + Sync + 'static,
    {
        Self {
            name,
            build: Arc::new(build),
        }
    }

    /// Factory for any [`RepositoryConstruct`] type.
    #[must_use]
    pub fn of<R: RepositoryConstruct + 'static>() -> Self {
        Self::new(std::any::type_name::<R>(), |path, git| {
            let handle = R::construct(path, Arc::clone(git))?;
            Ok(Box::new(handle) as Box<dyn RepositoryHandle>)
        })
    }

    /// Name of the handle type this factory produces.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Builds a handle for `path` bound to `git`.
    ///
    /// # Errors
    ///
    /// Propagates whatever the construction closure returns.
    pub fn build(&self, path: &Path, git: &Arc<Git>) -> GitResult<Box<dyn RepositoryHandle>> {
        (self.build)(path, git)
    }
}

impl Default for RepositoryFactory {
    fn default() -> Self {
        Self::of::<Repository>()
    }
}

impl fmt::Debug for RepositoryFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RepositoryFactory").field(&self.name).finish()
    }
}
