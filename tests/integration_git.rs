// gitwrap: thin facade over the git binary
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for git operations.
//!
//! Runs the dispatcher against the real git binary with temporary repositories.

use gitwrap::config::Config;
use gitwrap::core::process::executor::ShellExecutor;
use gitwrap::git::Git;
use gitwrap::git::command::CallOutcome;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::sync::Arc;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn git() -> Arc<Git> {
    let binary = Config::default()
        .git_binary()
        .expect("git must be installed to run integration tests");
    let executor = ShellExecutor::new().expect("failed to build executor");
    Arc::new(Git::new(binary, Arc::new(executor)))
}

/// Helper to run git commands in a directory
fn run_git(args: &[&str], cwd: &Path) -> bool {
    Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_AUTHOR_NAME", "Test")
        .env("GIT_AUTHOR_EMAIL", "test@test.com")
        .env("GIT_COMMITTER_NAME", "Test")
        .env("GIT_COMMITTER_EMAIL", "test@test.com")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Create a repository with one commit containing README.md
fn init_origin(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    assert!(run_git(&["init", "-q"], dir));
    fs::write(dir.join("README.md"), "# Test").unwrap();
    assert!(run_git(&["add", "README.md"], dir));
    assert!(run_git(&["commit", "-q", "-m", "Initial commit"], dir));
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp paths are utf-8")
}

#[test]
fn clone_then_open() {
    let temp = temp_dir();
    let origin = temp.path().join("origin");
    init_origin(&origin);
    let dest = temp.path().join("work");

    let git = git();
    let repo = git
        .clone_repo(path_str(&origin), &dest)
        .expect("clone should succeed");

    assert_eq!(repo.path(), dest);
    assert!(Arc::ptr_eq(repo.git(), &git));
    assert!(dest.join(".git").is_dir());
    assert!(dest.join("README.md").is_file());

    let reopened = git.open(&dest).expect("cloned repo should open");
    assert_eq!(reopened.path(), dest);
}

#[test]
fn pull_fetches_new_commits() {
    let temp = temp_dir();
    let origin = temp.path().join("origin");
    init_origin(&origin);
    let dest = temp.path().join("work");

    let git = git();
    let repo = git
        .clone_repo(path_str(&origin), &dest)
        .expect("clone should succeed");

    fs::write(origin.join("CHANGES.md"), "- new").unwrap();
    assert!(run_git(&["add", "CHANGES.md"], &origin));
    assert!(run_git(&["commit", "-q", "-m", "Second commit"], &origin));

    repo.pull().expect("pull should succeed");
    assert!(dest.join("CHANGES.md").is_file());
}

#[test]
fn clone_failure_reports_stderr() {
    let temp = temp_dir();
    let missing = temp.path().join("does-not-exist");
    let dest = temp.path().join("work");

    let err = git()
        .clone_repo(path_str(&missing), &dest)
        .expect_err("cloning a missing repository should fail");

    assert!(err.is_command_failure());
    let stderr = err.stderr().expect("clone failures carry stderr");
    assert!(!stderr.is_empty());
    let message = err.to_string();
    assert!(message.starts_with(&format!("Failed to clone {}: ", missing.display())));
    assert!(message.contains(stderr));
}

#[test]
fn pull_without_remote_fails() {
    let temp = temp_dir();
    let local = temp.path().join("local");
    fs::create_dir_all(&local).unwrap();
    assert!(run_git(&["init", "-q"], &local));

    let err = git().pull(&local).expect_err("no remote to pull from");
    assert!(err.is_command_failure());
    assert!(err.to_string().contains(&local.display().to_string()));
}

#[test]
fn open_plain_directory_fails() {
    let temp = temp_dir();
    let err = git().open(temp.path()).expect_err("not a repository");
    assert!(err.is_repo_not_found());
    assert_eq!(
        err.to_string(),
        format!("No Git repository found at {}", temp.path().display())
    );
}

#[test]
fn call_by_name() {
    let temp = temp_dir();
    let origin = temp.path().join("origin");
    init_origin(&origin);
    let dest = temp.path().join("work");
    let git = git();

    let outcome = git
        .call("clone", &[path_str(&origin), path_str(&dest)])
        .expect("clone should succeed");
    assert_eq!(
        outcome.repository().map(|repo| repo.path().to_path_buf()),
        Some(dest.clone())
    );

    let outcome = git.call("pull", &[path_str(&dest)]).expect("pull should succeed");
    assert!(matches!(outcome, CallOutcome::Done));

    let err = git
        .call("init", &[path_str(&dest)])
        .expect_err("init is not supported");
    assert_eq!(err.to_string(), "'git init' is not supported");
}
