// gitwrap: thin facade over the git binary
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::builder::ProcessBuilder;
use super::executor::{Executor, ShellExecutor};
use super::output::ProcessOutput;
use crate::error::ProcessError;

fn executor() -> ShellExecutor {
    ShellExecutor::new().expect("failed to build executor runtime")
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_echo() {
    let output = ProcessBuilder::new("echo")
        .arg("hello")
        .capture_output()
        .run()
        .await
        .expect("echo should succeed");

    assert!(output.success());
    insta::assert_snapshot!(output.stdout().trim(), @"hello");
}

#[tokio::test]
async fn test_process_nonzero_exit_is_reported() {
    let output = ProcessBuilder::raw("exit 42")
        .run()
        .await
        .expect("a non-zero exit is still a completed process");

    assert_eq!(output.exit_code(), 42);
    assert!(output.has_errors());
}

#[tokio::test]
async fn test_process_spawn_failure() {
    let err = ProcessBuilder::new("nonexistent_program_12345")
        .run()
        .await
        .expect_err("spawning a missing program should fail");

    assert!(
        matches!(err, ProcessError::SpawnFailed { .. }),
        "unexpected error: {err}"
    );
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_env() {
    let output = ProcessBuilder::raw("echo $GITWRAP_TEST_VAR")
        .env("GITWRAP_TEST_VAR", "test_value")
        .capture_output()
        .run()
        .await
        .expect("process should succeed");

    insta::assert_snapshot!(output.stdout().trim(), @"test_value");
}

#[cfg(not(windows))]
#[test]
fn test_shell_executor_captures_stderr() {
    let output = executor()
        .execute("echo 'fatal: repo not found' 1>&2; exit 128", None)
        .expect("command should run");

    assert!(output.has_errors());
    assert_eq!(output.exit_code(), 128);
    assert_eq!(output.stderr(), "fatal: repo not found\n");
    assert!(output.stdout().is_empty());
}

#[cfg(not(windows))]
#[test]
fn test_shell_executor_runs_in_cwd() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let output = executor()
        .execute("pwd", Some(dir.path()))
        .expect("pwd should run");

    assert!(!output.has_errors());
    let reported = std::fs::canonicalize(output.stdout().trim()).expect("pwd output is a path");
    let expected = std::fs::canonicalize(dir.path()).expect("temp dir exists");
    assert_eq!(reported, expected);
}

#[cfg(not(windows))]
#[test]
fn test_shell_executor_disables_terminal_prompt() {
    let output = executor()
        .execute("echo $GIT_TERMINAL_PROMPT", None)
        .expect("echo should run");

    assert_eq!(output.stdout().trim(), "0");
}

#[test]
fn test_shell_executor_missing_cwd_fails_to_spawn() {
    let err = executor()
        .execute("echo hi", Some(std::path::Path::new("/nonexistent/gitwrap/dir")))
        .expect_err("spawning in a missing directory should fail");

    assert!(
        matches!(err, ProcessError::SpawnFailed { .. }),
        "unexpected error: {err}"
    );
}

#[test]
fn test_process_output_constructors() {
    assert!(ProcessOutput::ok().success());
    let failed = ProcessOutput::failed(1, "boom");
    assert!(failed.has_errors());
    assert_eq!(failed.stderr(), "boom");
}

#[test]
fn test_executable_lookup_not_found() {
    assert!(ProcessBuilder::find("nonexistent_program_12345").is_none());
}

#[test]
fn test_command_line_quotes_whitespace() {
    let builder = ProcessBuilder::new("git").arg("clone").arg("my repo");
    assert_eq!(builder.command_line(), "git clone \"my repo\"");
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_uncaptured_streams_read_empty() {
    let output = ProcessBuilder::raw("echo out; echo err 1>&2")
        .run()
        .await
        .expect("process should succeed");

    assert!(output.stdout().is_empty());
    assert!(output.stderr().is_empty());
}

#[cfg(not(windows))]
#[test]
fn test_shell_executor_keeps_stderr_after_invalid_utf8() {
    let output = executor()
        .execute(r"printf 'a\377b\nfatal: real cause\n' >&2; exit 1", None)
        .expect("command should run");

    assert!(output.has_errors());
    assert_eq!(output.stderr(), "a\u{FFFD}b\nfatal: real cause\n");
}

#[cfg(not(windows))]
#[test]
fn test_shell_executor_keeps_line_endings() {
    let output = executor()
        .execute(r"printf 'fatal: x\r\n' >&2; exit 1", None)
        .expect("command should run");

    assert_eq!(output.stderr(), "fatal: x\r\n");
}

#[cfg(not(windows))]
#[test]
fn test_shell_executor_drains_output_past_pipe_buffer() {
    let output = executor()
        .execute(
            r"printf '\377\n' >&2; head -c 200000 /dev/zero | tr '\000' x >&2; echo done >&2",
            None,
        )
        .expect("command should run");

    assert!(output.success(), "writer must not die on a closed pipe");
    assert!(output.stderr().ends_with("xdone\n"));
    assert_eq!(output.stderr().matches('x').count(), 200_000);
}
