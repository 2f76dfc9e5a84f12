// gitwrap: thin facade over the git binary
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::loader::Source;
use super::{Config, ConfigLoader};
use crate::logging::LogLevel;
use std::path::{Path, PathBuf};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.git.binary, "git");
    assert_eq!(config.log.level, LogLevel::Info);
    assert!(config.log.file_level.is_none());
    assert!(config.log.file.is_none());
}

#[test]
fn test_parse_sections() {
    let config = Config::parse(
        r#"
[git]
binary = "/opt/git/bin/git"

[log]
level = 4
file_level = 5
file = "logs/gitwrap.log"
"#,
    )
    .expect("config should parse");

    assert_eq!(config.git.binary, "/opt/git/bin/git");
    assert_eq!(config.log.level, LogLevel::Debug);
    assert_eq!(config.log.file_level, Some(LogLevel::Trace));
    assert_eq!(config.log.file, Some(PathBuf::from("logs/gitwrap.log")));
}

#[test]
fn test_parse_rejects_unknown_keys() {
    let result = Config::parse("[git]\npath = \"/usr/bin/git\"\n");
    assert!(result.is_err(), "unknown key should be rejected");
}

#[test]
fn test_parse_rejects_out_of_range_level() {
    let result = Config::parse("[log]\nlevel = 9\n");
    assert!(result.is_err(), "log level 9 should be rejected");
}

#[test]
fn test_parse_rejects_empty_binary() {
    let err = Config::parse("[git]\nbinary = \"  \"\n").expect_err("blank binary is invalid");
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'binary' in section '[git]': must not be empty"
    );
}

#[test]
fn test_override_wins_over_file() {
    let config = ConfigLoader::new()
        .add_toml_str("[git]\nbinary = \"/usr/bin/git\"\n")
        .set("git.binary", "/usr/local/bin/git")
        .expect("override key is valid")
        .build()
        .expect("config should build");
    assert_eq!(config.git.binary, "/usr/local/bin/git");
}

#[test]
fn test_optional_file_missing_is_ignored() {
    let loader = ConfigLoader::new().add_toml_file_optional("/nonexistent/gitwrap.toml");
    assert!(loader.format_loaded_files().is_empty());
    let config = loader.build().expect("missing optional file is fine");
    assert_eq!(config, Config::default());
}

#[test]
fn test_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("gitwrap.toml");
    std::fs::write(&path, "[log]\nlevel = 0\n").expect("write config");

    let config = Config::from_file(&path).expect("config should load");
    assert_eq!(config.log.level, LogLevel::Silent);
    assert_eq!(config.git.binary, "git");
}

#[test]
fn test_required_file_missing_fails() {
    let result = Config::from_file("/nonexistent/gitwrap.toml");
    assert!(result.is_err());
}

#[test]
fn test_git_binary_path_is_verbatim() {
    let mut config = Config::default();
    config.git.binary = "/usr/bin/git".to_string();
    assert_eq!(
        config.git_binary().expect("absolute path is used as-is"),
        Path::new("/usr/bin/git")
    );

    config.git.binary = "tools/git".to_string();
    assert_eq!(
        config.git_binary().expect("relative path is used as-is"),
        Path::new("tools/git")
    );
}

#[test]
fn test_git_binary_missing_from_path() {
    let mut config = Config::default();
    config.git.binary = "nonexistent_git_12345".to_string();
    let err = config.git_binary().expect_err("bare name must resolve via PATH");
    insta::assert_snapshot!(err.to_string(), @"git binary 'nonexistent_git_12345' not found in PATH");
}

#[test]
fn test_log_config_file_level_defaults_to_console() {
    let mut config = Config::default();
    config.log.level = LogLevel::Warn;
    let log = config.log_config();
    assert_eq!(log.console_level(), LogLevel::Warn);
    assert_eq!(log.file_level(), LogLevel::Warn);
    assert!(log.log_file().is_none());
    assert!(!log.show_target());
}

#[test]
fn test_show_target_reaches_log_config() {
    let config = Config::parse("[log]\nshow_target = true\n").expect("config should parse");
    assert!(config.log.show_target);
    assert!(config.log_config().show_target());
}

#[test]
fn test_format_loaded_files() {
    let loader = ConfigLoader::new()
        .add_toml_str("")
        .add_toml_file("custom.toml");
    insta::assert_debug_snapshot!(loader.format_loaded_files(), @r#"
    [
        "1. [string] <string>",
        "2. [file] custom.toml",
    ]
    "#);
}

#[test]
fn test_missing_optional_file_is_not_listed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let present = dir.path().join("gitwrap.toml");
    std::fs::write(&present, "[git]\nbinary = \"/opt/git\"\n").expect("write config");

    let loader = ConfigLoader::new()
        .add_toml_file_optional(dir.path().join("absent.toml"))
        .add_toml_file_optional(&present);

    assert_eq!(loader.sources(), [Source::Optional(present)]);
}
