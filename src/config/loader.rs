// gitwrap: thin facade over the git binary
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration sources.
//!
//! ```text
//! defaults (serde)
//!   < TOML files / strings, in the order added
//!   < GITWRAP_SECTION__KEY environment variables
//!   < set() overrides
//!        |
//!        v
//!    build() -> Config, validated
//! ```

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};
use std::fmt;
use std::path::{Path, PathBuf};

use super::Config;
use crate::error::Result;

/// A TOML source registered with the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// File that must exist.
    Required(PathBuf),
    /// File that was present when it was added.
    Optional(PathBuf),
    /// Inline TOML text.
    Inline,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required(path) => write!(f, "[file] {}", path.display()),
            Self::Optional(path) => write!(f, "[optional] {}", path.display()),
            Self::Inline => f.write_str("[string] <string>"),
        }
    }
}

/// Accumulates sources, then merges them into a [`Config`].
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    sources: Vec<Source>,
    env_prefix: Option<String>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            sources: Vec::new(),
            env_prefix: None,
        }
    }

    /// Adds a TOML file that must exist when `build()` runs.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        self.push_file(path, true, Some(Source::Required(path.to_path_buf())))
    }

    /// Adds a TOML file that is skipped when missing.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        let source = path.exists().then(|| Source::Optional(path.to_path_buf()));
        self.push_file(path, false, source)
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push(Source::Inline);
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` variables at build time.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Overrides a dotted key, e.g. `log.level`.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is not a valid path expression.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("invalid override '{key}': {e}"))?;
        Ok(self)
    }

    /// Merges every source and validates the result.
    ///
    /// # Errors
    ///
    /// Fails on a missing required file, malformed TOML, a value of the wrong
    /// type or an unknown key, and anything `Config::validate` rejects.
    pub fn build(self) -> Result<Config> {
        let mut builder = self.builder;
        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            );
        }

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Registered sources, in load order.
    #[must_use]
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Numbered, human-readable list of [`sources`](Self::sources).
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.sources
            .iter()
            .zip(1..)
            .map(|(source, n)| format!("{n}. {source}"))
            .collect()
    }

    fn push_file(mut self, path: &Path, required: bool, source: Option<Source>) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        self.sources.extend(source);
        self
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
