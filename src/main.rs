// gitwrap: thin facade over the git binary
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Git::call(operation, args)
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use gitwrap::cli::{self, Cli};
use gitwrap::config::Config;
use gitwrap::core::process::executor::ShellExecutor;
use gitwrap::git::Git;
use gitwrap::logging::init_logging;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&config.log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> gitwrap::error::Result<Config> {
    let mut loader = Config::builder().add_toml_file_optional("gitwrap.toml");
    for path in &cli.global.configs {
        loader = loader.add_toml_file(path);
    }
    cli.global
        .apply_overrides(loader.with_env_prefix("GITWRAP"))?
        .build()
}

fn run(cli: &Cli, config: &Config) -> gitwrap::error::Result<()> {
    let executor = Arc::new(ShellExecutor::new()?);
    let git = Arc::new(Git::with_config(config.git_config(executor)?));

    if let Some(repo) = git.call(&cli.operation, cli.args.as_slice())?.into_repository() {
        println!("{}", repo.path().display());
    }
    Ok(())
}
