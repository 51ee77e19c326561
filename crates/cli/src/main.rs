// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use testrig::cli::{Cli, Command};
use testrig::config::{self, RunnerConfig};

mod cmd_config;
mod cmd_init;
mod cmd_list;

/// Environment variable holding a tracing filter directive.
const LOG_ENV_VAR: &str = "TESTRIG_LOG";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Command::Config(args) => cmd_config::run(&cli, args),
        Command::List(args) => cmd_list::run(&cli, args),
        Command::Init(args) => cmd_init::run(&cli, args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "testrig=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Resolve the declaration path and load it.
///
/// `--config` wins over `$TESTRIG_CONFIG` and discovery from the current
/// directory.
pub(crate) fn load_config(cli: &Cli) -> anyhow::Result<(PathBuf, RunnerConfig)> {
    config::load_located(cli.config.as_deref()).context("Invalid test configuration")
}
