// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use termcolor::ColorChoice;

/// Load and validate test-session configuration
#[derive(Parser)]
#[command(name = "testrig")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file (default: $TESTRIG_CONFIG, then discovery)
    #[arg(short = 'C', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate the configuration and print the loaded descriptor
    Config(ConfigArgs),
    /// List test files matched by the include and exclude patterns
    List(ListArgs),
    /// Write a starter testrig.toml
    Init(InitArgs),
}

#[derive(clap::Args)]
pub struct ConfigArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Directory to search (default: directory of the config file)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite existing config
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a termcolor choice. `auto` colors only a terminal stdout.
    pub fn choice(self) -> ColorChoice {
        match self {
            ColorMode::Auto if std::io::stdout().is_terminal() => ColorChoice::Auto,
            ColorMode::Auto => ColorChoice::Never,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
