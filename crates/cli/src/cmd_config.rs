// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config command implementation.

use std::io::Write;

use termcolor::StandardStream;

use testrig::cli::{Cli, ConfigArgs};
use testrig::report;

/// Load, validate and print the descriptor.
pub fn run(cli: &Cli, args: &ConfigArgs) -> anyhow::Result<()> {
    let (_, config) = crate::load_config(cli)?;

    let stdout = StandardStream::stdout(args.color.choice());
    let mut handle = stdout.lock();
    report::formatter(args.output).write_config(&mut handle, &config)?;
    handle.flush()?;
    Ok(())
}
