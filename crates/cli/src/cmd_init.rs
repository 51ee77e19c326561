// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Init command implementation.

use std::path::PathBuf;

use testrig::cli::{Cli, InitArgs};
use testrig::config::{CONFIG_ENV_VAR, CONFIG_FILE_NAME};
use testrig::config::defaults::INIT_TEMPLATE;

/// Write the starter declaration.
pub fn run(cli: &Cli, args: &InitArgs) -> anyhow::Result<()> {
    let path = match (&cli.config, std::env::var_os(CONFIG_ENV_VAR)) {
        (Some(path), _) => path.clone(),
        (None, Some(path)) => PathBuf::from(path),
        (None, None) => std::env::current_dir()?.join(CONFIG_FILE_NAME),
    };

    if path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    std::fs::write(&path, INIT_TEMPLATE)?;
    println!("Created {}", path.display());
    Ok(())
}
