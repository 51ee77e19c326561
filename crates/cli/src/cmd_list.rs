// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! List command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use testrig::cli::{Cli, ListArgs};
use testrig::matcher::TestMatcher;

/// Print every suite file under the search root, one per line.
pub fn run(cli: &Cli, args: &ListArgs) -> anyhow::Result<()> {
    let (config_path, config) = crate::load_config(cli)?;

    let root = match &args.path {
        Some(path) => path.clone(),
        None => config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    let matcher = TestMatcher::new(&config)?;
    let files = matcher.discover(&root);
    if files.is_empty() {
        anyhow::bail!(
            "no test files found under {} (include: {})",
            root.display(),
            config.include().join(", ")
        );
    }

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for file in files {
        writeln!(handle, "{}", file.display())?;
    }
    Ok(())
}
