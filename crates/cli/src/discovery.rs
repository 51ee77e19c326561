// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Declaration discovery.
//!
//! Walks from a start directory up to the git root looking for `testrig.toml`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::CONFIG_FILE_NAME;

/// Find the nearest `testrig.toml` at or above `start_dir`.
///
/// The search never leaves the enclosing git repository: a directory
/// containing `.git` is the last one inspected.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "found test configuration");
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            debug!(root = %dir.display(), "reached git root without a configuration");
            return None;
        }
    }
    None
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
