// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite file matching.
//!
//! A path is a suite when it matches an `include` pattern and no `exclude`
//! pattern. Patterns are matched against paths relative to the project root
//! (a leading `./` is ignored), and `*` never crosses a path separator.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use tracing::debug;

use crate::config::{ConfigError, RunnerConfig};

/// Strip leading `./` segments; candidates are root-relative without them.
fn root_relative(pattern: &str) -> &str {
    let mut pattern = pattern;
    while let Some(rest) = pattern.strip_prefix("./") {
        pattern = rest;
    }
    pattern
}

/// Compile `patterns` into a single set, reporting the first invalid one.
pub fn build_glob_set(field: &'static str, patterns: &[String]) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(root_relative(pattern))
            .literal_separator(true)
            .build()
            .map_err(|source| ConfigError::InvalidGlob {
                field,
                pattern: pattern.clone(),
                source,
            })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| ConfigError::InvalidGlob {
        field,
        pattern: patterns.join(", "),
        source,
    })
}

/// Compiled include/exclude patterns of a descriptor.
pub struct TestMatcher {
    include: GlobSet,
    exclude: GlobSet,
}

impl TestMatcher {
    pub fn new(config: &RunnerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            include: build_glob_set("include", config.include())?,
            exclude: build_glob_set("exclude", config.exclude())?,
        })
    }

    /// Whether `path`, relative to the project root, is a suite file.
    pub fn is_test_file(&self, path: &Path) -> bool {
        self.include.is_match(path) && !self.exclude.is_match(path)
    }

    /// List suite files under `root`, relative to it and sorted.
    ///
    /// Hidden files and paths ignored by `.gitignore` are skipped.
    pub fn discover(&self, root: &Path) -> Vec<PathBuf> {
        let mut found = Vec::new();
        for entry in WalkBuilder::new(root).build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(error = %err, "skipping unreadable path");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            if self.is_test_file(relative) {
                found.push(relative.to_path_buf());
            }
        }
        found.sort();
        debug!(root = %root.display(), count = found.len(), "discovered suite files");
        found
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
