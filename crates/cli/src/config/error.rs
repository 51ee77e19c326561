// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration errors.
//!
//! Every variant is fatal: a session never starts from a descriptor that
//! failed to load.

use std::path::PathBuf;

use thiserror::Error;

/// Error raised while locating, reading, or validating the declaration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no testrig.toml found in {} or any parent directory", .start.display())]
    NotFound { start: PathBuf },

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown environment `{name}` (expected one of: {expected})")]
    UnknownEnvironment { name: String, expected: String },

    #[error("invalid {field} glob `{pattern}`")]
    InvalidGlob {
        field: &'static str,
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("include must name at least one glob pattern")]
    EmptyInclude,

    #[error("{field} must be a positive number of milliseconds, got {value}")]
    NonPositiveTimeout { field: &'static str, value: i64 },
}
