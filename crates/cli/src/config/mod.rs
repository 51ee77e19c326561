// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test-session configuration.
//!
//! The declaration lives in `testrig.toml` under a `[test]` table. Loading
//! parses it, applies defaults for omitted options, and validates the rest.
//! The resulting [`RunnerConfig`] is immutable for the life of the session.

pub mod defaults;
mod environment;
mod error;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::discovery;
use crate::matcher::build_glob_set;

pub use environment::Environment;
pub use error::ConfigError;

/// File name of the static declaration.
pub const CONFIG_FILE_NAME: &str = "testrig.toml";

/// Environment variable naming an explicit declaration path.
pub const CONFIG_ENV_VAR: &str = "TESTRIG_CONFIG";

/// Validated, session-wide test parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    globals: bool,
    environment: Environment,
    include: Vec<String>,
    exclude: Vec<String>,
    test_timeout: Duration,
    hook_timeout: Duration,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            globals: false,
            environment: Environment::default(),
            include: defaults::patterns::include(),
            exclude: defaults::patterns::exclude(),
            test_timeout: Duration::from_millis(defaults::timeout::TEST_MS.unsigned_abs()),
            hook_timeout: Duration::from_millis(defaults::timeout::HOOK_MS.unsigned_abs()),
        }
    }
}

impl RunnerConfig {
    /// Load the declaration from its known location.
    ///
    /// See [`load`].
    pub fn load() -> Result<Self, ConfigError> {
        load()
    }

    /// Start building a descriptor programmatically.
    pub fn builder() -> RunnerConfigBuilder {
        RunnerConfigBuilder::default()
    }

    /// Whether test-declaration symbols are injected into every test file.
    pub fn globals(&self) -> bool {
        self.globals
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Include patterns, in declaration order.
    pub fn include(&self) -> &[String] {
        &self.include
    }

    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }

    /// Per-test-case deadline.
    pub fn test_timeout(&self) -> Duration {
        self.test_timeout
    }

    pub fn test_timeout_ms(&self) -> u64 {
        duration_ms(self.test_timeout)
    }

    /// Per-hook deadline.
    pub fn hook_timeout(&self) -> Duration {
        self.hook_timeout
    }

    pub fn hook_timeout_ms(&self) -> u64 {
        duration_ms(self.hook_timeout)
    }

    /// Symbols available in test files without an explicit import.
    ///
    /// Empty when `globals` is disabled.
    pub fn ambient_symbols(&self) -> &'static [&'static str] {
        if self.globals { defaults::AMBIENT_SYMBOLS } else { &[] }
    }
}

/// Whole milliseconds, saturating at `u64::MAX`.
pub(crate) fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Top-level layout of `testrig.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFile {
    #[serde(default)]
    test: RawTestConfig,
}

/// The `[test]` table before validation.
///
/// Timeouts are signed so that negative values reach validation instead of
/// failing as a type mismatch.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct RawTestConfig {
    globals: Option<bool>,
    environment: Option<String>,
    include: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
    test_timeout: Option<i64>,
    hook_timeout: Option<i64>,
}

impl RawTestConfig {
    fn validate(self) -> Result<RunnerConfig, ConfigError> {
        let environment = match self.environment {
            Some(name) => name.parse()?,
            None => Environment::default(),
        };

        let include = self.include.unwrap_or_else(defaults::patterns::include);
        if include.is_empty() {
            return Err(ConfigError::EmptyInclude);
        }
        build_glob_set("include", &include)?;

        let exclude = self.exclude.unwrap_or_else(defaults::patterns::exclude);
        build_glob_set("exclude", &exclude)?;

        let test_timeout = positive_timeout(
            "testTimeout",
            self.test_timeout.unwrap_or(defaults::timeout::TEST_MS),
        )?;
        let hook_timeout = positive_timeout(
            "hookTimeout",
            self.hook_timeout.unwrap_or(defaults::timeout::HOOK_MS),
        )?;

        Ok(RunnerConfig {
            globals: self.globals.unwrap_or(false),
            environment,
            include,
            exclude,
            test_timeout,
            hook_timeout,
        })
    }
}

fn positive_timeout(field: &'static str, value: i64) -> Result<Duration, ConfigError> {
    if value <= 0 {
        return Err(ConfigError::NonPositiveTimeout { field, value });
    }
    Ok(Duration::from_millis(value.unsigned_abs()))
}

/// Programmatic construction through the same validation as file loading.
#[derive(Debug, Default, Clone)]
pub struct RunnerConfigBuilder {
    raw: RawTestConfig,
}

impl RunnerConfigBuilder {
    pub fn globals(mut self, enabled: bool) -> Self {
        self.raw.globals = Some(enabled);
        self
    }

    pub fn environment(mut self, name: impl Into<String>) -> Self {
        self.raw.environment = Some(name.into());
        self
    }

    pub fn include<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.raw.include = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    pub fn exclude<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.raw.exclude = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    pub fn test_timeout_ms(mut self, ms: i64) -> Self {
        self.raw.test_timeout = Some(ms);
        self
    }

    pub fn hook_timeout_ms(mut self, ms: i64) -> Self {
        self.raw.hook_timeout = Some(ms);
        self
    }

    /// Validate and produce the descriptor.
    pub fn build(self) -> Result<RunnerConfig, ConfigError> {
        self.raw.validate()
    }
}

/// Parse and validate declaration text.
///
/// `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> Result<RunnerConfig, ConfigError> {
    let raw: RawFile = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    raw.test.validate()
}

/// Read, parse and validate the declaration at `path`.
pub fn load_from(path: &Path) -> Result<RunnerConfig, ConfigError> {
    debug!(path = %path.display(), "loading test configuration");
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse(&content, path)?;
    debug!(
        environment = %config.environment(),
        include = ?config.include(),
        test_timeout_ms = config.test_timeout_ms(),
        "test configuration loaded"
    );
    Ok(config)
}

/// Load the declaration from its known location.
///
/// The location is `$TESTRIG_CONFIG` when set, otherwise the nearest
/// `testrig.toml` found from the current directory (see [`locate`]).
pub fn load() -> Result<RunnerConfig, ConfigError> {
    load_located(None).map(|(_, config)| config)
}

/// Load from `explicit` when given, otherwise from the known location.
///
/// Returns the path that was read alongside the descriptor.
pub fn load_located(explicit: Option<&Path>) -> Result<(PathBuf, RunnerConfig), ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => locate()?,
    };
    let config = load_from(&path)?;
    Ok((path, config))
}

/// Resolve the declaration path used by [`load`].
pub fn locate() -> Result<PathBuf, ConfigError> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    let cwd = std::env::current_dir().map_err(|source| ConfigError::Io {
        path: PathBuf::from("."),
        source,
    })?;
    discovery::find_config(&cwd).ok_or(ConfigError::NotFound { start: cwd })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
