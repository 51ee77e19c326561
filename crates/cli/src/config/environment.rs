// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Execution environments recognized by the engine.

use std::fmt;
use std::str::FromStr;

use super::ConfigError;

/// Runtime context test files execute under.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Server-side, non-browser context.
    #[default]
    Node,
    Jsdom,
    HappyDom,
    EdgeRuntime,
}

impl Environment {
    /// All recognized environments, in declaration order.
    pub const ALL: [Environment; 4] = [
        Environment::Node,
        Environment::Jsdom,
        Environment::HappyDom,
        Environment::EdgeRuntime,
    ];

    /// Name as written in the declaration.
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Node => "node",
            Environment::Jsdom => "jsdom",
            Environment::HappyDom => "happy-dom",
            Environment::EdgeRuntime => "edge-runtime",
        }
    }

    /// True for contexts without a simulated DOM.
    pub fn is_server_side(self) -> bool {
        matches!(self, Environment::Node | Environment::EdgeRuntime)
    }

    fn expected_names() -> String {
        Self::ALL
            .iter()
            .map(|env| env.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|env| env.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownEnvironment {
                name: s.to_string(),
                expected: Self::expected_names(),
            })
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "environment_tests.rs"]
mod tests;
