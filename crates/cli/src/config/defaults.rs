// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! These mirror what the engine assumes when an option is omitted.

/// Default timeouts, in milliseconds.
pub mod timeout {
    /// Per-test-case deadline (5s).
    pub const TEST_MS: i64 = 5_000;

    /// Per-hook deadline (10s).
    pub const HOOK_MS: i64 = 10_000;
}

/// Default glob patterns for suite discovery.
pub mod patterns {
    /// Files treated as suites when `include` is omitted.
    pub fn include() -> Vec<String> {
        vec!["**/*.{test,spec}.{js,mjs,cjs,ts,mts,cts,jsx,tsx}".to_string()]
    }

    /// Files never treated as suites when `exclude` is omitted.
    pub fn exclude() -> Vec<String> {
        vec!["**/node_modules/**".to_string(), "**/dist/**".to_string()]
    }
}

/// Symbols injected into every test file when `globals` is enabled.
pub const AMBIENT_SYMBOLS: &[&str] = &[
    "describe",
    "it",
    "test",
    "expect",
    "beforeAll",
    "afterAll",
    "beforeEach",
    "afterEach",
    "vi",
];

/// Declaration written by `testrig init`.
///
/// The long timeout covers suites that download an embedding model on
/// their first run.
pub const INIT_TEMPLATE: &str = r#"[test]
globals = true
environment = "node"
include = ["test/**/*.test.ts"]
testTimeout = 90000
"#;
