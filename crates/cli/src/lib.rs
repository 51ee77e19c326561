// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test-session configuration for a test execution engine.
//!
//! A session is parametrized by a static `testrig.toml` declaration. It is
//! loaded once into an immutable [`RunnerConfig`](config::RunnerConfig),
//! which is then passed to the pieces that consume it: the
//! [`TestMatcher`](matcher::TestMatcher) that selects suite files and the
//! [`CaseRunner`](runner::CaseRunner) that enforces per-case deadlines.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod matcher;
pub mod report;
pub mod runner;
