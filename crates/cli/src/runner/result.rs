// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test result types.

use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Why a single case did not pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    /// The case outlived its deadline and was abandoned.
    #[error("timed out after {}ms", .limit.as_millis())]
    Timeout { limit: Duration },

    #[error("{message}")]
    Failed { message: String },

    #[error("panicked: {message}")]
    Panicked { message: String },

    #[error("failed to start worker: {message}")]
    Spawn { message: String },
}

/// Result of a single test case or hook.
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub name: String,
    pub passed: bool,
    pub duration: Duration,
    pub error: Option<CaseError>,
}

impl CaseResult {
    pub fn passed(name: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            passed: true,
            duration,
            error: None,
        }
    }

    pub fn failed(name: impl Into<String>, duration: Duration, error: CaseError) -> Self {
        Self {
            name: name.into(),
            passed: false,
            duration,
            error: Some(error),
        }
    }

    /// True when the case failed by exceeding its deadline.
    pub fn timed_out(&self) -> bool {
        matches!(self.error, Some(CaseError::Timeout { .. }))
    }
}

/// Aggregated results of one session.
#[derive(Debug, Clone)]
pub struct SessionResult {
    pub cases: Vec<CaseResult>,
    pub total_time: Duration,
    pub finished: DateTime<Utc>,
}

impl SessionResult {
    pub fn new(cases: Vec<CaseResult>, total_time: Duration) -> Self {
        Self {
            cases,
            total_time,
            finished: Utc::now(),
        }
    }

    /// True when every case passed. An empty session passes.
    pub fn passed(&self) -> bool {
        self.cases.iter().all(|c| c.passed)
    }

    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    pub fn passed_count(&self) -> usize {
        self.cases.iter().filter(|c| c.passed).count()
    }

    /// Failed cases, timeouts included.
    pub fn failed_count(&self) -> usize {
        self.cases.iter().filter(|c| !c.passed).count()
    }

    pub fn timed_out_count(&self) -> usize {
        self.cases.iter().filter(|c| c.timed_out()).count()
    }

    pub fn slowest_case(&self) -> Option<&CaseResult> {
        self.cases.iter().max_by_key(|c| c.duration)
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
