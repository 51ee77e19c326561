// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Deadline-enforcing case runner.
//!
//! Each case body runs on its own worker thread. The runner waits at most
//! the configured deadline for the worker to report; a case that misses the
//! deadline is reported as timed out and its worker is abandoned. Cases are
//! isolated from each other: a timeout or panic in one never affects another.

mod result;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::RecvTimeoutError;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::config::{RunnerConfig, duration_ms};

pub use result::{CaseError, CaseResult, SessionResult};

type CaseBody = Box<dyn FnOnce() -> Result<(), String> + Send + 'static>;

/// A named unit of work. Returning `Err` fails the case.
pub struct TestCase {
    name: String,
    body: CaseBody,
}

impl TestCase {
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: FnOnce() -> Result<(), String> + Send + 'static,
    {
        Self {
            name: name.into(),
            body: Box::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Runs cases and hooks under the deadlines of a descriptor.
#[derive(Debug, Clone, Copy)]
pub struct CaseRunner {
    test_timeout: Duration,
    hook_timeout: Duration,
}

impl CaseRunner {
    pub fn new(config: &RunnerConfig) -> Self {
        Self {
            test_timeout: config.test_timeout(),
            hook_timeout: config.hook_timeout(),
        }
    }

    pub fn test_timeout(&self) -> Duration {
        self.test_timeout
    }

    pub fn hook_timeout(&self) -> Duration {
        self.hook_timeout
    }

    /// Run one case under the per-test deadline.
    pub fn run_case(&self, case: TestCase) -> CaseResult {
        run_with_deadline(case, self.test_timeout)
    }

    /// Run one setup or teardown hook under the per-hook deadline.
    pub fn run_hook(&self, hook: TestCase) -> CaseResult {
        run_with_deadline(hook, self.hook_timeout)
    }

    /// Run all cases in parallel. Results keep the input order.
    pub fn run_all(&self, cases: Vec<TestCase>) -> SessionResult {
        let start = Instant::now();
        let results: Vec<CaseResult> = cases
            .into_par_iter()
            .map(|case| self.run_case(case))
            .collect();
        SessionResult::new(results, start.elapsed())
    }
}

fn run_with_deadline(case: TestCase, limit: Duration) -> CaseResult {
    let TestCase { name, body } = case;
    let (tx, rx) = crossbeam_channel::bounded(1);
    let start = Instant::now();

    let spawned = thread::Builder::new()
        .name(format!("case:{name}"))
        .spawn(move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(body));
            // The receiver is gone once the case has timed out.
            let _ = tx.send(outcome);
        });
    if let Err(err) = spawned {
        return CaseResult::failed(
            name,
            Duration::ZERO,
            CaseError::Spawn {
                message: err.to_string(),
            },
        );
    }

    match rx.recv_timeout(limit) {
        Ok(Ok(Ok(()))) => {
            let duration = start.elapsed();
            debug!(case = %name, ?duration, "case passed");
            CaseResult::passed(name, duration)
        }
        Ok(Ok(Err(message))) => {
            CaseResult::failed(name, start.elapsed(), CaseError::Failed { message })
        }
        Ok(Err(payload)) => CaseResult::failed(
            name,
            start.elapsed(),
            CaseError::Panicked {
                message: panic_message(payload.as_ref()),
            },
        ),
        Err(RecvTimeoutError::Timeout) => {
            warn!(case = %name, limit_ms = duration_ms(limit), "case timed out");
            CaseResult::failed(name, start.elapsed(), CaseError::Timeout { limit })
        }
        Err(RecvTimeoutError::Disconnected) => CaseResult::failed(
            name,
            start.elapsed(),
            CaseError::Failed {
                message: "worker exited without reporting".to_string(),
            },
        ),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
