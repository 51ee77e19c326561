// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format output.

use serde_json::json;
use termcolor::WriteColor;

use super::ReportFormatter;
use crate::config::{RunnerConfig, duration_ms};
use crate::runner::SessionResult;

/// JSON format formatter.
///
/// Keys use the declaration's own option names.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn write_config(
        &self,
        writer: &mut dyn WriteColor,
        config: &RunnerConfig,
    ) -> anyhow::Result<()> {
        let value = json!({
            "globals": config.globals(),
            "environment": config.environment().as_str(),
            "include": config.include(),
            "exclude": config.exclude(),
            "testTimeout": config.test_timeout_ms(),
            "hookTimeout": config.hook_timeout_ms(),
        });
        serde_json::to_writer_pretty(&mut *writer, &value)?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_session(
        &self,
        writer: &mut dyn WriteColor,
        session: &SessionResult,
    ) -> anyhow::Result<()> {
        let cases: Vec<_> = session
            .cases
            .iter()
            .map(|case| {
                let status = if case.passed {
                    "passed"
                } else if case.timed_out() {
                    "timeout"
                } else {
                    "failed"
                };
                json!({
                    "name": case.name,
                    "status": status,
                    "duration_ms": duration_ms(case.duration),
                    "error": case.error.as_ref().map(ToString::to_string),
                })
            })
            .collect();

        let value = json!({
            "finished": session.finished.to_rfc3339(),
            "passed": session.passed(),
            "total_ms": duration_ms(session.total_time),
            "counts": {
                "total": session.case_count(),
                "passed": session.passed_count(),
                "failed": session.failed_count(),
                "timed_out": session.timed_out_count(),
            },
            "cases": cases,
        });
        serde_json::to_writer_pretty(&mut *writer, &value)?;
        writeln!(writer)?;
        Ok(())
    }
}
