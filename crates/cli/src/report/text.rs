// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format output.

use termcolor::{Color, ColorSpec, WriteColor};

use super::ReportFormatter;
use crate::config::{RunnerConfig, duration_ms};
use crate::runner::{CaseResult, SessionResult};

/// Text format formatter.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn write_config(
        &self,
        writer: &mut dyn WriteColor,
        config: &RunnerConfig,
    ) -> anyhow::Result<()> {
        writeln!(writer, "globals: {}", config.globals())?;
        writeln!(writer, "environment: {}", config.environment())?;
        write_list(writer, "include", config.include())?;
        write_list(writer, "exclude", config.exclude())?;
        writeln!(writer, "testTimeout: {}ms", config.test_timeout_ms())?;
        writeln!(writer, "hookTimeout: {}ms", config.hook_timeout_ms())?;
        Ok(())
    }

    fn write_session(
        &self,
        writer: &mut dyn WriteColor,
        session: &SessionResult,
    ) -> anyhow::Result<()> {
        for case in &session.cases {
            write_case(writer, case)?;
        }
        writeln!(writer)?;

        let mut summary = format!(
            "{} tests: {} passed, {} failed",
            session.case_count(),
            session.passed_count(),
            session.failed_count()
        );
        let timed_out = session.timed_out_count();
        if timed_out > 0 {
            summary.push_str(&format!(" ({timed_out} timed out)"));
        }
        writeln!(
            writer,
            "{summary} in {:.2}s",
            session.total_time.as_secs_f64()
        )?;
        Ok(())
    }
}

fn write_list(writer: &mut dyn WriteColor, label: &str, items: &[String]) -> anyhow::Result<()> {
    if items.is_empty() {
        writeln!(writer, "{label}: []")?;
        return Ok(());
    }
    writeln!(writer, "{label}:")?;
    for item in items {
        writeln!(writer, "  - {item}")?;
    }
    Ok(())
}

fn write_case(writer: &mut dyn WriteColor, case: &CaseResult) -> anyhow::Result<()> {
    let (label, color) = if case.passed {
        ("PASS", Color::Green)
    } else if case.timed_out() {
        ("TIMEOUT", Color::Yellow)
    } else {
        ("FAIL", Color::Red)
    };

    writer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(writer, "{label}")?;
    writer.reset()?;

    match &case.error {
        None => writeln!(writer, " {} ({}ms)", case.name, duration_ms(case.duration))?,
        Some(err) => writeln!(writer, " {}: {err}", case.name)?,
    }
    Ok(())
}
