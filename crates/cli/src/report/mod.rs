// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for descriptors and session results.

mod json;
mod text;

use termcolor::{NoColor, WriteColor};

use crate::cli::OutputFormat;
use crate::config::RunnerConfig;
use crate::runner::SessionResult;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Trait for rendering into a target format.
pub trait ReportFormatter {
    /// Render a loaded descriptor.
    fn write_config(&self, writer: &mut dyn WriteColor, config: &RunnerConfig)
    -> anyhow::Result<()>;

    /// Render the results of a session.
    fn write_session(
        &self,
        writer: &mut dyn WriteColor,
        session: &SessionResult,
    ) -> anyhow::Result<()>;
}

/// Select the formatter for an output format.
pub fn formatter(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Render a descriptor to an uncolored string.
pub fn format_config(format: OutputFormat, config: &RunnerConfig) -> anyhow::Result<String> {
    let mut buf = NoColor::new(Vec::new());
    formatter(format).write_config(&mut buf, config)?;
    Ok(String::from_utf8(buf.into_inner())?)
}

/// Render session results to an uncolored string.
pub fn format_session(format: OutputFormat, session: &SessionResult) -> anyhow::Result<String> {
    let mut buf = NoColor::new(Vec::new());
    formatter(format).write_session(&mut buf, session)?;
    Ok(String::from_utf8(buf.into_inner())?)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
