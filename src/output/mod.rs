//! Output formatting for todoline.
//!
//! This module renders task records for the terminal or as JSON.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::TodoError;
use crate::task::TaskRecord;

pub use json::*;
pub use pretty::*;

/// Format a task's full breakdown based on output format
///
/// # Errors
///
/// Returns `TodoError::Parse` if JSON serialization fails.
pub fn format_task(task: &TaskRecord, format: OutputFormat) -> Result<String, TodoError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(task)),
        OutputFormat::Json => format_task_json(task),
    }
}

/// Format a task's line based on output format
///
/// # Errors
///
/// Returns `TodoError::Parse` if JSON serialization fails.
pub fn format_line(task: &TaskRecord, format: OutputFormat) -> Result<String, TodoError> {
    match format {
        OutputFormat::Pretty => Ok(format_line_pretty(task)),
        OutputFormat::Json => format_line_json(task),
    }
}

/// Format a comparison of two tasks based on output format
///
/// # Errors
///
/// Returns `TodoError::Parse` if JSON serialization fails.
pub fn format_comparison(
    first: &TaskRecord,
    second: &TaskRecord,
    format: OutputFormat,
) -> Result<String, TodoError> {
    match format {
        OutputFormat::Pretty => Ok(format_comparison_pretty(first, second)),
        OutputFormat::Json => format_comparison_json(first, second),
    }
}
