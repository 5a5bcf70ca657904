//! Command implementations for todoline.
//!
//! Every command works on the line(s) given as arguments and returns the
//! text to print.

mod completions;
mod new;

pub use completions::completions;
pub use new::new_task;

use tracing::debug;

use crate::cli::args::OutputFormat;
use crate::core::{parse_date_arg, Clock};
use crate::error::TodoError;
use crate::output::{format_comparison, format_line, format_task};
use crate::task::LineParser;

/// Execute parse command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn parse(line: &str, clock: &dyn Clock, format: OutputFormat) -> Result<String, TodoError> {
    let task = LineParser::with_clock(clock).parse(line);
    format_task(&task, format)
}

/// Execute normalize command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn normalize(line: &str, clock: &dyn Clock, format: OutputFormat) -> Result<String, TodoError> {
    let task = LineParser::with_clock(clock).parse(line);
    format_line(&task, format)
}

/// Execute done command
///
/// # Errors
///
/// Returns an error if the date is invalid or output formatting fails.
pub fn done(
    line: &str,
    date: Option<&str>,
    clock: &dyn Clock,
    format: OutputFormat,
) -> Result<String, TodoError> {
    let completed_on = date.map(|d| parse_date_arg(d, clock)).transpose()?;
    let mut task = LineParser::with_clock(clock).parse(line);

    if let Some(priority) = task.priority() {
        debug!(%priority, "dropping priority on completion");
    }
    task.done_with_clock(completed_on, clock);

    format_line(&task, format)
}

/// Execute undo command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn undo(line: &str, clock: &dyn Clock, format: OutputFormat) -> Result<String, TodoError> {
    let mut task = LineParser::with_clock(clock).parse(line);
    if !task.is_completed() {
        debug!(line, "undo on an open task is a no-op");
    }
    task.undo();
    format_line(&task, format)
}

/// Execute same command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn same(
    first: &str,
    second: &str,
    clock: &dyn Clock,
    format: OutputFormat,
) -> Result<String, TodoError> {
    let parser = LineParser::with_clock(clock);
    let first = parser.parse(first);
    let second = parser.parse(second);
    format_comparison(&first, &second, format)
}
