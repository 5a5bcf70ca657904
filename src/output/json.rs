//! JSON output formatting for todoline.

use serde_json::json;

use crate::error::TodoError;
use crate::task::TaskRecord;

/// Format a task as JSON: its canonical line plus every field.
///
/// # Errors
///
/// Returns `TodoError::Parse` if JSON serialization fails.
pub fn format_task_json(task: &TaskRecord) -> Result<String, TodoError> {
    let output = json!({
        "line": task.format(),
        "task": task
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format only the canonical line of a task as JSON.
///
/// # Errors
///
/// Returns `TodoError::Parse` if JSON serialization fails.
pub fn format_line_json(task: &TaskRecord) -> Result<String, TodoError> {
    let output = json!({ "line": task.format() });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the result of comparing two tasks as JSON.
///
/// # Errors
///
/// Returns `TodoError::Parse` if JSON serialization fails.
pub fn format_comparison_json(first: &TaskRecord, second: &TaskRecord) -> Result<String, TodoError> {
    let output = json!({
        "same": first.same_as(second),
        "first": first.format(),
        "second": second.format()
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
