//! Colored terminal output for todoline.

use colored::Colorize;

use crate::core::format_date;
use crate::task::TaskRecord;

/// Format a task as a field-by-field breakdown.
#[must_use]
pub fn format_task_pretty(task: &TaskRecord) -> String {
    let status_icon = if task.is_completed() {
        "[x]".green()
    } else {
        "[ ]".white()
    };

    let text = if task.text().is_empty() {
        "(no description)".dimmed().to_string()
    } else {
        task.text().bold().to_string()
    };

    let mut output = format!("{status_icon} {text}\n");

    if let Some(priority) = task.priority() {
        output.push_str(&format!("  {}: {}\n", "Priority".dimmed(), priority.to_string().red()));
    }

    if let Some(completed) = task.completed_date() {
        output.push_str(&format!("  {}: {}\n", "Completed".dimmed(), format_date(completed)));
    }

    if let Some(created) = task.creation_date() {
        output.push_str(&format!("  {}: {}\n", "Created".dimmed(), format_date(created)));
    }

    if !task.projects().is_empty() {
        let projects = task
            .projects()
            .iter()
            .map(|p| format!("+{p}"))
            .collect::<Vec<_>>()
            .join(" ");
        output.push_str(&format!("  {}: {}\n", "Projects".dimmed(), projects.cyan()));
    }

    if !task.contexts().is_empty() {
        let contexts = task
            .contexts()
            .iter()
            .map(|c| format!("@{c}"))
            .collect::<Vec<_>>()
            .join(" ");
        output.push_str(&format!("  {}: {}\n", "Contexts".dimmed(), contexts.cyan()));
    }

    if let Some(due) = task.due_date() {
        output.push_str(&format!("  {}: {}\n", "Due".dimmed(), format_date(due).yellow()));
    }

    output.push_str(&format!("  {}: {}", "Line".dimmed(), task.format()));
    output
}

/// Format a task as its todo.txt line.
#[must_use]
pub fn format_line_pretty(task: &TaskRecord) -> String {
    task.format()
}

/// Format the result of comparing two tasks.
#[must_use]
pub fn format_comparison_pretty(first: &TaskRecord, second: &TaskRecord) -> String {
    if first.same_as(second) {
        format!("{} {}", "same".green().bold(), first.format())
    } else {
        format!(
            "{}\n  {}\n  {}",
            "different".red().bold(),
            first.format(),
            second.format()
        )
    }
}
