//! New task command implementation.
//!
//! This module implements the `todoline new` command, which assembles a line
//! from separate fields instead of parsing one.

use tracing::debug;

use crate::cli::args::{NewTaskArgs, OutputFormat};
use crate::config::FormatConfig;
use crate::core::{parse_date_arg, Clock};
use crate::error::TodoError;
use crate::output::format_task;
use crate::task::{parser, DueTag, Priority, TaskRecord};

/// Execute the new command.
///
/// Tags typed into the description (`+project`, `@context`, `due:...`) count
/// the same as the explicit flags.
///
/// # Errors
///
/// Returns an error if the priority or a date is invalid, or if output
/// formatting fails.
pub fn new_task(
    args: NewTaskArgs,
    settings: &FormatConfig,
    clock: &dyn Clock,
    format: OutputFormat,
) -> Result<String, TodoError> {
    let priority = args.priority.as_deref().map(str::parse::<Priority>).transpose()?;
    let created = args.created.as_deref().map(|d| parse_date_arg(d, clock)).transpose()?;
    let due = args.due.as_deref().map(|d| parse_date_arg(d, clock)).transpose()?;

    // Only the inline tags are read from the description; a leading "x " or
    // "(A) " stays text. The padding lets a first-word +project count.
    let padded = format!(" {}", args.text);
    let inline_projects = parser::projects(&padded);
    let inline_contexts = parser::contexts(&padded);
    let inline_dues = parser::due_dates(&padded);
    let spans: Vec<_> = inline_projects
        .iter()
        .map(|e| e.span.clone())
        .chain(inline_contexts.iter().map(|e| e.span.clone()))
        .chain(inline_dues.iter().map(|e| e.span.clone()))
        .collect();

    let due_tag = args.due_tag.map_or(settings.due_tag, DueTag::from);
    let mut task = TaskRecord::new(parser::strip_tokens(&padded, &spans)).with_due_tag(due_tag);

    if let Some(priority) = priority {
        task = task.with_priority(priority);
    }
    if let Some(created) = created {
        task = task.with_creation_date(created);
    }
    for project in inline_projects.into_iter().map(|e| e.value).chain(args.projects) {
        task = task.with_project(project);
    }
    for context in inline_contexts.into_iter().map(|e| e.value).chain(args.contexts) {
        task = task.with_context(context);
    }
    match (due, parser::preferred_due(&inline_dues)) {
        (Some(date), _) => task = task.with_due_date(date),
        (None, Some(inline)) => {
            let (date, tag) = inline.value;
            task = task.with_due_date(date).with_due_tag(tag);
        },
        (None, None) => {},
    }

    debug!(line = %task, "built new task");
    format_task(&task, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedClock;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2015, 4, 26).unwrap())
    }

    fn args(text: &str) -> NewTaskArgs {
        NewTaskArgs {
            text: text.to_string(),
            priority: None,
            created: None,
            projects: vec![],
            contexts: vec![],
            due: None,
            due_tag: None,
        }
    }

    fn line_of(output: &str) -> String {
        let value: serde_json::Value = serde_json::from_str(output).unwrap();
        value["line"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_new_minimal() {
        let output =
            new_task(args("call mom"), &FormatConfig::default(), &clock(), OutputFormat::Json)
                .unwrap();
        assert_eq!(line_of(&output), "call mom");
    }

    #[test]
    fn test_new_all_fields() {
        let mut a = args("This is a test todo");
        a.priority = Some("A".to_string());
        a.created = Some("today".to_string());
        a.projects = vec!["project".to_string()];
        a.contexts = vec!["context".to_string()];
        a.due = Some("2015-4-26".to_string());

        let output = new_task(a, &FormatConfig::default(), &clock(), OutputFormat::Json).unwrap();
        assert_eq!(
            line_of(&output),
            "(A) 2015-04-26 This is a test todo +project @context Due:2015-04-26"
        );
    }

    #[test]
    fn test_new_uses_configured_due_tag() {
        let mut a = args("pay rent");
        a.due = Some("2015-05-01".to_string());
        let settings = FormatConfig { due_tag: DueTag::Lower };

        let output = new_task(a, &settings, &clock(), OutputFormat::Json).unwrap();
        assert_eq!(line_of(&output), "pay rent due:2015-05-01");
    }

    #[test]
    fn test_new_due_tag_flag_overrides_config() {
        let mut a = args("pay rent");
        a.due = Some("2015-05-01".to_string());
        a.due_tag = Some(crate::cli::args::DueTagArg::Upper);
        let settings = FormatConfig { due_tag: DueTag::Lower };

        let output = new_task(a, &settings, &clock(), OutputFormat::Json).unwrap();
        assert_eq!(line_of(&output), "pay rent Due:2015-05-01");
    }

    #[test]
    fn test_new_merges_inline_tokens() {
        let mut a = args("call +family mom @phone");
        a.projects = vec!["calls".to_string()];

        let output = new_task(a, &FormatConfig::default(), &clock(), OutputFormat::Json).unwrap();
        assert_eq!(line_of(&output), "call mom +family +calls @phone");
    }

    #[test]
    fn test_new_inline_due_prefers_upper_tag() {
        let output = new_task(
            args("pay rent due:2015-05-01 Due:2015-05-03"),
            &FormatConfig { due_tag: DueTag::Lower },
            &clock(),
            OutputFormat::Json,
        )
        .unwrap();
        assert_eq!(line_of(&output), "pay rent Due:2015-05-03");
    }

    #[test]
    fn test_new_leading_markers_stay_text() {
        let output =
            new_task(args("x marks the spot"), &FormatConfig::default(), &clock(), OutputFormat::Json)
                .unwrap();
        assert_eq!(line_of(&output), "x marks the spot");
    }

    #[test]
    fn test_new_invalid_priority() {
        let mut a = args("call mom");
        a.priority = Some("a".to_string());

        let result = new_task(a, &FormatConfig::default(), &clock(), OutputFormat::Json);
        assert!(matches!(result, Err(TodoError::InvalidPriority(_))));
    }

    #[test]
    fn test_new_invalid_date() {
        let mut a = args("call mom");
        a.due = Some("2015-02-30".to_string());

        let result = new_task(a, &FormatConfig::default(), &clock(), OutputFormat::Json);
        assert!(matches!(result, Err(TodoError::InvalidDate(_))));
    }
}
