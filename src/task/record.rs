//! The structured form of a single todo.txt line.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::parser::LineParser;
use super::priority::Priority;
use crate::core::{format_date, Clock, SystemClock};
use crate::error::TodoError;

/// Letter case of the due-date tag.
///
/// todo.txt tools write both `Due:` and `due:`. The parser remembers which one
/// a line used so formatting reproduces it; records built by hand use `Upper`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DueTag {
    /// `Due:`
    #[default]
    Upper,
    /// `due:`
    Lower,
}

impl DueTag {
    /// The literal tag, including the trailing colon.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upper => "Due:",
            Self::Lower => "due:",
        }
    }
}

impl fmt::Display for DueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One task.
///
/// Equality (`==` and [`TaskRecord::same_as`]) compares the formatted lines,
/// not the fields: two records are the same task when they would be written
/// out identically.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskRecord {
    text: String,
    creation_date: Option<NaiveDate>,
    priority: Option<Priority>,
    projects: Vec<String>,
    contexts: Vec<String>,
    due_date: Option<NaiveDate>,
    due_tag: DueTag,
    completed: bool,
    completed_date: Option<NaiveDate>,
}

impl TaskRecord {
    /// Create an open task with only a description.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Parse a todo.txt line using the system clock.
    ///
    /// ```
    /// use todoline::TaskRecord;
    ///
    /// let task = TaskRecord::parse("(A) call mom +family @phone");
    /// assert_eq!(task.text(), "call mom");
    /// assert_eq!(task.projects(), ["family"]);
    /// assert_eq!(task.format(), "(A) call mom +family @phone");
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Self {
        LineParser::new().parse(line)
    }

    // Builders

    /// Set the creation date.
    #[must_use]
    pub fn with_creation_date(mut self, date: NaiveDate) -> Self {
        self.creation_date = Some(date);
        self
    }

    /// Set the priority. Ignored on completed tasks.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        if !self.completed {
            self.priority = Some(priority);
        }
        self
    }

    /// Append a project.
    #[must_use]
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.projects.push(project.into());
        self
    }

    /// Append a context.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.contexts.push(context.into());
        self
    }

    /// Set the due date.
    #[must_use]
    pub fn with_due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    /// Choose the due tag spelling used when formatting.
    #[must_use]
    pub fn with_due_tag(mut self, tag: DueTag) -> Self {
        self.due_tag = tag;
        self
    }

    /// Mark the task completed on `date`.
    #[must_use]
    pub fn with_completion(mut self, date: NaiveDate) -> Self {
        self.done(Some(date));
        self
    }

    // Accessors

    /// Description with all structural tokens removed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn creation_date(&self) -> Option<NaiveDate> {
        self.creation_date
    }

    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Projects in order of appearance.
    #[must_use]
    pub fn projects(&self) -> &[String] {
        &self.projects
    }

    /// Contexts in order of appearance.
    #[must_use]
    pub fn contexts(&self) -> &[String] {
        &self.contexts
    }

    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    #[must_use]
    pub const fn due_tag(&self) -> DueTag {
        self.due_tag
    }

    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub const fn completed_date(&self) -> Option<NaiveDate> {
        self.completed_date
    }

    // Mutation

    /// Replace the description.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_creation_date(&mut self, date: Option<NaiveDate>) {
        self.creation_date = date;
    }

    pub fn set_due_date(&mut self, date: Option<NaiveDate>) {
        self.due_date = date;
    }

    /// Set or clear the priority.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::PriorityOnCompleted` when setting a priority on a
    /// completed task. Clearing always succeeds.
    pub fn set_priority(&mut self, priority: Option<Priority>) -> Result<(), TodoError> {
        if self.completed && priority.is_some() {
            return Err(TodoError::PriorityOnCompleted);
        }
        self.priority = priority;
        Ok(())
    }

    pub fn add_project(&mut self, project: impl Into<String>) {
        self.projects.push(project.into());
    }

    pub fn add_context(&mut self, context: impl Into<String>) {
        self.contexts.push(context.into());
    }

    /// Complete the task, defaulting the completion date to today.
    ///
    /// The priority is dropped. Calling this again overwrites the date.
    pub fn done(&mut self, completed_on: Option<NaiveDate>) {
        self.done_with_clock(completed_on, &SystemClock);
    }

    /// Complete the task, asking `clock` for the date when none is given.
    pub fn done_with_clock(&mut self, completed_on: Option<NaiveDate>, clock: &dyn Clock) {
        self.completed = true;
        self.priority = None;
        self.completed_date = Some(completed_on.unwrap_or_else(|| clock.today()));
    }

    /// Reopen the task.
    ///
    /// A priority dropped by [`TaskRecord::done`] is not restored.
    pub fn undo(&mut self) {
        self.completed = false;
        self.completed_date = None;
    }

    /// Whether both records format to the same line.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        self.format() == other.format()
    }

    /// Render the record as a canonical todo.txt line.
    #[must_use]
    pub fn format(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        if self.completed {
            parts.push("x".to_string());
            if let Some(date) = self.completed_date {
                parts.push(format_date(date));
            }
        } else if let Some(priority) = self.priority {
            parts.push(format!("({priority})"));
        }

        if let Some(date) = self.creation_date {
            parts.push(format_date(date));
        }

        if !self.text.is_empty() {
            parts.push(self.text.clone());
        }

        if !self.projects.is_empty() {
            parts.push(format!("+{}", self.projects.join(" +")));
        }

        if !self.contexts.is_empty() {
            parts.push(format!("@{}", self.contexts.join(" @")));
        }

        if let Some(date) = self.due_date {
            parts.push(format!("{}{}", self.due_tag, format_date(date)));
        }

        parts.join(" ")
    }
}

impl fmt::Display for TaskRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl PartialEq for TaskRecord {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for TaskRecord {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedClock, MockClock};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn prio(letter: char) -> Priority {
        Priority::new(letter).unwrap()
    }

    fn full_task() -> TaskRecord {
        TaskRecord::new("This is a test todo")
            .with_priority(prio('A'))
            .with_creation_date(ymd(2015, 4, 26))
            .with_project("projects")
            .with_context("contexts")
            .with_due_date(ymd(2015, 4, 26))
    }

    // ==============
    // Format Tests
    // ==============

    #[test]
    fn test_format_minimal() {
        assert_eq!(TaskRecord::new("Just a test todo").format(), "Just a test todo");
    }

    #[test]
    fn test_format_all_fields() {
        assert_eq!(
            full_task().format(),
            "(A) 2015-04-26 This is a test todo +projects @contexts Due:2015-04-26"
        );
    }

    #[test]
    fn test_format_completed() {
        let task = full_task().with_completion(ymd(2015, 4, 30));
        assert_eq!(
            task.format(),
            "x 2015-04-30 2015-04-26 This is a test todo +projects @contexts Due:2015-04-26"
        );
    }

    #[test]
    fn test_format_multiple_projects_and_contexts() {
        let task = TaskRecord::new("tests to do")
            .with_project("p1")
            .with_project("p2")
            .with_context("c1")
            .with_context("c2");
        assert_eq!(task.format(), "tests to do +p1 +p2 @c1 @c2");
    }

    #[test]
    fn test_format_lowercase_due_tag() {
        let task = TaskRecord::new("pay rent")
            .with_due_date(ymd(2015, 4, 6))
            .with_due_tag(DueTag::Lower);
        assert_eq!(task.format(), "pay rent due:2015-04-06");
    }

    #[test]
    fn test_format_empty_text_has_no_double_space() {
        let task = TaskRecord::new("").with_project("p").with_completion(ymd(2015, 4, 30));
        assert_eq!(task.format(), "x 2015-04-30 +p");
        assert_eq!(TaskRecord::new("").format(), "");
    }

    #[test]
    fn test_display_matches_format() {
        let task = full_task();
        assert_eq!(task.to_string(), task.format());
    }

    // ==============
    // Mutation Tests
    // ==============

    #[test]
    fn test_done_clears_priority() {
        let mut task = full_task();
        task.done(None);
        assert!(task.is_completed());
        assert_eq!(task.priority(), None);
    }

    #[test]
    fn test_done_defaults_to_clock_date() {
        let mut clock = MockClock::new();
        clock.expect_today().times(1).return_const(ymd(2015, 5, 1));

        let mut task = full_task();
        task.done_with_clock(None, &clock);
        assert_eq!(task.completed_date(), Some(ymd(2015, 5, 1)));
    }

    #[test]
    fn test_done_with_explicit_date_skips_clock() {
        let mut clock = MockClock::new();
        clock.expect_today().times(0);

        let mut task = full_task();
        task.done_with_clock(Some(ymd(2015, 4, 30)), &clock);
        assert_eq!(task.completed_date(), Some(ymd(2015, 4, 30)));
        assert!(task.format().starts_with("x 2015-04-30 "));
    }

    #[test]
    fn test_done_without_date_uses_today() {
        let mut task = TaskRecord::new("water plants");
        task.done(None);
        let today = chrono::Local::now().date_naive();
        // Tolerate a run that straddles midnight.
        let completed = task.completed_date().unwrap();
        assert!(completed == today || completed == today.pred_opt().unwrap());
    }

    #[test]
    fn test_done_twice_overwrites_date() {
        let mut task = TaskRecord::new("water plants");
        task.done(Some(ymd(2015, 4, 30)));
        task.done(Some(ymd(2015, 5, 2)));
        assert_eq!(task.completed_date(), Some(ymd(2015, 5, 2)));
    }

    #[test]
    fn test_undo_does_not_restore_priority() {
        let mut task = full_task();
        task.done_with_clock(None, &FixedClock(ymd(2015, 4, 30)));
        task.undo();
        assert!(!task.is_completed());
        assert_eq!(task.completed_date(), None);
        assert_eq!(task.priority(), None);
        assert_eq!(
            task.format(),
            "2015-04-26 This is a test todo +projects @contexts Due:2015-04-26"
        );
    }

    #[test]
    fn test_with_priority_ignored_when_completed() {
        let task = TaskRecord::new("t")
            .with_completion(ymd(2015, 4, 30))
            .with_priority(prio('B'));
        assert_eq!(task.priority(), None);
    }

    #[test]
    fn test_set_priority_rejected_when_completed() {
        let mut task = TaskRecord::new("t").with_completion(ymd(2015, 4, 30));
        assert!(matches!(
            task.set_priority(Some(prio('A'))),
            Err(TodoError::PriorityOnCompleted)
        ));
        assert!(task.set_priority(None).is_ok());
    }

    #[test]
    fn test_setters() {
        let mut task = TaskRecord::new("old");
        task.set_text("new");
        task.set_creation_date(Some(ymd(2015, 1, 1)));
        task.set_due_date(Some(ymd(2015, 2, 1)));
        task.set_priority(Some(prio('C'))).unwrap();
        task.add_project("home");
        task.add_context("desk");
        assert_eq!(task.format(), "(C) 2015-01-01 new +home @desk Due:2015-02-01");

        task.set_due_date(None);
        task.set_creation_date(None);
        assert_eq!(task.format(), "(C) new +home @desk");
    }

    // ==============
    // Equality Tests
    // ==============

    #[test]
    fn test_same_as_compares_output() {
        assert!(full_task().same_as(&full_task()));
        assert_eq!(full_task(), full_task());
        assert_ne!(full_task(), TaskRecord::new("This is a test todo"));
    }

    #[test]
    fn test_same_as_ignores_fields_without_output() {
        // The due tag only shows up when there is a due date.
        let a = TaskRecord::new("no due").with_due_tag(DueTag::Lower);
        let b = TaskRecord::new("no due").with_due_tag(DueTag::Upper);
        assert!(a.same_as(&b));
    }

    #[test]
    fn test_serialize_record() {
        let json = serde_json::to_value(full_task()).unwrap();
        assert_eq!(json["text"], "This is a test todo");
        assert_eq!(json["priority"], "A");
        assert_eq!(json["creation_date"], "2015-04-26");
        assert_eq!(json["due_tag"], "upper");
        assert_eq!(json["projects"][0], "projects");
        assert_eq!(json["completed"], false);
    }
}
