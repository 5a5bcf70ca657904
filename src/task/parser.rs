//! todo.txt line parser.
//!
//! Every structural token has its own extractor. Each one scans the original
//! line and reports the value it found together with the byte span it
//! occupies, so extractors never depend on each other. The description is
//! whatever is left once the union of all spans is cut out.
//!
//! Tokens and where they are recognized:
//!
//! | Token            | Shape                          | Where                                  |
//! |------------------|--------------------------------|----------------------------------------|
//! | completion       | `x `                           | line start                             |
//! | completed date   | `YYYY-MM-DD`                   | right after `x `                       |
//! | creation date    | `YYYY-MM-DD`                   | after the completed date or priority, or at line start |
//! | priority         | `(A) `                         | line start                             |
//! | project          | ` +name`                       | anywhere                               |
//! | context          | ` @name`                       | anywhere                               |
//! | due date         | `Due:YYYY-M-D` / `due:YYYY-M-D`| anywhere, at a token start             |

use std::ops::Range;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::{debug, trace};

use super::priority::Priority;
use super::record::{DueTag, TaskRecord};
use crate::core::{date_from_parts, parse_strict_date, Clock, SystemClock};

/// A value recognized in a line and the bytes it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted<T> {
    /// The parsed value.
    pub value: T,
    /// Byte range of the token in the original line.
    pub span: Range<usize>,
}

impl<T> Extracted<T> {
    const fn new(value: T, span: Range<usize>) -> Self {
        Self { value, span }
    }
}

// Compiled regex patterns
static COMPLETION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^x ").unwrap_or_else(|e| panic!("Invalid completion regex: {e}")));

static COMPLETED_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^x ([0-9]{4}-[0-9]{2}-[0-9]{2})(?: |$)")
        .unwrap_or_else(|e| panic!("Invalid completed date regex: {e}"))
});

static COMPLETED_CREATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "x <completed> <created>"
    Regex::new(r"^x ([0-9]{4}-[0-9]{2}-[0-9]{2}) ([0-9]{4}-[0-9]{2}-[0-9]{2})(?: |$)")
        .unwrap_or_else(|e| panic!("Invalid completed creation date regex: {e}"))
});

static OPEN_CREATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "<created>" or "(A) <created>"
    Regex::new(r"^(?:\([A-Z]\) )?([0-9]{4}-[0-9]{2}-[0-9]{2})(?: |$)")
        .unwrap_or_else(|e| panic!("Invalid creation date regex: {e}"))
});

static PRIORITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(([A-Z])\) ").unwrap_or_else(|e| panic!("Invalid priority regex: {e}"))
});

static PROJECT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" \+([\w-]+)").unwrap_or_else(|e| panic!("Invalid project regex: {e}")));

static CONTEXT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" @([\w-]+)").unwrap_or_else(|e| panic!("Invalid context regex: {e}")));

static DUE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // Month and day may be one or two digits.
    Regex::new(r"(?:^| )([Dd]ue):([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})\b")
        .unwrap_or_else(|e| panic!("Invalid due date regex: {e}"))
});

/// Find the `x ` completion marker.
#[must_use]
pub fn completion_marker(line: &str) -> Option<Range<usize>> {
    COMPLETION_PATTERN.find(line).map(|m| m.range())
}

/// Find the completion date that follows the completion marker.
///
/// The span covers the date and its trailing space, not the marker.
#[must_use]
pub fn completed_date(line: &str) -> Option<Extracted<NaiveDate>> {
    let caps = COMPLETED_DATE_PATTERN.captures(line)?;
    let date = caps.get(1)?;
    let value = strict_date(date.as_str(), "completed date")?;
    Some(Extracted::new(value, date.start()..whole_end(&caps)))
}

/// Find the creation date.
///
/// Only the leading window of the line is considered: directly after the
/// completed date on a completed line, otherwise at the very start or right
/// after the priority. A date anywhere else is part of the description.
#[must_use]
pub fn creation_date(line: &str) -> Option<Extracted<NaiveDate>> {
    if completion_marker(line).is_some() {
        let caps = COMPLETED_CREATION_PATTERN.captures(line)?;
        strict_date(caps.get(1)?.as_str(), "completed date")?;
        let date = caps.get(2)?;
        let value = strict_date(date.as_str(), "creation date")?;
        return Some(Extracted::new(value, date.start()..whole_end(&caps)));
    }

    let caps = OPEN_CREATION_PATTERN.captures(line)?;
    let date = caps.get(1)?;
    let value = strict_date(date.as_str(), "creation date")?;
    Some(Extracted::new(value, date.start()..whole_end(&caps)))
}

/// Find a leading `(A) ` priority.
#[must_use]
pub fn priority(line: &str) -> Option<Extracted<Priority>> {
    let caps = PRIORITY_PATTERN.captures(line)?;
    let letter = caps.get(1)?.as_str().chars().next()?;
    let value = Priority::new(letter).ok()?;
    Some(Extracted::new(value, 0..whole_end(&caps)))
}

/// Find every ` +project`, in order. Spans include the leading space.
#[must_use]
pub fn projects(line: &str) -> Vec<Extracted<String>> {
    tagged_words(&PROJECT_PATTERN, line)
}

/// Find every ` @context`, in order. Spans include the leading space.
#[must_use]
pub fn contexts(line: &str) -> Vec<Extracted<String>> {
    tagged_words(&CONTEXT_PATTERN, line)
}

/// Find every due tag with a valid date, in order.
///
/// Tags whose date is not a real calendar date are skipped and stay part of
/// the description.
#[must_use]
pub fn due_dates(line: &str) -> Vec<Extracted<(NaiveDate, DueTag)>> {
    DUE_PATTERN
        .captures_iter(line)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let tag = if caps.get(1)?.as_str() == "due" {
                DueTag::Lower
            } else {
                DueTag::Upper
            };
            let Some(date) = date_from_parts(
                caps.get(2)?.as_str(),
                caps.get(3)?.as_str(),
                caps.get(4)?.as_str(),
            ) else {
                debug!(token = whole.as_str().trim_start(), "ignoring due tag with invalid date");
                return None;
            };
            Some(Extracted::new((date, tag), whole.range()))
        })
        .collect()
}

/// Remove the given spans from `line` and trim what is left.
///
/// Spans may overlap or touch; their union is removed.
#[must_use]
pub fn strip_tokens(line: &str, spans: &[Range<usize>]) -> String {
    cut_spans(line, spans).trim().to_string()
}

/// Pick the due tag that sets the due date: the first `Due:` tag, or the
/// first `due:` tag when there is no `Due:` one.
#[must_use]
pub fn preferred_due<T>(dues: &[Extracted<(T, DueTag)>]) -> Option<&Extracted<(T, DueTag)>> {
    dues.iter()
        .find(|e| e.value.1 == DueTag::Upper)
        .or_else(|| dues.first())
}

fn cut_spans(line: &str, spans: &[Range<usize>]) -> String {
    let mut spans: Vec<Range<usize>> = spans.iter().filter(|s| !s.is_empty()).cloned().collect();
    spans.sort_by_key(|s| s.start);

    let mut text = String::with_capacity(line.len());
    let mut cursor = 0;
    for span in spans {
        if span.start > cursor {
            text.push_str(&line[cursor..span.start]);
        }
        cursor = cursor.max(span.end);
    }
    if cursor < line.len() {
        text.push_str(&line[cursor..]);
    }
    text
}

fn token_spans(
    leading: &[Range<usize>],
    projects: &[Extracted<String>],
    contexts: &[Extracted<String>],
    dues: &[Extracted<(NaiveDate, DueTag)>],
) -> Vec<Range<usize>> {
    let mut spans = leading.to_vec();
    spans.extend(projects.iter().map(|e| e.span.clone()));
    spans.extend(contexts.iter().map(|e| e.span.clone()));
    spans.extend(dues.iter().map(|e| e.span.clone()));
    spans
}

/// Byte offset of the first description character, or the line length if
/// there is none.
fn first_text_byte(line: &str, spans: &[Range<usize>]) -> usize {
    line.char_indices()
        .find(|&(i, c)| !c.is_whitespace() && !spans.iter().any(|s| s.contains(&i)))
        .map_or(line.len(), |(i, _)| i)
}

/// The leading fields a record writes in front of its description.
#[derive(Debug, Clone, Copy)]
struct LeadingFields {
    completed: bool,
    priority: bool,
    created: bool,
}

impl LeadingFields {
    /// Whether `text`, written right after these fields, would be read back
    /// as a completion marker, priority or creation date.
    fn would_claim(self, text: &str) -> bool {
        if text.is_empty() || self.created {
            return false;
        }
        let starts_with_date = text.split(' ').next().and_then(parse_strict_date).is_some();
        if self.completed || self.priority {
            return starts_with_date;
        }
        starts_with_date || completion_marker(text).is_some() || priority(text).is_some()
    }
}

fn tagged_words(pattern: &Regex, line: &str) -> Vec<Extracted<String>> {
    pattern
        .captures_iter(line)
        .filter_map(|caps| {
            let word = caps.get(1)?;
            Some(Extracted::new(word.as_str().to_string(), caps.get(0)?.range()))
        })
        .collect()
}

fn strict_date(token: &str, field: &str) -> Option<NaiveDate> {
    let date = parse_strict_date(token);
    if date.is_none() {
        debug!(token, field, "ignoring invalid date");
    }
    date
}

fn whole_end(caps: &Captures<'_>) -> usize {
    caps.get(0).map_or(0, |m| m.end())
}

/// Turns todo.txt lines into [`TaskRecord`]s.
///
/// The clock supplies the completion date for lines marked done without
/// one.
#[derive(Debug, Clone, Default)]
pub struct LineParser<C = SystemClock> {
    clock: C,
}

impl LineParser {
    /// A parser that uses the system clock.
    #[must_use]
    pub const fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> LineParser<C> {
    /// A parser that asks `clock` for today's date.
    #[must_use]
    pub const fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Parse one line. Never fails: anything unrecognized stays in the text.
    #[must_use]
    pub fn parse(&self, line: &str) -> TaskRecord {
        let line = line.trim_end_matches(['\r', '\n']);

        let completion = completion_marker(line);
        let completed_on = completed_date(line);
        let created = creation_date(line);
        // Completed tasks never carry a priority.
        let priority = if completion.is_none() { priority(line) } else { None };
        let mut projects = projects(line);
        let mut contexts = contexts(line);
        let mut dues = due_dates(line);

        let mut leading: Vec<Range<usize>> = Vec::new();
        leading.extend(completion.clone());
        leading.extend(completed_on.iter().map(|e| e.span.clone()));
        leading.extend(created.iter().map(|e| e.span.clone()));
        leading.extend(priority.iter().map(|e| e.span.clone()));

        let fields = LeadingFields {
            completed: completion.is_some(),
            priority: priority.is_some(),
            created: created.is_some(),
        };
        let spans = token_spans(&leading, &projects, &contexts, &dues);
        let mut text = strip_tokens(line, &spans);

        if fields.would_claim(&text) {
            // Tags in front of the description stay in it, so the formatted
            // line reads back the same way.
            let text_start = first_text_byte(line, &spans);
            projects.retain(|e| e.span.end > text_start);
            contexts.retain(|e| e.span.end > text_start);
            dues.retain(|e| e.span.end > text_start);

            let spans = token_spans(&leading, &projects, &contexts, &dues);
            text = strip_tokens(line, &spans);
            if fields.would_claim(&text) {
                text = cut_spans(line, &spans).trim_end().to_string();
            }
            debug!(line, text = text.as_str(), "description kept its leading tokens");
        }

        let mut task = TaskRecord::new(text);

        if let Some(created) = created {
            task = task.with_creation_date(created.value);
        }
        if let Some(priority) = priority {
            task = task.with_priority(priority.value);
        }
        for project in projects {
            task = task.with_project(project.value);
        }
        for context in contexts {
            task = task.with_context(context.value);
        }
        if let Some(due) = preferred_due(&dues) {
            let (date, tag) = due.value;
            task = task.with_due_date(date).with_due_tag(tag);
        }
        if completion.is_some() {
            task.done_with_clock(completed_on.map(|e| e.value), &self.clock);
        }

        trace!(line, completed = task.is_completed(), "parsed task line");
        task
    }
}

/// Parse one line with the system clock.
#[must_use]
pub fn parse_line(line: &str) -> TaskRecord {
    LineParser::new().parse(line)
}
