//! Date utilities shared by the parser, the task record and the CLI.
//!
//! todo.txt dates are plain calendar dates in `YYYY-MM-DD` form. Output is
//! always zero-padded; input is strict for the leading dates and lenient
//! (one or two digit month/day) for due tags.

use chrono::{Local, NaiveDate};

use crate::error::TodoError;

/// `chrono` format string for todo.txt dates.
pub const TODO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A source of "today".
///
/// Completing a task without an explicit date asks the clock, so tests can
/// pin the date instead of depending on when they run.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// The current calendar date.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Format a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(TODO_DATE_FORMAT).to_string()
}

/// Build a date from its textual year, month and day parts.
///
/// Returns `None` when a part is not numeric or the result is not a real
/// calendar date (e.g. February 30th).
#[must_use]
pub fn date_from_parts(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse a strict `YYYY-MM-DD` date (four digit year, two digit month and day).
#[must_use]
pub fn parse_strict_date(input: &str) -> Option<NaiveDate> {
    parse_with_widths(input, 2..=2)
}

/// Parse a `YYYY-M-D` date where month and day may have one or two digits.
#[must_use]
pub fn parse_lenient_date(input: &str) -> Option<NaiveDate> {
    parse_with_widths(input, 1..=2)
}

fn parse_with_widths(input: &str, widths: std::ops::RangeInclusive<usize>) -> Option<NaiveDate> {
    let mut parts = input.split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if year.len() != 4 || !all_digits(year) {
        return None;
    }
    for part in [month, day] {
        if !widths.contains(&part.len()) || !all_digits(part) {
            return None;
        }
    }

    date_from_parts(year, month, day)
}

/// Parse a date given on the command line.
///
/// Accepts `today` (resolved through `clock`) or a lenient `YYYY-M-D` date.
///
/// # Errors
///
/// Returns `TodoError::InvalidDate` if the input is neither.
pub fn parse_date_arg(input: &str, clock: &dyn Clock) -> Result<NaiveDate, TodoError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("today") {
        return Ok(clock.today());
    }
    parse_lenient_date(input).ok_or_else(|| TodoError::InvalidDate(input.to_string()))
}
