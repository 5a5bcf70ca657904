//! Core abstractions for todoline.
//!
//! This module provides the date helpers and time source shared by the
//! task model, the line parser and the CLI.

mod datetime;

pub use datetime::{
    date_from_parts, format_date, parse_date_arg, parse_lenient_date, parse_strict_date, Clock,
    FixedClock, SystemClock, TODO_DATE_FORMAT,
};

#[cfg(test)]
pub use datetime::MockClock;
