//! todoline - todo.txt task lines
//!
//! This crate parses single todo.txt lines into structured task records and
//! writes them back out. Lines already in canonical form survive a
//! parse/format round trip byte for byte.
//!
//! ```
//! use todoline::TaskRecord;
//!
//! let line = "(A) 2015-04-26 This is a test todo +project @context Due:2015-04-26";
//! let mut task = TaskRecord::parse(line);
//! assert_eq!(task.format(), line);
//!
//! task.done(Some(chrono::NaiveDate::from_ymd_opt(2015, 4, 30).unwrap()));
//! assert_eq!(
//!     task.format(),
//!     "x 2015-04-30 2015-04-26 This is a test todo +project @context Due:2015-04-26"
//! );
//! ```

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod task;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TodoError;
pub use task::{parse_line, DueTag, LineParser, Priority, TaskRecord};
