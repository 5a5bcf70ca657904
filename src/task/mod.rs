//! todo.txt task lines.
//!
//! [`TaskRecord`] is the structured form of one line and knows how to write
//! itself back out; [`LineParser`] reads lines into records.
//!
//! ```
//! use todoline::task::{parse_line, DueTag};
//!
//! let task = parse_line("(A) 2015-04-26 call mom +family @phone due:2015-4-30");
//! assert_eq!(task.text(), "call mom");
//! assert_eq!(task.due_tag(), DueTag::Lower);
//! assert_eq!(task.format(), "(A) 2015-04-26 call mom +family @phone due:2015-04-30");
//! ```

pub mod parser;
mod priority;
mod record;

pub use parser::{parse_line, Extracted, LineParser};
pub use priority::Priority;
pub use record::{DueTag, TaskRecord};
