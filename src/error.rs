//! Error types for todoline.
//!
//! Parsing a task line never fails; these errors come from building records
//! by hand, reading configuration and rendering output.

use thiserror::Error;

/// Main error type for todoline operations.
#[derive(Error, Debug)]
pub enum TodoError {
    /// A priority that is not a single uppercase letter.
    #[error("Invalid priority '{0}': expected a single letter A-Z")]
    InvalidPriority(String),

    /// A date that is not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Completed tasks cannot carry a priority.
    #[error("Cannot set a priority on a completed task")]
    PriorityOnCompleted,

    /// Configuration could not be read, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization failed.
    #[error("Serialization error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Underlying I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
