//! Task priority.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::TodoError;

/// A todo.txt priority: one uppercase ASCII letter, `A` being the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(char);

impl Priority {
    /// Create a priority from a letter.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidPriority` unless `letter` is in `A..=Z`.
    pub fn new(letter: char) -> Result<Self, TodoError> {
        if letter.is_ascii_uppercase() {
            Ok(Self(letter))
        } else {
            Err(TodoError::InvalidPriority(letter.to_string()))
        }
    }

    /// The priority letter.
    #[must_use]
    pub const fn letter(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Priority {
    type Error = TodoError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Self::new(letter)
    }
}

impl FromStr for Priority {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::new(letter),
            _ => Err(TodoError::InvalidPriority(s.to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
