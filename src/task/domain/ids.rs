//! Identifier and validated scalar types for the task domain.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Prefix carried by every task identifier.
const TASK_ID_PREFIX: &str = "DC-";

/// Number of hex characters following the prefix.
const TASK_ID_SUFFIX_LEN: usize = 6;

/// Unique short identifier for a task record, in `DC-xxxxxx` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generates a fresh task identifier from v4 UUID entropy.
    #[must_use]
    pub fn generate() -> Self {
        let suffix: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(TASK_ID_SUFFIX_LEN)
            .collect();
        Self(format!("{TASK_ID_PREFIX}{}", suffix.to_ascii_uppercase()))
    }

    /// Parses a persisted task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTaskIdError`] when the value does not consist of the
    /// `DC-` prefix followed by exactly six uppercase hex characters.
    pub fn parse(value: impl Into<String>) -> Result<Self, ParseTaskIdError> {
        let raw = value.into();
        let is_valid = raw.strip_prefix(TASK_ID_PREFIX).is_some_and(|suffix| {
            suffix.len() == TASK_ID_SUFFIX_LEN
                && suffix
                    .chars()
                    .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase())
        });
        if !is_valid {
            return Err(ParseTaskIdError(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned while parsing task identifiers from persistence.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("malformed task id: {0}")]
pub struct ParseTaskIdError(pub String);

/// Validated task point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Points(i32);

impl Points {
    /// Smallest assignable point value.
    pub const MIN: i32 = 1;

    /// Largest assignable point value.
    pub const MAX: i32 = 100;

    /// Creates a validated point value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::PointsOutOfRange`] when the value falls
    /// outside `1..=100`.
    pub const fn new(value: i32) -> Result<Self, TaskDomainError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(TaskDomainError::PointsOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
