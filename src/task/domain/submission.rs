//! Submission record attached to a task when work is handed in.

use super::TaskDomainError;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Work handed in by the assignee: a link, optional notes, and the
/// submission timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    link: String,
    notes: String,
    submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Creates a submission record with the current clock time.
    ///
    /// Both fields are trimmed; notes may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptySubmissionLink`] when the link is
    /// empty after trimming.
    pub fn new(link: &str, notes: &str, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let trimmed_link = link.trim();
        if trimmed_link.is_empty() {
            return Err(TaskDomainError::EmptySubmissionLink);
        }
        Ok(Self {
            link: trimmed_link.to_owned(),
            notes: notes.trim().to_owned(),
            submitted_at: clock.utc(),
        })
    }

    /// Reconstructs a submission from persisted storage.
    #[must_use]
    pub fn from_persisted(link: String, notes: String, submitted_at: DateTime<Utc>) -> Self {
        Self {
            link,
            notes,
            submitted_at,
        }
    }

    /// Returns the submission link.
    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Returns the optional notes, possibly empty.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Returns the submission timestamp.
    #[must_use]
    pub const fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}
