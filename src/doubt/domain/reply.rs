//! Reply entries in a doubt's answer thread.

use super::DoubtDomainError;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// One representative reply in a doubt thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    rep: String,
    message: String,
    at: DateTime<Utc>,
}

impl Reply {
    /// Creates a reply stamped with the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`DoubtDomainError::EmptyReplyAuthor`] or
    /// [`DoubtDomainError::EmptyReplyMessage`] when either field is empty
    /// after trimming.
    pub fn new(rep: &str, message: &str, clock: &impl Clock) -> Result<Self, DoubtDomainError> {
        let trimmed_rep = rep.trim();
        if trimmed_rep.is_empty() {
            return Err(DoubtDomainError::EmptyReplyAuthor);
        }
        let trimmed_message = message.trim();
        if trimmed_message.is_empty() {
            return Err(DoubtDomainError::EmptyReplyMessage);
        }
        Ok(Self {
            rep: trimmed_rep.to_owned(),
            message: trimmed_message.to_owned(),
            at: clock.utc(),
        })
    }

    /// Reconstructs a reply from persisted storage.
    #[must_use]
    pub fn from_persisted(rep: String, message: String, at: DateTime<Utc>) -> Self {
        Self { rep, message, at }
    }

    /// Returns the replying representative username.
    #[must_use]
    pub fn rep(&self) -> &str {
        &self.rep
    }

    /// Returns the reply text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the reply timestamp.
    #[must_use]
    pub const fn at(&self) -> DateTime<Utc> {
        self.at
    }
}
