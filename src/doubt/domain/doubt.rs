//! Doubt aggregate root and its lifecycle operations.

use super::{DoubtDomainError, DoubtId, Reply};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Doubt aggregate root: a member question with a reply thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doubt {
    id: DoubtId,
    member: String,
    title: String,
    details: String,
    created_at: DateTime<Utc>,
    resolved: bool,
    resolved_at: Option<DateTime<Utc>>,
    replies: Vec<Reply>,
}

/// Parameter object for reconstructing a persisted doubt aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedDoubtData {
    /// Persisted doubt identifier.
    pub id: DoubtId,
    /// Persisted raising member.
    pub member: String,
    /// Persisted title.
    pub title: String,
    /// Persisted details.
    pub details: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted resolution flag.
    pub resolved: bool,
    /// Persisted resolution timestamp, if any.
    pub resolved_at: Option<DateTime<Utc>>,
    /// Persisted reply thread, in any order.
    pub replies: Vec<Reply>,
}

impl Doubt {
    /// Raises a new open doubt.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`DoubtDomainError`] check (member, title,
    /// details, in that order); nothing is allocated on failure.
    pub fn raise(
        member: &str,
        title: &str,
        details: &str,
        clock: &impl Clock,
    ) -> Result<Self, DoubtDomainError> {
        let trimmed_member = member.trim();
        if trimmed_member.is_empty() {
            return Err(DoubtDomainError::EmptyMember);
        }
        let trimmed_title = title.trim();
        if trimmed_title.is_empty() {
            return Err(DoubtDomainError::EmptyTitle);
        }
        let trimmed_details = details.trim();
        if trimmed_details.is_empty() {
            return Err(DoubtDomainError::EmptyDetails);
        }

        Ok(Self {
            id: DoubtId::generate(),
            member: trimmed_member.to_owned(),
            title: trimmed_title.to_owned(),
            details: trimmed_details.to_owned(),
            created_at: clock.utc(),
            resolved: false,
            resolved_at: None,
            replies: Vec::new(),
        })
    }

    /// Reconstructs a doubt from persisted storage.
    ///
    /// Replies are re-sorted ascending by timestamp, since the store joins
    /// them from a separate collection with no ordering guarantee.
    #[must_use]
    pub fn from_persisted(data: PersistedDoubtData) -> Self {
        let mut replies = data.replies;
        replies.sort_by_key(Reply::at);
        Self {
            id: data.id,
            member: data.member,
            title: data.title,
            details: data.details,
            created_at: data.created_at,
            resolved: data.resolved,
            resolved_at: data.resolved_at,
            replies,
        }
    }

    /// Returns the doubt identifier.
    #[must_use]
    pub const fn id(&self) -> &DoubtId {
        &self.id
    }

    /// Returns the username of the member who raised the doubt.
    #[must_use]
    pub const fn member(&self) -> &str {
        self.member.as_str()
    }

    /// Returns the doubt title.
    #[must_use]
    pub const fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Returns the doubt details.
    #[must_use]
    pub const fn details(&self) -> &str {
        self.details.as_str()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns whether the doubt has been resolved.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Returns the resolution timestamp, present iff resolved.
    #[must_use]
    pub const fn resolved_at(&self) -> Option<DateTime<Utc>> {
        self.resolved_at
    }

    /// Returns the reply thread, ascending by timestamp.
    #[must_use]
    pub fn replies(&self) -> &[Reply] {
        &self.replies
    }

    /// Appends an already validated reply to the thread.
    ///
    /// Replying to a resolved doubt is permitted; closing a conversation
    /// with a final answer is a legitimate flow. Push keeps ascending
    /// order: the clock stamping replies is monotonic per call.
    pub fn append_reply(&mut self, reply: Reply) {
        self.replies.push(reply);
    }

    /// Marks the doubt resolved, one-way.
    ///
    /// # Errors
    ///
    /// Returns [`DoubtDomainError::AlreadyResolved`] when called on a
    /// resolved doubt; the state is left untouched.
    pub fn resolve(&mut self, clock: &impl Clock) -> Result<(), DoubtDomainError> {
        if self.resolved {
            return Err(DoubtDomainError::AlreadyResolved(self.id.clone()));
        }
        self.resolved = true;
        self.resolved_at = Some(clock.utc());
        Ok(())
    }
}
