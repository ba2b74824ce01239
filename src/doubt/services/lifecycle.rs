//! Service layer for raising, answering, and resolving doubts.

use crate::doubt::{
    domain::{Doubt, DoubtDomainError, DoubtId, Reply},
    ports::{DoubtRepository, DoubtRepositoryError},
};
use crate::session::Session;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for raising a doubt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaiseDoubtRequest {
    member: String,
    title: String,
    details: String,
}

impl RaiseDoubtRequest {
    /// Creates a request with all doubt fields.
    #[must_use]
    pub fn new(
        member: impl Into<String>,
        title: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            member: member.into(),
            title: title.into(),
            details: details.into(),
        }
    }
}

/// Service-level errors for doubt lifecycle operations.
#[derive(Debug, Error)]
pub enum DoubtLifecycleError {
    /// Domain validation or state check failed.
    #[error(transparent)]
    Domain(#[from] DoubtDomainError),
    /// The referenced doubt is not in the session cache.
    #[error("doubt not found: {0}")]
    DoubtNotFound(DoubtId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] DoubtRepositoryError),
}

/// Result type for doubt lifecycle service operations.
pub type DoubtLifecycleResult<T> = Result<T, DoubtLifecycleError>;

/// Doubt lifecycle orchestration service.
///
/// Mirrors the task service's write policy: validate, persist, then touch
/// the session cache, in that order.
#[derive(Clone)]
pub struct DoubtLifecycleService<R, C>
where
    R: DoubtRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> DoubtLifecycleService<R, C>
where
    R: DoubtRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new doubt lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Raises a new open doubt.
    ///
    /// # Errors
    ///
    /// Returns [`DoubtLifecycleError`] when input validation fails or the
    /// repository rejects the insert. On failure nothing is added to the
    /// session cache.
    pub async fn raise_doubt(
        &self,
        session: &mut Session,
        request: RaiseDoubtRequest,
    ) -> DoubtLifecycleResult<Doubt> {
        let doubt = Doubt::raise(
            &request.member,
            &request.title,
            &request.details,
            &*self.clock,
        )?;
        self.repository.insert(&doubt).await?;
        tracing::debug!(doubt_id = %doubt.id(), member = doubt.member(), "doubt raised");
        session.add_doubt(doubt.clone());
        Ok(doubt)
    }

    /// Appends a representative reply to a doubt's thread.
    ///
    /// Replies are accepted on resolved doubts as well; a closing answer
    /// after resolution is legitimate.
    ///
    /// # Errors
    ///
    /// Returns [`DoubtLifecycleError::DoubtNotFound`] when the doubt is
    /// unknown, a domain error when the author or message is blank, or a
    /// repository error when the durable write fails.
    pub async fn reply_to_doubt(
        &self,
        session: &mut Session,
        id: &DoubtId,
        rep: &str,
        message: &str,
    ) -> DoubtLifecycleResult<()> {
        let mut doubt = session
            .doubt(id)
            .cloned()
            .ok_or_else(|| DoubtLifecycleError::DoubtNotFound(id.clone()))?;
        let reply = Reply::new(rep, message, &*self.clock)?;
        if let Err(err) = self.repository.append_reply(id, &reply).await {
            tracing::warn!(doubt_id = %id, error = %err, "reply not persisted");
            return Err(err.into());
        }
        doubt.append_reply(reply);
        tracing::debug!(doubt_id = %id, replies = doubt.replies().len(), "reply appended");
        session.replace_doubt(doubt);
        Ok(())
    }

    /// Resolves an open doubt, one-way.
    ///
    /// # Errors
    ///
    /// Returns [`DoubtLifecycleError::DoubtNotFound`] when the doubt is
    /// unknown, [`DoubtDomainError::AlreadyResolved`] when it was resolved
    /// before, or a repository error when the durable write fails.
    pub async fn resolve_doubt(
        &self,
        session: &mut Session,
        id: &DoubtId,
    ) -> DoubtLifecycleResult<()> {
        let mut doubt = session
            .doubt(id)
            .cloned()
            .ok_or_else(|| DoubtLifecycleError::DoubtNotFound(id.clone()))?;
        doubt.resolve(&*self.clock)?;
        if let Err(err) = self.repository.update(&doubt).await {
            tracing::warn!(doubt_id = %id, error = %err, "resolution not persisted");
            return Err(err.into());
        }
        tracing::debug!(doubt_id = %id, "doubt resolved");
        session.replace_doubt(doubt);
        Ok(())
    }
}
