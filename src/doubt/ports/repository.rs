//! Repository port for durable doubt persistence.

use crate::doubt::domain::{Doubt, DoubtId, Reply};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for doubt repository operations.
pub type DoubtRepositoryResult<T> = Result<T, DoubtRepositoryError>;

/// Doubt persistence contract (the persistence gateway for doubts).
///
/// Replies live in a separate collection keyed by doubt identifier;
/// [`DoubtRepository::list`] returns doubts with their replies attached.
#[async_trait]
pub trait DoubtRepository: Send + Sync {
    /// Stores a new doubt.
    ///
    /// # Errors
    ///
    /// Returns [`DoubtRepositoryError::DuplicateDoubt`] when the doubt ID
    /// already exists.
    async fn insert(&self, doubt: &Doubt) -> DoubtRepositoryResult<()>;

    /// Persists changes to an existing doubt's resolution fields.
    ///
    /// # Errors
    ///
    /// Returns [`DoubtRepositoryError::NotFound`] when the doubt does not
    /// exist.
    async fn update(&self, doubt: &Doubt) -> DoubtRepositoryResult<()>;

    /// Appends a reply to the doubt's thread.
    ///
    /// # Errors
    ///
    /// Returns [`DoubtRepositoryError::NotFound`] when the doubt does not
    /// exist.
    async fn append_reply(&self, id: &DoubtId, reply: &Reply) -> DoubtRepositoryResult<()>;

    /// Returns all stored doubts in insertion order, each with its reply
    /// thread ascending by timestamp.
    async fn list(&self) -> DoubtRepositoryResult<Vec<Doubt>>;
}

/// Errors returned by doubt repository implementations.
#[derive(Debug, Clone, Error)]
pub enum DoubtRepositoryError {
    /// A doubt with the same identifier already exists.
    #[error("duplicate doubt identifier: {0}")]
    DuplicateDoubt(DoubtId),

    /// The doubt was not found.
    #[error("doubt not found: {0}")]
    NotFound(DoubtId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DoubtRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
