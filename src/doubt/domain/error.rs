//! Error types for doubt domain validation.

use super::DoubtId;
use thiserror::Error;

/// Errors returned while constructing or transitioning domain doubt values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DoubtDomainError {
    /// The raising member username is empty after trimming.
    #[error("doubt member must not be empty")]
    EmptyMember,

    /// The doubt title is empty after trimming.
    #[error("doubt title must not be empty")]
    EmptyTitle,

    /// The doubt details are empty after trimming.
    #[error("doubt details must not be empty")]
    EmptyDetails,

    /// The replying representative username is empty after trimming.
    #[error("reply author must not be empty")]
    EmptyReplyAuthor,

    /// The reply message is empty after trimming.
    #[error("reply message must not be empty")]
    EmptyReplyMessage,

    /// The doubt has already been resolved.
    #[error("doubt {0} is already resolved")]
    AlreadyResolved(DoubtId),
}
