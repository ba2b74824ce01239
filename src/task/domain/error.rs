//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or transitioning domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The priority value is not one of High, Medium, or Low.
    #[error("invalid priority '{0}', expected High, Medium, or Low")]
    InvalidPriority(String),

    /// The point value falls outside the assignable range.
    #[error("points {0} out of range, expected 1 to 100")]
    PointsOutOfRange(i32),

    /// The assignee is not a registered member.
    #[error("unknown member: {0}")]
    UnknownMember(String),

    /// The submission link is empty after trimming.
    #[error("submission link must not be empty")]
    EmptySubmissionLink,

    /// The requested status change is not permitted by the state machine.
    #[error("task {task_id} cannot move from {from} to {to}")]
    InvalidStateTransition {
        /// Identifier of the task whose transition was rejected.
        task_id: TaskId,
        /// Status the task currently holds.
        from: TaskStatus,
        /// Status the operation attempted to reach.
        to: TaskStatus,
    },
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);
