//! Domain model for task lifecycle management.
//!
//! The task domain models assignment, submission, and verification while
//! keeping all infrastructure concerns outside of the domain boundary.
//! Every status change funnels through [`TaskStatus::can_transition_to`],
//! so transition legality is never re-derived at call sites.

mod error;
mod ids;
mod status;
mod submission;
mod task;

pub use error::{ParsePriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::{ParseTaskIdError, Points, TaskId};
pub use status::{Priority, TaskStatus};
pub use submission::Submission;
pub use task::{PersistedTaskData, Task, TaskAssignment};
