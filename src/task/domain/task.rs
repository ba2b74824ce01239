//! Task aggregate root and its lifecycle operations.

use super::{Points, Priority, Submission, TaskDomainError, TaskId, TaskStatus};
use crate::roster::Roster;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Raw assignment input as collected from the representative.
///
/// Priority arrives as text and points as a plain integer; validation
/// happens inside [`Task::assign`] so every call site shares the same
/// checks in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskAssignment {
    /// Short task title.
    pub title: String,
    /// Longer task description.
    pub description: String,
    /// Priority as text: High, Medium, or Low.
    pub priority: String,
    /// Calendar date the work is due.
    pub due_date: NaiveDate,
    /// Point value awarded on completion.
    pub points: i32,
    /// Username of the member receiving the task.
    pub assigned_to: String,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    priority: Priority,
    status: TaskStatus,
    due_date: NaiveDate,
    assigned_date: NaiveDate,
    points: Points,
    assigned_to: String,
    submission: Option<Submission>,
    verified: bool,
    verified_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted due date.
    pub due_date: NaiveDate,
    /// Persisted assignment date.
    pub assigned_date: NaiveDate,
    /// Persisted point value.
    pub points: Points,
    /// Persisted assignee username.
    pub assigned_to: String,
    /// Persisted submission record, if any.
    pub submission: Option<Submission>,
    /// Persisted verification flag.
    pub verified: bool,
    /// Persisted verification timestamp, if any.
    pub verified_at: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new pending task from raw assignment input.
    ///
    /// Validation runs in a fixed order: title, description, priority,
    /// points, assignee. The assignment date is taken from the clock's
    /// current calendar day.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`TaskDomainError`] check; nothing is
    /// allocated on failure.
    pub fn assign(
        details: TaskAssignment,
        roster: &Roster,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let title = details.title.trim();
        if title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let description = details.description.trim();
        if description.is_empty() {
            return Err(TaskDomainError::EmptyDescription);
        }
        let priority = Priority::try_from(details.priority.as_str())
            .map_err(|err| TaskDomainError::InvalidPriority(err.0))?;
        let points = Points::new(details.points)?;
        if !roster.is_member(&details.assigned_to) {
            return Err(TaskDomainError::UnknownMember(details.assigned_to));
        }

        let now = clock.utc();
        Ok(Self {
            id: TaskId::generate(),
            title: title.to_owned(),
            description: description.to_owned(),
            priority,
            status: TaskStatus::Pending,
            due_date: details.due_date,
            assigned_date: now.date_naive(),
            points,
            assigned_to: details.assigned_to,
            submission: None,
            verified: false,
            verified_at: None,
            created_at: now,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            priority: data.priority,
            status: data.status,
            due_date: data.due_date,
            assigned_date: data.assigned_date,
            points: data.points,
            assigned_to: data.assigned_to,
            submission: data.submission,
            verified: data.verified,
            verified_at: data.verified_at,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the task lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the calendar date the task was assigned.
    #[must_use]
    pub const fn assigned_date(&self) -> NaiveDate {
        self.assigned_date
    }

    /// Returns the point value.
    #[must_use]
    pub const fn points(&self) -> Points {
        self.points
    }

    /// Returns the assignee username.
    #[must_use]
    pub const fn assigned_to(&self) -> &str {
        self.assigned_to.as_str()
    }

    /// Returns the submission record, present once the task has been
    /// submitted.
    #[must_use]
    pub const fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    /// Returns whether a representative has verified the submission.
    #[must_use]
    pub const fn is_verified(&self) -> bool {
        self.verified
    }

    /// Returns the verification timestamp, present iff the task is
    /// verified.
    #[must_use]
    pub const fn verified_at(&self) -> Option<DateTime<Utc>> {
        self.verified_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Marks the task as claimed by its assignee, `Pending` to
    /// `InProgress`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStateTransition`] when the task is
    /// not pending.
    pub fn start(&mut self) -> Result<(), TaskDomainError> {
        self.ensure_transition(TaskStatus::InProgress)?;
        self.status = TaskStatus::InProgress;
        Ok(())
    }

    /// Hands in work for this task, recording the submission and moving to
    /// `Submitted`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStateTransition`] when the current
    /// status does not permit submission, or
    /// [`TaskDomainError::EmptySubmissionLink`] when the link is blank. The
    /// task is untouched on failure.
    pub fn submit(
        &mut self,
        link: &str,
        notes: &str,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        self.ensure_transition(TaskStatus::Submitted)?;
        let submission = Submission::new(link, notes, clock)?;
        self.submission = Some(submission);
        self.status = TaskStatus::Submitted;
        Ok(())
    }

    /// Verifies the submitted work, moving the task to its terminal
    /// `Completed` status and stamping the verification time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStateTransition`] when the task is
    /// not in `Submitted` status.
    pub fn verify(&mut self, clock: &impl Clock) -> Result<(), TaskDomainError> {
        self.ensure_transition(TaskStatus::Completed)?;
        self.status = TaskStatus::Completed;
        self.verified = true;
        self.verified_at = Some(clock.utc());
        Ok(())
    }

    /// Rejects the operation unless the state machine allows moving to
    /// `target`.
    fn ensure_transition(&self, target: TaskStatus) -> Result<(), TaskDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(TaskDomainError::InvalidStateTransition {
                task_id: self.id.clone(),
                from: self.status,
                to: target,
            });
        }
        Ok(())
    }
}
