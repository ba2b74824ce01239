//! Service layer for task assignment, submission, and verification.

use crate::roster::Roster;
use crate::session::Session;
use crate::task::{
    domain::{Task, TaskAssignment, TaskDomainError, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for assigning a task to a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignTaskRequest {
    title: String,
    description: String,
    priority: String,
    due_date: NaiveDate,
    points: i32,
    assigned_to: String,
}

impl AssignTaskRequest {
    /// Creates a request with all assignment fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: impl Into<String>,
        due_date: NaiveDate,
        points: i32,
        assigned_to: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority: priority.into(),
            due_date,
            points,
            assigned_to: assigned_to.into(),
        }
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation or state-machine check failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The referenced task is not in the session cache.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Every operation validates first, writes to the repository second, and
/// touches the session cache last, so a store failure never leaves a task
/// cached without a durable counterpart.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    roster: Arc<Roster>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>, roster: Arc<Roster>) -> Self {
        Self {
            repository,
            clock,
            roster,
        }
    }

    /// Assigns a new task to a member.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when input validation fails or the
    /// repository rejects the insert. On failure nothing is added to the
    /// session cache.
    pub async fn assign_task(
        &self,
        session: &mut Session,
        request: AssignTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let details = TaskAssignment {
            title: request.title,
            description: request.description,
            priority: request.priority,
            due_date: request.due_date,
            points: request.points,
            assigned_to: request.assigned_to,
        };
        let task = Task::assign(details, &self.roster, &*self.clock)?;
        self.repository.insert(&task).await?;
        tracing::debug!(task_id = %task.id(), assigned_to = task.assigned_to(), "task assigned");
        session.add_task(task.clone());
        Ok(task)
    }

    /// Marks a pending task as claimed by its assignee.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task is
    /// unknown, a domain error when the transition is illegal, or a
    /// repository error when the durable write fails.
    pub async fn start_task(&self, session: &mut Session, id: &TaskId) -> TaskLifecycleResult<()> {
        self.apply_update(session, id, |task, _| task.start()).await
    }

    /// Hands in work for a pending or in-progress task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task is
    /// unknown, a domain error when the status or link is invalid, or a
    /// repository error when the durable write fails.
    pub async fn submit_task(
        &self,
        session: &mut Session,
        id: &TaskId,
        link: &str,
        notes: &str,
    ) -> TaskLifecycleResult<()> {
        self.apply_update(session, id, |task, clock| task.submit(link, notes, clock))
            .await
    }

    /// Verifies a submitted task, completing it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task is
    /// unknown, a domain error when the task is not awaiting verification,
    /// or a repository error when the durable write fails.
    pub async fn verify_task(&self, session: &mut Session, id: &TaskId) -> TaskLifecycleResult<()> {
        self.apply_update(session, id, |task, clock| task.verify(clock))
            .await
    }

    /// Runs a domain mutation against a clone of the cached task, persists
    /// the clone, and writes it back only once the store write succeeded.
    async fn apply_update<F>(
        &self,
        session: &mut Session,
        id: &TaskId,
        mutate: F,
    ) -> TaskLifecycleResult<()>
    where
        F: FnOnce(&mut Task, &C) -> Result<(), TaskDomainError>,
    {
        let mut task = session
            .task(id)
            .cloned()
            .ok_or_else(|| TaskLifecycleError::TaskNotFound(id.clone()))?;
        mutate(&mut task, &self.clock)?;
        if let Err(err) = self.repository.update(&task).await {
            tracing::warn!(task_id = %id, error = %err, "task update not persisted");
            return Err(err.into());
        }
        tracing::debug!(task_id = %id, status = %task.status(), "task updated");
        session.replace_task(task);
        Ok(())
    }
}
