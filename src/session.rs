//! Explicitly owned in-process cache of both entity collections.
//!
//! The portal serves one logical user interaction at a time; the session
//! holds every task and doubt in memory, hydrated once from the
//! repositories and owned by the caller for the lifetime of the
//! interaction. Lifecycle services mutate it only after the corresponding
//! durable write has succeeded, so cache and store stay consistent.

use crate::doubt::{
    domain::{Doubt, DoubtId},
    ports::{DoubtRepository, DoubtRepositoryError},
};
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use thiserror::Error;

/// Errors returned while hydrating a session from the repositories.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Loading the task collection failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// Loading the doubt collection failed.
    #[error(transparent)]
    Doubts(#[from] DoubtRepositoryError),
}

/// In-memory cache of all tasks and doubts, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Session {
    tasks: Vec<Task>,
    doubts: Vec<Doubt>,
}

impl Session {
    /// Creates an empty session, for deployments without a backing store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            doubts: Vec::new(),
        }
    }

    /// Loads both collections from their repositories.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when either repository read fails; no
    /// partially hydrated session is produced.
    pub async fn hydrate<T, D>(task_repository: &T, doubt_repository: &D) -> Result<Self, SessionError>
    where
        T: TaskRepository + ?Sized,
        D: DoubtRepository + ?Sized,
    {
        let tasks = task_repository.list().await?;
        let doubts = doubt_repository.list().await?;
        tracing::debug!(tasks = tasks.len(), doubts = doubts.len(), "session hydrated");
        Ok(Self { tasks, doubts })
    }

    /// Returns every cached task in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns every cached doubt in insertion order.
    #[must_use]
    pub fn doubts(&self) -> &[Doubt] {
        &self.doubts
    }

    /// Finds a cached task by identifier.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Finds a cached doubt by identifier.
    #[must_use]
    pub fn doubt(&self, id: &DoubtId) -> Option<&Doubt> {
        self.doubts.iter().find(|doubt| doubt.id() == id)
    }

    /// Appends a newly created task.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Replaces the cached copy of a task after a successful durable
    /// update, preserving its position.
    ///
    /// Services always read the task from this session before updating, so
    /// a miss means the cache diverged from the store. The durably written
    /// task is appended to re-converge, and the divergence is logged.
    pub fn replace_task(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|cached| cached.id() == task.id()) {
            Some(cached) => *cached = task,
            None => {
                tracing::warn!(task_id = %task.id(), "replaced task was not cached");
                self.tasks.push(task);
            }
        }
    }

    /// Appends a newly raised doubt.
    pub fn add_doubt(&mut self, doubt: Doubt) {
        self.doubts.push(doubt);
    }

    /// Replaces the cached copy of a doubt after a successful durable
    /// update, preserving its position.
    ///
    /// As with [`Session::replace_task`], a miss means the cache diverged
    /// from the store; the doubt is appended and the divergence logged.
    pub fn replace_doubt(&mut self, doubt: Doubt) {
        match self
            .doubts
            .iter_mut()
            .find(|cached| cached.id() == doubt.id())
        {
            Some(cached) => *cached = doubt,
            None => {
                tracing::warn!(doubt_id = %doubt.id(), "replaced doubt was not cached");
                self.doubts.push(doubt);
            }
        }
    }
}
