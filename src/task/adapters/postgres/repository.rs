//! `PostgreSQL` repository implementation for task lifecycle storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{PersistedTaskData, Points, Priority, Submission, Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::time::Duration;
use tokio::task::JoinHandle;

/// `PostgreSQL` connection pool type used by the lifecycle adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Upper bound on a single store operation; a statement that has not
/// completed by then is reported as a persistence failure.
pub(crate) const OPERATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Awaits a blocking store operation with a deadline.
///
/// Join failures and an elapsed deadline both surface as
/// [`TaskRepositoryError::Persistence`], so a hung store never blocks the
/// caller indefinitely.
pub(crate) async fn join_within<T>(
    deadline: Duration,
    handle: JoinHandle<TaskRepositoryResult<T>>,
) -> TaskRepositoryResult<T> {
    match tokio::time::timeout(deadline, handle).await {
        Ok(joined) => joined.map_err(TaskRepositoryError::persistence)?,
        Err(elapsed) => Err(TaskRepositoryError::persistence(elapsed)),
    }
}

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        let handle = tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        });
        join_within(OPERATION_TIMEOUT, handle).await
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id().clone();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id.clone())
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id().clone();
        let changeset = to_changeset(task);

        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.find(task_id.as_str()))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id.clone()));
            }
            Ok(())
        })
        .await
    }

    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order(tasks::created_at.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().as_str().to_owned(),
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        priority: task.priority().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        due_date: task.due_date(),
        assigned_date: task.assigned_date(),
        points: task.points().value(),
        assigned_to: task.assigned_to().to_owned(),
        verified: task.is_verified(),
        submission_link: task.submission().map(|s| s.link().to_owned()),
        submission_notes: task.submission().map(|s| s.notes().to_owned()),
        submitted_at: task.submission().map(Submission::submitted_at),
        verified_at: task.verified_at(),
        created_at: task.created_at(),
    }
}

fn to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        status: task.status().as_str().to_owned(),
        verified: task.is_verified(),
        submission_link: task.submission().map(|s| s.link().to_owned()),
        submission_notes: task.submission().map(|s| s.notes().to_owned()),
        submitted_at: task.submission().map(Submission::submitted_at),
        verified_at: task.verified_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let id = TaskId::parse(row.id).map_err(TaskRepositoryError::persistence)?;
    let priority =
        Priority::try_from(row.priority.as_str()).map_err(TaskRepositoryError::persistence)?;
    let status =
        TaskStatus::try_from(row.status.as_str()).map_err(TaskRepositoryError::persistence)?;
    let points = Points::new(row.points).map_err(TaskRepositoryError::persistence)?;

    let submission = match (row.submission_link, row.submitted_at) {
        (Some(link), Some(submitted_at)) => Some(Submission::from_persisted(
            link,
            row.submission_notes.unwrap_or_default(),
            submitted_at,
        )),
        (None, None) => None,
        _ => {
            return Err(TaskRepositoryError::persistence(std::io::Error::other(
                format!("task {id} has a partial submission row"),
            )));
        }
    };

    let data = PersistedTaskData {
        id,
        title: row.title,
        description: row.description,
        priority,
        status,
        due_date: row.due_date,
        assigned_date: row.assigned_date,
        points,
        assigned_to: row.assigned_to,
        submission,
        verified: row.verified,
        verified_at: row.verified_at,
        created_at: row.created_at,
    };
    Ok(Task::from_persisted(data))
}
