//! `PostgreSQL` repository implementation for doubt lifecycle storage.

use super::{
    models::{DoubtChangeset, DoubtRow, NewDoubtRow, NewReplyRow, ReplyRow},
    schema::{doubts, replies},
};
use crate::doubt::{
    domain::{Doubt, DoubtId, PersistedDoubtData, Reply},
    ports::{DoubtRepository, DoubtRepositoryError, DoubtRepositoryResult},
};
use crate::task::adapters::postgres::{OPERATION_TIMEOUT, PgPool};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::collections::HashMap;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Awaits a blocking store operation with a deadline.
///
/// Mirrors the task adapter: join failures and an elapsed deadline both
/// surface as [`DoubtRepositoryError::Persistence`].
pub(crate) async fn join_within<T>(
    deadline: Duration,
    handle: JoinHandle<DoubtRepositoryResult<T>>,
) -> DoubtRepositoryResult<T> {
    match tokio::time::timeout(deadline, handle).await {
        Ok(joined) => joined.map_err(DoubtRepositoryError::persistence)?,
        Err(elapsed) => Err(DoubtRepositoryError::persistence(elapsed)),
    }
}

/// `PostgreSQL`-backed doubt repository.
#[derive(Debug, Clone)]
pub struct PostgresDoubtRepository {
    pool: PgPool,
}

impl PostgresDoubtRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> DoubtRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> DoubtRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        let handle = tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(DoubtRepositoryError::persistence)?;
            f(&mut connection)
        });
        join_within(OPERATION_TIMEOUT, handle).await
    }
}

#[async_trait]
impl DoubtRepository for PostgresDoubtRepository {
    async fn insert(&self, doubt: &Doubt) -> DoubtRepositoryResult<()> {
        let doubt_id = doubt.id().clone();
        let new_row = to_new_row(doubt);

        self.run_blocking(move |connection| {
            diesel::insert_into(doubts::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        DoubtRepositoryError::DuplicateDoubt(doubt_id.clone())
                    }
                    _ => DoubtRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, doubt: &Doubt) -> DoubtRepositoryResult<()> {
        let doubt_id = doubt.id().clone();
        let changeset = DoubtChangeset {
            resolved: doubt.is_resolved(),
            resolved_at: doubt.resolved_at(),
        };

        self.run_blocking(move |connection| {
            let affected = diesel::update(doubts::table.find(doubt_id.as_str()))
                .set(&changeset)
                .execute(connection)
                .map_err(DoubtRepositoryError::persistence)?;
            if affected == 0 {
                return Err(DoubtRepositoryError::NotFound(doubt_id.clone()));
            }
            Ok(())
        })
        .await
    }

    async fn append_reply(&self, id: &DoubtId, reply: &Reply) -> DoubtRepositoryResult<()> {
        let doubt_id = id.clone();
        let new_row = NewReplyRow {
            doubt_id: id.as_str().to_owned(),
            rep: reply.rep().to_owned(),
            message: reply.message().to_owned(),
            created_at: reply.at(),
        };

        self.run_blocking(move |connection| {
            diesel::insert_into(replies::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                        DoubtRepositoryError::NotFound(doubt_id.clone())
                    }
                    _ => DoubtRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn list(&self) -> DoubtRepositoryResult<Vec<Doubt>> {
        self.run_blocking(|connection| {
            let doubt_rows = doubts::table
                .order(doubts::created_at.asc())
                .select(DoubtRow::as_select())
                .load::<DoubtRow>(connection)
                .map_err(DoubtRepositoryError::persistence)?;
            let reply_rows = replies::table
                .order(replies::created_at.asc())
                .select(ReplyRow::as_select())
                .load::<ReplyRow>(connection)
                .map_err(DoubtRepositoryError::persistence)?;

            let mut threads: HashMap<String, Vec<Reply>> = HashMap::new();
            for row in reply_rows {
                threads.entry(row.doubt_id.clone()).or_default().push(
                    Reply::from_persisted(row.rep, row.message, row.created_at),
                );
            }

            doubt_rows
                .into_iter()
                .map(|row| row_to_doubt(row, &mut threads))
                .collect()
        })
        .await
    }
}

fn to_new_row(doubt: &Doubt) -> NewDoubtRow {
    NewDoubtRow {
        id: doubt.id().as_str().to_owned(),
        member: doubt.member().to_owned(),
        title: doubt.title().to_owned(),
        details: doubt.details().to_owned(),
        resolved: doubt.is_resolved(),
        created_at: doubt.created_at(),
        resolved_at: doubt.resolved_at(),
    }
}

fn row_to_doubt(
    row: DoubtRow,
    threads: &mut HashMap<String, Vec<Reply>>,
) -> DoubtRepositoryResult<Doubt> {
    let id = DoubtId::parse(row.id).map_err(DoubtRepositoryError::persistence)?;
    let replies = threads.remove(id.as_str()).unwrap_or_default();

    let data = PersistedDoubtData {
        id,
        member: row.member,
        title: row.title,
        details: row.details,
        created_at: row.created_at,
        resolved: row.resolved,
        resolved_at: row.resolved_at,
        replies,
    };
    Ok(Doubt::from_persisted(data))
}
