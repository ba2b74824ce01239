//! `PostgreSQL` adapters for task lifecycle persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PgPool, PostgresTaskRepository};
pub(crate) use repository::{OPERATION_TIMEOUT, join_within};
