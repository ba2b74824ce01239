//! `PostgreSQL` adapters for doubt lifecycle persistence.

mod models;
mod repository;
mod schema;

pub use repository::PostgresDoubtRepository;
pub(crate) use repository::join_within;
