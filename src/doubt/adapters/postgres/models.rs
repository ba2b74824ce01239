//! Diesel row models for doubt persistence.

use super::schema::{doubts, replies};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for doubt records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = doubts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DoubtRow {
    /// Short doubt identifier.
    pub id: String,
    /// Raising member username.
    pub member: String,
    /// Doubt title.
    pub title: String,
    /// Doubt details.
    pub details: String,
    /// Resolution flag.
    pub resolved: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Resolution timestamp, if resolved.
    pub resolved_at: Option<DateTime<Utc>>,
}

/// Insert model for doubt records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = doubts)]
pub struct NewDoubtRow {
    /// Short doubt identifier.
    pub id: String,
    /// Raising member username.
    pub member: String,
    /// Doubt title.
    pub title: String,
    /// Doubt details.
    pub details: String,
    /// Resolution flag.
    pub resolved: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Resolution timestamp, if resolved.
    pub resolved_at: Option<DateTime<Utc>>,
}

/// Changeset covering the fields resolution updates may touch.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = doubts)]
pub struct DoubtChangeset {
    /// Resolution flag.
    pub resolved: bool,
    /// Resolution timestamp.
    pub resolved_at: Option<DateTime<Utc>>,
}

/// Query result row for reply records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = replies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReplyRow {
    /// Surrogate row identifier.
    pub id: i32,
    /// Identifier of the owning doubt.
    pub doubt_id: String,
    /// Replying representative username.
    pub rep: String,
    /// Reply text.
    pub message: String,
    /// Reply timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for reply records; the surrogate id is store-assigned.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = replies)]
pub struct NewReplyRow {
    /// Identifier of the owning doubt.
    pub doubt_id: String,
    /// Replying representative username.
    pub rep: String,
    /// Reply text.
    pub message: String,
    /// Reply timestamp.
    pub created_at: DateTime<Utc>,
}
