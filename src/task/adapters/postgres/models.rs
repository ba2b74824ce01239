//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Short task identifier.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Priority display string.
    pub priority: String,
    /// Status display string.
    pub status: String,
    /// Due date.
    pub due_date: NaiveDate,
    /// Assignment date.
    pub assigned_date: NaiveDate,
    /// Point value.
    pub points: i32,
    /// Assignee username.
    pub assigned_to: String,
    /// Verification flag.
    pub verified: bool,
    /// Submission link, if submitted.
    pub submission_link: Option<String>,
    /// Submission notes, if submitted.
    pub submission_notes: Option<String>,
    /// Submission timestamp, if submitted.
    pub submitted_at: Option<DateTime<Utc>>,
    /// Verification timestamp, if verified.
    pub verified_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Short task identifier.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Priority display string.
    pub priority: String,
    /// Status display string.
    pub status: String,
    /// Due date.
    pub due_date: NaiveDate,
    /// Assignment date.
    pub assigned_date: NaiveDate,
    /// Point value.
    pub points: i32,
    /// Assignee username.
    pub assigned_to: String,
    /// Verification flag.
    pub verified: bool,
    /// Submission link, if submitted.
    pub submission_link: Option<String>,
    /// Submission notes, if submitted.
    pub submission_notes: Option<String>,
    /// Submission timestamp, if submitted.
    pub submitted_at: Option<DateTime<Utc>>,
    /// Verification timestamp, if verified.
    pub verified_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Changeset covering the fields lifecycle updates may touch.
///
/// Identifier, title, dates, points, and assignee are immutable after
/// creation, so updates never rewrite them.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Status display string.
    pub status: String,
    /// Verification flag.
    pub verified: bool,
    /// Submission link, if submitted.
    pub submission_link: Option<String>,
    /// Submission notes, if submitted.
    pub submission_notes: Option<String>,
    /// Submission timestamp, if submitted.
    pub submitted_at: Option<DateTime<Utc>>,
    /// Verification timestamp, if verified.
    pub verified_at: Option<DateTime<Utc>>,
}
