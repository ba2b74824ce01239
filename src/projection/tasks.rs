//! Task views: per-user lists, sorting, and due-date classification.

use crate::task::domain::{Task, TaskStatus};
use chrono::NaiveDate;
use std::cmp::Reverse;
use std::fmt;

/// Date format accepted from raw due-date input.
const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns the tasks assigned to `username`, in stored (insertion) order.
#[must_use]
pub fn tasks_for_user<'a>(tasks: &'a [Task], username: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| task.assigned_to() == username)
        .collect()
}

/// Returns the user's tasks that may still be handed in, in stored order.
#[must_use]
pub fn submittable_tasks<'a>(tasks: &'a [Task], username: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| task.assigned_to() == username && task.status().is_submittable())
        .collect()
}

/// Returns every task awaiting verification, in stored order.
#[must_use]
pub fn tasks_awaiting_verification(tasks: &[Task]) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| task.status() == TaskStatus::Submitted)
        .collect()
}

/// Sort key offered by the task list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSortKey {
    /// Earliest due date first.
    DueDate,
    /// High before Medium before Low.
    Priority,
    /// Largest point value first.
    Points,
    /// Status display string, ascending.
    Status,
}

/// Returns the tasks sorted by the given key.
///
/// Sorting is stable: tasks comparing equal keep their relative input
/// order.
#[must_use]
pub fn sorted_tasks<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    key: TaskSortKey,
) -> Vec<&'a Task> {
    let mut sorted: Vec<&Task> = tasks.into_iter().collect();
    match key {
        TaskSortKey::DueDate => sorted.sort_by_key(|task| task.due_date()),
        TaskSortKey::Priority => sorted.sort_by_key(|task| task.priority().rank()),
        TaskSortKey::Points => sorted.sort_by_key(|task| Reverse(task.points().value())),
        TaskSortKey::Status => sorted.sort_by_key(|task| task.status().as_str()),
    }
    sorted
}

/// Classification of a due date relative to the current calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    /// The due date has passed by this many whole days.
    Overdue(i64),
    /// The due date is the current calendar day.
    DueToday,
    /// The due date is this many whole days away.
    DueIn(i64),
    /// The raw input could not be parsed as a date.
    Invalid,
}

impl fmt::Display for DueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overdue(days) => write!(f, "Overdue by {days} days"),
            Self::DueToday => f.write_str("Due today"),
            Self::DueIn(days) => write!(f, "Due in {days} days"),
            Self::Invalid => f.write_str("Invalid date"),
        }
    }
}

/// Classifies a raw due-date string against `today`.
///
/// Unparseable input yields [`DueStatus::Invalid`]; this function never
/// fails.
#[must_use]
pub fn due_status(raw: &str, today: NaiveDate) -> DueStatus {
    NaiveDate::parse_from_str(raw.trim(), DUE_DATE_FORMAT)
        .map_or(DueStatus::Invalid, |due| due_status_for(due, today))
}

/// Classifies an already parsed due date against `today`.
#[must_use]
pub fn due_status_for(due: NaiveDate, today: NaiveDate) -> DueStatus {
    let days = (due - today).num_days();
    match days {
        0 => DueStatus::DueToday,
        d if d < 0 => DueStatus::Overdue(-d),
        d => DueStatus::DueIn(d),
    }
}
