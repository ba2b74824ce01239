//! Aggregate metrics over the task and doubt collections.

use crate::doubt::domain::Doubt;
use crate::task::domain::{Priority, Task, TaskStatus};
use std::collections::BTreeMap;

/// Aggregate task counters for a dashboard or the admin analytics view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TaskMetrics {
    /// Number of tasks considered.
    pub total: usize,
    /// Tasks in `Completed` status.
    pub completed: usize,
    /// Tasks still open: `Pending` or `In Progress`.
    pub pending: usize,
    /// Sum of all point values.
    pub total_points: i64,
    /// Mean point value per task; 0 when there are no tasks.
    pub average_points: f64,
    /// `completed / total` as a fraction in `[0, 1]`; 0 when empty.
    pub completion_rate: f64,
}

impl TaskMetrics {
    /// Computes metrics over the given tasks.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "Counts and point sums stay far below 2^52, so the f64 conversion is exact"
    )]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks
            .iter()
            .filter(|task| task.status() == TaskStatus::Completed)
            .count();
        let pending = tasks
            .iter()
            .filter(|task| task.status().is_submittable())
            .count();
        let total_points: i64 = tasks
            .iter()
            .map(|task| i64::from(task.points().value()))
            .sum();
        let (average_points, completion_rate) = if total == 0 {
            (0.0, 0.0)
        } else {
            let total_f = total as f64;
            (
                total_points as f64 / total_f,
                completed as f64 / total_f,
            )
        };
        Self {
            total,
            completed,
            pending,
            total_points,
            average_points,
            completion_rate,
        }
    }
}

/// Aggregate doubt counters for the admin analytics view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DoubtMetrics {
    /// Number of doubts considered.
    pub total: usize,
    /// Doubts marked resolved.
    pub resolved: usize,
    /// Doubts still open.
    pub open: usize,
    /// `resolved / total` as a fraction in `[0, 1]`; 0 when empty.
    pub resolution_rate: f64,
}

impl DoubtMetrics {
    /// Computes metrics over the given doubts.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "Counts stay far below 2^52, so the f64 conversion is exact"
    )]
    pub fn from_doubts(doubts: &[Doubt]) -> Self {
        let total = doubts.len();
        let resolved = doubts.iter().filter(|doubt| doubt.is_resolved()).count();
        let resolution_rate = if total == 0 {
            0.0
        } else {
            resolved as f64 / total as f64
        };
        Self {
            total,
            resolved,
            open: total - resolved,
            resolution_rate,
        }
    }
}

/// Counts tasks per lifecycle status, in status order.
#[must_use]
pub fn tasks_by_status(tasks: &[Task]) -> BTreeMap<TaskStatus, usize> {
    let mut counts = BTreeMap::new();
    for task in tasks {
        *counts.entry(task.status()).or_insert(0) += 1;
    }
    counts
}

/// Counts tasks per priority, High first.
#[must_use]
pub fn tasks_by_priority(tasks: &[Task]) -> BTreeMap<Priority, usize> {
    let mut counts = BTreeMap::new();
    for task in tasks {
        *counts.entry(task.priority()).or_insert(0) += 1;
    }
    counts
}

/// Counts tasks per assignee, usernames in lexicographic order.
#[must_use]
pub fn tasks_by_assignee(tasks: &[Task]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for task in tasks {
        *counts.entry(task.assigned_to().to_owned()).or_insert(0) += 1;
    }
    counts
}

/// Counts doubts per raising member, usernames in lexicographic order.
#[must_use]
pub fn doubts_by_member(doubts: &[Doubt]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for doubt in doubts {
        *counts.entry(doubt.member().to_owned()).or_insert(0) += 1;
    }
    counts
}
