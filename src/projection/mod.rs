//! Read-side projections over the session collections.
//!
//! Every function here is pure: it borrows the current collections, derives
//! a view or a metric, and mutates nothing. Projections are recomputed on
//! each invocation; there is no incremental caching to invalidate.

mod doubts;
mod metrics;
mod tasks;

#[cfg(test)]
mod tests;

pub use doubts::{doubts_for_member, doubts_sorted_for_rep};
pub use metrics::{
    DoubtMetrics, TaskMetrics, doubts_by_member, tasks_by_assignee, tasks_by_priority,
    tasks_by_status,
};
pub use tasks::{
    DueStatus, TaskSortKey, due_status, due_status_for, sorted_tasks, submittable_tasks,
    tasks_awaiting_verification, tasks_for_user,
};
