//! Application services for task lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{
    AssignTaskRequest, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService,
};
