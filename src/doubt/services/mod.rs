//! Application services for doubt lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{
    DoubtLifecycleError, DoubtLifecycleResult, DoubtLifecycleService, RaiseDoubtRequest,
};
