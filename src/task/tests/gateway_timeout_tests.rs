//! Deadline behaviour of the blocking store bridge.

use crate::task::adapters::postgres::join_within;
use crate::task::ports::{TaskRepositoryError, TaskRepositoryResult};
use std::time::Duration;

#[tokio::test(flavor = "multi_thread")]
async fn hung_store_operation_fails_once_the_deadline_elapses() {
    let handle = tokio::task::spawn_blocking(|| -> TaskRepositoryResult<()> {
        std::thread::sleep(Duration::from_millis(500));
        Ok(())
    });

    let result = join_within(Duration::from_millis(20), handle).await;

    assert!(matches!(result, Err(TaskRepositoryError::Persistence(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn fast_store_operation_completes_within_the_deadline() {
    let handle = tokio::task::spawn_blocking(|| -> TaskRepositoryResult<u32> { Ok(7) });

    let result = join_within(Duration::from_secs(5), handle).await;

    assert!(matches!(result, Ok(7)));
}

#[tokio::test(flavor = "multi_thread")]
async fn store_errors_pass_through_unchanged() {
    let handle = tokio::task::spawn_blocking(|| -> TaskRepositoryResult<()> {
        Err(TaskRepositoryError::persistence(std::io::Error::other(
            "store offline",
        )))
    });

    let result = join_within(Duration::from_secs(5), handle).await;

    assert!(matches!(result, Err(TaskRepositoryError::Persistence(_))));
}
