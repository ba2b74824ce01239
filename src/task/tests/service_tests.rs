//! Service orchestration tests for the task lifecycle.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code uses indexing after length checks"
)]

use std::sync::Arc;

use crate::roster::{Role, Roster};
use crate::session::Session;
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskDomainError, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    services::{AssignTaskRequest, TaskLifecycleError, TaskLifecycleService},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use mockable::DefaultClock;

type TestService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

mockall::mock! {
    TaskRepo {}

    #[async_trait]
    impl TaskRepository for TaskRepo {
        async fn insert(&self, task: &Task) -> TaskRepositoryResult<()>;
        async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;
        async fn list(&self) -> TaskRepositoryResult<Vec<Task>>;
    }
}

fn roster() -> Arc<Roster> {
    Arc::new(
        Roster::new()
            .with_user(Role::Representative, "rep1")
            .with_user(Role::Member, "mem1")
            .with_user(Role::Member, "mem2"),
    )
}

fn service_with_repo() -> (Arc<InMemoryTaskRepository>, TestService) {
    let repository = Arc::new(InMemoryTaskRepository::new());
    let service = TaskLifecycleService::new(repository.clone(), Arc::new(DefaultClock), roster());
    (repository, service)
}

fn service() -> TestService {
    service_with_repo().1
}

fn failing_service(repository: MockTaskRepo) -> TaskLifecycleService<MockTaskRepo, DefaultClock> {
    TaskLifecycleService::new(Arc::new(repository), Arc::new(DefaultClock), roster())
}

fn store_failure() -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other("store offline"))
}

fn request_for(member: &str, points: i32) -> AssignTaskRequest {
    AssignTaskRequest::new(
        "Prepare workshop slides",
        "Ten slides on the review workflow",
        "High",
        NaiveDate::from_ymd_opt(2025, 7, 15).expect("valid calendar date"),
        points,
        member,
    )
}

async fn assign<R: TaskRepository>(
    service: &TaskLifecycleService<R, DefaultClock>,
    session: &mut Session,
) -> Task {
    service
        .assign_task(session, request_for("mem1", 50))
        .await
        .expect("assignment should succeed")
}

#[tokio::test(flavor = "multi_thread")]
async fn assign_task_caches_and_persists() {
    let (repository, service) = service_with_repo();
    let mut session = Session::new();

    let task = assign(&service, &mut session).await;

    assert_eq!(task.status(), TaskStatus::Pending);
    assert_eq!(session.tasks(), &[task.clone()]);
    let stored = repository.list().await.expect("list should succeed");
    assert_eq!(stored, vec![task]);
}

#[tokio::test(flavor = "multi_thread")]
async fn assign_task_rejects_out_of_range_points() {
    let service = service();
    let mut session = Session::new();

    let result = service
        .assign_task(&mut session, request_for("mem1", 150))
        .await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::PointsOutOfRange(150)
        ))
    ));
    assert!(session.tasks().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn assign_task_rejects_unknown_member() {
    let service = service();
    let mut session = Session::new();

    let result = service
        .assign_task(&mut session, request_for("stranger", 50))
        .await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::UnknownMember(member)))
            if member == "stranger"
    ));
    assert!(session.tasks().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn assign_task_store_failure_leaves_cache_empty() {
    let mut failing = MockTaskRepo::new();
    failing.expect_insert().returning(|_| Err(store_failure()));
    let service = failing_service(failing);
    let mut session = Session::new();

    let result = service
        .assign_task(&mut session, request_for("mem1", 50))
        .await;

    assert!(matches!(result, Err(TaskLifecycleError::Repository(_))));
    assert!(session.tasks().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn submit_task_updates_cache_and_store() {
    let (repository, service) = service_with_repo();
    let mut session = Session::new();
    let task = assign(&service, &mut session).await;

    service
        .submit_task(&mut session, task.id(), "http://example.com/pr/7", "done")
        .await
        .expect("submission should succeed");

    let cached = session.task(task.id()).expect("task should stay cached");
    assert_eq!(cached.status(), TaskStatus::Submitted);
    let stored = repository.list().await.expect("list should succeed");
    assert_eq!(stored[0].status(), TaskStatus::Submitted);
    assert_eq!(
        stored[0]
            .submission()
            .expect("submission should be persisted")
            .link(),
        "http://example.com/pr/7"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn submit_task_rejects_unknown_id() {
    let service = service();
    let mut session = Session::new();
    let missing = TaskId::generate();

    let result = service
        .submit_task(&mut session, &missing, "http://example.com", "")
        .await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::TaskNotFound(id)) if id == missing
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn submit_task_rejects_blank_link() {
    let service = service();
    let mut session = Session::new();
    let task = assign(&service, &mut session).await;

    let result = service.submit_task(&mut session, task.id(), "  ", "").await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::EmptySubmissionLink
        ))
    ));
    let cached = session.task(task.id()).expect("task should stay cached");
    assert_eq!(cached.status(), TaskStatus::Pending);
}

#[tokio::test(flavor = "multi_thread")]
async fn start_task_claims_pending_work() {
    let service = service();
    let mut session = Session::new();
    let task = assign(&service, &mut session).await;

    service
        .start_task(&mut session, task.id())
        .await
        .expect("claim should succeed");

    let cached = session.task(task.id()).expect("task should stay cached");
    assert_eq!(cached.status(), TaskStatus::InProgress);
}

#[tokio::test(flavor = "multi_thread")]
async fn verify_task_completes_submitted_work() {
    let (repository, service) = service_with_repo();
    let mut session = Session::new();
    let task = assign(&service, &mut session).await;
    service
        .submit_task(&mut session, task.id(), "http://example.com", "")
        .await
        .expect("submission should succeed");

    service
        .verify_task(&mut session, task.id())
        .await
        .expect("verification should succeed");

    let cached = session.task(task.id()).expect("task should stay cached");
    assert_eq!(cached.status(), TaskStatus::Completed);
    assert!(cached.is_verified());
    assert!(cached.verified_at().is_some());
    let stored = repository.list().await.expect("list should succeed");
    assert!(stored[0].is_verified());
}

#[tokio::test(flavor = "multi_thread")]
async fn verify_task_twice_fails_with_state_error() {
    let service = service();
    let mut session = Session::new();
    let task = assign(&service, &mut session).await;
    service
        .submit_task(&mut session, task.id(), "http://example.com", "")
        .await
        .expect("submission should succeed");
    service
        .verify_task(&mut session, task.id())
        .await
        .expect("first verification should succeed");

    let result = service.verify_task(&mut session, task.id()).await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::InvalidStateTransition {
                from: TaskStatus::Completed,
                ..
            }
        ))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn submit_task_store_failure_leaves_cached_status_unchanged() {
    let mut failing = MockTaskRepo::new();
    failing.expect_insert().returning(|_| Ok(()));
    failing.expect_update().returning(|_| Err(store_failure()));
    let service = failing_service(failing);
    let mut session = Session::new();
    let task = assign(&service, &mut session).await;

    let result = service
        .submit_task(&mut session, task.id(), "http://example.com", "")
        .await;

    assert!(matches!(result, Err(TaskLifecycleError::Repository(_))));
    let cached = session.task(task.id()).expect("task should stay cached");
    assert_eq!(cached.status(), TaskStatus::Pending);
    assert!(cached.submission().is_none());
}
