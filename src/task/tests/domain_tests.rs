//! Domain-focused tests for task assignment and submission behaviour.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use crate::roster::{Role, Roster};
use crate::task::domain::{
    Points, Priority, Submission, Task, TaskAssignment, TaskDomainError, TaskId, TaskStatus,
};
use chrono::NaiveDate;
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[fixture]
fn roster() -> Roster {
    Roster::new()
        .with_user(Role::Representative, "rep1")
        .with_user(Role::Member, "mem1")
        .with_user(Role::Member, "mem2")
        .with_user(Role::Admin, "admin")
}

fn due_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid calendar date")
}

fn assignment() -> TaskAssignment {
    TaskAssignment {
        title: "Write onboarding docs".to_owned(),
        description: "Cover the contribution workflow end to end".to_owned(),
        priority: "High".to_owned(),
        due_date: due_date(),
        points: 50,
        assigned_to: "mem1".to_owned(),
    }
}

#[rstest]
fn generated_task_id_has_short_hex_form() {
    let id = TaskId::generate();

    let suffix = id
        .as_str()
        .strip_prefix("DC-")
        .expect("id should carry the DC- prefix");
    assert_eq!(suffix.len(), 6);
    assert!(
        suffix
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase())
    );
}

#[rstest]
fn generated_task_ids_are_distinct() {
    assert_ne!(TaskId::generate(), TaskId::generate());
}

#[rstest]
#[case("DC-0A1B2C", true)]
#[case("DC-ABCDEF", true)]
#[case("DC-abcdef", false)]
#[case("DQ-0A1B2C", false)]
#[case("DC-0A1B2", false)]
#[case("DC-0A1B2C3", false)]
#[case("DC-0A1B2G", false)]
#[case("", false)]
fn task_id_parse_validates_format(#[case] raw: &str, #[case] accepted: bool) {
    let result = TaskId::parse(raw);
    assert_eq!(result.is_ok(), accepted, "unexpected outcome for {raw:?}");
}

#[rstest]
#[case(Points::MIN, true)]
#[case(Points::MAX, true)]
#[case(50, true)]
#[case(0, false)]
#[case(101, false)]
#[case(150, false)]
#[case(-3, false)]
fn points_enforce_assignable_range(#[case] value: i32, #[case] accepted: bool) {
    let result = Points::new(value);
    if accepted {
        assert_eq!(result.expect("in-range points").value(), value);
    } else {
        assert_eq!(result, Err(TaskDomainError::PointsOutOfRange(value)));
    }
}

#[rstest]
#[case("High", Priority::High)]
#[case(" medium ", Priority::Medium)]
#[case("LOW", Priority::Low)]
fn priority_parses_known_values(#[case] raw: &str, #[case] expected: Priority) {
    assert_eq!(Priority::try_from(raw), Ok(expected));
}

#[rstest]
fn priority_rejects_unknown_value() {
    assert!(Priority::try_from("Urgent").is_err());
}

#[rstest]
#[case("Pending", TaskStatus::Pending)]
#[case("in progress", TaskStatus::InProgress)]
#[case(" Submitted ", TaskStatus::Submitted)]
#[case("COMPLETED", TaskStatus::Completed)]
fn status_parses_known_values(#[case] raw: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::try_from(raw), Ok(expected));
}

#[rstest]
fn status_rejects_unknown_value() {
    assert!(TaskStatus::try_from("Archived").is_err());
}

#[rstest]
fn assign_creates_pending_task_with_defaults(clock: DefaultClock, roster: Roster) {
    let before = clock.utc();
    let task = Task::assign(assignment(), &roster, &clock).expect("valid assignment");

    assert_eq!(task.status(), TaskStatus::Pending);
    assert_eq!(task.priority(), Priority::High);
    assert_eq!(task.points().value(), 50);
    assert_eq!(task.assigned_to(), "mem1");
    assert_eq!(task.due_date(), due_date());
    assert!(task.submission().is_none());
    assert!(!task.is_verified());
    assert!(task.verified_at().is_none());
    assert!(task.created_at() >= before);
    assert_eq!(task.assigned_date(), task.created_at().date_naive());
}

#[rstest]
fn assign_trims_title_and_description(clock: DefaultClock, roster: Roster) {
    let details = TaskAssignment {
        title: "  Write onboarding docs  ".to_owned(),
        description: "\tCover the workflow\n".to_owned(),
        ..assignment()
    };
    let task = Task::assign(details, &roster, &clock).expect("valid assignment");

    assert_eq!(task.title(), "Write onboarding docs");
    assert_eq!(task.description(), "Cover the workflow");
}

#[rstest]
fn assign_rejects_blank_title(clock: DefaultClock, roster: Roster) {
    let details = TaskAssignment {
        title: "   ".to_owned(),
        ..assignment()
    };
    let result = Task::assign(details, &roster, &clock);
    assert_eq!(result, Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn assign_rejects_blank_description(clock: DefaultClock, roster: Roster) {
    let details = TaskAssignment {
        description: String::new(),
        ..assignment()
    };
    let result = Task::assign(details, &roster, &clock);
    assert_eq!(result, Err(TaskDomainError::EmptyDescription));
}

#[rstest]
fn assign_rejects_unknown_priority(clock: DefaultClock, roster: Roster) {
    let details = TaskAssignment {
        priority: "Urgent".to_owned(),
        ..assignment()
    };
    let result = Task::assign(details, &roster, &clock);
    assert_eq!(
        result,
        Err(TaskDomainError::InvalidPriority("Urgent".to_owned()))
    );
}

#[rstest]
fn assign_rejects_out_of_range_points(clock: DefaultClock, roster: Roster) {
    let details = TaskAssignment {
        points: 150,
        ..assignment()
    };
    let result = Task::assign(details, &roster, &clock);
    assert_eq!(result, Err(TaskDomainError::PointsOutOfRange(150)));
}

#[rstest]
fn assign_rejects_non_member_assignee(clock: DefaultClock, roster: Roster) {
    let details = TaskAssignment {
        assigned_to: "rep1".to_owned(),
        ..assignment()
    };
    let result = Task::assign(details, &roster, &clock);
    assert_eq!(
        result,
        Err(TaskDomainError::UnknownMember("rep1".to_owned()))
    );
}

#[rstest]
fn submit_records_submission_and_moves_to_submitted(clock: DefaultClock, roster: Roster) {
    let mut task = Task::assign(assignment(), &roster, &clock).expect("valid assignment");

    task.submit(" http://example.com/pr/1 ", " first draft ", &clock)
        .expect("pending task should accept submission");

    assert_eq!(task.status(), TaskStatus::Submitted);
    assert!(!task.is_verified());
    let submission = task.submission().expect("submission should be recorded");
    assert_eq!(submission.link(), "http://example.com/pr/1");
    assert_eq!(submission.notes(), "first draft");
}

#[rstest]
fn submit_rejects_blank_link_without_mutating(clock: DefaultClock, roster: Roster) {
    let mut task = Task::assign(assignment(), &roster, &clock).expect("valid assignment");

    let result = task.submit("   ", "notes", &clock);

    assert_eq!(result, Err(TaskDomainError::EmptySubmissionLink));
    assert_eq!(task.status(), TaskStatus::Pending);
    assert!(task.submission().is_none());
}

#[rstest]
fn submit_allows_empty_notes(clock: DefaultClock, roster: Roster) {
    let mut task = Task::assign(assignment(), &roster, &clock).expect("valid assignment");

    task.submit("http://example.com", "", &clock)
        .expect("notes are optional");

    let submission = task.submission().expect("submission should be recorded");
    assert_eq!(submission.notes(), "");
}

#[rstest]
fn verify_completes_a_submitted_task(clock: DefaultClock, roster: Roster) {
    let mut task = Task::assign(assignment(), &roster, &clock).expect("valid assignment");
    task.submit("http://example.com", "", &clock)
        .expect("valid submission");

    task.verify(&clock).expect("submitted task should verify");

    assert_eq!(task.status(), TaskStatus::Completed);
    assert!(task.is_verified());
    assert!(task.verified_at().is_some());
}

#[rstest]
fn verify_rejects_a_pending_task(clock: DefaultClock, roster: Roster) {
    let mut task = Task::assign(assignment(), &roster, &clock).expect("valid assignment");
    let task_id = task.id().clone();

    let result = task.verify(&clock);

    assert_eq!(
        result,
        Err(TaskDomainError::InvalidStateTransition {
            task_id,
            from: TaskStatus::Pending,
            to: TaskStatus::Completed,
        })
    );
    assert!(!task.is_verified());
    assert!(task.verified_at().is_none());
}

#[rstest]
fn start_claims_a_pending_task(clock: DefaultClock, roster: Roster) {
    let mut task = Task::assign(assignment(), &roster, &clock).expect("valid assignment");

    task.start().expect("pending task should be claimable");

    assert_eq!(task.status(), TaskStatus::InProgress);
    task.submit("http://example.com", "", &clock)
        .expect("claimed task should accept submission");
    assert_eq!(task.status(), TaskStatus::Submitted);
}

#[rstest]
fn submission_timestamp_comes_from_the_clock(clock: DefaultClock) {
    let before = clock.utc();
    let submission =
        Submission::new("http://example.com", "notes", &clock).expect("valid submission");
    assert!(submission.submitted_at() >= before);
}
