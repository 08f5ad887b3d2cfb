//! Domain-focused tests for the task aggregate and validated scalars.

use crate::task::domain::{NewTaskData, Task, TaskDomainError, TaskId, TaskTitle};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn new_task_data(title: &str, description: Option<&str>, status: Option<&str>) -> NewTaskData {
    NewTaskData {
        title: TaskTitle::new(title).expect("valid title"),
        description: description.map(ToOwned::to_owned),
        status: status.map(ToOwned::to_owned),
    }
}

#[rstest]
fn task_title_preserves_raw_value_and_normalizes() {
    let title = TaskTitle::new("  Buy Milk ").expect("valid title");

    assert_eq!(title.as_str(), "  Buy Milk ");
    assert_eq!(title.normalized(), "buy milk");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn task_title_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(TaskTitle::new(raw), Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn task_title_rejects_oversized_values() {
    let raw = "x".repeat(TaskTitle::MAX_LENGTH + 1);
    assert_eq!(
        TaskTitle::new(raw),
        Err(TaskDomainError::TitleTooLong {
            limit: TaskTitle::MAX_LENGTH,
            actual: TaskTitle::MAX_LENGTH + 1,
        })
    );
}

#[rstest]
fn task_title_accepts_boundary_length() {
    let raw = "y".repeat(TaskTitle::MAX_LENGTH);
    let title = TaskTitle::new(raw).expect("boundary-length title");
    assert_eq!(title.as_str().chars().count(), TaskTitle::MAX_LENGTH);
}

#[rstest]
fn task_id_parse_accepts_well_formed_uuids() {
    let id = TaskId::new();
    assert_eq!(TaskId::parse(&id.to_string()), Some(id));
}

#[rstest]
#[case("not-a-uuid")]
#[case("123")]
#[case("")]
fn task_id_parse_rejects_malformed_values(#[case] raw: &str) {
    assert_eq!(TaskId::parse(raw), None);
}

#[rstest]
fn task_new_defaults_absent_status_to_pending(clock: DefaultClock) {
    let task = Task::new(new_task_data("Buy milk", None, None), &clock);
    assert_eq!(task.status(), Task::DEFAULT_STATUS);
}

#[rstest]
fn task_new_defaults_blank_status_to_pending(clock: DefaultClock) {
    let task = Task::new(new_task_data("Buy milk", None, Some("   ")), &clock);
    assert_eq!(task.status(), Task::DEFAULT_STATUS);
}

#[rstest]
fn task_new_keeps_explicit_status(clock: DefaultClock) {
    let task = Task::new(new_task_data("Buy milk", None, Some("doing")), &clock);
    assert_eq!(task.status(), "doing");
}

#[rstest]
fn task_new_sets_equal_timestamps(clock: DefaultClock) {
    let task = Task::new(
        new_task_data("Buy milk", Some("two litres"), None),
        &clock,
    );

    assert_eq!(task.created_at(), task.updated_at());
    assert_eq!(task.description(), Some("two litres"));
}

#[rstest]
fn mutators_refresh_updated_at_and_keep_created_at(clock: DefaultClock) {
    let mut task = Task::new(new_task_data("Draft report", None, None), &clock);
    let created_at = task.created_at();

    task.rename(TaskTitle::new("Final report").expect("valid title"), &clock);
    task.set_description("", &clock);
    task.set_status("done", &clock);

    assert_eq!(task.title().as_str(), "Final report");
    assert_eq!(task.description(), Some(""));
    assert_eq!(task.status(), "done");
    assert_eq!(task.created_at(), created_at);
    assert!(task.updated_at() >= created_at);
}
