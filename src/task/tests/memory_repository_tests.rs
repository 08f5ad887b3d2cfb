//! Contract tests for the in-memory task repository.

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTaskData, Task, TaskId, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn repository() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

fn task_titled(title: &str) -> Task {
    Task::new(
        NewTaskData {
            title: TaskTitle::new(title).expect("valid title"),
            description: None,
            status: None,
        },
        &DefaultClock,
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_then_find_by_id_round_trips(repository: InMemoryTaskRepository) {
    let task = task_titled("Buy milk");
    repository.save(&task).await.expect("save should succeed");

    let fetched = repository
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, Some(task));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_rejects_duplicate_identifier(repository: InMemoryTaskRepository) {
    let task = task_titled("Buy milk");
    repository.save(&task).await.expect("save should succeed");

    let result = repository.save(&task).await;
    assert!(matches!(
        result,
        Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_rejects_normalized_title_collision(repository: InMemoryTaskRepository) {
    repository
        .save(&task_titled("Plan sprint"))
        .await
        .expect("first save should succeed");

    let result = repository.save(&task_titled(" PLAN SPRINT ")).await;
    assert!(matches!(result, Err(TaskRepositoryError::DuplicateTitle(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_missing_task_reports_not_found(repository: InMemoryTaskRepository) {
    let task = task_titled("Never stored");
    let result = repository.update(&task).await;
    assert!(matches!(
        result,
        Err(TaskRepositoryError::NotFound(id)) if id == task.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_taking_another_tasks_title(repository: InMemoryTaskRepository) {
    let first = task_titled("First");
    let mut second = task_titled("Second");
    repository.save(&first).await.expect("save should succeed");
    repository.save(&second).await.expect("save should succeed");

    second.rename(
        TaskTitle::new("fIrSt").expect("valid title"),
        &DefaultClock,
    );
    let result = repository.update(&second).await;
    assert!(matches!(result, Err(TaskRepositoryError::DuplicateTitle(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_allows_keeping_own_title(repository: InMemoryTaskRepository) {
    let mut task = task_titled("Stable title");
    repository.save(&task).await.expect("save should succeed");

    task.set_status("done", &DefaultClock);
    repository.update(&task).await.expect("update should succeed");

    let fetched = repository
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(fetched.status(), "done");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_by_id_removes_and_tolerates_missing(repository: InMemoryTaskRepository) {
    let task = task_titled("Ephemeral");
    repository.save(&task).await.expect("save should succeed");

    repository
        .delete_by_id(task.id())
        .await
        .expect("delete should succeed");
    repository
        .delete_by_id(task.id())
        .await
        .expect("deleting an absent task is a no-op");
    repository
        .delete_by_id(TaskId::new())
        .await
        .expect("deleting an unknown task is a no-op");

    let fetched = repository
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_normalized_title_trims_and_lowercases(repository: InMemoryTaskRepository) {
    let task = task_titled("Buy milk");
    repository.save(&task).await.expect("save should succeed");

    let fetched = repository
        .find_by_normalized_title("  BUY MILK  ")
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched.map(|found| found.id()), Some(task.id()));

    let missing = repository
        .find_by_normalized_title("buy bread")
        .await
        .expect("lookup should succeed");
    assert!(missing.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_all_orders_by_creation_time(repository: InMemoryTaskRepository) {
    for title in ["One", "Two", "Three"] {
        repository
            .save(&task_titled(title))
            .await
            .expect("save should succeed");
    }

    let all = repository.find_all().await.expect("listing should succeed");
    let titles: Vec<&str> = all.iter().map(|task| task.title().as_str()).collect();
    assert_eq!(titles, vec!["One", "Two", "Three"]);
}
