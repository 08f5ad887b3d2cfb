//! Service layer implementing the task use case.

use crate::task::domain::{NewTaskData, Task, TaskId, TaskTitle};
use crate::task::ports::{
    CreateTaskRequest, TaskInputError, TaskInputGateway, TaskInputResult, TaskRepository,
    UpdateTaskRequest,
};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;

/// Task use case service.
///
/// Owns every business rule: title uniqueness under trimmed
/// case-insensitive comparison, the pending-status default, and the
/// field-level merge on update. The repository and the transport layer
/// stay rule-free.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }
}

#[async_trait]
impl<R, C> TaskInputGateway for TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    async fn create(&self, request: CreateTaskRequest) -> TaskInputResult<Task> {
        let title = TaskTitle::new(request.title)?;

        // Pre-check for friendlier reporting; the store's unique rule
        // still covers the window between check and insert.
        let existing = self
            .repository
            .find_by_normalized_title(title.as_str())
            .await?;
        if existing.is_some() {
            return Err(TaskInputError::DuplicateTitle(
                title.as_str().trim().to_owned(),
            ));
        }

        let task = Task::new(
            NewTaskData {
                title,
                description: request.description,
                status: request.status,
            },
            &*self.clock,
        );
        self.repository.save(&task).await?;
        Ok(task)
    }

    async fn find_all(&self) -> TaskInputResult<Vec<Task>> {
        Ok(self.repository.find_all().await?)
    }

    async fn find_by_id(&self, id: &str) -> TaskInputResult<Option<Task>> {
        let Some(task_id) = TaskId::parse(id) else {
            return Ok(None);
        };
        Ok(self.repository.find_by_id(task_id).await?)
    }

    async fn update(&self, id: &str, request: UpdateTaskRequest) -> TaskInputResult<Option<Task>> {
        let Some(task_id) = TaskId::parse(id) else {
            return Ok(None);
        };
        let Some(mut task) = self.repository.find_by_id(task_id).await? else {
            return Ok(None);
        };

        if let Some(raw_title) = request.title.filter(|value| !value.is_empty()) {
            let title = TaskTitle::new(raw_title)?;
            let holder = self
                .repository
                .find_by_normalized_title(title.as_str())
                .await?;
            // The task being updated may keep its own title.
            if holder.is_some_and(|other| other.id() != task.id()) {
                return Err(TaskInputError::DuplicateTitle(
                    title.as_str().trim().to_owned(),
                ));
            }
            task.rename(title, &*self.clock);
        }
        if let Some(description) = request.description {
            task.set_description(description, &*self.clock);
        }
        if let Some(status) = request.status.filter(|value| !value.is_empty()) {
            task.set_status(status, &*self.clock);
        }

        self.repository.update(&task).await?;
        Ok(Some(task))
    }

    async fn delete(&self, id: &str) -> TaskInputResult<bool> {
        let Some(task_id) = TaskId::parse(id) else {
            return Ok(false);
        };
        if self.repository.find_by_id(task_id).await?.is_none() {
            return Ok(false);
        }
        self.repository.delete_by_id(task_id).await?;
        Ok(true)
    }
}
