//! In-memory task repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Enforces the same constraints as the SQL store: unique identifiers and
/// unique titles under normalized comparison, both checked under the
/// write lock. Backs the test suites and the server's storeless mode.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn find_title_holder(tasks: &HashMap<TaskId, Task>, title: &str) -> Option<Task> {
    let normalized = TaskTitle::normalize(title);
    tasks
        .values()
        .find(|task| task.title().normalized() == normalized)
        .cloned()
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn save(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        if find_title_holder(&tasks, task.title().as_str()).is_some() {
            return Err(TaskRepositoryError::DuplicateTitle(
                task.title().as_str().to_owned(),
            ));
        }
        tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut all: Vec<Task> = tasks.values().cloned().collect();
        // Store-defined order: creation time, identifier as tie-breaker.
        all.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().into_inner().cmp(&b.id().into_inner()))
        });
        Ok(all)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(tasks.get(&id).cloned())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }
        let holder = find_title_holder(&tasks, task.title().as_str());
        if holder.is_some_and(|other| other.id() != task.id()) {
            return Err(TaskRepositoryError::DuplicateTitle(
                task.title().as_str().to_owned(),
            ));
        }
        tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut tasks = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        tasks.remove(&id);
        Ok(())
    }

    async fn find_by_normalized_title(&self, title: &str) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(find_title_holder(&tasks, title))
    }
}
