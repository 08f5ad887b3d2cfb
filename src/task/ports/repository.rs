//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations translate between the domain [`Task`] and their native
/// record shape. The normalized-title lookup trims and lower-cases both
/// sides of the comparison, consistent with the uniqueness rule the use
/// case enforces.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists or [`TaskRepositoryError::DuplicateTitle`] when
    /// another task already holds the title under normalized comparison.
    async fn save(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Returns all tasks in store-defined order.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Persists changes to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist, or [`TaskRepositoryError::DuplicateTitle`] when the new
    /// title collides with another task's under normalized comparison.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Deletes a task by identifier. Deleting an absent task is a no-op.
    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Finds a task whose title matches the given value after trimming
    /// and lower-casing both sides.
    ///
    /// Returns the first match, or `None` when no task holds the title.
    async fn find_by_normalized_title(&self, title: &str) -> TaskRepositoryResult<Option<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// Another task already holds the title under normalized comparison.
    #[error("duplicate task title: {0}")]
    DuplicateTitle(String),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
