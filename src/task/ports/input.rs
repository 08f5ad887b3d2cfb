//! Input gateway exposing the task use case to its callers.

use crate::task::domain::{Task, TaskDomainError};
use crate::task::ports::TaskRepositoryError;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for input gateway operations.
pub type TaskInputResult<T> = Result<T, TaskInputError>;

/// Payload for creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTaskRequest {
    /// Requested title, validated by the use case.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Optional status label; blank or absent defaults to pending.
    pub status: Option<String>,
}

/// Payload for partially updating a task.
///
/// Absent fields leave the stored value untouched. A present empty title
/// or status is ignored; a present empty description overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    /// Replacement title, applied only when non-empty.
    pub title: Option<String>,
    /// Replacement description, applied whenever present.
    pub description: Option<String>,
    /// Replacement status label, applied only when non-empty.
    pub status: Option<String>,
}

/// Task operations consumed by the transport layer.
///
/// Not-found outcomes are normal control flow (`Ok(None)` / `Ok(false)`),
/// never errors.
#[async_trait]
pub trait TaskInputGateway: Send + Sync {
    /// Creates a task, defaulting a blank or absent status to pending.
    ///
    /// # Errors
    ///
    /// Returns [`TaskInputError::DuplicateTitle`] when another task holds
    /// the title under trimmed case-insensitive comparison, or
    /// [`TaskInputError::Domain`] when the title fails validation.
    async fn create(&self, request: CreateTaskRequest) -> TaskInputResult<Task>;

    /// Returns all tasks in store-defined order.
    async fn find_all(&self) -> TaskInputResult<Vec<Task>>;

    /// Finds a task by its textual identifier.
    ///
    /// A malformed identifier resolves to `Ok(None)`, the same as an
    /// unknown one.
    async fn find_by_id(&self, id: &str) -> TaskInputResult<Option<Task>>;

    /// Applies a partial update to an existing task.
    ///
    /// Returns `Ok(None)` when the identifier does not resolve to a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskInputError::DuplicateTitle`] when the replacement
    /// title belongs to a different task under trimmed case-insensitive
    /// comparison.
    async fn update(&self, id: &str, request: UpdateTaskRequest) -> TaskInputResult<Option<Task>>;

    /// Deletes a task by its textual identifier.
    ///
    /// Returns `Ok(false)` when no task with that identifier exists and
    /// `Ok(true)` after a successful deletion.
    async fn delete(&self, id: &str) -> TaskInputResult<bool>;
}

/// Errors surfaced by input gateway operations.
#[derive(Debug, Error)]
pub enum TaskInputError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Another task already holds the requested title.
    #[error("a task with the title '{0}' already exists (ignoring case)")]
    DuplicateTitle(String),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}
