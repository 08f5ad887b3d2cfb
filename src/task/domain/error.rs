//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the persisted column width.
    #[error("task title must not exceed {limit} characters, got {actual}")]
    TitleTooLong {
        /// Maximum accepted title length.
        limit: usize,
        /// Length of the rejected value.
        actual: usize,
    },
}
