//! Task aggregate root.

use super::{TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// Timestamps come from the injected clock: `created_at` is fixed when the
/// task is created and `updated_at` refreshes on every mutation. The
/// status is a free-form label owned by the caller; it is never blank
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for creating a new task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskData {
    /// Validated task title.
    pub title: TaskTitle,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Optional status label; blank or absent falls back to the default.
    pub status: Option<String>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted status label.
    pub status: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Status label assigned when a task is created without one.
    pub const DEFAULT_STATUS: &'static str = "pending";

    /// Creates a new task, assigning a fresh identifier and timestamps.
    ///
    /// A blank or absent status falls back to [`Task::DEFAULT_STATUS`].
    #[must_use]
    pub fn new(data: NewTaskData, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        let status = data
            .status
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_STATUS.to_owned());

        Self {
            id: TaskId::new(),
            title: data.title,
            description: data.description,
            status,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the status label.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the title.
    pub fn rename(&mut self, title: TaskTitle, clock: &impl Clock) {
        self.title = title;
        self.touch(clock);
    }

    /// Replaces the description. An empty string is a valid replacement.
    pub fn set_description(&mut self, description: impl Into<String>, clock: &impl Clock) {
        self.description = Some(description.into());
        self.touch(clock);
    }

    /// Replaces the status label. Callers route only non-blank values here.
    pub fn set_status(&mut self, status: impl Into<String>, clock: &impl Clock) {
        self.status = status.into();
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
