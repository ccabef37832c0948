//! Project and task domain model.
//!
//! # Responsibility
//! - Define the project record, its owned task sequence and the status/priority
//!   vocabularies.
//! - Provide lifecycle helpers that keep the progress invariant local.
//!
//! # Invariants
//! - `id` is stable and never reused for another project or task.
//! - `tasks` preserves insertion order; tasks have no lifecycle outside their
//!   owning project.
//! - `progress` is an integer percentage in `0..=100`. It is derived from task
//!   state by the mutation protocol but may also hold a manual override.

use crate::model::client::ClientId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a project.
pub type ProjectId = Uuid;

/// Stable identifier for a task within a project.
pub type TaskId = Uuid;

/// Project lifecycle status.
///
/// Freely settable by the caller at any time; there is intentionally no
/// enforced transition graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    NotStarted,
    InProgress,
    Review,
    Completed,
}

impl ProjectStatus {
    /// Returns the wire token for this status (`not-started`, `in-progress`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Completed => "completed",
        }
    }

    /// Parses a wire token back into a status.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "not-started" => Some(Self::NotStarted),
            "in-progress" => Some(Self::InProgress),
            "review" => Some(Self::Review),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Project priority, fixed at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A unit of work owned exclusively by its parent project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable ID, unique across all tasks.
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    /// Opaque date string; formatting/interpretation is the caller's concern.
    pub due_date: String,
}

impl Task {
    /// Creates an open task with a generated stable ID.
    pub fn new(title: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            completed: false,
            due_date: due_date.into(),
        }
    }
}

/// Creation-boundary fields for a new project.
///
/// `status` and `progress` are not part of this bundle: every project starts
/// as `not-started` with `progress = 0`. Non-emptiness validation is the
/// presentation layer's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFields {
    /// Referenced client; may dangle and is never validated by the core.
    pub client_id: ClientId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub start_date: String,
    pub due_date: String,
}

/// A tracked engagement for one client.
///
/// Field names serialize as `camelCase` (`clientId`, `startDate`, ...) so
/// persisted blobs stay compatible with the historical storage format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub client_id: ClientId,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub priority: Priority,
    /// Percentage in `0..=100`. Derived from tasks after any task mutation,
    /// otherwise it holds the last explicit override.
    pub progress: u8,
    pub start_date: String,
    pub due_date: String,
    pub tasks: Vec<Task>,
}

impl Project {
    /// Creates a new project with a generated stable ID and an empty task list.
    pub fn new(fields: ProjectFields) -> Self {
        Self::with_id(Uuid::new_v4(), fields)
    }

    /// Creates a project with a caller-provided stable ID.
    pub fn with_id(id: ProjectId, fields: ProjectFields) -> Self {
        Self {
            id,
            client_id: fields.client_id,
            title: fields.title,
            description: fields.description,
            status: ProjectStatus::NotStarted,
            priority: fields.priority,
            progress: 0,
            start_date: fields.start_date,
            due_date: fields.due_date,
            tasks: Vec::new(),
        }
    }

    /// Looks up one owned task by stable ID.
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    /// Counts tasks currently marked completed.
    pub fn completed_task_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }
}

/// Clamps an arbitrary percentage input into the valid `0..=100` range.
///
/// Out-of-range manual overrides are clamped rather than rejected.
pub fn clamp_percent(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}
