/// Task model for event checklists
///
/// This module provides the Task model representing one checklist item of an
/// event. Tasks belong to exactly one event; the backend enforces the
/// foreign key and cascades deletion when the event is removed.
///
/// # State Machine
///
/// ```text
/// Pending ⇄ Done
/// ```
///
/// A toggle flips the status; there are no terminal states.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     event_id UUID NOT NULL REFERENCES events(id) ON DELETE CASCADE,
///     title TEXT NOT NULL,
///     status TEXT NOT NULL DEFAULT 'Pending',
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Checklist task status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Task is still open
    #[default]
    Pending,

    /// Task has been checked off
    Done,
}

impl TaskStatus {
    /// Converts status to string for display and wire encoding
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Done => "Done",
        }
    }

    /// Returns the opposite status (a checkbox toggle)
    pub fn toggled(&self) -> TaskStatus {
        match self {
            TaskStatus::Pending => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::Pending,
        }
    }

    /// Checks whether the task counts toward completion
    pub fn is_done(&self) -> bool {
        matches!(self, TaskStatus::Done)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task model representing one checklist item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task ID
    pub id: Uuid,

    /// Event this task belongs to
    pub event_id: Uuid,

    /// Checklist item text
    pub title: String,

    /// Current status
    pub status: TaskStatus,

    /// When the task was created
    pub created_at: DateTime<Utc>,
}

/// Input for batch-inserting checklist tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    /// Event the task belongs to
    pub event_id: Uuid,

    /// Checklist item text
    pub title: String,

    /// Initial status, `Pending` unless stated otherwise
    #[serde(default)]
    pub status: TaskStatus,
}

impl NewTask {
    /// Creates a pending task for an event
    pub fn new(event_id: Uuid, title: impl Into<String>) -> Self {
        NewTask {
            event_id,
            title: title.into(),
            status: TaskStatus::Pending,
        }
    }
}
