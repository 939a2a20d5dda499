/// Event model and creation input
///
/// This module provides the Event model representing a campus event with an
/// attached checklist. An event's status is derived from its tasks (see
/// `crate::progress`), never set directly by a user after creation.
///
/// # Status
///
/// Events carry a single status enum, `Planning` or `Completed`. Newly
/// created events start in `Planning`; the status flips to `Completed` only
/// when the checklist is non-empty and every task is done. The client
/// recomputes and persists the status after each task mutation, so a crash
/// between the two writes leaves the stored status stale until the next
/// mutation.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE events (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     title TEXT NOT NULL,
///     type TEXT NOT NULL,
///     date DATE NOT NULL,
///     status TEXT NOT NULL DEFAULT 'Planning',
///     created_by UUID NOT NULL REFERENCES profiles(id),
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```
/// use eventhub_core::models::event::{CreateEvent, EventStatus};
/// use chrono::NaiveDate;
/// use uuid::Uuid;
/// use validator::Validate;
///
/// let input = CreateEvent {
///     title: "Graduation Gala".to_string(),
///     kind: "ceremony".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 6, 12).unwrap(),
///     created_by: Uuid::new_v4(),
/// };
///
/// assert!(input.validate().is_ok());
/// ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::task::TaskStatus;

/// Event status, derived from the checklist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    /// Checklist is empty or has open tasks
    #[default]
    Planning,

    /// Checklist is non-empty and every task is done
    Completed,
}

impl EventStatus {
    /// Converts status to string for display and wire encoding
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Planning => "Planning",
            EventStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nested task shape returned by the event list query
///
/// The dashboard only needs each task's status to draw progress bars, so
/// the list query selects `tasks(id, status)` instead of full rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    /// Task ID
    pub id: Uuid,

    /// Current status
    pub status: TaskStatus,
}

/// Event model representing a campus event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event ID
    pub id: Uuid,

    /// Event title
    pub title: String,

    /// Event type (e.g., "workshop", "ceremony")
    #[serde(rename = "type")]
    pub kind: String,

    /// Date the event takes place
    pub date: NaiveDate,

    /// Derived status
    pub status: EventStatus,

    /// User who created the event (its owner)
    pub created_by: Uuid,

    /// When the event was created
    pub created_at: DateTime<Utc>,

    /// Nested task summaries, present on the list query only
    #[serde(default)]
    pub tasks: Vec<TaskSummary>,
}

impl Event {
    /// Completion percentage over the nested task summaries
    pub fn completion_percent(&self) -> u8 {
        crate::progress::completion_percent(self.tasks.iter().map(|t| t.status))
    }
}

/// Input for creating a new event
///
/// Validated client-side before dispatch; the title and type must be
/// non-empty. The date is typed, so an empty date is unrepresentable.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEvent {
    /// Event title
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,

    /// Event type
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type must not be empty"))]
    pub kind: String,

    /// Date the event takes place
    pub date: NaiveDate,

    /// Owner of the event
    pub created_by: Uuid,
}

impl CreateEvent {
    /// Status assigned to every newly created event
    pub const INITIAL_STATUS: EventStatus = EventStatus::Planning;
}
