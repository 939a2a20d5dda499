/// Row models for Campus Event Hub
///
/// This module contains typed models for the three backend tables. The
/// backend is an external managed store; rows are decoded into these types
/// at the boundary so malformed responses fail with a typed error instead
/// of propagating undefined fields.
///
/// # Models
///
/// - `profile`: User profiles with access roles
/// - `event`: Campus events with derived status
/// - `task`: Checklist tasks belonging to an event
///
/// # Example
///
/// ```
/// use eventhub_core::models::event::{CreateEvent, EventStatus};
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let input = CreateEvent {
///     title: "Spring Hackathon".to_string(),
///     kind: "hackathon".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 4, 18).unwrap(),
///     created_by: Uuid::new_v4(),
/// };
///
/// assert_eq!(input.kind, "hackathon");
/// assert_eq!(CreateEvent::INITIAL_STATUS, EventStatus::Planning);
/// ```

pub mod event;
pub mod profile;
pub mod task;

pub use event::{CreateEvent, Event, EventStatus, TaskSummary};
pub use profile::{Profile, Role};
pub use task::{NewTask, Task, TaskStatus};
