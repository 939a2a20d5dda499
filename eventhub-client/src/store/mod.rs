/// Event store boundary
///
/// This module defines the contract to the managed backend's data tables.
/// Every operation maps to one backend call, is asynchronous, and may fail
/// with a `StoreError`. The backend enforces row-level security; the client
/// must treat every write as potentially denied and surface that denial
/// distinctly from validation and network failures.
///
/// # Store Contract
///
/// All stores must:
/// 1. Implement the `EventStore` trait (async)
/// 2. Decode every row into the typed models from `eventhub-core`,
///    rejecting malformed rows with `StoreError::Decode`
/// 3. Validate `CreateEvent` input before dispatching anything
/// 4. Order event lists newest-first and task lists oldest-first
///
/// There is no transaction boundary across event and task creation: a
/// failed batch insert leaves the already-created event in place.
///
/// # Example
///
/// ```
/// use eventhub_client::store::{EventStore, MockStore};
/// use eventhub_core::models::{CreateEvent, Role};
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = MockStore::new();
/// let organizer = store.seed_profile(Role::Organizer);
///
/// let event = store
///     .create_event(CreateEvent {
///         title: "Career Fair".to_string(),
///         kind: "fair".to_string(),
///         date: NaiveDate::from_ymd_opt(2026, 10, 2).unwrap(),
///         created_by: organizer,
///     })
///     .await?;
///
/// store
///     .create_tasks(event.id, vec!["Invite companies".to_string()])
///     .await?;
/// # Ok(())
/// # }
/// ```

mod mock;
mod rest;

pub use mock::MockStore;
pub use rest::RestStore;

use async_trait::async_trait;
use uuid::Uuid;

use eventhub_core::error::StoreResult;
use eventhub_core::models::{CreateEvent, Event, EventStatus, Profile, Role, Task, TaskStatus};

/// Contract to the managed backend's event, task, and profile tables
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Lists all visible events, newest first, with nested task summaries
    async fn list_events(&self) -> StoreResult<Vec<Event>>;

    /// Fetches one event by id, without nested tasks
    async fn get_event(&self, id: Uuid) -> StoreResult<Option<Event>>;

    /// Lists an event's checklist, oldest first
    async fn list_tasks(&self, event_id: Uuid) -> StoreResult<Vec<Task>>;

    /// Creates an event after validating the input client-side
    ///
    /// New events start in `Planning`.
    async fn create_event(&self, input: CreateEvent) -> StoreResult<Event>;

    /// Batch-inserts checklist tasks for an event
    ///
    /// Partial failure is possible and is not rolled back.
    async fn create_tasks(&self, event_id: Uuid, titles: Vec<String>) -> StoreResult<()>;

    /// Updates a single task's status
    async fn update_task_status(&self, task_id: Uuid, status: TaskStatus) -> StoreResult<()>;

    /// Persists a recomputed event status
    async fn update_event_status(&self, event_id: Uuid, status: EventStatus) -> StoreResult<()>;

    /// Deletes an event; the backend cascades to its tasks
    async fn delete_event(&self, id: Uuid) -> StoreResult<()>;

    /// Lists all profiles; admin-only server-side
    async fn list_profiles(&self) -> StoreResult<Vec<Profile>>;

    /// Changes a user's role; admin-only server-side
    async fn update_profile_role(&self, user_id: Uuid, role: Role) -> StoreResult<()>;

    /// Fetches the role attribute of one profile row
    ///
    /// Used by the session resolver; callers fall back to `Role::Student`
    /// when this fails.
    async fn fetch_role(&self, user_id: Uuid) -> StoreResult<Role>;
}
