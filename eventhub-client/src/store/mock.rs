/// Mock event store for testing and demos
///
/// Keeps the three tables in memory behind a mutex and implements the same
/// contract as the REST store, including the backend behaviors the client
/// depends on: newest-first event ordering, nested task summaries on the
/// list query, cascading task deletion, and row-level denial of the
/// profile operations for non-admin callers.
///
/// # Failure Injection
///
/// - `deny_profile_ops()`: profile list/update fail with `PermissionDenied`
/// - `fail_role_lookup()`: `fetch_role` fails with a network error
/// - `fail_task_updates()`: `update_task_status` fails with a network error
///
/// # Example
///
/// ```
/// use eventhub_client::store::{EventStore, MockStore};
/// use eventhub_core::models::Role;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = MockStore::new();
/// let user = store.seed_profile(Role::Student);
/// assert_eq!(store.fetch_role(user).await?, Role::Student);
/// # Ok(())
/// # }
/// ```

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;
use validator::Validate;

use eventhub_core::error::{StoreError, StoreResult};
use eventhub_core::models::{
    CreateEvent, Event, EventStatus, Profile, Role, Task, TaskStatus, TaskSummary,
};

use super::EventStore;

#[derive(Default)]
struct Tables {
    events: Vec<Event>,
    tasks: Vec<Task>,
    profiles: Vec<Profile>,
}

#[derive(Default)]
struct Faults {
    deny_profile_ops: bool,
    fail_role_lookup: bool,
    fail_task_updates: bool,
}

/// Mock event store implementation
#[derive(Default)]
pub struct MockStore {
    tables: Mutex<Tables>,
    faults: Mutex<Faults>,
}

impl MockStore {
    /// Creates an empty store
    pub fn new() -> Self {
        MockStore::default()
    }

    /// Inserts a profile row and returns its user id
    pub fn seed_profile(&self, role: Role) -> Uuid {
        let id = Uuid::new_v4();
        self.tables
            .lock()
            .unwrap()
            .profiles
            .push(Profile { id, role });
        id
    }

    /// Makes profile list/update operations fail like a row-level denial
    pub fn deny_profile_ops(&self) {
        self.faults.lock().unwrap().deny_profile_ops = true;
    }

    /// Makes the resolver's role lookup fail
    pub fn fail_role_lookup(&self) {
        self.faults.lock().unwrap().fail_role_lookup = true;
    }

    /// Makes task status updates fail
    pub fn fail_task_updates(&self) {
        self.faults.lock().unwrap().fail_task_updates = true;
    }

    /// Returns a task row as currently stored
    pub fn stored_task(&self, task_id: Uuid) -> Option<Task> {
        self.tables
            .lock()
            .unwrap()
            .tasks
            .iter()
            .find(|t| t.id == task_id)
            .cloned()
    }

    /// Returns an event's stored status
    pub fn stored_event_status(&self, event_id: Uuid) -> Option<EventStatus> {
        self.tables
            .lock()
            .unwrap()
            .events
            .iter()
            .find(|e| e.id == event_id)
            .map(|e| e.status)
    }

    /// Number of stored tasks for an event
    pub fn task_count(&self, event_id: Uuid) -> usize {
        self.tables
            .lock()
            .unwrap()
            .tasks
            .iter()
            .filter(|t| t.event_id == event_id)
            .count()
    }
}

#[async_trait]
impl EventStore for MockStore {
    async fn list_events(&self) -> StoreResult<Vec<Event>> {
        let tables = self.tables.lock().unwrap();

        let mut events: Vec<Event> = tables
            .events
            .iter()
            .map(|event| {
                let mut event = event.clone();
                event.tasks = tables
                    .tasks
                    .iter()
                    .filter(|t| t.event_id == event.id)
                    .map(|t| TaskSummary {
                        id: t.id,
                        status: t.status,
                    })
                    .collect();
                event
            })
            .collect();

        events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(events)
    }

    async fn get_event(&self, id: Uuid) -> StoreResult<Option<Event>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.events.iter().find(|e| e.id == id).cloned())
    }

    async fn list_tasks(&self, event_id: Uuid) -> StoreResult<Vec<Task>> {
        let tables = self.tables.lock().unwrap();

        let mut tasks: Vec<Task> = tables
            .tasks
            .iter()
            .filter(|t| t.event_id == event_id)
            .cloned()
            .collect();

        tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(tasks)
    }

    async fn create_event(&self, input: CreateEvent) -> StoreResult<Event> {
        input.validate()?;

        let event = Event {
            id: Uuid::new_v4(),
            title: input.title,
            kind: input.kind,
            date: input.date,
            status: CreateEvent::INITIAL_STATUS,
            created_by: input.created_by,
            created_at: Utc::now(),
            tasks: Vec::new(),
        };

        self.tables.lock().unwrap().events.push(event.clone());
        Ok(event)
    }

    async fn create_tasks(&self, event_id: Uuid, titles: Vec<String>) -> StoreResult<()> {
        let mut tables = self.tables.lock().unwrap();

        if !tables.events.iter().any(|e| e.id == event_id) {
            return Err(StoreError::NotFound(format!("event {event_id}")));
        }

        let base = Utc::now();
        for (i, title) in titles.into_iter().enumerate() {
            tables.tasks.push(Task {
                id: Uuid::new_v4(),
                event_id,
                title,
                status: TaskStatus::Pending,
                // Spread timestamps so ordering is stable
                created_at: base + Duration::milliseconds(i as i64),
            });
        }

        Ok(())
    }

    async fn update_task_status(&self, task_id: Uuid, status: TaskStatus) -> StoreResult<()> {
        if self.faults.lock().unwrap().fail_task_updates {
            return Err(StoreError::Network("injected task update failure".to_string()));
        }

        let mut tables = self.tables.lock().unwrap();
        let task = tables
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| StoreError::NotFound(format!("task {task_id}")))?;

        task.status = status;
        Ok(())
    }

    async fn update_event_status(&self, event_id: Uuid, status: EventStatus) -> StoreResult<()> {
        let mut tables = self.tables.lock().unwrap();
        let event = tables
            .events
            .iter_mut()
            .find(|e| e.id == event_id)
            .ok_or_else(|| StoreError::NotFound(format!("event {event_id}")))?;

        event.status = status;
        Ok(())
    }

    async fn delete_event(&self, id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.lock().unwrap();
        tables.events.retain(|e| e.id != id);
        // The real backend cascades via the foreign key
        tables.tasks.retain(|t| t.event_id != id);
        Ok(())
    }

    async fn list_profiles(&self) -> StoreResult<Vec<Profile>> {
        if self.faults.lock().unwrap().deny_profile_ops {
            return Err(StoreError::PermissionDenied(
                "profiles are admin-only".to_string(),
            ));
        }

        Ok(self.tables.lock().unwrap().profiles.clone())
    }

    async fn update_profile_role(&self, user_id: Uuid, role: Role) -> StoreResult<()> {
        if self.faults.lock().unwrap().deny_profile_ops {
            return Err(StoreError::PermissionDenied(
                "profiles are admin-only".to_string(),
            ));
        }

        let mut tables = self.tables.lock().unwrap();
        let profile = tables
            .profiles
            .iter_mut()
            .find(|p| p.id == user_id)
            .ok_or_else(|| StoreError::NotFound(format!("profile {user_id}")))?;

        profile.role = role;
        Ok(())
    }

    async fn fetch_role(&self, user_id: Uuid) -> StoreResult<Role> {
        if self.faults.lock().unwrap().fail_role_lookup {
            return Err(StoreError::Network("injected role lookup failure".to_string()));
        }

        self.tables
            .lock()
            .unwrap()
            .profiles
            .iter()
            .find(|p| p.id == user_id)
            .map(|p| p.role)
            .ok_or_else(|| StoreError::NotFound(format!("profile {user_id}")))
    }
}
