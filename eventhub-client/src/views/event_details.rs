/// Event details coordinator
///
/// Holds one event and its checklist, and runs the optimistic task toggle.
///
/// # Toggle State Machine
///
/// ```text
/// Confirmed ──toggle──▶ Pending { previous }
///                          │
///                          ├─ remote write ok ──▶ Confirmed (new status kept)
///                          └─ remote write err ─▶ Failed (status reverted)
/// ```
///
/// The local status flips before the remote write is awaited ("update now,
/// confirm later"). A failed write reverts the local status, so the view
/// never drifts silently from the store. After a confirmed toggle the
/// derived event status is recomputed and persisted as a second,
/// independently awaited write; if that second write fails the stored
/// event status stays stale until the next mutation.

use uuid::Uuid;

use eventhub_core::error::StoreResult;
use eventhub_core::models::{Event, Task};
use eventhub_core::progress::{completion_percent, derive_event_status};

use crate::store::EventStore;

/// Synchronization state of one checklist row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// Local and stored status agree
    Confirmed,

    /// Local status flipped, remote write in flight
    Pending {
        /// Status to restore if the write fails
        previous: eventhub_core::models::TaskStatus,
    },

    /// Last write failed; the local status was reverted
    Failed,
}

/// One checklist row with its sync state
#[derive(Debug, Clone)]
pub struct TaskRow {
    /// The task as the view currently shows it
    pub task: Task,

    /// Whether the shown status is confirmed by the store
    pub sync: SyncState,
}

/// Event details page state
#[derive(Debug, Clone)]
pub struct EventDetailsView {
    /// The event being shown
    pub event: Event,

    /// Checklist rows, oldest first
    pub tasks: Vec<TaskRow>,
}

impl EventDetailsView {
    /// Loads the event and its checklist
    ///
    /// The two reads are independent and awaited concurrently. Returns
    /// `Ok(None)` when the event does not exist.
    pub async fn load(store: &dyn EventStore, id: Uuid) -> StoreResult<Option<Self>> {
        let (event, tasks) = tokio::try_join!(store.get_event(id), store.list_tasks(id))?;

        let event = match event {
            Some(event) => event,
            None => return Ok(None),
        };

        let tasks = tasks
            .into_iter()
            .map(|task| TaskRow {
                task,
                sync: SyncState::Confirmed,
            })
            .collect();

        Ok(Some(EventDetailsView { event, tasks }))
    }

    /// Checklist completion as currently shown, 0..=100
    pub fn progress(&self) -> u8 {
        completion_percent(self.tasks.iter().map(|row| row.task.status))
    }

    /// Toggles a task optimistically and persists the change
    ///
    /// On success the event's derived status is recomputed and persisted
    /// too. On failure the local status is reverted and the error returned
    /// for display; no other row is touched.
    pub async fn toggle_task(&mut self, store: &dyn EventStore, task_id: Uuid) -> StoreResult<()> {
        let row = self
            .tasks
            .iter_mut()
            .find(|row| row.task.id == task_id)
            .ok_or_else(|| {
                eventhub_core::error::StoreError::NotFound(format!("task {task_id}"))
            })?;

        // Phase one: flip locally before the write
        let previous = row.task.status;
        let next = previous.toggled();
        row.task.status = next;
        row.sync = SyncState::Pending { previous };

        // Phase two: confirm or revert
        if let Err(err) = store.update_task_status(task_id, next).await {
            let row = self
                .tasks
                .iter_mut()
                .find(|row| row.task.id == task_id)
                .expect("row existed above");
            row.task.status = previous;
            row.sync = SyncState::Failed;
            return Err(err);
        }

        let row = self
            .tasks
            .iter_mut()
            .find(|row| row.task.id == task_id)
            .expect("row existed above");
        row.sync = SyncState::Confirmed;

        // Keep the persisted event status consistent with its tasks.
        // Client-triggered: a failure here leaves the stored status stale
        // until the next mutation.
        let derived = derive_event_status(self.tasks.iter().map(|row| row.task.status));
        if derived != self.event.status {
            store.update_event_status(self.event.id, derived).await?;
            self.event.status = derived;
        }

        Ok(())
    }

    /// Deletes the event; the backend cascades to its tasks
    pub async fn delete(&self, store: &dyn EventStore) -> StoreResult<()> {
        store.delete_event(self.event.id).await
    }
}
