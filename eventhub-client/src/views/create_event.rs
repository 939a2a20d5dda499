/// Event creation coordinator
///
/// Collects the form fields and the draft checklist, validates client-side,
/// then creates the event and batch-inserts its tasks as two independent
/// backend calls.
///
/// There is no transaction across the two writes: if the task insert fails
/// the event row stays behind with an empty checklist. The caller gets the
/// error; a later edit can re-add the tasks.

use chrono::NaiveDate;
use validator::Validate;

use eventhub_core::error::StoreResult;
use eventhub_core::identity::Identity;
use eventhub_core::models::{CreateEvent, Event};

use crate::store::EventStore;

/// Draft state of the event creation form
#[derive(Debug, Clone)]
pub struct CreateEventForm {
    /// Event title
    pub title: String,

    /// Event type
    pub kind: String,

    /// Date the event takes place
    pub date: Option<NaiveDate>,

    /// Draft checklist entries, in entry order
    pub tasks: Vec<String>,
}

impl CreateEventForm {
    /// Creates an empty form
    pub fn new() -> Self {
        CreateEventForm {
            title: String::new(),
            kind: String::new(),
            date: None,
            tasks: Vec::new(),
        }
    }

    /// Adds a checklist entry, dropping blank input
    pub fn add_task(&mut self, text: &str) {
        let text = text.trim();
        if !text.is_empty() {
            self.tasks.push(text.to_string());
        }
    }

    /// Builds the validated creation input for the signed-in user
    ///
    /// A missing date is reported through the same validation error type
    /// as an empty title or type.
    fn to_input(&self, identity: &Identity) -> StoreResult<CreateEvent> {
        let date = self.date.ok_or_else(|| {
            eventhub_core::error::StoreError::Validation(vec![
                eventhub_core::error::FieldViolation {
                    field: "date".to_string(),
                    message: "date must be set".to_string(),
                },
            ])
        })?;

        let input = CreateEvent {
            title: self.title.clone(),
            kind: self.kind.clone(),
            date,
            created_by: identity.user_id,
        };

        input.validate()?;
        Ok(input)
    }

    /// Creates the event and its checklist
    ///
    /// Returns the created event id on success. The event is owned by the
    /// submitting identity.
    pub async fn submit(&self, store: &dyn EventStore, identity: &Identity) -> StoreResult<Event> {
        let input = self.to_input(identity)?;

        let event = store.create_event(input).await?;

        if !self.tasks.is_empty() {
            store.create_tasks(event.id, self.tasks.clone()).await?;
        }

        Ok(event)
    }
}

impl Default for CreateEventForm {
    fn default() -> Self {
        Self::new()
    }
}
