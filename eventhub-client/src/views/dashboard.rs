/// Dashboard coordinator
///
/// Loads the event list with nested task summaries and pairs each event
/// with its completion percentage for the progress bars.

use eventhub_core::error::StoreResult;
use eventhub_core::models::Event;

use crate::auth::{AuthError, AuthProvider};
use crate::store::EventStore;

/// One dashboard card: an event plus its derived progress
#[derive(Debug, Clone)]
pub struct EventCard {
    /// The event, with task summaries attached
    pub event: Event,

    /// Checklist completion, 0..=100
    pub percent: u8,
}

/// Dashboard page state
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// Cards in the order the store returned them (newest first)
    pub cards: Vec<EventCard>,
}

impl DashboardView {
    /// Loads all visible events
    pub async fn load(store: &dyn EventStore) -> StoreResult<Self> {
        let events = store.list_events().await?;

        let cards = events
            .into_iter()
            .map(|event| {
                let percent = event.completion_percent();
                EventCard { event, percent }
            })
            .collect();

        Ok(DashboardView { cards })
    }

    /// Signs the user out; the caller re-resolves the session afterwards
    pub async fn logout(auth: &dyn AuthProvider) -> Result<(), AuthError> {
        auth.sign_out().await
    }
}
