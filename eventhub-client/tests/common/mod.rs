/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - Mock auth provider and store wiring
/// - Seeded users per role
/// - Event/checklist fixtures

use eventhub_client::auth::MockAuth;
use eventhub_client::store::{EventStore, MockStore};
use eventhub_core::models::{CreateEvent, Event, Role};
use uuid::Uuid;

/// Test context containing a seeded mock backend
pub struct TestContext {
    pub store: MockStore,
    pub organizer: Uuid,
    pub admin: Uuid,
    pub student: Uuid,
}

impl TestContext {
    /// Creates a context with one user per interesting role
    pub fn new() -> Self {
        init_tracing();

        let store = MockStore::new();
        let organizer = store.seed_profile(Role::Organizer);
        let admin = store.seed_profile(Role::Admin);
        let student = store.seed_profile(Role::Student);

        TestContext {
            store,
            organizer,
            admin,
            student,
        }
    }

    /// Auth provider with an active session for the given user
    pub fn auth_for(&self, user_id: Uuid) -> MockAuth {
        MockAuth::signed_in(user_id)
    }
}

/// Helper to create an event with a checklist
pub async fn create_test_event(
    ctx: &TestContext,
    title: &str,
    task_titles: &[&str],
) -> anyhow::Result<Event> {
    let event = ctx
        .store
        .create_event(CreateEvent {
            title: title.to_string(),
            kind: "test".to_string(),
            date: chrono::NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            created_by: ctx.organizer,
        })
        .await?;

    if !task_titles.is_empty() {
        ctx.store
            .create_tasks(
                event.id,
                task_titles.iter().map(|t| t.to_string()).collect(),
            )
            .await?;
    }

    Ok(event)
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventhub_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}
