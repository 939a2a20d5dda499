/// Integration tests for the Event Hub client
///
/// These tests verify the core flows end-to-end over the mock backend:
/// - Session resolution with role fallback
/// - Route guarding against each resolved state
/// - Event creation with a checklist
/// - Optimistic task toggling and derived event status
/// - Admin role management and permission denials

mod common;

use common::TestContext;
use eventhub_client::auth::MockAuth;
use eventhub_client::session::resolve;
use eventhub_client::store::EventStore;
use eventhub_client::views::{AdminUsersView, CreateEventForm, DashboardView, EventDetailsView};
use eventhub_core::identity::SessionState;
use eventhub_core::models::{EventStatus, Role};
use eventhub_core::routing::{authorize, Access, Route};

/// Resolving a signed-in organizer yields their stored role
#[tokio::test]
async fn test_resolution_reads_stored_role() {
    let ctx = TestContext::new();

    let state = resolve(&ctx.auth_for(ctx.organizer), &ctx.store).await;

    let identity = state.identity().expect("organizer is signed in");
    assert_eq!(identity.user_id, ctx.organizer);
    assert_eq!(identity.role, Role::Organizer);
}

/// A failed role lookup degrades to student, never to an error
#[tokio::test]
async fn test_role_lookup_failure_degrades_to_student() {
    let ctx = TestContext::new();
    ctx.store.fail_role_lookup();

    let state = resolve(&ctx.auth_for(ctx.admin), &ctx.store).await;

    assert_eq!(state.identity().map(|i| i.role), Some(Role::Student));
}

/// A signed-out visitor heading anywhere protected lands on /login
#[tokio::test]
async fn test_signed_out_navigation() {
    let ctx = TestContext::new();
    let state = resolve(&MockAuth::signed_out(), &ctx.store).await;

    assert_eq!(state, SessionState::Unauthenticated);

    // Unauthenticated takes precedence over the role requirement
    assert_eq!(
        authorize(&Route::CreateEvent, &state),
        Access::Redirect(Route::Login)
    );
    assert_eq!(
        authorize(&Route::Dashboard, &state),
        Access::Redirect(Route::Login)
    );
    assert_eq!(authorize(&Route::Login, &state), Access::Allow);
}

/// A resolved student is kept out of the restricted pages
#[tokio::test]
async fn test_student_navigation() {
    let ctx = TestContext::new();
    let state = resolve(&ctx.auth_for(ctx.student), &ctx.store).await;

    assert_eq!(authorize(&Route::Dashboard, &state), Access::Allow);
    assert_eq!(
        authorize(&Route::CreateEvent, &state),
        Access::Redirect(Route::Dashboard)
    );
    assert_eq!(
        authorize(&Route::AdminUsers, &state),
        Access::Redirect(Route::Dashboard)
    );
}

/// Organizer creates an event with three tasks and works the checklist:
/// 67% leaves it planning, the last toggle completes it
#[tokio::test]
async fn test_checklist_completion_flow() {
    let ctx = TestContext::new();

    let state = resolve(&ctx.auth_for(ctx.organizer), &ctx.store).await;
    let identity = *state.identity().unwrap();

    let mut form = CreateEventForm::new();
    form.title = "Spring Hackathon".to_string();
    form.kind = "hackathon".to_string();
    form.date = chrono::NaiveDate::from_ymd_opt(2026, 4, 18);
    form.add_task("book venue");
    form.add_task("order pizza");
    form.add_task("invite judges");

    let event = form.submit(&ctx.store, &identity).await.unwrap();
    assert_eq!(event.status, EventStatus::Planning);

    let mut details = EventDetailsView::load(&ctx.store, event.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(details.tasks.len(), 3);
    assert_eq!(details.progress(), 0);

    let ids: Vec<_> = details.tasks.iter().map(|row| row.task.id).collect();

    details.toggle_task(&ctx.store, ids[0]).await.unwrap();
    details.toggle_task(&ctx.store, ids[1]).await.unwrap();

    assert_eq!(details.progress(), 67);
    assert_eq!(details.event.status, EventStatus::Planning);
    assert_eq!(
        ctx.store.stored_event_status(event.id),
        Some(EventStatus::Planning)
    );

    details.toggle_task(&ctx.store, ids[2]).await.unwrap();

    assert_eq!(details.progress(), 100);
    assert_eq!(
        ctx.store.stored_event_status(event.id),
        Some(EventStatus::Completed)
    );

    // The dashboard reflects the finished checklist
    let dashboard = DashboardView::load(&ctx.store).await.unwrap();
    let card = dashboard
        .cards
        .iter()
        .find(|c| c.event.id == event.id)
        .unwrap();
    assert_eq!(card.percent, 100);
    assert_eq!(card.event.status, EventStatus::Completed);
}

/// A failed toggle reverts the local checkbox and leaves the store alone
#[tokio::test]
async fn test_failed_toggle_reverts() {
    let ctx = TestContext::new();
    let event = common::create_test_event(&ctx, "Career Fair", &["invite companies"])
        .await
        .unwrap();

    let mut details = EventDetailsView::load(&ctx.store, event.id)
        .await
        .unwrap()
        .unwrap();
    let task_id = details.tasks[0].task.id;

    ctx.store.fail_task_updates();
    assert!(details.toggle_task(&ctx.store, task_id).await.is_err());

    assert_eq!(details.progress(), 0);
    assert!(!ctx.store.stored_task(task_id).unwrap().status.is_done());
    assert_eq!(
        ctx.store.stored_event_status(event.id),
        Some(EventStatus::Planning)
    );
}

/// Deleting an event removes its checklist with it
#[tokio::test]
async fn test_delete_event_flow() {
    let ctx = TestContext::new();
    let event = common::create_test_event(&ctx, "Open Day", &["print maps", "set up booths"])
        .await
        .unwrap();

    let details = EventDetailsView::load(&ctx.store, event.id)
        .await
        .unwrap()
        .unwrap();
    details.delete(&ctx.store).await.unwrap();

    assert!(ctx.store.get_event(event.id).await.unwrap().is_none());
    assert_eq!(ctx.store.task_count(event.id), 0);

    let dashboard = DashboardView::load(&ctx.store).await.unwrap();
    assert!(dashboard.cards.iter().all(|c| c.event.id != event.id));
}

/// Admin changes a role; the denial path surfaces distinctly
#[tokio::test]
async fn test_role_management() {
    let ctx = TestContext::new();

    let mut view = AdminUsersView::load(&ctx.store).await.unwrap();
    assert_eq!(view.profiles.len(), 3);

    view.change_role(&ctx.store, ctx.student, Role::Organizer)
        .await
        .unwrap();
    assert_eq!(
        ctx.store.fetch_role(ctx.student).await.unwrap(),
        Role::Organizer
    );

    // Once the backend starts denying, the error class is preserved
    ctx.store.deny_profile_ops();
    let err = view
        .change_role(&ctx.store, ctx.student, Role::Admin)
        .await
        .unwrap_err();
    assert!(err.is_permission_denied());
    assert_eq!(err.kind(), "permission_denied");
}
