/// Page coordinators
///
/// One coordinator per guarded page. Each holds the page's data, dispatches
/// store operations, and applies the results to local state; rendering is
/// someone else's problem. Mutation errors are returned to the caller for
/// display and never corrupt already-loaded state.

pub mod admin_users;
pub mod create_event;
pub mod dashboard;
pub mod event_details;

pub use admin_users::AdminUsersView;
pub use create_event::CreateEventForm;
pub use dashboard::{DashboardView, EventCard};
pub use event_details::{EventDetailsView, SyncState, TaskRow};
