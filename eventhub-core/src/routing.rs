/// Role-gated route authorization
///
/// This module provides the pure route guard evaluated on every navigation
/// and on every identity change. It performs no I/O and keeps no state.
///
/// Authorization here is advisory, UX-level gating only. The managed
/// backend's row-level security is the real security boundary; a user who
/// bypasses the guard still cannot read or write rows the backend denies.
///
/// # Rules
///
/// | Route          | Allowed when              | Redirect otherwise |
/// |----------------|---------------------------|--------------------|
/// | `/login`       | unauthenticated           | `/`                |
/// | `/`            | authenticated (any role)  | `/login`           |
/// | `/create`      | organizer or admin        | `/`                |
/// | `/event/:id`   | authenticated             | `/login`           |
/// | `/admin/users` | admin                     | `/`                |
///
/// An unauthenticated identity takes precedence over any role check: a
/// signed-out user heading to `/create` is sent to `/login`, not `/`.
///
/// # Example
///
/// ```
/// use eventhub_core::identity::SessionState;
/// use eventhub_core::routing::{authorize, Access, Route};
///
/// let access = authorize(&Route::CreateEvent, &SessionState::Unauthenticated);
/// assert_eq!(access, Access::Redirect(Route::Login));
/// ```

use uuid::Uuid;

use crate::identity::SessionState;

/// The five guarded routes of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/login` — OAuth sign-in page
    Login,

    /// `/` — event dashboard
    Dashboard,

    /// `/create` — event creation form
    CreateEvent,

    /// `/event/:id` — event details and checklist
    EventDetails(Uuid),

    /// `/admin/users` — role management table
    AdminUsers,
}

impl Route {
    /// Parses a navigation path into a route
    ///
    /// Returns `None` for unknown paths and for event paths whose id
    /// segment is not a UUID.
    pub fn parse(path: &str) -> Option<Route> {
        match path.trim_end_matches('/') {
            "" => Some(Route::Dashboard),
            "/login" => Some(Route::Login),
            "/create" => Some(Route::CreateEvent),
            "/admin/users" => Some(Route::AdminUsers),
            other => {
                let id = other.strip_prefix("/event/")?;
                Uuid::parse_str(id).ok().map(Route::EventDetails)
            }
        }
    }

    /// Renders the route back into a navigation path
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Dashboard => "/".to_string(),
            Route::CreateEvent => "/create".to_string(),
            Route::EventDetails(id) => format!("/event/{}", id),
            Route::AdminUsers => "/admin/users".to_string(),
        }
    }
}

/// Guard verdict for a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Render the requested route
    Allow,

    /// Navigate to the target route instead
    Redirect(Route),
}

/// Authorizes a navigation for the given session state
///
/// Pure function of `(route, session)`; callers re-evaluate it on every
/// navigation and whenever the session state changes.
pub fn authorize(route: &Route, session: &SessionState) -> Access {
    let identity = match session.identity() {
        Some(identity) => identity,
        None => {
            // Signed out: only the login page is reachable
            return match route {
                Route::Login => Access::Allow,
                _ => Access::Redirect(Route::Login),
            };
        }
    };

    match route {
        Route::Login => Access::Redirect(Route::Dashboard),
        Route::Dashboard | Route::EventDetails(_) => Access::Allow,
        Route::CreateEvent => {
            if identity.role.can_create_events() {
                Access::Allow
            } else {
                Access::Redirect(Route::Dashboard)
            }
        }
        Route::AdminUsers => {
            if identity.role.can_manage_users() {
                Access::Allow
            } else {
                Access::Redirect(Route::Dashboard)
            }
        }
    }
}
