/// Session resolution at application bootstrap
///
/// Resolves the current user exactly once per load: one session fetch from
/// the auth provider, then one role lookup from the profile table. The
/// result is an immutable `SessionState` threaded through view
/// construction; it is recomputed only on explicit auth-state changes,
/// never mutated in place.
///
/// # Degradation Policy
///
/// Resolution never fails the caller:
///
/// - session fetch failure → `SessionState::Failed`, logged, treated as
///   signed out by the guard
/// - absent session → `SessionState::Unauthenticated`
/// - role lookup failure (network, missing row, denial) → the session is
///   kept and the role falls back to `student`, the least-privilege
///   default, with a warning log
///
/// # Example
///
/// ```
/// use eventhub_client::auth::MockAuth;
/// use eventhub_client::session::resolve;
/// use eventhub_client::store::MockStore;
/// use eventhub_core::identity::SessionState;
///
/// # async fn example() {
/// let auth = MockAuth::signed_out();
/// let store = MockStore::new();
///
/// let state = resolve(&auth, &store).await;
/// assert_eq!(state, SessionState::Unauthenticated);
/// # }
/// ```

use eventhub_core::identity::{Identity, SessionState};
use eventhub_core::models::Role;

use crate::auth::AuthProvider;
use crate::store::EventStore;

/// Resolves the current session into a terminal state
///
/// Performs at most two read calls and has no other side effects. All
/// error paths collapse into a `SessionState`; this function cannot fail.
pub async fn resolve(auth: &dyn AuthProvider, store: &dyn EventStore) -> SessionState {
    let session = match auth.current_session().await {
        Ok(Some(session)) => session,
        Ok(None) => return SessionState::Unauthenticated,
        Err(err) => {
            tracing::warn!(error = %err, "session fetch failed");
            return SessionState::Failed {
                detail: err.to_string(),
            };
        }
    };

    let role = match store.fetch_role(session.user_id).await {
        Ok(role) => role,
        Err(err) => {
            // Keep the session; degrade to the least-privilege role
            tracing::warn!(
                user_id = %session.user_id,
                error = %err,
                "role lookup failed, falling back to student"
            );
            Role::Student
        }
    };

    SessionState::Ready(Identity {
        user_id: session.user_id,
        role,
    })
}
