/// Session identity for the authenticated user
///
/// This module provides the immutable `Identity` value computed once at
/// bootstrap by the session resolver and threaded explicitly through view
/// construction. There is no process-wide current user; views receive the
/// identity they were built with, and a new identity is computed only on
/// explicit auth-state changes (login, logout, expiry).
///
/// # Example
///
/// ```
/// use eventhub_core::identity::{Identity, SessionState};
/// use eventhub_core::models::profile::Role;
/// use uuid::Uuid;
///
/// let state = SessionState::Ready(Identity {
///     user_id: Uuid::new_v4(),
///     role: Role::Organizer,
/// });
///
/// assert!(state.identity().is_some());
/// assert!(SessionState::Unauthenticated.identity().is_none());
/// ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::profile::Role;

/// Immutable identity of a signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// User ID from the auth provider
    pub user_id: Uuid,

    /// Access role from the user's profile row, or the `student` fallback
    /// when the role lookup failed
    pub role: Role,
}

/// Terminal states of session resolution
///
/// The resolver never returns an error; every failure path collapses into
/// one of these variants. `Failed` carries the detail for display and
/// logging but grants no more access than `Unauthenticated`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No active session
    Unauthenticated,

    /// Session and role resolved
    Ready(Identity),

    /// Session fetch itself failed (network, provider outage)
    Failed {
        /// Human-readable failure detail
        detail: String,
    },
}

impl SessionState {
    /// Returns the identity if the session is ready
    ///
    /// `Failed` yields `None`: a session we could not verify is treated
    /// exactly like no session at all.
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionState::Ready(identity) => Some(identity),
            SessionState::Unauthenticated | SessionState::Failed { .. } => None,
        }
    }

    /// Checks whether a user is signed in
    pub fn is_authenticated(&self) -> bool {
        self.identity().is_some()
    }
}
