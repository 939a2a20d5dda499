/// Authentication provider boundary
///
/// This module defines the contract to the external auth service. The
/// application never handles credentials itself; sign-in is delegated to
/// the provider's OAuth flow and the client only fetches the resulting
/// session.
///
/// # Provider Contract
///
/// All providers must:
/// 1. Implement the `AuthProvider` trait (async)
/// 2. Report an absent or expired session as `Ok(None)`, not as an error
/// 3. Fetch the session at most once per call, no polling
///
/// # Example
///
/// ```
/// use eventhub_client::auth::{AuthProvider, MockAuth};
/// use uuid::Uuid;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let auth = MockAuth::signed_in(Uuid::new_v4());
/// let session = auth.current_session().await?;
/// assert!(session.is_some());
/// # Ok(())
/// # }
/// ```

mod gotrue;
mod mock;

pub use gotrue::RestAuth;
pub use mock::MockAuth;

use async_trait::async_trait;
use uuid::Uuid;

/// Auth error types
///
/// These never reach the UI directly; the session resolver collapses them
/// into a terminal `SessionState`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthError {
    /// Transport-level failure reaching the auth service
    #[error("network error: {0}")]
    Network(String),

    /// The auth service answered with a body this client cannot decode
    #[error("malformed auth response: {0}")]
    Decode(String),

    /// Any other auth service rejection
    #[error("auth service error ({status}): {message}")]
    Backend {
        /// HTTP status code
        status: u16,

        /// Message from the service, best effort
        message: String,
    },
}

/// An authenticated user's active login context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// User ID assigned by the auth service
    pub user_id: Uuid,

    /// Bearer token for store requests made on the user's behalf
    pub access_token: String,
}

/// Contract to the external auth service
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Fetches the current session, exactly once
    ///
    /// Returns `Ok(None)` when nobody is signed in or the persisted token
    /// has expired.
    async fn current_session(&self) -> Result<Option<Session>, AuthError>;

    /// Builds the OAuth authorize URL the browser is sent to for sign-in
    fn sign_in_url(&self, provider: &str) -> String;

    /// Revokes the current session
    async fn sign_out(&self) -> Result<(), AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        let err = AuthError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "network error: connection refused");

        let err = AuthError::Backend {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "auth service error (503): maintenance");
    }
}
