/// Mock auth provider for testing and demos
///
/// Resolves to a fixed session state without touching the network. Useful
/// for exercising the session resolver and the view coordinators against
/// every resolution outcome.
///
/// # Example
///
/// ```
/// use eventhub_client::auth::{AuthProvider, MockAuth};
///
/// # async fn example() {
/// let auth = MockAuth::signed_out();
/// assert!(auth.current_session().await.unwrap().is_none());
///
/// let auth = MockAuth::failing("provider unreachable");
/// assert!(auth.current_session().await.is_err());
/// # }
/// ```

use async_trait::async_trait;
use uuid::Uuid;

use super::{AuthError, AuthProvider, Session};

/// Mock auth provider implementation
pub struct MockAuth {
    session: Option<Session>,
    failure: Option<String>,
}

impl MockAuth {
    /// Provider with an active session for the given user
    pub fn signed_in(user_id: Uuid) -> Self {
        MockAuth {
            session: Some(Session {
                user_id,
                access_token: format!("mock-token-{user_id}"),
            }),
            failure: None,
        }
    }

    /// Provider with no active session
    pub fn signed_out() -> Self {
        MockAuth {
            session: None,
            failure: None,
        }
    }

    /// Provider whose session fetch fails
    pub fn failing(detail: impl Into<String>) -> Self {
        MockAuth {
            session: None,
            failure: Some(detail.into()),
        }
    }
}

#[async_trait]
impl AuthProvider for MockAuth {
    async fn current_session(&self) -> Result<Option<Session>, AuthError> {
        match &self.failure {
            Some(detail) => Err(AuthError::Network(detail.clone())),
            None => Ok(self.session.clone()),
        }
    }

    fn sign_in_url(&self, provider: &str) -> String {
        format!("mock://authorize?provider={provider}")
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_signed_in_session() {
        let user_id = Uuid::new_v4();
        let session = MockAuth::signed_in(user_id)
            .current_session()
            .await
            .unwrap()
            .unwrap();
        assert_eq!(session.user_id, user_id);
    }

    #[tokio::test]
    async fn test_signed_out_has_no_session() {
        let session = MockAuth::signed_out().current_session().await.unwrap();
        assert!(session.is_none());
    }

    #[tokio::test]
    async fn test_failing_returns_error() {
        let err = MockAuth::failing("down")
            .current_session()
            .await
            .unwrap_err();
        assert!(err.to_string().contains("down"));
    }
}
