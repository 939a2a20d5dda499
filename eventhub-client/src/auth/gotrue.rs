/// REST auth provider
///
/// Talks to the managed backend's auth service over HTTP:
///
/// - `GET /auth/v1/user` validates the persisted access token and returns
///   the user record
/// - `GET /auth/v1/authorize?provider=...` is the OAuth entry point the
///   browser is redirected to
/// - `POST /auth/v1/logout` revokes the current token
///
/// A 401 from the user endpoint means the token is absent or expired; that
/// is an unauthenticated state, not a failure.

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::config::BackendConfig;

use super::{AuthError, AuthProvider, Session};

/// Auth provider backed by the managed backend's auth service
pub struct RestAuth {
    http: reqwest::Client,
    backend: BackendConfig,
}

/// Shape of the `/auth/v1/user` response, reduced to what we use
#[derive(Debug, Deserialize)]
struct UserRecord {
    id: Uuid,
}

impl RestAuth {
    /// Creates a provider for the configured backend
    pub fn new(backend: BackendConfig) -> Self {
        RestAuth {
            http: reqwest::Client::new(),
            backend,
        }
    }
}

#[async_trait]
impl AuthProvider for RestAuth {
    async fn current_session(&self) -> Result<Option<Session>, AuthError> {
        let token = match &self.backend.access_token {
            Some(token) => token.clone(),
            None => return Ok(None),
        };

        let response = self
            .http
            .get(self.backend.auth_url("user"))
            .header("apikey", &self.backend.anon_key)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            // Expired or revoked token: signed out, not an error
            return Ok(None);
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AuthError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        let user: UserRecord = response
            .json()
            .await
            .map_err(|e| AuthError::Decode(e.to_string()))?;

        Ok(Some(Session {
            user_id: user.id,
            access_token: token,
        }))
    }

    fn sign_in_url(&self, provider: &str) -> String {
        format!(
            "{}?provider={}",
            self.backend.auth_url("authorize"),
            provider
        )
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let token = match &self.backend.access_token {
            Some(token) => token.clone(),
            None => return Ok(()),
        };

        let response = self
            .http
            .post(self.backend.auth_url("logout"))
            .header("apikey", &self.backend.anon_key)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() && status != reqwest::StatusCode::UNAUTHORIZED {
            let message = response.text().await.unwrap_or_default();
            return Err(AuthError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(token: Option<&str>) -> RestAuth {
        RestAuth::new(BackendConfig {
            url: "https://hub.example.co".to_string(),
            anon_key: "anon-key".to_string(),
            access_token: token.map(String::from),
        })
    }

    #[test]
    fn test_sign_in_url() {
        assert_eq!(
            provider(None).sign_in_url("google"),
            "https://hub.example.co/auth/v1/authorize?provider=google"
        );
    }

    #[tokio::test]
    async fn test_no_token_means_no_session() {
        // Without a persisted token there is nothing to validate remotely
        let session = provider(None).current_session().await.unwrap();
        assert!(session.is_none());
    }

    #[tokio::test]
    async fn test_sign_out_without_token_is_a_noop() {
        assert!(provider(None).sign_out().await.is_ok());
    }
}
