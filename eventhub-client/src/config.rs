/// Configuration management for the client
///
/// This module loads configuration from environment variables and provides
/// a type-safe configuration struct.
///
/// # Environment Variables
///
/// - `EVENTHUB_BACKEND_URL`: Base URL of the managed backend (required)
/// - `EVENTHUB_ANON_KEY`: Public API key sent with every request (required)
/// - `EVENTHUB_ACCESS_TOKEN`: Persisted session token, if any (optional)
/// - `EVENTHUB_OAUTH_PROVIDER`: OAuth provider name (default: google)
///
/// # Example
///
/// ```no_run
/// use eventhub_client::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Backend at {}", config.backend.url);
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use std::env;

/// Complete client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Managed backend configuration
    pub backend: BackendConfig,

    /// OAuth configuration
    pub oauth: OAuthConfig,
}

/// Managed backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL, e.g. `https://project.example.co`
    pub url: String,

    /// Public anon key; row-level security still applies to every request
    /// made with it
    pub anon_key: String,

    /// Access token of a persisted session, if the user signed in before
    pub access_token: Option<String>,
}

/// OAuth configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthConfig {
    /// Provider name passed to the auth service (e.g. "google")
    pub provider: String,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `EVENTHUB_BACKEND_URL` or `EVENTHUB_ANON_KEY`
    /// is missing.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let url = env::var("EVENTHUB_BACKEND_URL")
            .map_err(|_| anyhow::anyhow!("EVENTHUB_BACKEND_URL environment variable is required"))?;

        let anon_key = env::var("EVENTHUB_ANON_KEY")
            .map_err(|_| anyhow::anyhow!("EVENTHUB_ANON_KEY environment variable is required"))?;

        let access_token = env::var("EVENTHUB_ACCESS_TOKEN").ok();

        let provider =
            env::var("EVENTHUB_OAUTH_PROVIDER").unwrap_or_else(|_| "google".to_string());

        Ok(Self {
            backend: BackendConfig {
                url: url.trim_end_matches('/').to_string(),
                anon_key,
                access_token,
            },
            oauth: OAuthConfig { provider },
        })
    }
}

impl BackendConfig {
    /// Returns the REST endpoint for a table
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }

    /// Returns an auth service endpoint
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path)
    }
}
