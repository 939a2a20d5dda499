/// REST event store
///
/// Store implementation over the managed backend's row-oriented REST
/// interface:
///
/// - reads use `select=` column lists with embedded `tasks(id,status)` for
///   the event list, and `id=eq.<uuid>` filters for single rows
/// - writes are `POST`/`PATCH`/`DELETE` against the table endpoints, with
///   `Prefer: return=representation` when the created row is needed back
///
/// Every request carries the public anon key plus, when a user is signed
/// in, their bearer token; row-level security on the backend decides what
/// each request may touch. Denials come back as 401/403 and are mapped to
/// `StoreError::PermissionDenied`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use eventhub_core::error::{StoreError, StoreResult};
use eventhub_core::models::{
    CreateEvent, Event, EventStatus, NewTask, Profile, Role, Task, TaskStatus,
};

use crate::config::BackendConfig;

use super::EventStore;

/// Event store backed by the managed backend's REST interface
pub struct RestStore {
    http: reqwest::Client,
    backend: BackendConfig,
}

/// Shape of the backend's error body, decoded best effort
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    message: Option<String>,
}

/// Single-column shape of the resolver's role lookup
#[derive(Debug, Deserialize)]
struct RoleRow {
    role: Role,
}

impl RestStore {
    /// Creates a store for the configured backend
    pub fn new(backend: BackendConfig) -> Self {
        RestStore {
            http: reqwest::Client::new(),
            backend,
        }
    }

    /// Applies the anon key and, if present, the user's bearer token
    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request.header("apikey", &self.backend.anon_key);
        match &self.backend.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Sends a request and decodes the JSON body of a successful response
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> StoreResult<T> {
        let response = self
            .with_auth(request)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let response = check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    /// Sends a request and discards the body of a successful response
    async fn execute(&self, request: reqwest::RequestBuilder) -> StoreResult<()> {
        let response = self
            .with_auth(request)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        check_status(response).await?;
        Ok(())
    }
}

/// Maps non-success statuses onto the store error taxonomy
async fn check_status(response: reqwest::Response) -> StoreResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<BackendErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());

    Err(match status.as_u16() {
        401 | 403 => StoreError::PermissionDenied(message),
        404 => StoreError::NotFound(message),
        code => StoreError::Backend {
            status: code,
            message,
        },
    })
}

#[async_trait]
impl EventStore for RestStore {
    async fn list_events(&self) -> StoreResult<Vec<Event>> {
        let request = self
            .http
            .get(self.backend.table_url("events"))
            .query(&[
                (
                    "select",
                    "id,title,type,date,status,created_by,created_at,tasks(id,status)",
                ),
                ("order", "created_at.desc"),
            ]);

        self.fetch_json(request).await
    }

    async fn get_event(&self, id: Uuid) -> StoreResult<Option<Event>> {
        let filter = format!("eq.{id}");
        let request = self
            .http
            .get(self.backend.table_url("events"))
            .query(&[
                ("select", "id,title,type,date,status,created_by,created_at"),
                ("id", filter.as_str()),
                ("limit", "1"),
            ]);

        let mut rows: Vec<Event> = self.fetch_json(request).await?;
        Ok(rows.pop())
    }

    async fn list_tasks(&self, event_id: Uuid) -> StoreResult<Vec<Task>> {
        let filter = format!("eq.{event_id}");
        let request = self
            .http
            .get(self.backend.table_url("tasks"))
            .query(&[
                ("select", "id,event_id,title,status,created_at"),
                ("event_id", filter.as_str()),
                ("order", "created_at.asc"),
            ]);

        self.fetch_json(request).await
    }

    async fn create_event(&self, input: CreateEvent) -> StoreResult<Event> {
        input.validate()?;

        let body = json!({
            "title": input.title,
            "type": input.kind,
            "date": input.date,
            "status": CreateEvent::INITIAL_STATUS,
            "created_by": input.created_by,
        });

        let request = self
            .http
            .post(self.backend.table_url("events"))
            .header("Prefer", "return=representation")
            .json(&body);

        // The backend returns the inserted rows as an array
        let mut rows: Vec<Event> = self.fetch_json(request).await?;
        rows.pop()
            .ok_or_else(|| StoreError::Decode("insert returned no rows".to_string()))
    }

    async fn create_tasks(&self, event_id: Uuid, titles: Vec<String>) -> StoreResult<()> {
        if titles.is_empty() {
            return Ok(());
        }

        let rows: Vec<NewTask> = titles
            .into_iter()
            .map(|title| NewTask::new(event_id, title))
            .collect();

        let request = self
            .http
            .post(self.backend.table_url("tasks"))
            .header("Prefer", "return=minimal")
            .json(&rows);

        self.execute(request).await
    }

    async fn update_task_status(&self, task_id: Uuid, status: TaskStatus) -> StoreResult<()> {
        let request = self
            .http
            .patch(self.backend.table_url("tasks"))
            .query(&[("id", format!("eq.{task_id}"))])
            .json(&json!({ "status": status }));

        self.execute(request).await
    }

    async fn update_event_status(&self, event_id: Uuid, status: EventStatus) -> StoreResult<()> {
        let request = self
            .http
            .patch(self.backend.table_url("events"))
            .query(&[("id", format!("eq.{event_id}"))])
            .json(&json!({ "status": status }));

        self.execute(request).await
    }

    async fn delete_event(&self, id: Uuid) -> StoreResult<()> {
        let request = self
            .http
            .delete(self.backend.table_url("events"))
            .query(&[("id", format!("eq.{id}"))]);

        self.execute(request).await
    }

    async fn list_profiles(&self) -> StoreResult<Vec<Profile>> {
        let request = self
            .http
            .get(self.backend.table_url("profiles"))
            .query(&[("select", "id,role")]);

        self.fetch_json(request).await
    }

    async fn update_profile_role(&self, user_id: Uuid, role: Role) -> StoreResult<()> {
        let request = self
            .http
            .patch(self.backend.table_url("profiles"))
            .query(&[("id", format!("eq.{user_id}"))])
            .json(&json!({ "role": role }));

        self.execute(request).await
    }

    async fn fetch_role(&self, user_id: Uuid) -> StoreResult<Role> {
        let filter = format!("eq.{user_id}");
        let request = self
            .http
            .get(self.backend.table_url("profiles"))
            .query(&[("select", "role"), ("id", filter.as_str())]);

        let mut rows: Vec<RoleRow> = self.fetch_json(request).await?;
        rows.pop()
            .map(|row| row.role)
            .ok_or_else(|| StoreError::NotFound(format!("profile {user_id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn store() -> RestStore {
        RestStore::new(BackendConfig {
            url: "https://hub.example.co".to_string(),
            anon_key: "anon-key".to_string(),
            access_token: Some("user-token".to_string()),
        })
    }

    #[tokio::test]
    async fn test_create_event_validates_before_dispatch() {
        // An empty title must fail locally; nothing is sent
        let err = store()
            .create_event(CreateEvent {
                title: String::new(),
                kind: "fair".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 10, 2).unwrap(),
                created_by: Uuid::new_v4(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "validation");
    }

    #[tokio::test]
    async fn test_create_tasks_with_no_titles_is_a_noop() {
        assert!(store()
            .create_tasks(Uuid::new_v4(), Vec::new())
            .await
            .is_ok());
    }

    #[test]
    fn test_new_task_wire_shape() {
        let row = NewTask::new(Uuid::new_v4(), "Print posters");
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["title"], "Print posters");
        assert_eq!(json["status"], "Pending");
    }
}
