use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;

use crate::core::task::Task;

/// Full-record body for create and update requests. The server replaces the
/// whole record, so both fields are always sent.
#[derive(Debug, Clone, Serialize)]
pub struct TaskPayload<'a> {
    pub title: &'a str,
    pub completed: bool,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(StatusCode),
}

/// Any non-2xx status is an error. In particular a DELETE of a missing
/// identifier comes back 404 and is surfaced, not swallowed.
fn check_status(status: StatusCode) -> Result<(), ApiError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

/// Minimal client for the tasks REST collection.
///
/// Endpoints follow the backend's shape: the collection lives at
/// `{base}/`, creation at `{base}/create/`, and a single task at
/// `{base}/{id}/`.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    fn create_url(&self) -> String {
        format!("{}/create/", self.base_url)
    }

    fn task_url(&self, id: u64) -> String {
        format!("{}/{}/", self.base_url, id)
    }

    /// GET the full task list.
    pub async fn fetch_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let resp = self.http.get(self.collection_url()).send().await?;
        check_status(resp.status())?;
        Ok(resp.json().await?)
    }

    /// POST a new task; the server assigns the identifier.
    pub async fn create_task(&self, title: &str) -> Result<Task, ApiError> {
        let resp = self
            .http
            .post(self.create_url())
            .json(&TaskPayload { title, completed: false })
            .send()
            .await?;
        check_status(resp.status())?;
        Ok(resp.json().await?)
    }

    /// PUT a full-record update to one task.
    pub async fn update_task(&self, id: u64, title: &str, completed: bool) -> Result<Task, ApiError> {
        let resp = self
            .http
            .put(self.task_url(id))
            .json(&TaskPayload { title, completed })
            .send()
            .await?;
        check_status(resp.status())?;
        Ok(resp.json().await?)
    }

    /// DELETE one task. A missing identifier comes back non-2xx and is
    /// surfaced as an error, not swallowed.
    pub async fn delete_task(&self, id: u64) -> Result<(), ApiError> {
        let resp = self.http.delete(self.task_url(id)).send().await?;
        check_status(resp.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_trailing_slash_in_base_url() {
        let client = ApiClient::new("https://example.org/api/v1/tasks/");
        assert_eq!(client.collection_url(), "https://example.org/api/v1/tasks/");
        assert_eq!(client.create_url(), "https://example.org/api/v1/tasks/create/");
        assert_eq!(client.task_url(42), "https://example.org/api/v1/tasks/42/");
    }

    #[test]
    fn endpoint_urls_without_trailing_slash_input() {
        let client = ApiClient::new("https://example.org/api/v1/tasks");
        assert_eq!(client.collection_url(), "https://example.org/api/v1/tasks/");
        assert_eq!(client.task_url(7), "https://example.org/api/v1/tasks/7/");
    }

    #[test]
    fn create_payload_is_full_record_with_completed_false() {
        let payload = TaskPayload { title: "Buy milk", completed: false };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Buy milk", "completed": false}));
    }

    #[test]
    fn missing_identifier_status_surfaces_as_error() {
        let err = check_status(StatusCode::NOT_FOUND).unwrap_err();
        assert!(matches!(err, ApiError::Status(StatusCode::NOT_FOUND)));
    }

    #[test]
    fn success_statuses_pass_the_check() {
        assert!(check_status(StatusCode::OK).is_ok());
        assert!(check_status(StatusCode::NO_CONTENT).is_ok());
        assert!(check_status(StatusCode::INTERNAL_SERVER_ERROR).is_err());
    }

    #[test]
    fn parses_task_list_response() {
        let body = r#"[
            {"id": 1, "title": "Buy milk", "completed": false, "created_at": "2026-08-01"},
            {"id": 2, "title": "Water plants", "completed": true}
        ]"#;
        let tasks: Vec<Task> = serde_json::from_str(body).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "Buy milk");
        assert!(tasks[1].completed);
    }
}
