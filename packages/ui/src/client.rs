//! # HTTP client for the directory API
//!
//! [`ApiClient`] wraps `reqwest` (fetch-backed on `wasm32`) with one typed method per
//! endpoint the UI uses. Non-2xx answers become [`ClientError::Status`] carrying the
//! `error` message from the API's JSON error body.
//!
//! Components get the client from context with [`use_api`]; the app root provides it.

use dioxus::prelude::*;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use store::{Area, AreaPayload, Employee, EmployeePayload};
use thiserror::Error;

/// Used when `DIRECTORY_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message} ({status})")]
    Status { status: StatusCode, message: String },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    details: Option<String>,
}

/// Message shown for a failed response: the API's `error` (plus `details`), or the status text.
fn error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            error,
            details: Some(details),
        }) => format!("{error}: {details}"),
        Ok(ErrorBody { error, .. }) => error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unexpected response")
            .to_string(),
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(option_env!("DIRECTORY_API_URL").unwrap_or(DEFAULT_API_URL))
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ClientError> {
        self.get_json("employees").await
    }

    pub async fn create_employee(&self, payload: &EmployeePayload) -> Result<Employee, ClientError> {
        let response = self.http.post(self.url("employees")).json(payload).send().await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn delete_employee(&self, id: i32) -> Result<(), ClientError> {
        self.delete(&format!("employees/{id}")).await
    }

    pub async fn list_areas(&self) -> Result<Vec<Area>, ClientError> {
        self.get_json("areas").await
    }

    pub async fn create_area(&self, payload: &AreaPayload) -> Result<Area, ClientError> {
        let response = self.http.post(self.url("areas")).json(payload).send().await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn delete_area(&self, id: i32) -> Result<(), ClientError> {
        self.delete(&format!("areas/{id}")).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.http.get(self.url(path)).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let response = self.http.delete(self.url(path)).send().await?;
        check(response).await?;
        Ok(())
    }
}

async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status {
        status,
        message: error_message(status, &body),
    })
}

/// The API client provided by the app root.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.url("/employees"), "http://localhost:3000/employees");
        assert_eq!(client.url("areas/2"), "http://localhost:3000/areas/2");
    }

    #[test]
    fn test_error_message_prefers_api_body() {
        let body = r#"{"error":"Failed to create employee","details":"area 9 does not exist"}"#;
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, body),
            "Failed to create employee: area 9 does not exist"
        );
        assert_eq!(
            error_message(StatusCode::NOT_FOUND, r#"{"error":"Employee not found"}"#),
            "Employee not found"
        );
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "<html>"),
            "Bad Gateway"
        );
    }
}
