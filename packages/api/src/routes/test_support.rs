//! In-process harness: drives the router with `oneshot` against a [`MemoryStore`]
//! or any other [`DirectoryStore`].

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use store::{
    Area, DirectoryStore, Employee, MemoryStore, NewArea, NewEmployee, StoreError, StoreResult,
};
use tower::ServiceExt;

use crate::server::{router, AppState};

pub(crate) struct TestApp {
    router: Router,
    pub store: Arc<dyn DirectoryStore>,
}

pub(crate) struct TestResponse {
    pub status: StatusCode,
    pub text: String,
    pub json: Value,
    pub content_type: Option<String>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }

    pub fn with_store(store: impl DirectoryStore + 'static) -> Self {
        let state = AppState::new(store);
        let store = state.store.clone();
        Self {
            router: router(state, &[]),
            store,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body.to_string())).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::PUT, uri, Some(body.to_string())).await
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<String>) -> TestResponse {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json)
            }
            None => Body::empty(),
        };
        let response = self
            .router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        let json = serde_json::from_str(&text).unwrap_or(Value::Null);

        TestResponse {
            status,
            text,
            json,
            content_type,
        }
    }

    /// Create an area through the API and return its id.
    pub async fn create_area(&self, name: &str) -> i64 {
        let response = self
            .post("/areas", serde_json::json!({ "name": name }))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);
        response.json["id"].as_i64().unwrap()
    }
}

/// Store whose every call fails as if the database were unreachable.
pub(crate) struct BrokenStore;

fn unreachable_backend<T>() -> StoreResult<T> {
    Err(StoreError::Backend("connection refused".to_string()))
}

#[async_trait]
impl DirectoryStore for BrokenStore {
    async fn list_areas(&self) -> StoreResult<Vec<Area>> {
        unreachable_backend()
    }

    async fn get_area(&self, _id: i32) -> StoreResult<Option<Area>> {
        unreachable_backend()
    }

    async fn create_area(&self, _area: &NewArea) -> StoreResult<Area> {
        unreachable_backend()
    }

    async fn update_area(&self, _id: i32, _area: &NewArea) -> StoreResult<Area> {
        unreachable_backend()
    }

    async fn delete_area(&self, _id: i32) -> StoreResult<()> {
        unreachable_backend()
    }

    async fn list_employees(&self) -> StoreResult<Vec<Employee>> {
        unreachable_backend()
    }

    async fn get_employee(&self, _id: i32) -> StoreResult<Option<Employee>> {
        unreachable_backend()
    }

    async fn create_employee(&self, _employee: &NewEmployee) -> StoreResult<Employee> {
        unreachable_backend()
    }

    async fn update_employee(&self, _id: i32, _employee: &NewEmployee) -> StoreResult<Employee> {
        unreachable_backend()
    }

    async fn delete_employee(&self, _id: i32) -> StoreResult<()> {
        unreachable_backend()
    }
}
