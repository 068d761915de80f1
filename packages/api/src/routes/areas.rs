//! `/areas` handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use store::{Area, AreaPayload, Entity};

use crate::error::{Action, ApiError};
use crate::extract::{JsonBody, RecordId};
use crate::server::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/areas", get(list_areas).post(create_area))
        .route(
            "/areas/{id}",
            get(get_area).put(update_area).delete(delete_area),
        )
}

async fn list_areas(State(state): State<AppState>) -> Result<Json<Vec<Area>>, ApiError> {
    let areas = state
        .store
        .list_areas()
        .await
        .map_err(|e| ApiError::store(Entity::Area, Action::List, e))?;
    Ok(Json(areas))
}

async fn get_area(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<Area>, ApiError> {
    state
        .store
        .get_area(id)
        .await
        .map_err(|e| ApiError::store(Entity::Area, Action::Fetch, e))?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(Entity::Area))
}

async fn create_area(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AreaPayload>,
) -> Result<(StatusCode, Json<Area>), ApiError> {
    let area = payload
        .validate()
        .map_err(|e| ApiError::invalid(Entity::Area, Action::Create, e))?;
    let created = state
        .store
        .create_area(&area)
        .await
        .map_err(|e| ApiError::store(Entity::Area, Action::Create, e))?;
    tracing::info!(id = created.id, "Area created");
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_area(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(payload): JsonBody<AreaPayload>,
) -> Result<Json<Area>, ApiError> {
    let area = payload
        .validate()
        .map_err(|e| ApiError::invalid(Entity::Area, Action::Update, e))?;
    let updated = state
        .store
        .update_area(id, &area)
        .await
        .map_err(|e| ApiError::store(Entity::Area, Action::Update, e))?;
    Ok(Json(updated))
}

async fn delete_area(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .delete_area(id)
        .await
        .map_err(|e| ApiError::store(Entity::Area, Action::Delete, e))?;
    tracing::info!(id, "Area deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{BrokenStore, TestApp};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_area() {
        let app = TestApp::new();
        let response = app.post("/areas", json!({ "name": "Engineering" })).await;
        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.json, json!({ "id": 1, "name": "Engineering" }));
    }

    #[tokio::test]
    async fn test_create_area_without_name_is_rejected_and_not_persisted() {
        let app = TestApp::new();
        app.create_area("TI").await;

        for body in [json!({}), json!({ "name": "" }), json!({ "name": "   " })] {
            let response = app.post("/areas", body).await;
            assert_eq!(response.status, StatusCode::BAD_REQUEST);
            assert_eq!(response.json["error"], "Failed to create area");
            assert_eq!(response.json["fields"][0]["field"], "name");
        }

        let list = app.get("/areas").await;
        assert_eq!(list.json.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_area() {
        let app = TestApp::new();
        let id = app.create_area("TI").await;

        let found = app.get(&format!("/areas/{id}")).await;
        assert_eq!(found.status, StatusCode::OK);
        assert_eq!(found.json["name"], "TI");

        let missing = app.get("/areas/99").await;
        assert_eq!(missing.status, StatusCode::NOT_FOUND);
        assert_eq!(missing.json, json!({ "error": "Area not found" }));
    }

    #[tokio::test]
    async fn test_malformed_id_is_bad_request() {
        let app = TestApp::new();
        let response = app.get("/areas/abc").await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.json["error"], "Invalid id");
    }

    #[tokio::test]
    async fn test_update_area() {
        let app = TestApp::new();
        let id = app.create_area("TI").await;

        let updated = app
            .put(&format!("/areas/{id}"), json!({ "name": "Sistemas" }))
            .await;
        assert_eq!(updated.status, StatusCode::OK);
        assert_eq!(updated.json, json!({ "id": id, "name": "Sistemas" }));

        let invalid = app.put(&format!("/areas/{id}"), json!({})).await;
        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);

        let missing = app.put("/areas/99", json!({ "name": "X" })).await;
        assert_eq!(missing.status, StatusCode::BAD_REQUEST);
        assert_eq!(missing.json["error"], "Failed to update area");
        assert_eq!(missing.json["details"], "area 99 not found");
    }

    #[tokio::test]
    async fn test_delete_area() {
        let app = TestApp::new();
        let id = app.create_area("TI").await;

        let deleted = app.delete(&format!("/areas/{id}")).await;
        assert_eq!(deleted.status, StatusCode::NO_CONTENT);
        assert!(deleted.text.is_empty());

        let again = app.delete(&format!("/areas/{id}")).await;
        assert_eq!(again.status, StatusCode::BAD_REQUEST);
        assert_eq!(again.json["error"], "Failed to delete area");

        let missing = app.delete("/areas/99").await;
        assert_eq!(missing.status, StatusCode::BAD_REQUEST);
        assert_eq!(missing.json["details"], "area 99 not found");
    }

    #[tokio::test]
    async fn test_delete_area_in_use_is_conflict() {
        let app = TestApp::new();
        let id = app.create_area("TI").await;
        let employee = app
            .post(
                "/employees",
                json!({
                    "fullName": "A B",
                    "dni": "1",
                    "birthDate": "2000-01-01",
                    "isDeveloper": true,
                    "areaId": id,
                }),
            )
            .await;
        assert_eq!(employee.status, StatusCode::CREATED);

        let response = app.delete(&format!("/areas/{id}")).await;
        assert_eq!(response.status, StatusCode::CONFLICT);
        assert_eq!(response.json["error"], "Area is still in use");
        assert_eq!(app.get(&format!("/areas/{id}")).await.status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_backend_failure_hides_cause() {
        let app = TestApp::with_store(BrokenStore);
        let response = app.get("/areas").await;
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.json, json!({ "error": "Failed to list areas" }));
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let app = TestApp::new();
        let response = app
            .send(axum::http::Method::POST, "/areas", Some("{not json".to_string()))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.json["error"], "Malformed request body");
        assert!(app.get("/areas").await.json.as_array().unwrap().is_empty());
    }
}
