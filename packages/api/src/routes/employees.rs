//! `/employees` handlers. Every response carries the employee's area expanded.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use store::{Employee, EmployeePayload, Entity};

use crate::error::{Action, ApiError};
use crate::extract::{JsonBody, RecordId};
use crate::server::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

async fn list_employees(State(state): State<AppState>) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = state
        .store
        .list_employees()
        .await
        .map_err(|e| ApiError::store(Entity::Employee, Action::List, e))?;
    Ok(Json(employees))
}

async fn get_employee(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<Employee>, ApiError> {
    state
        .store
        .get_employee(id)
        .await
        .map_err(|e| ApiError::store(Entity::Employee, Action::Fetch, e))?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(Entity::Employee))
}

async fn create_employee(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<EmployeePayload>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let employee = payload
        .validate()
        .map_err(|e| ApiError::invalid(Entity::Employee, Action::Create, e))?;
    let created = state
        .store
        .create_employee(&employee)
        .await
        .map_err(|e| ApiError::store(Entity::Employee, Action::Create, e))?;
    tracing::info!(id = created.id, area_id = created.area_id, "Employee created");
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_employee(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(payload): JsonBody<EmployeePayload>,
) -> Result<Json<Employee>, ApiError> {
    let employee = payload
        .validate()
        .map_err(|e| ApiError::invalid(Entity::Employee, Action::Update, e))?;
    let updated = state
        .store
        .update_employee(id, &employee)
        .await
        .map_err(|e| ApiError::store(Entity::Employee, Action::Update, e))?;
    Ok(Json(updated))
}

async fn delete_employee(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .delete_employee(id)
        .await
        .map_err(|e| ApiError::store(Entity::Employee, Action::Delete, e))?;
    tracing::info!(id, "Employee deleted");
    Ok(StatusCode::NO_CONTENT)
}
