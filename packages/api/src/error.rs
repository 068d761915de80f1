//! # HTTP error model
//!
//! Every handler returns `Result<_, ApiError>`. The variants are the status classes
//! the API can answer with; the body is always
//! `{ "error": <message>, "details"?: <cause>, "fields"?: [{ "field", "message" }] }`.
//!
//! | Source | Status |
//! |--------|--------|
//! | `get` by id returning nothing, or `StoreError::NotFound` during a read | 404 |
//! | `StoreError::NotFound` during an update or delete | 400 with the cause as `details` |
//! | Malformed id or body, [`ValidationErrors`], `StoreError::UnknownArea` | 400 |
//! | `StoreError::Backend` during a write | 400 with the cause as `details` |
//! | `StoreError::AreaInUse` | 409 |
//! | `StoreError::Backend` during a read | 500, cause logged but not returned |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use store::{Entity, FieldError, StoreError, ValidationErrors};
use thiserror::Error;

/// What a handler was doing when the store failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Fetch,
    Create,
    Update,
    Delete,
}

impl Action {
    fn is_read(&self) -> bool {
        matches!(self, Action::List | Action::Fetch)
    }

    fn failure(&self, entity: Entity) -> String {
        match self {
            Action::List => format!("Failed to list {entity}s"),
            Action::Fetch => format!("Failed to fetch {entity}"),
            Action::Create => format!("Failed to create {entity}"),
            Action::Update => format!("Failed to update {entity}"),
            Action::Delete => format!("Failed to delete {entity}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    BadRequest {
        message: String,
        details: Option<String>,
        fields: Vec<FieldError>,
    },

    #[error("{message}")]
    Conflict { message: String, details: String },

    #[error("{message}")]
    Internal { message: String },
}

impl ApiError {
    pub fn not_found(entity: Entity) -> Self {
        ApiError::NotFound {
            message: format!("{} not found", entity.label()),
        }
    }

    pub fn bad_request(message: impl Into<String>, details: Option<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            details,
            fields: Vec::new(),
        }
    }

    /// Payload rejected by boundary validation.
    pub fn invalid(entity: Entity, action: Action, errors: ValidationErrors) -> Self {
        ApiError::BadRequest {
            message: action.failure(entity),
            details: Some(errors.to_string()),
            fields: errors.0,
        }
    }

    /// Map a store failure for `entity` during `action`.
    pub fn store(entity: Entity, action: Action, err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity: missing, .. } if action.is_read() => {
                Self::not_found(missing)
            }
            StoreError::AreaInUse { .. } => ApiError::Conflict {
                message: "Area is still in use".to_string(),
                details: err.to_string(),
            },
            StoreError::Backend(_) if action.is_read() => {
                tracing::error!(%entity, ?action, error = %err, "Store read failed");
                ApiError::Internal {
                    message: action.failure(entity),
                }
            }
            StoreError::NotFound { .. } | StoreError::UnknownArea(_) | StoreError::Backend(_) => {
                tracing::warn!(%entity, ?action, error = %err, "Store write rejected");
                Self::bad_request(action.failure(entity), Some(err.to_string()))
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<FieldError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::NotFound { message } | ApiError::Internal { message } => ErrorBody {
                error: message,
                details: None,
                fields: Vec::new(),
            },
            ApiError::BadRequest {
                message,
                details,
                fields,
            } => ErrorBody {
                error: message,
                details,
                fields,
            },
            ApiError::Conflict { message, details } => ErrorBody {
                error: message,
                details: Some(details),
                fields: Vec::new(),
            },
        };
        (status, Json(body)).into_response()
    }
}
