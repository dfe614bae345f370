//! Error types for the gateway layer

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cinema_database::{CatalogError, ValidationErrors};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// Gateway error types
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(ValidationErrors),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// JSON body returned for every failed request
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    /// Per-field violations, only present on validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object, nullable)]
    pub fields: Option<ValidationErrors>,
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::Conflict(_) => StatusCode::CONFLICT,
            GatewayError::ValidationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            GatewayError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        let message = self.to_string();
        let fields = match self {
            GatewayError::ValidationFailed(errors) => Some(errors),
            _ => None,
        };

        let body = ErrorResponse {
            error: status.as_str().to_string(),
            message,
            fields,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

impl From<CatalogError> for GatewayError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::MovieNotFound(_) | CatalogError::ActorNotFound(_) => {
                GatewayError::NotFound(error.to_string())
            }
            CatalogError::NameAlreadyExists(_) => GatewayError::Conflict(error.to_string()),
            CatalogError::Validation(errors) => GatewayError::ValidationFailed(errors),
            CatalogError::DatabaseError(msg) => GatewayError::DatabaseError(msg),
        }
    }
}

impl From<JsonRejection> for GatewayError {
    fn from(rejection: JsonRejection) -> Self {
        GatewayError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for GatewayError {
    fn from(rejection: QueryRejection) -> Self {
        GatewayError::InvalidRequest(rejection.body_text())
    }
}
