//! HTTP error handling and response types.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::repository::RepositoryError;
use crate::validation::FieldError;

/// API error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// HTTP status code, repeated in the body
    pub status: u16,
    /// Offending request field, for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            status: status.as_u16(),
            field: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// No route matches the request path
    RouteNotFound(String),
    /// Request body could not be parsed; status comes from the rejection
    InvalidBody { status: StatusCode, message: String },
    /// Path parameter could not be parsed
    InvalidPath(String),
    /// Service or repository error
    Repository(RepositoryError),
}

impl AppError {
    fn into_parts(self) -> (StatusCode, ApiError) {
        match self {
            AppError::RouteNotFound(path) => {
                let status = StatusCode::NOT_FOUND;
                (status, ApiError::new("NOT_FOUND", format!("No route for {}", path), status))
            }
            AppError::InvalidBody { status, message } => {
                (status, ApiError::new("INVALID_BODY", message, status))
            }
            AppError::InvalidPath(message) => {
                let status = StatusCode::BAD_REQUEST;
                (status, ApiError::new("INVALID_PATH", message, status))
            }
            AppError::Repository(e) => {
                let message = e.message().to_string();
                match e {
                    RepositoryError::NotFound { .. } => {
                        let status = StatusCode::NOT_FOUND;
                        (status, ApiError::new("NOT_FOUND", message, status))
                    }
                    RepositoryError::ValidationError { context, .. } => {
                        let status = StatusCode::BAD_REQUEST;
                        let mut error = ApiError::new("VALIDATION_ERROR", message, status);
                        if let Some(field) = context.field {
                            error = error.with_field(field);
                        }
                        (status, error)
                    }
                    RepositoryError::EmptyUpdate { .. } => {
                        let status = StatusCode::BAD_REQUEST;
                        (status, ApiError::new("EMPTY_UPDATE", message, status))
                    }
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = self.into_parts();
        (status, Json(error)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<FieldError> for AppError {
    fn from(err: FieldError) -> Self {
        AppError::Repository(err.into())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidPath(rejection.body_text())
    }
}
