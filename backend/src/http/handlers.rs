//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for validation and storage.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{StatusCode, Uri},
    response::Html,
    Json,
};

use super::docs;
use super::dto::{
    CreateFeedbackRequest, Feedback, HealthResponse, RootResponse, UpdateFeedbackRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::FeedbackId;
use crate::db::services as db_services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// General
// =============================================================================

/// GET /
///
/// Welcome message pointing at the interactive documentation.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to Feedback Management API".to_string(),
        docs: "/docs".to_string(),
        redoc: "/redoc".to_string(),
    })
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let healthy = db_services::health_check(state.repository.as_ref()).await?;
    let feedbacks = db_services::count_feedbacks(state.repository.as_ref()).await?;

    Ok(Json(HealthResponse {
        status: (if healthy { "ok" } else { "degraded" }).to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        feedbacks,
    }))
}

/// GET /openapi.json
pub async fn openapi() -> Json<serde_json::Value> {
    Json(docs::openapi_document())
}

/// GET /docs
pub async fn swagger_ui() -> Html<&'static str> {
    Html(docs::SWAGGER_UI_HTML)
}

/// GET /redoc
pub async fn redoc() -> Html<&'static str> {
    Html(docs::REDOC_HTML)
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}

// =============================================================================
// Feedback CRUD
// =============================================================================

/// POST /feedbacks
///
/// Create a new feedback entry. Responds 201 with the stored record.
pub async fn create_feedback(
    State(state): State<AppState>,
    payload: Result<Json<CreateFeedbackRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Feedback>), AppError> {
    let Json(request) = payload?;
    let new_feedback = request.into_new_feedback()?;

    let created = db_services::create_feedback(state.repository.as_ref(), new_feedback).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /feedbacks
///
/// List all feedback entries.
pub async fn list_feedbacks(State(state): State<AppState>) -> HandlerResult<Vec<Feedback>> {
    let feedbacks = db_services::list_feedbacks(state.repository.as_ref()).await?;
    Ok(Json(feedbacks))
}

/// GET /feedbacks/{feedback_uuid}
pub async fn get_feedback(
    State(state): State<AppState>,
    path: Result<Path<FeedbackId>, PathRejection>,
) -> HandlerResult<Feedback> {
    let Path(id) = path?;
    let feedback = db_services::get_feedback(state.repository.as_ref(), id).await?;
    Ok(Json(feedback))
}

/// PUT /feedbacks/{feedback_uuid}
///
/// Update content, email, or both. At least one field must be provided.
pub async fn update_feedback(
    State(state): State<AppState>,
    path: Result<Path<FeedbackId>, PathRejection>,
    payload: Result<Json<UpdateFeedbackRequest>, JsonRejection>,
) -> HandlerResult<Feedback> {
    let Path(id) = path?;
    let Json(request) = payload?;
    let patch = request.into_patch()?;

    let updated = db_services::update_feedback(state.repository.as_ref(), id, patch).await?;
    Ok(Json(updated))
}

/// DELETE /feedbacks/{feedback_uuid}
///
/// Responds 204 with an empty body.
pub async fn delete_feedback(
    State(state): State<AppState>,
    path: Result<Path<FeedbackId>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    db_services::delete_feedback(state.repository.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
