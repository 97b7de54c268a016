//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing,
//! body limit), and creates the axum router ready for serving.

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let body_limit = state.body_limit_bytes;

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        // Documentation
        .route("/openapi.json", get(handlers::openapi))
        .route("/docs", get(handlers::swagger_ui))
        .route("/redoc", get(handlers::redoc))
        // Feedback CRUD
        .route(
            "/feedbacks",
            get(handlers::list_feedbacks).post(handlers::create_feedback),
        )
        .route(
            "/feedbacks/{feedback_uuid}",
            get(handlers::get_feedback)
                .put(handlers::update_feedback)
                .delete(handlers::delete_feedback),
        )
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let repo = Arc::new(LocalRepository::new()) as Arc<dyn crate::db::repository::FeedbackRepository>;
        let state = AppState::new(repo).with_body_limit(1024);
        let _router = create_router(state);
    }
}
