//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::FeedbackRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Feedback store shared by every request
    pub repository: Arc<dyn FeedbackRepository>,
    /// Maximum accepted request body size
    pub body_limit_bytes: usize,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn FeedbackRepository>) -> Self {
        Self {
            repository,
            body_limit_bytes: crate::config::ServerConfig::default().body_limit_bytes,
        }
    }

    /// Override the request body size limit.
    pub fn with_body_limit(mut self, bytes: usize) -> Self {
        self.body_limit_bytes = bytes;
        self
    }
}
