//! Feedback storage.
//!
//! This module provides abstractions for storage operations via the Repository
//! pattern.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API)                           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Field validation         │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The module includes:
//! - `services`: validated CRUD operations (use these in your application!)
//! - `repository`: Trait definition and error types
//! - `repositories::local`: In-memory implementation
//! - `seed`: Example records for a freshly started store

pub mod repositories;
pub mod repository;
pub mod seed;
pub mod services;

pub use services::{
    count_feedbacks, create_feedback, delete_feedback, get_feedback, health_check,
    list_feedbacks, update_feedback,
};

pub use repositories::LocalRepository;
pub use repository::{ErrorContext, FeedbackRepository, RepositoryError, RepositoryResult};
pub use seed::{seed_feedbacks, SEED_FEEDBACKS};

use std::sync::Arc;

/// Build a shared in-memory repository, optionally pre-populated with the
/// example records.
pub async fn create_repository(seed: bool) -> RepositoryResult<Arc<dyn FeedbackRepository>> {
    let repo = LocalRepository::new();
    if seed {
        seed_feedbacks(&repo).await?;
    }
    Ok(Arc::new(repo))
}
