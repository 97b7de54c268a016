//! Feedback repository trait.
//!
//! Storage-level CRUD over feedback records. Implementations store whatever
//! they are given; field validation belongs to the service layer.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{Feedback, FeedbackId, FeedbackPatch, NewFeedback};

/// Repository trait for feedback storage.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so they can sit behind an `Arc` in
/// the HTTP application state. Each method must be atomic with respect to the
/// underlying map.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Check if the store is usable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Insert a new record under a freshly generated id.
    ///
    /// # Returns
    /// * `Ok(Feedback)` - The stored record including its id
    async fn create_feedback(&self, feedback: NewFeedback) -> RepositoryResult<Feedback>;

    /// List every stored record. Order is unspecified.
    async fn list_feedbacks(&self) -> RepositoryResult<Vec<Feedback>>;

    /// Retrieve a record by id.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If no record has that id
    async fn get_feedback(&self, id: FeedbackId) -> RepositoryResult<Feedback>;

    /// Replace the present patch fields of an existing record.
    ///
    /// # Returns
    /// * `Ok(Feedback)` - The full record after the update
    /// * `Err(RepositoryError::NotFound)` - If no record has that id
    async fn update_feedback(
        &self,
        id: FeedbackId,
        patch: FeedbackPatch,
    ) -> RepositoryResult<Feedback>;

    /// Remove a record permanently.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If no record has that id
    async fn delete_feedback(&self, id: FeedbackId) -> RepositoryResult<()>;

    /// Number of stored records.
    async fn count_feedbacks(&self) -> RepositoryResult<usize>;
}
