//! High-level feedback service layer.
//!
//! These functions are the only path the HTTP layer uses to reach storage.
//! They validate input fields before handing them to a repository, so every
//! record that reaches the store satisfies the field constraints.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers (http/handlers.rs)                       │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - validation               │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  FeedbackRepository (LocalRepository, in-memory)        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use feedback_api::api::NewFeedback;
//! use feedback_api::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     let created = services::create_feedback(&repo, NewFeedback::new("Great!", "a@b.com")).await?;
//!     println!("Stored {}", created.id);
//!     Ok(())
//! }
//! ```

use tracing::{debug, info, warn};

use super::repository::{FeedbackRepository, RepositoryError, RepositoryResult};
use crate::api::{Feedback, FeedbackId, FeedbackPatch, NewFeedback};
use crate::validation::{validate_content, validate_email};

/// Check if the store is healthy.
pub async fn health_check<R: FeedbackRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Validate and store a new feedback record.
///
/// # Returns
/// * `Ok(Feedback)` - The stored record with its generated id
/// * `Err(RepositoryError::ValidationError)` - If a field is rejected; nothing is stored
pub async fn create_feedback<R: FeedbackRepository + ?Sized>(
    repo: &R,
    feedback: NewFeedback,
) -> RepositoryResult<Feedback> {
    let feedback = validate_new(feedback).map_err(|e| {
        warn!(error = %e, "rejected feedback creation");
        e.with_operation("create_feedback")
    })?;

    let created = repo.create_feedback(feedback).await?;
    info!(id = %created.id, "created feedback");
    Ok(created)
}

/// List all feedback records in unspecified order.
pub async fn list_feedbacks<R: FeedbackRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<Feedback>> {
    let feedbacks = repo.list_feedbacks().await?;
    debug!(count = feedbacks.len(), "listed feedbacks");
    Ok(feedbacks)
}

/// Fetch one feedback record.
pub async fn get_feedback<R: FeedbackRepository + ?Sized>(
    repo: &R,
    id: FeedbackId,
) -> RepositoryResult<Feedback> {
    debug!(%id, "fetching feedback");
    repo.get_feedback(id)
        .await
        .map_err(|e| e.with_operation("get_feedback"))
}

/// Apply a partial update to an existing record.
///
/// The id is checked first, so an empty patch against an unknown id reports
/// `NotFound`. Present fields are validated exactly as on creation.
///
/// # Returns
/// * `Ok(Feedback)` - The full record after the update
/// * `Err(RepositoryError::NotFound)` - If the id does not exist
/// * `Err(RepositoryError::EmptyUpdate)` - If the patch has no fields
/// * `Err(RepositoryError::ValidationError)` - If a present field is rejected
pub async fn update_feedback<R: FeedbackRepository + ?Sized>(
    repo: &R,
    id: FeedbackId,
    patch: FeedbackPatch,
) -> RepositoryResult<Feedback> {
    repo.get_feedback(id)
        .await
        .map_err(|e| e.with_operation("update_feedback"))?;

    if patch.is_empty() {
        warn!(%id, "rejected empty feedback update");
        return Err(RepositoryError::empty_update().with_operation("update_feedback"));
    }

    let patch = validate_patch(patch).map_err(|e| {
        warn!(%id, error = %e, "rejected feedback update");
        e.with_operation("update_feedback")
    })?;

    let updated = repo
        .update_feedback(id, patch)
        .await
        .map_err(|e| e.with_operation("update_feedback"))?;
    info!(%id, "updated feedback");
    Ok(updated)
}

/// Delete a feedback record.
pub async fn delete_feedback<R: FeedbackRepository + ?Sized>(
    repo: &R,
    id: FeedbackId,
) -> RepositoryResult<()> {
    repo.delete_feedback(id)
        .await
        .map_err(|e| e.with_operation("delete_feedback"))?;
    info!(%id, "deleted feedback");
    Ok(())
}

/// Number of stored records.
pub async fn count_feedbacks<R: FeedbackRepository + ?Sized>(repo: &R) -> RepositoryResult<usize> {
    repo.count_feedbacks().await
}

fn validate_new(feedback: NewFeedback) -> RepositoryResult<NewFeedback> {
    validate_content(&feedback.content)?;
    let email = validate_email(&feedback.email)?;
    Ok(NewFeedback {
        content: feedback.content,
        email,
    })
}

fn validate_patch(patch: FeedbackPatch) -> RepositoryResult<FeedbackPatch> {
    if let Some(ref content) = patch.content {
        validate_content(content)?;
    }
    let email = patch.email.as_deref().map(validate_email).transpose()?;
    Ok(FeedbackPatch {
        content: patch.content,
        email,
    })
}
