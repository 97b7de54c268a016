//! In-memory local repository implementation.
//!
//! All records live in a `HashMap` behind a single `RwLock`. Nothing survives
//! a process restart.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::{Feedback, FeedbackId, FeedbackPatch, NewFeedback};
use crate::db::repository::{FeedbackRepository, RepositoryError, RepositoryResult};

/// In-memory local repository.
///
/// Cloning is cheap and every clone shares the same map.
///
/// # Example
/// ```
/// use feedback_api::db::repositories::LocalRepository;
///
/// let repo = LocalRepository::new();
/// let shared = repo.clone();
/// assert!(shared.is_empty());
/// ```
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<HashMap<FeedbackId, Feedback>>>,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        self.data.write().clear();
    }
}

#[async_trait]
impl FeedbackRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    async fn create_feedback(&self, feedback: NewFeedback) -> RepositoryResult<Feedback> {
        let mut data = self.data.write();
        // v4 collisions are not expected, but never overwrite an existing record
        let mut id = FeedbackId::generate();
        while data.contains_key(&id) {
            id = FeedbackId::generate();
        }

        let record = Feedback::new(id, feedback);
        data.insert(id, record.clone());
        Ok(record)
    }

    async fn list_feedbacks(&self) -> RepositoryResult<Vec<Feedback>> {
        Ok(self.data.read().values().cloned().collect())
    }

    async fn get_feedback(&self, id: FeedbackId) -> RepositoryResult<Feedback> {
        self.data
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::feedback_not_found(id))
    }

    async fn update_feedback(
        &self,
        id: FeedbackId,
        patch: FeedbackPatch,
    ) -> RepositoryResult<Feedback> {
        let mut data = self.data.write();
        let stored = data
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::feedback_not_found(id))?;

        *stored = stored.merged(patch);
        Ok(stored.clone())
    }

    async fn delete_feedback(&self, id: FeedbackId) -> RepositoryResult<()> {
        self.data
            .write()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::feedback_not_found(id))
    }

    async fn count_feedbacks(&self) -> RepositoryResult<usize> {
        Ok(self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewFeedback {
        NewFeedback::new("Great service", "john.doe@example.com")
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = LocalRepository::new();
        let created = repo.create_feedback(sample()).await.unwrap();

        let fetched = repo.get_feedback(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let repo = LocalRepository::new();
        for _ in 0..100 {
            repo.create_feedback(sample()).await.unwrap();
        }
        assert_eq!(repo.len(), 100);
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let repo = LocalRepository::new();
        let created = repo.create_feedback(sample()).await.unwrap();

        let updated = repo
            .update_feedback(created.id, FeedbackPatch::email("new@example.com"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.content, created.content);
        assert_eq!(updated.email, "new@example.com");
        assert_eq!(repo.get_feedback(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let repo = LocalRepository::new();
        let id = FeedbackId::generate();

        assert!(matches!(
            repo.get_feedback(id).await,
            Err(RepositoryError::NotFound { .. })
        ));
        assert!(matches!(
            repo.update_feedback(id, FeedbackPatch::content("x")).await,
            Err(RepositoryError::NotFound { .. })
        ));
        assert!(matches!(
            repo.delete_feedback(id).await,
            Err(RepositoryError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let repo = LocalRepository::new();
        let created = repo.create_feedback(sample()).await.unwrap();

        repo.delete_feedback(created.id).await.unwrap();
        assert!(repo.is_empty());
        assert!(repo.delete_feedback(created.id).await.is_err());
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = LocalRepository::new();
        let other = repo.clone();
        repo.create_feedback(sample()).await.unwrap();

        assert_eq!(other.count_feedbacks().await.unwrap(), 1);
        other.clear();
        assert!(repo.is_empty());
    }
}
