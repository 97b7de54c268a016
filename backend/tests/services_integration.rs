use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use feedback_api::api::{FeedbackId, FeedbackPatch, NewFeedback};
use feedback_api::db::repositories::LocalRepository;
use feedback_api::db::repository::{FeedbackRepository, RepositoryError};
use feedback_api::db::services::{
    count_feedbacks, create_feedback, delete_feedback, get_feedback, health_check,
    list_feedbacks, update_feedback,
};
use feedback_api::db::{create_repository, SEED_FEEDBACKS};

fn sample() -> NewFeedback {
    NewFeedback::new("Great service!", "customer@example.com")
}

#[tokio::test]
async fn test_health_check() {
    let repo = LocalRepository::new();
    assert!(health_check(&repo).await.unwrap());
}

#[tokio::test]
async fn test_create_then_get_returns_equal_record() {
    let repo = LocalRepository::new();
    let created = create_feedback(&repo, sample()).await.unwrap();

    assert_eq!(created.content, "Great service!");
    assert_eq!(created.email, "customer@example.com");
    assert_eq!(get_feedback(&repo, created.id).await.unwrap(), created);
}

#[tokio::test]
async fn test_list_returns_every_record() {
    let repo = LocalRepository::new();
    let mut ids = HashSet::new();
    for i in 0..5 {
        let created = create_feedback(&repo, NewFeedback::new(format!("note {}", i), "a@b.com"))
            .await
            .unwrap();
        ids.insert(created.id);
    }

    let listed: HashSet<_> = list_feedbacks(&repo)
        .await
        .unwrap()
        .into_iter()
        .map(|f| f.id)
        .collect();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let repo = LocalRepository::new();
    let created = create_feedback(&repo, sample()).await.unwrap();

    delete_feedback(&repo, created.id).await.unwrap();

    let err = get_feedback(&repo, created.id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
    assert_eq!(count_feedbacks(&repo).await.unwrap(), 0);
}

#[tokio::test]
async fn test_second_delete_is_not_found() {
    let repo = LocalRepository::new();
    let created = create_feedback(&repo, sample()).await.unwrap();

    assert!(delete_feedback(&repo, created.id).await.is_ok());
    assert!(matches!(
        delete_feedback(&repo, created.id).await,
        Err(RepositoryError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_update_content_only_changes_content() {
    let repo = LocalRepository::new();
    let created = create_feedback(&repo, sample()).await.unwrap();

    let updated = update_feedback(&repo, created.id, FeedbackPatch::content("Changed"))
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.content, "Changed");
    assert_eq!(updated.email, created.email);
    assert_eq!(get_feedback(&repo, created.id).await.unwrap(), updated);
}

#[tokio::test]
async fn test_update_both_fields() {
    let repo = LocalRepository::new();
    let created = create_feedback(&repo, sample()).await.unwrap();

    let patch = FeedbackPatch {
        content: Some("Both".to_string()),
        email: Some("other@example.net".to_string()),
    };
    let updated = update_feedback(&repo, created.id, patch).await.unwrap();

    assert_eq!(updated.content, "Both");
    assert_eq!(updated.email, "other@example.net");
}

#[tokio::test]
async fn test_empty_update_leaves_store_unchanged() {
    let repo = LocalRepository::new();
    let created = create_feedback(&repo, sample()).await.unwrap();

    let err = update_feedback(&repo, created.id, FeedbackPatch::default())
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::EmptyUpdate { .. }));
    assert_eq!(err.message(), "At least one field must be provided for update");
    assert_eq!(get_feedback(&repo, created.id).await.unwrap(), created);
}

#[tokio::test]
async fn test_update_with_invalid_content_leaves_store_unchanged() {
    let repo = LocalRepository::new();
    let created = create_feedback(&repo, sample()).await.unwrap();

    let err = update_feedback(&repo, created.id, FeedbackPatch::content(""))
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::ValidationError { .. }));
    assert_eq!(get_feedback(&repo, created.id).await.unwrap(), created);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let repo = LocalRepository::new();
    let err = update_feedback(&repo, FeedbackId::generate(), FeedbackPatch::content("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[tokio::test]
async fn test_create_rejects_bad_content_length() {
    let repo = LocalRepository::new();

    for content in [String::new(), "x".repeat(1001)] {
        let err = create_feedback(&repo, NewFeedback::new(content, "a@b.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::ValidationError { .. }));
        assert_eq!(err.context().field.as_deref(), Some("feedback_content"));
    }
    assert_eq!(count_feedbacks(&repo).await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_rejects_invalid_email() {
    let repo = LocalRepository::new();

    for email in ["not-an-email", "a@b", "@b.com", "a b@c.com"] {
        let err = create_feedback(&repo, NewFeedback::new("Fine", email))
            .await
            .unwrap_err();
        assert_eq!(err.context().field.as_deref(), Some("email_address"), "{}", email);
    }
    assert_eq!(count_feedbacks(&repo).await.unwrap(), 0);
}

#[tokio::test]
async fn test_seeded_repository_has_ten_records() {
    let repo = create_repository(true).await.unwrap();
    let all = list_feedbacks(repo.as_ref()).await.unwrap();

    assert_eq!(all.len(), 10);
    for (content, email) in SEED_FEEDBACKS {
        assert!(all.iter().any(|f| f.content == content && f.email == email));
    }
}

#[tokio::test]
async fn test_unseeded_repository_is_empty() {
    let repo = create_repository(false).await.unwrap();
    assert_eq!(count_feedbacks(repo.as_ref()).await.unwrap(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_are_all_stored() {
    let repo: Arc<dyn FeedbackRepository> = Arc::new(LocalRepository::new());

    let tasks: Vec<_> = (0..50)
        .map(|i| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                create_feedback(
                    repo.as_ref(),
                    NewFeedback::new(format!("concurrent {}", i), "load@example.com"),
                )
                .await
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap().unwrap();
    }
    assert_eq!(count_feedbacks(repo.as_ref()).await.unwrap(), 50);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_create_then_get_roundtrips(
        content in "[a-zA-Z0-9 .,!?]{1,200}",
        local in "[a-z][a-z0-9._]{0,15}[a-z0-9]",
        domain in "[a-z]{1,12}\\.(com|org|net|io)",
    ) {
        prop_assume!(!local.contains(".."));
        let rt = tokio::runtime::Runtime::new().unwrap();
        let email = format!("{}@{}", local, domain);

        rt.block_on(async {
            let repo = LocalRepository::new();
            let created = create_feedback(&repo, NewFeedback::new(content.clone(), email.clone()))
                .await
                .unwrap();
            let fetched = get_feedback(&repo, created.id).await.unwrap();

            assert_eq!(fetched.content, content);
            assert_eq!(fetched.email, email);
            assert_eq!(fetched, created);
        });
    }
}
