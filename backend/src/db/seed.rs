//! Example records loaded into a fresh store so the API can be explored
//! immediately after startup.

use tracing::info;

use super::repository::{FeedbackRepository, RepositoryResult};
use super::services;
use crate::api::NewFeedback;

/// Fixed (content, email) pairs used to populate a new store.
pub const SEED_FEEDBACKS: [(&str, &str); 10] = [
    (
        "Excellent service! Very satisfied with the product quality.",
        "john.doe@example.com",
    ),
    (
        "Fast delivery and great customer support. Highly recommend!",
        "sarah.smith@example.com",
    ),
    (
        "The product met my expectations. Good value for money.",
        "mike.johnson@example.com",
    ),
    (
        "Outstanding experience! Will definitely order again.",
        "emily.brown@example.com",
    ),
    (
        "Good quality but shipping took longer than expected.",
        "david.wilson@example.com",
    ),
    (
        "Amazing customer service team. They resolved my issue quickly.",
        "lisa.garcia@example.com",
    ),
    (
        "Product works as described. Very happy with my purchase.",
        "robert.martinez@example.com",
    ),
    (
        "Great experience overall. The website is easy to navigate.",
        "jennifer.davis@example.com",
    ),
    (
        "Impressed with the quality and attention to detail.",
        "william.rodriguez@example.com",
    ),
    (
        "Fantastic product! Exceeded my expectations in every way.",
        "amanda.miller@example.com",
    ),
];

/// Insert the example records, each under a fresh id.
///
/// Goes through the service layer so the seed obeys the same field rules as
/// API input. Returns the number of records inserted.
pub async fn seed_feedbacks<R: FeedbackRepository + ?Sized>(repo: &R) -> RepositoryResult<usize> {
    for (content, email) in SEED_FEEDBACKS {
        services::create_feedback(repo, NewFeedback::new(content, email)).await?;
    }
    info!("Seeded {} example feedbacks", SEED_FEEDBACKS.len());
    Ok(SEED_FEEDBACKS.len())
}
