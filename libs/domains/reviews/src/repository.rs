use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ReviewResult;
use crate::models::{Review, ReviewFilter, UpdateReview};

/// Repository trait for Review persistence
///
/// Mutating operations resolve to `Option<Review>` so every backend reports
/// a missing ID the same way and the service layer decides what that means.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Persist a new review
    async fn create(&self, review: Review) -> ReviewResult<Review>;

    /// List reviews matching the filter, newest first
    async fn find_all(&self, filter: ReviewFilter) -> ReviewResult<Vec<Review>>;

    /// List all reviews for a pharmacy, newest first
    async fn find_by_pharmacy(&self, pharmacy_id: Uuid) -> ReviewResult<Vec<Review>>;

    /// Apply rating/comment changes, returning None when the ID is unknown
    async fn update(&self, id: Uuid, input: UpdateReview) -> ReviewResult<Option<Review>>;

    /// Remove a review, returning the removed document or None when unknown
    async fn delete(&self, id: Uuid) -> ReviewResult<Option<Review>>;

    /// Flag a review as reported with the given reason, None when unknown
    async fn update_report_status(
        &self,
        id: Uuid,
        reason: String,
    ) -> ReviewResult<Option<Review>>;
}

/// In-memory implementation of ReviewRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryReviewRepository {
    reviews: Arc<RwLock<HashMap<Uuid, Review>>>,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self {
            reviews: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn create(&self, review: Review) -> ReviewResult<Review> {
        let mut reviews = self.reviews.write().await;
        reviews.insert(review.id, review.clone());

        tracing::info!(review_id = %review.id, "Created review");
        Ok(review)
    }

    async fn find_all(&self, filter: ReviewFilter) -> ReviewResult<Vec<Review>> {
        let reviews = self.reviews.read().await;

        let mut result: Vec<Review> = reviews
            .values()
            .filter(|r| {
                if let Some(is_reported) = filter.is_reported {
                    if r.is_reported != is_reported {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();

        // Sort by created_at descending (newest first)
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        // Apply pagination
        let result: Vec<Review> = result
            .into_iter()
            .skip(filter.offset as usize)
            .take(filter.limit.max(0) as usize)
            .collect();

        Ok(result)
    }

    async fn find_by_pharmacy(&self, pharmacy_id: Uuid) -> ReviewResult<Vec<Review>> {
        let reviews = self.reviews.read().await;

        let mut result: Vec<Review> = reviews
            .values()
            .filter(|r| r.pharmacy_id == pharmacy_id)
            .cloned()
            .collect();

        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(result)
    }

    async fn update(&self, id: Uuid, input: UpdateReview) -> ReviewResult<Option<Review>> {
        let mut reviews = self.reviews.write().await;

        match reviews.get_mut(&id) {
            Some(review) => {
                review.apply_update(input);
                let updated = review.clone();

                tracing::info!(review_id = %id, "Updated review");
                Ok(Some(updated))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> ReviewResult<Option<Review>> {
        let mut reviews = self.reviews.write().await;
        let removed = reviews.remove(&id);

        if removed.is_some() {
            tracing::info!(review_id = %id, "Deleted review");
        }

        Ok(removed)
    }

    async fn update_report_status(
        &self,
        id: Uuid,
        reason: String,
    ) -> ReviewResult<Option<Review>> {
        let mut reviews = self.reviews.write().await;

        match reviews.get_mut(&id) {
            Some(review) => {
                review.mark_reported(reason);
                let updated = review.clone();

                tracing::info!(review_id = %id, "Review flagged for moderation");
                Ok(Some(updated))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateReview;
    use chrono::{Duration, Utc};

    fn review_for(pharmacy_id: Uuid, user_id: Uuid, rating: i32) -> Review {
        Review::new(
            user_id,
            CreateReview {
                pharmacy_id,
                rating,
                comment: None,
            },
        )
    }

    #[tokio::test]
    async fn test_create_and_find_by_pharmacy() {
        let repo = InMemoryReviewRepository::new();
        let pharmacy_id = Uuid::now_v7();

        let created = repo
            .create(review_for(pharmacy_id, Uuid::now_v7(), 5))
            .await
            .unwrap();
        repo.create(review_for(Uuid::now_v7(), Uuid::now_v7(), 3))
            .await
            .unwrap();

        let found = repo.find_by_pharmacy(pharmacy_id).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, created.id);
        assert_eq!(found[0].rating, 5);
    }

    #[tokio::test]
    async fn test_find_all_filters_by_reported_flag() {
        let repo = InMemoryReviewRepository::new();

        let clean = repo
            .create(review_for(Uuid::now_v7(), Uuid::now_v7(), 4))
            .await
            .unwrap();
        let flagged = repo
            .create(review_for(Uuid::now_v7(), Uuid::now_v7(), 1))
            .await
            .unwrap();
        repo.update_report_status(flagged.id, "Spam".to_string())
            .await
            .unwrap();

        let reported = repo
            .find_all(ReviewFilter {
                is_reported: Some(true),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(reported.len(), 1);
        assert_eq!(reported[0].id, flagged.id);

        let not_reported = repo
            .find_all(ReviewFilter {
                is_reported: Some(false),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(not_reported.len(), 1);
        assert_eq!(not_reported[0].id, clean.id);

        let all = repo.find_all(ReviewFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_find_all_sorts_newest_first_and_paginates() {
        let repo = InMemoryReviewRepository::new();
        let base = Utc::now();

        let mut ids = Vec::new();
        for i in 0..3 {
            let mut review = review_for(Uuid::now_v7(), Uuid::now_v7(), 3);
            review.created_at = base + Duration::seconds(i);
            ids.push(review.id);
            repo.create(review).await.unwrap();
        }

        let newest_first = repo.find_all(ReviewFilter::default()).await.unwrap();
        assert_eq!(newest_first.len(), 3);
        assert_eq!(newest_first[0].id, ids[2]);
        assert_eq!(newest_first[2].id, ids[0]);

        let page = repo
            .find_all(ReviewFilter {
                is_reported: None,
                limit: 1,
                offset: 1,
            })
            .await
            .unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, ids[1]);
    }

    #[tokio::test]
    async fn test_update_changes_rating_and_keeps_comment() {
        let repo = InMemoryReviewRepository::new();
        let mut review = review_for(Uuid::now_v7(), Uuid::now_v7(), 2);
        review.comment = Some("Slow service".to_string());
        let created = repo.create(review).await.unwrap();

        let updated = repo
            .update(
                created.id,
                UpdateReview {
                    rating: Some(4),
                    comment: None,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.rating, 4);
        assert_eq!(updated.comment.as_deref(), Some("Slow service"));
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = InMemoryReviewRepository::new();

        let result = repo
            .update(Uuid::now_v7(), UpdateReview::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_returns_none() {
        let repo = InMemoryReviewRepository::new();

        let result = repo.delete(Uuid::now_v7()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_report_overwrites_previous_reason() {
        let repo = InMemoryReviewRepository::new();
        let created = repo
            .create(review_for(Uuid::now_v7(), Uuid::now_v7(), 1))
            .await
            .unwrap();

        let first = repo
            .update_report_status(created.id, "Spam".to_string())
            .await
            .unwrap()
            .unwrap();
        assert!(first.is_reported);
        assert_eq!(first.report_reason.as_deref(), Some("Spam"));

        let second = repo
            .update_report_status(created.id, "Offensive language".to_string())
            .await
            .unwrap()
            .unwrap();
        assert!(second.is_reported);
        assert_eq!(second.report_reason.as_deref(), Some("Offensive language"));
    }

    #[tokio::test]
    async fn test_reported_then_deleted_review_disappears() {
        let repo = InMemoryReviewRepository::new();
        let pharmacy_id = Uuid::now_v7();

        let mut review = review_for(pharmacy_id, Uuid::now_v7(), 5);
        review.comment = Some("Great".to_string());
        let created = repo.create(review).await.unwrap();

        repo.update_report_status(created.id, "Spam".to_string())
            .await
            .unwrap()
            .unwrap();
        let deleted = repo.delete(created.id).await.unwrap().unwrap();
        assert!(deleted.is_reported);

        let remaining = repo.find_by_pharmacy(pharmacy_id).await.unwrap();
        assert!(remaining.is_empty());
    }
}
