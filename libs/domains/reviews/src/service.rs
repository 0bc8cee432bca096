//! Review Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ReviewError, ReviewResult};
use crate::models::{CreateReview, ReportReview, Review, ReviewFilter, UpdateReview};
use crate::repository::ReviewRepository;

/// Review service providing business logic operations
///
/// The service layer validates input, stamps the review author, and
/// translates a missing ID from the repository into `ReviewError::NotFound`.
pub struct ReviewService<R: ReviewRepository> {
    repository: Arc<R>,
}

impl<R: ReviewRepository> ReviewService<R> {
    /// Create a new ReviewService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List reviews with optional filters
    #[instrument(skip(self))]
    pub async fn get_all_reviews(&self, filter: ReviewFilter) -> ReviewResult<Vec<Review>> {
        self.repository.find_all(filter).await
    }

    /// List all reviews for a single pharmacy
    #[instrument(skip(self))]
    pub async fn get_pharmacy_reviews(&self, pharmacy_id: Uuid) -> ReviewResult<Vec<Review>> {
        self.repository.find_by_pharmacy(pharmacy_id).await
    }

    /// Create a new review authored by `user_id`
    ///
    /// The author always comes from the authenticated caller, never from the
    /// request payload.
    #[instrument(skip(self, input), fields(pharmacy_id = %input.pharmacy_id))]
    pub async fn create_review(&self, user_id: Uuid, input: CreateReview) -> ReviewResult<Review> {
        input
            .validate()
            .map_err(|e| ReviewError::Validation(e.to_string()))?;

        self.repository.create(Review::new(user_id, input)).await
    }

    /// Update the rating and/or comment of an existing review
    #[instrument(skip(self, input))]
    pub async fn update_review(&self, id: Uuid, input: UpdateReview) -> ReviewResult<Review> {
        input
            .validate()
            .map_err(|e| ReviewError::Validation(e.to_string()))?;

        self.repository
            .update(id, input)
            .await?
            .ok_or(ReviewError::NotFound(id))
    }

    /// Delete a review
    #[instrument(skip(self))]
    pub async fn delete_review(&self, id: Uuid) -> ReviewResult<()> {
        self.repository
            .delete(id)
            .await?
            .ok_or(ReviewError::NotFound(id))?;
        Ok(())
    }

    /// Flag a review for moderation
    ///
    /// Reporting an already-reported review overwrites the stored reason.
    #[instrument(skip(self, input))]
    pub async fn report_review(&self, id: Uuid, input: ReportReview) -> ReviewResult<Review> {
        input
            .validate()
            .map_err(|e| ReviewError::Validation(e.to_string()))?;

        self.repository
            .update_report_status(id, input.reason)
            .await?
            .ok_or(ReviewError::NotFound(id))
    }
}

impl<R: ReviewRepository> Clone for ReviewService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockReviewRepository;

    #[tokio::test]
    async fn test_create_review_stamps_author() {
        let mut mock_repo = MockReviewRepository::new();
        let user_id = Uuid::now_v7();
        let pharmacy_id = Uuid::now_v7();

        mock_repo
            .expect_create()
            .withf(move |review| {
                review.user_id == user_id && review.pharmacy_id == pharmacy_id && !review.is_reported
            })
            .returning(|review| Ok(review));

        let service = ReviewService::new(mock_repo);
        let input = CreateReview {
            pharmacy_id,
            rating: 5,
            comment: Some("Great".to_string()),
        };

        let review = service.create_review(user_id, input).await.unwrap();

        assert_eq!(review.user_id, user_id);
        assert_eq!(review.rating, 5);
        assert!(review.report_reason.is_none());
    }

    #[tokio::test]
    async fn test_create_review_rejects_out_of_range_rating() {
        // No expectations: the repository must never be reached
        let mock_repo = MockReviewRepository::new();
        let service = ReviewService::new(mock_repo);

        let input = CreateReview {
            pharmacy_id: Uuid::now_v7(),
            rating: 6,
            comment: None,
        };

        let err = service
            .create_review(Uuid::now_v7(), input)
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_review_translates_missing_to_not_found() {
        let mut mock_repo = MockReviewRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_update()
            .with(mockall::predicate::eq(id), mockall::predicate::always())
            .returning(|_, _| Ok(None));

        let service = ReviewService::new(mock_repo);
        let err = service
            .update_review(
                id,
                UpdateReview {
                    rating: Some(3),
                    comment: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ReviewError::NotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn test_delete_review_translates_missing_to_not_found() {
        let mut mock_repo = MockReviewRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_delete()
            .with(mockall::predicate::eq(id))
            .returning(|_| Ok(None));

        let service = ReviewService::new(mock_repo);
        let err = service.delete_review(id).await.unwrap_err();

        assert!(matches!(err, ReviewError::NotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn test_delete_review_discards_the_deleted_document() {
        let mut mock_repo = MockReviewRepository::new();
        let user_id = Uuid::now_v7();
        let review = Review::new(
            user_id,
            CreateReview {
                pharmacy_id: Uuid::now_v7(),
                rating: 2,
                comment: None,
            },
        );
        let id = review.id;

        mock_repo
            .expect_delete()
            .with(mockall::predicate::eq(id))
            .returning(move |_| Ok(Some(review.clone())));

        let service = ReviewService::new(mock_repo);
        service.delete_review(id).await.unwrap();
    }

    #[tokio::test]
    async fn test_report_review_translates_missing_to_not_found() {
        let mut mock_repo = MockReviewRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_update_report_status()
            .with(
                mockall::predicate::eq(id),
                mockall::predicate::eq("Spam".to_string()),
            )
            .returning(|_, _| Ok(None));

        let service = ReviewService::new(mock_repo);
        let err = service
            .report_review(
                id,
                ReportReview {
                    reason: "Spam".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ReviewError::NotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn test_report_review_rejects_empty_reason() {
        let mock_repo = MockReviewRepository::new();
        let service = ReviewService::new(mock_repo);

        let err = service
            .report_review(
                Uuid::now_v7(),
                ReportReview {
                    reason: String::new(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ReviewError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_all_reviews_passes_filter_through() {
        let mut mock_repo = MockReviewRepository::new();

        mock_repo
            .expect_find_all()
            .withf(|filter| filter.is_reported == Some(true))
            .returning(|_| Ok(vec![]));

        let service = ReviewService::new(mock_repo);
        let reviews = service
            .get_all_reviews(ReviewFilter {
                is_reported: Some(true),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(reviews.is_empty());
    }
}
