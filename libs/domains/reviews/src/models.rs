use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Pharmacy review entity - represents a review stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Review {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Pharmacy the review belongs to, immutable after creation
    pub pharmacy_id: Uuid,
    /// Author of the review, immutable after creation
    pub user_id: Uuid,
    /// Star rating from 1 to 5
    pub rating: i32,
    /// Optional free-form comment
    pub comment: Option<String>,
    /// Whether the review has been flagged for moderation
    #[serde(default)]
    pub is_reported: bool,
    /// Reason supplied by the reporter, present exactly when is_reported is true
    pub report_reason: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new review
///
/// The author is not part of the payload. It is stamped by the service from
/// the authenticated caller.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateReview {
    /// Pharmacy receiving the review
    pub pharmacy_id: Uuid,
    /// Star rating from 1 to 5
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    /// Optional free-form comment
    #[validate(length(max = 2000))]
    pub comment: Option<String>,
}

/// DTO for updating an existing review
///
/// Only the rating and comment can change. Pharmacy, author, and the
/// moderation fields are never touched by an update.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateReview {
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
    #[validate(length(max = 2000))]
    pub comment: Option<String>,
}

/// DTO for reporting a review
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ReportReview {
    /// Why the review was flagged
    #[validate(length(min = 1, max = 500))]
    pub reason: String,
}

/// Query filters for listing reviews
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct ReviewFilter {
    /// Filter by moderation flag
    pub is_reported: Option<bool>,
    /// Maximum number of results
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Number of results to skip
    #[serde(default)]
    pub offset: u64,
}

fn default_limit() -> i64 {
    50
}

impl Default for ReviewFilter {
    fn default() -> Self {
        Self {
            is_reported: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

impl Review {
    /// Create a new review authored by `user_id` from a CreateReview DTO
    pub fn new(user_id: Uuid, input: CreateReview) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            pharmacy_id: input.pharmacy_id,
            user_id,
            rating: input.rating,
            comment: input.comment,
            is_reported: false,
            report_reason: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from UpdateReview DTO
    pub fn apply_update(&mut self, update: UpdateReview) {
        if let Some(rating) = update.rating {
            self.rating = rating;
        }
        if let Some(comment) = update.comment {
            self.comment = Some(comment);
        }
        self.updated_at = Utc::now();
    }

    /// Flag the review for moderation
    ///
    /// Reporting an already-reported review overwrites the stored reason.
    pub fn mark_reported(&mut self, reason: String) {
        self.is_reported = true;
        self.report_reason = Some(reason);
        self.updated_at = Utc::now();
    }
}
