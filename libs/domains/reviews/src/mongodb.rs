//! MongoDB implementation of ReviewRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Bson, Document, doc, to_bson},
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::ReviewResult;
use crate::models::{Review, ReviewFilter, UpdateReview};
use crate::repository::ReviewRepository;

/// MongoDB implementation of the ReviewRepository
pub struct MongoReviewRepository {
    collection: Collection<Review>,
}

impl MongoReviewRepository {
    /// Create a new MongoReviewRepository
    ///
    /// # Arguments
    /// * `db` - MongoDB database instance
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("pharmacy");
    /// let repo = MongoReviewRepository::new(&db);
    /// ```
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Review>("reviews"),
        }
    }

    /// Create a new MongoReviewRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<Review>(collection_name),
        }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Review> {
        &self.collection
    }

    /// Create indexes for efficient querying
    pub async fn create_indexes(&self) -> ReviewResult<()> {
        let indexes = vec![
            // Index on pharmacy_id for per-pharmacy listings
            IndexModel::builder()
                .keys(doc! { "pharmacy_id": 1 })
                .build(),
            // Index on is_reported for moderation queries
            IndexModel::builder()
                .keys(doc! { "is_reported": 1 })
                .build(),
            // Index on created_at for newest-first sorting
            IndexModel::builder()
                .keys(doc! { "created_at": -1 })
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        Ok(())
    }

    /// Build a MongoDB filter document from ReviewFilter
    fn build_filter(filter: &ReviewFilter) -> Document {
        let mut doc = doc! {};

        if let Some(is_reported) = filter.is_reported {
            doc.insert("is_reported", is_reported);
        }

        doc
    }
}

#[async_trait]
impl ReviewRepository for MongoReviewRepository {
    #[instrument(skip(self, review), fields(review_id = %review.id))]
    async fn create(&self, review: Review) -> ReviewResult<Review> {
        self.collection.insert_one(&review).await?;

        tracing::info!(
            review_id = %review.id,
            pharmacy_id = %review.pharmacy_id,
            "Review created successfully"
        );
        Ok(review)
    }

    #[instrument(skip(self))]
    async fn find_all(&self, filter: ReviewFilter) -> ReviewResult<Vec<Review>> {
        use futures_util::TryStreamExt;

        let mongo_filter = Self::build_filter(&filter);

        let options = mongodb::options::FindOptions::builder()
            .limit(filter.limit)
            .skip(filter.offset)
            .sort(doc! { "created_at": -1 })
            .build();

        let cursor = self
            .collection
            .find(mongo_filter)
            .with_options(options)
            .await?;
        let reviews: Vec<Review> = cursor.try_collect().await?;

        Ok(reviews)
    }

    #[instrument(skip(self))]
    async fn find_by_pharmacy(&self, pharmacy_id: Uuid) -> ReviewResult<Vec<Review>> {
        use futures_util::TryStreamExt;

        let filter = doc! { "pharmacy_id": to_bson(&pharmacy_id).unwrap_or(Bson::Null) };

        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();

        let cursor = self.collection.find(filter).with_options(options).await?;
        let reviews: Vec<Review> = cursor.try_collect().await?;

        Ok(reviews)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateReview) -> ReviewResult<Option<Review>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };

        let mut updated = match self.collection.find_one(filter.clone()).await? {
            Some(review) => review,
            None => return Ok(None),
        };

        updated.apply_update(input);

        // Replace the whole document, immutable fields included
        self.collection.replace_one(filter, &updated).await?;

        tracing::info!(review_id = %id, "Review updated successfully");
        Ok(Some(updated))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ReviewResult<Option<Review>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let deleted = self.collection.find_one_and_delete(filter).await?;

        if deleted.is_some() {
            tracing::info!(review_id = %id, "Review deleted successfully");
        }

        Ok(deleted)
    }

    #[instrument(skip(self, reason))]
    async fn update_report_status(
        &self,
        id: Uuid,
        reason: String,
    ) -> ReviewResult<Option<Review>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };

        let mut updated = match self.collection.find_one(filter.clone()).await? {
            Some(review) => review,
            None => return Ok(None),
        };

        updated.mark_reported(reason);

        self.collection.replace_one(filter, &updated).await?;

        tracing::info!(review_id = %id, "Review flagged for moderation");
        Ok(Some(updated))
    }
}
