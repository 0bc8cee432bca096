//! Reviews API routes
//!
//! This module wires up the reviews domain to HTTP routes.

use axum::Router;
use domain_reviews::{MongoReviewRepository, ReviewService, handlers};
use tracing::info;

use crate::state::AppState;

/// Create the reviews router
pub fn router(state: &AppState) -> Router {
    // Create the MongoDB repository
    let repository = MongoReviewRepository::new(&state.db);

    // Create the service
    let service = ReviewService::new(repository);

    // Return the domain's router
    handlers::router(service)
}

/// Initialize review indexes in MongoDB
pub async fn init_indexes(db: &mongodb::Database) -> eyre::Result<()> {
    let repository = MongoReviewRepository::new(db);
    repository
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create review indexes: {}", e))?;
    info!("Review collection indexes created");
    Ok(())
}
