//! Pharmacy Reviews Domain
//!
//! This module provides a complete domain implementation for managing pharmacy
//! reviews and their moderation state using MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_reviews::{
//!     handlers,
//!     mongodb::MongoReviewRepository,
//!     service::ReviewService,
//! };
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a MongoDB client
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("pharmacy");
//!
//! // Create a repository and service
//! let repository = MongoReviewRepository::new(&db);
//! let service = ReviewService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ReviewError, ReviewResult};
pub use handlers::ApiDoc;
pub use models::{CreateReview, ReportReview, Review, ReviewFilter, UpdateReview};
pub use repository::{InMemoryReviewRepository, ReviewRepository};
pub use self::mongodb::MongoReviewRepository;
pub use service::ReviewService;
