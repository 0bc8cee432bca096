//! Database library providing the MongoDB connector and shared utilities
//!
//! This library provides connection management, health checks, and retry
//! helpers for services backed by MongoDB.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB support
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Examples
//!
//! ```ignore
//! use database::mongodb;
//!
//! let client = mongodb::connect("mongodb://localhost:27017").await?;
//! let db = client.database("reviews");
//! let collection = db.collection::<Document>("reviews");
//! ```
//!
//! With retry on startup:
//!
//! ```ignore
//! use database::common::RetryConfig;
//! use database::mongodb::{MongoConfig, connect_from_config_with_retry};
//!
//! let config = MongoConfig::from_env()?;
//! let retry = RetryConfig::new().with_max_retries(5);
//! let client = connect_from_config_with_retry(&config, Some(retry)).await?;
//! ```

// Always available modules
pub mod common;

// Database-specific modules (conditional based on features)
#[cfg(feature = "mongodb")]
pub mod mongodb;

// Re-exports for convenience
pub use common::{DatabaseError, DatabaseResult};
