//! Custom extractors for Axum handlers.
//!
//! These reduce handler boilerplate and keep rejection responses on the
//! standard error envelope.

pub mod auth_user;
pub mod uuid_path;
pub mod validated_json;

pub use auth_user::AuthUserId;
pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;
