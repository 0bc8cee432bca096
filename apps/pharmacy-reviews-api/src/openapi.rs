//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pharmacy Reviews API",
        version = "0.1.0",
        description = "MongoDB-based REST API for pharmacy reviews and moderation",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/reviews", api = domain_reviews::ApiDoc)
    ),
    tags(
        (name = "Reviews", description = "Pharmacy review and moderation endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;
