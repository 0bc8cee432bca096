use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post, put},
};
use axum_helpers::{
    AuthUserId, UuidPath, ValidatedJson,
    audit::{AuditEvent, AuditOutcome, extract_ip_from_headers, extract_user_agent},
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse, UnauthorizedResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ReviewResult;
use crate::models::{CreateReview, ReportReview, Review, ReviewFilter, UpdateReview};
use crate::repository::ReviewRepository;
use crate::service::ReviewService;

/// OpenAPI documentation for Reviews API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_reviews,
        create_review,
        pharmacy_reviews,
        update_review,
        delete_review,
        report_review,
    ),
    components(
        schemas(Review, CreateReview, UpdateReview, ReportReview, ReviewFilter),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Reviews", description = "Pharmacy review and moderation endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the reviews router with all HTTP endpoints
pub fn router<R: ReviewRepository + 'static>(service: ReviewService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_reviews).post(create_review))
        .route("/pharmacy/{pharmacy_id}", get(pharmacy_reviews))
        .route("/{id}", put(update_review).delete(delete_review))
        .route("/{id}/report", post(report_review))
        .with_state(shared_service)
}

/// List reviews with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = "Reviews",
    params(ReviewFilter),
    responses(
        (status = 200, description = "List of reviews, newest first", body = Vec<Review>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_reviews<R: ReviewRepository>(
    State(service): State<Arc<ReviewService<R>>>,
    Query(filter): Query<ReviewFilter>,
) -> ReviewResult<Json<Vec<Review>>> {
    let reviews = service.get_all_reviews(filter).await?;
    Ok(Json(reviews))
}

/// Create a new review
///
/// The author is taken from the `x-user-id` header stamped by the gateway.
#[utoipa::path(
    post,
    path = "",
    tag = "Reviews",
    request_body = CreateReview,
    responses(
        (status = 201, description = "Review created successfully", body = Review),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_review<R: ReviewRepository>(
    State(service): State<Arc<ReviewService<R>>>,
    AuthUserId(user_id): AuthUserId,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<CreateReview>,
) -> ReviewResult<impl IntoResponse> {
    let review = service.create_review(user_id, input).await?;

    AuditEvent::new(
        Some(user_id.to_string()),
        "review.create",
        Some(format!("review:{}", review.id)),
        AuditOutcome::Success,
    )
    .with_ip(extract_ip_from_headers(&headers))
    .with_user_agent(extract_user_agent(&headers))
    .log();

    Ok((StatusCode::CREATED, Json(review)))
}

/// List all reviews for a pharmacy
#[utoipa::path(
    get,
    path = "/pharmacy/{pharmacy_id}",
    tag = "Reviews",
    params(
        ("pharmacy_id" = Uuid, Path, description = "Pharmacy ID")
    ),
    responses(
        (status = 200, description = "Reviews for the pharmacy, newest first", body = Vec<Review>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn pharmacy_reviews<R: ReviewRepository>(
    State(service): State<Arc<ReviewService<R>>>,
    UuidPath(pharmacy_id): UuidPath,
) -> ReviewResult<Json<Vec<Review>>> {
    let reviews = service.get_pharmacy_reviews(pharmacy_id).await?;
    Ok(Json(reviews))
}

/// Update a review's rating and/or comment
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Reviews",
    params(
        ("id" = Uuid, Path, description = "Review ID")
    ),
    request_body = UpdateReview,
    responses(
        (status = 200, description = "Review updated successfully", body = Review),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_review<R: ReviewRepository>(
    State(service): State<Arc<ReviewService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateReview>,
) -> ReviewResult<Json<Review>> {
    let review = service.update_review(id, input).await?;
    Ok(Json(review))
}

/// Delete a review
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Reviews",
    params(
        ("id" = Uuid, Path, description = "Review ID")
    ),
    responses(
        (status = 204, description = "Review deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_review<R: ReviewRepository>(
    State(service): State<Arc<ReviewService<R>>>,
    UuidPath(id): UuidPath,
    headers: HeaderMap,
) -> ReviewResult<impl IntoResponse> {
    service.delete_review(id).await?;

    AuditEvent::new(
        None,
        "review.delete",
        Some(format!("review:{}", id)),
        AuditOutcome::Success,
    )
    .with_ip(extract_ip_from_headers(&headers))
    .with_user_agent(extract_user_agent(&headers))
    .log();

    Ok(StatusCode::NO_CONTENT)
}

/// Report a review for moderation
///
/// Sets the reported flag and stores the reason. Reporting the same review
/// again replaces the stored reason.
#[utoipa::path(
    post,
    path = "/{id}/report",
    tag = "Reviews",
    params(
        ("id" = Uuid, Path, description = "Review ID")
    ),
    request_body = ReportReview,
    responses(
        (status = 200, description = "Review reported successfully", body = Review),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn report_review<R: ReviewRepository>(
    State(service): State<Arc<ReviewService<R>>>,
    UuidPath(id): UuidPath,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<ReportReview>,
) -> ReviewResult<Json<Review>> {
    let reason = input.reason.clone();

    match service.report_review(id, input).await {
        Ok(review) => {
            AuditEvent::new(
                None,
                "review.report",
                Some(format!("review:{}", id)),
                AuditOutcome::Success,
            )
            .with_ip(extract_ip_from_headers(&headers))
            .with_user_agent(extract_user_agent(&headers))
            .with_details(serde_json::json!({ "reason": reason }))
            .log();

            Ok(Json(review))
        }
        Err(err) => {
            AuditEvent::new(
                None,
                "review.report",
                Some(format!("review:{}", id)),
                AuditOutcome::Failure,
            )
            .with_ip(extract_ip_from_headers(&headers))
            .with_user_agent(extract_user_agent(&headers))
            .log();

            Err(err)
        }
    }
}
