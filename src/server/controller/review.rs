use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        review::{ReviewDto, ReviewFormDto},
    },
    server::{
        error::AppError,
        model::review::{CreateReviewParams, UpdateReviewParams},
        service::review::ReviewService,
        state::AppState,
        util::multipart::FormData,
    },
};

/// Tag for grouping standalone review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewFilter {
    pub city_id: Option<i32>,
    pub property_id: Option<i32>,
}

/// List standalone reviews, newest first.
///
/// # Returns
/// - `200 OK` - Reviews matching the filters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    params(
        ("cityId" = Option<i32>, Query, description = "Only return reviews for this city"),
        ("propertyId" = Option<i32>, Query, description = "Only return reviews for this property")
    ),
    responses(
        (status = 200, description = "Successfully retrieved reviews", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    Query(filter): Query<ReviewFilter>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db)
        .get_all(filter.city_id, filter.property_id)
        .await?;

    Ok(Json(
        reviews
            .into_iter()
            .map(|review| review.into_dto())
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved review", body = ReviewDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let review = ReviewService::new(&state.db).get_by_id(id).await?;

    Ok(Json(review.into_dto()))
}

/// Create a standalone review.
///
/// The city name, and the property name when a property is referenced, are
/// copied onto the review at creation.
///
/// # Returns
/// - `201 Created` - The created review
/// - `400 Bad Request` - Invalid field or property outside the referenced city
/// - `404 Not Found` - Referenced city or property does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    request_body(content = ReviewFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully created review", body = ReviewDto),
        (status = 400, description = "Invalid review data", body = ErrorDto),
        (status = 404, description = "City or property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = FormData::from_multipart(multipart).await?;
    let params = CreateReviewParams::from_form(&form)?;

    let review = ReviewService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}

/// Update a standalone review.
///
/// Name snapshots are only refreshed when the matching reference changes.
///
/// # Returns
/// - `200 OK` - The updated review
/// - `400 Bad Request` - Invalid field or property outside the referenced city
/// - `404 Not Found` - Review, city or property not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    request_body(content = ReviewFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Successfully updated review", body = ReviewDto),
        (status = 400, description = "Invalid review data", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = FormData::from_multipart(multipart).await?;
    let params = UpdateReviewParams::from_form(id, &form)?;

    let review = ReviewService::new(&state.db).update(params).await?;

    Ok(Json(review.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted review", body = MessageDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ReviewService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::new("Review deleted successfully")))
}
