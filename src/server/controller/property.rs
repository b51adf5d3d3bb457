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
        property::{PropertyDto, PropertyFormDto, PropertyReviewFormDto},
    },
    server::{
        error::AppError,
        model::property::{
            CreatePropertyParams, PropertyReviewParams, PropertyReviewPatch,
            UpdatePropertyParams,
        },
        service::property::PropertyService,
        state::AppState,
        util::multipart::FormData,
    },
};

/// Tag for grouping property endpoints in OpenAPI documentation
pub static PROPERTY_TAG: &str = "property";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFilter {
    pub city_id: Option<i32>,
}

/// List properties, newest first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `filter` - Optional `cityId` filter
///
/// # Returns
/// - `200 OK` - Properties matching the filter
/// - `500 Internal Server Error` - Database error or corrupt stored document
#[utoipa::path(
    get,
    path = "/api/properties",
    tag = PROPERTY_TAG,
    params(
        ("cityId" = Option<i32>, Query, description = "Only return properties in this city")
    ),
    responses(
        (status = 200, description = "Successfully retrieved properties", body = Vec<PropertyDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_properties(
    State(state): State<AppState>,
    Query(filter): Query<PropertyFilter>,
) -> Result<impl IntoResponse, AppError> {
    let properties = PropertyService::new(&state.db)
        .get_all(filter.city_id)
        .await?;

    Ok(Json(
        properties
            .into_iter()
            .map(|property| property.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Get a property by id.
///
/// # Returns
/// - `200 OK` - The property with its embedded reviews and rating
/// - `404 Not Found` - No property with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/properties/{id}",
    tag = PROPERTY_TAG,
    params(
        ("id" = i32, Path, description = "Property ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved property", body = PropertyDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let property = PropertyService::new(&state.db).get_by_id(id).await?;

    Ok(Json(property.into_dto()))
}

/// Create a property from a multipart form.
///
/// Uploaded `images` are stored inline as data URLs. The `amenities` and `reviews`
/// fields carry JSON documents; the rating is derived from the active reviews.
///
/// # Returns
/// - `201 Created` - The created property
/// - `400 Bad Request` - Missing field, malformed JSON or rejected image
/// - `404 Not Found` - Referenced city does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/properties",
    tag = PROPERTY_TAG,
    request_body(content = PropertyFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully created property", body = PropertyDto),
        (status = 400, description = "Invalid property data", body = ErrorDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_property(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = FormData::from_multipart(multipart).await?;
    let params = CreatePropertyParams::from_form(&form)?;

    let property = PropertyService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(property.into_dto())))
}

/// Update a property from a multipart form.
///
/// Only the fields present in the form are changed. Indexes listed in
/// `removeImages` are dropped before new `images` are appended.
///
/// # Returns
/// - `200 OK` - The updated property
/// - `400 Bad Request` - Malformed field or invalid image index
/// - `404 Not Found` - Property or referenced city not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/properties/{id}",
    tag = PROPERTY_TAG,
    params(
        ("id" = i32, Path, description = "Property ID")
    ),
    request_body(content = PropertyFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Successfully updated property", body = PropertyDto),
        (status = 400, description = "Invalid property data", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_property(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = FormData::from_multipart(multipart).await?;
    let params = UpdatePropertyParams::from_form(id, &form)?;

    let property = PropertyService::new(&state.db).update(params).await?;

    Ok(Json(property.into_dto()))
}

/// Delete a property.
///
/// Standalone reviews referencing the property are detached, not deleted.
///
/// # Returns
/// - `200 OK` - Property deleted
/// - `404 Not Found` - No property with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/properties/{id}",
    tag = PROPERTY_TAG,
    params(
        ("id" = i32, Path, description = "Property ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted property", body = MessageDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_property(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    PropertyService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::new("Property deleted successfully")))
}

/// Add an embedded review to a property.
///
/// # Returns
/// - `201 Created` - The property including the new review and its recomputed rating
/// - `400 Bad Request` - Missing field, rating outside 1..=5 or rejected image
/// - `404 Not Found` - No property with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/properties/{id}/reviews",
    tag = PROPERTY_TAG,
    params(
        ("id" = i32, Path, description = "Property ID")
    ),
    request_body(content = PropertyReviewFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully added review", body = PropertyDto),
        (status = 400, description = "Invalid review data", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_property_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = FormData::from_multipart(multipart).await?;
    let params = PropertyReviewParams::from_form(&form)?;

    let property = PropertyService::new(&state.db)
        .add_review(id, params)
        .await?;

    Ok((StatusCode::CREATED, Json(property.into_dto())))
}

/// Edit an embedded review of a property.
///
/// # Returns
/// - `200 OK` - The property with the edited review and its recomputed rating
/// - `400 Bad Request` - Malformed field or rating outside 1..=5
/// - `404 Not Found` - Property or review not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/properties/{id}/reviews/{review_id}",
    tag = PROPERTY_TAG,
    params(
        ("id" = i32, Path, description = "Property ID"),
        ("review_id" = String, Path, description = "Embedded review ID")
    ),
    request_body(content = PropertyReviewFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Successfully updated review", body = PropertyDto),
        (status = 400, description = "Invalid review data", body = ErrorDto),
        (status = 404, description = "Property or review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_property_review(
    State(state): State<AppState>,
    Path((id, review_id)): Path<(i32, String)>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = FormData::from_multipart(multipart).await?;
    let patch = PropertyReviewPatch::from_form(&form)?;

    let property = PropertyService::new(&state.db)
        .edit_review(id, &review_id, patch)
        .await?;

    Ok(Json(property.into_dto()))
}

/// Delete an embedded review of a property.
///
/// # Returns
/// - `200 OK` - The property without the review and with its recomputed rating
/// - `404 Not Found` - Property or review not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/properties/{id}/reviews/{review_id}",
    tag = PROPERTY_TAG,
    params(
        ("id" = i32, Path, description = "Property ID"),
        ("review_id" = String, Path, description = "Embedded review ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted review", body = PropertyDto),
        (status = 404, description = "Property or review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_property_review(
    State(state): State<AppState>,
    Path((id, review_id)): Path<(i32, String)>,
) -> Result<impl IntoResponse, AppError> {
    let property = PropertyService::new(&state.db)
        .delete_review(id, &review_id)
        .await?;

    Ok(Json(property.into_dto()))
}
