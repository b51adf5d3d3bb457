use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        city::{CityDto, CityFormDto, CityStatusDto},
    },
    server::{
        error::AppError,
        model::city::{City, CreateCityParams, UpdateCityParams},
        service::city::CityService,
        state::AppState,
        util::multipart::FormData,
    },
};

/// Tag for grouping city endpoints in OpenAPI documentation
pub static CITY_TAG: &str = "city";

fn into_dtos(cities: Vec<City>) -> Vec<CityDto> {
    cities.into_iter().map(|city| city.into_dto()).collect()
}

/// List all cities ordered by name.
///
/// # Returns
/// - `200 OK` - Every city, active or not
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cities",
    tag = CITY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved cities", body = Vec<CityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cities(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let cities = CityService::new(&state.db).get_all().await?;

    Ok(Json(into_dtos(cities)))
}

/// List active cities ordered by name.
#[utoipa::path(
    get,
    path = "/api/cities/active",
    tag = CITY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved active cities", body = Vec<CityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_cities(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let cities = CityService::new(&state.db).get_active().await?;

    Ok(Json(into_dtos(cities)))
}

#[utoipa::path(
    get,
    path = "/api/cities/{id}",
    tag = CITY_TAG,
    params(
        ("id" = i32, Path, description = "City ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved city", body = CityDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_city(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let city = CityService::new(&state.db).get_by_id(id).await?;

    Ok(Json(city.into_dto()))
}

/// Create a city from a multipart form.
///
/// Each item of the `thingsToDo` JSON field either keeps an `image` string or points
/// into the uploaded `thingsToDoImages` through `imageIndex`.
///
/// # Returns
/// - `201 Created` - The created city
/// - `400 Bad Request` - Missing image, duplicate name or invalid things-to-do data
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/cities",
    tag = CITY_TAG,
    request_body(content = CityFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully created city", body = CityDto),
        (status = 400, description = "Invalid city data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_city(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = FormData::from_multipart(multipart).await?;
    let params = CreateCityParams::from_form(&form)?;

    let city = CityService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(city.into_dto())))
}

/// Update a city from a multipart form.
///
/// # Returns
/// - `200 OK` - The updated city
/// - `400 Bad Request` - Duplicate name or invalid things-to-do data
/// - `404 Not Found` - No city with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/cities/{id}",
    tag = CITY_TAG,
    params(
        ("id" = i32, Path, description = "City ID")
    ),
    request_body(content = CityFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Successfully updated city", body = CityDto),
        (status = 400, description = "Invalid city data", body = ErrorDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_city(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = FormData::from_multipart(multipart).await?;
    let params = UpdateCityParams::from_form(id, &form)?;

    let city = CityService::new(&state.db).update(params).await?;

    Ok(Json(city.into_dto()))
}

/// Set or toggle the active flag of a city.
///
/// The flag is flipped when the body omits `isActive`.
///
/// # Returns
/// - `200 OK` - The updated city
/// - `404 Not Found` - No city with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/cities/{id}/status",
    tag = CITY_TAG,
    params(
        ("id" = i32, Path, description = "City ID")
    ),
    request_body = CityStatusDto,
    responses(
        (status = 200, description = "Successfully updated city status", body = CityDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_city_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Option<Json<CityStatusDto>>,
) -> Result<impl IntoResponse, AppError> {
    let is_active = payload.and_then(|Json(status)| status.is_active);

    let city = CityService::new(&state.db).set_status(id, is_active).await?;

    Ok(Json(city.into_dto()))
}
