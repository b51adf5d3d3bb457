use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        banner::{BannerDto, BannerFormDto},
    },
    server::{
        error::AppError,
        model::banner::{parse_banner_type, Banner, CreateBannerParams, UpdateBannerParams},
        service::banner::BannerService,
        state::AppState,
        util::multipart::FormData,
    },
};

/// Tag for grouping banner endpoints in OpenAPI documentation
pub static BANNER_TAG: &str = "banner";

fn into_dtos(banners: Vec<Banner>) -> Vec<BannerDto> {
    banners.into_iter().map(|banner| banner.into_dto()).collect()
}

/// List all banners by display order.
#[utoipa::path(
    get,
    path = "/api/banners",
    tag = BANNER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved banners", body = Vec<BannerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_banners(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let banners = BannerService::new(&state.db).get_all().await?;

    Ok(Json(into_dtos(banners)))
}

/// List the active banners shown on a device type.
///
/// Banners of type `both` are included for every requested type.
///
/// # Returns
/// - `200 OK` - Matching active banners by display order
/// - `400 Bad Request` - Unknown banner type
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/banners/type/{type}",
    tag = BANNER_TAG,
    params(
        ("type" = String, Path, description = "Banner type: desktop, mobile or both")
    ),
    responses(
        (status = 200, description = "Successfully retrieved banners", body = Vec<BannerDto>),
        (status = 400, description = "Unknown banner type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_banners_by_type(
    State(state): State<AppState>,
    Path(banner_type): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let banner_type = parse_banner_type(&banner_type)?;

    let banners = BannerService::new(&state.db)
        .get_by_type(banner_type)
        .await?;

    Ok(Json(into_dtos(banners)))
}

#[utoipa::path(
    get,
    path = "/api/banners/{id}",
    tag = BANNER_TAG,
    params(
        ("id" = i32, Path, description = "Banner ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved banner", body = BannerDto),
        (status = 404, description = "Banner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_banner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let banner = BannerService::new(&state.db).get_by_id(id).await?;

    Ok(Json(banner.into_dto()))
}

/// Create a banner from a multipart form.
///
/// The image is either an uploaded file or an `imageUrl` text field; the file wins
/// when both are sent.
///
/// # Returns
/// - `201 Created` - The created banner
/// - `400 Bad Request` - Missing image or type, or rejected image
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/banners",
    tag = BANNER_TAG,
    request_body(content = BannerFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully created banner", body = BannerDto),
        (status = 400, description = "Invalid banner data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_banner(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = FormData::from_multipart(multipart).await?;
    let params = CreateBannerParams::from_form(&form)?;

    let banner = BannerService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(banner.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/banners/{id}",
    tag = BANNER_TAG,
    params(
        ("id" = i32, Path, description = "Banner ID")
    ),
    request_body(content = BannerFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Successfully updated banner", body = BannerDto),
        (status = 400, description = "Invalid banner data", body = ErrorDto),
        (status = 404, description = "Banner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_banner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = FormData::from_multipart(multipart).await?;
    let params = UpdateBannerParams::from_form(id, &form)?;

    let banner = BannerService::new(&state.db).update(params).await?;

    Ok(Json(banner.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/banners/{id}",
    tag = BANNER_TAG,
    params(
        ("id" = i32, Path, description = "Banner ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted banner", body = MessageDto),
        (status = 404, description = "Banner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_banner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    BannerService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::new("Banner deleted successfully")))
}
