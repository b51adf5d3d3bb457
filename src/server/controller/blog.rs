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
        blog::{BlogDto, BlogFormDto},
    },
    server::{
        error::AppError,
        model::blog::{CreateBlogParams, UpdateBlogParams},
        service::blog::BlogService,
        state::AppState,
        util::multipart::FormData,
    },
};

/// Tag for grouping blog endpoints in OpenAPI documentation
pub static BLOG_TAG: &str = "blog";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogFilter {
    pub city_id: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/blogs",
    tag = BLOG_TAG,
    params(
        ("cityId" = Option<i32>, Query, description = "Only return blogs about this city")
    ),
    responses(
        (status = 200, description = "Successfully retrieved blogs", body = Vec<BlogDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_blogs(
    State(state): State<AppState>,
    Query(filter): Query<BlogFilter>,
) -> Result<impl IntoResponse, AppError> {
    let blogs = BlogService::new(&state.db).get_all(filter.city_id).await?;

    Ok(Json(
        blogs
            .into_iter()
            .map(|blog| blog.into_dto())
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/blogs/{id}",
    tag = BLOG_TAG,
    params(
        ("id" = i32, Path, description = "Blog ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved blog", body = BlogDto),
        (status = 404, description = "Blog not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let blog = BlogService::new(&state.db).get_by_id(id).await?;

    Ok(Json(blog.into_dto()))
}

/// Create a blog from a multipart form.
///
/// `mustVisitImages` pair with the `mustVisitData` items by position, so both lists
/// must have the same length.
///
/// # Returns
/// - `201 Created` - The created blog
/// - `400 Bad Request` - Missing background image, malformed JSON or image count mismatch
/// - `404 Not Found` - Referenced city does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/blogs",
    tag = BLOG_TAG,
    request_body(content = BlogFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully created blog", body = BlogDto),
        (status = 400, description = "Invalid blog data", body = ErrorDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_blog(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = FormData::from_multipart(multipart).await?;
    let params = CreateBlogParams::from_form(&form)?;

    let blog = BlogService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(blog.into_dto())))
}

/// Update a blog from a multipart form.
///
/// When `mustVisitData` is sent it replaces the stored list. Items keep their stored
/// image unless `imageMap` points them at one of the uploaded `mustVisitImages`; new
/// items must be mapped to an upload.
///
/// # Returns
/// - `200 OK` - The updated blog
/// - `400 Bad Request` - Malformed JSON, unknown item id or invalid image mapping
/// - `404 Not Found` - Blog or referenced city not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/blogs/{id}",
    tag = BLOG_TAG,
    params(
        ("id" = i32, Path, description = "Blog ID")
    ),
    request_body(content = BlogFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Successfully updated blog", body = BlogDto),
        (status = 400, description = "Invalid blog data", body = ErrorDto),
        (status = 404, description = "Blog not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_blog(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = FormData::from_multipart(multipart).await?;
    let params = UpdateBlogParams::from_form(id, &form)?;

    let blog = BlogService::new(&state.db).update(params).await?;

    Ok(Json(blog.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    tag = BLOG_TAG,
    params(
        ("id" = i32, Path, description = "Blog ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted blog", body = MessageDto),
        (status = 404, description = "Blog not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_blog(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    BlogService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::new("Blog deleted successfully")))
}
