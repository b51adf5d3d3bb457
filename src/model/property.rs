use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::review::ReviewSource;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AmenityDto {
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageDto {
    /// `data:<content type>;base64,<payload>`
    pub data: String,
    pub content_type: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingDto {
    pub average: f64,
    pub count: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyReviewDto {
    pub id: String,
    pub name: String,
    pub profile_image: Option<String>,
    pub rating: u8,
    pub description: String,
    pub source: ReviewSource,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Embedded review entry sent inside the `reviews` JSON field of a property form.
///
/// Entries without an `id` are treated as new reviews.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyReviewInputDto {
    pub id: Option<String>,
    pub name: String,
    pub profile_image: Option<String>,
    pub rating: u8,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source: ReviewSource,
    pub is_active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDto {
    pub id: i32,
    pub name: String,
    pub city_id: i32,
    pub city_name: String,
    pub guests: u32,
    pub rooms: u32,
    pub baths: u32,
    pub beds: u32,
    pub price_min: f64,
    pub price_max: f64,
    pub description: String,
    pub brochure_link: Option<String>,
    pub video_link: Option<String>,
    pub map_link: Option<String>,
    pub amenities: Vec<AmenityDto>,
    pub images: Vec<ImageDto>,
    pub reviews: Vec<PropertyReviewDto>,
    pub rating: RatingDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Multipart fields accepted when creating or updating a property.
///
/// On update every field is optional; `images` are appended after the indexes listed
/// in `removeImages` have been removed.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct PropertyFormDto {
    pub name: String,
    pub city_id: i32,
    pub guests: u32,
    pub rooms: u32,
    pub baths: u32,
    pub beds: u32,
    pub price_min: f64,
    pub price_max: f64,
    pub description: String,
    pub brochure_link: Option<String>,
    pub video_link: Option<String>,
    pub map_link: Option<String>,
    /// JSON-encoded list of amenities.
    #[schema(value_type = Option<String>)]
    pub amenities: Option<Vec<AmenityDto>>,
    /// JSON-encoded list of embedded reviews, replacing the stored list.
    #[schema(value_type = Option<String>)]
    pub reviews: Option<Vec<PropertyReviewInputDto>>,
    /// Comma separated image indexes to delete (update only).
    pub remove_images: Option<String>,
    #[schema(value_type = Option<Vec<String>>)]
    pub images: Option<Vec<Vec<u8>>>,
}

/// Multipart fields accepted when adding or editing an embedded property review.
///
/// On edit only the fields that are present are applied.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct PropertyReviewFormDto {
    pub name: String,
    pub rating: u8,
    pub description: String,
    pub source: Option<ReviewSource>,
    pub is_active: Option<bool>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub profile_image: Option<Vec<u8>>,
}
