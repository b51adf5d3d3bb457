use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MustVisitThingDto {
    pub id: String,
    pub heading: String,
    pub description: String,
    pub image: String,
}

/// Must-visit entry sent inside the `mustVisitData` JSON field of a blog form.
///
/// `id` references a stored item. New items omit it and may carry a client chosen
/// `key` used to look up their upload in `imageMap`; without one their key is
/// `new-<position>`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MustVisitInputDto {
    pub id: Option<String>,
    pub key: Option<String>,
    pub heading: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogDto {
    pub id: i32,
    pub title: String,
    pub city_id: i32,
    pub city_name: String,
    pub background_image: String,
    pub content: String,
    pub must_visit: Vec<MustVisitThingDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct BlogFormDto {
    pub title: String,
    pub city_id: i32,
    pub content: String,
    #[schema(value_type = Option<String>, format = Binary)]
    pub background_image: Option<Vec<u8>>,
    /// JSON-encoded list of must-visit entries.
    #[schema(value_type = Option<String>)]
    pub must_visit_data: Option<Vec<MustVisitInputDto>>,
    /// JSON-encoded map from item key to an index into `mustVisitImages` (update only).
    #[schema(value_type = Option<String>)]
    pub image_map: Option<HashMap<String, usize>>,
    #[schema(value_type = Option<Vec<String>>)]
    pub must_visit_images: Option<Vec<Vec<u8>>>,
}
