use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ThingToDoDto {
    pub image: String,
    pub heading: String,
    pub description: String,
}

/// Thing-to-do entry sent inside the `thingsToDo` JSON field of a city form.
///
/// Either keeps an existing `image` or points at an upload in `thingsToDoImages`
/// through `imageIndex`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ThingToDoInputDto {
    pub heading: String,
    #[serde(default)]
    pub description: String,
    pub image: Option<String>,
    pub image_index: Option<usize>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityDto {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub is_active: bool,
    pub things_to_do: Vec<ThingToDoDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `PATCH /api/cities/{id}/status`. Omitting `isActive` toggles the flag.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityStatusDto {
    pub is_active: Option<bool>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct CityFormDto {
    pub name: String,
    pub is_active: Option<bool>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
    /// JSON-encoded list of things to do.
    #[schema(value_type = Option<String>)]
    pub things_to_do: Option<Vec<ThingToDoInputDto>>,
    #[schema(value_type = Option<Vec<String>>)]
    pub things_to_do_images: Option<Vec<Vec<u8>>>,
}
