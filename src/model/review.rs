use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Platform a review was collected from.
///
/// Serialized as a lowercase platform name, with an empty string meaning the review
/// was entered directly.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReviewSource {
    Google,
    Airbnb,
    Booking,
    Tripadvisor,
    #[default]
    #[serde(rename = "")]
    Direct,
}

impl ReviewSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Airbnb => "airbnb",
            Self::Booking => "booking",
            Self::Tripadvisor => "tripadvisor",
            Self::Direct => "",
        }
    }
}

impl fmt::Display for ReviewSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "airbnb" => Ok(Self::Airbnb),
            "booking" => Ok(Self::Booking),
            "tripadvisor" => Ok(Self::Tripadvisor),
            "" => Ok(Self::Direct),
            other => Err(format!(
                "Unknown review source '{}', expected one of google, airbnb, booking, tripadvisor",
                other
            )),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: i32,
    pub name: String,
    pub profile_image: Option<String>,
    pub rating: u8,
    pub description: String,
    pub source: ReviewSource,
    pub is_active: bool,
    pub city_id: i32,
    /// Name of the city captured when the city reference was last set.
    pub city_name: String,
    pub property_id: Option<i32>,
    /// Name of the property captured when the property reference was last set.
    pub property_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Multipart fields accepted when creating or updating a standalone review.
///
/// All fields are optional on update.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct ReviewFormDto {
    pub name: String,
    pub rating: u8,
    pub description: String,
    pub source: Option<ReviewSource>,
    pub is_active: Option<bool>,
    pub city_id: i32,
    /// Send an empty value to detach the review from its property.
    pub property_id: Option<i32>,
    /// Overrides the property name snapshot taken from the referenced property.
    pub property_name: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub profile_image: Option<Vec<u8>>,
}
