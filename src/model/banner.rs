use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Screen class a banner is shown on.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BannerType {
    Desktop,
    Mobile,
    Both,
}

impl BannerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for BannerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BannerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "mobile" => Ok(Self::Mobile),
            "both" => Ok(Self::Both),
            other => Err(format!(
                "Unknown banner type '{}', expected desktop, mobile or both",
                other
            )),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BannerDto {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    #[serde(rename = "type")]
    pub banner_type: BannerType,
    pub is_active: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct BannerFormDto {
    pub title: String,
    pub subtitle: Option<String>,
    #[serde(rename = "type")]
    pub banner_type: BannerType,
    pub is_active: Option<bool>,
    pub order: Option<i32>,
    /// External image location, used when no `image` file is uploaded.
    pub image_url: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}
