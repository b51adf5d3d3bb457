use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::banner::{BannerDto, BannerType},
    server::{
        error::AppError,
        util::{
            image::{self, IMAGE_LIMIT},
            multipart::FormData,
        },
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    /// Data URL of an uploaded image or an external image URL.
    pub image: String,
    pub banner_type: BannerType,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Banner {
    pub fn from_entity(entity: entity::banner::Model) -> Result<Self, DbErr> {
        let banner_type = entity
            .banner_type
            .parse::<BannerType>()
            .map_err(DbErr::Custom)?;

        Ok(Self {
            id: entity.id,
            title: entity.title,
            subtitle: entity.subtitle,
            image: entity.image,
            banner_type,
            is_active: entity.is_active,
            display_order: entity.display_order,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> BannerDto {
        BannerDto {
            id: self.id,
            title: self.title,
            subtitle: self.subtitle,
            image: self.image,
            banner_type: self.banner_type,
            is_active: self.is_active,
            order: self.display_order,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parses a banner type sent by a client.
pub fn parse_banner_type(value: &str) -> Result<BannerType, AppError> {
    value.parse::<BannerType>().map_err(AppError::BadRequest)
}

#[derive(Debug, Clone)]
pub struct CreateBannerParams {
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub banner_type: BannerType,
    pub is_active: bool,
    pub display_order: i32,
}

impl CreateBannerParams {
    pub fn from_form(form: &FormData) -> Result<Self, AppError> {
        let image = banner_image_from_form(form)?
            .ok_or_else(|| AppError::BadRequest("image or imageUrl is required".to_string()))?;

        Ok(Self {
            title: form.required_text("title")?,
            subtitle: form.text("subtitle").unwrap_or_default(),
            image,
            banner_type: parse_banner_type(&form.required_text("type")?)?,
            is_active: form.bool("isActive")?.unwrap_or(true),
            display_order: form.parse("order")?.unwrap_or(0),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBannerParams {
    pub id: i32,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image: Option<String>,
    pub banner_type: Option<BannerType>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}

impl UpdateBannerParams {
    pub fn from_form(id: i32, form: &FormData) -> Result<Self, AppError> {
        Ok(Self {
            id,
            title: form.text("title"),
            subtitle: form.raw_text("subtitle"),
            image: banner_image_from_form(form)?,
            banner_type: form
                .text("type")
                .map(|value| parse_banner_type(&value))
                .transpose()?,
            is_active: form.bool("isActive")?,
            display_order: form.parse("order")?,
        })
    }

    pub fn apply_to(self, banner: &mut Banner) {
        if let Some(title) = self.title {
            banner.title = title;
        }
        if let Some(subtitle) = self.subtitle {
            banner.subtitle = subtitle;
        }
        if let Some(image) = self.image {
            banner.image = image;
        }
        if let Some(banner_type) = self.banner_type {
            banner.banner_type = banner_type;
        }
        if let Some(is_active) = self.is_active {
            banner.is_active = is_active;
        }
        if let Some(display_order) = self.display_order {
            banner.display_order = display_order;
        }
    }
}

/// An uploaded `image` file takes precedence over an `imageUrl` text field.
fn banner_image_from_form(form: &FormData) -> Result<Option<String>, AppError> {
    if let Some(file) = form.file("image") {
        return image::ingest(file, IMAGE_LIMIT).map(|image| Some(image.data));
    }

    Ok(form.text("imageUrl"))
}
