use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::review::{ReviewDto, ReviewSource},
    server::{
        error::AppError,
        model::property::{profile_image_from_form, source_from_form, validate_rating},
        util::multipart::FormData,
    },
};

/// Standalone review attached to a city and optionally to one of its properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub name: String,
    pub profile_image: Option<String>,
    pub rating: u8,
    pub description: String,
    pub source: ReviewSource,
    pub is_active: bool,
    pub city_id: i32,
    pub city_name: String,
    pub property_id: Option<i32>,
    pub property_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub fn from_entity(entity: entity::review::Model) -> Result<Self, DbErr> {
        let source = entity.source.parse::<ReviewSource>().map_err(DbErr::Custom)?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            profile_image: entity.profile_image,
            rating: entity.rating.clamp(0, u8::MAX as i32) as u8,
            description: entity.description,
            source,
            is_active: entity.is_active,
            city_id: entity.city_id,
            city_name: entity.city_name,
            property_id: entity.property_id,
            property_name: entity.property_name,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            name: self.name,
            profile_image: self.profile_image,
            rating: self.rating,
            description: self.description,
            source: self.source,
            is_active: self.is_active,
            city_id: self.city_id,
            city_name: self.city_name,
            property_id: self.property_id,
            property_name: self.property_name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Name snapshots captured from the rows a review references.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSnapshot {
    pub city_name: String,
    pub property_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub name: String,
    pub profile_image: Option<String>,
    pub rating: u8,
    pub description: String,
    pub source: ReviewSource,
    pub is_active: bool,
    pub city_id: i32,
    pub property_id: Option<i32>,
    /// Explicit property name; the referenced property's name is used otherwise.
    pub property_name: Option<String>,
}

impl CreateReviewParams {
    pub fn from_form(form: &FormData) -> Result<Self, AppError> {
        Ok(Self {
            name: form.required_text("name")?,
            profile_image: profile_image_from_form(form)?,
            rating: validate_rating(form.required_parse("rating")?)?,
            description: form.text("description").unwrap_or_default(),
            source: source_from_form(form)?.unwrap_or_default(),
            is_active: form.bool("isActive")?.unwrap_or(true),
            city_id: form.required_parse("cityId")?,
            property_id: form.parse("propertyId")?,
            property_name: form.text("propertyName"),
        })
    }
}

/// Partial review update; absent fields keep their value.
///
/// `property_id` is `Some(None)` when the client sent an empty `propertyId`, which
/// detaches the review from its property.
#[derive(Debug, Clone, Default)]
pub struct UpdateReviewParams {
    pub id: i32,
    pub name: Option<String>,
    pub profile_image: Option<String>,
    pub rating: Option<u8>,
    pub description: Option<String>,
    pub source: Option<ReviewSource>,
    pub is_active: Option<bool>,
    pub city_id: Option<i32>,
    pub property_id: Option<Option<i32>>,
    pub property_name: Option<String>,
}

impl UpdateReviewParams {
    pub fn from_form(id: i32, form: &FormData) -> Result<Self, AppError> {
        let property_id = match form.raw_text("propertyId") {
            None => None,
            Some(value) if value.is_empty() => Some(None),
            Some(_) => Some(form.parse("propertyId")?),
        };

        Ok(Self {
            id,
            name: form.text("name"),
            profile_image: profile_image_from_form(form)?,
            rating: form.parse("rating")?.map(validate_rating).transpose()?,
            description: form.raw_text("description"),
            source: source_from_form(form)?,
            is_active: form.bool("isActive")?,
            city_id: form.parse("cityId")?,
            property_id,
            property_name: form.text("propertyName"),
        })
    }

    /// Applies the plain fields. References and their snapshots are resolved by the
    /// service, which needs to look up the referenced rows.
    pub fn apply_fields(&self, review: &mut Review) {
        if let Some(name) = &self.name {
            review.name = name.clone();
        }
        if let Some(profile_image) = &self.profile_image {
            review.profile_image = Some(profile_image.clone());
        }
        if let Some(rating) = self.rating {
            review.rating = rating;
        }
        if let Some(description) = &self.description {
            review.description = description.clone();
        }
        if let Some(source) = self.source {
            review.source = source;
        }
        if let Some(is_active) = self.is_active {
            review.is_active = is_active;
        }
    }
}
