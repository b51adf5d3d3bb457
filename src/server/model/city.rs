use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};

use crate::{
    model::city::{CityDto, ThingToDoDto, ThingToDoInputDto},
    server::{
        error::AppError,
        model::document::decode_column,
        util::{
            image::{self, IMAGE_LIMIT},
            multipart::FormData,
        },
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThingToDo {
    pub image: String,
    pub heading: String,
    pub description: String,
}

impl ThingToDo {
    pub fn into_dto(self) -> ThingToDoDto {
        ThingToDoDto {
            image: self.image,
            heading: self.heading,
            description: self.description,
        }
    }
}

/// Resolves the image of every thing-to-do entry.
///
/// An entry keeps the `image` it was sent with, or takes the upload at `image_index`.
/// An index wins over an existing image so a client can replace one in place.
///
/// # Returns
/// - `Ok(Vec<ThingToDo>)` - Entries in input order
/// - `Err(AppError::BadRequest)` - Missing heading, no image source, or an index past
///   the end of `uploads`
pub fn resolve_things_to_do(
    inputs: Vec<ThingToDoInputDto>,
    uploads: &[String],
) -> Result<Vec<ThingToDo>, AppError> {
    inputs
        .into_iter()
        .enumerate()
        .map(|(position, input)| {
            let heading = input.heading.trim().to_string();
            if heading.is_empty() {
                return Err(AppError::BadRequest(format!(
                    "Thing to do {} requires a heading",
                    position
                )));
            }

            let image = match (input.image_index, input.image) {
                (Some(index), _) => uploads.get(index).cloned().ok_or_else(|| {
                    AppError::BadRequest(format!(
                        "Thing to do {} references image {} but only {} images were uploaded",
                        position,
                        index,
                        uploads.len()
                    ))
                })?,
                (None, Some(image)) if !image.trim().is_empty() => image,
                _ => {
                    return Err(AppError::BadRequest(format!(
                        "Thing to do {} requires an image or imageIndex",
                        position
                    )))
                }
            };

            Ok(ThingToDo {
                image,
                heading,
                description: input.description,
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub is_active: bool,
    pub things_to_do: Vec<ThingToDo>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl City {
    pub fn from_entity(entity: entity::city::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            image: entity.image,
            is_active: entity.is_active,
            things_to_do: decode_column(entity.things_to_do, "things_to_do")?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> CityDto {
        CityDto {
            id: self.id,
            name: self.name,
            image: self.image,
            is_active: self.is_active,
            things_to_do: self
                .things_to_do
                .into_iter()
                .map(ThingToDo::into_dto)
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCityParams {
    pub name: String,
    pub image: String,
    pub is_active: bool,
    pub things_to_do: Vec<ThingToDo>,
}

impl CreateCityParams {
    pub fn from_form(form: &FormData) -> Result<Self, AppError> {
        let image = form
            .file("image")
            .ok_or_else(|| AppError::BadRequest("image is required".to_string()))
            .and_then(|file| image::ingest(file, IMAGE_LIMIT))?;

        Ok(Self {
            name: form.required_text("name")?,
            image: image.data,
            is_active: form.bool("isActive")?.unwrap_or(true),
            things_to_do: things_to_do_from_form(form)?.unwrap_or_default(),
        })
    }
}

/// Partial city update; the active flag is changed through the status endpoint or here.
#[derive(Debug, Clone, Default)]
pub struct UpdateCityParams {
    pub id: i32,
    pub name: Option<String>,
    pub image: Option<String>,
    pub is_active: Option<bool>,
    pub things_to_do: Option<Vec<ThingToDo>>,
}

impl UpdateCityParams {
    pub fn from_form(id: i32, form: &FormData) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: form.text("name"),
            image: form
                .file("image")
                .map(|file| image::ingest(file, IMAGE_LIMIT).map(|image| image.data))
                .transpose()?,
            is_active: form.bool("isActive")?,
            things_to_do: things_to_do_from_form(form)?,
        })
    }

    pub fn apply_to(self, city: &mut City) {
        if let Some(name) = self.name {
            city.name = name;
        }
        if let Some(image) = self.image {
            city.image = image;
        }
        if let Some(is_active) = self.is_active {
            city.is_active = is_active;
        }
        if let Some(things_to_do) = self.things_to_do {
            city.things_to_do = things_to_do;
        }
    }
}

fn things_to_do_from_form(form: &FormData) -> Result<Option<Vec<ThingToDo>>, AppError> {
    let uploads: Vec<String> = image::ingest_all(form.files("thingsToDoImages"), IMAGE_LIMIT)?
        .into_iter()
        .map(|image| image.data)
        .collect();

    match form.json::<Vec<ThingToDoInputDto>>("thingsToDo")? {
        Some(inputs) => resolve_things_to_do(inputs, &uploads).map(Some),
        None if !uploads.is_empty() => Err(AppError::BadRequest(
            "thingsToDo is required when uploading thingsToDoImages".to_string(),
        )),
        None => Ok(None),
    }
}
