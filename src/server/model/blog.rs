//! Blog documents and the must-visit list merge.
//!
//! Every must-visit item carries exactly one image. New items get their image from
//! the uploads of the same request; on update the pairing is explicit through an
//! image map keyed by item id, client key, or `new-<position>`. Payloads whose map
//! does not line up with the items and uploads are rejected rather than guessed.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::{
    model::blog::{BlogDto, MustVisitInputDto, MustVisitThingDto},
    server::{
        error::AppError,
        model::document::decode_column,
        util::{
            image::{self, BLOG_IMAGE_LIMIT},
            multipart::FormData,
        },
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MustVisitThing {
    pub id: String,
    pub heading: String,
    pub description: String,
    pub image: String,
}

impl MustVisitThing {
    pub fn into_dto(self) -> MustVisitThingDto {
        MustVisitThingDto {
            id: self.id,
            heading: self.heading,
            description: self.description,
            image: self.image,
        }
    }
}

/// Incoming must-visit entry, either referencing a stored item or describing a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct MustVisitInput {
    pub id: Option<String>,
    pub key: Option<String>,
    pub heading: String,
    pub description: String,
}

impl MustVisitInput {
    pub fn from_dto(dto: MustVisitInputDto) -> Self {
        Self {
            id: dto.id.filter(|id| !id.trim().is_empty()),
            key: dto.key.filter(|key| !key.trim().is_empty()),
            heading: dto.heading,
            description: dto.description,
        }
    }

    /// Key used to look the item up in an image map.
    fn map_key(&self, position: usize) -> String {
        match (&self.id, &self.key) {
            (Some(id), _) => id.clone(),
            (None, Some(key)) => key.clone(),
            (None, None) => format!("new-{}", position),
        }
    }
}

fn validate_heading(input: &MustVisitInput, position: usize) -> Result<String, AppError> {
    let heading = input.heading.trim();
    if heading.is_empty() {
        return Err(AppError::BadRequest(format!(
            "Must-visit item {} requires a heading",
            position
        )));
    }
    Ok(heading.to_string())
}

/// Pairs new must-visit items with uploaded images by position.
///
/// Used on blog creation, where every item is new. The number of images must equal
/// the number of items.
pub fn pair_must_visit(
    items: Vec<MustVisitInput>,
    images: Vec<String>,
) -> Result<Vec<MustVisitThing>, AppError> {
    if items.len() != images.len() {
        return Err(AppError::BadRequest(format!(
            "Each must-visit item needs exactly one image: got {} items and {} images",
            items.len(),
            images.len()
        )));
    }

    items
        .into_iter()
        .zip(images)
        .enumerate()
        .map(|(position, (item, image))| {
            Ok(MustVisitThing {
                id: Uuid::new_v4().to_string(),
                heading: validate_heading(&item, position)?,
                description: item.description,
                image,
            })
        })
        .collect()
}

/// Merges an incoming must-visit list into the stored one.
///
/// # Arguments
/// - `stored` - Items currently on the blog
/// - `items` - The complete new list, in the order it should be stored
/// - `uploads` - Newly uploaded images as data URLs
/// - `image_map` - Item key to index into `uploads`; `None` selects the text-only path
///
/// # Returns
/// - `Ok(Vec<MustVisitThing>)` - The list that replaces the stored one
/// - `Err(AppError::BadRequest)` - Unknown or repeated id, a new item without an image,
///   or a map that references missing items, missing uploads, or the same upload twice
pub fn merge_must_visit(
    stored: &[MustVisitThing],
    items: Vec<MustVisitInput>,
    uploads: Vec<String>,
    image_map: Option<&HashMap<String, usize>>,
) -> Result<Vec<MustVisitThing>, AppError> {
    reject_repeated_ids(&items)?;

    let Some(image_map) = image_map else {
        if !uploads.is_empty() {
            return Err(AppError::BadRequest(
                "imageMap is required when uploading must-visit images".to_string(),
            ));
        }
        return merge_text_only(stored, items);
    };

    let keys: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(position, item)| item.map_key(position))
        .collect();

    let known_keys: HashSet<&str> = keys.iter().map(String::as_str).collect();
    if let Some(unknown) = image_map
        .keys()
        .find(|key| !known_keys.contains(key.as_str()))
    {
        return Err(AppError::BadRequest(format!(
            "imageMap entry '{}' does not match any must-visit item",
            unknown
        )));
    }

    let mut used_uploads = HashSet::new();
    let mut merged = Vec::with_capacity(items.len());

    for (position, (item, key)) in items.into_iter().zip(keys).enumerate() {
        let heading = validate_heading(&item, position)?;

        let upload = match image_map.get(&key) {
            Some(&index) => {
                let data = uploads.get(index).ok_or_else(|| {
                    AppError::BadRequest(format!(
                        "Must-visit item {} ('{}') references image {} but only {} images were uploaded",
                        position,
                        key,
                        index,
                        uploads.len()
                    ))
                })?;
                if !used_uploads.insert(index) {
                    return Err(AppError::BadRequest(format!(
                        "Image {} is mapped to more than one must-visit item",
                        index
                    )));
                }
                Some(data.clone())
            }
            None => None,
        };

        let thing = match item.id {
            Some(id) => {
                let existing = find_stored(stored, &id)?;
                MustVisitThing {
                    id,
                    heading,
                    description: item.description,
                    image: upload.unwrap_or_else(|| existing.image.clone()),
                }
            }
            None => {
                let image = upload.ok_or_else(|| {
                    AppError::BadRequest(format!(
                        "New must-visit item {} ('{}') requires an uploaded image",
                        position, key
                    ))
                })?;
                MustVisitThing {
                    id: Uuid::new_v4().to_string(),
                    heading,
                    description: item.description,
                    image,
                }
            }
        };

        merged.push(thing);
    }

    if let Some(unused) = (0..uploads.len()).find(|index| !used_uploads.contains(index)) {
        return Err(AppError::BadRequest(format!(
            "Uploaded image {} is not mapped to any must-visit item",
            unused
        )));
    }

    Ok(merged)
}

/// Text-only merge used when no image map is supplied.
fn merge_text_only(
    stored: &[MustVisitThing],
    items: Vec<MustVisitInput>,
) -> Result<Vec<MustVisitThing>, AppError> {
    items
        .into_iter()
        .enumerate()
        .map(|(position, item)| {
            let heading = validate_heading(&item, position)?;
            let Some(id) = item.id else {
                return Err(AppError::BadRequest(format!(
                    "New must-visit item {} requires an uploaded image and an imageMap entry",
                    position
                )));
            };
            let existing = find_stored(stored, &id)?;

            Ok(MustVisitThing {
                id,
                heading,
                description: item.description,
                image: existing.image.clone(),
            })
        })
        .collect()
}

/// Each stored item may appear at most once in the incoming list.
fn reject_repeated_ids(items: &[MustVisitInput]) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for id in items.iter().filter_map(|item| item.id.as_deref()) {
        if !seen.insert(id) {
            return Err(AppError::BadRequest(format!(
                "Must-visit item '{}' appears more than once",
                id
            )));
        }
    }
    Ok(())
}

fn find_stored<'a>(stored: &'a [MustVisitThing], id: &str) -> Result<&'a MustVisitThing, AppError> {
    stored.iter().find(|thing| thing.id == id).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Must-visit item '{}' does not exist on this blog",
            id
        ))
    })
}

/// Blog document with its must-visit list.
#[derive(Debug, Clone, PartialEq)]
pub struct Blog {
    pub id: i32,
    pub title: String,
    pub city_id: i32,
    /// Snapshot of the city name, refreshed whenever `city_id` changes.
    pub city_name: String,
    pub background_image: String,
    pub content: String,
    pub must_visit: Vec<MustVisitThing>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    pub fn from_entity(entity: entity::blog::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            title: entity.title,
            city_id: entity.city_id,
            city_name: entity.city_name,
            background_image: entity.background_image,
            content: entity.content,
            must_visit: decode_column(entity.must_visit, "must_visit")?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> BlogDto {
        BlogDto {
            id: self.id,
            title: self.title,
            city_id: self.city_id,
            city_name: self.city_name,
            background_image: self.background_image,
            content: self.content,
            must_visit: self
                .must_visit
                .into_iter()
                .map(MustVisitThing::into_dto)
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a blog.
#[derive(Debug, Clone)]
pub struct CreateBlogParams {
    pub title: String,
    pub city_id: i32,
    pub content: String,
    pub background_image: String,
    pub must_visit: Vec<MustVisitThing>,
}

impl CreateBlogParams {
    pub fn from_form(form: &FormData) -> Result<Self, AppError> {
        let background_image = form
            .file("backgroundImage")
            .ok_or_else(|| AppError::BadRequest("backgroundImage is required".to_string()))
            .and_then(|file| image::ingest(file, BLOG_IMAGE_LIMIT))?;

        let items = must_visit_from_form(form)?.unwrap_or_default();
        let images = must_visit_images_from_form(form)?;

        Ok(Self {
            title: form.required_text("title")?,
            city_id: form.required_parse("cityId")?,
            content: form.text("content").unwrap_or_default(),
            background_image: background_image.data,
            must_visit: pair_must_visit(items, images)?,
        })
    }
}

/// Parameters for updating a blog. Absent fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateBlogParams {
    pub id: i32,
    pub title: Option<String>,
    pub city_id: Option<i32>,
    pub content: Option<String>,
    pub background_image: Option<String>,
    /// Complete new must-visit list; `None` leaves the stored list untouched.
    pub must_visit: Option<Vec<MustVisitInput>>,
    pub must_visit_images: Vec<String>,
    pub image_map: Option<HashMap<String, usize>>,
}

impl UpdateBlogParams {
    pub fn from_form(id: i32, form: &FormData) -> Result<Self, AppError> {
        Ok(Self {
            id,
            title: form.text("title"),
            city_id: form.parse("cityId")?,
            content: form.raw_text("content"),
            background_image: form
                .file("backgroundImage")
                .map(|file| image::ingest(file, BLOG_IMAGE_LIMIT).map(|image| image.data))
                .transpose()?,
            must_visit: must_visit_from_form(form)?,
            must_visit_images: must_visit_images_from_form(form)?,
            image_map: form.json("imageMap")?,
        })
    }

    /// Applies every field except the city reference, which the service resolves.
    pub fn apply_to(self, blog: &mut Blog) -> Result<(), AppError> {
        match self.must_visit {
            Some(items) => {
                blog.must_visit = merge_must_visit(
                    &blog.must_visit,
                    items,
                    self.must_visit_images,
                    self.image_map.as_ref(),
                )?;
            }
            None if !self.must_visit_images.is_empty() => {
                return Err(AppError::BadRequest(
                    "mustVisitData is required when uploading must-visit images".to_string(),
                ));
            }
            None => {}
        }

        if let Some(title) = self.title {
            blog.title = title;
        }
        if let Some(content) = self.content {
            blog.content = content;
        }
        if let Some(background_image) = self.background_image {
            blog.background_image = background_image;
        }

        Ok(())
    }
}

fn must_visit_from_form(form: &FormData) -> Result<Option<Vec<MustVisitInput>>, AppError> {
    Ok(form
        .json::<Vec<MustVisitInputDto>>("mustVisitData")?
        .map(|items| items.into_iter().map(MustVisitInput::from_dto).collect()))
}

fn must_visit_images_from_form(form: &FormData) -> Result<Vec<String>, AppError> {
    Ok(
        image::ingest_all(form.files("mustVisitImages"), BLOG_IMAGE_LIMIT)?
            .into_iter()
            .map(|image| image.data)
            .collect(),
    )
}
