//! Property aggregate and its embedded reviews.
//!
//! A property owns its amenities, images and reviews. The aggregate rating is derived
//! from the embedded reviews: the review list and the rating are private to
//! `Property` and every method that touches the list finishes by calling
//! `recompute_rating`, so a loaded or mutated property can never carry a stale rating.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    model::{
        property::{
            AmenityDto, ImageDto, PropertyDto, PropertyReviewDto, PropertyReviewInputDto,
            RatingDto,
        },
        review::ReviewSource,
    },
    server::{
        error::AppError,
        model::document::decode_column,
        util::{
            image::{self, InlineImage, IMAGE_LIMIT, PROFILE_IMAGE_LIMIT},
            multipart::FormData,
        },
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

impl Amenity {
    pub fn from_dto(dto: AmenityDto) -> Result<Self, AppError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Amenity name is required".to_string()));
        }

        Ok(Self {
            name,
            icon: dto.icon.trim().to_string(),
        })
    }

    pub fn into_dto(self) -> AmenityDto {
        AmenityDto {
            name: self.name,
            icon: self.icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyImage {
    pub data: String,
    pub content_type: String,
}

impl From<InlineImage> for PropertyImage {
    fn from(image: InlineImage) -> Self {
        Self {
            data: image.data,
            content_type: image.content_type,
        }
    }
}

impl PropertyImage {
    pub fn into_dto(self) -> ImageDto {
        ImageDto {
            data: self.data,
            content_type: self.content_type,
        }
    }
}

/// Review embedded in a property document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyReview {
    pub id: String,
    pub name: String,
    pub profile_image: Option<String>,
    pub rating: u8,
    pub description: String,
    #[serde(default)]
    pub source: ReviewSource,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl PropertyReview {
    /// Builds a new review with a fresh identifier.
    pub fn new(params: PropertyReviewParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: params.name,
            profile_image: params.profile_image,
            rating: params.rating,
            description: params.description,
            source: params.source,
            is_active: params.is_active,
            created_at: Utc::now(),
        }
    }

    /// Converts an entry of a bulk `reviews` payload.
    ///
    /// Entries without an id are new reviews and get a fresh id and timestamp.
    pub fn from_input(dto: PropertyReviewInputDto) -> Result<Self, AppError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Review name is required".to_string()));
        }

        Ok(Self {
            id: dto
                .id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            name,
            profile_image: dto.profile_image.filter(|image| !image.is_empty()),
            rating: validate_rating(dto.rating)?,
            description: dto.description,
            source: dto.source,
            is_active: dto.is_active.unwrap_or(true),
            created_at: dto.created_at.unwrap_or_else(Utc::now),
        })
    }

    /// Applies only the fields present in the patch.
    fn apply(&mut self, patch: PropertyReviewPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(profile_image) = patch.profile_image {
            self.profile_image = Some(profile_image);
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(source) = patch.source {
            self.source = source;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
    }

    pub fn into_dto(self) -> PropertyReviewDto {
        PropertyReviewDto {
            id: self.id,
            name: self.name,
            profile_image: self.profile_image,
            rating: self.rating,
            description: self.description,
            source: self.source,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

/// Aggregate rating over the active embedded reviews.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rating {
    /// Raw arithmetic mean of active ratings, 0 when there are none.
    pub average: f64,
    /// Number of active reviews.
    pub count: u32,
}

impl Rating {
    pub fn into_dto(self) -> RatingDto {
        RatingDto {
            average: self.average,
            count: self.count,
        }
    }
}

/// Derives the aggregate rating from a review list.
///
/// Only reviews with `is_active` count. The average is not rounded.
pub fn recompute_rating(reviews: &[PropertyReview]) -> Rating {
    let (sum, count) = reviews
        .iter()
        .filter(|review| review.is_active)
        .fold((0u32, 0u32), |(sum, count), review| {
            (sum + u32::from(review.rating), count + 1)
        });

    if count == 0 {
        return Rating::default();
    }

    Rating {
        average: f64::from(sum) / f64::from(count),
        count,
    }
}

/// Checks that a review rating is within 1 to 5.
pub fn validate_rating(rating: u8) -> Result<u8, AppError> {
    if (1..=5).contains(&rating) {
        Ok(rating)
    } else {
        Err(AppError::BadRequest(format!(
            "Rating must be between 1 and 5, got {}",
            rating
        )))
    }
}

fn validate_price_range(price_min: f64, price_max: f64) -> Result<(), AppError> {
    if !price_min.is_finite() || !price_max.is_finite() || price_min < 0.0 || price_max < 0.0 {
        return Err(AppError::BadRequest(
            "Prices must be non-negative numbers".to_string(),
        ));
    }
    if price_min > price_max {
        return Err(AppError::BadRequest(format!(
            "priceMin ({}) cannot exceed priceMax ({})",
            price_min, price_max
        )));
    }
    Ok(())
}

/// Property document with its embedded lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: i32,
    pub name: String,
    pub city_id: i32,
    /// Snapshot of the city name, refreshed whenever `city_id` changes.
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
    pub amenities: Vec<Amenity>,
    pub images: Vec<PropertyImage>,
    reviews: Vec<PropertyReview>,
    rating: Rating,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    pub fn reviews(&self) -> &[PropertyReview] {
        &self.reviews
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    /// Appends a review to the end of the list.
    pub fn add_review(&mut self, review: PropertyReview) -> &PropertyReview {
        self.reviews.push(review);
        self.rating = recompute_rating(&self.reviews);

        &self.reviews[self.reviews.len() - 1]
    }

    /// Applies a partial update to the review with the given id.
    ///
    /// # Returns
    /// - `Ok(&PropertyReview)` - The review after the update
    /// - `Err(AppError::NotFound)` - No embedded review has that id; nothing changed
    pub fn edit_review(
        &mut self,
        review_id: &str,
        patch: PropertyReviewPatch,
    ) -> Result<&PropertyReview, AppError> {
        let index = self.review_index(review_id)?;

        self.reviews[index].apply(patch);
        self.rating = recompute_rating(&self.reviews);

        Ok(&self.reviews[index])
    }

    /// Removes the review with the given id, keeping the order of the rest.
    ///
    /// # Returns
    /// - `Ok(PropertyReview)` - The removed review
    /// - `Err(AppError::NotFound)` - No embedded review has that id; nothing changed
    pub fn remove_review(&mut self, review_id: &str) -> Result<PropertyReview, AppError> {
        let index = self.review_index(review_id)?;

        let removed = self.reviews.remove(index);
        self.rating = recompute_rating(&self.reviews);

        Ok(removed)
    }

    /// Replaces the whole review list.
    pub fn replace_reviews(&mut self, reviews: Vec<PropertyReview>) {
        self.reviews = reviews;
        self.rating = recompute_rating(&self.reviews);
    }

    /// Removes images by their position in the current list.
    ///
    /// Every index is checked before anything is removed; duplicates are ignored.
    pub fn remove_images(&mut self, indexes: &[usize]) -> Result<(), AppError> {
        if let Some(index) = indexes.iter().find(|&&index| index >= self.images.len()) {
            return Err(AppError::BadRequest(format!(
                "Cannot remove image {}: property has {} images",
                index,
                self.images.len()
            )));
        }

        let mut indexes = indexes.to_vec();
        indexes.sort_unstable();
        indexes.dedup();

        for index in indexes.into_iter().rev() {
            self.images.remove(index);
        }

        Ok(())
    }

    fn review_index(&self, review_id: &str) -> Result<usize, AppError> {
        self.reviews
            .iter()
            .position(|review| review.id == review_id)
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))
    }

    /// Converts an entity model at the repository boundary.
    ///
    /// The rating is recomputed from the decoded reviews rather than trusted from the
    /// stored columns.
    ///
    /// # Returns
    /// - `Ok(Property)` - Decoded document
    /// - `Err(DbErr::Json)` - A JSON column does not hold the expected shape
    pub fn from_entity(entity: entity::property::Model) -> Result<Self, DbErr> {
        let reviews: Vec<PropertyReview> = decode_column(entity.reviews, "reviews")?;
        let rating = recompute_rating(&reviews);

        Ok(Self {
            id: entity.id,
            name: entity.name,
            city_id: entity.city_id,
            city_name: entity.city_name,
            guests: stored_count(entity.guests, "guests")?,
            rooms: stored_count(entity.rooms, "rooms")?,
            baths: stored_count(entity.baths, "baths")?,
            beds: stored_count(entity.beds, "beds")?,
            price_min: entity.price_min,
            price_max: entity.price_max,
            description: entity.description,
            brochure_link: entity.brochure_link,
            video_link: entity.video_link,
            map_link: entity.map_link,
            amenities: decode_column(entity.amenities, "amenities")?,
            images: decode_column(entity.images, "images")?,
            reviews,
            rating,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> PropertyDto {
        PropertyDto {
            id: self.id,
            name: self.name,
            city_id: self.city_id,
            city_name: self.city_name,
            guests: self.guests,
            rooms: self.rooms,
            baths: self.baths,
            beds: self.beds,
            price_min: self.price_min,
            price_max: self.price_max,
            description: self.description,
            brochure_link: self.brochure_link,
            video_link: self.video_link,
            map_link: self.map_link,
            amenities: self.amenities.into_iter().map(Amenity::into_dto).collect(),
            images: self.images.into_iter().map(PropertyImage::into_dto).collect(),
            reviews: self
                .reviews
                .into_iter()
                .map(PropertyReview::into_dto)
                .collect(),
            rating: self.rating.into_dto(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Reads a non-negative count column back into its domain width.
fn stored_count(value: i64, column: &str) -> Result<u32, DbErr> {
    u32::try_from(value)
        .map_err(|_| DbErr::Custom(format!("Invalid {} value {} in property row", column, value)))
}

/// Parameters for creating a property.
#[derive(Debug, Clone)]
pub struct CreatePropertyParams {
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
    pub amenities: Vec<Amenity>,
    pub images: Vec<PropertyImage>,
    pub reviews: Vec<PropertyReview>,
}

impl CreatePropertyParams {
    /// Reads create parameters from a multipart form.
    ///
    /// `amenities` and `reviews` are JSON-encoded fields; `images` files are inlined.
    pub fn from_form(form: &FormData) -> Result<Self, AppError> {
        let price_min = form.required_parse::<f64>("priceMin")?;
        let price_max = form.required_parse::<f64>("priceMax")?;
        validate_price_range(price_min, price_max)?;

        Ok(Self {
            name: form.required_text("name")?,
            city_id: form.required_parse("cityId")?,
            guests: form.parse("guests")?.unwrap_or(0),
            rooms: form.parse("rooms")?.unwrap_or(0),
            baths: form.parse("baths")?.unwrap_or(0),
            beds: form.parse("beds")?.unwrap_or(0),
            price_min,
            price_max,
            description: form.text("description").unwrap_or_default(),
            brochure_link: form.text("brochureLink"),
            video_link: form.text("videoLink"),
            map_link: form.text("mapLink"),
            amenities: amenities_from_form(form)?.unwrap_or_default(),
            images: images_from_form(form)?,
            reviews: reviews_from_form(form)?.unwrap_or_default(),
        })
    }
}

/// Parameters for a partial property update.
///
/// `None` leaves a field untouched. For the optional links `Some(None)` clears the link.
#[derive(Debug, Clone, Default)]
pub struct UpdatePropertyParams {
    pub id: i32,
    pub name: Option<String>,
    pub city_id: Option<i32>,
    pub guests: Option<u32>,
    pub rooms: Option<u32>,
    pub baths: Option<u32>,
    pub beds: Option<u32>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub description: Option<String>,
    pub brochure_link: Option<Option<String>>,
    pub video_link: Option<Option<String>>,
    pub map_link: Option<Option<String>>,
    pub amenities: Option<Vec<Amenity>>,
    pub reviews: Option<Vec<PropertyReview>>,
    /// Image positions to delete, applied before `new_images` are appended.
    pub remove_images: Vec<usize>,
    pub new_images: Vec<PropertyImage>,
}

impl UpdatePropertyParams {
    pub fn from_form(id: i32, form: &FormData) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: form.text("name"),
            city_id: form.parse("cityId")?,
            guests: form.parse("guests")?,
            rooms: form.parse("rooms")?,
            baths: form.parse("baths")?,
            beds: form.parse("beds")?,
            price_min: form.parse("priceMin")?,
            price_max: form.parse("priceMax")?,
            description: form.raw_text("description"),
            brochure_link: optional_link(form, "brochureLink"),
            video_link: optional_link(form, "videoLink"),
            map_link: optional_link(form, "mapLink"),
            amenities: amenities_from_form(form)?,
            reviews: reviews_from_form(form)?,
            remove_images: parse_index_list(form.text("removeImages").as_deref())?,
            new_images: images_from_form(form)?,
        })
    }

    /// Applies every field except the city reference, which the service resolves.
    ///
    /// Nothing is written when validation fails, but the in-memory property may have
    /// been partially changed; callers discard it in that case.
    pub fn apply_to(self, property: &mut Property) -> Result<(), AppError> {
        let price_min = self.price_min.unwrap_or(property.price_min);
        let price_max = self.price_max.unwrap_or(property.price_max);
        validate_price_range(price_min, price_max)?;
        property.price_min = price_min;
        property.price_max = price_max;

        if let Some(name) = self.name {
            property.name = name;
        }
        if let Some(guests) = self.guests {
            property.guests = guests;
        }
        if let Some(rooms) = self.rooms {
            property.rooms = rooms;
        }
        if let Some(baths) = self.baths {
            property.baths = baths;
        }
        if let Some(beds) = self.beds {
            property.beds = beds;
        }
        if let Some(description) = self.description {
            property.description = description;
        }
        if let Some(link) = self.brochure_link {
            property.brochure_link = link;
        }
        if let Some(link) = self.video_link {
            property.video_link = link;
        }
        if let Some(link) = self.map_link {
            property.map_link = link;
        }
        if let Some(amenities) = self.amenities {
            property.amenities = amenities;
        }
        if let Some(reviews) = self.reviews {
            property.replace_reviews(reviews);
        }

        property.remove_images(&self.remove_images)?;
        property.images.extend(self.new_images);

        Ok(())
    }
}

/// Fields of a new embedded review.
#[derive(Debug, Clone)]
pub struct PropertyReviewParams {
    pub name: String,
    pub profile_image: Option<String>,
    pub rating: u8,
    pub description: String,
    pub source: ReviewSource,
    pub is_active: bool,
}

impl PropertyReviewParams {
    pub fn from_form(form: &FormData) -> Result<Self, AppError> {
        Ok(Self {
            name: form.required_text("name")?,
            profile_image: profile_image_from_form(form)?,
            rating: validate_rating(form.required_parse("rating")?)?,
            description: form.text("description").unwrap_or_default(),
            source: source_from_form(form)?.unwrap_or_default(),
            is_active: form.bool("isActive")?.unwrap_or(true),
        })
    }
}

/// Partial update of an embedded review; absent fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct PropertyReviewPatch {
    pub name: Option<String>,
    pub profile_image: Option<String>,
    pub rating: Option<u8>,
    pub description: Option<String>,
    pub source: Option<ReviewSource>,
    pub is_active: Option<bool>,
}

impl PropertyReviewPatch {
    pub fn from_form(form: &FormData) -> Result<Self, AppError> {
        Ok(Self {
            name: form.text("name"),
            profile_image: profile_image_from_form(form)?,
            rating: form.parse("rating")?.map(validate_rating).transpose()?,
            description: form.raw_text("description"),
            source: source_from_form(form)?,
            is_active: form.bool("isActive")?,
        })
    }
}

/// Reads the `profileImage` upload of a review form.
pub fn profile_image_from_form(form: &FormData) -> Result<Option<String>, AppError> {
    form.file("profileImage")
        .map(|file| image::ingest(file, PROFILE_IMAGE_LIMIT).map(|image| image.data))
        .transpose()
}

/// Reads the `source` field of a review form, where an empty value means direct entry.
pub fn source_from_form(form: &FormData) -> Result<Option<ReviewSource>, AppError> {
    form.raw_text("source")
        .map(|value| value.parse::<ReviewSource>().map_err(AppError::BadRequest))
        .transpose()
}

fn amenities_from_form(form: &FormData) -> Result<Option<Vec<Amenity>>, AppError> {
    form.json::<Vec<AmenityDto>>("amenities")?
        .map(|amenities| amenities.into_iter().map(Amenity::from_dto).collect())
        .transpose()
}

/// Reads the bulk `reviews` payload, rejecting ids that appear more than once.
fn reviews_from_form(form: &FormData) -> Result<Option<Vec<PropertyReview>>, AppError> {
    let Some(inputs) = form.json::<Vec<PropertyReviewInputDto>>("reviews")? else {
        return Ok(None);
    };

    let mut seen = HashSet::new();
    let mut reviews = Vec::with_capacity(inputs.len());
    for input in inputs {
        let review = PropertyReview::from_input(input)?;
        if !seen.insert(review.id.clone()) {
            return Err(AppError::BadRequest(format!(
                "Duplicate review id '{}' in reviews",
                review.id
            )));
        }
        reviews.push(review);
    }

    Ok(Some(reviews))
}

fn images_from_form(form: &FormData) -> Result<Vec<PropertyImage>, AppError> {
    Ok(image::ingest_all(form.files("images"), IMAGE_LIMIT)?
        .into_iter()
        .map(PropertyImage::from)
        .collect())
}

fn optional_link(form: &FormData, name: &str) -> Option<Option<String>> {
    form.raw_text(name)
        .map(|value| if value.is_empty() { None } else { Some(value) })
}

/// Parses a comma separated list of image positions such as `"0, 2,3"`.
pub fn parse_index_list(raw: Option<&str>) -> Result<Vec<usize>, AppError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<usize>().map_err(|_| {
                AppError::BadRequest(format!("Invalid image index '{}' in removeImages", part))
            })
        })
        .collect()
}
