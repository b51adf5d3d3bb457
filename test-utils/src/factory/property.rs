//! Property factory for creating test property documents.
//!
//! Embedded lists are supplied as raw JSON in the shape the server stores them. The
//! rating columns are filled by the caller; the server recomputes the rating on load,
//! so a factory-made row with a stale rating exercises that path.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating test properties with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::property::PropertyFactory;
///
/// let property = PropertyFactory::new(&db, city.id, &city.name)
///     .name("Sea View Villa")
///     .reviews(json!([{ "id": "r1", "name": "Asha", "rating": 5, ... }]))
///     .build()
///     .await?;
/// ```
pub struct PropertyFactory<'a> {
    db: &'a DatabaseConnection,
    city_id: i32,
    city_name: String,
    name: String,
    price_min: f64,
    price_max: f64,
    images: serde_json::Value,
    reviews: serde_json::Value,
    rating_average: f64,
    rating_count: i32,
}

impl<'a> PropertyFactory<'a> {
    /// Creates a new PropertyFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Property {id}"` where id is auto-incremented
    /// - prices: `100.0` to `200.0`
    /// - images, reviews, amenities: empty lists
    /// - rating: `0.0` over `0` reviews
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the row
    /// - `city_id` - City the property belongs to
    /// - `city_name` - City name snapshot stored on the property
    pub fn new(db: &'a DatabaseConnection, city_id: i32, city_name: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            city_id,
            city_name: city_name.into(),
            name: format!("Property {}", id),
            price_min: 100.0,
            price_max: 200.0,
            images: json!([]),
            reviews: json!([]),
            rating_average: 0.0,
            rating_count: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn prices(mut self, price_min: f64, price_max: f64) -> Self {
        self.price_min = price_min;
        self.price_max = price_max;
        self
    }

    /// Sets the raw JSON stored in the `images` column.
    pub fn images(mut self, images: serde_json::Value) -> Self {
        self.images = images;
        self
    }

    /// Sets the raw JSON stored in the `reviews` column.
    pub fn reviews(mut self, reviews: serde_json::Value) -> Self {
        self.reviews = reviews;
        self
    }

    /// Sets the stored rating columns without touching the review list.
    pub fn stored_rating(mut self, average: f64, count: i32) -> Self {
        self.rating_average = average;
        self.rating_count = count;
        self
    }

    /// Builds and inserts the property into the database.
    ///
    /// # Returns
    /// - `Ok(entity::property::Model)` - Created property
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::property::Model, DbErr> {
        let now = Utc::now();

        entity::property::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            city_id: ActiveValue::Set(self.city_id),
            city_name: ActiveValue::Set(self.city_name),
            guests: ActiveValue::Set(2),
            rooms: ActiveValue::Set(1),
            baths: ActiveValue::Set(1),
            beds: ActiveValue::Set(1),
            price_min: ActiveValue::Set(self.price_min),
            price_max: ActiveValue::Set(self.price_max),
            description: ActiveValue::Set(String::new()),
            brochure_link: ActiveValue::Set(None),
            video_link: ActiveValue::Set(None),
            map_link: ActiveValue::Set(None),
            amenities: ActiveValue::Set(json!([])),
            images: ActiveValue::Set(self.images),
            reviews: ActiveValue::Set(self.reviews),
            rating_average: ActiveValue::Set(self.rating_average),
            rating_count: ActiveValue::Set(self.rating_count),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a property with default values in the given city.
pub async fn create_property(
    db: &DatabaseConnection,
    city: &entity::city::Model,
) -> Result<entity::property::Model, DbErr> {
    PropertyFactory::new(db, city.id, &city.name).build().await
}

/// Builds the stored JSON of one embedded review.
pub fn review_json(id: &str, rating: u8, is_active: bool) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("Guest {}", id),
        "profileImage": null,
        "rating": rating,
        "description": "",
        "source": "",
        "isActive": is_active,
        "createdAt": Utc::now(),
    })
}
