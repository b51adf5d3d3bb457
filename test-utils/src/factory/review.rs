//! Review factory for creating standalone test reviews.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating standalone reviews with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::review::ReviewFactory;
///
/// let review = ReviewFactory::new(&db, &city)
///     .property(&property)
///     .rating(4)
///     .build()
///     .await?;
/// ```
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    rating: i32,
    is_active: bool,
    city_id: i32,
    city_name: String,
    property_id: Option<i32>,
    property_name: Option<String>,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Reviewer {id}"` where id is auto-incremented
    /// - rating: `5`
    /// - is_active: `true`
    /// - no property
    pub fn new(db: &'a DatabaseConnection, city: &entity::city::Model) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Reviewer {}", id),
            rating: 5,
            is_active: true,
            city_id: city.id,
            city_name: city.name.clone(),
            property_id: None,
            property_name: None,
        }
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Attaches the review to a property, snapshotting its name.
    pub fn property(mut self, property: &entity::property::Model) -> Self {
        self.property_id = Some(property.id);
        self.property_name = Some(property.name.clone());
        self
    }

    /// Builds and inserts the review into the database.
    ///
    /// # Returns
    /// - `Ok(entity::review::Model)` - Created review
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        let now = Utc::now();

        entity::review::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            profile_image: ActiveValue::Set(None),
            rating: ActiveValue::Set(self.rating),
            description: ActiveValue::Set("Lovely stay".to_string()),
            source: ActiveValue::Set("google".to_string()),
            is_active: ActiveValue::Set(self.is_active),
            city_id: ActiveValue::Set(self.city_id),
            city_name: ActiveValue::Set(self.city_name),
            property_id: ActiveValue::Set(self.property_id),
            property_name: ActiveValue::Set(self.property_name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active five-star review for a city.
pub async fn create_review(
    db: &DatabaseConnection,
    city: &entity::city::Model,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, city).build().await
}
