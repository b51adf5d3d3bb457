//! Blog factory for creating test blog documents.

use crate::factory::helpers::{next_id, TEST_IMAGE};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating test blogs with customizable fields.
pub struct BlogFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    city_id: i32,
    city_name: String,
    must_visit: serde_json::Value,
}

impl<'a> BlogFactory<'a> {
    /// Creates a new BlogFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Blog {id}"` where id is auto-incremented
    /// - must_visit: empty list
    pub fn new(db: &'a DatabaseConnection, city: &entity::city::Model) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Blog {}", id),
            city_id: city.id,
            city_name: city.name.clone(),
            must_visit: json!([]),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the raw JSON stored in the `must_visit` column.
    pub fn must_visit(mut self, must_visit: serde_json::Value) -> Self {
        self.must_visit = must_visit;
        self
    }

    /// Builds and inserts the blog into the database.
    ///
    /// # Returns
    /// - `Ok(entity::blog::Model)` - Created blog
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::blog::Model, DbErr> {
        let now = Utc::now();

        entity::blog::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            city_id: ActiveValue::Set(self.city_id),
            city_name: ActiveValue::Set(self.city_name),
            background_image: ActiveValue::Set(TEST_IMAGE.to_string()),
            content: ActiveValue::Set("<p>Guide</p>".to_string()),
            must_visit: ActiveValue::Set(self.must_visit),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a blog with no must-visit items for a city.
pub async fn create_blog(
    db: &DatabaseConnection,
    city: &entity::city::Model,
) -> Result<entity::blog::Model, DbErr> {
    BlogFactory::new(db, city).build().await
}

/// Builds the stored JSON of one must-visit item.
pub fn must_visit_json(id: &str, heading: &str, image: &str) -> serde_json::Value {
    json!({
        "id": id,
        "heading": heading,
        "description": "",
        "image": image,
    })
}
