//! City factory for creating test city rows.

use crate::factory::helpers::{next_id, TEST_IMAGE};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating test cities with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::city::CityFactory;
///
/// let city = CityFactory::new(&db)
///     .name("Goa")
///     .active(false)
///     .build()
///     .await?;
/// ```
pub struct CityFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    is_active: bool,
    things_to_do: serde_json::Value,
}

impl<'a> CityFactory<'a> {
    /// Creates a new CityFactory with default values.
    ///
    /// Defaults:
    /// - name: `"City {id}"` where id is auto-incremented
    /// - is_active: `true`
    /// - things_to_do: empty list
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("City {}", id),
            is_active: true,
            things_to_do: json!([]),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets the raw JSON stored in the `things_to_do` column.
    pub fn things_to_do(mut self, things_to_do: serde_json::Value) -> Self {
        self.things_to_do = things_to_do;
        self
    }

    /// Builds and inserts the city into the database.
    ///
    /// # Returns
    /// - `Ok(entity::city::Model)` - Created city
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::city::Model, DbErr> {
        let now = Utc::now();

        entity::city::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            image: ActiveValue::Set(TEST_IMAGE.to_string()),
            is_active: ActiveValue::Set(self.is_active),
            things_to_do: ActiveValue::Set(self.things_to_do),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active city with default values.
///
/// Shorthand for `CityFactory::new(db).build().await`.
pub async fn create_city(db: &DatabaseConnection) -> Result<entity::city::Model, DbErr> {
    CityFactory::new(db).build().await
}
