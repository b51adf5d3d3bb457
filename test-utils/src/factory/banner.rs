//! Banner factory for creating test banners.

use crate::factory::helpers::{next_id, TEST_IMAGE};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test banners with customizable fields.
pub struct BannerFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    banner_type: String,
    is_active: bool,
    display_order: i32,
}

impl<'a> BannerFactory<'a> {
    /// Creates a new BannerFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Banner {id}"` where id is auto-incremented
    /// - banner_type: `"both"`
    /// - is_active: `true`
    /// - display_order: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Banner {}", id),
            banner_type: "both".to_string(),
            is_active: true,
            display_order: 0,
        }
    }

    /// Sets the stored type: `desktop`, `mobile` or `both`.
    pub fn banner_type(mut self, banner_type: impl Into<String>) -> Self {
        self.banner_type = banner_type.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn order(mut self, display_order: i32) -> Self {
        self.display_order = display_order;
        self
    }

    /// Builds and inserts the banner into the database.
    ///
    /// # Returns
    /// - `Ok(entity::banner::Model)` - Created banner
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::banner::Model, DbErr> {
        let now = Utc::now();

        entity::banner::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            subtitle: ActiveValue::Set(String::new()),
            image: ActiveValue::Set(TEST_IMAGE.to_string()),
            banner_type: ActiveValue::Set(self.banner_type),
            is_active: ActiveValue::Set(self.is_active),
            display_order: ActiveValue::Set(self.display_order),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active banner shown on every screen class.
pub async fn create_banner(db: &DatabaseConnection) -> Result<entity::banner::Model, DbErr> {
    BannerFactory::new(db).build().await
}
