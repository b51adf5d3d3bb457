use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::banner::BannerType,
    server::model::banner::{Banner, CreateBannerParams},
};

pub struct BannerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BannerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateBannerParams) -> Result<Banner, DbErr> {
        let now = Utc::now();

        let banner = entity::banner::ActiveModel {
            title: ActiveValue::Set(params.title),
            subtitle: ActiveValue::Set(params.subtitle),
            image: ActiveValue::Set(params.image),
            banner_type: ActiveValue::Set(params.banner_type.as_str().to_string()),
            is_active: ActiveValue::Set(params.is_active),
            display_order: ActiveValue::Set(params.display_order),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Banner::from_entity(banner)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Banner>, DbErr> {
        entity::prelude::Banner::find_by_id(id)
            .one(self.db)
            .await?
            .map(Banner::from_entity)
            .transpose()
    }

    /// Gets all banners ordered by display order, then by id.
    pub async fn get_all(&self) -> Result<Vec<Banner>, DbErr> {
        entity::prelude::Banner::find()
            .order_by_asc(entity::banner::Column::DisplayOrder)
            .order_by_asc(entity::banner::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Banner::from_entity)
            .collect()
    }

    /// Gets the active banners shown on a screen class.
    ///
    /// Banners of type `both` are included for every requested type.
    pub async fn get_active_by_type(&self, banner_type: BannerType) -> Result<Vec<Banner>, DbErr> {
        entity::prelude::Banner::find()
            .filter(entity::banner::Column::IsActive.eq(true))
            .filter(
                Condition::any()
                    .add(entity::banner::Column::BannerType.eq(banner_type.as_str()))
                    .add(entity::banner::Column::BannerType.eq(BannerType::Both.as_str())),
            )
            .order_by_asc(entity::banner::Column::DisplayOrder)
            .order_by_asc(entity::banner::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Banner::from_entity)
            .collect()
    }

    pub async fn update(&self, banner: &Banner) -> Result<Banner, DbErr> {
        let updated = entity::banner::ActiveModel {
            id: ActiveValue::Unchanged(banner.id),
            title: ActiveValue::Set(banner.title.clone()),
            subtitle: ActiveValue::Set(banner.subtitle.clone()),
            image: ActiveValue::Set(banner.image.clone()),
            banner_type: ActiveValue::Set(banner.banner_type.as_str().to_string()),
            is_active: ActiveValue::Set(banner.is_active),
            display_order: ActiveValue::Set(banner.display_order),
            created_at: ActiveValue::Unchanged(banner.created_at),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .update(self.db)
        .await?;

        Banner::from_entity(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Banner::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
