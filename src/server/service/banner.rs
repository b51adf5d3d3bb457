use sea_orm::DatabaseConnection;

use crate::{
    model::banner::BannerType,
    server::{
        data::banner::BannerRepository,
        error::AppError,
        model::banner::{Banner, CreateBannerParams, UpdateBannerParams},
    },
};

pub struct BannerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BannerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Banner>, AppError> {
        Ok(BannerRepository::new(self.db).get_all().await?)
    }

    /// Gets active banners for a screen class, including those shown on both
    pub async fn get_by_type(&self, banner_type: BannerType) -> Result<Vec<Banner>, AppError> {
        Ok(BannerRepository::new(self.db)
            .get_active_by_type(banner_type)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Banner, AppError> {
        BannerRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Banner not found".to_string()))
    }

    pub async fn create(&self, params: CreateBannerParams) -> Result<Banner, AppError> {
        let banner = BannerRepository::new(self.db).create(params).await?;

        tracing::info!(banner_id = banner.id, "Created banner");

        Ok(banner)
    }

    pub async fn update(&self, params: UpdateBannerParams) -> Result<Banner, AppError> {
        let mut banner = self.get_by_id(params.id).await?;

        params.apply_to(&mut banner);

        Ok(BannerRepository::new(self.db).update(&banner).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !BannerRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Banner not found".to_string()));
        }

        Ok(())
    }
}
