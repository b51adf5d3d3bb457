use sea_orm::DatabaseConnection;

use crate::server::{
    data::blog::BlogRepository,
    error::AppError,
    model::blog::{Blog, CreateBlogParams, UpdateBlogParams},
    service::city::city_name,
};

pub struct BlogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all blogs, optionally limited to one city
    pub async fn get_all(&self, city_id: Option<i32>) -> Result<Vec<Blog>, AppError> {
        Ok(BlogRepository::new(self.db).get_all(city_id).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Blog, AppError> {
        BlogRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))
    }

    pub async fn create(&self, params: CreateBlogParams) -> Result<Blog, AppError> {
        let city_name = city_name(self.db, params.city_id).await?;

        let blog = BlogRepository::new(self.db)
            .create(params, city_name)
            .await?;

        tracing::info!(blog_id = blog.id, must_visit = blog.must_visit.len(), "Created blog");

        Ok(blog)
    }

    /// Merges the update into the stored blog and writes it back
    ///
    /// A merge that fails validation returns before anything is written.
    pub async fn update(&self, params: UpdateBlogParams) -> Result<Blog, AppError> {
        let mut blog = self.get_by_id(params.id).await?;

        if let Some(city_id) = params.city_id.filter(|&id| id != blog.city_id) {
            blog.city_name = city_name(self.db, city_id).await?;
            blog.city_id = city_id;
        }

        params.apply_to(&mut blog)?;

        Ok(BlogRepository::new(self.db).update(&blog).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !BlogRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Blog not found".to_string()));
        }

        Ok(())
    }
}
