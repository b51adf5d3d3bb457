use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    blog::{Blog, CreateBlogParams},
    document::encode_column,
};

pub struct BlogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateBlogParams, city_name: String) -> Result<Blog, DbErr> {
        let now = Utc::now();

        let blog = entity::blog::ActiveModel {
            title: ActiveValue::Set(params.title),
            city_id: ActiveValue::Set(params.city_id),
            city_name: ActiveValue::Set(city_name),
            background_image: ActiveValue::Set(params.background_image),
            content: ActiveValue::Set(params.content),
            must_visit: ActiveValue::Set(encode_column(&params.must_visit, "must_visit")?),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Blog::from_entity(blog)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Blog>, DbErr> {
        entity::prelude::Blog::find_by_id(id)
            .one(self.db)
            .await?
            .map(Blog::from_entity)
            .transpose()
    }

    /// Gets all blogs, newest first, optionally limited to one city.
    pub async fn get_all(&self, city_id: Option<i32>) -> Result<Vec<Blog>, DbErr> {
        let mut query = entity::prelude::Blog::find();

        if let Some(city_id) = city_id {
            query = query.filter(entity::blog::Column::CityId.eq(city_id));
        }

        query
            .order_by_desc(entity::blog::Column::CreatedAt)
            .order_by_desc(entity::blog::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Blog::from_entity)
            .collect()
    }

    /// Writes the whole blog back, replacing the stored must-visit list.
    pub async fn update(&self, blog: &Blog) -> Result<Blog, DbErr> {
        let updated = entity::blog::ActiveModel {
            id: ActiveValue::Unchanged(blog.id),
            title: ActiveValue::Set(blog.title.clone()),
            city_id: ActiveValue::Set(blog.city_id),
            city_name: ActiveValue::Set(blog.city_name.clone()),
            background_image: ActiveValue::Set(blog.background_image.clone()),
            content: ActiveValue::Set(blog.content.clone()),
            must_visit: ActiveValue::Set(encode_column(&blog.must_visit, "must_visit")?),
            created_at: ActiveValue::Unchanged(blog.created_at),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .update(self.db)
        .await?;

        Blog::from_entity(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Blog::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
