use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::review::{CreateReviewParams, Review, ReviewSnapshot};

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a review with the name snapshots resolved by the caller.
    pub async fn create(
        &self,
        params: CreateReviewParams,
        snapshot: ReviewSnapshot,
    ) -> Result<Review, DbErr> {
        let now = Utc::now();

        let review = entity::review::ActiveModel {
            name: ActiveValue::Set(params.name),
            profile_image: ActiveValue::Set(params.profile_image),
            rating: ActiveValue::Set(i32::from(params.rating)),
            description: ActiveValue::Set(params.description),
            source: ActiveValue::Set(params.source.as_str().to_string()),
            is_active: ActiveValue::Set(params.is_active),
            city_id: ActiveValue::Set(params.city_id),
            city_name: ActiveValue::Set(snapshot.city_name),
            property_id: ActiveValue::Set(params.property_id),
            property_name: ActiveValue::Set(snapshot.property_name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Review::from_entity(review)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Review>, DbErr> {
        entity::prelude::Review::find_by_id(id)
            .one(self.db)
            .await?
            .map(Review::from_entity)
            .transpose()
    }

    /// Gets reviews newest first, optionally filtered by city and property.
    pub async fn get_all(
        &self,
        city_id: Option<i32>,
        property_id: Option<i32>,
    ) -> Result<Vec<Review>, DbErr> {
        let mut query = entity::prelude::Review::find();

        if let Some(city_id) = city_id {
            query = query.filter(entity::review::Column::CityId.eq(city_id));
        }
        if let Some(property_id) = property_id {
            query = query.filter(entity::review::Column::PropertyId.eq(property_id));
        }

        query
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Review::from_entity)
            .collect()
    }

    pub async fn update(&self, review: &Review) -> Result<Review, DbErr> {
        let updated = entity::review::ActiveModel {
            id: ActiveValue::Unchanged(review.id),
            name: ActiveValue::Set(review.name.clone()),
            profile_image: ActiveValue::Set(review.profile_image.clone()),
            rating: ActiveValue::Set(i32::from(review.rating)),
            description: ActiveValue::Set(review.description.clone()),
            source: ActiveValue::Set(review.source.as_str().to_string()),
            is_active: ActiveValue::Set(review.is_active),
            city_id: ActiveValue::Set(review.city_id),
            city_name: ActiveValue::Set(review.city_name.clone()),
            property_id: ActiveValue::Set(review.property_id),
            property_name: ActiveValue::Set(review.property_name.clone()),
            created_at: ActiveValue::Unchanged(review.created_at),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .update(self.db)
        .await?;

        Review::from_entity(updated)
    }

    /// Detaches every review from a property that is being deleted.
    ///
    /// Clears the property reference together with its name snapshot.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of reviews detached
    pub async fn detach_property(&self, property_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Review::update_many()
            .col_expr(entity::review::Column::PropertyId, Expr::value(Option::<i32>::None))
            .col_expr(
                entity::review::Column::PropertyName,
                Expr::value(Option::<String>::None),
            )
            .filter(entity::review::Column::PropertyId.eq(property_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Review::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
