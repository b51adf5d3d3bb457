use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    document::encode_column,
    property::{recompute_rating, CreatePropertyParams, Property},
};

pub struct PropertyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PropertyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a property document with the rating derived from its initial reviews.
    ///
    /// # Arguments
    /// - `params` - Fields and embedded lists of the new property
    /// - `city_name` - Snapshot of the referenced city's name
    pub async fn create(
        &self,
        params: CreatePropertyParams,
        city_name: String,
    ) -> Result<Property, DbErr> {
        let rating = recompute_rating(&params.reviews);
        let now = Utc::now();

        let property = entity::property::ActiveModel {
            name: ActiveValue::Set(params.name),
            city_id: ActiveValue::Set(params.city_id),
            city_name: ActiveValue::Set(city_name),
            guests: ActiveValue::Set(i64::from(params.guests)),
            rooms: ActiveValue::Set(i64::from(params.rooms)),
            baths: ActiveValue::Set(i64::from(params.baths)),
            beds: ActiveValue::Set(i64::from(params.beds)),
            price_min: ActiveValue::Set(params.price_min),
            price_max: ActiveValue::Set(params.price_max),
            description: ActiveValue::Set(params.description),
            brochure_link: ActiveValue::Set(params.brochure_link),
            video_link: ActiveValue::Set(params.video_link),
            map_link: ActiveValue::Set(params.map_link),
            amenities: ActiveValue::Set(encode_column(&params.amenities, "amenities")?),
            images: ActiveValue::Set(encode_column(&params.images, "images")?),
            reviews: ActiveValue::Set(encode_column(&params.reviews, "reviews")?),
            rating_average: ActiveValue::Set(rating.average),
            rating_count: ActiveValue::Set(rating.count as i32),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Property::from_entity(property)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Property>, DbErr> {
        entity::prelude::Property::find_by_id(id)
            .one(self.db)
            .await?
            .map(Property::from_entity)
            .transpose()
    }

    /// Gets all properties, newest first, optionally limited to one city.
    pub async fn get_all(&self, city_id: Option<i32>) -> Result<Vec<Property>, DbErr> {
        let mut query = entity::prelude::Property::find();

        if let Some(city_id) = city_id {
            query = query.filter(entity::property::Column::CityId.eq(city_id));
        }

        query
            .order_by_desc(entity::property::Column::CreatedAt)
            .order_by_desc(entity::property::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Property::from_entity)
            .collect()
    }

    /// Writes the whole document back, including the embedded lists and the rating.
    ///
    /// This is the single commit point of every property mutation.
    pub async fn update(&self, property: &Property) -> Result<Property, DbErr> {
        let rating = property.rating();

        let updated = entity::property::ActiveModel {
            id: ActiveValue::Unchanged(property.id),
            name: ActiveValue::Set(property.name.clone()),
            city_id: ActiveValue::Set(property.city_id),
            city_name: ActiveValue::Set(property.city_name.clone()),
            guests: ActiveValue::Set(i64::from(property.guests)),
            rooms: ActiveValue::Set(i64::from(property.rooms)),
            baths: ActiveValue::Set(i64::from(property.baths)),
            beds: ActiveValue::Set(i64::from(property.beds)),
            price_min: ActiveValue::Set(property.price_min),
            price_max: ActiveValue::Set(property.price_max),
            description: ActiveValue::Set(property.description.clone()),
            brochure_link: ActiveValue::Set(property.brochure_link.clone()),
            video_link: ActiveValue::Set(property.video_link.clone()),
            map_link: ActiveValue::Set(property.map_link.clone()),
            amenities: ActiveValue::Set(encode_column(&property.amenities, "amenities")?),
            images: ActiveValue::Set(encode_column(&property.images, "images")?),
            reviews: ActiveValue::Set(encode_column(property.reviews(), "reviews")?),
            rating_average: ActiveValue::Set(rating.average),
            rating_count: ActiveValue::Set(rating.count as i32),
            created_at: ActiveValue::Unchanged(property.created_at),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .update(self.db)
        .await?;

        Property::from_entity(updated)
    }

    /// Deletes a property.
    ///
    /// # Returns
    /// - `Ok(true)` - The property existed and was deleted
    /// - `Ok(false)` - No property with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Property::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
