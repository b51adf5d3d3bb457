use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    city::{City, CreateCityParams},
    document::encode_column,
};

pub struct CityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCityParams) -> Result<City, DbErr> {
        let now = Utc::now();

        let city = entity::city::ActiveModel {
            name: ActiveValue::Set(params.name),
            image: ActiveValue::Set(params.image),
            is_active: ActiveValue::Set(params.is_active),
            things_to_do: ActiveValue::Set(encode_column(&params.things_to_do, "things_to_do")?),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        City::from_entity(city)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<City>, DbErr> {
        entity::prelude::City::find_by_id(id)
            .one(self.db)
            .await?
            .map(City::from_entity)
            .transpose()
    }

    /// Gets only the name of a city, used for the name snapshots of referencing documents.
    pub async fn get_name(&self, id: i32) -> Result<Option<String>, DbErr> {
        Ok(entity::prelude::City::find_by_id(id)
            .one(self.db)
            .await?
            .map(|city| city.name))
    }

    /// Finds a city by exact name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<City>, DbErr> {
        entity::prelude::City::find()
            .filter(entity::city::Column::Name.eq(name))
            .one(self.db)
            .await?
            .map(City::from_entity)
            .transpose()
    }

    /// Gets all cities ordered by name.
    pub async fn get_all(&self) -> Result<Vec<City>, DbErr> {
        entity::prelude::City::find()
            .order_by_asc(entity::city::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(City::from_entity)
            .collect()
    }

    /// Gets active cities ordered by name.
    pub async fn get_active(&self) -> Result<Vec<City>, DbErr> {
        entity::prelude::City::find()
            .filter(entity::city::Column::IsActive.eq(true))
            .order_by_asc(entity::city::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(City::from_entity)
            .collect()
    }

    pub async fn update(&self, city: &City) -> Result<City, DbErr> {
        let updated = entity::city::ActiveModel {
            id: ActiveValue::Unchanged(city.id),
            name: ActiveValue::Set(city.name.clone()),
            image: ActiveValue::Set(city.image.clone()),
            is_active: ActiveValue::Set(city.is_active),
            things_to_do: ActiveValue::Set(encode_column(&city.things_to_do, "things_to_do")?),
            created_at: ActiveValue::Unchanged(city.created_at),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .update(self.db)
        .await?;

        City::from_entity(updated)
    }

    /// Sets the active flag of a city.
    ///
    /// # Returns
    /// - `Ok(Some(City))` - Updated city
    /// - `Ok(None)` - No city with that id
    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<Option<City>, DbErr> {
        let Some(city) = entity::prelude::City::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::city::ActiveModel = city.into();
        active_model.is_active = ActiveValue::Set(is_active);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        City::from_entity(updated).map(Some)
    }
}
