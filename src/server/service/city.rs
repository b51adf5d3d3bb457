use sea_orm::DatabaseConnection;

use crate::server::{
    data::city::CityRepository,
    error::AppError,
    model::city::{City, CreateCityParams, UpdateCityParams},
};

pub struct CityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<City>, AppError> {
        Ok(CityRepository::new(self.db).get_all().await?)
    }

    pub async fn get_active(&self) -> Result<Vec<City>, AppError> {
        Ok(CityRepository::new(self.db).get_active().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<City, AppError> {
        CityRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("City not found".to_string()))
    }

    /// Creates a city, rejecting a name that is already taken
    pub async fn create(&self, params: CreateCityParams) -> Result<City, AppError> {
        let repo = CityRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(duplicate_name(&params.name));
        }

        let city = repo.create(params).await?;

        tracing::info!(city_id = city.id, name = %city.name, "Created city");

        Ok(city)
    }

    /// Applies a partial update
    ///
    /// Renaming a city does not touch the name snapshots held by properties, reviews
    /// and blogs.
    pub async fn update(&self, params: UpdateCityParams) -> Result<City, AppError> {
        let repo = CityRepository::new(self.db);
        let mut city = self.get_by_id(params.id).await?;

        if let Some(name) = params.name.as_deref() {
            if let Some(existing) = repo.find_by_name(name).await? {
                if existing.id != city.id {
                    return Err(duplicate_name(name));
                }
            }
        }

        params.apply_to(&mut city);

        Ok(repo.update(&city).await?)
    }

    /// Sets the active flag, or flips it when `is_active` is `None`
    pub async fn set_status(&self, id: i32, is_active: Option<bool>) -> Result<City, AppError> {
        let city = self.get_by_id(id).await?;
        let is_active = is_active.unwrap_or(!city.is_active);

        CityRepository::new(self.db)
            .set_active(id, is_active)
            .await?
            .ok_or_else(|| AppError::NotFound("City not found".to_string()))
    }
}

/// Looks up the name of a referenced city for a document's name snapshot.
///
/// # Returns
/// - `Ok(String)` - Current city name
/// - `Err(AppError::NotFound)` - No city with that id
pub async fn city_name(db: &DatabaseConnection, city_id: i32) -> Result<String, AppError> {
    CityRepository::new(db)
        .get_name(city_id)
        .await?
        .ok_or_else(|| AppError::NotFound("City not found".to_string()))
}

fn duplicate_name(name: &str) -> AppError {
    AppError::BadRequest(format!("A city named '{}' already exists", name))
}
