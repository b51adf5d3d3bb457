use sea_orm::DatabaseConnection;

use crate::server::{
    data::{property::PropertyRepository, review::ReviewRepository},
    error::AppError,
    model::property::{
        CreatePropertyParams, Property, PropertyReview, PropertyReviewParams,
        PropertyReviewPatch, UpdatePropertyParams,
    },
    service::city::city_name,
};

pub struct PropertyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PropertyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all properties, optionally limited to one city
    pub async fn get_all(&self, city_id: Option<i32>) -> Result<Vec<Property>, AppError> {
        let repo = PropertyRepository::new(self.db);

        Ok(repo.get_all(city_id).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Property, AppError> {
        let repo = PropertyRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Property not found".to_string()))
    }

    /// Creates a property, snapshotting the name of its city
    pub async fn create(&self, params: CreatePropertyParams) -> Result<Property, AppError> {
        let city_name = city_name(self.db, params.city_id).await?;

        let property = PropertyRepository::new(self.db)
            .create(params, city_name)
            .await?;

        tracing::info!(property_id = property.id, "Created property");

        Ok(property)
    }

    /// Applies a partial update and writes the whole document back
    ///
    /// The city name snapshot is refreshed only when the city reference changes.
    pub async fn update(&self, params: UpdatePropertyParams) -> Result<Property, AppError> {
        let repo = PropertyRepository::new(self.db);
        let mut property = self.get_by_id(params.id).await?;

        if let Some(city_id) = params.city_id.filter(|&id| id != property.city_id) {
            property.city_name = city_name(self.db, city_id).await?;
            property.city_id = city_id;
        }

        params.apply_to(&mut property)?;

        Ok(repo.update(&property).await?)
    }

    /// Deletes a property and detaches the standalone reviews that referenced it
    ///
    /// The row is removed first so a missing property leaves every review untouched.
    /// The `property_id` foreign key is `ON DELETE SET NULL`; the detach pass then
    /// clears the name snapshot as well.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !PropertyRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Property not found".to_string()));
        }

        let detached = ReviewRepository::new(self.db).detach_property(id).await?;

        tracing::info!(property_id = id, detached, "Deleted property");

        Ok(())
    }

    /// Appends an embedded review and persists the recomputed rating
    pub async fn add_review(
        &self,
        property_id: i32,
        params: PropertyReviewParams,
    ) -> Result<Property, AppError> {
        let mut property = self.get_by_id(property_id).await?;

        property.add_review(PropertyReview::new(params));

        Ok(PropertyRepository::new(self.db).update(&property).await?)
    }

    /// Edits an embedded review in place
    ///
    /// An unknown review id returns `NotFound` before anything is written.
    pub async fn edit_review(
        &self,
        property_id: i32,
        review_id: &str,
        patch: PropertyReviewPatch,
    ) -> Result<Property, AppError> {
        let mut property = self.get_by_id(property_id).await?;

        property.edit_review(review_id, patch)?;

        Ok(PropertyRepository::new(self.db).update(&property).await?)
    }

    /// Removes an embedded review
    ///
    /// An unknown review id returns `NotFound` before anything is written.
    pub async fn delete_review(
        &self,
        property_id: i32,
        review_id: &str,
    ) -> Result<Property, AppError> {
        let mut property = self.get_by_id(property_id).await?;

        property.remove_review(review_id)?;

        Ok(PropertyRepository::new(self.db).update(&property).await?)
    }
}
