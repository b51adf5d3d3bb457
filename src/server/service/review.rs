//! Standalone reviews and their name snapshots.
//!
//! A review stores copies of the names of the city and property it references. The
//! copies are taken when the review is created and refreshed only when the reference
//! itself changes; renaming a city or property later leaves existing reviews alone.
//! An explicit `propertyName` from the client always wins over the looked-up name.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{property::PropertyRepository, review::ReviewRepository},
    error::AppError,
    model::{
        property::Property,
        review::{CreateReviewParams, Review, ReviewSnapshot, UpdateReviewParams},
    },
    service::city::city_name,
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets reviews newest first, optionally filtered by city and property
    pub async fn get_all(
        &self,
        city_id: Option<i32>,
        property_id: Option<i32>,
    ) -> Result<Vec<Review>, AppError> {
        Ok(ReviewRepository::new(self.db)
            .get_all(city_id, property_id)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Review, AppError> {
        ReviewRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))
    }

    /// Creates a review, capturing the city and property name snapshots
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, AppError> {
        let city_name = city_name(self.db, params.city_id).await?;

        let property_name = match params.property_id {
            Some(property_id) => {
                let property = self.property_in_city(property_id, params.city_id).await?;
                Some(params.property_name.clone().unwrap_or(property.name))
            }
            None => None,
        };

        let review = ReviewRepository::new(self.db)
            .create(
                params,
                ReviewSnapshot {
                    city_name,
                    property_name,
                },
            )
            .await?;

        tracing::info!(review_id = review.id, "Created review");

        Ok(review)
    }

    /// Applies a partial update, refreshing snapshots only for changed references
    pub async fn update(&self, params: UpdateReviewParams) -> Result<Review, AppError> {
        let mut review = self.get_by_id(params.id).await?;
        params.apply_fields(&mut review);

        let city_changed = match params.city_id {
            Some(city_id) if city_id != review.city_id => {
                review.city_name = city_name(self.db, city_id).await?;
                review.city_id = city_id;
                true
            }
            _ => false,
        };

        match params.property_id {
            Some(None) => {
                review.property_id = None;
                review.property_name = None;
            }
            Some(Some(property_id)) if Some(property_id) != review.property_id => {
                let property = self.property_in_city(property_id, review.city_id).await?;
                review.property_id = Some(property_id);
                review.property_name = Some(params.property_name.clone().unwrap_or(property.name));
            }
            _ => {
                if let Some(property_id) = review.property_id {
                    if city_changed {
                        self.property_in_city(property_id, review.city_id).await?;
                    }
                    if let Some(name) = params.property_name.clone() {
                        review.property_name = Some(name);
                    }
                }
            }
        }

        Ok(ReviewRepository::new(self.db).update(&review).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ReviewRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Review not found".to_string()));
        }

        Ok(())
    }

    /// Loads a referenced property and checks that it belongs to the review's city.
    async fn property_in_city(&self, property_id: i32, city_id: i32) -> Result<Property, AppError> {
        let property = PropertyRepository::new(self.db)
            .get_by_id(property_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Property not found".to_string()))?;

        if property.city_id != city_id {
            return Err(AppError::BadRequest(format!(
                "Property {} does not belong to city {}",
                property_id, city_id
            )));
        }

        Ok(property)
    }
}
