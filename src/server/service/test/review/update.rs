use super::*;

/// Tests that snapshots survive a rename of the referenced rows.
///
/// Updating unrelated fields must not refresh a stale snapshot.
///
/// Expected: Ok with the original names kept
#[tokio::test]
async fn keeps_snapshots_when_references_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, property) = factory::helpers::create_property_with_city(db).await?;
    let service = ReviewService::new(db);
    let review = service
        .create(create_params(city.id, Some(property.id)))
        .await?;

    crate::server::service::city::CityService::new(db)
        .update(crate::server::model::city::UpdateCityParams {
            id: city.id,
            name: Some("Renamed City".to_string()),
            ..Default::default()
        })
        .await?;

    let updated = service
        .update(UpdateReviewParams {
            id: review.id,
            rating: Some(3),
            city_id: Some(city.id),
            property_id: Some(Some(property.id)),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.rating, 3);
    assert_eq!(updated.city_name, city.name);
    assert_eq!(updated.property_name, Some(property.name));

    Ok(())
}

/// Tests that changing the property refreshes the property name snapshot.
///
/// Expected: Ok with the new property's name
#[tokio::test]
async fn refreshes_property_name_on_property_change() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, property) = factory::helpers::create_property_with_city(db).await?;
    let other = factory::property::PropertyFactory::new(db, city.id, &city.name)
        .name("Hill House")
        .build()
        .await?;

    let service = ReviewService::new(db);
    let review = service
        .create(create_params(city.id, Some(property.id)))
        .await?;

    let updated = service
        .update(UpdateReviewParams {
            id: review.id,
            property_id: Some(Some(other.id)),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.property_id, Some(other.id));
    assert_eq!(updated.property_name.as_deref(), Some("Hill House"));

    Ok(())
}

/// Tests that an explicit name wins when the property changes.
///
/// Expected: Ok with the supplied property_name
#[tokio::test]
async fn explicit_name_wins_on_property_change() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, property) = factory::helpers::create_property_with_city(db).await?;
    let other = factory::create_property(db, &city).await?;

    let service = ReviewService::new(db);
    let review = service
        .create(create_params(city.id, Some(property.id)))
        .await?;

    let updated = service
        .update(UpdateReviewParams {
            id: review.id,
            property_id: Some(Some(other.id)),
            property_name: Some("Custom".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.property_name.as_deref(), Some("Custom"));

    Ok(())
}

/// Tests that clearing the property clears its snapshot.
///
/// Expected: Ok with neither property_id nor property_name
#[tokio::test]
async fn clearing_property_clears_snapshot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, property) = factory::helpers::create_property_with_city(db).await?;

    let service = ReviewService::new(db);
    let review = service
        .create(create_params(city.id, Some(property.id)))
        .await?;

    let updated = service
        .update(UpdateReviewParams {
            id: review.id,
            property_id: Some(None),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.property_id, None);
    assert_eq!(updated.property_name, None);

    Ok(())
}

/// Tests moving a review to a city its property does not belong to.
///
/// Expected: Err(BadRequest) and the stored review unchanged
#[tokio::test]
async fn rejects_city_change_that_orphans_property() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, property) = factory::helpers::create_property_with_city(db).await?;
    let other_city = factory::create_city(db).await?;

    let service = ReviewService::new(db);
    let review = service
        .create(create_params(city.id, Some(property.id)))
        .await?;

    let result = service
        .update(UpdateReviewParams {
            id: review.id,
            city_id: Some(other_city.id),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.get_by_id(review.id).await?.city_id, city.id);

    Ok(())
}
