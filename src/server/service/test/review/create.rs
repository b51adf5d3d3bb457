use super::*;

/// Tests that creating a review captures both name snapshots.
///
/// Expected: Ok with city_name and property_name taken from the referenced rows
#[tokio::test]
async fn captures_snapshots() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, property) = factory::helpers::create_property_with_city(db).await?;

    let review = ReviewService::new(db)
        .create(create_params(city.id, Some(property.id)))
        .await?;

    assert_eq!(review.city_name, city.name);
    assert_eq!(review.property_name, Some(property.name));

    Ok(())
}

/// Tests that an explicit property name overrides the looked-up one.
///
/// Expected: Ok with the supplied property_name
#[tokio::test]
async fn explicit_property_name_wins() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, property) = factory::helpers::create_property_with_city(db).await?;

    let mut params = create_params(city.id, Some(property.id));
    params.property_name = Some("The Cottage".to_string());

    let review = ReviewService::new(db).create(params).await?;

    assert_eq!(review.property_name.as_deref(), Some("The Cottage"));

    Ok(())
}

/// Tests referencing a property from another city.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_property_of_other_city() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_city(db).await?;
    let other_city = factory::create_city(db).await?;

    let result = ReviewService::new(db)
        .create(create_params(other_city.id, Some(property.id)))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
