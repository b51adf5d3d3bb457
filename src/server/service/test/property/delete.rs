use super::*;

/// Tests that deleting a property detaches its standalone reviews.
///
/// Expected: Ok with the review kept but without property reference or snapshot
#[tokio::test]
async fn detaches_standalone_reviews() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, property) = factory::helpers::create_property_with_city(db).await?;
    let review = factory::review::ReviewFactory::new(db, &city)
        .property(&property)
        .build()
        .await?;

    PropertyService::new(db).delete(property.id).await?;

    let review = crate::server::service::review::ReviewService::new(db)
        .get_by_id(review.id)
        .await?;
    assert_eq!(review.property_id, None);
    assert_eq!(review.property_name, None);

    let result = PropertyService::new(db).get_by_id(property.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting a missing property.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_property() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PropertyService::new(db).delete(1).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that deleting one property leaves reviews of other properties attached.
///
/// Expected: Ok with the other review still carrying its property reference and snapshot
#[tokio::test]
async fn keeps_reviews_of_other_properties() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, deleted) = factory::helpers::create_property_with_city(db).await?;
    let kept = factory::property::create_property(db, &city).await?;
    let review = factory::review::ReviewFactory::new(db, &city)
        .property(&kept)
        .build()
        .await?;

    PropertyService::new(db).delete(deleted.id).await?;

    let review = crate::server::service::review::ReviewService::new(db)
        .get_by_id(review.id)
        .await?;
    assert_eq!(review.property_id, Some(kept.id));
    assert_eq!(review.property_name.as_deref(), Some(kept.name.as_str()));

    Ok(())
}

/// Tests that a delete of a missing id does not touch existing reviews.
///
/// Expected: Err(NotFound) and the review still references its property
#[tokio::test]
async fn missing_property_leaves_reviews_attached() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, property) = factory::helpers::create_property_with_city(db).await?;
    let review = factory::review::ReviewFactory::new(db, &city)
        .property(&property)
        .build()
        .await?;

    let result = PropertyService::new(db).delete(property.id + 1).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let review = crate::server::service::review::ReviewService::new(db)
        .get_by_id(review.id)
        .await?;
    assert_eq!(review.property_id, Some(property.id));

    Ok(())
}
