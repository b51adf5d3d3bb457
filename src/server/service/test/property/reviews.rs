use super::*;

/// Tests the rating after adding, deactivating and removing embedded reviews.
///
/// Expected: Ok with the persisted rating tracking every step
#[tokio::test]
async fn keeps_rating_in_step_with_reviews() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, row) = factory::helpers::create_property_with_city(db).await?;
    let service = PropertyService::new(db);

    service.add_review(row.id, review_params(4)).await?;
    let property = service.add_review(row.id, review_params(2)).await?;
    let second_id = property.reviews()[1].id.clone();
    let property = service.add_review(row.id, review_params(5)).await?;

    assert_eq!(property.rating().count, 3);

    let property = service
        .edit_review(
            row.id,
            &second_id,
            PropertyReviewPatch {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(property.rating().average, 4.5);
    assert_eq!(property.rating().count, 2);

    let first_id = property.reviews()[0].id.clone();
    let property = service.delete_review(row.id, &first_id).await?;

    assert_eq!(property.reviews().len(), 2);
    assert_eq!(property.rating().average, 5.0);
    assert_eq!(property.rating().count, 1);

    let stored = service.get_by_id(row.id).await?;
    assert_eq!(stored.rating(), property.rating());

    Ok(())
}

/// Tests deleting an embedded review that does not exist.
///
/// Verifies that the stored list and rating are unchanged.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_review_leaves_property_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let row = factory::property::PropertyFactory::new(db, city.id, &city.name)
        .reviews(json!([factory::property::review_json("r1", 4, true)]))
        .stored_rating(4.0, 1)
        .build()
        .await?;

    let service = PropertyService::new(db);
    let before = service.get_by_id(row.id).await?;

    let result = service.delete_review(row.id, "missing").await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Review not found"));

    let after = service.get_by_id(row.id).await?;
    assert_eq!(after.reviews(), before.reviews());
    assert_eq!(after.rating(), before.rating());
    assert_eq!(after.updated_at, before.updated_at);

    Ok(())
}

/// Tests adding a review to a missing property.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_property() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PropertyService::new(db).add_review(99, review_params(5)).await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Property not found"));

    Ok(())
}
