use super::*;

/// Tests writing back a property after adding and deactivating reviews.
///
/// Verifies that the embedded list and the rating columns are persisted together.
///
/// Expected: Ok with the stored rating matching the review list
#[tokio::test]
async fn persists_reviews_and_rating_together() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let repo = PropertyRepository::new(db);
    let mut property = repo
        .create(create_params(city.id), city.name.clone())
        .await?;

    property.add_review(review(4, true));
    let second_id = property.add_review(review(2, true)).id.clone();
    property.add_review(review(5, true));
    property
        .edit_review(
            &second_id,
            crate::server::model::property::PropertyReviewPatch {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .unwrap();

    let updated = repo.update(&property).await?;

    assert_eq!(updated.reviews().len(), 3);
    assert_eq!(updated.rating().average, 4.5);
    assert_eq!(updated.rating().count, 2);

    let row = entity::prelude::Property::find_by_id(property.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.rating_average, 4.5);
    assert_eq!(row.rating_count, 2);
    assert_eq!(row.reviews.as_array().map(Vec::len), Some(3));

    Ok(())
}

/// Tests that updating keeps the creation timestamp and moves the update timestamp.
///
/// Expected: Ok with created_at unchanged and updated_at not earlier than before
#[tokio::test]
async fn keeps_created_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, row) = factory::helpers::create_property_with_city(db).await?;

    let repo = PropertyRepository::new(db);
    let mut property = repo.get_by_id(row.id).await?.unwrap();
    property.name = "Renamed Villa".to_string();

    let updated = repo.update(&property).await?;

    assert_eq!(updated.name, "Renamed Villa");
    assert_eq!(updated.created_at, property.created_at);
    assert!(updated.updated_at >= property.updated_at);

    Ok(())
}

/// Tests deleting a property.
///
/// Expected: Ok(true) for an existing property, Ok(false) afterwards
#[tokio::test]
async fn deletes_property() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, row) = factory::helpers::create_property_with_city(db).await?;

    let repo = PropertyRepository::new(db);

    assert!(repo.delete(row.id).await?);
    assert!(!repo.delete(row.id).await?);
    assert!(repo.get_by_id(row.id).await?.is_none());

    Ok(())
}
