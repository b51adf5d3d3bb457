use super::*;

/// Tests loading a property whose stored rating columns are stale.
///
/// Verifies that the rating is recomputed from the embedded reviews on load
/// instead of being read from the rating columns.
///
/// Expected: Ok with rating {4.5, 2}
#[tokio::test]
async fn recomputes_stale_rating_on_load() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let row = factory::property::PropertyFactory::new(db, city.id, &city.name)
        .reviews(json!([
            factory::property::review_json("r1", 4, true),
            factory::property::review_json("r2", 2, false),
            factory::property::review_json("r3", 5, true),
        ]))
        .stored_rating(1.0, 9)
        .build()
        .await?;

    let repo = PropertyRepository::new(db);
    let property = repo.get_by_id(row.id).await?.unwrap();

    assert_eq!(property.rating().average, 4.5);
    assert_eq!(property.rating().count, 2);

    Ok(())
}

/// Tests loading a property that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_property() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PropertyRepository::new(db);
    let property = repo.get_by_id(42).await?;

    assert!(property.is_none());

    Ok(())
}

/// Tests loading a property whose review column does not hold a review list.
///
/// Expected: Err(DbErr::Json)
#[tokio::test]
async fn fails_on_malformed_review_column() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let row = factory::property::PropertyFactory::new(db, city.id, &city.name)
        .reviews(json!({ "not": "a list" }))
        .build()
        .await?;

    let repo = PropertyRepository::new(db);
    let result = repo.get_by_id(row.id).await;

    assert!(matches!(result, Err(DbErr::Json(_))));

    Ok(())
}
