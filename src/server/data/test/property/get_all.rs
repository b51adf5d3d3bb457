use super::*;

/// Tests listing properties filtered by city.
///
/// Verifies that only properties of the requested city are returned and that
/// the newest comes first.
///
/// Expected: Ok with the two properties of the first city, newest first
#[tokio::test]
async fn filters_by_city_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let goa = factory::create_city(db).await?;
    let jaipur = factory::create_city(db).await?;

    let first = factory::create_property(db, &goa).await?;
    let second = factory::create_property(db, &goa).await?;
    factory::create_property(db, &jaipur).await?;

    let repo = PropertyRepository::new(db);
    let properties = repo.get_all(Some(goa.id)).await?;

    let ids: Vec<i32> = properties.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}

/// Tests listing every property.
///
/// Expected: Ok with all properties
#[tokio::test]
async fn lists_all_without_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let goa = factory::create_city(db).await?;
    let jaipur = factory::create_city(db).await?;
    factory::create_property(db, &goa).await?;
    factory::create_property(db, &jaipur).await?;

    let repo = PropertyRepository::new(db);
    let properties = repo.get_all(None).await?;

    assert_eq!(properties.len(), 2);

    Ok(())
}
