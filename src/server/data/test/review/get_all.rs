use super::*;

/// Tests filtering reviews by city.
///
/// Expected: Ok with only the reviews of the requested city, newest first
#[tokio::test]
async fn filters_by_city() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let goa = factory::create_city(db).await?;
    let jaipur = factory::create_city(db).await?;
    let first = factory::create_review(db, &goa).await?;
    let second = factory::create_review(db, &goa).await?;
    factory::create_review(db, &jaipur).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo.get_all(Some(goa.id), None).await?;

    let ids: Vec<i32> = reviews.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}

/// Tests filtering reviews by property.
///
/// Expected: Ok with only the review attached to the property
#[tokio::test]
async fn filters_by_property() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, property) = factory::helpers::create_property_with_city(db).await?;
    let attached = factory::review::ReviewFactory::new(db, &city)
        .property(&property)
        .build()
        .await?;
    factory::create_review(db, &city).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo.get_all(Some(city.id), Some(property.id)).await?;

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].id, attached.id);

    Ok(())
}
