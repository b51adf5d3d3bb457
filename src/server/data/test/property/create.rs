use super::*;

/// Tests creating a property without reviews.
///
/// Verifies that the stored rating starts at zero and the city name snapshot
/// is written as given.
///
/// Expected: Ok with rating {0, 0}
#[tokio::test]
async fn creates_property_with_zero_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;

    let repo = PropertyRepository::new(db);
    let property = repo
        .create(create_params(city.id), city.name.clone())
        .await?;

    assert_eq!(property.city_name, city.name);
    assert_eq!(property.rating().average, 0.0);
    assert_eq!(property.rating().count, 0);
    assert_eq!(property.price_min, 100.0);
    assert_eq!(property.price_max, 200.0);

    let row = entity::prelude::Property::find_by_id(property.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.rating_count, 0);
    assert_eq!(row.rating_average, 0.0);

    Ok(())
}

/// Tests creating a property with initial reviews.
///
/// Verifies that the rating columns are derived from the active reviews.
///
/// Expected: Ok with rating {4.5, 2}
#[tokio::test]
async fn creates_property_with_rating_from_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;

    let mut params = create_params(city.id);
    params.reviews = vec![review(4, true), review(2, false), review(5, true)];

    let repo = PropertyRepository::new(db);
    let property = repo.create(params, city.name.clone()).await?;

    assert_eq!(property.reviews().len(), 3);
    assert_eq!(property.rating().average, 4.5);
    assert_eq!(property.rating().count, 2);

    let row = entity::prelude::Property::find_by_id(property.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.rating_average, 4.5);
    assert_eq!(row.rating_count, 2);

    Ok(())
}

/// Tests creating a property with capacities beyond the 32-bit signed range.
///
/// Expected: Ok with every count stored and reloaded unchanged
#[tokio::test]
async fn keeps_large_capacity_values() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;

    let mut params = create_params(city.id);
    params.guests = 3_000_000_000;
    params.beds = u32::MAX;

    let repo = PropertyRepository::new(db);
    let property = repo.create(params, city.name.clone()).await?;

    assert_eq!(property.guests, 3_000_000_000);
    assert_eq!(property.beds, u32::MAX);

    let reloaded = repo.get_by_id(property.id).await?.unwrap();
    assert_eq!(reloaded.guests, 3_000_000_000);
    assert_eq!(reloaded.beds, u32::MAX);

    Ok(())
}
