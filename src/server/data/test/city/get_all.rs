use super::*;

/// Tests listing cities ordered by name.
///
/// Expected: Ok with every city in name order
#[tokio::test]
async fn lists_cities_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::City)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::city::CityFactory::new(db).name("Udaipur").build().await?;
    factory::city::CityFactory::new(db)
        .name("Goa")
        .active(false)
        .build()
        .await?;
    factory::city::CityFactory::new(db).name("Jaipur").build().await?;

    let repo = CityRepository::new(db);
    let names: Vec<String> = repo.get_all().await?.into_iter().map(|c| c.name).collect();

    assert_eq!(names, vec!["Goa", "Jaipur", "Udaipur"]);

    Ok(())
}

/// Tests listing only active cities.
///
/// Expected: Ok without the inactive city
#[tokio::test]
async fn lists_active_cities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::City)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::city::CityFactory::new(db).name("Udaipur").build().await?;
    factory::city::CityFactory::new(db)
        .name("Goa")
        .active(false)
        .build()
        .await?;

    let repo = CityRepository::new(db);
    let names: Vec<String> = repo
        .get_active()
        .await?
        .into_iter()
        .map(|c| c.name)
        .collect();

    assert_eq!(names, vec!["Udaipur"]);

    Ok(())
}
