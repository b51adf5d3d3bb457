use super::*;

/// Tests creating a city with things to do.
///
/// Expected: Ok with the list stored in order
#[tokio::test]
async fn creates_city_with_things_to_do() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::City)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CityRepository::new(db);
    let city = repo
        .create(CreateCityParams {
            name: "Goa".to_string(),
            image: "data:image/png;base64,iVBO".to_string(),
            is_active: true,
            things_to_do: vec![
                ThingToDo {
                    image: "I1".to_string(),
                    heading: "Fort Aguada".to_string(),
                    description: String::new(),
                },
                ThingToDo {
                    image: "I2".to_string(),
                    heading: "Baga Beach".to_string(),
                    description: String::new(),
                },
            ],
        })
        .await?;

    let stored = repo.get_by_id(city.id).await?.unwrap();
    let headings: Vec<&str> = stored
        .things_to_do
        .iter()
        .map(|t| t.heading.as_str())
        .collect();
    assert_eq!(headings, vec!["Fort Aguada", "Baga Beach"]);

    Ok(())
}

/// Tests that city names are unique.
///
/// Expected: Err on the second insert with the same name
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::City)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::city::CityFactory::new(db).name("Goa").build().await?;

    let repo = CityRepository::new(db);
    let result = repo
        .create(CreateCityParams {
            name: "Goa".to_string(),
            image: "I".to_string(),
            is_active: true,
            things_to_do: vec![],
        })
        .await;

    assert!(result.is_err());
    assert!(repo.find_by_name("Goa").await?.is_some());

    Ok(())
}
