use super::*;

fn params(city_id: i32) -> CreatePropertyParams {
    CreatePropertyParams {
        name: "Lake Cottage".to_string(),
        city_id,
        guests: 2,
        rooms: 1,
        baths: 1,
        beds: 1,
        price_min: 100.0,
        price_max: 200.0,
        description: String::new(),
        brochure_link: None,
        video_link: None,
        map_link: None,
        amenities: vec![],
        images: vec![],
        reviews: vec![],
    }
}

/// Tests creating a property snapshots the city name.
///
/// Expected: Ok with city_name from the city row and rating {0, 0}
#[tokio::test]
async fn snapshots_city_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::city::CityFactory::new(db).name("Udaipur").build().await?;

    let property = PropertyService::new(db).create(params(city.id)).await?;

    assert_eq!(property.city_name, "Udaipur");
    assert_eq!(property.rating().average, 0.0);
    assert_eq!(property.rating().count, 0);

    Ok(())
}

/// Tests creating a property for a missing city.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_city() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PropertyService::new(db).create(params(404)).await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "City not found"));

    Ok(())
}
