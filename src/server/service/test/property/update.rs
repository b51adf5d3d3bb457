use super::*;

/// Tests that changing the city refreshes the city name snapshot.
///
/// Expected: Ok with the new city's id and name
#[tokio::test]
async fn refreshes_city_name_on_city_change() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, row) = factory::helpers::create_property_with_city(db).await?;
    let jaipur = factory::city::CityFactory::new(db).name("Jaipur").build().await?;

    let property = PropertyService::new(db)
        .update(UpdatePropertyParams {
            id: row.id,
            city_id: Some(jaipur.id),
            ..Default::default()
        })
        .await?;

    assert_eq!(property.city_id, jaipur.id);
    assert_eq!(property.city_name, "Jaipur");

    Ok(())
}

/// Tests that a bulk review replacement recomputes the stored rating.
///
/// Expected: Ok with rating over the new list only
#[tokio::test]
async fn bulk_replacing_reviews_recomputes_rating() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let row = factory::property::PropertyFactory::new(db, city.id, &city.name)
        .reviews(json!([factory::property::review_json("r1", 1, true)]))
        .build()
        .await?;

    let replacement = vec![
        crate::server::model::property::PropertyReview::new(review_params(3)),
        crate::server::model::property::PropertyReview::new(review_params(4)),
    ];

    let property = PropertyService::new(db)
        .update(UpdatePropertyParams {
            id: row.id,
            reviews: Some(replacement),
            ..Default::default()
        })
        .await?;

    assert_eq!(property.rating().average, 3.5);
    assert_eq!(property.rating().count, 2);

    Ok(())
}

/// Tests that an invalid update writes nothing.
///
/// Expected: Err(BadRequest) with the stored property unchanged
#[tokio::test]
async fn rejects_out_of_range_image_removal() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, row) = factory::helpers::create_property_with_city(db).await?;
    let service = PropertyService::new(db);

    let result = service
        .update(UpdatePropertyParams {
            id: row.id,
            name: Some("Renamed".to_string()),
            remove_images: vec![3],
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.get_by_id(row.id).await?.name, row.name);

    Ok(())
}
