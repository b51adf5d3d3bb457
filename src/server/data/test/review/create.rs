use super::*;

/// Tests creating a review attached to a property.
///
/// Verifies that the snapshot names are written as given and the source is
/// stored in its lowercase form.
///
/// Expected: Ok with snapshots and source round-tripped
#[tokio::test]
async fn creates_review_with_snapshots() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, property) = factory::helpers::create_property_with_city(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(
            CreateReviewParams {
                name: "Asha".to_string(),
                profile_image: None,
                rating: 4,
                description: "Great host".to_string(),
                source: ReviewSource::Tripadvisor,
                is_active: true,
                city_id: city.id,
                property_id: Some(property.id),
                property_name: None,
            },
            ReviewSnapshot {
                city_name: city.name.clone(),
                property_name: Some(property.name.clone()),
            },
        )
        .await?;

    assert_eq!(review.city_name, city.name);
    assert_eq!(review.property_name, Some(property.name));
    assert_eq!(review.source, ReviewSource::Tripadvisor);
    assert_eq!(review.rating, 4);

    let stored = repo.get_by_id(review.id).await?.unwrap();
    assert_eq!(stored, review);

    Ok(())
}
