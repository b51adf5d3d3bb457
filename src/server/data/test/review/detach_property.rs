use super::*;

/// Tests detaching reviews from a property.
///
/// Verifies that both the reference and the name snapshot are cleared and that
/// reviews of other properties are untouched.
///
/// Expected: Ok(1) with the attached review detached
#[tokio::test]
async fn clears_reference_and_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, property) = factory::helpers::create_property_with_city(db).await?;
    let other = factory::create_property(db, &city).await?;
    let attached = factory::review::ReviewFactory::new(db, &city)
        .property(&property)
        .build()
        .await?;
    let untouched = factory::review::ReviewFactory::new(db, &city)
        .property(&other)
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let detached = repo.detach_property(property.id).await?;

    assert_eq!(detached, 1);

    let attached = repo.get_by_id(attached.id).await?.unwrap();
    assert_eq!(attached.property_id, None);
    assert_eq!(attached.property_name, None);

    let untouched = repo.get_by_id(untouched.id).await?.unwrap();
    assert_eq!(untouched.property_id, Some(other.id));

    Ok(())
}
