use super::*;

/// Tests toggling a city's status without an explicit value.
///
/// Expected: Ok, flipping the flag on each call
#[tokio::test]
async fn toggles_when_value_omitted() -> Result<(), AppError> {
    let test = city_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let service = CityService::new(db);

    assert!(!service.set_status(city.id, None).await?.is_active);
    assert!(service.set_status(city.id, None).await?.is_active);

    Ok(())
}

/// Tests setting an explicit status.
///
/// Expected: Ok with the requested value, even when it is already set
#[tokio::test]
async fn sets_explicit_value() -> Result<(), AppError> {
    let test = city_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let service = CityService::new(db);

    assert!(service.set_status(city.id, Some(true)).await?.is_active);
    assert!(!service.set_status(city.id, Some(false)).await?.is_active);

    Ok(())
}

/// Tests changing the status of a missing city.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_city() -> Result<(), AppError> {
    let test = city_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CityService::new(db).set_status(5, None).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
