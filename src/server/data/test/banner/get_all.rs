use super::*;

/// Tests that banners are listed by display order, then id.
///
/// Expected: Ok with inactive banners included, ordered by display_order
#[tokio::test]
async fn orders_by_display_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Banner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let third = BannerFactory::new(db).order(5).build().await?;
    let first = BannerFactory::new(db).order(1).active(false).build().await?;
    let second = BannerFactory::new(db).order(1).build().await?;

    let repo = BannerRepository::new(db);
    let ids: Vec<i32> = repo.get_all().await?.iter().map(|b| b.id).collect();

    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests loading a banner whose stored type is unknown.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_stored_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Banner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let banner = BannerFactory::new(db).banner_type("tablet").build().await?;

    let repo = BannerRepository::new(db);

    assert!(matches!(
        repo.get_by_id(banner.id).await,
        Err(DbErr::Custom(_))
    ));

    Ok(())
}
