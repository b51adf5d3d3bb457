use super::*;

/// Tests listing mobile banners.
///
/// Verifies that active banners of type `mobile` and `both` are returned, while
/// desktop and inactive banners are not.
///
/// Expected: Ok with the mobile and both banners in display order
#[tokio::test]
async fn includes_both_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Banner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let both = BannerFactory::new(db).banner_type("both").order(2).build().await?;
    let mobile = BannerFactory::new(db).banner_type("mobile").order(1).build().await?;
    BannerFactory::new(db).banner_type("desktop").order(0).build().await?;
    BannerFactory::new(db)
        .banner_type("mobile")
        .active(false)
        .build()
        .await?;

    let repo = BannerRepository::new(db);
    let banners = repo.get_active_by_type(BannerType::Mobile).await?;

    let ids: Vec<i32> = banners.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![mobile.id, both.id]);

    Ok(())
}
