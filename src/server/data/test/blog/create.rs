use super::*;

/// Tests creating a blog with must-visit items.
///
/// Expected: Ok with the items stored in order
#[tokio::test]
async fn creates_blog_with_must_visit() -> Result<(), DbErr> {
    let test = blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;

    let repo = BlogRepository::new(db);
    let blog = repo
        .create(
            CreateBlogParams {
                title: "48 hours in Goa".to_string(),
                city_id: city.id,
                content: "<p>Start early</p>".to_string(),
                background_image: "BG".to_string(),
                must_visit: vec![MustVisitThing {
                    id: "a".to_string(),
                    heading: "Fort Aguada".to_string(),
                    description: String::new(),
                    image: "I1".to_string(),
                }],
            },
            city.name.clone(),
        )
        .await?;

    assert_eq!(blog.city_name, city.name);

    let stored = repo.get_by_id(blog.id).await?.unwrap();
    assert_eq!(stored.must_visit.len(), 1);
    assert_eq!(stored.must_visit[0].image, "I1");

    Ok(())
}

/// Tests listing blogs of one city.
///
/// Expected: Ok with only that city's blogs, newest first
#[tokio::test]
async fn filters_by_city() -> Result<(), DbErr> {
    let test = blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let goa = factory::create_city(db).await?;
    let jaipur = factory::create_city(db).await?;
    let first = factory::create_blog(db, &goa).await?;
    let second = factory::create_blog(db, &goa).await?;
    factory::create_blog(db, &jaipur).await?;

    let repo = BlogRepository::new(db);
    let ids: Vec<i32> = repo
        .get_all(Some(goa.id))
        .await?
        .iter()
        .map(|b| b.id)
        .collect();

    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}
