use super::*;

/// Tests a text-only edit of a must-visit item.
///
/// Expected: Ok with the new heading and the stored image carried over
#[tokio::test]
async fn text_edit_keeps_image() -> Result<(), AppError> {
    let test = blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let row = factory::blog::BlogFactory::new(db, &city)
        .must_visit(json!([must_visit_json("a", "H1", "I1")]))
        .build()
        .await?;

    let blog = BlogService::new(db)
        .update(UpdateBlogParams {
            id: row.id,
            must_visit: Some(vec![existing("a", "H1-new")]),
            ..Default::default()
        })
        .await?;

    assert_eq!(blog.must_visit.len(), 1);
    assert_eq!(blog.must_visit[0].id, "a");
    assert_eq!(blog.must_visit[0].heading, "H1-new");
    assert_eq!(blog.must_visit[0].image, "I1");

    Ok(())
}

/// Tests adding a must-visit item without an uploaded image.
///
/// Expected: Err(BadRequest) with the stored list unchanged
#[tokio::test]
async fn new_item_without_image_writes_nothing() -> Result<(), AppError> {
    let test = blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let row = factory::blog::BlogFactory::new(db, &city)
        .must_visit(json!([must_visit_json("a", "H1", "I1")]))
        .build()
        .await?;

    let service = BlogService::new(db);
    let result = service
        .update(UpdateBlogParams {
            id: row.id,
            title: Some("Renamed".to_string()),
            must_visit: Some(vec![existing("a", "H1"), new_item("Beach")]),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let stored = service.get_by_id(row.id).await?;
    assert_eq!(stored.title, row.title);
    assert_eq!(stored.must_visit.len(), 1);
    assert_eq!(stored.must_visit[0].heading, "H1");

    Ok(())
}

/// Tests adding a must-visit item with a mapped upload.
///
/// Expected: Ok with the new item appended and carrying the upload
#[tokio::test]
async fn adds_item_with_mapped_upload() -> Result<(), AppError> {
    let test = blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let row = factory::blog::BlogFactory::new(db, &city)
        .must_visit(json!([must_visit_json("a", "H1", "I1")]))
        .build()
        .await?;

    let blog = BlogService::new(db)
        .update(UpdateBlogParams {
            id: row.id,
            must_visit: Some(vec![existing("a", "H1"), new_item("Beach")]),
            must_visit_images: vec!["data:image/png;base64,AAA=".to_string()],
            image_map: Some(HashMap::from([("new-1".to_string(), 0)])),
            ..Default::default()
        })
        .await?;

    assert_eq!(blog.must_visit.len(), 2);
    assert_eq!(blog.must_visit[1].heading, "Beach");
    assert_eq!(blog.must_visit[1].image, "data:image/png;base64,AAA=");

    Ok(())
}

/// Tests moving a blog to another city.
///
/// Expected: Ok with the city name snapshot refreshed
#[tokio::test]
async fn refreshes_city_name_on_city_change() -> Result<(), AppError> {
    let test = blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let kochi = factory::city::CityFactory::new(db).name("Kochi").build().await?;
    let row = factory::create_blog(db, &city).await?;

    let blog = BlogService::new(db)
        .update(UpdateBlogParams {
            id: row.id,
            city_id: Some(kochi.id),
            ..Default::default()
        })
        .await?;

    assert_eq!(blog.city_name, "Kochi");

    Ok(())
}
