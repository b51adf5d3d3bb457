use super::*;

/// Tests that an update replaces the stored must-visit list wholesale.
///
/// Expected: Ok with the new list in the new order
#[tokio::test]
async fn replaces_must_visit_list() -> Result<(), DbErr> {
    let test = blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let row = factory::blog::BlogFactory::new(db, &city)
        .must_visit(json!([
            must_visit_json("a", "Fort", "I1"),
            must_visit_json("b", "Beach", "I2"),
        ]))
        .build()
        .await?;

    let repo = BlogRepository::new(db);
    let mut blog = repo.get_by_id(row.id).await?.unwrap();
    blog.must_visit.reverse();
    blog.must_visit.pop();

    let updated = repo.update(&blog).await?;

    let ids: Vec<&str> = updated.must_visit.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["b"]);

    Ok(())
}

/// Tests deleting a blog.
///
/// Expected: Ok(true), then the blog is gone
#[tokio::test]
async fn deletes_blog() -> Result<(), DbErr> {
    let test = blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let row = factory::create_blog(db, &city).await?;

    let repo = BlogRepository::new(db);

    assert!(repo.delete(row.id).await?);
    assert!(repo.get_by_id(row.id).await?.is_none());

    Ok(())
}
