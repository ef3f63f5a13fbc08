use super::*;
use test_utils::factory::post::PostFactory;

/// Tests resolving a post by numeric id.
///
/// Expected: Ok(Some) with the matching post
#[tokio::test]
async fn resolves_post_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = factory::post::create_post(db).await?;

    let repo = PostRepository::new(db);
    let found = repo.find_by_ref(&PostRef::ById(post.id)).await?;

    assert_eq!(found.map(|p| p.id), Some(post.id));

    Ok(())
}

/// Tests resolving a post by slug.
///
/// Expected: Ok(Some) with the matching post
#[tokio::test]
async fn resolves_post_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = PostFactory::new(db).slug("hello-world").build().await?;

    let repo = PostRepository::new(db);
    let found = repo
        .find_by_ref(&PostRef::BySlug("hello-world".to_string()))
        .await?;

    assert_eq!(found.map(|p| p.id), Some(post.id));

    Ok(())
}

/// Tests that unknown references resolve to nothing.
///
/// Expected: Ok(None) for both reference forms
#[tokio::test]
async fn unknown_reference_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);

    assert!(repo.find_by_ref(&PostRef::ById(9999)).await?.is_none());
    assert!(repo
        .find_by_ref(&PostRef::BySlug("missing".to_string()))
        .await?
        .is_none());

    Ok(())
}

/// Tests creating a post and listing it.
///
/// Expected: created post appears in the listing
#[tokio::test]
async fn create_and_list_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);
    let created = repo
        .create("Hello World".to_string(), "hello-world".to_string())
        .await?;

    let posts = repo.list().await?;

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, created.id);
    assert_eq!(posts[0].title, "Hello World");

    Ok(())
}
