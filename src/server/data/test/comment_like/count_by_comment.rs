use super::*;
use test_utils::factory::comment::CommentFactory;

/// Tests batched like counting across several comments.
///
/// Comments without likes must be absent from the map rather than zero.
///
/// Expected: per-comment counts with unliked ids missing
#[tokio::test]
async fn counts_likes_per_comment_in_batch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (post, liked_twice) = factory::helpers::create_post_with_comment(db).await?;
    let liked_once = CommentFactory::new(db, post.id).approved(true).build().await?;
    let unliked = CommentFactory::new(db, post.id).approved(true).build().await?;

    factory::comment_like::create_like(db, liked_twice.id, "alice").await?;
    factory::comment_like::create_like(db, liked_twice.id, "bob").await?;
    factory::comment_like::create_like(db, liked_once.id, "alice").await?;

    let repo = CommentLikeRepository::new(db);
    let counts = repo
        .count_by_comment(&[liked_twice.id, liked_once.id, unliked.id])
        .await?;

    assert_eq!(counts.get(&liked_twice.id), Some(&2));
    assert_eq!(counts.get(&liked_once.id), Some(&1));
    assert_eq!(counts.get(&unliked.id), None);

    Ok(())
}

/// Tests the empty batch shortcut.
///
/// Expected: empty map without querying
#[tokio::test]
async fn empty_batch_returns_empty_map() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentLikeRepository::new(db);
    let counts = repo.count_by_comment(&[]).await?;

    assert!(counts.is_empty());

    Ok(())
}
