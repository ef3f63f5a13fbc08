use super::*;

/// Tests recording and detecting a like.
///
/// Expected: exists flips from false to true after create
#[tokio::test]
async fn create_and_exists_round_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_post, comment) = factory::helpers::create_post_with_comment(db).await?;

    let repo = CommentLikeRepository::new(db);

    assert!(!repo.exists(comment.id, "alice").await?);

    repo.create(comment.id, "alice".to_string()).await?;

    assert!(repo.exists(comment.id, "alice").await?);
    assert!(!repo.exists(comment.id, "bob").await?);

    Ok(())
}

/// Tests removing a like.
///
/// Expected: Ok(1) for an existing pair, Ok(0) for a pair that never existed
#[tokio::test]
async fn delete_returns_rows_removed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_post, comment) = factory::helpers::create_post_with_comment(db).await?;

    let repo = CommentLikeRepository::new(db);
    repo.create(comment.id, "alice".to_string()).await?;

    assert_eq!(repo.delete(comment.id, "alice").await?, 1);
    assert_eq!(repo.delete(comment.id, "alice").await?, 0);
    assert!(!repo.exists(comment.id, "alice").await?);

    Ok(())
}

/// Tests counting likes and listing the names behind them.
///
/// Names come back in like order, oldest first.
///
/// Expected: count matches and names are ordered
#[tokio::test]
async fn count_and_user_names_reflect_ledger() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_post, comment) = factory::helpers::create_post_with_comment(db).await?;

    let repo = CommentLikeRepository::new(db);
    repo.create(comment.id, "alice".to_string()).await?;
    repo.create(comment.id, "bob".to_string()).await?;

    assert_eq!(repo.count(comment.id).await?, 2);
    assert_eq!(
        repo.user_names(comment.id).await?,
        vec!["alice".to_string(), "bob".to_string()]
    );

    Ok(())
}
