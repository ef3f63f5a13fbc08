use super::*;
use test_utils::factory::comment::CommentFactory;

/// Tests approving a pending comment.
///
/// Verifies that approve sets the approved flag and clears the trash flag.
///
/// Expected: Ok(Some) with approved true and is_trash false
#[tokio::test]
async fn approve_sets_approved_and_clears_trash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = factory::post::create_post(db).await?;
    let comment = CommentFactory::new(db, post.id).is_trash(true).build().await?;

    let repo = CommentRepository::new(db);
    let approved = repo.approve(comment.id).await?.unwrap();

    assert!(approved.approved);
    assert!(!approved.is_trash);

    Ok(())
}

/// Tests approving a comment that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn approve_missing_comment_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let result = repo.approve(9999).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests rejecting an approved comment.
///
/// Verifies that reject returns the comment to pending without touching the
/// trash flag.
///
/// Expected: Ok(Some) with approved false
#[tokio::test]
async fn reject_returns_comment_to_pending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_post, comment) = factory::helpers::create_post_with_comment(db).await?;
    assert!(comment.approved);

    let repo = CommentRepository::new(db);
    let rejected = repo.reject(comment.id).await?.unwrap();

    assert!(!rejected.approved);
    assert!(!rejected.is_trash);

    Ok(())
}

/// Tests that trash then restore round-trips the approval state.
///
/// Trash only sets the trash flag; an approved comment that is trashed and
/// restored must come back approved.
///
/// Expected: approval preserved across the round-trip
#[tokio::test]
async fn trash_then_restore_preserves_approval() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_post, comment) = factory::helpers::create_post_with_comment(db).await?;

    let repo = CommentRepository::new(db);

    let trashed = repo.trash(comment.id).await?.unwrap();
    assert!(trashed.is_trash);
    assert!(trashed.approved);

    let restored = repo.restore(comment.id).await?.unwrap();
    assert!(!restored.is_trash);
    assert!(restored.approved);

    Ok(())
}

/// Tests that moderation transitions bump `updated_at`.
///
/// Expected: updated_at strictly newer than the created row's
#[tokio::test]
async fn moderation_updates_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = factory::post::create_post(db).await?;
    let comment = CommentFactory::new(db, post.id).build().await?;

    let repo = CommentRepository::new(db);
    let approved = repo.approve(comment.id).await?.unwrap();

    assert!(approved.updated_at >= comment.updated_at);
    assert_eq!(approved.created_at, comment.created_at);

    Ok(())
}
