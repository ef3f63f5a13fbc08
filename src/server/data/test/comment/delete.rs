use super::*;
use crate::server::data::comment_like::CommentLikeRepository;
use test_utils::factory::comment::CommentFactory;

/// Tests permanently deleting a comment.
///
/// Expected: Ok(1) and the row gone
#[tokio::test]
async fn delete_removes_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_post, comment) = factory::helpers::create_post_with_comment(db).await?;

    let repo = CommentRepository::new(db);
    let deleted = repo.delete(comment.id).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_id(comment.id).await?.is_none());

    Ok(())
}

/// Tests deleting a comment that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn delete_missing_comment_returns_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let deleted = repo.delete(9999).await?;

    assert_eq!(deleted, 0);

    Ok(())
}

/// Tests that deleting a comment cascades to its replies and likes.
///
/// Expected: descendants and their like rows removed with the parent
#[tokio::test]
async fn delete_cascades_to_replies_and_likes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (post, parent) = factory::helpers::create_post_with_comment(db).await?;
    let reply = CommentFactory::new(db, post.id)
        .parent(&parent)
        .approved(true)
        .build()
        .await?;
    factory::comment_like::create_like(db, reply.id, "alice").await?;

    let repo = CommentRepository::new(db);
    let deleted = repo.delete(parent.id).await?;
    assert_eq!(deleted, 1);

    assert!(repo.find_by_id(reply.id).await?.is_none());

    let likes = CommentLikeRepository::new(db).count(reply.id).await?;
    assert_eq!(likes, 0);

    Ok(())
}
