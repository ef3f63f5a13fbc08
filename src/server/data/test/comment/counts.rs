use super::*;
use test_utils::factory::comment::CommentFactory;

/// Tests moderation counters scoped to a single post.
///
/// Verifies that `all` counts non-trash rows, pending and approved partition
/// `all`, and trash counts the rest.
///
/// Expected: all=3, pending=2, approved=1, trash=1
#[tokio::test]
async fn counts_partition_rows_for_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = factory::post::create_post(db).await?;
    let _approved = CommentFactory::new(db, post.id).approved(true).build().await?;
    let _pending_one = CommentFactory::new(db, post.id).build().await?;
    let _pending_two = CommentFactory::new(db, post.id).build().await?;
    let _trashed = CommentFactory::new(db, post.id)
        .approved(true)
        .is_trash(true)
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let counts = repo.counts(Some(post.id)).await?;

    assert_eq!(counts.all, 3);
    assert_eq!(counts.pending, 2);
    assert_eq!(counts.approved, 1);
    assert_eq!(counts.trash, 1);
    assert_eq!(counts.pending + counts.approved, counts.all);

    Ok(())
}

/// Tests that unscoped counters span every post.
///
/// Expected: counters cover comments from both posts
#[tokio::test]
async fn counts_without_post_cover_whole_store() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post_one = factory::post::create_post(db).await?;
    let post_two = factory::post::create_post(db).await?;
    let _a = CommentFactory::new(db, post_one.id).approved(true).build().await?;
    let _b = CommentFactory::new(db, post_two.id).build().await?;

    let repo = CommentRepository::new(db);
    let counts = repo.counts(None).await?;

    assert_eq!(counts.all, 2);
    assert_eq!(counts.approved, 1);
    assert_eq!(counts.pending, 1);
    assert_eq!(counts.trash, 0);

    Ok(())
}

/// Tests that scoping to one post excludes the other post's comments.
///
/// Expected: counters reflect only the requested post
#[tokio::test]
async fn counts_scoped_to_post_exclude_other_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post_one = factory::post::create_post(db).await?;
    let post_two = factory::post::create_post(db).await?;
    let _a = CommentFactory::new(db, post_one.id).approved(true).build().await?;
    let _b = CommentFactory::new(db, post_two.id).approved(true).build().await?;
    let _c = CommentFactory::new(db, post_two.id).build().await?;

    let repo = CommentRepository::new(db);
    let counts = repo.counts(Some(post_two.id)).await?;

    assert_eq!(counts.all, 2);
    assert_eq!(counts.approved, 1);
    assert_eq!(counts.pending, 1);

    Ok(())
}
