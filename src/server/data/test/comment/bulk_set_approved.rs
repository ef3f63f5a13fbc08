use super::*;
use test_utils::factory::comment::CommentFactory;

/// Tests that bulk approve counts only rows that changed state.
///
/// One pending and one already-approved comment are approved together. Both
/// end up approved but only the pending one is counted.
///
/// Expected: Ok(1) with both rows approved afterwards
#[tokio::test]
async fn bulk_approve_counts_only_changed_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = factory::post::create_post(db).await?;
    let pending = CommentFactory::new(db, post.id).build().await?;
    let already = CommentFactory::new(db, post.id).approved(true).build().await?;

    let repo = CommentRepository::new(db);
    let changed = repo
        .bulk_set_approved(&[pending.id, already.id], true)
        .await?;

    assert_eq!(changed, 1);

    let pending_after = repo.find_by_id(pending.id).await?.unwrap();
    let already_after = repo.find_by_id(already.id).await?.unwrap();
    assert!(pending_after.approved);
    assert!(already_after.approved);

    Ok(())
}

/// Tests bulk reject with a mixed batch.
///
/// Expected: Ok with only the approved rows counted
#[tokio::test]
async fn bulk_reject_counts_only_changed_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = factory::post::create_post(db).await?;
    let approved_one = CommentFactory::new(db, post.id).approved(true).build().await?;
    let approved_two = CommentFactory::new(db, post.id).approved(true).build().await?;
    let pending = CommentFactory::new(db, post.id).build().await?;

    let repo = CommentRepository::new(db);
    let changed = repo
        .bulk_set_approved(&[approved_one.id, approved_two.id, pending.id], false)
        .await?;

    assert_eq!(changed, 2);

    Ok(())
}

/// Tests bulk approve with an empty id list.
///
/// Expected: Ok(0) without touching the database
#[tokio::test]
async fn bulk_approve_empty_ids_returns_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let changed = repo.bulk_set_approved(&[], true).await?;

    assert_eq!(changed, 0);

    Ok(())
}

/// Tests that unknown ids in a bulk batch are ignored.
///
/// Expected: Ok counting only the rows that exist and changed
#[tokio::test]
async fn bulk_approve_ignores_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = factory::post::create_post(db).await?;
    let pending = CommentFactory::new(db, post.id).build().await?;

    let repo = CommentRepository::new(db);
    let changed = repo.bulk_set_approved(&[pending.id, 9999], true).await?;

    assert_eq!(changed, 1);

    Ok(())
}
