use super::*;
use test_utils::factory::comment::CommentFactory;

/// Tests that top-level listing excludes trashed comments and replies.
///
/// Expected: only non-trash top-level comments returned
#[tokio::test]
async fn top_level_excludes_trash_and_replies() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = factory::post::create_post(db).await?;
    let visible = CommentFactory::new(db, post.id).approved(true).build().await?;
    let _trashed = CommentFactory::new(db, post.id)
        .approved(true)
        .is_trash(true)
        .build()
        .await?;
    let _reply = CommentFactory::new(db, post.id)
        .parent(&visible)
        .approved(true)
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let top_level = repo
        .top_level_for_post(post.id, CommentStatusFilter::All)
        .await?;

    assert_eq!(top_level.len(), 1);
    assert_eq!(top_level[0].id, visible.id);

    Ok(())
}

/// Tests the approved and pending status filters.
///
/// Expected: each filter returns only its matching comments
#[tokio::test]
async fn top_level_status_filter_narrows_by_approval() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = factory::post::create_post(db).await?;
    let approved = CommentFactory::new(db, post.id).approved(true).build().await?;
    let pending = CommentFactory::new(db, post.id).build().await?;

    let repo = CommentRepository::new(db);

    let only_approved = repo
        .top_level_for_post(post.id, CommentStatusFilter::Approved)
        .await?;
    assert_eq!(only_approved.len(), 1);
    assert_eq!(only_approved[0].id, approved.id);

    let only_pending = repo
        .top_level_for_post(post.id, CommentStatusFilter::Pending)
        .await?;
    assert_eq!(only_pending.len(), 1);
    assert_eq!(only_pending[0].id, pending.id);

    let all = repo
        .top_level_for_post(post.id, CommentStatusFilter::All)
        .await?;
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Tests that top-level comments come back newest first.
///
/// Created timestamps can collide in tests, so the id tiebreaker carries the
/// ordering guarantee here.
///
/// Expected: descending ids
#[tokio::test]
async fn top_level_orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = factory::post::create_post(db).await?;
    let first = CommentFactory::new(db, post.id).approved(true).build().await?;
    let second = CommentFactory::new(db, post.id).approved(true).build().await?;
    let third = CommentFactory::new(db, post.id).approved(true).build().await?;

    let repo = CommentRepository::new(db);
    let top_level = repo
        .top_level_for_post(post.id, CommentStatusFilter::All)
        .await?;

    let ids: Vec<i32> = top_level.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);

    Ok(())
}

/// Tests that the flat reply fetch returns only approved, non-trash replies
/// in oldest-first order.
///
/// Expected: ascending ids, pending and trashed replies absent
#[tokio::test]
async fn replies_for_post_returns_approved_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (post, parent) = factory::helpers::create_post_with_comment(db).await?;

    let first = CommentFactory::new(db, post.id)
        .parent(&parent)
        .approved(true)
        .build()
        .await?;
    let second = CommentFactory::new(db, post.id)
        .parent(&parent)
        .approved(true)
        .build()
        .await?;
    let _pending = CommentFactory::new(db, post.id).parent(&parent).build().await?;
    let _trashed = CommentFactory::new(db, post.id)
        .parent(&parent)
        .approved(true)
        .is_trash(true)
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let replies = repo.replies_for_post(post.id).await?;

    let ids: Vec<i32> = replies.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests subtree retrieval through the materialized path.
///
/// Verifies that descendants of one comment are returned while a sibling
/// subtree is not, and that the prefix match does not bleed into ids that
/// merely share leading digits.
///
/// Expected: only rows under the requested path
#[tokio::test]
async fn descendants_scoped_to_path_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = factory::post::create_post(db).await?;
    let root = CommentFactory::new(db, post.id).approved(true).build().await?;
    let sibling = CommentFactory::new(db, post.id).approved(true).build().await?;

    let child = CommentFactory::new(db, post.id)
        .parent(&root)
        .approved(true)
        .build()
        .await?;
    let grandchild = CommentFactory::new(db, post.id)
        .parent(&child)
        .approved(true)
        .build()
        .await?;
    let _other = CommentFactory::new(db, post.id)
        .parent(&sibling)
        .approved(true)
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let descendants = repo.descendants(&root.path).await?;

    let ids: Vec<i32> = descendants.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![child.id, grandchild.id]);

    Ok(())
}
