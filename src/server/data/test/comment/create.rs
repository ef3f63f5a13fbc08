use super::*;

fn new_comment(post_id: i32, parent: Option<entity::comment::Model>) -> NewComment {
    NewComment {
        post_id,
        parent,
        author_name: Some("Alice".to_string()),
        author_email: None,
        author_website: None,
        content: "Hello".to_string(),
        approved: false,
        admin_reply: None,
    }
}

/// Tests creating a top-level comment.
///
/// Verifies that a comment without a parent gets level 0 and a path equal to
/// its own id, and starts pending and not trashed.
///
/// Expected: Ok with level 0 and own-id path
#[tokio::test]
async fn creates_top_level_comment_with_own_id_path() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = factory::post::create_post(db).await?;

    let repo = CommentRepository::new(db);
    let comment = repo.create(new_comment(post.id, None)).await?;

    assert_eq!(comment.level, 0);
    assert_eq!(comment.path, comment.id.to_string());
    assert_eq!(comment.parent_id, None);
    assert!(!comment.approved);
    assert!(!comment.is_trash);

    // Verify the persisted row carries the path, not the insert placeholder
    let db_comment = entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_comment.path, comment.id.to_string());

    Ok(())
}

/// Tests creating a reply under an existing comment.
///
/// Verifies that the reply's level is one more than the parent's and its path
/// extends the parent's path with its own id.
///
/// Expected: Ok with derived level and path
#[tokio::test]
async fn creates_reply_with_derived_level_and_path() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_post, parent) = factory::helpers::create_post_with_comment(db).await?;

    let repo = CommentRepository::new(db);
    let reply = repo
        .create(new_comment(parent.post_id, Some(parent.clone())))
        .await?;

    assert_eq!(reply.level, parent.level + 1);
    assert_eq!(reply.parent_id, Some(parent.id));
    assert_eq!(reply.path, format!("{}/{}", parent.path, reply.id));

    Ok(())
}

/// Tests that paths chain across three generations.
///
/// Verifies that a grandchild's path contains every ancestor id in order and
/// its level counts both ancestors.
///
/// Expected: Ok with a three-segment path at level 2
#[tokio::test]
async fn nested_replies_chain_ancestor_paths() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_post, root) = factory::helpers::create_post_with_comment(db).await?;

    let repo = CommentRepository::new(db);
    let child = repo
        .create(new_comment(root.post_id, Some(root.clone())))
        .await?;
    let grandchild = repo
        .create(new_comment(root.post_id, Some(child.clone())))
        .await?;

    assert_eq!(grandchild.level, 2);
    assert_eq!(
        grandchild.path,
        format!("{}/{}/{}", root.id, child.id, grandchild.id)
    );

    Ok(())
}

/// Tests that the approved flag supplied at creation is persisted.
///
/// Moderator replies are inserted pre-approved; this covers that path.
///
/// Expected: Ok with approved set and admin_reply stored
#[tokio::test]
async fn creates_pre_approved_comment_with_admin_reply() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_post, parent) = factory::helpers::create_post_with_comment(db).await?;

    let repo = CommentRepository::new(db);
    let reply = repo
        .create(NewComment {
            post_id: parent.post_id,
            parent: Some(parent),
            author_name: Some("Moderator".to_string()),
            author_email: None,
            author_website: None,
            content: "Thanks for reporting".to_string(),
            approved: true,
            admin_reply: Some("Thanks for reporting".to_string()),
        })
        .await?;

    assert!(reply.approved);
    assert_eq!(reply.admin_reply.as_deref(), Some("Thanks for reporting"));

    Ok(())
}
