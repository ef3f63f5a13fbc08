//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique test
/// identifiers across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a post with one approved top-level comment attached.
///
/// Convenience for tests that just need "a comment on a post" without caring
/// about the details.
///
/// # Returns
/// - `Ok((post, comment))` - The created post and comment
/// - `Err(DbErr)` - Database error during creation
pub async fn create_post_with_comment(
    db: &DatabaseConnection,
) -> Result<(entity::post::Model, entity::comment::Model), DbErr> {
    let post = super::post::create_post(db).await?;
    let comment = super::comment::CommentFactory::new(db, post.id)
        .approved(true)
        .build()
        .await?;

    Ok((post, comment))
}
