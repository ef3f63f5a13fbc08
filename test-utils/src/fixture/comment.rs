//! Comment fixtures for creating in-memory test data.
//!
//! Useful when exercising pure tree-building logic that takes entity models
//! directly instead of querying the database.

use chrono::Utc;
use entity::comment;

/// Default test comment content.
pub const DEFAULT_CONTENT: &str = "Test comment";

/// Creates a top-level comment entity model with default values.
///
/// # Default Values
/// - id: `1`, post_id: `1`, no parent
/// - content: `"Test comment"`
/// - approved: `true`, is_trash: `false`
/// - level: `0`, path: `"1"`
pub fn entity() -> comment::Model {
    let now = Utc::now();
    comment::Model {
        id: 1,
        post_id: 1,
        parent_id: None,
        author_name: Some("Commenter".to_string()),
        author_email: None,
        author_website: None,
        content: DEFAULT_CONTENT.to_string(),
        approved: true,
        is_trash: false,
        admin_reply: None,
        level: 0,
        path: "1".to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Creates a comment entity model with the given id as a child of `parent`.
///
/// Derives `level` and `path` from the parent so hierarchy invariants hold.
pub fn child_of(parent: &comment::Model, id: i32) -> comment::Model {
    let now = Utc::now();
    comment::Model {
        id,
        post_id: parent.post_id,
        parent_id: Some(parent.id),
        level: parent.level + 1,
        path: format!("{}/{}", parent.path, id),
        created_at: now,
        updated_at: now,
        ..entity()
    }
}
