//! Post fixtures for creating in-memory test data.

use chrono::Utc;
use entity::post;

/// Default test post title.
pub const DEFAULT_TITLE: &str = "Test Post";

/// Default test post slug.
pub const DEFAULT_SLUG: &str = "test-post";

/// Creates a post entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - title: `"Test Post"`
/// - slug: `"test-post"`
pub fn entity() -> post::Model {
    post::Model {
        id: 1,
        title: DEFAULT_TITLE.to_string(),
        slug: DEFAULT_SLUG.to_string(),
        created_at: Utc::now(),
    }
}
