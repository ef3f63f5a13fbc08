//! Comment factory for creating test comment entities.
//!
//! The factory performs the same two-step path write as the application's
//! repository: insert to obtain the row id, then persist the materialized
//! ancestor path. Factory-created comments therefore satisfy the hierarchy
//! invariants (`level`, `path`) that the rest of the test suite relies on.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::comment::CommentFactory;
///
/// let reply = CommentFactory::new(&db, post.id)
///     .parent(&top_level)
///     .approved(true)
///     .content("A reply")
///     .build()
///     .await?;
/// ```
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    post_id: i32,
    parent: Option<entity::comment::Model>,
    author_name: Option<String>,
    author_email: Option<String>,
    content: String,
    approved: bool,
    is_trash: bool,
    admin_reply: Option<String>,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// Defaults:
    /// - no parent (top-level comment)
    /// - author_name: `"Commenter {id}"` where id is auto-incremented
    /// - content: `"Test comment {id}"`
    /// - approved: `false`, is_trash: `false`, admin_reply: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `post_id` - Post this comment belongs to
    pub fn new(db: &'a DatabaseConnection, post_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            post_id,
            parent: None,
            author_name: Some(format!("Commenter {}", id)),
            author_email: None,
            content: format!("Test comment {}", id),
            approved: false,
            is_trash: false,
            admin_reply: None,
        }
    }

    /// Sets the parent comment, making this a reply.
    ///
    /// The reply inherits the parent's post and derives `level`/`path` from it.
    pub fn parent(mut self, parent: &entity::comment::Model) -> Self {
        self.post_id = parent.post_id;
        self.parent = Some(parent.clone());
        self
    }

    /// Sets the author name.
    pub fn author_name(mut self, name: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self
    }

    /// Sets the author email.
    pub fn author_email(mut self, email: impl Into<String>) -> Self {
        self.author_email = Some(email.into());
        self
    }

    /// Sets the comment body.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the approved flag.
    pub fn approved(mut self, approved: bool) -> Self {
        self.approved = approved;
        self
    }

    /// Sets the trash flag.
    pub fn is_trash(mut self, is_trash: bool) -> Self {
        self.is_trash = is_trash;
        self
    }

    /// Sets a moderator reply text.
    pub fn admin_reply(mut self, reply: impl Into<String>) -> Self {
        self.admin_reply = Some(reply.into());
        self
    }

    /// Builds and inserts the comment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::comment::Model)` - Created comment with `path` populated
    /// - `Err(DbErr)` - Database error during insert or path update
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        let now = Utc::now();
        let (parent_id, level) = match &self.parent {
            Some(parent) => (Some(parent.id), parent.level + 1),
            None => (None, 0),
        };

        let inserted = entity::comment::ActiveModel {
            post_id: ActiveValue::Set(self.post_id),
            parent_id: ActiveValue::Set(parent_id),
            author_name: ActiveValue::Set(self.author_name),
            author_email: ActiveValue::Set(self.author_email),
            author_website: ActiveValue::Set(None),
            content: ActiveValue::Set(self.content),
            approved: ActiveValue::Set(self.approved),
            is_trash: ActiveValue::Set(self.is_trash),
            admin_reply: ActiveValue::Set(self.admin_reply),
            level: ActiveValue::Set(level),
            path: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let path = match &self.parent {
            Some(parent) if !parent.path.is_empty() => {
                format!("{}/{}", parent.path, inserted.id)
            }
            Some(parent) => format!("{}/{}", parent.id, inserted.id),
            None => inserted.id.to_string(),
        };

        let mut active: entity::comment::ActiveModel = inserted.into();
        active.path = ActiveValue::Set(path);

        active.update(self.db).await
    }
}
