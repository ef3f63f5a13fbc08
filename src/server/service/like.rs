use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, comment_like::CommentLikeRepository},
    error::AppError,
};

/// Aggregate view of a comment's likes.
#[derive(Debug, Clone)]
pub struct LikeSummary {
    pub count: u64,
    pub user_names: Vec<String>,
}

/// Manages the per-comment like ledger.
///
/// `user_name` is a client-supplied identifier, not an authenticated account;
/// the at-most-one-like guarantee is only as strong as name honesty. That is
/// an accepted limitation of the contract.
pub struct LikeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LikeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a like for a comment under the given name.
    ///
    /// # Errors
    /// - `NotFound` - The comment id does not resolve
    /// - `Conflict` - The name has already liked this comment
    pub async fn like(&self, comment_id: i32, user_name: String) -> Result<LikeSummary, AppError> {
        self.require_comment(comment_id).await?;

        let repo = CommentLikeRepository::new(self.db);

        if repo.exists(comment_id, &user_name).await? {
            return Err(AppError::Conflict(
                "You have already liked this comment".to_string(),
            ));
        }

        repo.create(comment_id, user_name).await?;

        self.summary(comment_id).await
    }

    /// Removes a like for a comment under the given name.
    ///
    /// # Errors
    /// - `NotFound` - The comment id does not resolve, or the name never liked it
    pub async fn unlike(&self, comment_id: i32, user_name: &str) -> Result<LikeSummary, AppError> {
        self.require_comment(comment_id).await?;

        let deleted = CommentLikeRepository::new(self.db)
            .delete(comment_id, user_name)
            .await?;

        if deleted == 0 {
            return Err(AppError::NotFound(
                "You have not liked this comment".to_string(),
            ));
        }

        self.summary(comment_id).await
    }

    /// Gets the like count and the names behind it.
    pub async fn likes(&self, comment_id: i32) -> Result<LikeSummary, AppError> {
        self.require_comment(comment_id).await?;

        self.summary(comment_id).await
    }

    async fn require_comment(&self, comment_id: i32) -> Result<(), AppError> {
        CommentRepository::new(self.db)
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        Ok(())
    }

    async fn summary(&self, comment_id: i32) -> Result<LikeSummary, AppError> {
        let repo = CommentLikeRepository::new(self.db);

        let count = repo.count(comment_id).await?;
        let user_names = repo.user_names(comment_id).await?;

        Ok(LikeSummary { count, user_names })
    }
}
