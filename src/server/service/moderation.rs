use sea_orm::DatabaseConnection;

use crate::server::{data::comment::CommentRepository, error::AppError};

/// Applies the moderation lifecycle to comments.
///
/// States map onto two flags: pending (`approved=false, is_trash=false`),
/// approved (`approved=true, is_trash=false`), trashed (`is_trash=true`,
/// approval preserved), deleted (row gone). Each transition is persisted
/// independently and the updated row is re-read and returned, so the caller
/// always sees the committed state. Concurrent transitions on the same
/// comment are last-write-wins; there is no version guard.
pub struct ModerationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModerationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Approves a comment. Idempotent: approving an approved comment succeeds.
    pub async fn approve(&self, id: i32) -> Result<entity::comment::Model, AppError> {
        CommentRepository::new(self.db)
            .approve(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))
    }

    /// Moves a comment back to pending. Does not touch the trash flag.
    pub async fn reject(&self, id: i32) -> Result<entity::comment::Model, AppError> {
        CommentRepository::new(self.db)
            .reject(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))
    }

    /// Soft-deletes a comment, preserving its approval state for restore.
    pub async fn trash(&self, id: i32) -> Result<entity::comment::Model, AppError> {
        CommentRepository::new(self.db)
            .trash(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))
    }

    /// Restores a trashed comment to its previous state.
    pub async fn restore(&self, id: i32) -> Result<entity::comment::Model, AppError> {
        CommentRepository::new(self.db)
            .restore(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))
    }

    /// Permanently deletes a comment and, via cascade, its descendants.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = CommentRepository::new(self.db).delete(id).await?;

        if deleted == 0 {
            return Err(AppError::NotFound("Comment not found".to_string()));
        }

        Ok(())
    }

    /// Approves a set of comments in one statement.
    ///
    /// # Returns
    /// - Number of comments that actually changed state; ids already approved
    ///   are not counted but still end up approved
    pub async fn bulk_approve(&self, ids: &[i32]) -> Result<u64, AppError> {
        let changed = CommentRepository::new(self.db)
            .bulk_set_approved(ids, true)
            .await?;

        Ok(changed)
    }

    /// Rejects a set of comments in one statement.
    ///
    /// Counting mirrors `bulk_approve`: only rows whose flag flipped count.
    pub async fn bulk_reject(&self, ids: &[i32]) -> Result<u64, AppError> {
        let changed = CommentRepository::new(self.db)
            .bulk_set_approved(ids, false)
            .await?;

        Ok(changed)
    }
}
