use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, post::PostRepository},
    error::AppError,
    model::comment::{CreateCommentParams, NewComment, ReplyParams},
};

/// Creates comments and replies.
///
/// Public submissions start pending; moderator replies (those carrying
/// `admin_reply`) are auto-approved. Hierarchy derivation (`level`, `path`)
/// happens in the repository's insert transaction.
pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a comment from a public submission.
    ///
    /// The post reference must resolve and, when a parent is given, the parent
    /// must exist and belong to the same post. New comments are pending.
    pub async fn create(
        &self,
        params: CreateCommentParams,
    ) -> Result<entity::comment::Model, AppError> {
        if params.content.trim().is_empty() {
            return Err(AppError::Validation(
                "Comment content must not be empty".to_string(),
            ));
        }

        let post = PostRepository::new(self.db)
            .find_by_ref(&params.post)
            .await?
            .ok_or_else(|| AppError::Validation("Unknown post".to_string()))?;

        let repo = CommentRepository::new(self.db);

        let parent = match params.parent_id {
            Some(parent_id) => {
                let parent = repo.find_by_id(parent_id).await?.ok_or_else(|| {
                    AppError::Validation("Parent comment not found".to_string())
                })?;

                if parent.post_id != post.id {
                    return Err(AppError::Validation(
                        "Parent comment belongs to a different post".to_string(),
                    ));
                }

                Some(parent)
            }
            None => None,
        };

        let comment = repo
            .create(NewComment {
                post_id: post.id,
                parent,
                author_name: params.author_name,
                author_email: params.author_email,
                author_website: params.author_website,
                content: params.content,
                approved: false,
                admin_reply: None,
            })
            .await?;

        Ok(comment)
    }

    /// Creates a reply under an existing comment.
    ///
    /// A public reply is created pending, exactly like `create`. A moderator
    /// reply (with `admin_reply` set) is auto-approved; the controller is
    /// responsible for requiring a staff token in that case.
    pub async fn reply(&self, params: ReplyParams) -> Result<entity::comment::Model, AppError> {
        if params.content.trim().is_empty() {
            return Err(AppError::Validation(
                "Comment content must not be empty".to_string(),
            ));
        }

        let repo = CommentRepository::new(self.db);

        let parent = repo
            .find_by_id(params.parent_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        let approved = params.admin_reply.is_some();

        let comment = repo
            .create(NewComment {
                post_id: parent.post_id,
                parent: Some(parent),
                author_name: params.author_name,
                author_email: params.author_email,
                author_website: params.author_website,
                content: params.content,
                approved,
                admin_reply: params.admin_reply,
            })
            .await?;

        Ok(comment)
    }
}
