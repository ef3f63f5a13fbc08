use sea_orm::DatabaseConnection;

use crate::server::{data::post::PostRepository, error::AppError, model::post::PostRef};

/// Minimal post management.
///
/// Posts exist here as the owning side of comments; this service covers just
/// enough surface for comments to attach to something real.
pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a post with a unique slug.
    pub async fn create(&self, title: String, slug: String) -> Result<entity::post::Model, AppError> {
        if title.trim().is_empty() || slug.trim().is_empty() {
            return Err(AppError::Validation(
                "Post title and slug must not be empty".to_string(),
            ));
        }

        let repo = PostRepository::new(self.db);

        if repo
            .find_by_ref(&PostRef::BySlug(slug.clone()))
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("Slug already in use".to_string()));
        }

        let post = repo.create(title, slug).await?;

        Ok(post)
    }

    /// Resolves a post by id or slug.
    pub async fn get(&self, post: &PostRef) -> Result<entity::post::Model, AppError> {
        PostRepository::new(self.db)
            .find_by_ref(post)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }

    /// Lists all posts, newest first.
    pub async fn list(&self) -> Result<Vec<entity::post::Model>, AppError> {
        let posts = PostRepository::new(self.db).list().await?;

        Ok(posts)
    }
}
