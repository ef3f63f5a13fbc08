use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::post::PostRef;

pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new post.
    pub async fn create(&self, title: String, slug: String) -> Result<entity::post::Model, DbErr> {
        entity::post::ActiveModel {
            title: ActiveValue::Set(title),
            slug: ActiveValue::Set(slug),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Resolves a post reference (id or slug) to its entity.
    pub async fn find_by_ref(&self, post: &PostRef) -> Result<Option<entity::post::Model>, DbErr> {
        match post {
            PostRef::ById(id) => entity::prelude::Post::find_by_id(*id).one(self.db).await,
            PostRef::BySlug(slug) => {
                entity::prelude::Post::find()
                    .filter(entity::post::Column::Slug.eq(slug.clone()))
                    .one(self.db)
                    .await
            }
        }
    }

    /// Lists all posts, newest first.
    pub async fn list(&self) -> Result<Vec<entity::post::Model>, DbErr> {
        entity::prelude::Post::find()
            .order_by_desc(entity::post::Column::CreatedAt)
            .order_by_desc(entity::post::Column::Id)
            .all(self.db)
            .await
    }
}
