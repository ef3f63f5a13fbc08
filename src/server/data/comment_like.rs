use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct CommentLikeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentLikeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether the given name has already liked the comment.
    pub async fn exists(&self, comment_id: i32, user_name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::CommentLike::find()
            .filter(entity::comment_like::Column::CommentId.eq(comment_id))
            .filter(entity::comment_like::Column::UserName.eq(user_name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Records a like. The unique index backs up the existence check the
    /// service performs first.
    pub async fn create(
        &self,
        comment_id: i32,
        user_name: String,
    ) -> Result<entity::comment_like::Model, DbErr> {
        entity::comment_like::ActiveModel {
            comment_id: ActiveValue::Set(comment_id),
            user_name: ActiveValue::Set(user_name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Removes a like.
    ///
    /// # Returns
    /// - Number of rows deleted (0 if the pair never existed)
    pub async fn delete(&self, comment_id: i32, user_name: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::CommentLike::delete_many()
            .filter(entity::comment_like::Column::CommentId.eq(comment_id))
            .filter(entity::comment_like::Column::UserName.eq(user_name))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts likes for a single comment.
    pub async fn count(&self, comment_id: i32) -> Result<u64, DbErr> {
        entity::prelude::CommentLike::find()
            .filter(entity::comment_like::Column::CommentId.eq(comment_id))
            .count(self.db)
            .await
    }

    /// Lists the names that have liked a comment, oldest like first.
    pub async fn user_names(&self, comment_id: i32) -> Result<Vec<String>, DbErr> {
        let likes = entity::prelude::CommentLike::find()
            .filter(entity::comment_like::Column::CommentId.eq(comment_id))
            .order_by_asc(entity::comment_like::Column::CreatedAt)
            .order_by_asc(entity::comment_like::Column::Id)
            .all(self.db)
            .await?;

        Ok(likes.into_iter().map(|like| like.user_name).collect())
    }

    /// Gets like counts for a batch of comments in one query.
    ///
    /// Comments without likes are absent from the map; callers default to 0.
    pub async fn count_by_comment(&self, comment_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        if comment_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let likes = entity::prelude::CommentLike::find()
            .filter(entity::comment_like::Column::CommentId.is_in(comment_ids.to_vec()))
            .all(self.db)
            .await?;

        let mut counts: HashMap<i32, u64> = HashMap::new();
        for like in likes {
            *counts.entry(like.comment_id).or_insert(0) += 1;
        }

        Ok(counts)
    }
}
