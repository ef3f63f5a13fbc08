use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::comment::{CommentStatusFilter, ModerationCounts, NewComment};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a comment, deriving `level` and `path` from the parent.
    ///
    /// The path embeds the new row's own id, which only exists after insert,
    /// so the write happens in two steps inside one transaction: insert the
    /// row, then persist the computed path. The intermediate empty-path state
    /// is never visible outside the transaction.
    pub async fn create(&self, params: NewComment) -> Result<entity::comment::Model, DbErr> {
        let txn = self.db.begin().await?;

        let now = Utc::now();
        let (parent_id, level) = match &params.parent {
            Some(parent) => (Some(parent.id), parent.level + 1),
            None => (None, 0),
        };

        let inserted = entity::comment::ActiveModel {
            post_id: ActiveValue::Set(params.post_id),
            parent_id: ActiveValue::Set(parent_id),
            author_name: ActiveValue::Set(params.author_name),
            author_email: ActiveValue::Set(params.author_email),
            author_website: ActiveValue::Set(params.author_website),
            content: ActiveValue::Set(params.content),
            approved: ActiveValue::Set(params.approved),
            is_trash: ActiveValue::Set(false),
            admin_reply: ActiveValue::Set(params.admin_reply),
            level: ActiveValue::Set(level),
            path: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let path = match &params.parent {
            Some(parent) if !parent.path.is_empty() => {
                format!("{}/{}", parent.path, inserted.id)
            }
            Some(parent) => format!("{}/{}", parent.id, inserted.id),
            None => inserted.id.to_string(),
        };

        let mut active: entity::comment::ActiveModel = inserted.into();
        active.path = ActiveValue::Set(path);
        let comment = active.update(&txn).await?;

        txn.commit().await?;

        Ok(comment)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find_by_id(id).one(self.db).await
    }

    /// Marks a comment approved and pulls it out of the trash.
    ///
    /// Returns the re-read row, or None if the id does not resolve. Approving
    /// an already-approved comment is a no-op success.
    pub async fn approve(&self, id: i32) -> Result<Option<entity::comment::Model>, DbErr> {
        let Some(comment) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::comment::ActiveModel = comment.into();
        active.approved = ActiveValue::Set(true);
        active.is_trash = ActiveValue::Set(false);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await.map(Some)
    }

    /// Moves a comment back to pending. Leaves `is_trash` untouched.
    pub async fn reject(&self, id: i32) -> Result<Option<entity::comment::Model>, DbErr> {
        let Some(comment) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::comment::ActiveModel = comment.into();
        active.approved = ActiveValue::Set(false);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await.map(Some)
    }

    /// Soft-deletes a comment. `approved` is preserved so restore round-trips.
    pub async fn trash(&self, id: i32) -> Result<Option<entity::comment::Model>, DbErr> {
        let Some(comment) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::comment::ActiveModel = comment.into();
        active.is_trash = ActiveValue::Set(true);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await.map(Some)
    }

    /// Clears the trash flag, returning the comment to its previous state.
    pub async fn restore(&self, id: i32) -> Result<Option<entity::comment::Model>, DbErr> {
        let Some(comment) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::comment::ActiveModel = comment.into();
        active.is_trash = ActiveValue::Set(false);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await.map(Some)
    }

    /// Permanently deletes a comment. Descendant replies and likes go with it
    /// via the store's cascade rules.
    ///
    /// # Returns
    /// - Number of rows deleted (0 if the id did not resolve)
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sets `approved` on a set of comments in a single statement.
    ///
    /// Rows already in the target state are excluded from the filter, so the
    /// returned count is the number of rows that actually changed.
    pub async fn bulk_set_approved(&self, ids: &[i32], approved: bool) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Comment::update_many()
            .col_expr(entity::comment::Column::Approved, Expr::value(approved))
            .col_expr(entity::comment::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::comment::Column::Id.is_in(ids.to_vec()))
            .filter(entity::comment::Column::Approved.ne(approved))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets top-level comments for a post, newest first.
    ///
    /// Trashed comments are always excluded; the status filter narrows by
    /// approval state.
    pub async fn top_level_for_post(
        &self,
        post_id: i32,
        filter: CommentStatusFilter,
    ) -> Result<Vec<entity::comment::Model>, DbErr> {
        let mut query = entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .filter(entity::comment::Column::ParentId.is_null())
            .filter(entity::comment::Column::IsTrash.eq(false));

        query = match filter {
            CommentStatusFilter::Approved => {
                query.filter(entity::comment::Column::Approved.eq(true))
            }
            CommentStatusFilter::Pending => {
                query.filter(entity::comment::Column::Approved.eq(false))
            }
            CommentStatusFilter::All => query,
        };

        query
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every approved, non-trash reply for a post, oldest first.
    ///
    /// One flat fetch; the retrieval service indexes the result by parent id
    /// and rebuilds the tree in memory.
    pub async fn replies_for_post(
        &self,
        post_id: i32,
    ) -> Result<Vec<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .filter(entity::comment::Column::ParentId.is_not_null())
            .filter(entity::comment::Column::Approved.eq(true))
            .filter(entity::comment::Column::IsTrash.eq(false))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the approved, non-trash descendants of a comment via its path.
    ///
    /// A subtree is everything whose path starts with `"{path}/"` — this is
    /// what the materialized path exists for.
    pub async fn descendants(&self, path: &str) -> Result<Vec<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::Path.starts_with(format!("{}/", path)))
            .filter(entity::comment::Column::Approved.eq(true))
            .filter(entity::comment::Column::IsTrash.eq(false))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await
    }

    /// Computes moderation counters, optionally scoped to one post.
    ///
    /// `all` counts non-trash rows and `trash` the rest, so the two always sum
    /// to the total row count of the scope.
    pub async fn counts(&self, post_id: Option<i32>) -> Result<ModerationCounts, DbErr> {
        let scoped = |query: sea_orm::Select<entity::prelude::Comment>| match post_id {
            Some(id) => query.filter(entity::comment::Column::PostId.eq(id)),
            None => query,
        };

        let all = scoped(entity::prelude::Comment::find())
            .filter(entity::comment::Column::IsTrash.eq(false))
            .count(self.db)
            .await?;

        let trash = scoped(entity::prelude::Comment::find())
            .filter(entity::comment::Column::IsTrash.eq(true))
            .count(self.db)
            .await?;

        let pending = scoped(entity::prelude::Comment::find())
            .filter(entity::comment::Column::IsTrash.eq(false))
            .filter(entity::comment::Column::Approved.eq(false))
            .count(self.db)
            .await?;

        let approved = scoped(entity::prelude::Comment::find())
            .filter(entity::comment::Column::IsTrash.eq(false))
            .filter(entity::comment::Column::Approved.eq(true))
            .count(self.db)
            .await?;

        Ok(ModerationCounts {
            all,
            pending,
            approved,
            trash,
        })
    }
}
