//! Threaded comment retrieval.
//!
//! Builds bounded tree views of a post's comments. Rather than following
//! parent pointers row by row, the service fetches the relevant comments in
//! flat queries, indexes them by parent id, and reconstructs the hierarchy in
//! memory. Recursion is bounded by `ThreadOptions::max_depth`, so even a
//! corrupted self-referential chain cannot make serialization diverge.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, comment_like::CommentLikeRepository, post::PostRepository},
    error::AppError,
    model::comment::{CommentStatusFilter, ModerationCounts, ThreadOptions, ThreadedComment},
    model::post::PostRef,
};

pub struct ThreadService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ThreadService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the threaded comments for a post.
    ///
    /// Top-level comments are ordered newest first and filtered by moderation
    /// status; replies within each thread run oldest first and only approved,
    /// non-trash replies appear.
    pub async fn list_for_post(
        &self,
        post: &PostRef,
        filter: CommentStatusFilter,
        opts: ThreadOptions,
    ) -> Result<Vec<ThreadedComment>, AppError> {
        let post = PostRepository::new(self.db)
            .find_by_ref(post)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        let repo = CommentRepository::new(self.db);

        let top_level = repo.top_level_for_post(post.id, filter).await?;
        let replies = repo.replies_for_post(post.id).await?;

        let mut ids: Vec<i32> = top_level.iter().map(|c| c.id).collect();
        ids.extend(replies.iter().map(|c| c.id));

        let likes = CommentLikeRepository::new(self.db)
            .count_by_comment(&ids)
            .await?;

        let children = index_by_parent(replies);

        Ok(top_level
            .into_iter()
            .map(|comment| build_thread(comment, &children, &likes, opts, 0))
            .collect())
    }

    /// Serializes a single comment with its bounded reply subtree.
    ///
    /// The subtree is fetched with one prefix query on the materialized path.
    pub async fn serialize_one(
        &self,
        comment: entity::comment::Model,
        opts: ThreadOptions,
    ) -> Result<ThreadedComment, AppError> {
        let descendants = CommentRepository::new(self.db)
            .descendants(&comment.path)
            .await?;

        let mut ids: Vec<i32> = descendants.iter().map(|c| c.id).collect();
        ids.push(comment.id);

        let likes = CommentLikeRepository::new(self.db)
            .count_by_comment(&ids)
            .await?;

        let children = index_by_parent(descendants);

        Ok(build_thread(comment, &children, &likes, opts, 0))
    }

    /// Computes moderation counters, optionally scoped to one post.
    pub async fn counts(&self, post: Option<&PostRef>) -> Result<ModerationCounts, AppError> {
        let post_id = match post {
            Some(post_ref) => {
                let post = PostRepository::new(self.db)
                    .find_by_ref(post_ref)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;
                Some(post.id)
            }
            None => None,
        };

        let counts = CommentRepository::new(self.db).counts(post_id).await?;

        Ok(counts)
    }
}

/// Indexes flat reply rows into an arena keyed by parent id.
///
/// Rows keep their query order, so per-parent reply ordering survives.
pub fn index_by_parent(
    replies: Vec<entity::comment::Model>,
) -> HashMap<i32, Vec<entity::comment::Model>> {
    let mut children: HashMap<i32, Vec<entity::comment::Model>> = HashMap::new();

    for reply in replies {
        if let Some(parent_id) = reply.parent_id {
            children.entry(parent_id).or_default().push(reply);
        }
    }

    children
}

/// Recursively builds a bounded thread from the arena.
///
/// `reply_count` always reflects the arena (approved, non-trash direct
/// replies). At `depth >= max_depth` the `replies` vector is empty regardless
/// of the actual count; otherwise at most `replies_limit` replies are
/// serialized, with `has_more_replies` signalling truncation.
pub fn build_thread(
    comment: entity::comment::Model,
    children: &HashMap<i32, Vec<entity::comment::Model>>,
    likes: &HashMap<i32, u64>,
    opts: ThreadOptions,
    depth: usize,
) -> ThreadedComment {
    let direct = children.get(&comment.id);
    let reply_count = direct.map(|replies| replies.len()).unwrap_or(0) as u64;
    let has_more_replies = reply_count > opts.replies_limit as u64;

    let replies = if depth >= opts.max_depth {
        Vec::new()
    } else {
        direct
            .map(|replies| {
                replies
                    .iter()
                    .take(opts.replies_limit)
                    .cloned()
                    .map(|reply| build_thread(reply, children, likes, opts, depth + 1))
                    .collect()
            })
            .unwrap_or_default()
    };

    let like_count = likes.get(&comment.id).copied().unwrap_or(0);

    ThreadedComment {
        comment,
        like_count,
        reply_count,
        has_more_replies,
        replies,
    }
}
