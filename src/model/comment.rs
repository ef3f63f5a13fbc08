use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::post::PostRefDto;

/// Serialized comment, including its bounded reply tree.
///
/// `replies` holds at most the serializer's reply limit; `has_more_replies`
/// tells the client when to fetch the rest. Below the depth limit `replies`
/// is empty while `reply_count` still reflects the store.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub post_id: i32,
    pub parent_id: Option<i32>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub author_website: Option<String>,
    pub content: String,
    pub approved: bool,
    pub admin_reply: Option<String>,
    pub level: i32,
    pub path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub like_count: u64,
    pub reply_count: u64,
    pub has_more_replies: bool,
    #[schema(no_recursion)]
    pub replies: Vec<CommentDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCommentDto {
    pub post: PostRefDto,
    pub parent_id: Option<i32>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub author_website: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReplyCommentDto {
    pub content: String,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub author_website: Option<String>,
    /// Present only for moderator replies; requires a staff token.
    pub admin_reply: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LikeDto {
    pub user_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LikesDto {
    pub count: u64,
    pub user_names: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkCommentIdsDto {
    pub comment_ids: Vec<i32>,
}

/// Result of a bulk moderation call: rows whose state actually changed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkChangedDto {
    pub changed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentCountsDto {
    pub all: u64,
    pub pending: u64,
    pub approved: u64,
    pub trash: u64,
}
