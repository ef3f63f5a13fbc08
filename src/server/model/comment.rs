//! Comment domain models and parameters.
//!
//! Provides parameter types for the create/reply operations, the moderation
//! status filter, and the threaded comment model produced by the retrieval
//! service.

use crate::model::comment::{CommentCountsDto, CommentDto, CreateCommentDto, ReplyCommentDto};
use crate::server::model::post::PostRef;

/// Parameters for creating a new top-level comment or reply via the public API.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub post: PostRef,
    pub parent_id: Option<i32>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub author_website: Option<String>,
    pub content: String,
}

impl CreateCommentParams {
    pub fn from_dto(dto: CreateCommentDto) -> Self {
        Self {
            post: dto.post.into(),
            parent_id: dto.parent_id,
            author_name: dto.author_name,
            author_email: dto.author_email,
            author_website: dto.author_website,
            content: dto.content,
        }
    }
}

/// Parameters for replying to an existing comment.
///
/// When `admin_reply` is set the reply is a moderator reply: it is created
/// pre-approved and the text is stored alongside the content.
#[derive(Debug, Clone)]
pub struct ReplyParams {
    pub parent_id: i32,
    pub content: String,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub author_website: Option<String>,
    pub admin_reply: Option<String>,
}

impl ReplyParams {
    pub fn from_dto(parent_id: i32, dto: ReplyCommentDto) -> Self {
        Self {
            parent_id,
            content: dto.content,
            author_name: dto.author_name,
            author_email: dto.author_email,
            author_website: dto.author_website,
            admin_reply: dto.admin_reply,
        }
    }
}

/// Insert-ready comment data handed to the repository.
///
/// The parent is carried as a full entity model so the repository can derive
/// `level` and `path` without another lookup.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: i32,
    pub parent: Option<entity::comment::Model>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub author_website: Option<String>,
    pub content: String,
    pub approved: bool,
    pub admin_reply: Option<String>,
}

/// Moderation status filter for comment listings.
///
/// Unrecognized filter values fall back to `All` rather than erroring; the
/// filter is advisory, not part of the validation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStatusFilter {
    Approved,
    Pending,
    All,
}

impl CommentStatusFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("approved") => Self::Approved,
            Some("pending") => Self::Pending,
            _ => Self::All,
        }
    }
}

/// Bounds applied when serializing a comment tree.
#[derive(Debug, Clone, Copy)]
pub struct ThreadOptions {
    /// Depth at which recursion stops; replies below it are omitted.
    pub max_depth: usize,
    /// Maximum direct replies serialized per comment.
    pub replies_limit: usize,
}

impl Default for ThreadOptions {
    fn default() -> Self {
        Self {
            max_depth: 3,
            replies_limit: 5,
        }
    }
}

/// A comment with its like aggregate and bounded reply subtree.
#[derive(Debug, Clone)]
pub struct ThreadedComment {
    pub comment: entity::comment::Model,
    pub like_count: u64,
    pub reply_count: u64,
    pub has_more_replies: bool,
    pub replies: Vec<ThreadedComment>,
}

impl ThreadedComment {
    /// Converts the threaded domain model to a DTO for API responses.
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.comment.id,
            post_id: self.comment.post_id,
            parent_id: self.comment.parent_id,
            author_name: self.comment.author_name,
            author_email: self.comment.author_email,
            author_website: self.comment.author_website,
            content: self.comment.content,
            approved: self.comment.approved,
            admin_reply: self.comment.admin_reply,
            level: self.comment.level,
            path: self.comment.path,
            created_at: self.comment.created_at,
            updated_at: self.comment.updated_at,
            like_count: self.like_count,
            reply_count: self.reply_count,
            has_more_replies: self.has_more_replies,
            replies: self.replies.into_iter().map(|r| r.into_dto()).collect(),
        }
    }
}

/// Aggregate moderation counters for a post or the whole store.
///
/// `all` and `trash` partition the row count: `all + trash == total rows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModerationCounts {
    pub all: u64,
    pub pending: u64,
    pub approved: u64,
    pub trash: u64,
}

impl ModerationCounts {
    pub fn into_dto(self) -> CommentCountsDto {
        CommentCountsDto {
            all: self.all,
            pending: self.pending,
            approved: self.approved,
            trash: self.trash,
        }
    }
}
