use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        comment::{
            BulkChangedDto, BulkCommentIdsDto, CommentCountsDto, CommentDto, CreateCommentDto,
            LikeDto, LikesDto, ReplyCommentDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::comment::{
            CommentStatusFilter, CreateCommentParams, ReplyParams, ThreadOptions,
        },
        model::post::PostRef,
        service::{
            comment::CommentService, like::LikeService, moderation::ModerationService,
            thread::ThreadService,
        },
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

#[derive(Deserialize)]
pub struct CommentListParams {
    pub post: Option<String>,
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct CommentCountParams {
    pub post: Option<String>,
}

/// Submit a new comment.
///
/// Creates a top-level comment or, when `parent_id` is supplied, a reply under
/// an existing comment on the same post. The post may be referenced by numeric
/// id or by slug. New submissions always start pending moderation.
///
/// # Returns
/// - `201 Created` - The created comment, pending approval
/// - `400 Bad Request` - Empty content, unknown post, or mismatched parent
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/comments",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Successfully created comment", body = CommentDto),
        (status = 400, description = "Invalid comment data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentService::new(&state.db);

    let params = CreateCommentParams::from_dto(payload);

    let comment = service.create(params).await?;

    let threaded = ThreadService::new(&state.db)
        .serialize_one(comment, ThreadOptions::default())
        .await?;

    Ok((StatusCode::CREATED, Json(threaded.into_dto())))
}

/// Get the threaded comments for a post.
///
/// Returns the post's comment threads with bounded depth and bounded replies
/// per comment. Top-level comments run newest first; replies within a thread
/// run oldest first. The optional `status` filter narrows top-level comments
/// to `approved` or `pending`; any other value lists all non-trash comments.
///
/// # Returns
/// - `200 OK` - Threaded comments for the post
/// - `400 Bad Request` - Missing `post` query parameter
/// - `404 Not Found` - Post not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/comments",
    tag = COMMENT_TAG,
    params(
        ("post" = String, Query, description = "Post id or slug"),
        ("status" = Option<String>, Query, description = "Status filter: approved, pending, or all (default: all)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved comments", body = Vec<CommentDto>),
        (status = 400, description = "Missing post parameter", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    Query(params): Query<CommentListParams>,
) -> Result<impl IntoResponse, AppError> {
    let Some(post) = params.post else {
        return Err(AppError::Validation(
            "Missing required query parameter: post".to_string(),
        ));
    };

    let post_ref = PostRef::parse(&post);
    let filter = CommentStatusFilter::parse(params.status.as_deref());

    let threads = ThreadService::new(&state.db)
        .list_for_post(&post_ref, filter, ThreadOptions::default())
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            threads
                .into_iter()
                .map(|t| t.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get moderation counters.
///
/// Returns how many comments are pending, approved, and trashed, either for
/// one post (`post` query parameter) or across the whole store.
///
/// # Returns
/// - `200 OK` - Moderation counters
/// - `404 Not Found` - Post not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/comments/counts",
    tag = COMMENT_TAG,
    params(
        ("post" = Option<String>, Query, description = "Post id or slug; omit for store-wide counts")
    ),
    responses(
        (status = 200, description = "Successfully retrieved counts", body = CommentCountsDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comment_counts(
    State(state): State<AppState>,
    Query(params): Query<CommentCountParams>,
) -> Result<impl IntoResponse, AppError> {
    let post_ref = params.post.as_deref().map(PostRef::parse);

    let counts = ThreadService::new(&state.db)
        .counts(post_ref.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(counts.into_dto())))
}

/// Reply to an existing comment.
///
/// Creates a child comment under the given parent. A plain reply starts
/// pending like any submission. When `admin_reply` is set the reply is a
/// moderator reply: it requires a staff token and is created pre-approved.
///
/// # Access Control
/// - `Staff` - Required only when `admin_reply` is present
///
/// # Returns
/// - `201 Created` - The created reply
/// - `400 Bad Request` - Empty content
/// - `401 Unauthorized` - Moderator reply without a valid staff token
/// - `404 Not Found` - Parent comment not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/comments/{id}/reply",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Parent comment ID")
    ),
    request_body = ReplyCommentDto,
    responses(
        (status = 201, description = "Successfully created reply", body = CommentDto),
        (status = 400, description = "Invalid reply data", body = ErrorDto),
        (status = 401, description = "Staff token required for moderator replies", body = ErrorDto),
        (status = 404, description = "Parent comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reply_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<ReplyCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.admin_reply.is_some() {
        let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Staff])?;
    }

    let service = CommentService::new(&state.db);

    let params = ReplyParams::from_dto(id, payload);

    let comment = service.reply(params).await?;

    let threaded = ThreadService::new(&state.db)
        .serialize_one(comment, ThreadOptions::default())
        .await?;

    Ok((StatusCode::CREATED, Json(threaded.into_dto())))
}

/// Approve a comment.
///
/// Marks the comment approved and clears the trash flag. Approving an already
/// approved comment succeeds without change.
///
/// # Access Control
/// - `Staff` - Only moderators can approve comments
///
/// # Returns
/// - `200 OK` - The approved comment
/// - `401 Unauthorized` - Missing or invalid staff token
/// - `404 Not Found` - Comment not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/comments/{id}/approve",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Successfully approved comment", body = CommentDto),
        (status = 401, description = "Missing or invalid staff token", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Staff])?;

    let comment = ModerationService::new(&state.db).approve(id).await?;

    let threaded = ThreadService::new(&state.db)
        .serialize_one(comment, ThreadOptions::default())
        .await?;

    Ok((StatusCode::OK, Json(threaded.into_dto())))
}

/// Reject a comment.
///
/// Moves the comment back to pending. The trash flag is untouched.
///
/// # Access Control
/// - `Staff` - Only moderators can reject comments
///
/// # Returns
/// - `200 OK` - The rejected comment
/// - `401 Unauthorized` - Missing or invalid staff token
/// - `404 Not Found` - Comment not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/comments/{id}/reject",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Successfully rejected comment", body = CommentDto),
        (status = 401, description = "Missing or invalid staff token", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Staff])?;

    let comment = ModerationService::new(&state.db).reject(id).await?;

    let threaded = ThreadService::new(&state.db)
        .serialize_one(comment, ThreadOptions::default())
        .await?;

    Ok((StatusCode::OK, Json(threaded.into_dto())))
}

/// Move a comment to the trash.
///
/// Soft-deletes the comment. Its approval state is preserved so a later
/// restore returns it to exactly the state it left.
///
/// # Access Control
/// - `Staff` - Only moderators can trash comments
///
/// # Returns
/// - `200 OK` - The trashed comment
/// - `401 Unauthorized` - Missing or invalid staff token
/// - `404 Not Found` - Comment not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/comments/{id}/trash",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Successfully trashed comment", body = CommentDto),
        (status = 401, description = "Missing or invalid staff token", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn trash_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Staff])?;

    let comment = ModerationService::new(&state.db).trash(id).await?;

    let threaded = ThreadService::new(&state.db)
        .serialize_one(comment, ThreadOptions::default())
        .await?;

    Ok((StatusCode::OK, Json(threaded.into_dto())))
}

/// Restore a comment from the trash.
///
/// Clears the trash flag, returning the comment to its pre-trash state.
///
/// # Access Control
/// - `Staff` - Only moderators can restore comments
///
/// # Returns
/// - `200 OK` - The restored comment
/// - `401 Unauthorized` - Missing or invalid staff token
/// - `404 Not Found` - Comment not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/comments/{id}/restore",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Successfully restored comment", body = CommentDto),
        (status = 401, description = "Missing or invalid staff token", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn restore_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Staff])?;

    let comment = ModerationService::new(&state.db).restore(id).await?;

    let threaded = ThreadService::new(&state.db)
        .serialize_one(comment, ThreadOptions::default())
        .await?;

    Ok((StatusCode::OK, Json(threaded.into_dto())))
}

/// Permanently delete a comment.
///
/// Removes the comment and, through cascade, all of its descendants and
/// their likes. This is irreversible; use trash for recoverable removal.
///
/// # Access Control
/// - `Staff` - Only moderators can delete comments
///
/// # Returns
/// - `204 No Content` - Successfully deleted
/// - `401 Unauthorized` - Missing or invalid staff token
/// - `404 Not Found` - Comment not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted comment"),
        (status = 401, description = "Missing or invalid staff token", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Staff])?;

    ModerationService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Like a comment.
///
/// Records a like under the supplied name. Each name may like a comment at
/// most once.
///
/// # Returns
/// - `201 Created` - Updated like count and names
/// - `404 Not Found` - Comment not found
/// - `409 Conflict` - This name has already liked the comment
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/comments/{id}/like",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    request_body = LikeDto,
    responses(
        (status = 201, description = "Successfully liked comment", body = LikesDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 409, description = "Already liked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn like_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<LikeDto>,
) -> Result<impl IntoResponse, AppError> {
    let summary = LikeService::new(&state.db)
        .like(id, payload.user_name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(LikesDto {
            count: summary.count,
            user_names: summary.user_names,
        }),
    ))
}

/// Remove a like from a comment.
///
/// # Returns
/// - `200 OK` - Updated like count and names
/// - `404 Not Found` - Comment not found, or this name never liked it
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/comments/{id}/unlike",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    request_body = LikeDto,
    responses(
        (status = 200, description = "Successfully removed like", body = LikesDto),
        (status = 404, description = "Comment or like not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unlike_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<LikeDto>,
) -> Result<impl IntoResponse, AppError> {
    let summary = LikeService::new(&state.db)
        .unlike(id, &payload.user_name)
        .await?;

    Ok((
        StatusCode::OK,
        Json(LikesDto {
            count: summary.count,
            user_names: summary.user_names,
        }),
    ))
}

/// Get the likes for a comment.
///
/// # Returns
/// - `200 OK` - Like count and the names behind it
/// - `404 Not Found` - Comment not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/comments/{id}/likes",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved likes", body = LikesDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comment_likes(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let summary = LikeService::new(&state.db).likes(id).await?;

    Ok((
        StatusCode::OK,
        Json(LikesDto {
            count: summary.count,
            user_names: summary.user_names,
        }),
    ))
}

/// Approve a batch of comments.
///
/// Sets every listed comment to approved in one statement. The response
/// counts only comments whose state actually changed; ids that were already
/// approved still end up approved but are not counted.
///
/// # Access Control
/// - `Staff` - Only moderators can bulk approve
///
/// # Returns
/// - `200 OK` - Number of comments that changed state
/// - `401 Unauthorized` - Missing or invalid staff token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/comments/bulk_approve",
    tag = COMMENT_TAG,
    request_body = BulkCommentIdsDto,
    responses(
        (status = 200, description = "Successfully approved comments", body = BulkChangedDto),
        (status = 401, description = "Missing or invalid staff token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn bulk_approve_comments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<BulkCommentIdsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Staff])?;

    let changed = ModerationService::new(&state.db)
        .bulk_approve(&payload.comment_ids)
        .await?;

    Ok((StatusCode::OK, Json(BulkChangedDto { changed })))
}

/// Reject a batch of comments.
///
/// Sets every listed comment back to pending in one statement. Counting
/// mirrors bulk approve: only comments whose state changed are counted.
///
/// # Access Control
/// - `Staff` - Only moderators can bulk reject
///
/// # Returns
/// - `200 OK` - Number of comments that changed state
/// - `401 Unauthorized` - Missing or invalid staff token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/comments/bulk_reject",
    tag = COMMENT_TAG,
    request_body = BulkCommentIdsDto,
    responses(
        (status = 200, description = "Successfully rejected comments", body = BulkChangedDto),
        (status = 401, description = "Missing or invalid staff token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn bulk_reject_comments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<BulkCommentIdsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Staff])?;

    let changed = ModerationService::new(&state.db)
        .bulk_reject(&payload.comment_ids)
        .await?;

    Ok((StatusCode::OK, Json(BulkChangedDto { changed })))
}
