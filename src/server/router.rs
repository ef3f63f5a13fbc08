use axum::{
    routing::{delete, get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{api, auth, comment, post as post_model},
    server::{
        controller::{
            auth::login,
            comment::{
                approve_comment, bulk_approve_comments, bulk_reject_comments, create_comment,
                delete_comment, get_comment_counts, get_comment_likes, get_comments, like_comment,
                reject_comment, reply_comment, restore_comment, trash_comment, unlike_comment,
            },
            post::{create_post, get_post, get_posts},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::controller::auth::login,
        crate::server::controller::comment::create_comment,
        crate::server::controller::comment::get_comments,
        crate::server::controller::comment::get_comment_counts,
        crate::server::controller::comment::reply_comment,
        crate::server::controller::comment::approve_comment,
        crate::server::controller::comment::reject_comment,
        crate::server::controller::comment::trash_comment,
        crate::server::controller::comment::restore_comment,
        crate::server::controller::comment::delete_comment,
        crate::server::controller::comment::like_comment,
        crate::server::controller::comment::unlike_comment,
        crate::server::controller::comment::get_comment_likes,
        crate::server::controller::comment::bulk_approve_comments,
        crate::server::controller::comment::bulk_reject_comments,
        crate::server::controller::post::create_post,
        crate::server::controller::post::get_posts,
        crate::server::controller::post::get_post,
    ),
    components(schemas(
        api::ErrorDto,
        auth::LoginDto,
        auth::TokenDto,
        comment::CommentDto,
        comment::CreateCommentDto,
        comment::ReplyCommentDto,
        comment::LikeDto,
        comment::LikesDto,
        comment::BulkCommentIdsDto,
        comment::BulkChangedDto,
        comment::CommentCountsDto,
        post_model::PostRefDto,
        post_model::PostDto,
        post_model::CreatePostDto,
    ))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/comments", post(create_comment).get(get_comments))
        .route("/api/comments/counts", get(get_comment_counts))
        .route("/api/comments/bulk_approve", post(bulk_approve_comments))
        .route("/api/comments/bulk_reject", post(bulk_reject_comments))
        .route("/api/comments/{id}", delete(delete_comment))
        .route("/api/comments/{id}/reply", post(reply_comment))
        .route("/api/comments/{id}/approve", post(approve_comment))
        .route("/api/comments/{id}/reject", post(reject_comment))
        .route("/api/comments/{id}/trash", post(trash_comment))
        .route("/api/comments/{id}/restore", post(restore_comment))
        .route("/api/comments/{id}/like", post(like_comment))
        .route("/api/comments/{id}/unlike", post(unlike_comment))
        .route("/api/comments/{id}/likes", get(get_comment_likes))
        .route("/api/posts", post(create_post).get(get_posts))
        .route("/api/posts/{id_or_slug}", get(get_post))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
