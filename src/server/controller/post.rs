use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        post::{CreatePostDto, PostDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::post::{into_dto, PostRef},
        service::post::PostService,
        state::AppState,
    },
};

/// Tag for grouping post endpoints in OpenAPI documentation
pub static POST_TAG: &str = "post";

/// Create a new post.
///
/// Posts anchor comment threads; this endpoint exists so comments have
/// something to attach to. Slugs must be unique.
///
/// # Access Control
/// - `Staff` - Only moderators can create posts
///
/// # Returns
/// - `201 Created` - The created post
/// - `400 Bad Request` - Empty title or slug
/// - `401 Unauthorized` - Missing or invalid staff token
/// - `409 Conflict` - Slug already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = POST_TAG,
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Successfully created post", body = PostDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 401, description = "Missing or invalid staff token", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Staff])?;

    let post = PostService::new(&state.db)
        .create(payload.title, payload.slug)
        .await?;

    Ok((StatusCode::CREATED, Json(into_dto(post))))
}

/// List all posts.
///
/// # Returns
/// - `200 OK` - All posts, newest first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = POST_TAG,
    responses(
        (status = 200, description = "Successfully retrieved posts", body = Vec<PostDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_posts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let posts = PostService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(posts.into_iter().map(into_dto).collect::<Vec<_>>()),
    ))
}

/// Get a post by id or slug.
///
/// # Returns
/// - `200 OK` - The post
/// - `404 Not Found` - Post not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/posts/{id_or_slug}",
    tag = POST_TAG,
    params(
        ("id_or_slug" = String, Path, description = "Post id or slug")
    ),
    responses(
        (status = 200, description = "Successfully retrieved post", body = PostDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id_or_slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let post_ref = PostRef::parse(&id_or_slug);

    let post = PostService::new(&state.db).get(&post_ref).await?;

    Ok((StatusCode::OK, Json(into_dto(post))))
}
